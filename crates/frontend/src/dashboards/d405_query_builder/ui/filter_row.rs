use crate::dashboards::d405_query_builder::state::{FilterDraft, QueryStore};
use crate::shared::icons::icon;
use contracts::dashboards::d405_query_builder::{DIMENSION_OPTIONS, FILTER_OPERATORS};
use leptos::prelude::*;
use thaw::*;

/// One `field operator value` filter line
#[component]
pub fn FilterRow(draft: FilterDraft, query: QueryStore) -> impl IntoView {
    let id = draft.id;
    let field = RwSignal::new(draft.field);
    let operator = RwSignal::new(draft.operator);
    let value = RwSignal::new(draft.value);

    Effect::new(move |_| {
        let (f, o, v) = (field.get(), operator.get(), value.get());
        query.update_filter(id, move |d| {
            d.field = f;
            d.operator = o;
            d.value = v;
        });
    });

    view! {
        <div class="query-builder__filter">
            <Select value=field size=SelectSize::Small>
                {DIMENSION_OPTIONS
                    .iter()
                    .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                    .collect_view()}
            </Select>
            <Select value=operator size=SelectSize::Small>
                {FILTER_OPERATORS
                    .iter()
                    .map(|op| view! { <option value=*op>{*op}</option> })
                    .collect_view()}
            </Select>
            <Input value=value placeholder="Valor" size=InputSize::Small />
            <button
                class="query-builder__icon-btn"
                title="Remover filtro"
                on:click=move |_| query.remove_filter(id)
            >
                {icon("x")}
            </button>
        </div>
    }
}
