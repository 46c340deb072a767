//! Sortable table header cell
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Total de Vendas"
//!     sort_field="total_vendas"
//!     current_sort_field=Signal::derive(move || sort_field.get())
//!     sort_ascending=Signal::derive(move || sort_ascending.get())
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Field this column sorts by
    #[prop(into)]
    sort_field: String,

    /// Currently sorted field
    #[prop(into)]
    current_sort_field: Signal<String>,

    /// Current sort direction
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Called with `sort_field` on click
    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &sort_field_for_class)>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &sort_field_for_indicator,
                            sort_ascending.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
