use super::filter_row::FilterRow;
use crate::dashboards::d405_query_builder::state::QueryStore;
use crate::dashboards::store::use_dashboard_store;
use crate::shared::components::sql_viewer::ExecutedSql;
use crate::shared::components::{DataDisplay, ErrorBanner};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::dashboards::d401_sales_reports::{ReportContext, ReportData};
use contracts::dashboards::d405_query_builder::{DIMENSION_OPTIONS, METRIC_OPTIONS};
use leptos::prelude::*;
use thaw::*;

/// Ad-hoc analysis: pick metrics and dimensions, add filters, run
#[component]
pub fn QueryBuilderView() -> impl IntoView {
    let store = use_dashboard_store();
    let query = use_context::<QueryStore>().expect("QueryStore not found");

    let report = Signal::derive(move || {
        query.response.with(|r| {
            r.as_ref().map(|response| ReportData {
                title: "Resultados".to_string(),
                data: response.data.clone(),
                context: ReportContext::AdHocQuery,
                store_name: None,
            })
        })
    });
    let sql = Signal::derive(move || query.response.with(|r| r.as_ref().map(ExecutedSql::from)));
    let has_result = Signal::derive(move || query.is_loading.get() || query.response.with(|r| r.is_some()));

    view! {
        <PageFrame page_id="d405_query_builder--usecase" category=PAGE_CAT_USECASE class="query-builder">
            <h2 class="page__title">"Construtor de Análises"</h2>

            <div class="query-builder__section">
                <h4>"1. Escolha suas Métricas (O que medir?)"</h4>
                <CheckboxGroup value=query.metrics>
                    <div class="query-builder__options">
                        {METRIC_OPTIONS
                            .iter()
                            .map(|opt| view! { <Checkbox value=opt.value label=opt.label /> })
                            .collect_view()}
                    </div>
                </CheckboxGroup>
            </div>

            <div class="query-builder__section">
                <h4>"2. Escolha suas Dimensões (Como agrupar?)"</h4>
                <CheckboxGroup value=query.dimensions>
                    <div class="query-builder__options">
                        {DIMENSION_OPTIONS
                            .iter()
                            .map(|opt| view! { <Checkbox value=opt.value label=opt.label /> })
                            .collect_view()}
                    </div>
                </CheckboxGroup>
            </div>

            <div class="query-builder__section">
                <h4>"3. Filtros"</h4>
                <For
                    each=move || query.filters.get()
                    key=|draft| draft.id
                    children=move |draft| view! { <FilterRow draft=draft query=query /> }
                />
                <Button size=ButtonSize::Small on_click=move |_| query.add_filter()>
                    {icon("plus")}
                    " Adicionar filtro"
                </Button>
            </div>

            <div class="query-builder__section query-builder__limit">
                <h4>"4. Limite de linhas"</h4>
                <Input value=query.limit input_type=InputType::Number />
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || !query.can_run())
                on_click=move |_| query.run_query(store)
            >
                {move || if query.is_loading.get() { "Consultando..." } else { "Rodar Consulta" }}
            </Button>

            <ErrorBanner error=store.error() />

            <Show when=move || has_result.get()>
                <DataDisplay report=report loading=query.is_loading sql=sql />
            </Show>
        </PageFrame>
    }
}
