use super::sql_viewer::{ExecutedSql, SqlViewer};
use super::table::DataTable;
use crate::shared::chart::ReportChart;
use contracts::dashboards::d401_sales_reports::{ReportContext, ReportData};
use leptos::prelude::*;
use thaw::*;

const TAB_CHART: &str = "chart";
const TAB_TABLE: &str = "table";

/// Report widget: title, chart and table tabs, optional executed SQL.
///
/// The chart shows the first rows only; the table always shows everything.
#[component]
pub fn DataDisplay(
    #[prop(into)] report: Signal<Option<ReportData>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional, into)] sql: Signal<Option<ExecutedSql>>,
    #[prop(optional)] on_chart_click: Option<Callback<(ReportContext, String)>>,
    #[prop(optional, default = 400)] chart_height: u32,
) -> impl IntoView {
    let selected_tab = RwSignal::new(TAB_CHART.to_string());
    let rows = Signal::derive(move || report.with(|r| r.as_ref().map(|r| r.data.clone()).unwrap_or_default()));
    let title = move || report.with(|r| r.as_ref().map(|r| r.title.clone()).unwrap_or_default());

    view! {
        <div class="data-display">
            {move || {
                if loading.get() {
                    view! {
                        <div class="data-display__loading">
                            <Spinner />
                            <span>"Carregando dados..."</span>
                        </div>
                    }
                        .into_any()
                } else if report.with(|r| r.is_none()) {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <div class="data-display__body">
                            <h3 class="data-display__title">{title}</h3>
                            <TabList selected_value=selected_tab>
                                <Tab value=TAB_CHART>"Gráfico (Top 15)"</Tab>
                                <Tab value=TAB_TABLE>"Tabela de Dados (Completa)"</Tab>
                            </TabList>
                            <div class="data-display__panel">
                                <Show
                                    when=move || selected_tab.get() == TAB_CHART
                                    fallback=move || view! { <DataTable rows=rows /> }
                                >
                                    <ReportChart
                                        report=report
                                        on_click=on_chart_click
                                        height=chart_height
                                    />
                                </Show>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
            {move || sql.get().map(|sql| view! { <SqlViewer sql=sql /> })}
        </div>
    }
}
