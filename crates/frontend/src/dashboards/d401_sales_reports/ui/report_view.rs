use crate::dashboards::store::use_dashboard_store;
use crate::shared::components::DataDisplay;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_sales_reports::ReportContext;
use leptos::prelude::*;

/// The global report selected in the menu, or the drill-down opened from it
#[component]
pub fn GlobalReportView() -> impl IntoView {
    let store = use_dashboard_store();

    let on_chart_click = Callback::new(move |(context, value): (ReportContext, String)| {
        store.fetch_drilldown_report(context, value);
    });

    view! {
        <PageFrame page_id="d401_sales_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <DataDisplay
                report=store.select(|s| s.global_report.clone())
                loading=store.select(|s| s.is_loading_global_report)
                on_chart_click=on_chart_click
            />
        </PageFrame>
    }
}
