use crate::shared::api_utils::{get_json, reports_url};
use contracts::dashboards::d401_sales_reports::ReportRequest;
use contracts::shared::DataRow;

/// Rows of a global or drill-down report
pub async fn fetch_report(request: &ReportRequest) -> Result<Vec<DataRow>, String> {
    get_json(
        &reports_url(&request.path, &request.params),
        "Erro ao buscar relatório global",
    )
    .await
}

/// Same request, reported as a drill-down failure
pub async fn fetch_drilldown(request: &ReportRequest) -> Result<Vec<DataRow>, String> {
    get_json(
        &reports_url(&request.path, &request.params),
        "Erro no drilldown global",
    )
    .await
}
