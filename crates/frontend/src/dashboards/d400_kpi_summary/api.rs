use crate::shared::api_utils::{get_json, reports_url};
use contracts::dashboards::d400_kpi_summary::{KpiData, KPI_SUMMARY_PATH};
use contracts::shared::DataRow;

/// Global KPI summary; the endpoint answers with a one-row array
pub async fn fetch_kpi_summary() -> Result<KpiData, String> {
    let rows: Vec<DataRow> = get_json(&reports_url(KPI_SUMMARY_PATH, &[]), "Erro ao buscar KPIs").await?;
    KpiData::from_rows(rows)
}
