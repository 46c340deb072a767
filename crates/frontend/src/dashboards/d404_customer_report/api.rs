use crate::shared::api_utils::{get_json, reports_url};
use contracts::dashboards::d404_customer_report::{
    CustomerReportFilter, CustomerRow, CUSTOMER_REPORT_PATH,
};

pub async fn fetch_customer_report(filter: &CustomerReportFilter) -> Result<Vec<CustomerRow>, String> {
    get_json(
        &reports_url(CUSTOMER_REPORT_PATH, &filter.query_params()),
        "Erro ao buscar relatório de clientes",
    )
    .await
}
