use crate::dashboards::d401_sales_reports::{ReportContext, ReportData};
use crate::shared::{cell_text, DataRow};

pub const STORES_LIST_PATH: &str = "/data/stores_list";
pub const SALES_BY_MONTH_FOR_STORE_PATH: &str = "/reports/sales_by_month_for_store";
pub const TOP_PRODUCTS_BY_STORE_PATH: &str = "/reports/top_products_by_store";
pub const SALES_BY_CHANNEL_DETAIL_PATH: &str = "/reports/sales_by_channel_detail";

/// Store names of the store list rows, skipping rows without a name
pub fn store_names(rows: &[DataRow]) -> Vec<String> {
    rows.iter()
        .map(|row| cell_text(row, "store_name"))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Monthly revenue of one store, the first step of the funnel
pub fn monthly_report(store_name: &str, data: Vec<DataRow>) -> ReportData {
    ReportData {
        title: format!("Faturamento Mensal: {}", store_name),
        data,
        context: ReportContext::SalesByMonthForStore,
        store_name: Some(store_name.to_string()),
    }
}

/// Top products of one store in one month
pub fn product_report(store_name: &str, mes_ano: &str, data: Vec<DataRow>) -> ReportData {
    ReportData {
        title: format!("Top Produtos ({})", mes_ano),
        data,
        context: ReportContext::TopProductsDetail,
        store_name: Some(store_name.to_string()),
    }
}

/// Sales by channel of one store in one month
pub fn channel_report(store_name: &str, mes_ano: &str, data: Vec<DataRow>) -> ReportData {
    ReportData {
        title: format!("Vendas por Canal ({})", mes_ano),
        data,
        context: ReportContext::ChannelDetail,
        store_name: Some(store_name.to_string()),
    }
}
