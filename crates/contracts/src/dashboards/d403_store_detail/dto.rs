use crate::dashboards::d400_kpi_summary::KpiData;
use crate::dashboards::d401_sales_reports::{ReportContext, ReportData};
use crate::shared::DataRow;
use serde::{Deserialize, Serialize};

pub const STORE_DETAIL_PATH: &str = "/reports/store_detail";

/// Everything the single-store dashboard shows, fetched in one request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDetailData {
    /// KPIs restricted to the store
    #[serde(default)]
    pub kpis: Option<KpiData>,
    /// Revenue by month (mes_ano, faturamento)
    #[serde(default)]
    pub monthly_sales: Option<Vec<DataRow>>,
    /// Best-selling products of the store
    #[serde(default)]
    pub top_products: Option<Vec<DataRow>>,
}

impl StoreDetailData {
    pub fn monthly_report(&self, store_name: &str) -> Option<ReportData> {
        self.monthly_sales.as_ref().map(|data| ReportData {
            title: "Faturamento Mensal".to_string(),
            data: data.clone(),
            context: ReportContext::StoreMonthlySales,
            store_name: Some(store_name.to_string()),
        })
    }

    pub fn product_report(&self, store_name: &str) -> Option<ReportData> {
        self.top_products.as_ref().map(|data| ReportData {
            title: "Top 20 Produtos".to_string(),
            data: data.clone(),
            context: ReportContext::StoreTopProducts,
            store_name: Some(store_name.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_deserialize_as_none() {
        let detail: StoreDetailData =
            serde_json::from_str(r#"{"monthly_sales": [{"mes_ano": "2024-01", "faturamento": 10.0}]}"#)
                .unwrap();
        assert!(detail.kpis.is_none());
        assert!(detail.product_report("Loja").is_none());

        let monthly = detail.monthly_report("Loja").unwrap();
        assert_eq!(monthly.data.len(), 1);
        assert_eq!(monthly.context, ReportContext::StoreMonthlySales);
    }
}
