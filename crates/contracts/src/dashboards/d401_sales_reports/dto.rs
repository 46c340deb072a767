use super::context::ReportContext;
use crate::shared::DataRow;
use serde::{Deserialize, Serialize};

pub const SALES_BY_STORE_PATH: &str = "/reports/sales_by_store";
pub const SALES_BY_CHANNEL_PATH: &str = "/reports/sales_by_channel";
pub const SALES_BY_MONTH_PATH: &str = "/reports/sales_by_month";
pub const TOP_PRODUCTS_BY_REVENUE_PATH: &str = "/reports/top_products_by_revenue";
pub const SALES_BY_PAYMENT_TYPE_PATH: &str = "/reports/sales_by_payment_type";
pub const DELIVERY_BY_NEIGHBORHOOD_PATH: &str = "/reports/delivery_by_neighborhood";
pub const SALES_BY_DAY_STACKED_PATH: &str = "/reports/sales_by_day_stacked";
pub const TOP_PRODUCTS_BY_CHANNEL_PATH: &str = "/reports/top_products_by_channel";

/// A report as displayed: the rows plus what produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub title: String,
    pub data: Vec<DataRow>,
    pub context: ReportContext,
    /// Store the report is scoped to, None for global reports
    pub store_name: Option<String>,
}

/// Everything needed to fetch one report and label the result
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    /// Path relative to the reports API base, e.g. "/reports/sales_by_month"
    pub path: String,
    /// Query string parameters, in order
    pub params: Vec<(String, String)>,
    pub title: String,
    pub context: ReportContext,
}

impl ReportRequest {
    /// Request for a global report; the context is derived from the endpoint.
    pub fn global(path: &str, title: &str, params: &[(&str, &str)]) -> Option<Self> {
        let context = ReportContext::from_endpoint(path)?;
        Some(Self {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            title: title.to_string(),
            context,
        })
    }

    /// Wraps the fetched rows into a global (store-less) report
    pub fn into_report(self, data: Vec<DataRow>) -> ReportData {
        ReportData {
            title: self.title,
            data,
            context: self.context,
            store_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_request_derives_context() {
        let request = ReportRequest::global(
            DELIVERY_BY_NEIGHBORHOOD_PATH,
            "Piores Entregas",
            &[("order_by_asc", "false")],
        )
        .unwrap();
        assert_eq!(request.context, ReportContext::DeliveryByNeighborhood);
        assert_eq!(request.params, vec![("order_by_asc".to_string(), "false".to_string())]);

        let report = request.into_report(vec![]);
        assert_eq!(report.title, "Piores Entregas");
        assert_eq!(report.store_name, None);
    }

    #[test]
    fn test_global_request_rejects_unknown_endpoint() {
        assert!(ReportRequest::global("/reports/nope", "x", &[]).is_none());
    }
}
