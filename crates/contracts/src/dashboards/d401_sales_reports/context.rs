use super::dto::ReportRequest;
use serde::{Deserialize, Serialize};

/// Identifies which report shape produced the data on screen.
///
/// The context decides how the data is charted and what a click on a chart
/// element drills down into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportContext {
    SalesByStore,
    SalesByChannel,
    SalesByMonth,
    TopProductsByRevenue,
    SalesByPaymentType,
    DeliveryByNeighborhood,
    /// Daily revenue of one month, stacked by channel
    DailyStackedHistogram,
    /// Top products of one channel
    TopProducts,
    SalesByMonthForStore,
    TopProductsDetail,
    ChannelDetail,
    StoreMonthlySales,
    StoreTopProducts,
    AdHocQuery,
}

/// Where a click on a chart element leads
#[derive(Debug, Clone, PartialEq)]
pub enum Drilldown {
    /// Replace the global report with a more granular one
    Report(ReportRequest),
    /// Open the dashboard of a single store
    StoreDetail { store_name: String },
    /// Load product and channel details of a month for the selected store
    StoreMonthDetail { mes_ano: String },
}

impl ReportContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportContext::SalesByStore => "sales_by_store",
            ReportContext::SalesByChannel => "sales_by_channel",
            ReportContext::SalesByMonth => "sales_by_month",
            ReportContext::TopProductsByRevenue => "top_products_by_revenue",
            ReportContext::SalesByPaymentType => "sales_by_payment_type",
            ReportContext::DeliveryByNeighborhood => "delivery_by_neighborhood",
            ReportContext::DailyStackedHistogram => "daily_stacked_histogram",
            ReportContext::TopProducts => "top_products",
            ReportContext::SalesByMonthForStore => "sales_by_month_for_store",
            ReportContext::TopProductsDetail => "top_products_detail",
            ReportContext::ChannelDetail => "channel_detail",
            ReportContext::StoreMonthlySales => "store_monthly_sales",
            ReportContext::StoreTopProducts => "store_top_products",
            ReportContext::AdHocQuery => "ad_hoc_query",
        }
    }

    /// Context of a report identified by its endpoint's last path segment
    pub fn from_endpoint(endpoint: &str) -> Option<Self> {
        let segment = endpoint.trim_end_matches('/').rsplit('/').next()?;
        let context = match segment {
            "sales_by_store" => ReportContext::SalesByStore,
            "sales_by_channel" => ReportContext::SalesByChannel,
            "sales_by_month" => ReportContext::SalesByMonth,
            "top_products_by_revenue" => ReportContext::TopProductsByRevenue,
            "sales_by_payment_type" => ReportContext::SalesByPaymentType,
            "delivery_by_neighborhood" => ReportContext::DeliveryByNeighborhood,
            "sales_by_day_stacked" => ReportContext::DailyStackedHistogram,
            "top_products_by_channel" => ReportContext::TopProducts,
            "sales_by_month_for_store" => ReportContext::SalesByMonthForStore,
            "top_products_by_store" => ReportContext::TopProductsDetail,
            "sales_by_channel_detail" => ReportContext::ChannelDetail,
            _ => return None,
        };
        Some(context)
    }

    pub fn is_clickable(&self) -> bool {
        matches!(
            self,
            ReportContext::SalesByMonth
                | ReportContext::SalesByChannel
                | ReportContext::SalesByStore
                | ReportContext::SalesByMonthForStore
        )
    }

    /// Resolves a click on the chart element labelled `value`
    pub fn drilldown(&self, value: &str) -> Option<Drilldown> {
        match self {
            ReportContext::SalesByMonth => Some(Drilldown::Report(ReportRequest {
                path: super::dto::SALES_BY_DAY_STACKED_PATH.to_string(),
                params: vec![("mes_ano".to_string(), value.to_string())],
                title: format!("Faturamento Diário ({})", value),
                context: ReportContext::DailyStackedHistogram,
            })),
            ReportContext::SalesByChannel => Some(Drilldown::Report(ReportRequest {
                path: super::dto::TOP_PRODUCTS_BY_CHANNEL_PATH.to_string(),
                params: vec![("channel_name".to_string(), value.to_string())],
                title: format!("Top Produtos (Canal: {})", value),
                context: ReportContext::TopProducts,
            })),
            ReportContext::SalesByStore => Some(Drilldown::StoreDetail {
                store_name: value.to_string(),
            }),
            ReportContext::SalesByMonthForStore => Some(Drilldown::StoreMonthDetail {
                mes_ano: value.to_string(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_endpoint_uses_last_segment() {
        assert_eq!(
            ReportContext::from_endpoint("/reports/sales_by_channel"),
            Some(ReportContext::SalesByChannel)
        );
        assert_eq!(
            ReportContext::from_endpoint("/reports/delivery_by_neighborhood/"),
            Some(ReportContext::DeliveryByNeighborhood)
        );
        assert_eq!(ReportContext::from_endpoint("/reports/unknown"), None);
    }

    #[test]
    fn test_month_drills_into_daily_stacked() {
        let Some(Drilldown::Report(request)) = ReportContext::SalesByMonth.drilldown("2024-03")
        else {
            panic!("expected report drilldown");
        };
        assert_eq!(request.path, "/reports/sales_by_day_stacked");
        assert_eq!(request.params, vec![("mes_ano".to_string(), "2024-03".to_string())]);
        assert_eq!(request.title, "Faturamento Diário (2024-03)");
        assert_eq!(request.context, ReportContext::DailyStackedHistogram);
    }

    #[test]
    fn test_channel_drills_into_top_products() {
        let Some(Drilldown::Report(request)) = ReportContext::SalesByChannel.drilldown("iFood")
        else {
            panic!("expected report drilldown");
        };
        assert_eq!(request.path, "/reports/top_products_by_channel");
        assert_eq!(request.title, "Top Produtos (Canal: iFood)");
        assert_eq!(request.context, ReportContext::TopProducts);
    }

    #[test]
    fn test_store_contexts() {
        assert_eq!(
            ReportContext::SalesByStore.drilldown("Loja Centro"),
            Some(Drilldown::StoreDetail {
                store_name: "Loja Centro".to_string()
            })
        );
        assert_eq!(
            ReportContext::SalesByMonthForStore.drilldown("2024-01"),
            Some(Drilldown::StoreMonthDetail {
                mes_ano: "2024-01".to_string()
            })
        );
    }

    #[test]
    fn test_leaf_contexts_are_not_clickable() {
        for context in [
            ReportContext::DailyStackedHistogram,
            ReportContext::TopProducts,
            ReportContext::TopProductsDetail,
            ReportContext::ChannelDetail,
            ReportContext::AdHocQuery,
        ] {
            assert!(!context.is_clickable());
            assert_eq!(context.drilldown("x"), None);
        }
    }

    #[test]
    fn test_serde_tag_matches_as_str() {
        let json = serde_json::to_string(&ReportContext::SalesByMonthForStore).unwrap();
        assert_eq!(json, "\"sales_by_month_for_store\"");
        assert_eq!(ReportContext::SalesByMonthForStore.as_str(), "sales_by_month_for_store");
    }
}
