use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const CUSTOMER_REPORT_PATH: &str = "/reports/customer_report";

/// One customer of the segmentation report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub nome_cliente: String,
    /// Phone or e-mail, unique per customer
    pub contato: String,
    /// Number of purchases
    pub total_vendas: i64,
    /// Date of the last purchase (YYYY-MM-DD, optionally with a time part)
    pub ultima_compra_data: String,
}

/// Filters applied by the customer report switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerReportFilter {
    /// true: customers who bought least first
    pub order_by_asc: bool,
    /// true: only customers with 3+ purchases and none in the last 30 days
    pub at_risk_only: bool,
}

impl CustomerReportFilter {
    pub fn query_params(&self) -> Vec<(String, String)> {
        vec![
            ("order_by_asc".to_string(), self.order_by_asc.to_string()),
            ("at_risk_only".to_string(), self.at_risk_only.to_string()),
        ]
    }
}

impl CustomerRow {
    fn last_purchase_date(&self) -> Option<NaiveDate> {
        let date_part = self.ultima_compra_data.get(..10)?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }

    /// Column comparison used by the sortable table headers
    pub fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "nome_cliente" => self.nome_cliente.cmp(&other.nome_cliente),
            "contato" => self.contato.cmp(&other.contato),
            "total_vendas" => self.total_vendas.cmp(&other.total_vendas),
            "ultima_compra_data" => self.last_purchase_date().cmp(&other.last_purchase_date()),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, total: i64, last: &str) -> CustomerRow {
        CustomerRow {
            nome_cliente: name.to_string(),
            contato: format!("{}@mail.com", name),
            total_vendas: total,
            ultima_compra_data: last.to_string(),
        }
    }

    #[test]
    fn test_compare_by_date_ignores_time_part() {
        let a = customer("ana", 3, "2024-01-10T12:00:00");
        let b = customer("bia", 1, "2023-12-31");
        assert_eq!(a.compare_by_field(&b, "ultima_compra_data"), Ordering::Greater);
        assert_eq!(a.compare_by_field(&b, "total_vendas"), Ordering::Greater);
        assert_eq!(a.compare_by_field(&b, "nome_cliente"), Ordering::Less);
        assert_eq!(a.compare_by_field(&b, "unknown"), Ordering::Equal);
    }

    #[test]
    fn test_filter_query_params() {
        let filter = CustomerReportFilter {
            order_by_asc: true,
            at_risk_only: false,
        };
        assert_eq!(
            filter.query_params(),
            vec![
                ("order_by_asc".to_string(), "true".to_string()),
                ("at_risk_only".to_string(), "false".to_string()),
            ]
        );
    }
}
