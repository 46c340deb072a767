use crate::shared::DataRow;
use serde::{Deserialize, Serialize};

/// Path of the KPI summary report, relative to the reports API base
pub const KPI_SUMMARY_PATH: &str = "/reports/kpi_summary";

/// Headline indicators shown in the KPI cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiData {
    /// Total revenue
    pub faturamento_total: f64,
    /// Average ticket per sale
    pub ticket_medio: f64,
    /// Number of sales
    pub total_vendas: f64,
    /// Average delivery time in minutes
    pub avg_tempo_entrega_min: f64,
}

impl KpiData {
    /// The KPI endpoint answers with an array; the first row is the summary.
    pub fn from_rows(rows: Vec<DataRow>) -> Result<Self, String> {
        let first = rows
            .into_iter()
            .next()
            .ok_or_else(|| "KPIs retornaram vazios".to_string())?;
        serde_json::from_value(serde_json::Value::Object(first))
            .map_err(|e| format!("Failed to parse KPIs: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_rows_takes_first_row() {
        let rows = vec![json!({
            "faturamento_total": 1500.5,
            "ticket_medio": 50.0,
            "total_vendas": 30,
            "avg_tempo_entrega_min": 32.4
        })
        .as_object()
        .cloned()
        .unwrap()];
        let kpi = KpiData::from_rows(rows).unwrap();
        assert_eq!(kpi.total_vendas, 30.0);
        assert_eq!(kpi.faturamento_total, 1500.5);
    }

    #[test]
    fn test_from_rows_empty_is_error() {
        assert_eq!(KpiData::from_rows(vec![]).unwrap_err(), "KPIs retornaram vazios");
    }
}
