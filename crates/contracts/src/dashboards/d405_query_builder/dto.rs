use crate::shared::DataRow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Path of the free-form query endpoint, relative to the API host
pub const QUERY_PATH: &str = "/api/v1/query";

/// One `field operator value` restriction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub operator: String,
    pub value: serde_json::Value,
}

/// Body of the query endpoint; metric and dimension entries are SQL
/// fragments the API accepts verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub metrics: Vec<String>,
    pub dimensions: Vec<String>,
    pub filters: Vec<Filter>,
    /// column -> "ASC" | "DESC"
    pub order_by: BTreeMap<String, String>,
    pub limit: u32,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            metrics: vec![METRIC_OPTIONS[0].value.to_string()],
            dimensions: vec!["channel_name".to_string()],
            filters: Vec::new(),
            order_by: BTreeMap::new(),
            limit: 100,
        }
    }
}

/// Result of an ad-hoc query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// SQL the API generated and ran
    pub query_sql: String,
    pub params: Vec<serde_json::Value>,
    pub count: u64,
    pub data: Vec<DataRow>,
}

/// Selectable metric or dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const METRIC_OPTIONS: &[QueryOption] = &[
    QueryOption {
        label: "Total de Vendas (#)",
        value: "COUNT(DISTINCT sale_id) as total_vendas",
    },
    QueryOption {
        label: "Faturamento Total (R$)",
        value: "SUM(sale_total_amount) as faturamento",
    },
    QueryOption {
        label: "Ticket Médio (R$)",
        value: "AVG(sale_total_amount) as ticket_medio",
    },
    QueryOption {
        label: "Tempo Médio de Entrega (min)",
        value: "AVG(delivery_seconds / 60) as tempo_entrega_min",
    },
];

pub const DIMENSION_OPTIONS: &[QueryOption] = &[
    QueryOption { label: "Canal", value: "channel_name" },
    QueryOption { label: "Loja", value: "store_name" },
    QueryOption { label: "Categoria do Produto", value: "product_category" },
    QueryOption { label: "Produto", value: "product_name" },
    QueryOption { label: "Bairro de Entrega", value: "delivery_neighborhood" },
];

/// Filter operators offered by the query builder
pub const FILTER_OPERATORS: &[&str] = &["=", "!=", ">", ">=", "<", "<=", "LIKE"];

/// Orders a set of selected option values the way the options are listed
pub fn ordered_selection<'a, I>(options: &[QueryOption], selected: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let selected: Vec<&String> = selected.into_iter().collect();
    options
        .iter()
        .filter(|opt| selected.iter().any(|s| s.as_str() == opt.value))
        .map(|opt| opt.value.to_string())
        .collect()
}

/// Filter value as typed by the user: numbers stay numbers, the rest is text
pub fn parse_filter_value(raw: &str) -> serde_json::Value {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return serde_json::Value::from(n);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.is_finite() {
            return serde_json::Value::from(f);
        }
    }
    serde_json::Value::String(trimmed.to_string())
}
