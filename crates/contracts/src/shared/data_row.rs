//! Untyped report rows.
//!
//! Most report endpoints return an array of flat JSON objects whose columns
//! depend on the report. Rows keep the column order the API sent.

use serde_json::{Map, Value};
use std::cmp::Ordering;

/// One row of a report: column name -> value
pub type DataRow = Map<String, Value>;

/// Column keys of a report, taken from the first row
pub fn columns(rows: &[DataRow]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Numeric view of a cell (None for missing or non-numeric values)
pub fn cell_f64(row: &DataRow, key: &str) -> Option<f64> {
    row.get(key).and_then(Value::as_f64)
}

/// Text view of a cell, suitable for labels and chart categories
pub fn cell_text(row: &DataRow, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Compares two cells: numbers numerically, strings lexicographically,
/// every other combination is considered equal.
pub fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

/// Stable sort of rows by one column
pub fn sort_rows(rows: &mut [DataRow], key: &str, ascending: bool) {
    rows.sort_by(|a, b| {
        let cmp = compare_cells(a.get(key), b.get(key));
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Table header for a column key: `tempo_medio_min` -> `TEMPO MEDIO MIN`
pub fn header_label(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}
