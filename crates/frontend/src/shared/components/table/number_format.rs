//! Number formatting for tables, charts and KPI cards (pt-BR conventions)

use serde_json::Value;

const NBSP: char = '\u{00a0}';

/// Column keys holding money values
pub fn is_money_key(key: &str) -> bool {
    key.contains("faturamento") || key.contains("ticket_medio")
}

/// Column keys holding durations in minutes
pub fn is_minutes_key(key: &str) -> bool {
    key.contains("tempo_entrega_min") || key.contains("tempo_medio_min")
}

/// Inserts `sep` every 3 digits from the right of an unsigned digit string
fn group_thousands(digits: &str, sep: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Formats with a fixed number of decimals, `.` as thousands separator and
/// `,` as decimal separator
///
/// # Examples
///
/// ```ignore
/// let formatted = format_decimal_pt_br(1234.567, 2);
/// assert_eq!(formatted, "1.234,57");
/// ```
pub fn format_decimal_pt_br(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    let grouped = group_thousands(integer_part, '.');
    match decimal_part {
        Some(d) => format!("{}{},{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Brazilian currency: `R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    let amount = format_decimal_pt_br(value, 2);
    match amount.strip_prefix('-') {
        Some(positive) => format!("-R${}{}", NBSP, positive),
        None => format!("R${}{}", NBSP, amount),
    }
}

/// Minutes with two decimals: `32.41 min`
pub fn format_minutes(value: f64) -> String {
    format!("{:.2} min", value)
}

/// Compact count with one fraction digit: `950`, `1,2 mil`, `3,4 mi`, `1 bi`
pub fn format_compact(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e3, "mil"), (1e6, "mi"), (1e9, "bi"), (1e12, "tri")];

    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    let round_one = |v: f64| (v * 10.0).round() / 10.0;

    let mut unit = UNITS.iter().rposition(|(scale, _)| abs >= *scale);
    let mut scaled = round_one(unit.map_or(abs, |i| abs / UNITS[i].0));
    // 999.96 rounds to 1000 and belongs to the next unit
    while scaled >= 1000.0 {
        let next = unit.map_or(0, |i| i + 1);
        if next >= UNITS.len() {
            break;
        }
        unit = Some(next);
        scaled = round_one(abs / UNITS[next].0);
    }

    let text = format!("{:.1}", scaled);
    let number = text.trim_end_matches('0').trim_end_matches('.').replace('.', ",");
    match unit {
        Some(i) => format!("{}{}{}{}", sign, number, NBSP, UNITS[i].1),
        None => format!("{}{}", sign, number),
    }
}

fn plain_number(value: &Value) -> String {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        Value::Number(n) => {
            let f = n.as_f64().unwrap_or(0.0);
            if f.fract() == 0.0 {
                format!("{}", f as i64)
            } else {
                format!("{:.2}", f)
            }
        }
        other => other.to_string(),
    }
}

/// Table cell text: money columns as currency, other fractional numbers with
/// two decimals, everything else as received
pub fn format_table_cell(key: &str, value: &Value) -> String {
    match value {
        Value::Number(n) if is_money_key(key) => format_currency(n.as_f64().unwrap_or(0.0)),
        Value::Number(_) => plain_number(value),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Chart tooltip/axis text for a metric value
pub fn format_metric(key: &str, value: f64) -> String {
    if is_money_key(key) {
        format_currency(value)
    } else if is_minutes_key(key) {
        format_minutes(value)
    } else if value.fract() != 0.0 {
        format!("{:.2}", value)
    } else {
        format!("{}", value as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56), "R$\u{a0}1.234,56");
        assert_eq!(format_currency(1234567.891), "R$\u{a0}1.234.567,89");
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
        assert_eq!(format_currency(-12.5), "-R$\u{a0}12,50");
    }

    #[test]
    fn test_format_decimal_pt_br() {
        assert_eq!(format_decimal_pt_br(1234.567, 0), "1.235");
        assert_eq!(format_decimal_pt_br(1234.567, 1), "1.234,6");
        assert_eq!(format_decimal_pt_br(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(950.0), "950");
        assert_eq!(format_compact(1000.0), "1\u{a0}mil");
        assert_eq!(format_compact(1234.0), "1,2\u{a0}mil");
        assert_eq!(format_compact(3_420_000.0), "3,4\u{a0}mi");
        assert_eq!(format_compact(999_960.0), "1\u{a0}mi");
        assert_eq!(format_compact(2_000_000_000.0), "2\u{a0}bi");
    }

    #[test]
    fn test_format_compact_keeps_unit_below_next_threshold() {
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(12.5), "12,5");
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(999.96), "1\u{a0}mil");
        assert_eq!(format_compact(950_000.0), "950\u{a0}mil");
        assert_eq!(format_compact(-1_500.0), "-1,5\u{a0}mil");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(32.4128), "32.41 min");
    }

    #[test]
    fn test_format_table_cell() {
        assert_eq!(format_table_cell("faturamento", &json!(1500)), "R$\u{a0}1.500,00");
        assert_eq!(format_table_cell("tempo_medio_min", &json!(12.346)), "12.35");
        assert_eq!(format_table_cell("total_vendas", &json!(42)), "42");
        assert_eq!(format_table_cell("total_vendas", &json!(42.0)), "42");
        assert_eq!(format_table_cell("store_name", &json!("Centro")), "Centro");
        assert_eq!(format_table_cell("x", &json!(null)), "");
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric("ticket_medio", 48.2), "R$\u{a0}48,20");
        assert_eq!(format_metric("tempo_entrega_min", 30.0), "30.00 min");
        assert_eq!(format_metric("total_vendas", 12.0), "12");
        assert_eq!(format_metric("total_entregas", 2.5), "2.50");
    }
}
