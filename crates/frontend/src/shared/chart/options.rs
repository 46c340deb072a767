//! ECharts option building for report data
//!
//! Everything here is plain data: the option object is assembled as a
//! `serde_json::Value` and handed to the JS bridge in [`super::echarts`].

use crate::shared::components::table::number_format::{format_metric, is_minutes_key, is_money_key};
use contracts::dashboards::d401_sales_reports::{ReportContext, ReportData};
use contracts::shared::{cell_f64, cell_text, columns, DataRow};
use serde_json::{json, Value};

/// Substrings marking a column as a metric
pub const METRIC_MARKERS: &[&str] = &[
    "faturamento",
    "total_vendas",
    "ticket_medio",
    "tempo_entrega_min",
    "tempo_medio_min",
    "total_entregas",
];

/// Rows beyond this are only shown in the table
pub const CHART_ROW_LIMIT: usize = 15;

/// Reports with at most this many rows are drawn as a pie
pub const PIE_MAX_ROWS: usize = 7;

pub const PALETTE: [&str; 7] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272", "#fc8452",
];

const SAVE_AS_IMAGE: &str = "Salvar Imagem";

const DAY_KEY: &str = "data_venda";
const SERIES_KEY: &str = "channel_name";

/// Key inside `yAxis.axisLabel` naming the label format; the bridge swaps it
/// for a JS formatter
pub const AXIS_FORMAT_KEY: &str = "valueFormat";

/// How value-axis labels are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisFormat {
    Money,
    Minutes,
    Number,
}

impl AxisFormat {
    pub fn for_metric(metric: &str) -> Self {
        if is_money_key(metric) {
            Self::Money
        } else if is_minutes_key(metric) {
            Self::Minutes
        } else {
            Self::Number
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Money => "money",
            Self::Minutes => "minutes",
            Self::Number => "number",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "money" => Self::Money,
            "minutes" => Self::Minutes,
            _ => Self::Number,
        }
    }
}

fn value_axis(metric: &str) -> Value {
    json!({
        "type": "value",
        "axisLabel": { AXIS_FORMAT_KEY: AxisFormat::for_metric(metric).as_str() },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
    StackedBar,
}

pub fn is_metric_key(key: &str) -> bool {
    METRIC_MARKERS.iter().any(|marker| key.contains(marker))
}

/// `(dimension, metric)`: the first non-metric and the first metric column
pub fn chart_keys(rows: &[DataRow]) -> Option<(String, String)> {
    let keys = columns(rows);
    let dimension = keys.iter().find(|k| !is_metric_key(k))?.clone();
    let metric = keys.iter().find(|k| is_metric_key(k))?.clone();
    Some((dimension, metric))
}

pub fn chart_kind(context: ReportContext, charted_rows: usize) -> ChartKind {
    if context == ReportContext::DailyStackedHistogram {
        ChartKind::StackedBar
    } else if charted_rows <= PIE_MAX_ROWS {
        ChartKind::Pie
    } else {
        ChartKind::Bar
    }
}

/// Option object for a report, None when the rows cannot be charted. The
/// stacked histogram has one row per day and channel, so it is never capped.
pub fn build_option(report: &ReportData) -> Option<Value> {
    let rows = if report.context == ReportContext::DailyStackedHistogram {
        &report.data[..]
    } else {
        &report.data[..report.data.len().min(CHART_ROW_LIMIT)]
    };
    let (dimension, metric) = chart_keys(rows)?;

    let option = match chart_kind(report.context, rows.len()) {
        ChartKind::StackedBar => stacked_bar_option(rows, &metric),
        ChartKind::Pie => pie_option(rows, &dimension, &metric),
        ChartKind::Bar => bar_option(rows, &dimension, &metric),
    };
    Some(option)
}

fn data_point(metric: &str, value: f64, name: Option<&str>) -> Value {
    let mut point = json!({
        "value": value,
        "formatted": format_metric(metric, value),
    });
    if let Some(name) = name {
        point["name"] = Value::String(name.to_string());
    }
    point
}

fn pie_option(rows: &[DataRow], dimension: &str, metric: &str) -> Value {
    let data: Vec<Value> = rows
        .iter()
        .map(|row| {
            let name = cell_text(row, dimension);
            data_point(metric, cell_f64(row, metric).unwrap_or(0.0), Some(&name))
        })
        .collect();

    json!({
        "color": PALETTE,
        "title": { "text": format!("Distribuição por {}", dimension), "left": "center" },
        "tooltip": { "trigger": "item" },
        "legend": { "type": "scroll", "orient": "vertical", "left": "left", "top": 40 },
        "toolbox": { "feature": { "saveAsImage": { "title": SAVE_AS_IMAGE } } },
        "series": [{
            "name": metric,
            "type": "pie",
            "radius": "50%",
            "center": ["55%", "55%"],
            "data": data,
            "emphasis": {
                "itemStyle": { "shadowBlur": 10, "shadowOffsetX": 0, "shadowColor": "rgba(0, 0, 0, 0.5)" }
            },
        }],
    })
}

fn bar_option(rows: &[DataRow], dimension: &str, metric: &str) -> Value {
    let categories: Vec<String> = rows.iter().map(|row| cell_text(row, dimension)).collect();
    let data: Vec<Value> = rows
        .iter()
        .map(|row| data_point(metric, cell_f64(row, metric).unwrap_or(0.0), None))
        .collect();

    json!({
        "color": PALETTE,
        "tooltip": { "trigger": "axis", "axisPointer": { "type": "shadow" } },
        "grid": { "left": 80, "right": 24, "bottom": 90, "containLabel": true },
        "xAxis": {
            "type": "category",
            "data": categories,
            "axisLabel": { "rotate": 30, "interval": 0 },
        },
        "yAxis": value_axis(metric),
        "toolbox": { "feature": { "saveAsImage": { "title": SAVE_AS_IMAGE } } },
        "dataZoom": [{ "type": "inside" }, { "type": "slider", "bottom": 10 }],
        "series": [{ "name": metric, "type": "bar", "colorBy": "data", "data": data }],
    })
}

/// x = distinct days in row order, one stacked series per channel; a
/// channel without sales on a day contributes 0
fn stacked_bar_option(rows: &[DataRow], metric: &str) -> Value {
    let mut days: Vec<String> = Vec::new();
    let mut channels: Vec<String> = Vec::new();
    for row in rows {
        let day = cell_text(row, DAY_KEY);
        if !days.contains(&day) {
            days.push(day);
        }
        let channel = cell_text(row, SERIES_KEY);
        if !channels.contains(&channel) {
            channels.push(channel);
        }
    }

    let series: Vec<Value> = channels
        .iter()
        .map(|channel| {
            let data: Vec<Value> = days
                .iter()
                .map(|day| {
                    let value = rows
                        .iter()
                        .find(|row| {
                            &cell_text(row, DAY_KEY) == day && &cell_text(row, SERIES_KEY) == channel
                        })
                        .and_then(|row| cell_f64(row, metric))
                        .unwrap_or(0.0);
                    data_point(metric, value, None)
                })
                .collect();
            json!({ "name": channel, "type": "bar", "stack": "total", "data": data })
        })
        .collect();

    json!({
        "color": PALETTE,
        "tooltip": { "trigger": "axis", "axisPointer": { "type": "shadow" } },
        "legend": { "type": "scroll", "top": 0 },
        "toolbox": { "feature": { "saveAsImage": { "title": SAVE_AS_IMAGE } } },
        "grid": { "left": 80, "right": 24, "top": 40, "bottom": 40, "containLabel": true },
        "xAxis": { "type": "category", "data": days },
        "yAxis": value_axis(metric),
        "series": series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: Vec<Value>) -> Vec<DataRow> {
        values.into_iter().filter_map(|v| v.as_object().cloned()).collect()
    }

    fn report(context: ReportContext, data: Vec<DataRow>) -> ReportData {
        ReportData {
            title: "t".to_string(),
            data,
            context,
            store_name: None,
        }
    }

    #[test]
    fn test_chart_keys_pick_first_of_each_kind() {
        let data = rows(vec![json!({
            "faturamento": 10.0,
            "channel_name": "iFood",
            "total_vendas": 3,
            "mes_ano": "2024-01"
        })]);
        assert_eq!(
            chart_keys(&data),
            Some(("channel_name".to_string(), "faturamento".to_string()))
        );
    }

    #[test]
    fn test_no_chart_without_metric_or_dimension() {
        let only_dims = rows(vec![json!({"store_name": "A", "cidade": "B"})]);
        assert_eq!(chart_keys(&only_dims), None);
        let only_metrics = rows(vec![json!({"faturamento": 1.0})]);
        assert!(build_option(&report(ReportContext::SalesByStore, only_metrics)).is_none());
        assert!(build_option(&report(ReportContext::SalesByStore, vec![])).is_none());
    }

    #[test]
    fn test_small_reports_are_pies() {
        let data = rows(vec![
            json!({"channel_name": "iFood", "faturamento": 100.0}),
            json!({"channel_name": "Balcão", "faturamento": 50.5}),
        ]);
        let option = build_option(&report(ReportContext::SalesByChannel, data)).unwrap();
        assert_eq!(option["series"][0]["type"], "pie");
        assert_eq!(option["title"]["text"], "Distribuição por channel_name");
        assert_eq!(option["series"][0]["data"][1]["name"], "Balcão");
        assert_eq!(option["series"][0]["data"][1]["formatted"], "R$\u{a0}50,50");
    }

    #[test]
    fn test_large_reports_are_bars_limited_to_fifteen_rows() {
        let data = rows(
            (0..20)
                .map(|i| json!({"product_name": format!("p{}", i), "total_vendas": 20 - i}))
                .collect(),
        );
        let option = build_option(&report(ReportContext::TopProductsByRevenue, data)).unwrap();
        assert_eq!(option["series"][0]["type"], "bar");
        assert_eq!(option["xAxis"]["data"].as_array().unwrap().len(), CHART_ROW_LIMIT);
        assert!(option["dataZoom"].is_array());
        assert_eq!(chart_kind(ReportContext::SalesByMonth, 8), ChartKind::Bar);
        assert_eq!(chart_kind(ReportContext::SalesByMonth, 7), ChartKind::Pie);
    }

    #[test]
    fn test_stacked_histogram_charts_whole_month() {
        let channels = ["iFood", "Balcão", "Rappi"];
        let data = rows(
            (1..=30)
                .flat_map(|day| {
                    channels.iter().map(move |channel| {
                        json!({
                            "data_venda": format!("2024-06-{:02}", day),
                            "channel_name": channel,
                            "faturamento": day as f64,
                        })
                    })
                })
                .collect(),
        );
        assert_eq!(data.len(), 90);
        let option = build_option(&report(ReportContext::DailyStackedHistogram, data)).unwrap();
        assert_eq!(option["xAxis"]["data"].as_array().unwrap().len(), 30);
        assert_eq!(option["xAxis"]["data"][29], "2024-06-30");
        let series = option["series"].as_array().unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series[2]["data"][29]["value"], 30.0);
    }

    #[test]
    fn test_value_axis_format_follows_metric() {
        let money = rows(
            (0..10)
                .map(|i| json!({"store_name": format!("s{}", i), "faturamento": i as f64}))
                .collect(),
        );
        let option = build_option(&report(ReportContext::SalesByStore, money)).unwrap();
        assert_eq!(option["yAxis"]["axisLabel"][AXIS_FORMAT_KEY], "money");

        let minutes = rows(
            (0..10)
                .map(|i| json!({"bairro": format!("b{}", i), "tempo_medio_min": 30.5}))
                .collect(),
        );
        let option = build_option(&report(ReportContext::DeliveryByNeighborhood, minutes)).unwrap();
        assert_eq!(option["yAxis"]["axisLabel"][AXIS_FORMAT_KEY], "minutes");

        assert_eq!(AxisFormat::for_metric("total_vendas"), AxisFormat::Number);
        assert_eq!(AxisFormat::for_metric("ticket_medio"), AxisFormat::Money);
        assert_eq!(AxisFormat::parse(AxisFormat::Minutes.as_str()), AxisFormat::Minutes);
    }

    #[test]
    fn test_stacked_histogram_fills_missing_channels_with_zero() {
        let data = rows(vec![
            json!({"data_venda": "2024-05-01", "channel_name": "iFood", "faturamento": 10.0}),
            json!({"data_venda": "2024-05-01", "channel_name": "Balcão", "faturamento": 5.0}),
            json!({"data_venda": "2024-05-02", "channel_name": "iFood", "faturamento": 7.0}),
        ]);
        let option = build_option(&report(ReportContext::DailyStackedHistogram, data)).unwrap();
        assert_eq!(option["xAxis"]["data"], json!(["2024-05-01", "2024-05-02"]));

        let series = option["series"].as_array().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1]["name"], "Balcão");
        assert_eq!(series[1]["stack"], "total");
        assert_eq!(series[1]["data"][0]["value"], 5.0);
        assert_eq!(series[1]["data"][1]["value"], 0.0);
    }
}
