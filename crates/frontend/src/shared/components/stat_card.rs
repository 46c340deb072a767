use crate::shared::components::table::number_format::{
    format_compact, format_currency, format_minutes,
};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a KPI value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Currency,
    Compact,
    Minutes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStatus {
    #[default]
    Neutral,
    Good,
    Bad,
}

pub fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Currency => format_currency(val),
        ValueFormat::Compact => format_compact(val),
        ValueFormat::Minutes => format_minutes(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Value to display (None = not available)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    #[prop(optional)]
    status: CardStatus,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let status_class = match status {
        CardStatus::Good => "stat-card stat-card--success",
        CardStatus::Bad => "stat-card stat-card--error",
        CardStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {subtitle.map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

/// Placeholder card shown while KPIs load
#[component]
pub fn StatCardSkeleton() -> impl IntoView {
    view! {
        <div class="stat-card stat-card--loading">
            <div class="stat-card__icon skeleton"></div>
            <div class="stat-card__content">
                <div class="stat-card__label skeleton skeleton--text"></div>
                <div class="stat-card__value skeleton skeleton--title"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1234.5, ValueFormat::Currency), "R$\u{a0}1.234,50");
        assert_eq!(format_value(15_300.0, ValueFormat::Compact), "15,3\u{a0}mil");
        assert_eq!(format_value(41.256, ValueFormat::Minutes), "41.26 min");
    }
}
