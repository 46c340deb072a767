use super::api;
use crate::dashboards::store::DashboardStore;
use contracts::dashboards::d405_query_builder::{
    ordered_selection, parse_filter_value, Filter, QueryRequest, QueryResponse, DIMENSION_OPTIONS,
    FILTER_OPERATORS, METRIC_OPTIONS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

const MAX_LIMIT: u32 = 10_000;

/// Filter row as edited in the form
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDraft {
    pub id: usize,
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl FilterDraft {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            field: DIMENSION_OPTIONS[0].value.to_string(),
            operator: FILTER_OPERATORS[0].to_string(),
            value: String::new(),
        }
    }

    /// None while the value is blank
    pub fn to_filter(&self) -> Option<Filter> {
        if self.value.trim().is_empty() {
            return None;
        }
        Some(Filter {
            field: self.field.clone(),
            operator: self.operator.clone(),
            value: parse_filter_value(&self.value),
        })
    }
}

/// Limit typed by the user, clamped to 1..=10000; the default when unparsable
pub fn parse_limit(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(n) => n.clamp(1, MAX_LIMIT),
        Err(_) => QueryRequest::default().limit,
    }
}

/// Request body from the form; selections keep the option order
pub fn build_request(
    metrics: &HashSet<String>,
    dimensions: &HashSet<String>,
    filters: &[FilterDraft],
    limit: &str,
) -> QueryRequest {
    QueryRequest {
        metrics: ordered_selection(METRIC_OPTIONS, metrics),
        dimensions: ordered_selection(DIMENSION_OPTIONS, dimensions),
        filters: filters.iter().filter_map(FilterDraft::to_filter).collect(),
        limit: parse_limit(limit),
        ..QueryRequest::default()
    }
}

/// Form and result of the query builder; survives navigation
#[derive(Clone, Copy)]
pub struct QueryStore {
    pub metrics: RwSignal<HashSet<String>>,
    pub dimensions: RwSignal<HashSet<String>>,
    pub filters: RwSignal<Vec<FilterDraft>>,
    pub limit: RwSignal<String>,
    pub response: RwSignal<Option<QueryResponse>>,
    pub is_loading: RwSignal<bool>,
    next_filter_id: StoredValue<usize>,
}

impl QueryStore {
    pub fn new() -> Self {
        let defaults = QueryRequest::default();
        Self {
            metrics: RwSignal::new(defaults.metrics.into_iter().collect()),
            dimensions: RwSignal::new(defaults.dimensions.into_iter().collect()),
            filters: RwSignal::new(Vec::new()),
            limit: RwSignal::new(defaults.limit.to_string()),
            response: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            next_filter_id: StoredValue::new(0),
        }
    }

    pub fn add_filter(&self) {
        let id = self.next_filter_id.get_value();
        self.next_filter_id.set_value(id + 1);
        self.filters.update(|f| f.push(FilterDraft::new(id)));
    }

    pub fn remove_filter(&self, id: usize) {
        self.filters.update(|f| f.retain(|d| d.id != id));
    }

    pub fn update_filter(&self, id: usize, apply: impl FnOnce(&mut FilterDraft)) {
        self.filters.update(|f| {
            if let Some(draft) = f.iter_mut().find(|d| d.id == id) {
                apply(draft);
            }
        });
    }

    pub fn can_run(&self) -> bool {
        !self.metrics.with(|m| m.is_empty()) && !self.is_loading.get()
    }

    /// Posts the current form; errors go to the dashboard error banner
    pub fn run_query(&self, dashboard: DashboardStore) {
        let request = build_request(
            &self.metrics.get_untracked(),
            &self.dimensions.get_untracked(),
            &self.filters.get_untracked(),
            &self.limit.get_untracked(),
        );
        log::debug!("Running query: {:?}", request);

        let ticket = dashboard.current_ticket();
        dashboard.state.update(|s| s.error = None);
        self.is_loading.set(true);
        self.response.set(None);

        let this = *self;
        spawn_local(async move {
            match api::run_query(&request).await {
                Ok(response) => {
                    log::debug!("Query returned {} rows", response.count);
                    this.response.set(Some(response));
                }
                Err(e) => dashboard.report_error(ticket, e),
            }
            this.is_loading.set(false);
        });
    }
}

impl Default for QueryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set(values: &[&str]) -> HashSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_build_request_orders_and_skips_blank_filters() {
        let metrics = set(&[METRIC_OPTIONS[1].value, METRIC_OPTIONS[0].value]);
        let dimensions = set(&["store_name", "channel_name"]);
        let filters = vec![
            FilterDraft {
                id: 0,
                field: "store_name".to_string(),
                operator: "=".to_string(),
                value: "Loja Centro".to_string(),
            },
            FilterDraft::new(1),
        ];

        let request = build_request(&metrics, &dimensions, &filters, "50");
        assert_eq!(
            request.metrics,
            vec![METRIC_OPTIONS[0].value.to_string(), METRIC_OPTIONS[1].value.to_string()]
        );
        assert_eq!(request.dimensions, vec!["channel_name", "store_name"]);
        assert_eq!(request.filters.len(), 1);
        assert_eq!(request.filters[0].value, json!("Loja Centro"));
        assert_eq!(request.limit, 50);
        assert!(request.order_by.is_empty());
    }

    #[test]
    fn test_numeric_filter_values_stay_numbers() {
        let draft = FilterDraft {
            id: 3,
            field: "channel_name".to_string(),
            operator: ">=".to_string(),
            value: " 42 ".to_string(),
        };
        assert_eq!(draft.to_filter().unwrap().value, json!(42));
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("25"), 25);
        assert_eq!(parse_limit("0"), 1);
        assert_eq!(parse_limit("999999"), MAX_LIMIT);
        assert_eq!(parse_limit("abc"), 100);
    }
}
