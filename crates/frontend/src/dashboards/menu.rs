//! Sidebar menu entries and what each one opens

use contracts::dashboards::d401_sales_reports::{
    ReportRequest, DELIVERY_BY_NEIGHBORHOOD_PATH, SALES_BY_CHANNEL_PATH, SALES_BY_MONTH_PATH,
    SALES_BY_PAYMENT_TYPE_PATH, SALES_BY_STORE_PATH, TOP_PRODUCTS_BY_REVENUE_PATH,
};

/// Entry selected on start-up
pub const DEFAULT_MENU_KEY: &str = "sales_by_channel";

/// Group expanded on start-up
pub const DEFAULT_EXPANDED_GROUP: &str = "delivery_performance";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuItem),
    Group {
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        items: Vec<MenuItem>,
    },
}

/// What selecting a menu entry does
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    StoreFunnel,
    GlobalReport(ReportRequest),
    CustomerReport,
    QueryBuilder,
}

const fn item(key: &'static str, label: &'static str, icon: &'static str) -> MenuItem {
    MenuItem { key, label, icon }
}

pub fn menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::Item(item("vendas_por_loja", "Vendas por Loja", "store")),
        MenuEntry::Item(item("sales_by_store", "Vendas por Loja (Global)", "bar-chart")),
        MenuEntry::Item(item("sales_by_channel", "Vendas por Canal", "layers")),
        MenuEntry::Item(item("sales_by_month", "Faturamento por Mês", "calendar")),
        MenuEntry::Item(item("top_products", "Top Produtos", "package")),
        MenuEntry::Item(item("payment_types", "Formas de Pagamento", "credit-card")),
        MenuEntry::Group {
            id: DEFAULT_EXPANDED_GROUP,
            label: "Performance de Entrega",
            icon: "truck",
            items: vec![
                item("delivery_performance_worst", "Piores Entregas", "thumbs-down"),
                item("delivery_performance_best", "Melhores Entregas", "thumbs-up"),
            ],
        },
        MenuEntry::Item(item("customer_report", "Relatório de Clientes", "users")),
        MenuEntry::Item(item("query_builder", "Construtor de Análises", "search")),
    ]
}

fn report(path: &str, title: &str, params: &[(&str, &str)]) -> Option<MenuAction> {
    ReportRequest::global(path, title, params).map(MenuAction::GlobalReport)
}

/// Resolves a menu key; None for unknown keys and group ids
pub fn menu_action(key: &str) -> Option<MenuAction> {
    match key {
        "vendas_por_loja" => Some(MenuAction::StoreFunnel),
        "sales_by_store" => report(SALES_BY_STORE_PATH, "Vendas por Loja (Global)", &[]),
        "sales_by_channel" => report(SALES_BY_CHANNEL_PATH, "Vendas por Canal (Global)", &[]),
        "sales_by_month" => report(SALES_BY_MONTH_PATH, "Faturamento por Mês (Global)", &[]),
        "top_products" => report(TOP_PRODUCTS_BY_REVENUE_PATH, "Top Produtos (Global)", &[]),
        "payment_types" => report(SALES_BY_PAYMENT_TYPE_PATH, "Formas de Pagamento", &[]),
        "delivery_performance_worst" => report(
            DELIVERY_BY_NEIGHBORHOOD_PATH,
            "Piores Entregas",
            &[("order_by_asc", "false")],
        ),
        "delivery_performance_best" => report(
            DELIVERY_BY_NEIGHBORHOOD_PATH,
            "Melhores Entregas",
            &[("order_by_asc", "true")],
        ),
        "customer_report" => Some(MenuAction::CustomerReport),
        "query_builder" => Some(MenuAction::QueryBuilder),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d401_sales_reports::ReportContext;

    fn all_keys() -> Vec<&'static str> {
        menu_entries()
            .into_iter()
            .flat_map(|entry| match entry {
                MenuEntry::Item(item) => vec![item.key],
                MenuEntry::Group { items, .. } => items.iter().map(|i| i.key).collect(),
            })
            .collect()
    }

    #[test]
    fn test_every_entry_has_an_action() {
        for key in all_keys() {
            assert!(menu_action(key).is_some(), "no action for {}", key);
        }
        assert!(menu_action(DEFAULT_EXPANDED_GROUP).is_none());
        assert!(menu_action("unknown").is_none());
    }

    #[test]
    fn test_default_entry_is_sales_by_channel() {
        let Some(MenuAction::GlobalReport(request)) = menu_action(DEFAULT_MENU_KEY) else {
            panic!("expected a global report");
        };
        assert_eq!(request.context, ReportContext::SalesByChannel);
        assert_eq!(request.title, "Vendas por Canal (Global)");
    }

    #[test]
    fn test_delivery_entries_differ_by_order() {
        let Some(MenuAction::GlobalReport(worst)) = menu_action("delivery_performance_worst") else {
            panic!("expected a global report");
        };
        let Some(MenuAction::GlobalReport(best)) = menu_action("delivery_performance_best") else {
            panic!("expected a global report");
        };
        assert_eq!(worst.context, ReportContext::DeliveryByNeighborhood);
        assert_eq!(worst.params, vec![("order_by_asc".to_string(), "false".to_string())]);
        assert_eq!(best.params, vec![("order_by_asc".to_string(), "true".to_string())]);
    }

    #[test]
    fn test_top_products_uses_revenue_endpoint() {
        let Some(MenuAction::GlobalReport(request)) = menu_action("top_products") else {
            panic!("expected a global report");
        };
        assert_eq!(request.path, "/reports/top_products_by_revenue");
        assert_eq!(request.context, ReportContext::TopProductsByRevenue);
    }
}
