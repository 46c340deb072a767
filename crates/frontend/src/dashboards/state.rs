//! Navigation state of the dashboard.
//!
//! Plain data, no signals: every operation is split into a synchronous
//! `begin_*` that updates the visible state and returns what to fetch, and a
//! `finish_*` that applies the response. Navigations that replace the visible
//! context advance an epoch; a response carrying an older [`Ticket`] is
//! discarded when it arrives.

use contracts::dashboards::d400_kpi_summary::KpiData;
use contracts::dashboards::d401_sales_reports::{ReportRequest, ReportData};
use contracts::dashboards::d402_store_funnel::{channel_report, monthly_report, product_report};
use contracts::dashboards::d403_store_detail::StoreDetailData;
use contracts::dashboards::d404_customer_report::{CustomerReportFilter, CustomerRow};
use contracts::shared::DataRow;

/// The single visible view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrentView {
    #[default]
    GlobalReport,
    StoreFunnel,
    StoreDetail,
    CustomerReport,
    QueryBuilder,
}

/// Navigation epoch a request was issued in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Store -> month -> products/channels drill-down
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreFunnelState {
    pub all_stores: Vec<String>,
    pub selected_store: Option<String>,
    pub selected_month: Option<String>,
    pub monthly_report: Option<ReportData>,
    pub product_report: Option<ReportData>,
    pub channel_report: Option<ReportData>,
    pub is_loading_stores: bool,
    /// Request that loads `all_stores` for this visit of the funnel
    pub store_list_ticket: Option<Ticket>,
    pub is_loading_monthly: bool,
    pub is_loading_detail: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreDetailState {
    pub store_name: Option<String>,
    pub data: Option<StoreDetailData>,
    pub is_loading: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerReportState {
    pub filter: CustomerReportFilter,
    pub report_data: Option<Vec<CustomerRow>>,
    pub is_loading: bool,
}

/// Product and channel requests for one month of the selected store
#[derive(Debug, Clone, PartialEq)]
pub struct MonthDetailFetch {
    pub ticket: Ticket,
    pub store_name: String,
    pub mes_ano: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub kpi_data: Option<KpiData>,
    pub is_loading_kpis: bool,
    pub error: Option<String>,
    pub current_view: CurrentView,
    pub global_report: Option<ReportData>,
    pub is_loading_global_report: bool,
    pub store_funnel: StoreFunnelState,
    pub store_detail: StoreDetailState,
    pub customer_report: CustomerReportState,
    epoch: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a navigation: older responses become stale, the error is cleared
    fn navigate(&mut self) -> Ticket {
        self.epoch += 1;
        self.error = None;
        Ticket(self.epoch)
    }

    pub fn current_ticket(&self) -> Ticket {
        Ticket(self.epoch)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.epoch
    }

    /// Records an error for a request that is still current
    pub fn fail(&mut self, ticket: Ticket, message: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.error = Some(message);
        true
    }

    // --- KPIs ---

    pub fn begin_kpis(&mut self) {
        self.is_loading_kpis = true;
    }

    /// KPI cards shown above the views, hidden while an error is displayed
    pub fn visible_kpis(&self) -> Option<KpiData> {
        if self.error.is_some() {
            return None;
        }
        self.kpi_data.clone()
    }

    pub fn finish_kpis(&mut self, result: Result<KpiData, String>) {
        self.is_loading_kpis = false;
        match result {
            Ok(kpis) => self.kpi_data = Some(kpis),
            Err(e) => self.error = Some(e),
        }
    }

    // --- Global reports ---

    pub fn begin_global_report(&mut self) -> Ticket {
        let ticket = self.navigate();
        self.current_view = CurrentView::GlobalReport;
        self.global_report = None;
        self.is_loading_global_report = true;
        self.store_funnel = StoreFunnelState::default();
        ticket
    }

    /// A drill-down replaces the global report but keeps the view
    pub fn begin_drilldown_report(&mut self) -> Ticket {
        let ticket = self.navigate();
        self.is_loading_global_report = true;
        ticket
    }

    pub fn finish_global_report(
        &mut self,
        ticket: Ticket,
        request: ReportRequest,
        result: Result<Vec<DataRow>, String>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.is_loading_global_report = false;
        match result {
            Ok(data) => self.global_report = Some(request.into_report(data)),
            Err(e) => self.error = Some(e),
        }
        true
    }

    // --- Store funnel ---

    pub fn show_store_funnel(&mut self) {
        self.navigate();
        self.current_view = CurrentView::StoreFunnel;
        self.global_report = None;
        self.is_loading_global_report = false;
        self.store_funnel = StoreFunnelState::default();
    }

    /// None when the list was already requested since the funnel was opened
    pub fn begin_store_list(&mut self) -> Option<Ticket> {
        let funnel = &mut self.store_funnel;
        if funnel.store_list_ticket.is_some() || !funnel.all_stores.is_empty() {
            return None;
        }
        let ticket = Ticket(self.epoch);
        funnel.store_list_ticket = Some(ticket);
        funnel.is_loading_stores = true;
        Some(ticket)
    }

    /// Picking a store inside the funnel does not invalidate the list request
    pub fn finish_store_list(&mut self, ticket: Ticket, result: Result<Vec<String>, String>) -> bool {
        if self.current_view != CurrentView::StoreFunnel
            || self.store_funnel.store_list_ticket != Some(ticket)
        {
            return false;
        }
        self.store_funnel.is_loading_stores = false;
        match result {
            Ok(stores) => self.store_funnel.all_stores = stores,
            Err(e) => self.error = Some(e),
        }
        true
    }

    pub fn begin_monthly_report(&mut self, store_name: &str) -> Ticket {
        let ticket = self.navigate();
        let previous = std::mem::take(&mut self.store_funnel);
        self.store_funnel = StoreFunnelState {
            all_stores: previous.all_stores,
            is_loading_stores: previous.is_loading_stores,
            store_list_ticket: previous.store_list_ticket,
            selected_store: Some(store_name.to_string()),
            is_loading_monthly: true,
            ..StoreFunnelState::default()
        };
        ticket
    }

    pub fn finish_monthly_report(
        &mut self,
        ticket: Ticket,
        store_name: &str,
        result: Result<Vec<DataRow>, String>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.store_funnel.is_loading_monthly = false;
        match result {
            Ok(data) => self.store_funnel.monthly_report = Some(monthly_report(store_name, data)),
            Err(e) => self.error = Some(e),
        }
        true
    }

    /// None without a selected store
    pub fn begin_detail_reports(&mut self, mes_ano: &str) -> Option<MonthDetailFetch> {
        let store_name = self.store_funnel.selected_store.clone()?;
        self.error = None;
        let funnel = &mut self.store_funnel;
        funnel.selected_month = Some(mes_ano.to_string());
        funnel.product_report = None;
        funnel.channel_report = None;
        funnel.is_loading_detail = true;
        Some(MonthDetailFetch {
            ticket: self.current_ticket(),
            store_name,
            mes_ano: mes_ano.to_string(),
        })
    }

    /// Applies both detail reports, or neither. Responses for a month that is
    /// no longer selected are discarded.
    pub fn finish_detail_reports(
        &mut self,
        fetch: &MonthDetailFetch,
        result: Result<(Vec<DataRow>, Vec<DataRow>), String>,
    ) -> bool {
        let funnel = &self.store_funnel;
        if !self.is_current(fetch.ticket)
            || funnel.selected_month.as_deref() != Some(fetch.mes_ano.as_str())
            || funnel.selected_store.as_deref() != Some(fetch.store_name.as_str())
        {
            return false;
        }
        let funnel = &mut self.store_funnel;
        funnel.is_loading_detail = false;
        match result {
            Ok((products, channels)) => {
                funnel.product_report = Some(product_report(&fetch.store_name, &fetch.mes_ano, products));
                funnel.channel_report = Some(channel_report(&fetch.store_name, &fetch.mes_ano, channels));
            }
            Err(e) => self.error = Some(e),
        }
        true
    }

    // --- Store detail ---

    /// The global report stays in place for the way back
    pub fn begin_store_detail(&mut self, store_name: &str) -> Ticket {
        let ticket = self.navigate();
        self.current_view = CurrentView::StoreDetail;
        self.store_detail = StoreDetailState {
            store_name: Some(store_name.to_string()),
            data: None,
            is_loading: true,
        };
        ticket
    }

    pub fn finish_store_detail(&mut self, ticket: Ticket, result: Result<StoreDetailData, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.store_detail.is_loading = false;
        match result {
            Ok(data) => self.store_detail.data = Some(data),
            Err(e) => self.error = Some(e),
        }
        true
    }

    /// Back from the store detail to the global report it was opened from
    pub fn show_global_view(&mut self) {
        self.navigate();
        self.current_view = CurrentView::GlobalReport;
        self.is_loading_global_report = false;
        self.store_detail = StoreDetailState::default();
    }

    // --- Customer report ---

    pub fn begin_customer_report(&mut self, filter: CustomerReportFilter) -> Ticket {
        let ticket = self.navigate();
        self.current_view = CurrentView::CustomerReport;
        self.customer_report.filter = filter;
        self.customer_report.is_loading = true;
        ticket
    }

    /// Opening the report from the menu reuses the last filter
    pub fn reopen_customer_report(&mut self) -> (Ticket, CustomerReportFilter) {
        let filter = self.customer_report.filter;
        (self.begin_customer_report(filter), filter)
    }

    pub fn finish_customer_report(&mut self, ticket: Ticket, result: Result<Vec<CustomerRow>, String>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.customer_report.is_loading = false;
        match result {
            Ok(rows) => self.customer_report.report_data = Some(rows),
            Err(e) => self.error = Some(e),
        }
        true
    }

    // --- Query builder ---

    pub fn show_query_builder(&mut self) -> Ticket {
        let ticket = self.navigate();
        self.current_view = CurrentView::QueryBuilder;
        self.is_loading_global_report = false;
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d401_sales_reports::{
        Drilldown, ReportContext, SALES_BY_CHANNEL_PATH, SALES_BY_MONTH_PATH,
    };
    use serde_json::json;

    fn rows(n: usize) -> Vec<DataRow> {
        (0..n)
            .filter_map(|i| json!({"label": format!("r{}", i), "faturamento": i as f64}).as_object().cloned())
            .collect()
    }

    fn channel_request() -> ReportRequest {
        ReportRequest::global(SALES_BY_CHANNEL_PATH, "Vendas por Canal (Global)", &[]).unwrap()
    }

    fn kpis() -> KpiData {
        KpiData {
            faturamento_total: 1000.0,
            ticket_medio: 50.0,
            total_vendas: 20.0,
            avg_tempo_entrega_min: 30.0,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = DashboardState::new();
        assert_eq!(state.current_view, CurrentView::GlobalReport);
        assert!(state.global_report.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_kpis_success_and_failure() {
        let mut state = DashboardState::new();
        state.begin_kpis();
        assert!(state.is_loading_kpis);
        state.finish_kpis(Ok(kpis()));
        assert!(!state.is_loading_kpis);
        assert_eq!(state.kpi_data, Some(kpis()));

        let mut state = DashboardState::new();
        state.begin_kpis();
        state.finish_kpis(Err("KPIs retornaram vazios".to_string()));
        assert!(!state.is_loading_kpis);
        assert!(state.kpi_data.is_none());
        assert_eq!(state.error.as_deref(), Some("KPIs retornaram vazios"));
    }

    #[test]
    fn test_kpis_hidden_while_error_is_shown() {
        let mut state = DashboardState::new();
        state.begin_kpis();
        state.finish_kpis(Ok(kpis()));
        assert_eq!(state.visible_kpis(), Some(kpis()));

        let ticket = state.begin_global_report();
        state.fail(ticket, "Erro ao buscar relatório global".to_string());
        assert_eq!(state.visible_kpis(), None);
        assert!(state.kpi_data.is_some());

        state.show_store_funnel();
        assert_eq!(state.visible_kpis(), Some(kpis()));
    }

    #[test]
    fn test_global_report_resets_funnel_and_sets_context() {
        let mut state = DashboardState::new();
        state.show_store_funnel();
        state.store_funnel.all_stores = vec!["Loja Centro".to_string()];
        state.error = Some("old".to_string());

        let ticket = state.begin_global_report();
        assert_eq!(state.current_view, CurrentView::GlobalReport);
        assert!(state.is_loading_global_report);
        assert!(state.error.is_none());
        assert_eq!(state.store_funnel, StoreFunnelState::default());

        assert!(state.finish_global_report(ticket, channel_request(), Ok(rows(3))));
        let report = state.global_report.clone().unwrap();
        assert_eq!(report.context, ReportContext::SalesByChannel);
        assert_eq!(report.title, "Vendas por Canal (Global)");
        assert_eq!(report.store_name, None);
        assert_eq!(report.data.len(), 3);
        assert!(!state.is_loading_global_report);
    }

    #[test]
    fn test_global_report_failure_keeps_report_empty() {
        let mut state = DashboardState::new();
        let ticket = state.begin_global_report();
        state.finish_global_report(ticket, channel_request(), Err("Erro ao buscar relatório global".to_string()));
        assert!(state.global_report.is_none());
        assert!(!state.is_loading_global_report);
        assert_eq!(state.error.as_deref(), Some("Erro ao buscar relatório global"));
    }

    #[test]
    fn test_stale_report_is_discarded() {
        let mut state = DashboardState::new();
        let slow = state.begin_global_report();
        let fast = state.begin_global_report();
        let month_request = ReportRequest::global(SALES_BY_MONTH_PATH, "Faturamento por Mês (Global)", &[]).unwrap();

        assert!(state.finish_global_report(fast, month_request, Ok(rows(2))));
        assert!(!state.finish_global_report(slow, channel_request(), Ok(rows(5))));
        let report = state.global_report.unwrap();
        assert_eq!(report.context, ReportContext::SalesByMonth);
        assert_eq!(report.data.len(), 2);
    }

    #[test]
    fn test_stale_error_is_discarded() {
        let mut state = DashboardState::new();
        let old = state.begin_global_report();
        state.show_query_builder();
        assert!(!state.finish_global_report(old, channel_request(), Err("boom".to_string())));
        assert!(state.error.is_none());
        assert_eq!(state.current_view, CurrentView::QueryBuilder);
    }

    #[test]
    fn test_month_drilldown_replaces_global_report() {
        let mut state = DashboardState::new();
        let ticket = state.begin_global_report();
        let month_request = ReportRequest::global(SALES_BY_MONTH_PATH, "Faturamento por Mês (Global)", &[]).unwrap();
        state.finish_global_report(ticket, month_request, Ok(rows(12)));

        let Some(Drilldown::Report(request)) = ReportContext::SalesByMonth.drilldown("2024-03") else {
            panic!("expected a report drilldown");
        };
        let ticket = state.begin_drilldown_report();
        assert_eq!(state.current_view, CurrentView::GlobalReport);
        assert!(state.finish_global_report(ticket, request, Ok(rows(31))));

        let report = state.global_report.unwrap();
        assert_eq!(report.title, "Faturamento Diário (2024-03)");
        assert_eq!(report.context, ReportContext::DailyStackedHistogram);
    }

    #[test]
    fn test_show_store_funnel_clears_global_report() {
        let mut state = DashboardState::new();
        let ticket = state.begin_global_report();
        state.finish_global_report(ticket, channel_request(), Ok(rows(2)));

        state.show_store_funnel();
        assert_eq!(state.current_view, CurrentView::StoreFunnel);
        assert!(state.global_report.is_none());
        assert_eq!(state.store_funnel, StoreFunnelState::default());
    }

    #[test]
    fn test_store_list_loads_once() {
        let mut state = DashboardState::new();
        state.show_store_funnel();
        let ticket = state.begin_store_list().unwrap();
        assert!(state.begin_store_list().is_none());
        assert!(state.finish_store_list(ticket, Ok(vec!["A".to_string(), "B".to_string()])));
        assert!(!state.store_funnel.is_loading_stores);
        assert!(state.begin_store_list().is_none());
    }

    #[test]
    fn test_reopening_funnel_requests_store_list_again() {
        let mut state = DashboardState::new();
        state.show_store_funnel();
        let first = state.begin_store_list().unwrap();
        assert!(state.finish_store_list(first, Ok(vec!["Loja Centro".to_string()])));
        state.begin_monthly_report("Loja Centro");

        state.show_store_funnel();
        assert!(state.store_funnel.all_stores.is_empty());
        assert_eq!(state.store_funnel.selected_store, None);
        let second = state.begin_store_list().expect("list is requested again");
        assert!(state.store_funnel.is_loading_stores);
        assert!(state.finish_store_list(second, Ok(vec!["Loja Centro".to_string()])));
        assert_eq!(state.store_funnel.all_stores, vec!["Loja Centro"]);
    }

    #[test]
    fn test_store_list_survives_store_pick_but_not_reopen() {
        let mut state = DashboardState::new();
        state.show_store_funnel();
        let first = state.begin_store_list().unwrap();

        state.begin_monthly_report("Loja Centro");
        assert!(state.store_funnel.is_loading_stores);
        assert!(state.finish_store_list(first, Ok(vec!["Loja Centro".to_string()])));

        state.show_store_funnel();
        let second = state.begin_store_list().unwrap();
        assert!(!state.finish_store_list(first, Ok(vec!["Antiga".to_string()])));
        assert!(state.store_funnel.all_stores.is_empty());
        assert!(state.finish_store_list(second, Err("Erro".to_string())));
        assert!(state.begin_store_list().is_none());
    }

    #[test]
    fn test_store_list_dropped_after_leaving_funnel() {
        let mut state = DashboardState::new();
        state.show_store_funnel();
        let ticket = state.begin_store_list().unwrap();
        state.begin_global_report();
        assert!(!state.finish_store_list(ticket, Ok(vec!["A".to_string()])));
        assert!(state.store_funnel.all_stores.is_empty());
    }

    #[test]
    fn test_monthly_report_keeps_store_list() {
        let mut state = DashboardState::new();
        state.show_store_funnel();
        let list = state.begin_store_list().unwrap();
        state.finish_store_list(list, Ok(vec!["Loja Centro".to_string()]));
        state.store_funnel.selected_month = Some("2024-01".to_string());

        let ticket = state.begin_monthly_report("Loja Centro");
        let funnel = &state.store_funnel;
        assert_eq!(funnel.all_stores, vec!["Loja Centro"]);
        assert_eq!(funnel.selected_store.as_deref(), Some("Loja Centro"));
        assert_eq!(funnel.selected_month, None);
        assert!(funnel.is_loading_monthly);

        assert!(state.finish_monthly_report(ticket, "Loja Centro", Ok(rows(6))));
        let report = state.store_funnel.monthly_report.clone().unwrap();
        assert_eq!(report.title, "Faturamento Mensal: Loja Centro");
        assert_eq!(report.context, ReportContext::SalesByMonthForStore);
        assert_eq!(report.store_name.as_deref(), Some("Loja Centro"));
    }

    #[test]
    fn test_detail_reports_require_selected_store() {
        let mut state = DashboardState::new();
        state.show_store_funnel();
        assert!(state.begin_detail_reports("2024-01").is_none());
        assert!(!state.store_funnel.is_loading_detail);
    }

    #[test]
    fn test_detail_reports_apply_both() {
        let mut state = DashboardState::new();
        state.show_store_funnel();
        state.begin_monthly_report("Loja Centro");

        let fetch = state.begin_detail_reports("2024-02").unwrap();
        assert_eq!(fetch.store_name, "Loja Centro");
        assert!(state.store_funnel.is_loading_detail);

        assert!(state.finish_detail_reports(&fetch, Ok((rows(20), rows(3)))));
        let funnel = &state.store_funnel;
        assert!(!funnel.is_loading_detail);
        assert_eq!(funnel.product_report.as_ref().unwrap().context, ReportContext::TopProductsDetail);
        assert_eq!(funnel.product_report.as_ref().unwrap().title, "Top Produtos (2024-02)");
        assert_eq!(funnel.channel_report.as_ref().unwrap().context, ReportContext::ChannelDetail);
    }

    #[test]
    fn test_detail_reports_failure_stores_neither() {
        let mut state = DashboardState::new();
        state.show_store_funnel();
        state.begin_monthly_report("Loja Centro");
        let fetch = state.begin_detail_reports("2024-02").unwrap();

        state.finish_detail_reports(&fetch, Err("Falha ao buscar relatórios detalhados".to_string()));
        assert!(state.store_funnel.product_report.is_none());
        assert!(state.store_funnel.channel_report.is_none());
        assert!(!state.store_funnel.is_loading_detail);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_detail_reports_for_previous_month_are_discarded() {
        let mut state = DashboardState::new();
        state.show_store_funnel();
        state.begin_monthly_report("Loja Centro");
        let january = state.begin_detail_reports("2024-01").unwrap();
        let february = state.begin_detail_reports("2024-02").unwrap();

        assert!(state.finish_detail_reports(&february, Ok((rows(2), rows(2)))));
        assert!(!state.finish_detail_reports(&january, Ok((rows(9), rows(9)))));
        assert_eq!(state.store_funnel.product_report.as_ref().unwrap().data.len(), 2);
        assert_eq!(state.store_funnel.selected_month.as_deref(), Some("2024-02"));
    }

    #[test]
    fn test_store_detail_and_back() {
        let mut state = DashboardState::new();
        let ticket = state.begin_global_report();
        let request = ReportRequest::global(
            contracts::dashboards::d401_sales_reports::SALES_BY_STORE_PATH,
            "Vendas por Loja (Global)",
            &[],
        )
        .unwrap();
        state.finish_global_report(ticket, request, Ok(rows(10)));

        let Some(Drilldown::StoreDetail { store_name }) = ReportContext::SalesByStore.drilldown("Loja Norte") else {
            panic!("expected a store detail drilldown");
        };
        let ticket = state.begin_store_detail(&store_name);
        assert_eq!(state.current_view, CurrentView::StoreDetail);
        assert!(state.store_detail.is_loading);
        assert!(state.finish_store_detail(ticket, Ok(StoreDetailData::default())));
        assert!(state.store_detail.data.is_some());

        state.show_global_view();
        assert_eq!(state.current_view, CurrentView::GlobalReport);
        assert_eq!(state.global_report.as_ref().unwrap().context, ReportContext::SalesByStore);
        assert_eq!(state.store_detail, StoreDetailState::default());
    }

    #[test]
    fn test_customer_report_keeps_filter() {
        let mut state = DashboardState::new();
        let filter = CustomerReportFilter {
            order_by_asc: true,
            at_risk_only: true,
        };
        let ticket = state.begin_customer_report(filter);
        assert_eq!(state.current_view, CurrentView::CustomerReport);
        assert!(state.customer_report.is_loading);

        let customer = CustomerRow {
            nome_cliente: "Ana".to_string(),
            contato: "ana@mail.com".to_string(),
            total_vendas: 4,
            ultima_compra_data: "2024-01-02".to_string(),
        };
        assert!(state.finish_customer_report(ticket, Ok(vec![customer])));
        assert_eq!(state.customer_report.filter, filter);
        assert_eq!(state.customer_report.report_data.as_ref().map(Vec::len), Some(1));
        assert!(!state.customer_report.is_loading);
    }

    #[test]
    fn test_reopen_customer_report_reuses_last_filter() {
        let mut state = DashboardState::new();
        let filter = CustomerReportFilter {
            order_by_asc: true,
            at_risk_only: true,
        };
        let ticket = state.begin_customer_report(filter);
        state.finish_customer_report(ticket, Ok(Vec::new()));
        state.begin_global_report();

        let (reopened, reused) = state.reopen_customer_report();
        assert_eq!(reused, filter);
        assert!(state.is_current(reopened));
        assert_ne!(reopened, ticket);
        assert_eq!(state.current_view, CurrentView::CustomerReport);
        assert!(state.customer_report.is_loading);
    }

    #[test]
    fn test_reopen_customer_report_starts_with_default_filter() {
        let mut state = DashboardState::new();
        let (_, filter) = state.reopen_customer_report();
        assert_eq!(filter, CustomerReportFilter::default());
    }

    #[test]
    fn test_query_errors_follow_ticket() {
        let mut state = DashboardState::new();
        let ticket = state.show_query_builder();
        assert!(state.fail(ticket, "Erro na API".to_string()));
        assert_eq!(state.error.as_deref(), Some("Erro na API"));

        state.begin_global_report();
        assert!(!state.fail(ticket, "late".to_string()));
        assert!(state.error.is_none());
    }
}
