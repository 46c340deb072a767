//! Reactive wrapper around [`DashboardState`]: every action applies the
//! synchronous part of a transition, spawns the request and applies its
//! response when it arrives.

use super::d400_kpi_summary::api as kpi_api;
use super::d401_sales_reports::api as report_api;
use super::d402_store_funnel::api as funnel_api;
use super::d403_store_detail::api as detail_api;
use super::d404_customer_report::api as customer_api;
use super::menu::{menu_action, MenuAction};
use super::state::{CurrentView, DashboardState, Ticket};
use contracts::dashboards::d401_sales_reports::{Drilldown, ReportContext, ReportRequest};
use contracts::dashboards::d404_customer_report::CustomerReportFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct DashboardStore {
    pub state: RwSignal<DashboardState>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DashboardState::new()),
        }
    }

    /// Memoized projection of one part of the state; dependents rerun only
    /// when the projected value changes
    pub fn select<T, F>(&self, f: F) -> Memo<T>
    where
        T: PartialEq + Send + Sync + 'static,
        F: Fn(&DashboardState) -> T + Send + Sync + 'static,
    {
        let state = self.state;
        Memo::new(move |_| state.with(|s| f(s)))
    }

    pub fn current_view(&self) -> Memo<CurrentView> {
        self.select(|s| s.current_view)
    }

    pub fn error(&self) -> Memo<Option<String>> {
        self.select(|s| s.error.clone())
    }

    pub fn current_ticket(&self) -> Ticket {
        self.state.with_untracked(|s| s.current_ticket())
    }

    /// Error of a request issued in `ticket`, dropped when stale
    pub fn report_error(&self, ticket: Ticket, message: String) {
        log::error!("{}", message);
        self.state.update(|s| {
            s.fail(ticket, message);
        });
    }

    /// Runs the action behind a sidebar entry
    pub fn open_menu_entry(&self, key: &str) {
        match menu_action(key) {
            Some(MenuAction::StoreFunnel) => self.show_store_funnel(),
            Some(MenuAction::GlobalReport(request)) => self.fetch_global_report(request),
            Some(MenuAction::CustomerReport) => self.reopen_customer_report(),
            Some(MenuAction::QueryBuilder) => self.show_query_builder(),
            None => log::warn!("Unknown menu key: {}", key),
        }
    }

    pub fn fetch_kpis(&self) {
        let state = self.state;
        state.update(|s| s.begin_kpis());
        spawn_local(async move {
            let result = kpi_api::fetch_kpi_summary().await;
            if let Err(e) = &result {
                log::error!("{}", e);
            }
            state.update(|s| s.finish_kpis(result));
        });
    }

    pub fn fetch_global_report(&self, request: ReportRequest) {
        log::debug!("Navigate: global report {}", request.path);
        let state = self.state;
        let Some(ticket) = state.try_update(|s| s.begin_global_report()) else {
            return;
        };
        spawn_local(async move {
            let result = report_api::fetch_report(&request).await;
            let applied = state
                .try_update(|s| s.finish_global_report(ticket, request, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarded stale global report");
            }
        });
    }

    /// Click on a chart element labelled `value` in a report of `context`
    pub fn fetch_drilldown_report(&self, context: ReportContext, value: String) {
        match context.drilldown(&value) {
            Some(Drilldown::Report(request)) => {
                log::debug!("Navigate: drill-down {} -> {}", context.as_str(), request.path);
                let state = self.state;
                let Some(ticket) = state.try_update(|s| s.begin_drilldown_report()) else {
                    return;
                };
                spawn_local(async move {
                    let result = report_api::fetch_drilldown(&request).await;
                    let applied = state
                        .try_update(|s| s.finish_global_report(ticket, request, result))
                        .unwrap_or(false);
                    if !applied {
                        log::debug!("Discarded stale drill-down report");
                    }
                });
            }
            Some(Drilldown::StoreDetail { store_name }) => self.show_store_detail(store_name),
            Some(Drilldown::StoreMonthDetail { mes_ano }) => self.fetch_detail_reports_for_month(mes_ano),
            None => log::debug!("Context {} is not clickable", context.as_str()),
        }
    }

    pub fn show_store_funnel(&self) {
        log::debug!("Navigate: store funnel");
        self.state.update(|s| s.show_store_funnel());
    }

    /// Loads the store select-box once
    pub fn fetch_store_list(&self) {
        let state = self.state;
        let Some(Some(ticket)) = state.try_update(|s| s.begin_store_list()) else {
            return;
        };
        spawn_local(async move {
            let result = funnel_api::fetch_store_list().await;
            state.update(|s| {
                s.finish_store_list(ticket, result);
            });
        });
    }

    pub fn fetch_monthly_report_for_store(&self, store_name: String) {
        log::debug!("Navigate: funnel store {}", store_name);
        let state = self.state;
        let Some(ticket) = state.try_update(|s| s.begin_monthly_report(&store_name)) else {
            return;
        };
        spawn_local(async move {
            let result = funnel_api::fetch_monthly_for_store(&store_name).await;
            state.update(|s| {
                s.finish_monthly_report(ticket, &store_name, result);
            });
        });
    }

    pub fn fetch_detail_reports_for_month(&self, mes_ano: String) {
        let state = self.state;
        let Some(Some(fetch)) = state.try_update(|s| s.begin_detail_reports(&mes_ano)) else {
            log::debug!("No store selected, ignoring month {}", mes_ano);
            return;
        };
        log::debug!("Navigate: funnel month {} of {}", fetch.mes_ano, fetch.store_name);
        spawn_local(async move {
            let result = funnel_api::fetch_month_details(&fetch.store_name, &fetch.mes_ano).await;
            let applied = state
                .try_update(|s| s.finish_detail_reports(&fetch, result))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarded detail reports for {}", fetch.mes_ano);
            }
        });
    }

    pub fn show_store_detail(&self, store_name: String) {
        log::debug!("Navigate: store detail {}", store_name);
        let state = self.state;
        let Some(ticket) = state.try_update(|s| s.begin_store_detail(&store_name)) else {
            return;
        };
        spawn_local(async move {
            let result = detail_api::fetch_store_detail(&store_name).await;
            state.update(|s| {
                s.finish_store_detail(ticket, result);
            });
        });
    }

    pub fn show_global_view(&self) {
        log::debug!("Navigate: back to global view");
        self.state.update(|s| s.show_global_view());
    }

    pub fn fetch_customer_report(&self, filter: CustomerReportFilter) {
        log::debug!("Navigate: customer report {:?}", filter);
        if let Some(ticket) = self.state.try_update(|s| s.begin_customer_report(filter)) {
            self.load_customer_report(ticket, filter);
        }
    }

    pub fn reopen_customer_report(&self) {
        if let Some((ticket, filter)) = self.state.try_update(|s| s.reopen_customer_report()) {
            log::debug!("Navigate: customer report {:?}", filter);
            self.load_customer_report(ticket, filter);
        }
    }

    fn load_customer_report(&self, ticket: Ticket, filter: CustomerReportFilter) {
        let state = self.state;
        spawn_local(async move {
            let result = customer_api::fetch_customer_report(&filter).await;
            state.update(|s| {
                s.finish_customer_report(ticket, result);
            });
        });
    }

    pub fn show_query_builder(&self) {
        log::debug!("Navigate: query builder");
        self.state.update(|s| {
            s.show_query_builder();
        });
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_store() -> DashboardStore {
    use_context::<DashboardStore>().expect("DashboardStore not found")
}
