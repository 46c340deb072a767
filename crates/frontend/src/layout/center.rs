use crate::dashboards::state::CurrentView;
use crate::dashboards::store::use_dashboard_store;
use crate::dashboards::{
    CustomerReportView, GlobalReportView, KpiCards, QueryBuilderView, StoreDetailView,
    StoreFunnelView,
};
use crate::shared::components::ErrorBanner;
use leptos::prelude::*;

/// Content area: global KPIs on top, then the current view
#[component]
pub fn Center() -> impl IntoView {
    let store = use_dashboard_store();
    let current_view = store.current_view();

    view! {
        <div data-zone="center" class="app-main">
            <Show when=move || current_view.get() != CurrentView::StoreDetail>
                <KpiCards />
            </Show>
            {move || match current_view.get() {
                CurrentView::GlobalReport => view! {
                    <ErrorBanner error=store.error() />
                    <GlobalReportView />
                }
                .into_any(),
                CurrentView::StoreFunnel => view! { <StoreFunnelView /> }.into_any(),
                CurrentView::StoreDetail => view! { <StoreDetailView /> }.into_any(),
                CurrentView::CustomerReport => view! { <CustomerReportView /> }.into_any(),
                CurrentView::QueryBuilder => view! { <QueryBuilderView /> }.into_any(),
            }}
        </div>
    }
}
