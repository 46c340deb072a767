use crate::dashboards::d405_query_builder::state::QueryStore;
use crate::dashboards::store::DashboardStore;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    let store = DashboardStore::new();
    provide_context(ctx);
    provide_context(store);
    provide_context(QueryStore::new());

    ctx.init_router_integration();
    let initial = ctx.active.get_untracked();
    store.open_menu_entry(&initial);

    view! { <Shell /> }
}
