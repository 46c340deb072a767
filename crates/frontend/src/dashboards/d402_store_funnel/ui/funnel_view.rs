use crate::dashboards::store::use_dashboard_store;
use crate::shared::components::{DataDisplay, ErrorBanner};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_sales_reports::ReportContext;
use leptos::prelude::*;
use thaw::*;

/// Store -> month -> products/channels funnel
#[component]
pub fn StoreFunnelView() -> impl IntoView {
    let store = use_dashboard_store();

    let all_stores = store.select(|s| s.store_funnel.all_stores.clone());
    let is_loading_stores = store.select(|s| s.store_funnel.is_loading_stores);
    let is_loading_monthly = store.select(|s| s.store_funnel.is_loading_monthly);
    let is_loading_detail = store.select(|s| s.store_funnel.is_loading_detail);
    let monthly_report = store.select(|s| s.store_funnel.monthly_report.clone());
    let product_report = store.select(|s| s.store_funnel.product_report.clone());
    let channel_report = store.select(|s| s.store_funnel.channel_report.clone());
    let has_details = store.select(|s| {
        s.store_funnel.product_report.is_some() && s.store_funnel.channel_report.is_some()
    });

    let needs_store_list = store.select(|s| {
        s.store_funnel.store_list_ticket.is_none() && s.store_funnel.all_stores.is_empty()
    });
    let funnel_store = store.select(|s| s.store_funnel.selected_store.clone());

    // Reopening the funnel from the menu resets it without remounting the view
    Effect::new(move |_| {
        if needs_store_list.get() {
            store.fetch_store_list();
        }
    });

    let selected_store = RwSignal::new(funnel_store.get_untracked().unwrap_or_default());
    Effect::new(move |_| {
        let value = funnel_store.get().unwrap_or_default();
        if selected_store.get_untracked() != value {
            selected_store.set(value);
        }
    });

    // Thaw Select resets to "" while its options are missing; only real picks load
    Effect::new(move |prev: Option<String>| {
        let value = selected_store.get();
        if prev.is_some() && prev.as_ref() != Some(&value) && !value.is_empty() {
            store.fetch_monthly_report_for_store(value.clone());
        }
        value
    });

    let on_month_click = Callback::new(move |(context, value): (ReportContext, String)| {
        if context == ReportContext::SalesByMonthForStore {
            store.fetch_drilldown_report(context, value);
        }
    });

    view! {
        <PageFrame page_id="d402_store_funnel--dashboard" category=PAGE_CAT_DASHBOARD class="store-funnel">
            <h2 class="page__title">"Vendas por Loja"</h2>

            <h4 class="store-funnel__step">"1. Selecione uma Loja"</h4>
            <div class="store-funnel__select">
                <Select value=selected_store>
                    <option value="" disabled=true>"Selecione uma loja..."</option>
                    <For
                        each=move || all_stores.get()
                        key=|name| name.clone()
                        children=move |name: String| {
                            let label = name.clone();
                            view! { <option value=name>{label}</option> }
                        }
                    />
                </Select>
                <Show when=move || is_loading_stores.get()>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
            </div>

            <div class="store-funnel__section">
                <Show when=move || is_loading_monthly.get()>
                    <div class="store-funnel__loading">
                        <Spinner label="Carregando meses..." />
                    </div>
                </Show>
                <Show when=move || monthly_report.with(|r| r.is_some())>
                    <DataDisplay
                        report=monthly_report
                        loading=false
                        on_chart_click=on_month_click
                    />
                </Show>
            </div>

            <div class="store-funnel__section">
                <Show when=move || is_loading_detail.get()>
                    <div class="store-funnel__loading">
                        <Spinner label="Carregando detalhes..." />
                    </div>
                </Show>
                <Show when=move || has_details.get()>
                    <div class="store-funnel__details">
                        <DataDisplay report=product_report loading=false />
                        <DataDisplay report=channel_report loading=false />
                    </div>
                </Show>
            </div>

            <ErrorBanner error=store.error() />
        </PageFrame>
    }
}
