use crate::dashboards::d400_kpi_summary::ui::KpiCardsView;
use crate::dashboards::store::use_dashboard_store;
use crate::shared::components::DataDisplay;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;

const FALLBACK_ERROR: &str = "Não foi possível carregar os dados detalhados da loja.";

/// Dashboard of a single store opened from the sales-by-store report
#[component]
pub fn StoreDetailView() -> impl IntoView {
    let store = use_dashboard_store();

    let is_loading = store.select(|s| s.store_detail.is_loading);
    let error = store.error();
    let store_name = store.select(|s| s.store_detail.store_name.clone().unwrap_or_default());
    let data = store.select(|s| s.store_detail.data.clone());

    let kpis = Signal::derive(move || data.with(|d| d.as_ref().and_then(|d| d.kpis.clone())));
    let monthly_report = Signal::derive(move || {
        let name = store_name.get();
        data.with(|d| d.as_ref().and_then(|d| d.monthly_report(&name)))
    });
    let product_report = Signal::derive(move || {
        let name = store_name.get();
        data.with(|d| d.as_ref().and_then(|d| d.product_report(&name)))
    });

    let content = move || {
        if is_loading.get() {
            return view! {
                <div class="store-detail__skeleton">
                    {(0..10).map(|_| view! { <div class="skeleton skeleton--text"></div> }).collect_view()}
                </div>
            }
            .into_any();
        }

        if error.with(|e| e.is_some()) || data.with(|d| d.is_none()) {
            let message = error.get().unwrap_or_else(|| FALLBACK_ERROR.to_string());
            return view! {
                <div class="error-banner" role="alert">
                    {icon("alert-triangle")}
                    <div>
                        <strong>"Erro ao carregar dados"</strong>
                        <div>{message}</div>
                    </div>
                </div>
            }
            .into_any();
        }

        view! {
            <h2 class="page__title">"Dashboard da Loja: " {move || store_name.get()}</h2>
            <KpiCardsView kpis=kpis loading=false />
            <div class="store-detail__reports">
                <Show when=move || monthly_report.with(|r| r.is_some())>
                    <DataDisplay report=monthly_report loading=false />
                </Show>
                <Show when=move || product_report.with(|r| r.is_some())>
                    <DataDisplay report=product_report loading=false />
                </Show>
            </div>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="d403_store_detail--detail" category=PAGE_CAT_DETAIL class="store-detail">
            <button class="store-detail__back" on:click=move |_| store.show_global_view()>
                {icon("arrow-left")}
                <span>"Voltar para a Visão Geral"</span>
            </button>
            {content}
        </PageFrame>
    }
}
