use crate::dashboards::store::use_dashboard_store;
use crate::shared::components::stat_card::{CardStatus, ValueFormat};
use crate::shared::components::{StatCard, StatCardSkeleton};
use contracts::dashboards::d400_kpi_summary::KpiData;
use leptos::prelude::*;

/// Global KPI cards; the summary is requested once on mount
#[component]
pub fn KpiCards() -> impl IntoView {
    let store = use_dashboard_store();
    store.fetch_kpis();

    view! {
        <KpiCardsView
            kpis=store.select(|s| s.visible_kpis())
            loading=store.select(|s| s.is_loading_kpis)
        />
    }
}

/// Four KPI cards, a skeleton row while loading, nothing without data
#[component]
pub fn KpiCardsView(
    #[prop(into)] kpis: Signal<Option<KpiData>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let metric = move |f: fn(&KpiData) -> f64| Signal::derive(move || kpis.with(|k| k.as_ref().map(f)));

    move || {
        if loading.get() {
            return view! {
                <div class="kpi-cards">
                    {(0..4).map(|_| view! { <StatCardSkeleton /> }).collect_view()}
                </div>
            }
            .into_any();
        }
        if kpis.with(|k| k.is_none()) {
            return view! { <></> }.into_any();
        }
        view! {
            <div class="kpi-cards">
                <StatCard
                    label="Faturamento Total"
                    icon_name="dollar-sign"
                    value=metric(|k| k.faturamento_total)
                    format=ValueFormat::Currency
                    status=CardStatus::Good
                />
                <StatCard
                    label="Total de Vendas"
                    icon_name="shopping-cart"
                    value=metric(|k| k.total_vendas)
                    format=ValueFormat::Compact
                    status=CardStatus::Good
                />
                <StatCard
                    label="Ticket Médio"
                    icon_name="receipt"
                    value=metric(|k| k.ticket_medio)
                    format=ValueFormat::Currency
                    status=CardStatus::Good
                />
                <StatCard
                    label="Tempo Médio de Entrega"
                    icon_name="clock"
                    value=metric(|k| k.avg_tempo_entrega_min)
                    format=ValueFormat::Minutes
                    status=CardStatus::Bad
                />
            </div>
        }
        .into_any()
    }
}
