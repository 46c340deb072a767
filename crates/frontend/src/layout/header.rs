use crate::layout::global_context::use_app_context;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header data-zone="header" class="header">
            <button
                class="button button--ghost"
                aria-label="Alternar menu"
                on:click=move |_| ctx.toggle_left()
            >
                {move || if ctx.left_open.get() { "◀" } else { "▶" }}
            </button>
            <span class="header__title">"Dashboard de Analytics - Restaurantes"</span>
        </header>
    }
}
