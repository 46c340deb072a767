use crate::shared::icons::icon;
use leptos::prelude::*;

/// The dashboard's single error message; renders nothing while `error` is None
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    {icon("alert-triangle")}
                    <strong>"Erro: "</strong>
                    <span>{message}</span>
                </div>
            }
        })
    }
}
