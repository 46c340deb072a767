pub mod center;
pub mod global_context;
pub mod header;
pub mod left;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------+
/// |            Header            |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>
                <center::Center />
            </div>
        </div>
    }
}
