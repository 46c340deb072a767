//! Sidebar menu with one collapsible group

use crate::dashboards::menu::{menu_entries, MenuEntry, MenuItem, DEFAULT_EXPANDED_GROUP};
use crate::dashboards::store::use_dashboard_store;
use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
fn SidebarItem(item: MenuItem, #[prop(optional)] nested: bool) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_dashboard_store();
    let key = item.key;

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.active.with(|a| a == key)
            style:padding-left=move || if nested { "28px" } else { "12px" }
            on:click=move |_| {
                ctx.activate(key);
                store.open_menu_entry(key);
            }
        >
            <div class="app-sidebar__item-content">
                {icon(item.icon)}
                <span>{item.label}</span>
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let expanded_groups = RwSignal::new(vec![DEFAULT_EXPANDED_GROUP.to_string()]);

    view! {
        <div class="app-sidebar__content">
            {menu_entries()
                .into_iter()
                .map(|entry| match entry {
                    MenuEntry::Item(item) => view! { <SidebarItem item=item /> }.into_any(),
                    MenuEntry::Group { id, label, icon: icon_name, items } => {
                        let is_expanded = move || expanded_groups.with(|g| g.iter().any(|x| x == id));
                        view! {
                            <div>
                                <div
                                    class="app-sidebar__item"
                                    style:padding-left="12px"
                                    on:click=move |_| {
                                        expanded_groups.update(|groups| {
                                            if let Some(pos) = groups.iter().position(|x| x == id) {
                                                groups.remove(pos);
                                            } else {
                                                groups.push(id.to_string());
                                            }
                                        });
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </div>
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=is_expanded
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                </div>
                                <Show when=is_expanded>
                                    <div class="app-sidebar__children">
                                        {items
                                            .iter()
                                            .map(|item| view! { <SidebarItem item=*item nested=true /> })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                        .into_any()
                    }
                })
                .collect_view()}
        </div>
    }
}
