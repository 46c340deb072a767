use crate::dashboards::menu::{menu_action, DEFAULT_MENU_KEY};
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// URL query key holding the active menu entry
const VIEW_PARAM: &str = "view";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Key of the selected menu entry
    pub active: RwSignal<String>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(DEFAULT_MENU_KEY.to_string()),
            left_open: RwSignal::new(true),
        }
    }

    /// Picks the initial entry from `?view=` and mirrors later changes into
    /// the URL without adding history entries
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match view_from_search(&search) {
            Some(key) if menu_action(&key).is_some() => self.active.set(key),
            Some(key) => log::warn!("Ignoring unknown view '{}'", key),
            None => {}
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = view_query(&this.active.get());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    pub fn activate(&self, key: &str) {
        log::debug!("Menu: {}", key);
        self.active.set(key.to_string());
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

/// `view` value of a location search string ("?view=sales_by_month")
pub fn view_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(VIEW_PARAM).filter(|key| !key.is_empty()).cloned()
}

/// Search string for the given menu key, leading `?` included
pub fn view_query(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(VIEW_PARAM.to_string(), key.to_string())]))
        .unwrap_or_default();
    format!("?{}", query)
}
