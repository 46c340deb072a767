//! PageFrame: root wrapper of every view shown in the content area.
//!
//! Sets two metadata attributes on the root DOM element:
//!   - `id`                  `"{module}--{category}"`, e.g. `"d402_store_funnel--dashboard"`
//!   - `data-page-category`  one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// BEM class of a page for its category
pub fn page_class(category: &str, extra: &str) -> String {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };
    if extra.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {extra}")
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{module}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=page_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_class() {
        assert_eq!(page_class(PAGE_CAT_DASHBOARD, ""), "page page--dashboard");
        assert_eq!(page_class(PAGE_CAT_LIST, "customer-report"), "page customer-report");
    }
}
