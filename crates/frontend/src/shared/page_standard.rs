//! Page category constants.
//!
//! Every view rendered in the content area declares:
//!   - HTML `id` in the format `{module}--{category}` (e.g. `"d404_customer_report--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the module name searchable: copy the id from the
//! DOM inspector and search the sources for the `dashboards/d404_customer_report/` directory.

/// Table of records with sorting/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Details of a single record (one store).
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Interactive tool page (query builder).
pub const PAGE_CAT_USECASE: &str = "usecase";
