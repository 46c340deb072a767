pub mod data_display;
pub mod error_banner;
pub mod pagination_controls;
pub mod sql_viewer;
pub mod stat_card;
pub mod table;

pub use data_display::DataDisplay;
pub use error_banner::ErrorBanner;
pub use pagination_controls::PaginationControls;
pub use stat_card::{StatCard, StatCardSkeleton};
