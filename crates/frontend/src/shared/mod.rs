pub mod api_utils;
pub mod chart;
pub mod components;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
