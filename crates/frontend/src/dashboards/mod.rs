pub mod d400_kpi_summary;
pub mod d401_sales_reports;
pub mod d402_store_funnel;
pub mod d403_store_detail;
pub mod d404_customer_report;
pub mod d405_query_builder;
pub mod menu;
pub mod state;
pub mod store;

pub use d400_kpi_summary::ui::KpiCards;
pub use d401_sales_reports::ui::GlobalReportView;
pub use d402_store_funnel::ui::StoreFunnelView;
pub use d403_store_detail::ui::StoreDetailView;
pub use d404_customer_report::ui::CustomerReportView;
pub use d405_query_builder::ui::QueryBuilderView;
