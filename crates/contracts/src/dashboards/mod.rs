pub mod d400_kpi_summary;
pub mod d401_sales_reports;
pub mod d402_store_funnel;
pub mod d403_store_detail;
pub mod d404_customer_report;
pub mod d405_query_builder;
