pub mod chart_view;
pub mod echarts;
pub mod options;

pub use chart_view::ReportChart;
