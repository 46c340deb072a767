mod report_view;

pub use report_view::GlobalReportView;
