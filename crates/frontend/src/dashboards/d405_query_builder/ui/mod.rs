mod filter_row;
mod query_view;

pub use query_view::QueryBuilderView;
