pub mod data_table;
pub mod number_format;
pub mod sortable_header_cell;

pub use data_table::DataTable;
pub use sortable_header_cell::SortableHeaderCell;
