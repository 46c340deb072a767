pub mod data_row;

pub use data_row::*;
