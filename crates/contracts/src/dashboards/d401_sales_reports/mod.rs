pub mod context;
pub mod dto;

pub use context::*;
pub use dto::*;
