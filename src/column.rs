//! Column descriptors and their per-render wrappers

pub mod base;
pub mod options;
pub mod wrapped;

pub use base::{Binding, Column};
pub use options::ColumnOptions;
pub use wrapped::{SortDirection, WrappedColumn};
