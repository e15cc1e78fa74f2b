//! Column descriptors for Reinhardt data tables
//!
//! This crate provides the django-tables style column layer: columns are
//! declared standalone, recover their declaration order from a creation
//! stamp, bind once to the table that owns them, and are wrapped per render
//! pass to expose the table's sort state.
//!
//! # Features
//!
//! - **Declaration order**: Columns sort by creation, not by map order
//! - **One-shot binding**: A column belongs to exactly one table
//! - **Rendering**: Cell values render through their `Display` text
//! - **Sorting**: Wrapped columns report sort state and sort links
//! - **Configuration**: Columns can be described with serde-backed options
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[CreationCounter] --> B[Column]
//!     B --> C[DeclaredColumns]
//!     C -->|bind_all| D[Table]
//!     C -->|wrap| E[WrappedColumn]
//!     D -->|SortableTable| E
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_table_columns::{Column, DeclaredColumns, SortableTable};
//! use std::sync::Arc;
//!
//! struct UserTable {
//!     sort: Option<String>,
//! }
//!
//! impl SortableTable for UserTable {
//!     type Url = String;
//!
//!     fn order_by(&self) -> Option<&str> {
//!         self.sort.as_deref()
//!     }
//!
//!     fn get_url(&self, order_by: &str) -> String {
//!         format!("?sort={}", order_by)
//!     }
//! }
//!
//! let columns: DeclaredColumns = vec![
//!     ("id", Column::new()),
//!     ("name", Column::new().with_verbose_name("User Name")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let table = Arc::new(UserTable { sort: Some("name".to_string()) });
//! columns.bind_all(&table).unwrap();
//!
//! let headers: Vec<String> = columns
//!     .wrap(table.as_ref())
//!     .iter()
//!     .map(|column| match column.sort_direction() {
//!         Some(direction) => format!("{} ({})", column.header().unwrap_or(""), direction),
//!         None => column.header().unwrap_or("").to_string(),
//!     })
//!     .collect();
//!
//! assert_eq!(headers, vec!["id", "User Name (asc)"]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod counter;
pub mod declared;
pub mod error;
pub mod table;

// Re-exports for convenience
pub use column::{Binding, Column, ColumnOptions, SortDirection, WrappedColumn};
pub use counter::CreationCounter;
pub use declared::DeclaredColumns;
pub use error::{Result, TableError};
pub use table::SortableTable;
