//! Declarative column configuration

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Serializable description of a column
///
/// Lets column definitions live in configuration files instead of code.
/// Missing fields fall back to the same defaults as [`Column::new`](crate::Column::new).
///
/// # Example
///
/// ```rust
/// use reinhardt_table_columns::{Column, ColumnOptions};
///
/// let options = ColumnOptions::from_json(
///     r#"{"name": "email", "verbose_name": "E-mail", "sortable": false}"#,
/// )
/// .unwrap();
/// let column = Column::from_options(options);
///
/// assert_eq!(column.name(), Some("email"));
/// assert_eq!(column.header(), Some("E-mail"));
/// assert!(!column.is_sortable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOptions {
	/// Explicit column name
	pub name: Option<String>,
	/// Header label
	pub verbose_name: Option<String>,
	/// Whether the table may sort by this column
	pub sortable: bool,
	/// Whether the column is included in render passes
	pub visible: bool,
	/// Text rendered for missing values
	pub default: Option<String>,
	/// Free-form attributes available through [`Column::get`](crate::Column::get)
	pub attrs: BTreeMap<String, Value>,
}

impl Default for ColumnOptions {
	fn default() -> Self {
		Self {
			name: None,
			verbose_name: None,
			sortable: true,
			visible: true,
			default: None,
			attrs: BTreeMap::new(),
		}
	}
}

impl ColumnOptions {
	/// Parses options from a JSON document
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}
