//! Per-render view of a bound column

use crate::column::base::Column;
use crate::error::{Result, TableError};
use crate::table::SortableTable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};
use std::ops::Deref;

/// Properties derived by [`WrappedColumn`] itself. These cannot be assigned.
const DERIVED_PROPERTIES: &[&str] = &["is_sorted", "sort_direction", "sort_url"];

/// Direction a sorted column is ordered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
	/// Ascending order
	#[serde(rename = "asc")]
	Asc,
}

impl SortDirection {
	/// Returns the query-string form of the direction
	pub fn as_str(&self) -> &'static str {
		match self {
			SortDirection::Asc => "asc",
		}
	}
}

impl Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A bound column seen through the table it belongs to
///
/// Created fresh for every render pass. Column properties are read through
/// from the underlying [`Column`] (also reachable via `Deref`), never copied,
/// so later changes to the column stay visible. Attributes set on the wrapper
/// live on the wrapper only.
///
/// # Example
///
/// ```rust
/// use reinhardt_table_columns::{Column, SortDirection, SortableTable, WrappedColumn};
///
/// struct UserTable;
///
/// impl SortableTable for UserTable {
///     type Url = String;
///
///     fn order_by(&self) -> Option<&str> {
///         Some("name")
///     }
///
///     fn get_url(&self, order_by: &str) -> String {
///         format!("?sort={}", order_by)
///     }
/// }
///
/// let table = UserTable;
/// let column = Column::named("name");
/// let wrapped = WrappedColumn::new(&table, &column);
///
/// assert!(wrapped.is_sorted());
/// assert_eq!(wrapped.sort_direction(), Some(SortDirection::Asc));
/// assert_eq!(wrapped.sort_url(), "?sort=name");
/// ```
pub struct WrappedColumn<'a, T: SortableTable + ?Sized> {
	table: &'a T,
	column: &'a Column,
	attrs: BTreeMap<String, Value>,
}

impl<'a, T: SortableTable + ?Sized> WrappedColumn<'a, T> {
	/// Wraps `column` for rendering as part of `table`
	pub fn new(table: &'a T, column: &'a Column) -> Self {
		Self {
			table,
			column,
			attrs: BTreeMap::new(),
		}
	}

	/// Returns the owning table
	pub fn table(&self) -> &'a T {
		self.table
	}

	/// Returns the underlying column
	pub fn column(&self) -> &'a Column {
		self.column
	}

	/// Returns true if the table is currently sorted by this column
	pub fn is_sorted(&self) -> bool {
		match (self.table.order_by(), self.column.name()) {
			(Some(order_by), Some(name)) => order_by == name,
			_ => false,
		}
	}

	/// Returns the direction the column is sorted in, if it is sorted
	pub fn sort_direction(&self) -> Option<SortDirection> {
		self.is_sorted().then_some(SortDirection::Asc)
	}

	/// Returns the table's link for sorting by this column
	pub fn sort_url(&self) -> T::Url {
		self.table.get_url(self.column.name().unwrap_or_default())
	}

	/// Looks up a property by name
	///
	/// Derived sort properties come first, then attributes set on this
	/// wrapper, then the column's own properties.
	pub fn get(&self, key: &str) -> Option<Value> {
		match key {
			"is_sorted" => Some(Value::Bool(self.is_sorted())),
			"sort_direction" => Some(
				self.sort_direction()
					.map_or(Value::Null, |direction| Value::from(direction.as_str())),
			),
			// Only reachable through `sort_url()`, whose type is the table's
			"sort_url" => None,
			_ => self
				.attrs
				.get(key)
				.cloned()
				.or_else(|| self.column.get(key)),
		}
	}

	/// Stores an attribute on this wrapper
	///
	/// The underlying column and other wrappers of it are not affected.
	///
	/// # Errors
	///
	/// Returns [`TableError::ReadOnlyAttribute`] for the derived sort
	/// properties.
	pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
		let key = key.into();
		if DERIVED_PROPERTIES.contains(&key.as_str()) {
			return Err(TableError::ReadOnlyAttribute(key));
		}
		tracing::trace!(key = %key, column = %self.column, "Setting wrapper attribute");
		self.attrs.insert(key, value.into());
		Ok(())
	}
}

impl<T: SortableTable + ?Sized> Deref for WrappedColumn<'_, T> {
	type Target = Column;

	fn deref(&self) -> &Column {
		self.column
	}
}

impl<T: SortableTable + ?Sized> Display for WrappedColumn<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Display::fmt(self.column, f)
	}
}

impl<T: SortableTable + ?Sized> Debug for WrappedColumn<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WrappedColumn")
			.field("column", self.column)
			.field("is_sorted", &self.is_sorted())
			.field("attrs", &self.attrs)
			.finish_non_exhaustive()
	}
}
