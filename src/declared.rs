//! Collecting declared columns into a table definition

use crate::column::{Column, WrappedColumn};
use crate::error::{Result, TableError};
use crate::table::SortableTable;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// The columns a table definition declares, in declaration order
///
/// Table definitions usually gather their columns into an unordered map
/// keyed by attribute name. `DeclaredColumns` restores the order the columns
/// were written in using their creation stamps, binds them to the owning
/// table, and wraps them for each render pass.
///
/// # Example
///
/// ```rust
/// use reinhardt_table_columns::{Column, DeclaredColumns};
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// struct UserTable;
///
/// let id = Column::new();
/// let name = Column::new();
///
/// let mut attrs = HashMap::new();
/// attrs.insert("name".to_string(), name);
/// attrs.insert("id".to_string(), id);
///
/// let columns = DeclaredColumns::from_map(attrs);
/// columns.bind_all(&Arc::new(UserTable)).unwrap();
///
/// let names: Vec<_> = columns.iter().map(|(key, _)| key).collect();
/// assert_eq!(names, vec!["id", "name"]);
/// ```
#[derive(Debug, Default)]
pub struct DeclaredColumns {
	columns: Vec<(String, Column)>,
}

impl DeclaredColumns {
	/// Collects columns from an attribute-name map
	pub fn from_map(columns: HashMap<String, Column>) -> Self {
		columns.into_iter().collect()
	}

	/// Binds every column to `table` under its attribute name
	///
	/// All columns are checked first, so a failed call binds nothing.
	///
	/// # Errors
	///
	/// Returns [`TableError::AlreadyBound`] for the first column in
	/// declaration order that already belongs to a table.
	pub fn bind_all<T: Any + Send + Sync>(&self, table: &Arc<T>) -> Result<()> {
		if let Some((key, binding)) = self
			.columns
			.iter()
			.find_map(|(key, column)| column.bound_to().map(|binding| (key, binding)))
		{
			tracing::warn!(
				name = %key,
				bound_as = %binding.name(),
				"Refusing to bind declared columns"
			);
			return Err(TableError::AlreadyBound {
				name: key.clone(),
				bound_as: binding.name().to_string(),
			});
		}

		for (key, column) in &self.columns {
			column.bind_to(table, key.as_str())?;
		}
		tracing::debug!(count = self.columns.len(), "Bound declared columns");
		Ok(())
	}

	/// Returns the column declared under `key`
	pub fn get(&self, key: &str) -> Option<&Column> {
		self.columns
			.iter()
			.find(|(name, _)| name == key)
			.map(|(_, column)| column)
	}

	/// Iterates attribute names and columns in declaration order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
		self.columns
			.iter()
			.map(|(key, column)| (key.as_str(), column))
	}

	/// Returns the number of declared columns
	pub fn len(&self) -> usize {
		self.columns.len()
	}

	/// Returns true if no columns are declared
	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	/// Wraps the visible columns for one render pass
	pub fn wrap<'a, T: SortableTable + ?Sized>(&'a self, table: &'a T) -> Vec<WrappedColumn<'a, T>> {
		self.columns
			.iter()
			.filter(|(_, column)| column.is_visible())
			.map(|(_, column)| WrappedColumn::new(table, column))
			.collect()
	}
}

impl<K: Into<String>> FromIterator<(K, Column)> for DeclaredColumns {
	fn from_iter<I: IntoIterator<Item = (K, Column)>>(iter: I) -> Self {
		let mut columns: Vec<(String, Column)> = iter
			.into_iter()
			.map(|(key, column)| (key.into(), column))
			.collect();
		columns.sort_by(|(_, a), (_, b)| a.cmp(b));
		Self { columns }
	}
}
