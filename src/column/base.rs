//! Base column descriptor

use crate::column::options::ColumnOptions;
use crate::counter::CreationCounter;
use crate::error::{Result, TableError};
use serde_json::Value;
use std::any::Any;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Display};
use std::sync::{Arc, OnceLock, Weak};

/// Association between a column and the table that owns it
///
/// The table is held weakly: tables own their columns, not the other way
/// around.
pub struct Binding {
	table: Weak<dyn Any + Send + Sync>,
	name: String,
}

impl Binding {
	/// Returns the name the table bound the column under
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the owning table if it is still alive and of type `T`
	pub fn table<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
		self.table.upgrade()?.downcast::<T>().ok()
	}

	/// Returns true if `table` is the owning table
	pub fn is_table<T: Any + Send + Sync>(&self, table: &Arc<T>) -> bool {
		std::ptr::addr_eq(self.table.as_ptr(), Arc::as_ptr(table))
	}
}

impl Debug for Binding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Binding")
			.field("name", &self.name)
			.field("table_alive", &(self.table.strong_count() > 0))
			.finish()
	}
}

/// A declarative table column
///
/// Columns are declared standalone, then bound exactly once to the table that
/// owns them. Until then a column may have no name at all; binding supplies
/// one unless an explicit name was given at construction.
///
/// Columns compare by creation order, so sorting a set of declared columns
/// reproduces the order they were written in.
///
/// # Example
///
/// ```rust
/// use reinhardt_table_columns::Column;
/// use std::sync::Arc;
///
/// struct UserTable;
///
/// let id = Column::new();
/// let email = Column::named("email").with_verbose_name("E-mail");
///
/// let table = Arc::new(UserTable);
/// id.bind_to(&table, "id").unwrap();
/// email.bind_to(&table, "contact").unwrap();
///
/// assert_eq!(id.name(), Some("id"));
/// assert_eq!(email.name(), Some("email"));
/// assert!(id < email);
/// assert!(id.bind_to(&table, "pk").is_err());
/// ```
#[derive(Debug)]
pub struct Column {
	counter_id: u64,
	creation_counter: u64,
	name: Option<String>,
	verbose_name: Option<String>,
	sortable: bool,
	visible: bool,
	default: Option<String>,
	attrs: BTreeMap<String, Value>,
	binding: OnceLock<Binding>,
}

impl Column {
	/// Creates an unnamed column stamped from the global counter
	pub fn new() -> Self {
		Self::with_counter(CreationCounter::global())
	}

	/// Creates a column with an explicit name
	pub fn named(name: impl Into<String>) -> Self {
		Self::new().with_name(name)
	}

	/// Creates an unnamed column stamped from `counter`
	///
	/// Declaration order is only recovered between columns stamped by the
	/// same counter. Columns from different counters still never compare
	/// equal: ties on the stamp are broken by the counter's identity.
	pub fn with_counter(counter: &CreationCounter) -> Self {
		Self {
			counter_id: counter.id(),
			creation_counter: counter.next(),
			name: None,
			verbose_name: None,
			sortable: true,
			visible: true,
			default: None,
			attrs: BTreeMap::new(),
			binding: OnceLock::new(),
		}
	}

	/// Creates a column from declarative options
	pub fn from_options(options: ColumnOptions) -> Self {
		Self::from_options_with_counter(options, CreationCounter::global())
	}

	/// Creates a column from declarative options, stamped from `counter`
	pub fn from_options_with_counter(options: ColumnOptions, counter: &CreationCounter) -> Self {
		let ColumnOptions {
			name,
			verbose_name,
			sortable,
			visible,
			default,
			attrs,
		} = options;

		Self {
			name,
			verbose_name,
			sortable,
			visible,
			default,
			attrs,
			..Self::with_counter(counter)
		}
	}

	/// Sets the explicit name
	///
	/// An explicit name wins over the name a table binds the column under.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the header label
	pub fn with_verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.verbose_name = Some(verbose_name.into());
		self
	}

	/// Sets whether the table may sort by this column
	pub fn with_sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether the column takes part in render passes
	pub fn with_visible(mut self, visible: bool) -> Self {
		self.visible = visible;
		self
	}

	/// Sets the text rendered for missing values
	pub fn with_default(mut self, default: impl Into<String>) -> Self {
		self.default = Some(default.into());
		self
	}

	/// Adds a free-form attribute
	pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.attrs.insert(key.into(), value.into());
		self
	}

	/// Returns the creation stamp
	pub fn creation_counter(&self) -> u64 {
		self.creation_counter
	}

	/// Binds the column to its owning table
	///
	/// # Errors
	///
	/// Returns [`TableError::AlreadyBound`] if the column is already bound.
	/// The existing binding is kept.
	pub fn bind_to<T: Any + Send + Sync>(&self, table: &Arc<T>, name: impl Into<String>) -> Result<()> {
		let table: Weak<T> = Arc::downgrade(table);
		let table: Weak<dyn Any + Send + Sync> = table;
		let binding = Binding {
			table,
			name: name.into(),
		};

		match self.binding.set(binding) {
			Ok(()) => {
				tracing::debug!(
					creation_counter = self.creation_counter,
					name = ?self.name(),
					"Column bound to table"
				);
				Ok(())
			}
			Err(rejected) => {
				let bound_as = self
					.binding
					.get()
					.map(|binding| binding.name.clone())
					.unwrap_or_default();
				tracing::warn!(
					creation_counter = self.creation_counter,
					bound_as = %bound_as,
					name = %rejected.name,
					"Rejected attempt to rebind column"
				);
				Err(TableError::AlreadyBound {
					name: rejected.name,
					bound_as,
				})
			}
		}
	}

	/// Returns true once the column has been bound
	pub fn is_bound(&self) -> bool {
		self.binding.get().is_some()
	}

	/// Returns the binding, if any
	pub fn bound_to(&self) -> Option<&Binding> {
		self.binding.get()
	}

	/// Returns the resolved name
	///
	/// The explicit name if one was given, otherwise the binding name.
	pub fn name(&self) -> Option<&str> {
		self.name
			.as_deref()
			.or_else(|| self.binding.get().map(Binding::name))
	}

	/// Returns the header label, if one was set
	pub fn verbose_name(&self) -> Option<&str> {
		self.verbose_name.as_deref()
	}

	/// Returns the header text, falling back to the resolved name
	pub fn header(&self) -> Option<&str> {
		self.verbose_name().or_else(|| self.name())
	}

	/// Returns whether the table may sort by this column
	pub fn is_sortable(&self) -> bool {
		self.sortable
	}

	/// Returns whether the column takes part in render passes
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// Returns the text rendered for missing values, if set
	pub fn default_text(&self) -> Option<&str> {
		self.default.as_deref()
	}

	/// Returns the free-form attributes
	pub fn attrs(&self) -> &BTreeMap<String, Value> {
		&self.attrs
	}

	/// Looks up a property by name
	///
	/// Built-in properties are checked first, then free-form attributes.
	/// Unresolved built-in properties yield [`Value::Null`].
	pub fn get(&self, key: &str) -> Option<Value> {
		let value = match key {
			"name" => optional_text(self.name()),
			"verbose_name" => optional_text(self.verbose_name()),
			"header" => optional_text(self.header()),
			"default" => optional_text(self.default_text()),
			"is_bound" => Value::Bool(self.is_bound()),
			"sortable" => Value::Bool(self.sortable),
			"visible" => Value::Bool(self.visible),
			"creation_counter" => Value::from(self.creation_counter),
			_ => return self.attrs.get(key).cloned(),
		};
		Some(value)
	}

	/// Renders a cell value as text
	///
	/// Uses the value's own `Display` output with no escaping or
	/// localization, so `true` renders as `"true"` and `123` as `"123"`.
	pub fn render<V: Display + ?Sized>(&self, value: &V) -> String {
		value.to_string()
	}

	/// Renders a cell value, or the column default when it is missing
	pub fn render_or_default<V: Display + ?Sized>(&self, value: Option<&V>) -> String {
		match value {
			Some(value) => self.render(value),
			None => self.default.clone().unwrap_or_default(),
		}
	}
}

fn optional_text(text: Option<&str>) -> Value {
	text.map_or(Value::Null, Value::from)
}

impl Default for Column {
	fn default() -> Self {
		Self::new()
	}
}

impl Display for Column {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name().unwrap_or("None"))
	}
}

impl PartialEq for Column {
	fn eq(&self, other: &Self) -> bool {
		self.creation_counter == other.creation_counter && self.counter_id == other.counter_id
	}
}

impl Eq for Column {}

impl PartialOrd for Column {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Column {
	fn cmp(&self, other: &Self) -> Ordering {
		self.creation_counter
			.cmp(&other.creation_counter)
			.then(self.counter_id.cmp(&other.counter_id))
	}
}
