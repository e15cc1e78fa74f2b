//! The table capability a wrapped column depends on

/// Sort state and URL generation exposed by an owning table
///
/// This is the only contact point between columns and the surrounding table
/// framework. Query-string parsing, pagination and templating stay on the
/// table side.
///
/// # Example
///
/// ```rust
/// use reinhardt_table_columns::SortableTable;
///
/// struct UserTable {
///     sort: Option<String>,
/// }
///
/// impl SortableTable for UserTable {
///     type Url = String;
///
///     fn order_by(&self) -> Option<&str> {
///         self.sort.as_deref()
///     }
///
///     fn get_url(&self, order_by: &str) -> String {
///         format!("?sort={}", order_by)
///     }
/// }
///
/// let table = UserTable { sort: Some("name".to_string()) };
/// assert_eq!(table.get_url("email"), "?sort=email");
/// ```
pub trait SortableTable {
	/// Whatever the table produces for a sort link
	type Url;

	/// Returns the key the table is currently sorted by
	fn order_by(&self) -> Option<&str>;

	/// Builds the link that sorts the table by `order_by`
	fn get_url(&self, order_by: &str) -> Self::Url;
}

impl<T: SortableTable + ?Sized> SortableTable for &T {
	type Url = T::Url;

	fn order_by(&self) -> Option<&str> {
		(**self).order_by()
	}

	fn get_url(&self, order_by: &str) -> Self::Url {
		(**self).get_url(order_by)
	}
}
