//! Error types for column binding and wrapping.

use thiserror::Error;

/// Errors that can occur while binding or wrapping columns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
	/// The column already belongs to a table
	///
	/// A column may be bound exactly once. The existing binding is left
	/// untouched when this error is returned.
	#[error("Column already bound as '{bound_as}', cannot rebind as '{name}'")]
	AlreadyBound {
		/// Name the caller tried to bind the column under
		name: String,
		/// Name the column is currently bound under
		bound_as: String,
	},

	/// The attribute is derived by the wrapper and cannot be assigned
	#[error("Attribute is read-only: {0}")]
	ReadOnlyAttribute(String),
}

/// Result type for column operations
pub type Result<T> = std::result::Result<T, TableError>;
