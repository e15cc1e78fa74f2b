//! Common test fixtures for reinhardt-table-columns tests

#![allow(dead_code)]

use reinhardt_table_columns::{CreationCounter, SortableTable};
use rstest::*;
use std::sync::Arc;

/// Table options the columns read sort state from
#[derive(Debug, Clone, Default)]
pub struct TableMeta {
	pub order_by: Option<String>,
}

/// Minimal table that records its sort key and echoes sort links
#[derive(Debug, Clone, Default)]
pub struct FakeTable {
	pub meta: TableMeta,
}

impl FakeTable {
	pub fn ordered_by(order_by: &str) -> Self {
		Self {
			meta: TableMeta {
				order_by: Some(order_by.to_string()),
			},
		}
	}
}

impl SortableTable for FakeTable {
	type Url = Vec<String>;

	fn order_by(&self) -> Option<&str> {
		self.meta.order_by.as_deref()
	}

	fn get_url(&self, order_by: &str) -> Vec<String> {
		vec!["nu".to_string(), order_by.to_string()]
	}
}

/// Fixture providing an unsorted table
#[fixture]
pub fn table() -> Arc<FakeTable> {
	Arc::new(FakeTable::default())
}

/// Fixture providing a table sorted by "kappa"
#[fixture]
pub fn kappa_table() -> FakeTable {
	FakeTable::ordered_by("kappa")
}

/// Fixture providing an isolated creation counter
#[fixture]
pub fn counter() -> CreationCounter {
	CreationCounter::new()
}
