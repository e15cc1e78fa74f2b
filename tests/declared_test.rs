mod fixtures;

use fixtures::{FakeTable, counter};
use reinhardt_table_columns::{Column, ColumnOptions, CreationCounter, DeclaredColumns};
use rstest::*;
use std::collections::HashMap;
use std::sync::Arc;

#[fixture]
fn user_columns(counter: CreationCounter) -> DeclaredColumns {
	let mut attrs = HashMap::new();
	attrs.insert("id".to_string(), Column::with_counter(&counter));
	attrs.insert(
		"name".to_string(),
		Column::with_counter(&counter).with_verbose_name("Name"),
	);
	attrs.insert(
		"email".to_string(),
		Column::with_counter(&counter).with_name("contact"),
	);
	attrs.insert(
		"password".to_string(),
		Column::with_counter(&counter).with_visible(false),
	);
	DeclaredColumns::from_map(attrs)
}

#[rstest]
fn test_map_iterates_in_declaration_order(user_columns: DeclaredColumns) {
	let keys: Vec<_> = user_columns.iter().map(|(key, _)| key).collect();
	assert_eq!(keys, vec!["id", "name", "email", "password"]);
	assert_eq!(user_columns.len(), 4);
}

#[rstest]
fn test_bind_all_names_columns(user_columns: DeclaredColumns) {
	// Arrange
	let table = Arc::new(FakeTable::default());

	// Act
	user_columns.bind_all(&table).unwrap();

	// Assert
	for (key, column) in user_columns.iter() {
		let binding = column.bound_to().unwrap();
		assert!(binding.is_table(&table));
		assert_eq!(binding.name(), key);
	}
	assert_eq!(user_columns.get("id").unwrap().name(), Some("id"));
	assert_eq!(user_columns.get("email").unwrap().name(), Some("contact"));
}

#[rstest]
fn test_bind_all_twice_fails(user_columns: DeclaredColumns) {
	let table = Arc::new(FakeTable::default());
	user_columns.bind_all(&table).unwrap();

	let result = user_columns.bind_all(&Arc::new(FakeTable::default()));

	assert!(result.is_err());
	assert!(user_columns.get("id").unwrap().bound_to().unwrap().is_table(&table));
}

#[rstest]
fn test_wrap_skips_hidden_columns(user_columns: DeclaredColumns) {
	// Arrange
	let table = Arc::new(FakeTable::ordered_by("name"));
	user_columns.bind_all(&table).unwrap();

	// Act
	let wrapped = user_columns.wrap(table.as_ref());

	// Assert
	let headers: Vec<_> = wrapped.iter().map(|column| column.header()).collect();
	assert_eq!(headers, vec![Some("id"), Some("Name"), Some("contact")]);
	let sorted: Vec<_> = wrapped.iter().map(|column| column.is_sorted()).collect();
	assert_eq!(sorted, vec![false, true, false]);
	assert_eq!(wrapped[2].sort_url(), vec!["nu", "contact"]);
}

#[rstest]
fn test_columns_from_options(counter: CreationCounter) {
	// Arrange
	let json = r#"{"verbose_name": "Active", "default": "-", "attrs": {"align": "center"}}"#;
	let options = ColumnOptions::from_json(json).unwrap();

	// Act
	let column = Column::from_options_with_counter(options, &counter);
	let table = Arc::new(FakeTable::default());
	column.bind_to(&table, "active").unwrap();

	// Assert
	assert_eq!(column.creation_counter(), 0);
	assert_eq!(column.name(), Some("active"));
	assert_eq!(column.header(), Some("Active"));
	assert_eq!(column.render_or_default::<bool>(None), "-");
	assert_eq!(column.render_or_default(Some(&false)), "false");
	assert_eq!(column.get("align"), Some(serde_json::json!("center")));
}
