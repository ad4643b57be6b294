//! Common test utilities for rust-ddlmodel tests

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

use rust_ddlmodel::{parse_ddl, parse_ddl_file, Dialect, ParseOptions, ParseOutput, Table};
use tempfile::NamedTempFile;

/// Get the path to a test fixture
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Parse a fixture file, panicking with the error if parsing fails.
pub fn parse_fixture(name: &str, dialect: Dialect) -> ParseOutput {
    let path = fixture_path(name);
    parse_ddl_file(&path, &ParseOptions::new(dialect))
        .unwrap_or_else(|e| panic!("Failed to parse fixture '{}': {}", name, e))
}

/// Helper to create a temp SQL file with content
pub fn create_sql_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".sql").unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Emit `table` as SQL and parse it again under the same dialect.
pub fn reparse(table: &Table) -> Table {
    let sql = table.to_sql();
    parse_ddl(&sql, &ParseOptions::new(table.dialect))
        .unwrap_or_else(|e| panic!("Failed to re-parse emitted SQL: {}\n{}", e, sql))
        .table
}

/// Column names, types and nullability in a form that is easy to compare.
pub fn column_summary(table: &Table) -> Vec<(String, String, bool)> {
    table
        .columns
        .iter()
        .map(|c| (c.name().to_string(), c.data_type.to_sql(), c.nullable))
        .collect()
}

/// Kind, name and column names of every constraint.
pub fn constraint_summary(table: &Table) -> Vec<(String, Option<String>, Vec<String>)> {
    table
        .constraints()
        .iter()
        .map(|c| {
            (
                c.kind().to_string(),
                c.name().map(|n| n.name().to_string()),
                c.columns().iter().map(|r| r.name.name().to_string()).collect(),
            )
        })
        .collect()
}
