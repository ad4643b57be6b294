//! End-to-end parsing of real-world dumps

use crate::common::parse_fixture;
use rust_ddlmodel::model::TypeCategory;
use rust_ddlmodel::{Diagnostic, Dialect};

// ============================================================================
// Oracle: SCOTT.EMP
// ============================================================================

#[test]
fn test_oracle_emp() {
    let output = parse_fixture("oracle_emp.sql", Dialect::Oracle);
    let table = output.table;

    assert_eq!(table.name(), "EMP");
    assert!(table.schema().is_none());
    assert_eq!(table.columns.len(), 8);
    assert!(!table.columns[0].nullable);
    assert_eq!(table.columns[1].data_type.name(), "VARCHAR2");
    assert_eq!(table.columns[1].data_type.length(), Some(10));
    assert_eq!(table.columns[7].name(), "deptno");

    assert_eq!(table.primary_key.as_ref().unwrap().columns[0].index, Some(0));
    assert_eq!(table.foreign_keys.len(), 2);
    assert_eq!(table.foreign_keys[0].referenced_table.name(), "DEPT");
    assert_eq!(table.foreign_keys[1].name.as_ref().unwrap().name(), "fk_mgr");

    assert_eq!(table.comment.as_deref(), Some("Employees"));
    assert_eq!(table.columns[1].comment.as_deref(), Some("Employee's name"));
    assert_eq!(
        table.options,
        vec![("TABLESPACE".to_string(), "users".to_string())]
    );
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
}

// ============================================================================
// MySQL: sakila.film
// ============================================================================

#[test]
fn test_mysql_sakila_film() {
    let output = parse_fixture("mysql_film.sql", Dialect::Mysql);
    let table = output.table;

    assert_eq!(table.schema(), Some("sakila"));
    assert_eq!(table.name(), "film");
    assert_eq!(table.columns.len(), 13);
    assert_eq!(table.columns[0].data_type.name(), "SMALLINT");
    assert!(table.columns[0].auto_increment);
    assert_eq!(table.columns[1].data_type.length(), Some(255));
    assert_eq!(table.columns[10].data_type.category(), TypeCategory::Enumerated);
    assert_eq!(table.columns[11].data_type.name(), "SET");
    assert_eq!(table.columns[11].data_type.names().len(), 4);
    assert_eq!(
        table.columns[12].on_update.as_deref(),
        Some("CURRENT_TIMESTAMP")
    );

    assert!(table.primary_key.is_some());
    assert_eq!(table.indexes.len(), 3);
    assert_eq!(table.foreign_keys.len(), 2);
    assert_eq!(
        table.foreign_keys[1].name.as_ref().unwrap().name(),
        "fk_film_language_original"
    );
    assert_eq!(table.foreign_keys[1].columns[0].index, Some(5));
    assert!(table.comment.is_none());
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics);
}

// ============================================================================
// PostgreSQL: pg_catalog.pg_enum
// ============================================================================

#[test]
fn test_postgres_pg_enum() {
    let output = parse_fixture("postgres_pg_enum.sql", Dialect::Postgres);
    let table = output.table;

    assert_eq!(table.schema(), Some("pg_catalog"));
    assert_eq!(table.name(), "pg_enum");
    assert_eq!(table.columns.len(), 3);
    assert!(!table.columns[0].nullable);
    assert_eq!(table.columns[1].data_type.name(), "REAL");

    assert_eq!(table.indexes.len(), 3);
    assert!(table.indexes.iter().all(|i| i.unique));
    assert!(table
        .indexes
        .iter()
        .all(|i| i.algorithm.as_deref() == Some("btree")));
    assert_eq!(
        table.indexes[2].columns.iter().map(|c| c.index).collect::<Vec<_>>(),
        vec![Some(0), Some(1)]
    );

    // The oid system column is not declared in the dump.
    assert!(!table.indexes[0].columns[0].is_resolved());
    let unresolved: Vec<_> = output
        .diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::UnresolvedReference { .. }))
        .collect();
    assert_eq!(unresolved.len(), 1);
}
