//! Tests for statements following CREATE TABLE: COMMENT ON, ALTER TABLE and CREATE INDEX

use rust_ddlmodel::{parse_ddl, DdlError, Diagnostic, Dialect, ParseOptions, ParseOutput};

fn parse(sql: &str, dialect: Dialect) -> ParseOutput {
    parse_ddl(sql, &ParseOptions::new(dialect))
        .unwrap_or_else(|e| panic!("Failed to parse: {}\n{}", e, sql))
}

// ============================================================================
// COMMENT ON Tests
// ============================================================================

#[test]
fn test_comment_on_table_and_column() {
    let output = parse(
        r#"
CREATE TABLE public.invoice (id INTEGER, total NUMERIC(12,2));
COMMENT ON TABLE public.invoice IS 'Customer invoices';
COMMENT ON COLUMN public.invoice.total IS 'Gross total; tax included';
"#,
        Dialect::Postgres,
    );
    let table = output.table;
    assert_eq!(table.comment.as_deref(), Some("Customer invoices"));
    assert_eq!(
        table.columns[1].comment.as_deref(),
        Some("Gross total; tax included")
    );
    assert!(table.columns[0].comment.is_none());
}

#[test]
fn test_comment_is_null_clears() {
    let output = parse(
        "CREATE TABLE t (a INTEGER); COMMENT ON TABLE t IS 'x'; COMMENT ON TABLE t IS NULL;",
        Dialect::Standard,
    );
    assert!(output.table.comment.is_none());
}

#[test]
fn test_comment_on_unknown_column() {
    let sql = "CREATE TABLE t (a NUMBER); COMMENT ON COLUMN t.b IS 'gone';";
    let output = parse(sql, Dialect::Oracle);
    assert!(matches!(
        output.diagnostics.iter().next(),
        Some(Diagnostic::UnresolvedReference { .. })
    ));

    let strict = ParseOptions::new(Dialect::Oracle).with_strict_references(true);
    assert!(matches!(
        parse_ddl(sql, &strict),
        Err(DdlError::UnresolvedColumn { .. })
    ));
}

#[test]
fn test_comment_on_other_table_is_error() {
    let result = parse_ddl(
        "CREATE TABLE t (a INTEGER); COMMENT ON TABLE other IS 'x';",
        &ParseOptions::new(Dialect::Postgres),
    );
    assert!(matches!(result, Err(DdlError::Syntax { .. })));
}

// ============================================================================
// ALTER TABLE Tests
// ============================================================================

#[test]
fn test_alter_table_add_constraints() {
    let output = parse(
        r#"
CREATE TABLE dept (deptno NUMBER(2), dname VARCHAR2(14));
ALTER TABLE dept ADD CONSTRAINT pk_dept PRIMARY KEY (deptno);
ALTER TABLE dept ADD CONSTRAINT uk_dname UNIQUE (dname);
"#,
        Dialect::Oracle,
    );
    let table = output.table;
    let pk = table.primary_key.expect("primary key");
    assert_eq!(pk.name.unwrap().name(), "pk_dept");
    assert_eq!(table.unique_keys.len(), 1);
    assert_eq!(table.unique_keys[0].columns[0].index, Some(1));
}

#[test]
fn test_alter_table_add_column() {
    let output = parse(
        r#"
CREATE TABLE `film` (`film_id` INT);
ALTER TABLE `film` ADD COLUMN `rating` VARCHAR(5) NOT NULL DEFAULT 'G';
ALTER TABLE `film` ADD `language_id` TINYINT UNSIGNED;
"#,
        Dialect::Mysql,
    );
    let names: Vec<_> = output.table.columns.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["film_id", "rating", "language_id"]);
    assert_eq!(
        output.table.columns[1].default_value.as_deref(),
        Some("'G'")
    );
}

#[test]
fn test_alter_table_add_group() {
    let output = parse(
        "CREATE TABLE emp (empno NUMBER(4)); ALTER TABLE emp ADD (ename VARCHAR2(10), CONSTRAINT pk_emp PRIMARY KEY (empno));",
        Dialect::Oracle,
    );
    assert_eq!(output.table.columns.len(), 2);
    assert!(output.table.primary_key.is_some());
}

#[test]
fn test_other_alter_actions_are_skipped() {
    let output = parse(
        r#"
CREATE TABLE t (a INTEGER);
ALTER TABLE t OWNER TO postgres;
ALTER TABLE ONLY t ALTER COLUMN a SET DEFAULT 1;
ALTER SEQUENCE s OWNED BY t.a;
"#,
        Dialect::Postgres,
    );
    assert_eq!(output.table.columns.len(), 1);
    assert!(output.table.columns[0].default_value.is_none());
}

// ============================================================================
// CREATE INDEX Tests
// ============================================================================

#[test]
fn test_create_index_statements() {
    let output = parse(
        r#"
CREATE TABLE t (a INTEGER, b TEXT);
CREATE INDEX t_a ON t (a);
CREATE UNIQUE INDEX CONCURRENTLY IF NOT EXISTS t_b ON ONLY t USING hash (b) WHERE b IS NOT NULL;
"#,
        Dialect::Postgres,
    );
    let indexes = &output.table.indexes;
    assert_eq!(indexes.len(), 2);
    assert!(!indexes[0].unique);
    assert!(indexes[1].unique);
    assert_eq!(indexes[1].name.as_ref().unwrap().name(), "t_b");
    assert_eq!(indexes[1].algorithm.as_deref(), Some("hash"));
    assert_eq!(indexes[1].columns[0].index, Some(1));
}

#[test]
fn test_create_index_unsupported_algorithm() {
    let result = parse_ddl(
        "CREATE TABLE t (a NUMBER); CREATE INDEX t_a ON t USING gist (a);",
        &ParseOptions::new(Dialect::Oracle),
    );
    assert!(matches!(
        result,
        Err(DdlError::UnsupportedAlgorithm {
            dialect: Dialect::Oracle,
            ..
        })
    ));
}

#[test]
fn test_unrelated_statements_are_skipped() {
    let output = parse(
        r#"
CREATE TABLE t (a INTEGER);
GRANT SELECT ON t TO PUBLIC;
CREATE SEQUENCE t_seq START WITH 1;
INSERT INTO t VALUES (1);
"#,
        Dialect::Standard,
    );
    assert_eq!(output.table.columns.len(), 1);
    assert!(output.table.indexes.is_empty());
}
