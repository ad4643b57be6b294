//! CREATE TABLE parsing tests

use rust_ddlmodel::model::TypeCategory;
use rust_ddlmodel::{parse_ddl, DdlError, Diagnostic, Dialect, ParseOptions, ParseOutput};

fn parse(sql: &str, dialect: Dialect) -> ParseOutput {
    parse_ddl(sql, &ParseOptions::new(dialect))
        .unwrap_or_else(|e| panic!("Failed to parse: {}\n{}", e, sql))
}

// ============================================================================
// Table and Column Tests
// ============================================================================

#[test]
fn test_parse_qualified_backtick_names() {
    let output = parse(
        "CREATE TABLE `shop`.`orders` (`id` INT NOT NULL, `note` VARCHAR(40))",
        Dialect::Mysql,
    );
    let table = output.table;
    assert_eq!(table.schema(), Some("shop"));
    assert_eq!(table.name(), "orders");
    assert_eq!(table.columns.len(), 2);
    assert_eq!(table.columns[0].name(), "id");
    assert_eq!(table.columns[0].name.original(), "`id`");
    assert!(!table.columns[0].nullable);
    assert!(table.columns[1].nullable);
}

#[test]
fn test_parse_catalog_schema_name() {
    let output = parse(
        "CREATE TABLE sales.public.orders (id INTEGER)",
        Dialect::Postgres,
    );
    assert_eq!(output.table.catalog(), Some("sales"));
    assert_eq!(output.table.schema(), Some("public"));
    assert_eq!(output.table.name(), "orders");
}

#[test]
fn test_parse_temporary_if_not_exists() {
    let output = parse(
        "CREATE GLOBAL TEMPORARY TABLE IF NOT EXISTS scratch (v INTEGER)",
        Dialect::Standard,
    );
    assert_eq!(output.table.name(), "scratch");
    assert_eq!(output.table.columns.len(), 1);
}

#[test]
fn test_parse_quote_invariance() {
    let quoted = parse(
        "CREATE TABLE \"inventory\" (\"item\" CHARACTER VARYING(30), \"qty\" INTEGER)",
        Dialect::Standard,
    );
    let plain = parse(
        "CREATE TABLE inventory (item CHARACTER VARYING(30), qty INTEGER)",
        Dialect::Standard,
    );
    assert_eq!(quoted.table.name(), plain.table.name());
    for (a, b) in quoted.table.columns.iter().zip(&plain.table.columns) {
        assert_eq!(a.name(), b.name());
        assert_eq!(a.data_type, b.data_type);
    }
}

#[test]
fn test_parse_table_options_and_comment() {
    let output = parse(
        "CREATE TABLE t (a INT) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='Films, mostly'",
        Dialect::Mysql,
    );
    let table = output.table;
    assert_eq!(table.comment.as_deref(), Some("Films, mostly"));
    assert_eq!(
        table.options,
        vec![
            ("ENGINE".to_string(), "InnoDB".to_string()),
            ("DEFAULT CHARSET".to_string(), "utf8mb4".to_string()),
        ]
    );
}

#[test]
fn test_parse_keyword_only_and_grouped_table_options() {
    let cases = [
        ("CREATE TABLE t (a NUMBER) NOLOGGING;", Dialect::Oracle),
        ("CREATE TABLE t (a NUMBER) COMPRESS CACHE;", Dialect::Oracle),
        ("CREATE TABLE t (a NUMBER) LOGGING STORAGE(INITIAL 65536);", Dialect::Oracle),
        (
            "CREATE TABLE t (a NUMBER) SEGMENT CREATION IMMEDIATE PCTFREE 10 PCTUSED 40 \
             INITRANS 1 MAXTRANS 255 NOCOMPRESS LOGGING \
             STORAGE(INITIAL 65536 NEXT 1048576 MINEXTENTS 1 BUFFER_POOL DEFAULT) TABLESPACE \"USERS\";",
            Dialect::Oracle,
        ),
        ("CREATE TEMPORARY TABLE t (a int) ON COMMIT DROP;", Dialect::Postgres),
        ("CREATE TABLE t (a int) WITHOUT OIDS;", Dialect::Postgres),
        (
            "CREATE TABLE t (a INT) PARTITION BY RANGE (a) (PARTITION p0 VALUES LESS THAN (10));",
            Dialect::Mysql,
        ),
    ];
    for (sql, dialect) in cases {
        let output = parse(sql, dialect);
        assert_eq!(output.table.columns.len(), 1, "{}", sql);
        assert!(output.table.comment.is_none(), "{}", sql);
    }
}

#[test]
fn test_table_comment_among_flag_options() {
    let cases = [
        ("CREATE TABLE t (a INT) ENGINE InnoDB COMMENT 'Films' CHECKSUM=1", Dialect::Mysql),
        ("CREATE TABLE t (a INT) COMMENT='Films' STATS_PERSISTENT=0 DELAY_KEY_WRITE", Dialect::Mysql),
        ("CREATE TABLE t (a NUMBER) NOLOGGING COMMENT 'Films' CACHE;", Dialect::Oracle),
    ];
    for (sql, dialect) in cases {
        let output = parse(sql, dialect);
        assert_eq!(output.table.comment.as_deref(), Some("Films"), "{}", sql);
    }
}

// ============================================================================
// Comment and Literal Tests
// ============================================================================

#[test]
fn test_comments_are_stripped() {
    let output = parse(
        "-- leading\nCREATE TABLE t ( /* block\n comment */ a INT, # hash\n b INT -- trailing\n)",
        Dialect::Mysql,
    );
    assert_eq!(output.table.columns.len(), 2);
}

#[test]
fn test_literal_keeps_comment_markers() {
    let output = parse(
        "CREATE TABLE t (a VARCHAR(20) DEFAULT '-- not /* a */ comment')",
        Dialect::Mysql,
    );
    assert_eq!(
        output.table.columns[0].default_value.as_deref(),
        Some("'-- not /* a */ comment'")
    );
}

#[test]
fn test_comment_fusing_tokens_is_rejected() {
    let result = parse_ddl(
        "CREATE/* x */TABLE t (a INT)",
        &ParseOptions::new(Dialect::Mysql),
    );
    assert!(matches!(result, Err(DdlError::CommentFusesTokens { .. })));
}

// ============================================================================
// Constraint Tests
// ============================================================================

#[test]
fn test_check_condition_keeps_inner_parens() {
    let output = parse(
        "CREATE TABLE t (a INTEGER, b INTEGER, CONSTRAINT ck_ab CHECK (a > 0 AND (b < 10)))",
        Dialect::Standard,
    );
    let check = &output.table.checks[0];
    assert_eq!(check.name.as_ref().map(|n| n.name()), Some("ck_ab"));
    assert_eq!(check.search_condition, "a > 0 AND (b < 10)");
    assert_eq!(check.column.as_ref().and_then(|c| c.index), Some(0));
}

#[test]
fn test_constraints_between_columns_resolve() {
    let output = parse(
        "CREATE TABLE t (a INT, PRIMARY KEY (a, b), b INT)",
        Dialect::Mysql,
    );
    let pk = output.table.primary_key.expect("primary key");
    assert_eq!(
        pk.columns.iter().map(|c| c.index).collect::<Vec<_>>(),
        vec![Some(0), Some(1)]
    );
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_mysql_index_kinds() {
    let output = parse(
        "CREATE TABLE t (title VARCHAR(100), body TEXT, shape GEOMETRY NOT NULL, \
         UNIQUE KEY uk_title (title), FULLTEXT KEY ft_body (body), SPATIAL INDEX sp_shape (shape), \
         KEY idx_title (title(10)) USING HASH)",
        Dialect::Mysql,
    );
    let table = output.table;
    assert_eq!(table.unique_keys.len(), 1);
    assert_eq!(table.indexes.len(), 3);
    assert_eq!(table.indexes[2].algorithm.as_deref(), Some("HASH"));
    assert_eq!(table.indexes[2].columns[0].index, Some(0));
}

#[test]
fn test_inline_primary_key_and_references() {
    let output = parse(
        "CREATE TABLE emp (id NUMBER(6) PRIMARY KEY, dept_id NUMBER(4) REFERENCES dept (id) ON DELETE CASCADE)",
        Dialect::Oracle,
    );
    let table = output.table;
    assert_eq!(table.primary_key.as_ref().unwrap().columns[0].index, Some(0));
    let fk = &table.foreign_keys[0];
    assert_eq!(fk.columns[0].index, Some(1));
    assert_eq!(fk.referenced_table.name(), "dept");
    assert_eq!(fk.on_delete.as_deref(), Some("CASCADE"));
    assert_eq!(fk.references[0].data_type.as_ref().unwrap().to_sql(), "NUMBER(4)");
}

#[test]
fn test_unresolved_reference_lenient_and_strict() {
    let sql = "CREATE TABLE t (a INT, UNIQUE KEY uk (missing))";
    let output = parse(sql, Dialect::Mysql);
    assert_eq!(output.diagnostics.len(), 1);
    assert!(matches!(
        output.diagnostics.iter().next(),
        Some(Diagnostic::UnresolvedReference { column, .. }) if column == "missing"
    ));

    let strict = ParseOptions::new(Dialect::Mysql).with_strict_references(true);
    assert!(matches!(
        parse_ddl(sql, &strict),
        Err(DdlError::UnresolvedColumn { .. })
    ));
}

// ============================================================================
// Diagnostics and Errors
// ============================================================================

#[test]
fn test_unknown_type_is_user_defined() {
    let output = parse(
        "CREATE TABLE t (location geography(Point,4326))",
        Dialect::Postgres,
    );
    let data_type = &output.table.columns[0].data_type;
    assert_eq!(data_type.name(), "GEOGRAPHY");
    assert_eq!(data_type.category(), TypeCategory::UserDefined);
    assert!(output
        .diagnostics
        .iter()
        .any(|d| matches!(d, Diagnostic::UnknownType { .. })));
}

#[test]
fn test_reserved_word_column_warns() {
    let output = parse("CREATE TABLE t (order INT, `select` INT)", Dialect::Mysql);
    let reserved: Vec<_> = output
        .diagnostics
        .iter()
        .filter(|d| matches!(d, Diagnostic::ReservedWord { .. }))
        .collect();
    assert_eq!(reserved.len(), 1);
}

#[test]
fn test_duplicate_column_is_error() {
    let result = parse_ddl(
        "CREATE TABLE t (a INT, A INT)",
        &ParseOptions::new(Dialect::Mysql),
    );
    assert!(matches!(result, Err(DdlError::DuplicateColumn { .. })));
}

#[test]
fn test_truncated_input_is_unexpected_end() {
    let result = parse_ddl(
        "CREATE TABLE t (a INT, b VARCHAR(10)",
        &ParseOptions::new(Dialect::Mysql),
    );
    assert!(matches!(result, Err(DdlError::UnexpectedEnd { .. })));
}

#[test]
fn test_first_statement_must_be_create() {
    let result = parse_ddl(
        "DROP TABLE t; CREATE TABLE t (a INT)",
        &ParseOptions::new(Dialect::Mysql),
    );
    match result {
        Err(DdlError::Syntax { expected, offset, .. }) => {
            assert_eq!(expected, "CREATE");
            assert_eq!(offset, 0);
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}
