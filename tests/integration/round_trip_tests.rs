//! Emit-then-reparse tests: canonical SQL must parse back to the same model shape

use pretty_assertions::assert_eq;

use crate::common::{column_summary, constraint_summary, parse_fixture, reparse};
use rust_ddlmodel::{parse_ddl, Dialect, ParseOptions};

fn assert_round_trip(fixture: &str, dialect: Dialect) {
    let original = parse_fixture(fixture, dialect).table;
    let reparsed = reparse(&original);

    assert_eq!(reparsed.qualified_name, original.qualified_name);
    assert_eq!(column_summary(&reparsed), column_summary(&original));
    assert_eq!(constraint_summary(&reparsed), constraint_summary(&original));
    assert_eq!(reparsed.comment, original.comment);
    for (a, b) in reparsed.columns.iter().zip(&original.columns) {
        assert_eq!(a.data_type, b.data_type, "column {}", a.name());
        assert_eq!(a.default_value, b.default_value, "column {}", a.name());
        assert_eq!(a.comment, b.comment, "column {}", a.name());
        assert_eq!(a.auto_increment, b.auto_increment, "column {}", a.name());
    }
}

#[test]
fn test_round_trip_mysql_film() {
    assert_round_trip("mysql_film.sql", Dialect::Mysql);
}

#[test]
fn test_round_trip_postgres_pg_enum() {
    assert_round_trip("postgres_pg_enum.sql", Dialect::Postgres);
}

#[test]
fn test_round_trip_oracle_emp() {
    assert_round_trip("oracle_emp.sql", Dialect::Oracle);
}

#[test]
fn test_round_trip_standard() {
    let sql = r#"
CREATE TABLE "ledger"."entry" (
    "id" BIGINT NOT NULL,
    "amount" NUMERIC(12,2) DEFAULT 0,
    "booked" TIMESTAMP(3) WITH TIME ZONE,
    "span" INTERVAL DAY(4) TO SECOND(3),
    "flag" BOOLEAN,
    CONSTRAINT "pk_entry" PRIMARY KEY ("id"),
    CONSTRAINT "uk_booked" UNIQUE ("booked", "id"),
    CONSTRAINT "ck_amount" CHECK ("amount" >= 0)
);
COMMENT ON COLUMN "ledger"."entry"."amount" IS 'Signed; cents';
"#;
    let original = parse_ddl(sql, &ParseOptions::new(Dialect::Standard))
        .unwrap()
        .table;
    let reparsed = crate::common::reparse(&original);
    assert_eq!(reparsed, original);
}

#[test]
fn test_round_trip_postgres_intervals() {
    let sql = "CREATE TABLE shift (\
        id integer NOT NULL, \
        length_days interval day, \
        grace interval second(3), \
        window_span interval hour to minute, \
        raw_span interval\
    );";
    let original = parse_ddl(sql, &ParseOptions::new(Dialect::Postgres))
        .unwrap()
        .table;
    let reparsed = reparse(&original);
    assert_eq!(reparsed, original);
    assert_eq!(original.columns[1].data_type.to_sql(), "INTERVAL DAY");
    assert_eq!(original.columns[2].data_type.to_sql(), "INTERVAL SECOND(3)");
}

#[test]
fn test_emission_is_stable() {
    let original = parse_fixture("mysql_film.sql", Dialect::Mysql).table;
    let once = original.to_sql();
    let twice = reparse(&original).to_sql();
    assert_eq!(once, twice);
}
