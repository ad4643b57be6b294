//! Canonical SQL emission tests

use pretty_assertions::assert_eq;
use rust_ddlmodel::{parse_ddl, Dialect, ParseOptions, Table};

fn parse(sql: &str, dialect: Dialect) -> Table {
    parse_ddl(sql, &ParseOptions::new(dialect))
        .unwrap_or_else(|e| panic!("Failed to parse: {}\n{}", e, sql))
        .table
}

#[test]
fn test_mysql_emission() {
    let table = parse(
        "CREATE TABLE `shop`.`item` (\
           `id` INT NOT NULL AUTO_INCREMENT, \
           `name` VARCHAR(20) COMMENT 'it''s', \
           `seen` TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP, \
           KEY `idx_name` (`name`) USING BTREE, \
           UNIQUE KEY `uk_name` (`name`), \
           PRIMARY KEY (`id`)\
         ) ENGINE=InnoDB COMMENT='Items'",
        Dialect::Mysql,
    );
    assert_eq!(
        table.to_sql(),
        "CREATE TABLE `shop`.`item` (\n\
         `id` INT NOT NULL AUTO_INCREMENT,\n\
         `name` VARCHAR(20) COMMENT 'it''s',\n\
         `seen` TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,\n\
         INDEX `idx_name` (`name`) USING BTREE,\n\
         PRIMARY KEY (`id`),\n\
         UNIQUE INDEX `uk_name` (`name`)\n\
         ) COMMENT='Items';"
    );
}

#[test]
fn test_postgres_emission_with_comments_and_unique_index() {
    let table = parse(
        r#"
CREATE TABLE public.account (
    id integer NOT NULL,
    email varchar(200),
    CONSTRAINT account_pkey PRIMARY KEY (id)
);
COMMENT ON TABLE public.account IS 'Accounts';
COMMENT ON COLUMN public.account.email IS 'Login';
CREATE UNIQUE INDEX account_email_key ON public.account USING btree (email);
"#,
        Dialect::Postgres,
    );
    assert_eq!(
        table.to_sql(),
        "CREATE TABLE public.account (\n\
         id INTEGER NOT NULL,\n\
         email CHARACTER VARYING(200),\n\
         CONSTRAINT account_pkey PRIMARY KEY (id)\n\
         );\n\
         CREATE UNIQUE INDEX account_email_key ON public.account USING btree (email);\n\
         COMMENT ON TABLE public.account IS 'Accounts';\n\
         COMMENT ON COLUMN public.account.email IS 'Login';"
    );
}

#[test]
fn test_oracle_emission_foreign_key_and_check() {
    let table = parse(
        "CREATE TABLE emp (\
           empno NUMBER(4) CONSTRAINT pk_emp PRIMARY KEY, \
           sal NUMBER(7,2) CHECK (sal > 0), \
           deptno NUMBER(2) CONSTRAINT fk_deptno REFERENCES dept ON DELETE SET NULL\
         )",
        Dialect::Oracle,
    );
    assert_eq!(
        table.to_sql(),
        "CREATE TABLE emp (\n\
         empno NUMBER(4),\n\
         sal NUMBER(7,2),\n\
         deptno NUMBER(2),\n\
         CONSTRAINT pk_emp PRIMARY KEY (empno),\n\
         CONSTRAINT fk_deptno FOREIGN KEY (deptno) REFERENCES dept ON DELETE SET NULL,\n\
         CHECK (sal > 0)\n\
         );"
    );
}

#[test]
fn test_identity_column_emission() {
    let table = parse(
        "CREATE TABLE t (id INTEGER GENERATED ALWAYS AS IDENTITY NOT NULL)",
        Dialect::Standard,
    );
    assert_eq!(
        table.columns[0].to_sql(),
        "id INTEGER NOT NULL GENERATED BY DEFAULT AS IDENTITY"
    );
}
