//! Multi-file parsing and rendering tests

use std::fs;

use crate::common::{create_sql_file, fixture_path};
use rust_ddlmodel::inputs::collect_sql_files;
use rust_ddlmodel::{
    parse_ddl_files, parse_ddl_reader, render_inputs, Dialect, OutputFormat, ParseOptions,
    RenderOptions,
};
use tempfile::TempDir;

#[test]
fn test_parse_many_files_keeps_order() {
    let dir = TempDir::new().unwrap();
    let mut files = Vec::new();
    for i in 0..12 {
        let path = dir.path().join(format!("t{:02}.sql", i));
        fs::write(&path, format!("CREATE TABLE t{} (id INT, v{} VARCHAR(10));", i, i)).unwrap();
        files.push(path);
    }

    let parsed = parse_ddl_files(&files, &ParseOptions::new(Dialect::Mysql)).unwrap();
    assert_eq!(parsed.len(), 12);
    for (i, (path, output)) in parsed.iter().enumerate() {
        assert_eq!(path, &files[i]);
        assert_eq!(output.table.name(), format!("t{}", i));
    }
}

#[test]
fn test_batch_failure_names_the_file() {
    let good = create_sql_file("CREATE TABLE ok (a INT);");
    let bad = create_sql_file("CREATE TABLE broken (a INT");
    let files = vec![good.path().to_path_buf(), bad.path().to_path_buf()];

    let err = parse_ddl_files(&files, &ParseOptions::new(Dialect::Mysql)).unwrap_err();
    assert!(err
        .to_string()
        .contains(&bad.path().display().to_string()));
}

#[test]
fn test_parse_from_reader() {
    let sql = fs::read(fixture_path("oracle_emp.sql")).unwrap();
    let output = parse_ddl_reader(sql.as_slice(), &ParseOptions::new(Dialect::Oracle)).unwrap();
    assert_eq!(output.table.columns.len(), 8);
}

#[test]
fn test_collect_fixture_directory() {
    let files =
        collect_sql_files(&[fixture_path("").to_string_lossy().to_string()]).unwrap();
    let names: Vec<_> = files
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec!["mysql_film.sql", "oracle_emp.sql", "postgres_pg_enum.sql"]
    );
}

#[test]
fn test_render_inputs_as_xml() {
    let options = RenderOptions {
        inputs: vec![fixture_path("mysql_film.sql").to_string_lossy().to_string()],
        parse: ParseOptions::new(Dialect::Mysql),
        format: OutputFormat::Xml,
    };
    let rendered = render_inputs(&options).unwrap();
    assert_eq!(rendered.len(), 1);

    let doc = roxmltree::Document::parse(&rendered[0].1).unwrap();
    let root = doc.root_element();
    assert_eq!(root.attribute("Schema"), Some("sakila"));
    let foreign_keys = root
        .children()
        .filter(|n| n.tag_name().name() == "ForeignKey")
        .count();
    assert_eq!(foreign_keys, 2);
}

#[test]
fn test_render_inputs_as_sql() {
    let options = RenderOptions {
        inputs: vec![fixture_path("postgres_pg_enum.sql").to_string_lossy().to_string()],
        parse: ParseOptions::new(Dialect::Postgres),
        format: OutputFormat::Sql,
    };
    let rendered = render_inputs(&options).unwrap();
    let sql = &rendered[0].1;
    assert!(sql.starts_with("CREATE TABLE pg_catalog.pg_enum (\n"));
    assert_eq!(sql.matches("CREATE UNIQUE INDEX").count(), 3);
}
