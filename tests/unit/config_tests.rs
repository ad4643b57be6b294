//! Config file and option tests

use std::io::Write;

use rust_ddlmodel::{parse_ddl, parse_ddl_bytes, DdlError, Dialect, ParseOptions};
use tempfile::NamedTempFile;

fn create_config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".xml").unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_config_file_round_trip() {
    let file = create_config_file(
        r#"<?xml version="1.0" encoding="utf-8"?>
<DdlParser>
  <Dialect>POSTGRES</Dialect>
  <Encoding>windows-1252</Encoding>
  <StrictReferences>true</StrictReferences>
  <MaxInputBytes>4096</MaxInputBytes>
  <TypeOverrides>
    <Override From="citext" To="text"/>
  </TypeOverrides>
</DdlParser>"#,
    );

    let options = ParseOptions::from_config_file(file.path()).unwrap();
    assert_eq!(options.dialect, Dialect::Postgres);
    assert_eq!(options.encoding, "windows-1252");
    assert!(options.strict_references);
    assert_eq!(options.max_input_bytes, 4096);
    assert_eq!(options.type_overrides.get("CITEXT"), Some("TEXT"));
}

#[test]
fn test_config_options_drive_parsing() {
    let file = create_config_file(
        r#"<DdlParser>
  <Dialect>postgres</Dialect>
  <Encoding>windows-1252</Encoding>
  <TypeOverrides><Override From="citext" To="text"/></TypeOverrides>
</DdlParser>"#,
    );
    let options = ParseOptions::from_config_file(file.path()).unwrap();

    // 0xE9 is 'é' in windows-1252
    let output = parse_ddl_bytes(
        b"CREATE TABLE t (nom citext); COMMENT ON COLUMN t.nom IS 'caf\xe9';",
        &options,
    )
    .unwrap();
    let column = &output.table.columns[0];
    assert_eq!(column.data_type.name(), "TEXT");
    assert_eq!(column.comment.as_deref(), Some("café"));
}

#[test]
fn test_missing_config_file() {
    let result = ParseOptions::from_config_file(std::path::Path::new("/nonexistent/ddl.xml"));
    assert!(matches!(result, Err(DdlError::ConfigReadError { .. })));
}

#[test]
fn test_malformed_config_file() {
    let file = create_config_file("<DdlParser><Dialect>MYSQL</DdlParser>");
    let result = ParseOptions::from_config_file(file.path());
    assert!(matches!(result, Err(DdlError::ConfigParseError { .. })));
}

#[test]
fn test_unknown_dialect_in_config() {
    let result = ParseOptions::from_config_str("<DdlParser><Dialect>sqlite</Dialect></DdlParser>");
    assert!(matches!(result, Err(DdlError::UnknownDialect { .. })));
}

#[test]
fn test_max_input_bytes_is_enforced() {
    let options = ParseOptions::new(Dialect::Mysql).with_max_input_bytes(16);
    let result = parse_ddl("CREATE TABLE t (a INT, b INT)", &options);
    assert!(matches!(
        result,
        Err(DdlError::InputTooLarge { limit: 16, .. })
    ));
}
