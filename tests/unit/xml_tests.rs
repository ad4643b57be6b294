//! XML export tests

use rust_ddlmodel::export::{table_to_xml_string, write_table_xml};
use rust_ddlmodel::{parse_ddl, Dialect, ParseOptions, Table};

fn parse(sql: &str, dialect: Dialect) -> Table {
    parse_ddl(sql, &ParseOptions::new(dialect))
        .unwrap_or_else(|e| panic!("Failed to parse: {}\n{}", e, sql))
        .table
}

#[test]
fn test_xml_is_well_formed() {
    let table = parse(
        "CREATE TABLE t (a INTEGER NOT NULL, b CHARACTER VARYING(10) DEFAULT 'x<y', \
         CONSTRAINT pk PRIMARY KEY (a), CONSTRAINT ck CHECK (a < 10 AND b <> 'z'))",
        Dialect::Standard,
    );
    let xml = table_to_xml_string(&table).unwrap();
    let doc = roxmltree::Document::parse(&xml).expect("export should be well-formed XML");

    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "Table");
    assert_eq!(root.attribute("Dialect"), Some("STANDARD"));
    assert_eq!(root.attribute("Name"), Some("t"));

    let columns: Vec<_> = root
        .descendants()
        .filter(|n| n.tag_name().name() == "Column")
        .collect();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].attribute("Nullable"), Some("false"));
    assert_eq!(columns[1].attribute("Type"), Some("CHARACTER VARYING"));

    let default = columns[1]
        .children()
        .find(|n| n.attribute("Name") == Some("Default"))
        .and_then(|n| n.attribute("Value"));
    assert_eq!(default, Some("'x<y'"));

    let condition = root
        .descendants()
        .find(|n| n.tag_name().name() == "Condition")
        .and_then(|n| n.text());
    assert_eq!(condition, Some("a < 10 AND b <> 'z'"));
}

#[test]
fn test_xml_writes_to_any_writer() {
    let table = parse("CREATE TABLE t (a INT)", Dialect::Mysql);
    let mut buffer = Vec::new();
    write_table_xml(&mut buffer, &table).unwrap();
    let xml = String::from_utf8(buffer).unwrap();
    assert!(xml.contains(r#"<Column Name="a" Position="0" Type="INT" Category="Numeric" Nullable="true">"#));
    assert!(xml.contains(r#"<Property Name="Length" Value="4"/>"#));
}
