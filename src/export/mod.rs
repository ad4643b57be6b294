//! XML export of a parsed table.
//!
//! The document carries everything a downstream generator needs from the
//! model: table identity and comment, every column with its resolved type
//! attributes, and each key, index and check with the columns it covers.
//! Names are written unquoted.

mod xml_helpers;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

use crate::model::{Column, QualifiedName, Table};
use crate::parser::identifier_utils::unquote_literal;
use xml_helpers::{
    named_start, write_column_refs, write_optional_property, write_property, write_text_element,
};

/// Write `table` as an XML document.
pub fn write_table_xml<W: Write>(writer: W, table: &Table) -> anyhow::Result<()> {
    let mut xml_writer = Writer::new_with_indent(writer, b' ', 2);

    xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut root = BytesStart::new("Table");
    root.push_attribute(("Dialect", table.dialect.as_str()));
    if let Some(catalog) = table.catalog() {
        root.push_attribute(("Catalog", catalog));
    }
    if let Some(schema) = table.schema() {
        root.push_attribute(("Schema", schema));
    }
    root.push_attribute(("Name", table.name()));
    xml_writer.write_event(Event::Start(root))?;

    if let Some(comment) = &table.comment {
        write_text_element(&mut xml_writer, "Comment", comment)?;
    }

    write_columns(&mut xml_writer, table)?;
    write_keys(&mut xml_writer, table)?;
    write_foreign_keys(&mut xml_writer, table)?;
    write_checks(&mut xml_writer, table)?;
    write_options(&mut xml_writer, table)?;

    xml_writer.write_event(Event::End(BytesEnd::new("Table")))?;
    Ok(())
}

/// Render `table` as an XML string.
pub fn table_to_xml_string(table: &Table) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    write_table_xml(&mut buffer, table)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_columns<W: Write>(writer: &mut Writer<W>, table: &Table) -> anyhow::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("Columns")))?;
    for (position, column) in table.columns.iter().enumerate() {
        write_column(writer, position, column)?;
    }
    writer.write_event(Event::End(BytesEnd::new("Columns")))?;
    Ok(())
}

fn write_column<W: Write>(
    writer: &mut Writer<W>,
    position: usize,
    column: &Column,
) -> anyhow::Result<()> {
    let data_type = &column.data_type;
    let position = position.to_string();
    let elem = BytesStart::new("Column").with_attributes([
        ("Name", column.name()),
        ("Position", position.as_str()),
        ("Type", data_type.name()),
        ("Category", data_type.category().as_str()),
        ("Nullable", bool_str(column.nullable)),
    ]);
    writer.write_event(Event::Start(elem))?;

    write_property(writer, "Sql", &data_type.to_sql())?;
    write_optional_property(writer, "Length", data_type.length())?;
    write_optional_property(writer, "Precision", data_type.precision())?;
    write_optional_property(writer, "Scale", data_type.scale())?;
    write_optional_property(writer, "WithTimeZone", data_type.time_zone())?;
    if data_type.is_unsigned() {
        write_property(writer, "Unsigned", "true")?;
    }
    if data_type.is_zerofill() {
        write_property(writer, "Zerofill", "true")?;
    }
    if column.auto_increment {
        write_property(writer, "AutoIncrement", "true")?;
    }
    write_optional_property(writer, "Default", column.default_value.as_deref())?;
    write_optional_property(writer, "OnUpdate", column.on_update.as_deref())?;
    write_optional_property(writer, "Comment", column.comment.as_deref())?;
    for value in data_type.names() {
        write_text_element(writer, "Value", &unquote_literal(value))?;
    }

    writer.write_event(Event::End(BytesEnd::new("Column")))?;
    Ok(())
}

/// Primary key, unique keys and indexes.
fn write_keys<W: Write>(writer: &mut Writer<W>, table: &Table) -> anyhow::Result<()> {
    if let Some(pk) = &table.primary_key {
        writer.write_event(Event::Start(named_start("PrimaryKey", pk.name.as_ref())))?;
        write_column_refs(writer, &pk.columns)?;
        writer.write_event(Event::End(BytesEnd::new("PrimaryKey")))?;
    }

    for uk in &table.unique_keys {
        writer.write_event(Event::Start(named_start("UniqueKey", uk.name.as_ref())))?;
        write_column_refs(writer, &uk.columns)?;
        writer.write_event(Event::End(BytesEnd::new("UniqueKey")))?;
    }

    for index in &table.indexes {
        let mut elem = named_start("Index", index.name.as_ref());
        if let Some(algorithm) = &index.algorithm {
            elem.push_attribute(("Algorithm", algorithm.as_str()));
        }
        elem.push_attribute(("Unique", bool_str(index.unique)));
        writer.write_event(Event::Start(elem))?;
        write_column_refs(writer, &index.columns)?;
        writer.write_event(Event::End(BytesEnd::new("Index")))?;
    }
    Ok(())
}

fn write_foreign_keys<W: Write>(writer: &mut Writer<W>, table: &Table) -> anyhow::Result<()> {
    for fk in &table.foreign_keys {
        let referenced = plain_name(&fk.referenced_table);
        let mut elem = named_start("ForeignKey", fk.name.as_ref());
        elem.push_attribute(("ReferencedTable", referenced.as_str()));
        if let Some(action) = &fk.on_delete {
            elem.push_attribute(("OnDelete", action.as_str()));
        }
        if let Some(action) = &fk.on_update {
            elem.push_attribute(("OnUpdate", action.as_str()));
        }
        writer.write_event(Event::Start(elem))?;
        write_column_refs(writer, &fk.columns)?;

        for reference in &fk.references {
            let mut elem = BytesStart::new("Reference");
            elem.push_attribute(("Name", reference.name.name()));
            if let Some(data_type) = &reference.data_type {
                elem.push_attribute(("Type", data_type.to_sql().as_str()));
            }
            writer.write_event(Event::Empty(elem))?;
        }
        writer.write_event(Event::End(BytesEnd::new("ForeignKey")))?;
    }
    Ok(())
}

fn write_checks<W: Write>(writer: &mut Writer<W>, table: &Table) -> anyhow::Result<()> {
    for check in &table.checks {
        writer.write_event(Event::Start(named_start("Check", check.name.as_ref())))?;
        write_text_element(writer, "Condition", &check.search_condition)?;
        if let Some(column) = &check.column {
            write_column_refs(writer, std::slice::from_ref(column))?;
        }
        writer.write_event(Event::End(BytesEnd::new("Check")))?;
    }
    Ok(())
}

fn write_options<W: Write>(writer: &mut Writer<W>, table: &Table) -> anyhow::Result<()> {
    if table.options.is_empty() {
        return Ok(());
    }
    writer.write_event(Event::Start(BytesStart::new("Options")))?;
    for (name, value) in &table.options {
        let elem = BytesStart::new("Option").with_attributes([("Name", name.as_str()), ("Value", value.as_str())]);
        writer.write_event(Event::Empty(elem))?;
    }
    writer.write_event(Event::End(BytesEnd::new("Options")))?;
    Ok(())
}

/// `catalog.schema.name` without quotes.
fn plain_name(name: &QualifiedName) -> String {
    [name.catalog(), name.schema(), Some(name.name())]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(".")
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
