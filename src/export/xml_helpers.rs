//! Low-level XML writing utilities for the table export.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

use crate::model::{ColumnRef, Identifier};

/// Write a simple Property element with Name and Value attributes.
///
/// Generates: `<Property Name="name" Value="value"/>`
pub(crate) fn write_property<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> anyhow::Result<()> {
    let prop = BytesStart::new("Property").with_attributes([("Name", name), ("Value", value)]);
    writer.write_event(Event::Empty(prop))?;
    Ok(())
}

/// Write a Property only when the value is present.
pub(crate) fn write_optional_property<W: Write, T: ToString>(
    writer: &mut Writer<W>,
    name: &str,
    value: Option<T>,
) -> anyhow::Result<()> {
    if let Some(value) = value {
        write_property(writer, name, &value.to_string())?;
    }
    Ok(())
}

/// Write an element containing only text: `<Name>text</Name>`
pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> anyhow::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Start tag with an optional `Name` attribute taken from a constraint name.
pub(crate) fn named_start<'a>(tag: &'a str, name: Option<&'a Identifier>) -> BytesStart<'a> {
    let mut elem = BytesStart::new(tag);
    if let Some(name) = name {
        elem.push_attribute(("Name", name.name()));
    }
    elem
}

/// Write the columns of a key as
/// `<ColumnRef Name="a" Position="0"/>` entries.
///
/// Unresolved references carry no `Position`.
pub(crate) fn write_column_refs<W: Write>(
    writer: &mut Writer<W>,
    columns: &[ColumnRef],
) -> anyhow::Result<()> {
    for column in columns {
        let mut elem = BytesStart::new("ColumnRef");
        elem.push_attribute(("Name", column.name.name()));
        if let Some(index) = column.index {
            elem.push_attribute(("Position", index.to_string().as_str()));
        }
        writer.write_event(Event::Empty(elem))?;
    }
    Ok(())
}
