//! rust-ddlmodel: dialect-aware DDL parsing into a table model
//!
//! This library reads `CREATE TABLE` statements (plus the `ALTER TABLE`,
//! `COMMENT ON` and `CREATE INDEX` statements that follow them) written for
//! MySQL, PostgreSQL, Oracle or ISO SQL, and builds a [`Table`](model::Table)
//! that can be inspected, re-emitted as canonical SQL or exported as XML.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod inputs;
pub mod model;
pub mod parser;

use std::path::PathBuf;

use anyhow::Result;

pub use config::{ParseOptions, TypeOverrides};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::DdlError;
pub use model::{Dialect, Table};
pub use parser::{
    parse_ddl, parse_ddl_bytes, parse_ddl_file, parse_ddl_files, parse_ddl_reader, ParseOutput,
};

/// Output format of [`render_inputs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Canonical `CREATE TABLE` SQL
    #[default]
    Sql,
    /// XML document per table
    Xml,
}

/// Options for rendering a set of DDL inputs
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Files, directories or glob patterns
    pub inputs: Vec<String>,
    pub parse: ParseOptions,
    pub format: OutputFormat,
}

/// Parse every input and render each table in the requested format.
///
/// Returns one rendered document per input file, in input order.
pub fn render_inputs(options: &RenderOptions) -> Result<Vec<(PathBuf, String)>> {
    let files = inputs::collect_sql_files(&options.inputs)?;
    tracing::debug!("found {} DDL files", files.len());

    let parsed = parse_ddl_files(&files, &options.parse)?;
    parsed
        .into_iter()
        .map(|(path, output)| {
            let rendered = match options.format {
                OutputFormat::Sql => output.table.to_sql(),
                OutputFormat::Xml => export::table_to_xml_string(&output.table)?,
            };
            Ok((path, rendered))
        })
        .collect()
}
