//! DDL parsing
//!
//! Input is decoded, normalized (comments stripped, whitespace collapsed) and
//! then scanned statement by statement. Error offsets refer to positions in
//! the normalized buffer returned by [`normalize`].

mod column_parser;
mod constraint_parser;
mod cursor;
pub mod identifier_utils;
mod normalizer;
mod statement_parser;
mod type_parser;

use std::borrow::Cow;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use encoding_rs::Encoding;
use rayon::prelude::*;

use crate::config::ParseOptions;
use crate::diagnostics::Diagnostics;
use crate::error::DdlError;
use crate::model::Table;

pub use normalizer::normalize;

/// A parsed table and the caveats raised while parsing it.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub table: Table,
    pub diagnostics: Diagnostics,
}

/// Parse DDL text.
pub fn parse_ddl(sql: &str, options: &ParseOptions) -> Result<ParseOutput, DdlError> {
    check_size(sql.len(), options)?;
    let sql = sql.strip_prefix('\u{FEFF}').unwrap_or(sql);

    let normalized = normalize(sql, options.dialect)?;
    tracing::debug!("normalized ddl: {}", normalized);

    let (table, diagnostics) = statement_parser::parse_statements(&normalized, options)?;
    tracing::debug!("accepted ddl:\n{}", table.to_sql());

    Ok(ParseOutput { table, diagnostics })
}

/// Decode bytes with `options.encoding`, then parse.
pub fn parse_ddl_bytes(bytes: &[u8], options: &ParseOptions) -> Result<ParseOutput, DdlError> {
    check_size(bytes.len(), options)?;
    let text = decode(bytes, &options.encoding)?;
    parse_ddl(&text, options)
}

/// Read the whole stream, then parse. Reading stops one byte past the size limit.
pub fn parse_ddl_reader<R: Read>(reader: R, options: &ParseOptions) -> Result<ParseOutput, DdlError> {
    let bytes = read_bounded(reader, options).map_err(|e| DdlError::InputReadError { source: e })?;
    parse_ddl_bytes(&bytes, options)
}

/// Parse a single DDL file
pub fn parse_ddl_file(path: &Path, options: &ParseOptions) -> Result<ParseOutput, DdlError> {
    tracing::debug!("parsing {}", path.display());
    let bytes = std::fs::File::open(path)
        .and_then(|file| read_bounded(file, options))
        .map_err(|e| DdlError::DdlFileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
    parse_ddl_bytes(&bytes, options)
}

/// Minimum number of files to benefit from parallel processing.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// Parse several independent DDL files, in parallel for larger sets.
///
/// Results keep the order of `files`; the first failure is returned.
pub fn parse_ddl_files(
    files: &[PathBuf],
    options: &ParseOptions,
) -> Result<Vec<(PathBuf, ParseOutput)>> {
    let parse_one = |file: &PathBuf| -> Result<(PathBuf, ParseOutput)> {
        let output = parse_ddl_file(file, options)
            .with_context(|| format!("Failed to parse {}", file.display()))?;
        Ok((file.clone(), output))
    };

    if files.len() >= PARALLEL_THRESHOLD {
        files.par_iter().map(parse_one).collect()
    } else {
        files.iter().map(parse_one).collect()
    }
}

fn check_size(size: usize, options: &ParseOptions) -> Result<(), DdlError> {
    if size > options.max_input_bytes {
        return Err(DdlError::InputTooLarge {
            size,
            limit: options.max_input_bytes,
        });
    }
    Ok(())
}

fn read_bounded<R: Read>(reader: R, options: &ParseOptions) -> std::io::Result<Vec<u8>> {
    let limit = u64::try_from(options.max_input_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    reader.take(limit).read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Decode with the labelled encoding. A byte order mark, if present, wins and is removed.
fn decode<'b>(bytes: &'b [u8], label: &str) -> Result<Cow<'b, str>, DdlError> {
    let encoding =
        Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| DdlError::UnknownEncoding {
            label: label.to_string(),
        })?;
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DdlError::Decode {
            encoding: used.name(),
        });
    }
    Ok(text)
}
