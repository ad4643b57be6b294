//! Error types for rust-ddlmodel

use std::path::PathBuf;
use thiserror::Error;

use crate::model::Dialect;

/// Errors that abort a parse.
///
/// Recoverable conditions (unknown types, out-of-range parameters, unresolved
/// column references in lenient mode) are reported as
/// [`Diagnostic`](crate::diagnostics::Diagnostic)s instead.
#[derive(Error, Debug)]
pub enum DdlError {
    #[error("syntax error at offset {offset}: expected {expected}, found '{actual}'")]
    Syntax {
        expected: String,
        actual: String,
        offset: usize,
    },

    #[error("unexpected end of input at offset {offset}: expected {expected}")]
    UnexpectedEnd { expected: String, offset: usize },

    #[error("syntax error at offset {offset}: comment should not separate keywords")]
    CommentFusesTokens { offset: usize },

    #[error("duplicate column '{column}' in table '{table}'")]
    DuplicateColumn { table: String, column: String },

    #[error("unsupported index algorithm '{algorithm}' for {dialect}")]
    UnsupportedAlgorithm { dialect: Dialect, algorithm: String },

    #[error("{constraint} references unknown column '{column}'")]
    UnresolvedColumn { constraint: String, column: String },

    #[error("input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    #[error("unknown character encoding: {label}")]
    UnknownEncoding { label: String },

    #[error("input is not valid {encoding}")]
    Decode { encoding: &'static str },

    #[error("unknown dialect: {value}")]
    UnknownDialect { value: String },

    #[error("Failed to read DDL input")]
    InputReadError {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read DDL file: {path}")]
    DdlFileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file: {path}")]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    ConfigParseError {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Invalid config file format: {message}")]
    InvalidConfig { message: String },
}

impl DdlError {
    pub(crate) fn syntax(expected: impl Into<String>, actual: impl Into<String>, offset: usize) -> Self {
        DdlError::Syntax {
            expected: expected.into(),
            actual: actual.into(),
            offset,
        }
    }

    pub(crate) fn unexpected_end(expected: impl Into<String>, offset: usize) -> Self {
        DdlError::UnexpectedEnd {
            expected: expected.into(),
            offset,
        }
    }
}
