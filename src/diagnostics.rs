//! Non-fatal parse diagnostics.
//!
//! A parse that succeeds may still carry caveats: a type name without a known
//! grammar, a length outside the dialect's documented range, or a constraint
//! naming a column that does not exist. These are collected here rather than
//! failing the parse, and each one is also emitted as a `tracing` warning.

use std::fmt;

use crate::model::Dialect;

/// A recoverable condition found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Type name has no grammar in the dialect; it was kept as a user-defined type.
    UnknownType { dialect: Dialect, type_name: String },
    /// A type parameter lies outside the dialect's range. The value is still recorded.
    Bounds { type_name: String, message: String },
    /// A type was rewritten to another type (e.g. MySQL `FLOAT(30)` to `DOUBLE`).
    TypePromotion { from: String, to: String },
    /// `ZEROFILL` was given without `UNSIGNED`.
    ImpliedUnsigned { type_name: String },
    /// A constraint or comment names a column that was never defined.
    UnresolvedReference { constraint: String, column: String },
    /// A second primary key replaced the first one.
    DuplicatePrimaryKey { table: String },
    /// An object name collides with a reserved SQL word.
    ReservedWord { kind: &'static str, identifier: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownType { dialect, type_name } => write!(
                f,
                "{} type {} has no defined grammar, using generic handling",
                dialect, type_name
            ),
            Diagnostic::Bounds { type_name, message } => write!(f, "{}: {}", type_name, message),
            Diagnostic::TypePromotion { from, to } => {
                write!(f, "{} promoted to {}", from, to)
            }
            Diagnostic::ImpliedUnsigned { type_name } => {
                write!(f, "{}: ZEROFILL implies UNSIGNED", type_name)
            }
            Diagnostic::UnresolvedReference { constraint, column } => {
                write!(f, "{} references unknown column '{}'", constraint, column)
            }
            Diagnostic::DuplicatePrimaryKey { table } => {
                write!(f, "table {} declares more than one primary key", table)
            }
            Diagnostic::ReservedWord { kind, identifier } => write!(
                f,
                "{} name [{}] should better not be a SQL keyword",
                kind, identifier
            ),
        }
    }
}

/// Ordered collection of diagnostics for one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.items.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
