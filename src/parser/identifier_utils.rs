//! Identifier and literal helpers shared by the statement parsers.
//!
//! ```ignore
//! use crate::parser::identifier_utils::*;
//!
//! let qn = split_qualified_name("pg_catalog.\"pg_enum\"", Dialect::Postgres, 0)?;
//! assert_eq!(qn.schema(), Some("pg_catalog"));
//! assert_eq!(unquote_literal("'it''s'"), "it's");
//! assert_eq!(leading_identifier("`title`(10) DESC", '`'), "`title`");
//! ```

use crate::error::DdlError;
use crate::model::{Dialect, Identifier, QualifiedName};

/// Words that parse as names but read badly as object names.
pub const RESERVED_WORDS: &[&str] = &[
    "SELECT", "DISTINCT", "FROM", "WHERE", "BETWEEN", "AND", "GROUP", "BY", "HAVING", "ORDER",
    "UNION", "ALL", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE", "WITH", "AS", "NOT",
    "NULL", "IS", "CASE", "WHEN",
];

/// Case-insensitive membership in [`RESERVED_WORDS`].
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.iter().any(|w| w.eq_ignore_ascii_case(name))
}

/// Split `a.b.c` on dots outside quotes into a [`QualifiedName`].
///
/// `offset` positions errors in the normalized buffer.
pub fn split_qualified_name(
    raw: &str,
    dialect: Dialect,
    offset: usize,
) -> Result<QualifiedName, DdlError> {
    let quote = dialect.quote_char();
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in raw.trim().chars() {
        if c == quote {
            quoted = !quoted;
            current.push(c);
        } else if c == '.' && !quoted {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    if parts.len() > 3 || parts.iter().any(|p| p.trim().is_empty()) {
        return Err(DdlError::syntax("[catalog.][schema.]name", raw, offset));
    }
    let identifiers = parts.iter().map(|p| Identifier::new(p, dialect)).collect();
    QualifiedName::from_parts(identifiers)
        .ok_or_else(|| DdlError::syntax("table name", raw, offset))
}

/// Split `table.column` at its last unquoted dot.
pub fn split_last_part(raw: &str, quote: char) -> Option<(&str, &str)> {
    let mut quoted = false;
    let mut last_dot = None;
    for (i, c) in raw.char_indices() {
        if c == quote {
            quoted = !quoted;
        } else if c == '.' && !quoted {
            last_dot = Some(i);
        }
    }
    last_dot.map(|i| (&raw[..i], &raw[i + 1..]))
}

/// Text of a single-quoted literal with the quotes removed and `''` folded to `'`.
///
/// Input that is not quoted is returned trimmed.
pub fn unquote_literal(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('\'') && trimmed.ends_with('\'') {
        trimmed[1..trimmed.len() - 1].replace("''", "'")
    } else {
        trimmed.to_string()
    }
}

/// Leading identifier of a key part such as `` `title`(10) DESC ``.
///
/// Prefix lengths and sort order are not modelled and are dropped.
pub fn leading_identifier(item: &str, quote: char) -> &str {
    let trimmed = item.trim();
    if let Some(rest) = trimmed.strip_prefix(quote) {
        return match rest.find(quote) {
            Some(close) => &trimmed[..close + 2 * quote.len_utf8()],
            None => trimmed,
        };
    }
    let end = trimmed
        .find(|c: char| c.is_whitespace() || c == '(')
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}
