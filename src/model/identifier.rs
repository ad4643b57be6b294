//! Identifiers in written and canonical form.

use std::fmt;

use super::Dialect;

/// Strip one pair of `quote` characters surrounding `raw`, if present.
///
/// Unquoting an unquoted identifier is a no-op.
pub fn unquote(raw: &str, quote: char) -> &str {
    let trimmed = raw.trim();
    let q = quote.len_utf8();
    if trimmed.len() >= 2 * q && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
        &trimmed[q..trimmed.len() - q]
    } else {
        trimmed
    }
}

/// A name as written (`original`) and unquoted (`name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    original: String,
    name: String,
}

impl Identifier {
    pub fn new(raw: &str, dialect: Dialect) -> Self {
        let original = raw.trim().to_string();
        let name = unquote(&original, dialect.quote_char()).to_string();
        Self { original, name }
    }

    /// Canonical, unquoted name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name exactly as it appeared in the source, quotes included.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_quoted(&self) -> bool {
        self.original != self.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// `[catalog.][schema.]name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub catalog: Option<Identifier>,
    pub schema: Option<Identifier>,
    pub name: Identifier,
}

impl QualifiedName {
    pub fn new(name: Identifier) -> Self {
        Self {
            catalog: None,
            schema: None,
            name,
        }
    }

    /// Build from dotted parts, innermost last. Parts beyond three are rejected by the caller.
    pub(crate) fn from_parts(mut parts: Vec<Identifier>) -> Option<Self> {
        let name = parts.pop()?;
        let schema = parts.pop();
        let catalog = parts.pop();
        Some(Self {
            catalog,
            schema,
            name,
        })
    }

    pub fn name(&self) -> &str {
        self.name.name()
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_ref().map(Identifier::name)
    }

    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_ref().map(Identifier::name)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(catalog) = &self.catalog {
            write!(f, "{}.", catalog)?;
        }
        if let Some(schema) = &self.schema {
            write!(f, "{}.", schema)?;
        }
        write!(f, "{}", self.name)
    }
}
