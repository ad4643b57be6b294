//! Parse options and the XML configuration file

use std::collections::HashMap;
use std::path::Path;

use roxmltree::Document;

use crate::error::DdlError;
use crate::model::Dialect;

/// Default upper bound on input size (8 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 8 * 1024 * 1024;

/// Type-name substitutions applied before a type is looked up in the dialect grammar.
///
/// Keys and values are stored upper-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeOverrides {
    map: HashMap<String, String>,
}

impl TypeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: &str, to: &str) {
        self.map
            .insert(from.trim().to_ascii_uppercase(), to.trim().to_ascii_uppercase());
    }

    /// Replacement for an upper-cased type name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    /// Add every entry of `other`, replacing existing keys.
    pub fn extend(&mut self, other: TypeOverrides) {
        self.map.extend(other.map);
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Parse `FROM=TO` pairs separated by `;` or `,`, e.g. `INT4=INTEGER;FLOAT8=DOUBLE PRECISION`.
    pub fn parse_mapping(text: &str) -> Result<Self, DdlError> {
        let mut overrides = Self::new();
        for pair in text.split([';', ',']).map(str::trim).filter(|p| !p.is_empty()) {
            match pair.split_once('=') {
                Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
                    overrides.insert(from, to)
                }
                _ => {
                    return Err(DdlError::InvalidConfig {
                        message: format!("type override '{}' is not of the form FROM=TO", pair),
                    })
                }
            }
        }
        Ok(overrides)
    }
}

/// Options for a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub dialect: Dialect,
    /// Encoding label understood by `encoding_rs`, used for byte input.
    pub encoding: String,
    /// Fail instead of warning when a constraint names an unknown column.
    pub strict_references: bool,
    pub max_input_bytes: usize,
    pub type_overrides: TypeOverrides,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            encoding: "UTF-8".to_string(),
            strict_references: false,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            type_overrides: TypeOverrides::default(),
        }
    }
}

impl ParseOptions {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_strict_references(mut self, strict: bool) -> Self {
        self.strict_references = strict;
        self
    }

    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = limit;
        self
    }

    pub fn with_type_override(mut self, from: &str, to: &str) -> Self {
        self.type_overrides.insert(from, to);
        self
    }

    /// Read options from a `<DdlParser>` XML file.
    pub fn from_config_file(path: &Path) -> Result<Self, DdlError> {
        let content = std::fs::read_to_string(path).map_err(|e| DdlError::ConfigReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let doc = Document::parse(&content).map_err(|e| DdlError::ConfigParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        options_from_document(&doc)
    }

    /// Read options from XML text. Used by tests and embedders.
    pub fn from_config_str(content: &str) -> Result<Self, DdlError> {
        let doc = Document::parse(content).map_err(|e| DdlError::InvalidConfig {
            message: e.to_string(),
        })?;
        options_from_document(&doc)
    }
}

fn options_from_document(doc: &Document) -> Result<ParseOptions, DdlError> {
    let root = doc.root_element();
    if root.tag_name().name() != "DdlParser" {
        return Err(DdlError::InvalidConfig {
            message: format!(
                "expected <DdlParser> root element, found <{}>",
                root.tag_name().name()
            ),
        });
    }

    let mut options = ParseOptions::default();

    if let Some(dialect) = find_property_value(&root, "Dialect") {
        options.dialect = dialect.parse()?;
    }

    if let Some(encoding) = find_property_value(&root, "Encoding") {
        options.encoding = encoding;
    }

    if let Some(strict) = find_property_value(&root, "StrictReferences") {
        options.strict_references = parse_bool("StrictReferences", &strict)?;
    }

    if let Some(limit) = find_property_value(&root, "MaxInputBytes") {
        options.max_input_bytes = limit.parse().map_err(|_| DdlError::InvalidConfig {
            message: format!("MaxInputBytes must be a byte count, got '{}'", limit),
        })?;
    }

    for node in root.descendants() {
        if node.tag_name().name() == "Override" {
            match (node.attribute("From"), node.attribute("To")) {
                (Some(from), Some(to)) => options.type_overrides.insert(from, to),
                _ => {
                    return Err(DdlError::InvalidConfig {
                        message: "<Override> requires From and To attributes".to_string(),
                    })
                }
            }
        }
    }

    Ok(options)
}

fn find_property_value(root: &roxmltree::Node, property_name: &str) -> Option<String> {
    for node in root.descendants() {
        if node.tag_name().name() == property_name {
            return node.text().map(|s| s.trim().to_string());
        }
    }
    None
}

fn parse_bool(property: &str, value: &str) -> Result<bool, DdlError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(DdlError::InvalidConfig {
            message: format!("{} must be true or false, got '{}'", property, value),
        })
    }
}
