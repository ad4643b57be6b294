//! Table constraints and indexes.
//!
//! Constraints refer to the table's columns by position ([`ColumnRef`]) so the
//! model has no back-pointers. A reference that could not be resolved keeps
//! the written name with `index == None`.

use super::{DataType, Identifier, QualifiedName};

/// A column named by a constraint, resolved to its position in `Table::columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: Identifier,
    pub index: Option<usize>,
}

impl ColumnRef {
    pub fn is_resolved(&self) -> bool {
        self.index.is_some()
    }
}

/// A column of the table a foreign key points at.
///
/// The referenced table is not parsed, so the data type is copied from the
/// local column in the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceColumn {
    pub name: Identifier,
    pub data_type: Option<DataType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKey {
    pub name: Option<Identifier>,
    pub columns: Vec<ColumnRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueKey {
    pub name: Option<Identifier>,
    pub columns: Vec<ColumnRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub name: Option<Identifier>,
    pub columns: Vec<ColumnRef>,
    /// Storage algorithm from `USING`, already checked against the dialect.
    pub algorithm: Option<String>,
    /// Declared through `CREATE UNIQUE INDEX`.
    pub unique: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub name: Option<Identifier>,
    pub columns: Vec<ColumnRef>,
    pub referenced_table: QualifiedName,
    /// Same length as `columns`, or empty when the target's primary key is implied.
    pub references: Vec<ReferenceColumn>,
    pub on_delete: Option<String>,
    pub on_update: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub name: Option<Identifier>,
    /// Predicate text without the enclosing parentheses.
    pub search_condition: String,
    /// First column mentioned in the predicate, if any resolves.
    pub column: Option<ColumnRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    PrimaryKey(PrimaryKey),
    UniqueKey(UniqueKey),
    Index(Index),
    ForeignKey(ForeignKey),
    Check(Check),
}

impl Constraint {
    pub fn kind(&self) -> &'static str {
        match self {
            Constraint::PrimaryKey(_) => "PRIMARY KEY",
            Constraint::UniqueKey(_) => "UNIQUE",
            Constraint::Index(_) => "INDEX",
            Constraint::ForeignKey(_) => "FOREIGN KEY",
            Constraint::Check(_) => "CHECK",
        }
    }

    pub fn name(&self) -> Option<&Identifier> {
        match self {
            Constraint::PrimaryKey(c) => c.name.as_ref(),
            Constraint::UniqueKey(c) => c.name.as_ref(),
            Constraint::Index(c) => c.name.as_ref(),
            Constraint::ForeignKey(c) => c.name.as_ref(),
            Constraint::Check(c) => c.name.as_ref(),
        }
    }

    pub fn columns(&self) -> &[ColumnRef] {
        match self {
            Constraint::PrimaryKey(c) => &c.columns,
            Constraint::UniqueKey(c) => &c.columns,
            Constraint::Index(c) => &c.columns,
            Constraint::ForeignKey(c) => &c.columns,
            Constraint::Check(c) => c.column.as_slice(),
        }
    }

    /// Human-readable label for diagnostics, e.g. `FOREIGN KEY fk_film_language`.
    pub fn label(&self) -> String {
        match self.name() {
            Some(name) => format!("{} {}", self.kind(), name.name()),
            None => self.kind().to_string(),
        }
    }
}
