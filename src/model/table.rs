//! Table and column model

use super::constraint::{Check, ColumnRef, Constraint, ForeignKey, Index, PrimaryKey, UniqueKey};
use super::{DataType, Dialect, Identifier, QualifiedName};
use crate::error::DdlError;

/// A column definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: Identifier,
    pub data_type: DataType,
    pub nullable: bool,
    /// Default expression as written; `DEFAULT NULL` is stored as `None`.
    pub default_value: Option<String>,
    /// MySQL `ON UPDATE` expression.
    pub on_update: Option<String>,
    pub auto_increment: bool,
    pub comment: Option<String>,
}

impl Column {
    pub fn new(name: Identifier, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            nullable: true,
            default_value: None,
            on_update: None,
            auto_increment: false,
            comment: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.name()
    }
}

/// A parsed `CREATE TABLE` with everything attached by later statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub dialect: Dialect,
    pub qualified_name: QualifiedName,
    pub columns: Vec<Column>,
    pub primary_key: Option<PrimaryKey>,
    pub unique_keys: Vec<UniqueKey>,
    pub foreign_keys: Vec<ForeignKey>,
    pub indexes: Vec<Index>,
    pub checks: Vec<Check>,
    pub comment: Option<String>,
    /// Trailing table options other than `COMMENT`, in source order.
    pub options: Vec<(String, String)>,
}

impl Table {
    pub fn new(dialect: Dialect, qualified_name: QualifiedName) -> Self {
        Self {
            dialect,
            qualified_name,
            columns: Vec::new(),
            primary_key: None,
            unique_keys: Vec::new(),
            foreign_keys: Vec::new(),
            indexes: Vec::new(),
            checks: Vec::new(),
            comment: None,
            options: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.qualified_name.name()
    }

    pub fn schema(&self) -> Option<&str> {
        self.qualified_name.schema()
    }

    pub fn catalog(&self) -> Option<&str> {
        self.qualified_name.catalog()
    }

    /// Whether `name` (unquoted) designates this table under the dialect's matching rule.
    pub fn is_named(&self, name: &str) -> bool {
        self.dialect.names_match(self.name(), name)
    }

    /// Position of the column named `name` (unquoted).
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| self.dialect.names_match(c.name(), name))
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|i| &self.columns[i])
    }

    /// Column a constraint reference points at, if it was resolved.
    pub fn resolve(&self, column: &ColumnRef) -> Option<&Column> {
        column.index.and_then(|i| self.columns.get(i))
    }

    /// Append a column, rejecting a name already in use.
    pub fn add_column(&mut self, column: Column) -> Result<usize, DdlError> {
        if self.column_index(column.name()).is_some() {
            return Err(DdlError::DuplicateColumn {
                table: self.name().to_string(),
                column: column.name().to_string(),
            });
        }
        self.columns.push(column);
        Ok(self.columns.len() - 1)
    }

    /// Attach a constraint. Returns the primary key it replaced, if any.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Option<PrimaryKey> {
        match constraint {
            Constraint::PrimaryKey(pk) => self.primary_key.replace(pk),
            Constraint::UniqueKey(uk) => {
                self.unique_keys.push(uk);
                None
            }
            Constraint::Index(index) => {
                self.indexes.push(index);
                None
            }
            Constraint::ForeignKey(fk) => {
                self.foreign_keys.push(fk);
                None
            }
            Constraint::Check(check) => {
                self.checks.push(check);
                None
            }
        }
    }

    /// All constraints in emission order: indexes, primary key, unique keys, foreign keys, checks.
    pub fn constraints(&self) -> Vec<Constraint> {
        let mut all = Vec::new();
        all.extend(self.indexes.iter().cloned().map(Constraint::Index));
        all.extend(self.primary_key.iter().cloned().map(Constraint::PrimaryKey));
        all.extend(self.unique_keys.iter().cloned().map(Constraint::UniqueKey));
        all.extend(self.foreign_keys.iter().cloned().map(Constraint::ForeignKey));
        all.extend(self.checks.iter().cloned().map(Constraint::Check));
        all
    }
}
