//! Constraint and index clauses.
//!
//! Handles table-level constraints in the `CREATE TABLE` body, the constraint
//! part of `ALTER TABLE ... ADD`, and the pieces shared with inline column
//! constraints and `CREATE INDEX`: column lists, `REFERENCES` clauses and
//! `USING` algorithms. Column names are resolved against the table built so
//! far.

use sqlparser::tokenizer::{Token, Tokenizer};

use super::cursor::{split_top_level, Cursor};
use super::identifier_utils::{leading_identifier, split_qualified_name};
use crate::config::ParseOptions;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::DdlError;
use crate::model::{
    Check, ColumnRef, Constraint, Dialect, ForeignKey, Identifier, Index, PrimaryKey,
    QualifiedName, ReferenceColumn, Table, UniqueKey,
};

/// Words that can follow `CONSTRAINT` when the constraint name is omitted.
const CONSTRAINT_KEYWORDS: &[&str] = &["PRIMARY", "UNIQUE", "FOREIGN", "CHECK"];

/// `REFERENCES <table> [(cols)] [ON DELETE ..] [ON UPDATE ..] [MATCH ..]`
#[derive(Debug, Clone)]
pub(crate) struct ReferenceClause {
    pub table: QualifiedName,
    pub columns: Vec<Identifier>,
    pub on_delete: Option<String>,
    pub on_update: Option<String>,
    /// Position of the referenced table name, for error reporting.
    pub offset: usize,
}

/// Table being built plus the options and diagnostics of the running parse.
pub(crate) struct Resolver<'t> {
    pub table: &'t Table,
    pub options: &'t ParseOptions,
    pub diagnostics: &'t mut Diagnostics,
}

impl Resolver<'_> {
    fn dialect(&self) -> Dialect {
        self.options.dialect
    }

    /// Map written column names to positions in the table.
    ///
    /// Unknown names are an error in strict mode and a diagnostic otherwise.
    pub fn resolve_columns(
        &mut self,
        names: Vec<Identifier>,
        label: &str,
    ) -> Result<Vec<ColumnRef>, DdlError> {
        let mut refs = Vec::with_capacity(names.len());
        for name in names {
            let index = self.table.column_index(name.name());
            if index.is_none() {
                if self.options.strict_references {
                    return Err(DdlError::UnresolvedColumn {
                        constraint: label.to_string(),
                        column: name.name().to_string(),
                    });
                }
                self.diagnostics.push(Diagnostic::UnresolvedReference {
                    constraint: label.to_string(),
                    column: name.name().to_string(),
                });
            }
            refs.push(ColumnRef { name, index });
        }
        Ok(refs)
    }

    /// Parse one constraint, with or without a leading `CONSTRAINT <name>`.
    pub fn parse_constraint(&mut self, cursor: &mut Cursor) -> Result<Constraint, DdlError> {
        let dialect = self.dialect();
        let mut name = None;
        if cursor.eat_word_ci("CONSTRAINT") {
            let omitted = cursor
                .peek_word()
                .is_some_and(|w| CONSTRAINT_KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(w)));
            if !omitted {
                name = Some(Identifier::new(
                    cursor.require_word("constraint name")?,
                    dialect,
                ));
            }
        }

        cursor.skip_whitespace();
        let offset = cursor.pos();
        let keyword = cursor.require_word("constraint")?.to_ascii_uppercase();
        let constraint = match keyword.as_str() {
            "PRIMARY" => {
                cursor.expect_word("KEY")?;
                let index_name = optional_name(cursor, dialect);
                let name = name.or(index_name);
                let (columns, _) = self.keyed_columns(cursor, "PRIMARY KEY", &name)?;
                Constraint::PrimaryKey(PrimaryKey { name, columns })
            }
            "UNIQUE" => {
                if !cursor.eat_word_ci("INDEX") {
                    cursor.eat_word_ci("KEY");
                }
                let index_name = optional_name(cursor, dialect);
                let name = name.or(index_name);
                let (columns, _) = self.keyed_columns(cursor, "UNIQUE", &name)?;
                Constraint::UniqueKey(UniqueKey { name, columns })
            }
            "INDEX" | "KEY" | "FULLTEXT" | "SPATIAL" => {
                if matches!(keyword.as_str(), "FULLTEXT" | "SPATIAL") && !cursor.eat_word_ci("INDEX") {
                    cursor.eat_word_ci("KEY");
                }
                let index_name = optional_name(cursor, dialect);
                let name = name.or(index_name);
                let (columns, algorithm) = self.keyed_columns(cursor, "INDEX", &name)?;
                Constraint::Index(Index {
                    name,
                    columns,
                    algorithm,
                    unique: false,
                })
            }
            "FOREIGN" => {
                cursor.expect_word("KEY")?;
                let index_name = optional_name(cursor, dialect);
                let name = name.or(index_name);
                let names = identifier_list(cursor, dialect)?;
                let columns = self.resolve_columns(names, &label("FOREIGN KEY", &name))?;
                cursor.expect_word("REFERENCES")?;
                let clause = parse_reference_clause(cursor, dialect)?;
                Constraint::ForeignKey(self.foreign_key(name, columns, clause)?)
            }
            "CHECK" => {
                let condition = cursor.parenthesized()?;
                Constraint::Check(self.check(name, condition))
            }
            _ => return Err(DdlError::syntax("constraint", keyword, offset)),
        };

        if !cursor.at_end() {
            tracing::debug!(
                "ignoring trailing constraint text: {}",
                cursor.rest().trim()
            );
        }
        Ok(constraint)
    }

    /// `[USING alg] (cols) [USING alg]`, resolved.
    pub fn keyed_columns(
        &mut self,
        cursor: &mut Cursor,
        kind: &str,
        name: &Option<Identifier>,
    ) -> Result<(Vec<ColumnRef>, Option<String>), DdlError> {
        let dialect = self.dialect();
        let before = parse_using(cursor, dialect)?;
        let names = identifier_list(cursor, dialect)?;
        let after = parse_using(cursor, dialect)?;
        let columns = self.resolve_columns(names, &label(kind, name))?;
        Ok((columns, before.or(after)))
    }

    /// Build a foreign key, copying the local column types onto the referenced columns.
    pub fn foreign_key(
        &self,
        name: Option<Identifier>,
        columns: Vec<ColumnRef>,
        clause: ReferenceClause,
    ) -> Result<ForeignKey, DdlError> {
        if !clause.columns.is_empty() && clause.columns.len() != columns.len() {
            return Err(DdlError::syntax(
                format!("{} referenced column(s)", columns.len()),
                clause.columns.len().to_string(),
                clause.offset,
            ));
        }
        let references = clause
            .columns
            .into_iter()
            .zip(&columns)
            .map(|(ref_name, local)| ReferenceColumn {
                name: ref_name,
                data_type: self.table.resolve(local).map(|c| c.data_type.clone()),
            })
            .collect();
        Ok(ForeignKey {
            name,
            columns,
            referenced_table: clause.table,
            references,
            on_delete: clause.on_delete,
            on_update: clause.on_update,
        })
    }

    /// Build a check constraint; its column is the first identifier in the
    /// predicate that names a column of the table.
    pub fn check(&self, name: Option<Identifier>, condition: &str) -> Check {
        let dialect = self.dialect();
        let tokenizer_dialect = dialect.tokenizer_dialect();
        let tokens = Tokenizer::new(&*tokenizer_dialect, condition)
            .tokenize()
            .unwrap_or_else(|e| {
                tracing::debug!("could not tokenize check predicate: {}", e);
                Vec::new()
            });

        let column = tokens.into_iter().find_map(|token| match token {
            Token::Word(word) => self.table.column_index(&word.value).map(|index| {
                let written = match word.quote_style {
                    Some(q) => format!("{q}{}{q}", word.value),
                    None => word.value.clone(),
                };
                ColumnRef {
                    name: Identifier::new(&written, dialect),
                    index: Some(index),
                }
            }),
            _ => None,
        });

        Check {
            name,
            search_condition: condition.trim().to_string(),
            column,
        }
    }
}

/// Diagnostic label such as `FOREIGN KEY fk_film_language`.
pub(crate) fn label(kind: &str, name: &Option<Identifier>) -> String {
    match name {
        Some(name) => format!("{} {}", kind, name.name()),
        None => kind.to_string(),
    }
}

/// Name preceding a column list, unless the list or `USING` comes first.
pub(crate) fn optional_name(cursor: &mut Cursor, dialect: Dialect) -> Option<Identifier> {
    if cursor.check_byte(b'(') || cursor.check_word_ci("USING") {
        return None;
    }
    cursor.next_word().map(|w| Identifier::new(w, dialect))
}

/// `USING <algorithm>`, checked against the dialect's accepted algorithms.
pub(crate) fn parse_using(cursor: &mut Cursor, dialect: Dialect) -> Result<Option<String>, DdlError> {
    if !cursor.eat_word_ci("USING") {
        return Ok(None);
    }
    let algorithm = cursor.require_word("index algorithm")?;
    if !dialect.supports_index_algorithm(algorithm) {
        return Err(DdlError::UnsupportedAlgorithm {
            dialect,
            algorithm: algorithm.to_string(),
        });
    }
    Ok(Some(algorithm.to_string()))
}

/// Parenthesized, comma-separated column names. Sort order and prefix lengths are dropped.
pub(crate) fn identifier_list(
    cursor: &mut Cursor,
    dialect: Dialect,
) -> Result<Vec<Identifier>, DdlError> {
    let (start, end) = cursor.parenthesized_span()?;
    let mut names = Vec::new();
    for (s, e) in split_top_level(cursor.source(), start, end, b',', dialect) {
        let name = leading_identifier(cursor.slice(s, e), dialect.quote_char());
        if name.is_empty() {
            return Err(DdlError::syntax("column name", cursor.slice(s, e).trim(), s));
        }
        names.push(Identifier::new(name, dialect));
    }
    if names.is_empty() {
        return Err(DdlError::syntax("column name", ")", end));
    }
    Ok(names)
}

/// Body of a `REFERENCES` clause; the keyword itself is already consumed.
pub(crate) fn parse_reference_clause(
    cursor: &mut Cursor,
    dialect: Dialect,
) -> Result<ReferenceClause, DdlError> {
    cursor.skip_whitespace();
    let offset = cursor.pos();
    let raw = cursor.require_word("referenced table")?;
    let table = split_qualified_name(raw, dialect, offset)?;
    let columns = if cursor.check_byte(b'(') {
        identifier_list(cursor, dialect)?
    } else {
        Vec::new()
    };

    let mut clause = ReferenceClause {
        table,
        columns,
        on_delete: None,
        on_update: None,
        offset,
    };
    loop {
        if cursor.eat_word_ci("ON") {
            cursor.skip_whitespace();
            let event_offset = cursor.pos();
            let event = cursor.require_word("DELETE or UPDATE")?;
            let action = referential_action(cursor)?;
            if event.eq_ignore_ascii_case("DELETE") {
                clause.on_delete = Some(action);
            } else if event.eq_ignore_ascii_case("UPDATE") {
                clause.on_update = Some(action);
            } else {
                return Err(DdlError::syntax("DELETE or UPDATE", event, event_offset));
            }
        } else if cursor.eat_word_ci("MATCH") {
            cursor.require_word("match type")?;
        } else {
            break;
        }
    }
    Ok(clause)
}

/// `CASCADE`, `RESTRICT`, `SET NULL`, `SET DEFAULT` or `NO ACTION`, upper-cased.
fn referential_action(cursor: &mut Cursor) -> Result<String, DdlError> {
    let first = cursor.require_word("referential action")?.to_ascii_uppercase();
    if first == "SET" || first == "NO" {
        let second = cursor.require_word("referential action")?;
        return Ok(format!("{} {}", first, second.to_ascii_uppercase()));
    }
    Ok(first)
}
