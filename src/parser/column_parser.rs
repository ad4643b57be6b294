//! Column definitions: `name type [modifiers...]`.

use super::constraint_parser::{parse_reference_clause, ReferenceClause};
use super::cursor::Cursor;
use super::identifier_utils::unquote_literal;
use super::type_parser::parse_data_type;
use crate::config::ParseOptions;
use crate::diagnostics::Diagnostics;
use crate::error::DdlError;
use crate::model::{Column, Dialect, Identifier};

/// Constraint written inside a column definition; attached once the column has a position.
#[derive(Debug, Clone)]
pub(crate) enum InlineConstraint {
    PrimaryKey {
        name: Option<Identifier>,
    },
    Unique {
        name: Option<Identifier>,
    },
    References {
        name: Option<Identifier>,
        clause: ReferenceClause,
    },
    Check {
        name: Option<Identifier>,
        condition: String,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct ColumnDefinition {
    pub column: Column,
    pub inline: Vec<InlineConstraint>,
}

/// Parse a column definition spanning the whole cursor window.
pub(crate) fn parse_column_definition(
    cursor: &mut Cursor,
    options: &ParseOptions,
    diagnostics: &mut Diagnostics,
) -> Result<ColumnDefinition, DdlError> {
    let dialect = options.dialect;
    let name = Identifier::new(cursor.require_word("column name")?, dialect);
    let data_type = parse_data_type(cursor, options, diagnostics)?;

    let mut column = Column::new(name, data_type);
    column.auto_increment = column.data_type.is_serial();
    let mut inline = Vec::new();
    let mut constraint_name: Option<Identifier> = None;

    while !cursor.at_end() {
        let offset = cursor.pos();
        let Some(word) = cursor.next_word() else {
            // Stray group such as the options of an identity column.
            if cursor.check_byte(b'(') {
                cursor.skip_parenthesized()?;
                continue;
            }
            return Err(cursor.error_here("column attribute"));
        };

        match word.to_ascii_uppercase().as_str() {
            "DEFAULT" => {
                let value = read_value(cursor)?;
                column.default_value = (!value.eq_ignore_ascii_case("NULL")).then_some(value);
            }
            "ON" => {
                cursor.expect_word("UPDATE")?;
                column.on_update = Some(read_value(cursor)?);
            }
            "NOT" => {
                cursor.expect_word("NULL")?;
                column.nullable = false;
            }
            "NULL" => column.nullable = true,
            "AUTO_INCREMENT" if dialect == Dialect::Mysql => column.auto_increment = true,
            "GENERATED" => {
                if cursor.eat_word_ci("BY") {
                    cursor.expect_word("DEFAULT")?;
                    if cursor.eat_word_ci("ON") {
                        cursor.expect_word("NULL")?;
                    }
                } else {
                    cursor.eat_word_ci("ALWAYS");
                }
                cursor.expect_word("AS")?;
                if cursor.eat_word_ci("IDENTITY") {
                    column.auto_increment = true;
                }
                cursor.skip_parenthesized()?;
            }
            "AS" => cursor.skip_parenthesized()?,
            "IDENTITY" => {
                column.auto_increment = true;
                cursor.skip_parenthesized()?;
            }
            "COMMENT" => {
                let literal = cursor.require_word("comment literal")?;
                column.comment = Some(unquote_literal(literal));
            }
            "COLLATE" | "CHARSET" => {
                cursor.require_word("collation")?;
            }
            "CHARACTER" => {
                cursor.expect_word("SET")?;
                cursor.require_word("character set")?;
            }
            "CONSTRAINT" => {
                constraint_name = Some(Identifier::new(
                    cursor.require_word("constraint name")?,
                    dialect,
                ));
            }
            "PRIMARY" => {
                cursor.expect_word("KEY")?;
                inline.push(InlineConstraint::PrimaryKey {
                    name: constraint_name.take(),
                });
            }
            "KEY" if dialect == Dialect::Mysql => inline.push(InlineConstraint::PrimaryKey {
                name: constraint_name.take(),
            }),
            "UNIQUE" => {
                if !cursor.eat_word_ci("KEY") {
                    cursor.eat_word_ci("INDEX");
                }
                inline.push(InlineConstraint::Unique {
                    name: constraint_name.take(),
                });
            }
            "REFERENCES" => {
                let clause = parse_reference_clause(cursor, dialect)?;
                inline.push(InlineConstraint::References {
                    name: constraint_name.take(),
                    clause,
                });
            }
            "CHECK" => {
                let condition = cursor.parenthesized()?.trim().to_string();
                inline.push(InlineConstraint::Check {
                    name: constraint_name.take(),
                    condition,
                });
            }
            _ => {
                tracing::debug!(
                    "skipping column attribute '{}' at offset {} of {}",
                    word,
                    offset,
                    column.name
                );
                if cursor.peek_byte() == Some(b'(') {
                    cursor.skip_parenthesized()?;
                }
            }
        }
    }

    Ok(ColumnDefinition { column, inline })
}

/// A `DEFAULT`/`ON UPDATE` value: a literal, a parenthesized expression, or a
/// word optionally followed by a call group, e.g. `CURRENT_TIMESTAMP(6)`.
fn read_value(cursor: &mut Cursor) -> Result<String, DdlError> {
    cursor.skip_whitespace();
    let start = cursor.pos();
    if cursor.check_byte(b'(') {
        cursor.skip_parenthesized()?;
    } else {
        cursor.require_word("value")?;
        if cursor.peek_byte() == Some(b'(') {
            cursor.skip_parenthesized()?;
            // Postgres cast after a call, e.g. nextval('s'::regclass)::bigint
            if cursor.peek_byte() == Some(b':') {
                cursor.next_word();
            }
        }
    }
    Ok(cursor.slice(start, cursor.pos()).to_string())
}
