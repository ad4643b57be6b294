//! Statement-level parsing.
//!
//! The first statement must be `CREATE TABLE`; it produces the [`Table`].
//! Every statement after it is either applied to that table (`COMMENT ON`,
//! `ALTER TABLE ... ADD`, `CREATE [UNIQUE] INDEX`) or skipped up to the next
//! `;`.

use super::column_parser::{parse_column_definition, ColumnDefinition, InlineConstraint};
use super::constraint_parser::Resolver;
use super::cursor::{split_top_level, Cursor};
use super::identifier_utils::{
    is_reserved_word, split_last_part, split_qualified_name, unquote_literal,
};
use crate::config::ParseOptions;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::DdlError;
use crate::model::{
    ColumnRef, Constraint, Identifier, Index, PrimaryKey, Table, UniqueKey,
};

/// First words of a table element that make it a constraint rather than a column.
const CONSTRAINT_STARTS: &[&str] = &[
    "PRIMARY",
    "UNIQUE",
    "INDEX",
    "KEY",
    "CONSTRAINT",
    "CHECK",
    "FOREIGN",
    "FULLTEXT",
    "SPATIAL",
];

fn is_constraint_start(word: &str) -> bool {
    CONSTRAINT_STARTS.iter().any(|k| k.eq_ignore_ascii_case(word))
}

/// Table options whose value may follow without `=`.
const VALUED_OPTIONS: &[&str] = &[
    "ENGINE",
    "TYPE",
    "COMMENT",
    "CHARSET",
    "DEFAULT CHARSET",
    "CHARACTER SET",
    "DEFAULT CHARACTER SET",
    "COLLATE",
    "DEFAULT COLLATE",
    "ROW_FORMAT",
    "TABLESPACE",
    "USING",
    "INHERITS",
    "STORAGE",
    "PCTFREE",
    "PCTUSED",
    "INITRANS",
    "MAXTRANS",
];

fn takes_value(key: &str) -> bool {
    VALUED_OPTIONS.contains(&key)
}

/// Whether the next token reads as an option value rather than another keyword.
fn next_is_value(cursor: &mut Cursor, quote: char) -> bool {
    if cursor.check_byte(b'(') {
        return true;
    }
    cursor.peek_word().is_some_and(|w| {
        w.starts_with(['\'', quote, '-', '+'])
            || w.starts_with(|c: char| c.is_ascii_digit())
    })
}

/// Parser state for one normalized buffer.
struct StatementParser<'a> {
    options: &'a ParseOptions,
    diagnostics: Diagnostics,
}

/// Parse a normalized buffer into a table plus the diagnostics raised on the way.
pub(crate) fn parse_statements(
    normalized: &str,
    options: &ParseOptions,
) -> Result<(Table, Diagnostics), DdlError> {
    let mut parser = StatementParser {
        options,
        diagnostics: Diagnostics::new(),
    };
    let mut cursor = Cursor::new(normalized, options.dialect);

    let mut table = parser.parse_create_table(&mut cursor)?;

    while !cursor.at_end() {
        if cursor.eat_terminator() {
            continue;
        }
        let terminator = cursor.find_terminator();
        let mut statement = cursor.window(cursor.pos(), terminator);
        parser.parse_follow_up(&mut statement, &mut table)?;
        cursor.set_pos(terminator);
    }

    Ok((table, parser.diagnostics))
}

impl StatementParser<'_> {
    // ========================================================================
    // CREATE TABLE
    // ========================================================================

    fn parse_create_table(&mut self, cursor: &mut Cursor) -> Result<Table, DdlError> {
        let dialect = self.options.dialect;
        cursor.expect_word("CREATE")?;
        // GLOBAL TEMPORARY, UNLOGGED, OR REPLACE, ...
        loop {
            cursor.skip_whitespace();
            let offset = cursor.pos();
            let word = cursor.require_word("TABLE")?;
            if word.eq_ignore_ascii_case("TABLE") {
                break;
            }
            tracing::debug!("skipping table prefix '{}' at offset {}", word, offset);
        }
        if cursor.eat_word_ci("IF") {
            cursor.expect_word("NOT")?;
            cursor.expect_word("EXISTS")?;
        }

        cursor.skip_whitespace();
        let name_offset = cursor.pos();
        let raw_name = cursor.require_word("table name")?;
        let qualified_name = split_qualified_name(raw_name, dialect, name_offset)?;
        self.check_reserved("table", &qualified_name.name);
        let mut table = Table::new(dialect, qualified_name);

        let (body_start, body_end) = cursor.parenthesized_span()?;
        self.parse_table_body(cursor, body_start, body_end, &mut table)?;

        let terminator = cursor.find_terminator();
        let mut table_options = cursor.window(cursor.pos(), terminator);
        self.parse_table_options(&mut table_options, &mut table)?;
        cursor.set_pos(terminator);
        cursor.eat_terminator();

        Ok(table)
    }

    /// Columns are added before any constraint so that constraints listed
    /// between columns still resolve.
    fn parse_table_body(
        &mut self,
        cursor: &Cursor,
        start: usize,
        end: usize,
        table: &mut Table,
    ) -> Result<(), DdlError> {
        let elements = split_top_level(cursor.source(), start, end, b',', self.options.dialect);
        let mut constraint_spans = Vec::new();
        let mut pending = Vec::new();

        for (s, e) in elements {
            let mut element = cursor.window(s, e);
            let Some(first) = element.peek_word() else {
                return Err(element.error_here("column definition"));
            };
            if is_constraint_start(first) {
                constraint_spans.push((s, e));
            } else {
                let definition = parse_column_definition(
                    &mut element,
                    self.options,
                    &mut self.diagnostics,
                )?;
                pending.push(self.add_column(table, definition)?);
            }
        }

        for (index, inline) in pending {
            self.attach_inline(table, index, inline)?;
        }

        for (s, e) in constraint_spans {
            let mut element = cursor.window(s, e);
            self.add_constraint_from(&mut element, table)?;
        }
        Ok(())
    }

    /// Trailing options up to the statement terminator.
    ///
    /// An option is `key [=] value` when an `=` follows, when the key is known
    /// to take a value, or when the next token looks like one (a literal,
    /// quoted name, number or group). Anything else is a bare flag such as
    /// `NOLOGGING` and is kept with an empty value.
    fn parse_table_options(&mut self, cursor: &mut Cursor, table: &mut Table) -> Result<(), DdlError> {
        let quote = self.options.dialect.quote_char();
        while !cursor.at_end() {
            if cursor.eat_byte(b',') {
                continue;
            }
            if cursor.check_byte(b'(') {
                // Group without a key, e.g. the partition list of PARTITION BY RANGE (c) (...)
                cursor.skip_parenthesized()?;
                continue;
            }
            let Some(word) = cursor.next_word_until(b"=") else {
                // Stray stop character such as a lone `=` or `)`
                tracing::debug!(
                    "skipping stray character at offset {} in table options",
                    cursor.pos()
                );
                cursor.set_pos(cursor.pos() + 1);
                continue;
            };
            let mut key = word.to_ascii_uppercase();

            if key == "WITH" && cursor.check_byte(b'(') {
                cursor.skip_parenthesized()?;
                continue;
            }
            if key == "DEFAULT" {
                if let Some(next) = cursor.next_word_until(b"=") {
                    key = format!("DEFAULT {}", next.to_ascii_uppercase());
                }
            }
            if key.ends_with("CHARACTER") && cursor.eat_word_ci("SET") {
                key.push_str(" SET");
            }
            if key == "ON" && cursor.eat_word_ci("COMMIT") {
                let mut action = cursor.next_word().unwrap_or_default().to_ascii_uppercase();
                if cursor.eat_word_ci("ROWS") {
                    action.push_str(" ROWS");
                }
                table.options.push(("ON COMMIT".to_string(), action));
                continue;
            }

            let has_value =
                cursor.eat_byte(b'=') || takes_value(&key) || next_is_value(cursor, quote);
            let value = if has_value {
                if cursor.check_byte(b'(') {
                    let (s, e) = cursor.parenthesized_span()?;
                    cursor.slice(s - 1, e + 1)
                } else {
                    cursor.next_word_until(b"=").unwrap_or_default()
                }
            } else {
                ""
            };

            if key == "COMMENT" {
                table.comment = Some(unquote_literal(value));
            } else {
                table.options.push((key, value.to_string()));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Follow-up statements
    // ========================================================================

    fn parse_follow_up(&mut self, cursor: &mut Cursor, table: &mut Table) -> Result<(), DdlError> {
        let first = cursor.peek_word().map(str::to_ascii_uppercase);
        match first.as_deref() {
            Some("COMMENT") => self.parse_comment_on(cursor, table),
            Some("ALTER") => self.parse_alter_table(cursor, table),
            Some("CREATE") => self.parse_create_index(cursor, table),
            _ => {
                skip(cursor);
                Ok(())
            }
        }
    }

    /// `COMMENT ON TABLE t IS '...'` / `COMMENT ON COLUMN t.c IS '...'`
    fn parse_comment_on(&mut self, cursor: &mut Cursor, table: &mut Table) -> Result<(), DdlError> {
        let dialect = self.options.dialect;
        cursor.expect_word("COMMENT")?;
        cursor.expect_word("ON")?;
        let target = cursor.require_word("TABLE or COLUMN")?.to_ascii_uppercase();

        cursor.skip_whitespace();
        let offset = cursor.pos();
        match target.as_str() {
            "TABLE" => {
                let raw = cursor.require_word("table name")?;
                ensure_same_table(table, raw, offset)?;
                table.comment = self.read_comment_text(cursor)?;
            }
            "COLUMN" => {
                let raw = cursor.require_word("column name")?;
                let (table_part, column_part) = split_last_part(raw, dialect.quote_char())
                    .ok_or_else(|| DdlError::syntax("table.column", raw, offset))?;
                ensure_same_table(table, table_part, offset)?;
                let column = Identifier::new(column_part, dialect);
                let text = self.read_comment_text(cursor)?;
                match table.column_index(column.name()) {
                    Some(index) => table.columns[index].comment = text,
                    None => self.unresolved("COMMENT ON COLUMN", column.name())?,
                }
            }
            _ => skip(cursor),
        }
        Ok(())
    }

    fn read_comment_text(&mut self, cursor: &mut Cursor) -> Result<Option<String>, DdlError> {
        cursor.expect_word("IS")?;
        let literal = cursor.require_word("comment literal")?;
        if literal.eq_ignore_ascii_case("NULL") {
            Ok(None)
        } else {
            Ok(Some(unquote_literal(literal)))
        }
    }

    /// `ALTER TABLE t ADD ...`; any other action is skipped.
    fn parse_alter_table(&mut self, cursor: &mut Cursor, table: &mut Table) -> Result<(), DdlError> {
        cursor.expect_word("ALTER")?;
        if !cursor.eat_word_ci("TABLE") {
            skip(cursor);
            return Ok(());
        }
        cursor.eat_word_ci("ONLY");
        if cursor.eat_word_ci("IF") {
            cursor.expect_word("EXISTS")?;
        }
        cursor.skip_whitespace();
        let offset = cursor.pos();
        let raw = cursor.require_word("table name")?;
        ensure_same_table(table, raw, offset)?;

        if !cursor.eat_word_ci("ADD") {
            skip(cursor);
            return Ok(());
        }

        // Oracle: ADD (element, element, ...)
        if cursor.check_byte(b'(') {
            let (start, end) = cursor.parenthesized_span()?;
            for (s, e) in split_top_level(cursor.source(), start, end, b',', self.options.dialect) {
                let mut element = cursor.window(s, e);
                self.add_element(&mut element, table)?;
            }
            return Ok(());
        }
        self.add_element(cursor, table)
    }

    /// A constraint or a column definition added by `ALTER TABLE ... ADD`.
    fn add_element(&mut self, cursor: &mut Cursor, table: &mut Table) -> Result<(), DdlError> {
        if cursor.peek_word().is_some_and(is_constraint_start) {
            return self.add_constraint_from(cursor, table);
        }
        cursor.eat_word_ci("COLUMN");
        if cursor.eat_word_ci("IF") {
            cursor.expect_word("NOT")?;
            cursor.expect_word("EXISTS")?;
        }
        let definition = parse_column_definition(cursor, self.options, &mut self.diagnostics)?;
        let (index, inline) = self.add_column(table, definition)?;
        self.attach_inline(table, index, inline)
    }

    /// `CREATE [UNIQUE] INDEX [name] ON t [USING alg] (cols) [USING alg]`;
    /// any other `CREATE` is skipped.
    fn parse_create_index(&mut self, cursor: &mut Cursor, table: &mut Table) -> Result<(), DdlError> {
        let dialect = self.options.dialect;
        cursor.expect_word("CREATE")?;
        let unique = cursor.eat_word_ci("UNIQUE");
        if !cursor.eat_word_ci("INDEX") {
            skip(cursor);
            return Ok(());
        }
        cursor.eat_word_ci("CONCURRENTLY");
        if cursor.eat_word_ci("IF") {
            cursor.expect_word("NOT")?;
            cursor.expect_word("EXISTS")?;
        }

        let name = if cursor.check_word_ci("ON") {
            None
        } else {
            cursor.next_word().map(|w| Identifier::new(w, dialect))
        };
        cursor.expect_word("ON")?;
        cursor.eat_word_ci("ONLY");
        cursor.skip_whitespace();
        let offset = cursor.pos();
        let raw = cursor.require_word("table name")?;
        ensure_same_table(table, raw, offset)?;

        let (columns, algorithm) = Resolver {
            table: &*table,
            options: self.options,
            diagnostics: &mut self.diagnostics,
        }
        .keyed_columns(cursor, "INDEX", &name)?;

        if !cursor.at_end() {
            tracing::debug!("ignoring index options: {}", cursor.rest().trim());
        }
        self.attach(
            table,
            Constraint::Index(Index {
                name,
                columns,
                algorithm,
                unique,
            }),
        );
        Ok(())
    }

    // ========================================================================
    // Attaching to the table
    // ========================================================================

    fn add_column(
        &mut self,
        table: &mut Table,
        definition: ColumnDefinition,
    ) -> Result<(usize, Vec<InlineConstraint>), DdlError> {
        self.check_reserved("column", &definition.column.name);
        let index = table.add_column(definition.column)?;
        Ok((index, definition.inline))
    }

    fn attach_inline(
        &mut self,
        table: &mut Table,
        index: usize,
        inline: Vec<InlineConstraint>,
    ) -> Result<(), DdlError> {
        for constraint in inline {
            let column = ColumnRef {
                name: table.columns[index].name.clone(),
                index: Some(index),
            };
            let resolver = Resolver {
                table: &*table,
                options: self.options,
                diagnostics: &mut self.diagnostics,
            };
            let constraint = match constraint {
                InlineConstraint::PrimaryKey { name } => Constraint::PrimaryKey(PrimaryKey {
                    name,
                    columns: vec![column],
                }),
                InlineConstraint::Unique { name } => Constraint::UniqueKey(UniqueKey {
                    name,
                    columns: vec![column],
                }),
                InlineConstraint::References { name, clause } => {
                    Constraint::ForeignKey(resolver.foreign_key(name, vec![column], clause)?)
                }
                InlineConstraint::Check { name, condition } => {
                    Constraint::Check(resolver.check(name, &condition))
                }
            };
            self.attach(table, constraint);
        }
        Ok(())
    }

    fn add_constraint_from(&mut self, cursor: &mut Cursor, table: &mut Table) -> Result<(), DdlError> {
        let constraint = Resolver {
            table: &*table,
            options: self.options,
            diagnostics: &mut self.diagnostics,
        }
        .parse_constraint(cursor)?;
        self.attach(table, constraint);
        Ok(())
    }

    fn attach(&mut self, table: &mut Table, constraint: Constraint) {
        if let Some(name) = constraint.name() {
            self.check_reserved("constraint", name);
        }
        if table.add_constraint(constraint).is_some() {
            self.diagnostics.push(Diagnostic::DuplicatePrimaryKey {
                table: table.name().to_string(),
            });
        }
    }

    fn check_reserved(&mut self, kind: &'static str, identifier: &Identifier) {
        if !identifier.is_quoted() && is_reserved_word(identifier.name()) {
            self.diagnostics.push(Diagnostic::ReservedWord {
                kind,
                identifier: identifier.name().to_string(),
            });
        }
    }

    fn unresolved(&mut self, constraint: &str, column: &str) -> Result<(), DdlError> {
        if self.options.strict_references {
            return Err(DdlError::UnresolvedColumn {
                constraint: constraint.to_string(),
                column: column.to_string(),
            });
        }
        self.diagnostics.push(Diagnostic::UnresolvedReference {
            constraint: constraint.to_string(),
            column: column.to_string(),
        });
        Ok(())
    }
}

/// Fail unless `raw` names the table being built.
fn ensure_same_table(table: &Table, raw: &str, offset: usize) -> Result<(), DdlError> {
    let name = split_qualified_name(raw, table.dialect, offset)?;
    if !table.is_named(name.name()) {
        return Err(DdlError::syntax(table.qualified_name.to_string(), raw, offset));
    }
    Ok(())
}

fn skip(cursor: &mut Cursor) {
    let skipped = cursor.skip_statement();
    tracing::debug!("skipping statement: {}", skipped);
}
