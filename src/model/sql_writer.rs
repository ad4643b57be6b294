//! Canonical DDL rendering.
//!
//! The output is semantically equivalent to the parsed input, not textually:
//! re-parsing it under the same dialect yields the same columns, types and
//! constraints. Identifiers keep the spelling they were written with.

use super::constraint::{ColumnRef, Constraint, Index, ReferenceColumn};
use super::{Column, Dialect, Table};

impl Table {
    /// Render the table as `CREATE TABLE` DDL, followed by any statements
    /// needed for things the table body cannot express in this dialect.
    pub fn to_sql(&self) -> String {
        let dialect = self.dialect;
        let mut elements: Vec<String> = self.columns.iter().map(Column::to_sql).collect();
        for index in self.indexes.iter().filter(|i| !i.unique) {
            elements.push(Constraint::Index(index.clone()).to_sql(dialect));
        }
        for constraint in self.constraints() {
            if !matches!(constraint, Constraint::Index(_)) {
                elements.push(constraint.to_sql(dialect));
            }
        }

        let mut sql = format!("CREATE TABLE {} (\n", self.qualified_name);
        sql.push_str(&elements.join(",\n"));
        sql.push_str("\n)");
        if dialect == Dialect::Mysql {
            if let Some(comment) = &self.comment {
                sql.push_str(" COMMENT=");
                sql.push_str(&quote_literal(comment));
            }
        }
        sql.push(';');

        for index in self.indexes.iter().filter(|i| i.unique) {
            sql.push('\n');
            sql.push_str(&self.create_index_sql(index));
        }

        if dialect != Dialect::Mysql {
            if let Some(comment) = &self.comment {
                sql.push_str(&format!(
                    "\nCOMMENT ON TABLE {} IS {};",
                    self.qualified_name,
                    quote_literal(comment)
                ));
            }
            for column in &self.columns {
                if let Some(comment) = &column.comment {
                    sql.push_str(&format!(
                        "\nCOMMENT ON COLUMN {}.{} IS {};",
                        self.qualified_name,
                        column.name,
                        quote_literal(comment)
                    ));
                }
            }
        }
        sql
    }

    fn create_index_sql(&self, index: &Index) -> String {
        let mut sql = String::from("CREATE ");
        if index.unique {
            sql.push_str("UNIQUE ");
        }
        sql.push_str("INDEX ");
        if let Some(name) = &index.name {
            sql.push_str(name.original());
            sql.push(' ');
        }
        sql.push_str(&format!("ON {}", self.qualified_name));
        if let Some(algorithm) = &index.algorithm {
            sql.push_str(&format!(" USING {}", algorithm));
        }
        sql.push_str(&format!(" ({});", column_list(&index.columns)));
        sql
    }
}

impl Column {
    /// `name type [NOT NULL] [DEFAULT v] [AUTO_INCREMENT]`, plus the dialect's
    /// spelling of `ON UPDATE`, identity and inline comments where it has one.
    pub fn to_sql(&self) -> String {
        let dialect = self.data_type.dialect();
        let mut sql = format!("{} {}", self.name, self.data_type.to_sql());
        if !self.nullable {
            sql.push_str(" NOT NULL");
        }
        if let Some(default) = &self.default_value {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        if dialect == Dialect::Mysql {
            if let Some(on_update) = &self.on_update {
                sql.push_str(" ON UPDATE ");
                sql.push_str(on_update);
            }
        }
        if self.auto_increment {
            match dialect {
                Dialect::Mysql => sql.push_str(" AUTO_INCREMENT"),
                _ if self.data_type.is_serial() => {}
                _ => sql.push_str(" GENERATED BY DEFAULT AS IDENTITY"),
            }
        }
        if dialect == Dialect::Mysql {
            if let Some(comment) = &self.comment {
                sql.push_str(" COMMENT ");
                sql.push_str(&quote_literal(comment));
            }
        }
        sql
    }
}

impl Constraint {
    /// Table-body clause for this constraint.
    pub fn to_sql(&self, dialect: Dialect) -> String {
        let named = |sql: String| match self.name() {
            Some(name) => format!("CONSTRAINT {} {}", name, sql),
            None => sql,
        };
        match self {
            Constraint::Index(index) => {
                let mut sql = String::from("INDEX ");
                if let Some(name) = &index.name {
                    sql.push_str(name.original());
                    sql.push(' ');
                }
                sql.push_str(&format!("({})", column_list(&index.columns)));
                if let Some(algorithm) = &index.algorithm {
                    sql.push_str(&format!(" USING {}", algorithm));
                }
                sql
            }
            Constraint::PrimaryKey(pk) => {
                let body = format!("PRIMARY KEY ({})", column_list(&pk.columns));
                match dialect {
                    Dialect::Mysql => body,
                    _ => named(body),
                }
            }
            Constraint::UniqueKey(uk) => match dialect {
                Dialect::Mysql => match &uk.name {
                    Some(name) => format!("UNIQUE INDEX {} ({})", name, column_list(&uk.columns)),
                    None => format!("UNIQUE INDEX ({})", column_list(&uk.columns)),
                },
                _ => named(format!("UNIQUE ({})", column_list(&uk.columns))),
            },
            Constraint::ForeignKey(fk) => {
                let mut sql = format!(
                    "FOREIGN KEY ({}) REFERENCES {}",
                    column_list(&fk.columns),
                    fk.referenced_table
                );
                if !fk.references.is_empty() {
                    sql.push_str(&format!(" ({})", reference_list(&fk.references)));
                }
                if let Some(action) = &fk.on_delete {
                    sql.push_str(&format!(" ON DELETE {}", action));
                }
                if let Some(action) = &fk.on_update {
                    sql.push_str(&format!(" ON UPDATE {}", action));
                }
                named(sql)
            }
            Constraint::Check(check) => named(format!("CHECK ({})", check.search_condition)),
        }
    }
}

fn column_list(columns: &[ColumnRef]) -> String {
    columns
        .iter()
        .map(|c| c.name.original())
        .collect::<Vec<_>>()
        .join(", ")
}

fn reference_list(columns: &[ReferenceColumn]) -> String {
    columns
        .iter()
        .map(|c| c.name.original())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Wrap text in single quotes, doubling embedded quotes.
pub(crate) fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}
