//! SQL dialect selector

use std::fmt;

use sqlparser::dialect::{GenericDialect, MySqlDialect, PostgreSqlDialect};

use crate::error::DdlError;

/// SQL vendor variant governing quoting, type grammar and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Mysql,
    Postgres,
    Oracle,
    Standard,
}

impl std::str::FromStr for Dialect {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::Mysql),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "oracle" => Ok(Dialect::Oracle),
            "standard" | "iso" | "generic" | "ansi" => Ok(Dialect::Standard),
            _ => Err(DdlError::UnknownDialect {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Mysql => "MYSQL",
            Dialect::Postgres => "POSTGRES",
            Dialect::Oracle => "ORACLE",
            Dialect::Standard => "STANDARD",
        }
    }

    /// Character used to delimit quoted identifiers.
    pub fn quote_char(&self) -> char {
        match self {
            Dialect::Mysql => '`',
            Dialect::Postgres | Dialect::Oracle | Dialect::Standard => '"',
        }
    }

    /// Whether unquoted names must match exactly when resolving references.
    pub fn case_sensitive(&self) -> bool {
        matches!(self, Dialect::Postgres)
    }

    /// Compare two unquoted identifiers under this dialect's matching rule.
    pub fn names_match(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive() {
            a == b
        } else {
            a.eq_ignore_ascii_case(b)
        }
    }

    /// Whether `algorithm` is an accepted index storage algorithm.
    pub fn supports_index_algorithm(&self, algorithm: &str) -> bool {
        const MYSQL: &[&str] = &["BTREE", "HASH", "RTREE"];
        const POSTGRES: &[&str] = &["btree", "hash", "gist", "gin", "spgist", "brin"];
        const ORACLE: &[&str] = &["btree", "bitmap"];

        let allowed = match self {
            Dialect::Mysql => MYSQL,
            Dialect::Postgres => POSTGRES,
            Dialect::Oracle => ORACLE,
            Dialect::Standard => return !algorithm.trim().is_empty(),
        };
        allowed.iter().any(|a| a.eq_ignore_ascii_case(algorithm))
    }

    /// Tokenizer dialect used for opaque expressions such as CHECK predicates.
    pub(crate) fn tokenizer_dialect(&self) -> Box<dyn sqlparser::dialect::Dialect> {
        match self {
            Dialect::Mysql => Box::new(MySqlDialect {}),
            Dialect::Postgres => Box::new(PostgreSqlDialect {}),
            Dialect::Oracle | Dialect::Standard => Box::new(GenericDialect {}),
        }
    }
}
