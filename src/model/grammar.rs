//! Per-dialect type tables.
//!
//! Each dialect knows a fixed set of canonical type names, each belonging to
//! one category. Synonyms (e.g. Postgres `INT4`, MySQL `BOOL`) are rewritten
//! to their canonical name before lookup.

use super::Dialect;

/// Shape of a data type, which decides the parameters it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Character,
    Numeric,
    Enumerated,
    DateTime,
    Interval,
    Boolean,
    Array,
    UserDefined,
}

impl TypeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeCategory::Character => "Character",
            TypeCategory::Numeric => "Numeric",
            TypeCategory::Enumerated => "Enumerated",
            TypeCategory::DateTime => "DateTime",
            TypeCategory::Interval => "Interval",
            TypeCategory::Boolean => "Boolean",
            TypeCategory::Array => "Array",
            TypeCategory::UserDefined => "UserDefined",
        }
    }
}

use TypeCategory::*;

const MYSQL_TYPES: &[(&str, TypeCategory)] = &[
    ("TINYINT", Numeric),
    ("SMALLINT", Numeric),
    ("MEDIUMINT", Numeric),
    ("INT", Numeric),
    ("BIGINT", Numeric),
    ("DECIMAL", Numeric),
    ("FLOAT", Numeric),
    ("DOUBLE", Numeric),
    ("BIT", Numeric),
    ("DATE", DateTime),
    ("DATETIME", DateTime),
    ("TIMESTAMP", DateTime),
    ("TIME", DateTime),
    ("YEAR", DateTime),
    ("CHAR", Character),
    ("VARCHAR", Character),
    ("BINARY", Character),
    ("VARBINARY", Character),
    ("TINYBLOB", Character),
    ("BLOB", Character),
    ("MEDIUMBLOB", Character),
    ("LONGBLOB", Character),
    ("TINYTEXT", Character),
    ("TEXT", Character),
    ("MEDIUMTEXT", Character),
    ("LONGTEXT", Character),
    ("ENUM", Enumerated),
    ("SET", Enumerated),
    ("JSON", UserDefined),
    ("GEOMETRY", UserDefined),
    ("POINT", UserDefined),
    ("LINESTRING", UserDefined),
    ("POLYGON", UserDefined),
    ("MULTIPOINT", UserDefined),
    ("MULTILINESTRING", UserDefined),
    ("MULTIPOLYGON", UserDefined),
    ("GEOMETRYCOLLECTION", UserDefined),
];

const POSTGRES_TYPES: &[(&str, TypeCategory)] = &[
    ("SMALLINT", Numeric),
    ("INTEGER", Numeric),
    ("BIGINT", Numeric),
    ("NUMERIC", Numeric),
    ("REAL", Numeric),
    ("DOUBLE PRECISION", Numeric),
    ("SMALLSERIAL", Numeric),
    ("SERIAL", Numeric),
    ("BIGSERIAL", Numeric),
    ("CHARACTER", Character),
    ("CHARACTER VARYING", Character),
    ("TEXT", Character),
    ("BYTEA", Character),
    ("BIT", Character),
    ("BIT VARYING", Character),
    ("DATE", DateTime),
    ("TIME", DateTime),
    ("TIMESTAMP", DateTime),
    ("INTERVAL", Interval),
    ("BOOLEAN", Boolean),
    ("ENUM", Enumerated),
    ("MONEY", UserDefined),
    ("POINT", UserDefined),
    ("LINE", UserDefined),
    ("LSEG", UserDefined),
    ("BOX", UserDefined),
    ("PATH", UserDefined),
    ("POLYGON", UserDefined),
    ("CIRCLE", UserDefined),
    ("CIDR", UserDefined),
    ("INET", UserDefined),
    ("MACADDR", UserDefined),
    ("MACADDR8", UserDefined),
    ("TSQUERY", UserDefined),
    ("TSVECTOR", UserDefined),
    ("UUID", UserDefined),
    ("XML", UserDefined),
    ("JSON", UserDefined),
    ("JSONB", UserDefined),
    ("INT4RANGE", UserDefined),
    ("INT8RANGE", UserDefined),
    ("NUMRANGE", UserDefined),
    ("TSRANGE", UserDefined),
    ("TSTZRANGE", UserDefined),
    ("DATERANGE", UserDefined),
    ("OID", UserDefined),
    ("NAME", UserDefined),
    ("REGPROC", UserDefined),
    ("REGCLASS", UserDefined),
    ("PG_LSN", UserDefined),
];

const ORACLE_TYPES: &[(&str, TypeCategory)] = &[
    ("CHAR", Character),
    ("VARCHAR2", Character),
    ("NCHAR", Character),
    ("NVARCHAR2", Character),
    ("LONG", Character),
    ("RAW", Character),
    ("LONG RAW", Character),
    ("CLOB", Character),
    ("NCLOB", Character),
    ("BLOB", Character),
    ("BFILE", Character),
    ("UROWID", Character),
    ("NUMBER", Numeric),
    ("FLOAT", Numeric),
    ("BINARY_FLOAT", Numeric),
    ("BINARY_DOUBLE", Numeric),
    ("DATE", DateTime),
    ("TIMESTAMP", DateTime),
    ("INTERVAL", Interval),
    ("ROWID", UserDefined),
    ("ANYTYPE", UserDefined),
    ("ANYDATA", UserDefined),
    ("ANYDATASET", UserDefined),
    ("XMLTYPE", UserDefined),
    ("URITYPE", UserDefined),
    ("SDO_GEOMETRY", UserDefined),
    ("SDO_TOPO_GEOMETRY", UserDefined),
    ("SDO_GEORASTER", UserDefined),
];

const STANDARD_TYPES: &[(&str, TypeCategory)] = &[
    ("BOOLEAN", Boolean),
    ("CHARACTER", Character),
    ("CHARACTER VARYING", Character),
    ("CHARACTER LARGE OBJECT", Character),
    ("BINARY", Character),
    ("BINARY VARYING", Character),
    ("BINARY LARGE OBJECT", Character),
    ("BIT", Character),
    ("BIT VARYING", Character),
    ("NUMERIC", Numeric),
    ("DECIMAL", Numeric),
    ("SMALLINT", Numeric),
    ("INTEGER", Numeric),
    ("BIGINT", Numeric),
    ("FLOAT", Numeric),
    ("REAL", Numeric),
    ("DOUBLE PRECISION", Numeric),
    ("ENUMERATED", Enumerated),
    ("DATE", DateTime),
    ("TIME", DateTime),
    ("TIMESTAMP", DateTime),
    ("INTERVAL", Interval),
];

/// Rewrite of a non-canonical type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synonym {
    pub canonical: &'static str,
    /// Parameter implied by the synonym when none is written (MySQL `BOOL` is `TINYINT(1)`).
    pub precision: Option<i64>,
    /// Postgres `TIMESTAMPTZ` and `TIMETZ`.
    pub with_time_zone: bool,
}

const fn to(canonical: &'static str) -> Synonym {
    Synonym {
        canonical,
        precision: None,
        with_time_zone: false,
    }
}

const MYSQL_SYNONYMS: &[(&str, Synonym)] = &[
    ("INTEGER", to("INT")),
    ("INT1", to("TINYINT")),
    ("INT2", to("SMALLINT")),
    ("INT3", to("MEDIUMINT")),
    ("MIDDLEINT", to("MEDIUMINT")),
    ("INT4", to("INT")),
    ("INT8", to("BIGINT")),
    (
        "BOOL",
        Synonym {
            canonical: "TINYINT",
            precision: Some(1),
            with_time_zone: false,
        },
    ),
    (
        "BOOLEAN",
        Synonym {
            canonical: "TINYINT",
            precision: Some(1),
            with_time_zone: false,
        },
    ),
    ("REAL", to("DOUBLE")),
    ("DOUBLE PRECISION", to("DOUBLE")),
    ("NUMERIC", to("DECIMAL")),
    ("DEC", to("DECIMAL")),
    ("FIXED", to("DECIMAL")),
    ("CHARACTER", to("CHAR")),
    ("CHARACTER VARYING", to("VARCHAR")),
    ("CHAR VARYING", to("VARCHAR")),
];

const POSTGRES_SYNONYMS: &[(&str, Synonym)] = &[
    ("INT", to("INTEGER")),
    ("INT4", to("INTEGER")),
    ("INT2", to("SMALLINT")),
    ("INT8", to("BIGINT")),
    ("DECIMAL", to("NUMERIC")),
    ("FLOAT4", to("REAL")),
    ("FLOAT8", to("DOUBLE PRECISION")),
    ("FLOAT", to("DOUBLE PRECISION")),
    ("CHAR", to("CHARACTER")),
    ("VARCHAR", to("CHARACTER VARYING")),
    ("CHAR VARYING", to("CHARACTER VARYING")),
    ("VARBIT", to("BIT VARYING")),
    ("BOOL", to("BOOLEAN")),
    ("SERIAL2", to("SMALLSERIAL")),
    ("SERIAL4", to("SERIAL")),
    ("SERIAL8", to("BIGSERIAL")),
    (
        "TIMESTAMPTZ",
        Synonym {
            canonical: "TIMESTAMP",
            precision: None,
            with_time_zone: true,
        },
    ),
    (
        "TIMETZ",
        Synonym {
            canonical: "TIME",
            precision: None,
            with_time_zone: true,
        },
    ),
];

const ORACLE_SYNONYMS: &[(&str, Synonym)] = &[
    ("VARCHAR", to("VARCHAR2")),
    ("CHARACTER", to("CHAR")),
    ("CHARACTER VARYING", to("VARCHAR2")),
    ("CHAR VARYING", to("VARCHAR2")),
    (
        "INTEGER",
        Synonym {
            canonical: "NUMBER",
            precision: Some(38),
            with_time_zone: false,
        },
    ),
    (
        "INT",
        Synonym {
            canonical: "NUMBER",
            precision: Some(38),
            with_time_zone: false,
        },
    ),
    (
        "SMALLINT",
        Synonym {
            canonical: "NUMBER",
            precision: Some(38),
            with_time_zone: false,
        },
    ),
    ("DECIMAL", to("NUMBER")),
    ("NUMERIC", to("NUMBER")),
    ("DEC", to("NUMBER")),
    (
        "DOUBLE PRECISION",
        Synonym {
            canonical: "FLOAT",
            precision: Some(126),
            with_time_zone: false,
        },
    ),
    (
        "REAL",
        Synonym {
            canonical: "FLOAT",
            precision: Some(63),
            with_time_zone: false,
        },
    ),
    ("CHARACTER LARGE OBJECT", to("CLOB")),
    ("BINARY LARGE OBJECT", to("BLOB")),
];

const STANDARD_SYNONYMS: &[(&str, Synonym)] = &[
    ("CHAR", to("CHARACTER")),
    ("VARCHAR", to("CHARACTER VARYING")),
    ("CHAR VARYING", to("CHARACTER VARYING")),
    ("INT", to("INTEGER")),
    ("DEC", to("DECIMAL")),
    ("BOOL", to("BOOLEAN")),
    ("CLOB", to("CHARACTER LARGE OBJECT")),
    ("CHAR LARGE OBJECT", to("CHARACTER LARGE OBJECT")),
    ("BLOB", to("BINARY LARGE OBJECT")),
    ("VARBINARY", to("BINARY VARYING")),
    ("VARBIT", to("BIT VARYING")),
];

fn types(dialect: Dialect) -> &'static [(&'static str, TypeCategory)] {
    match dialect {
        Dialect::Mysql => MYSQL_TYPES,
        Dialect::Postgres => POSTGRES_TYPES,
        Dialect::Oracle => ORACLE_TYPES,
        Dialect::Standard => STANDARD_TYPES,
    }
}

fn synonyms(dialect: Dialect) -> &'static [(&'static str, Synonym)] {
    match dialect {
        Dialect::Mysql => MYSQL_SYNONYMS,
        Dialect::Postgres => POSTGRES_SYNONYMS,
        Dialect::Oracle => ORACLE_SYNONYMS,
        Dialect::Standard => STANDARD_SYNONYMS,
    }
}

/// Category of a canonical (upper-case) type name, if the dialect defines it.
pub fn category(dialect: Dialect, name: &str) -> Option<TypeCategory> {
    types(dialect)
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, category)| *category)
}

/// Synonym entry for a non-canonical name.
pub fn resolve_synonym(dialect: Dialect, name: &str) -> Option<&'static Synonym> {
    synonyms(dialect)
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, synonym)| synonym)
}

/// Names that start a multi-word type, with the words that may follow.
pub(crate) fn composite_continuations(head: &str) -> &'static [&'static [&'static str]] {
    match head {
        "LONG" => &[&["RAW"]],
        "DOUBLE" => &[&["PRECISION"]],
        "CHARACTER" | "CHAR" => &[&["VARYING"], &["LARGE", "OBJECT"]],
        "BINARY" => &[&["VARYING"], &["LARGE", "OBJECT"]],
        "BIT" => &[&["VARYING"]],
        _ => &[],
    }
}

/// Postgres pseudo-types that create an implicit sequence.
pub fn is_serial(dialect: Dialect, name: &str) -> bool {
    dialect == Dialect::Postgres && matches!(name, "SMALLSERIAL" | "SERIAL" | "BIGSERIAL")
}

/// Types that take a literal list instead of numeric parameters.
pub fn takes_literal_list(name: &str) -> bool {
    matches!(name, "ENUM" | "SET" | "ENUMERATED")
}
