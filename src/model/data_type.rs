//! Column data types.
//!
//! A [`DataType`] is a dialect tag, a canonical upper-case name and a
//! [`TypeKind`] carrying only the parameters that make sense for the type's
//! category. Defaulting, bounds checking and SQL rendering each live in one
//! `match` over the kind.

use std::fmt;

use super::grammar::{self, TypeCategory};
use super::Dialect;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::DdlError;

/// From/to unit pair of an `INTERVAL` type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalRange {
    YearToMonth,
    DayToHour,
    DayToMinute,
    DayToSecond,
    HourToMinute,
    HourToSecond,
    MinuteToSecond,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl IntervalRange {
    pub fn from_units(from: &str, to: &str) -> Option<Self> {
        let from = from.to_ascii_uppercase();
        let to = to.to_ascii_uppercase();
        match (from.as_str(), to.as_str()) {
            ("YEAR", "MONTH") => Some(IntervalRange::YearToMonth),
            ("DAY", "HOUR") => Some(IntervalRange::DayToHour),
            ("DAY", "MINUTE") => Some(IntervalRange::DayToMinute),
            ("DAY", "SECOND") => Some(IntervalRange::DayToSecond),
            ("HOUR", "MINUTE") => Some(IntervalRange::HourToMinute),
            ("HOUR", "SECOND") => Some(IntervalRange::HourToSecond),
            ("MINUTE", "SECOND") => Some(IntervalRange::MinuteToSecond),
            _ => None,
        }
    }

    /// Single-field interval such as `INTERVAL DAY`.
    pub fn from_unit(unit: &str) -> Option<Self> {
        match unit.to_ascii_uppercase().as_str() {
            "YEAR" => Some(IntervalRange::Year),
            "MONTH" => Some(IntervalRange::Month),
            "DAY" => Some(IntervalRange::Day),
            "HOUR" => Some(IntervalRange::Hour),
            "MINUTE" => Some(IntervalRange::Minute),
            "SECOND" => Some(IntervalRange::Second),
            _ => None,
        }
    }

    /// Leading field and, for ranges, the trailing field.
    pub fn units(&self) -> (&'static str, Option<&'static str>) {
        match self {
            IntervalRange::YearToMonth => ("YEAR", Some("MONTH")),
            IntervalRange::DayToHour => ("DAY", Some("HOUR")),
            IntervalRange::DayToMinute => ("DAY", Some("MINUTE")),
            IntervalRange::DayToSecond => ("DAY", Some("SECOND")),
            IntervalRange::HourToMinute => ("HOUR", Some("MINUTE")),
            IntervalRange::HourToSecond => ("HOUR", Some("SECOND")),
            IntervalRange::MinuteToSecond => ("MINUTE", Some("SECOND")),
            IntervalRange::Year => ("YEAR", None),
            IntervalRange::Month => ("MONTH", None),
            IntervalRange::Day => ("DAY", None),
            IntervalRange::Hour => ("HOUR", None),
            IntervalRange::Minute => ("MINUTE", None),
            IntervalRange::Second => ("SECOND", None),
        }
    }

    /// The least significant field.
    pub fn last_unit(&self) -> &'static str {
        let (from, to) = self.units();
        to.unwrap_or(from)
    }

    /// Stable numeric sub-kind: ranges `YEAR TO MONTH` = 0 through
    /// `MINUTE TO SECOND` = 6, then single fields `YEAR` = 7 through `SECOND` = 12.
    pub fn code(&self) -> u8 {
        match self {
            IntervalRange::YearToMonth => 0,
            IntervalRange::DayToHour => 1,
            IntervalRange::DayToMinute => 2,
            IntervalRange::DayToSecond => 3,
            IntervalRange::HourToMinute => 4,
            IntervalRange::HourToSecond => 5,
            IntervalRange::MinuteToSecond => 6,
            IntervalRange::Year => 7,
            IntervalRange::Month => 8,
            IntervalRange::Day => 9,
            IntervalRange::Hour => 10,
            IntervalRange::Minute => 11,
            IntervalRange::Second => 12,
        }
    }
}

/// `WITH [LOCAL] TIME ZONE` / `WITHOUT TIME ZONE` qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeZone {
    With,
    WithLocal,
    Without,
}

impl TimeZone {
    fn is_with(&self) -> bool {
        matches!(self, TimeZone::With | TimeZone::WithLocal)
    }

    fn as_sql(&self) -> &'static str {
        match self {
            TimeZone::With => " WITH TIME ZONE",
            TimeZone::WithLocal => " WITH LOCAL TIME ZONE",
            TimeZone::Without => " WITHOUT TIME ZONE",
        }
    }
}

/// Category-specific parameters. `None` means the parameter was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Character {
        length: Option<u32>,
    },
    Numeric {
        precision: Option<u32>,
        scale: Option<i32>,
        unsigned: bool,
        zerofill: bool,
    },
    Enumerated {
        names: Vec<String>,
    },
    DateTime {
        precision: Option<u32>,
        time_zone: Option<TimeZone>,
    },
    Interval {
        range: Option<IntervalRange>,
        leading_precision: Option<u32>,
        fractional_precision: Option<u32>,
    },
    Array {
        element: Box<DataType>,
        dimensions: u32,
    },
    Boolean,
    UserDefined {
        parameters: Option<String>,
    },
}

/// Unvalidated type syntax as read from a column definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSpec {
    /// Upper-cased, composite words joined by a single space.
    pub name: String,
    /// Numeric parameters; `None` stands for Oracle's `*`.
    pub params: Vec<Option<i64>>,
    /// Literal list of `ENUM`/`SET`/`ENUMERATED`, quotes kept.
    pub literals: Vec<String>,
    /// Parameter text exactly as written, for types without a grammar.
    pub raw_params: Option<String>,
    pub unsigned: bool,
    pub zerofill: bool,
    pub time_zone: Option<TimeZone>,
    pub interval: Option<IntervalSpec>,
    pub array_dimensions: u32,
    /// Position of the type name in the normalized buffer.
    pub offset: usize,
    /// Position of each entry of `params`, where known.
    pub param_offsets: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalSpec {
    pub range: IntervalRange,
    pub leading_precision: Option<i64>,
    pub fractional_precision: Option<i64>,
}

/// A validated, dialect-tagged column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType {
    dialect: Dialect,
    name: String,
    kind: TypeKind,
}

impl DataType {
    /// Validate `spec` against the dialect's grammar.
    ///
    /// Out-of-range parameters and unknown names are reported to `diagnostics`
    /// and never fail the call; malformed parameters do.
    pub fn from_spec(
        dialect: Dialect,
        mut spec: TypeSpec,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self, DdlError> {
        if let Some(synonym) = grammar::resolve_synonym(dialect, &spec.name) {
            spec.name = synonym.canonical.to_string();
            if spec.params.is_empty() {
                if let Some(p) = synonym.precision {
                    spec.params.push(Some(p));
                }
            }
            if synonym.with_time_zone && spec.time_zone.is_none() {
                spec.time_zone = Some(TimeZone::With);
            }
        }

        if spec.array_dimensions > 0 {
            let dimensions = spec.array_dimensions;
            spec.array_dimensions = 0;
            let element = DataType::from_spec(dialect, spec, diagnostics)?;
            return Ok(DataType {
                dialect,
                name: "ARRAY".to_string(),
                kind: TypeKind::Array {
                    element: Box::new(element),
                    dimensions,
                },
            });
        }

        let category = grammar::category(dialect, &spec.name).unwrap_or_else(|| {
            diagnostics.push(Diagnostic::UnknownType {
                dialect,
                type_name: spec.name.clone(),
            });
            TypeCategory::UserDefined
        });

        let type_offset = spec.offset;
        let param_offsets = std::mem::take(&mut spec.param_offsets);
        let at = |i: usize| param_offsets.get(i).copied().unwrap_or(type_offset);

        let mut name = spec.name;
        let kind = match category {
            TypeCategory::Character => TypeKind::Character {
                length: unsigned_param(&name, spec.params.first().copied().flatten(), at(0))?,
            },
            TypeCategory::Numeric => {
                let mut precision =
                    unsigned_param(&name, spec.params.first().copied().flatten(), at(0))?;
                let scale = match spec.params.get(1).copied().flatten() {
                    Some(s) => Some(i32::try_from(s).map_err(|_| bad_param(&name, s, at(1)))?),
                    None => None,
                };
                let mut unsigned = spec.unsigned;
                if dialect == Dialect::Mysql {
                    if spec.zerofill && !unsigned {
                        diagnostics.push(Diagnostic::ImpliedUnsigned {
                            type_name: name.clone(),
                        });
                        unsigned = true;
                    }
                    if name == "FLOAT" && scale.is_none() && precision.is_some_and(|p| p > 23) {
                        diagnostics.push(Diagnostic::TypePromotion {
                            from: format!("FLOAT({})", precision.unwrap_or_default()),
                            to: "DOUBLE".to_string(),
                        });
                        if precision.is_some_and(|p| p > 53) {
                            diagnostics.push(Diagnostic::Bounds {
                                type_name: name.clone(),
                                message: "precision must not exceed 53".to_string(),
                            });
                        }
                        name = "DOUBLE".to_string();
                        precision = None;
                    }
                }
                TypeKind::Numeric {
                    precision,
                    scale,
                    unsigned,
                    zerofill: spec.zerofill,
                }
            }
            TypeCategory::Enumerated => TypeKind::Enumerated {
                names: spec.literals,
            },
            TypeCategory::DateTime => {
                let mut time_zone = spec.time_zone;
                let zoned = match dialect {
                    Dialect::Mysql => false,
                    Dialect::Oracle => name == "TIMESTAMP",
                    Dialect::Postgres | Dialect::Standard => matches!(name.as_str(), "TIME" | "TIMESTAMP"),
                };
                if time_zone.is_some() && !zoned {
                    diagnostics.push(Diagnostic::Bounds {
                        type_name: name.clone(),
                        message: format!("{} does not support a time zone qualifier", dialect),
                    });
                    time_zone = None;
                }
                TypeKind::DateTime {
                    precision: unsigned_param(&name, spec.params.first().copied().flatten(), at(0))?,
                    time_zone,
                }
            }
            TypeCategory::Interval => {
                let (range, leading, fractional) = match spec.interval {
                    Some(interval) => (
                        Some(interval.range),
                        interval.leading_precision,
                        interval.fractional_precision,
                    ),
                    None => (None, None, spec.params.first().copied().flatten()),
                };
                TypeKind::Interval {
                    range,
                    leading_precision: unsigned_param(&name, leading, type_offset)?,
                    fractional_precision: unsigned_param(&name, fractional, at(0))?,
                }
            }
            TypeCategory::Boolean => TypeKind::Boolean,
            TypeCategory::Array | TypeCategory::UserDefined => TypeKind::UserDefined {
                parameters: spec.raw_params,
            },
        };

        let data_type = DataType {
            dialect,
            name,
            kind,
        };
        data_type.check_bounds(diagnostics);
        Ok(data_type)
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Canonical type name, e.g. `SMALLINT`, `CHARACTER VARYING`, `ARRAY`.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn category(&self) -> TypeCategory {
        match self.kind {
            TypeKind::Character { .. } => TypeCategory::Character,
            TypeKind::Numeric { .. } => TypeCategory::Numeric,
            TypeKind::Enumerated { .. } => TypeCategory::Enumerated,
            TypeKind::DateTime { .. } => TypeCategory::DateTime,
            TypeKind::Interval { .. } => TypeCategory::Interval,
            TypeKind::Array { .. } => TypeCategory::Array,
            TypeKind::Boolean => TypeCategory::Boolean,
            TypeKind::UserDefined { .. } => TypeCategory::UserDefined,
        }
    }

    /// Length (character types), display width (MySQL integers and `BIT`), or
    /// fractional-seconds precision (date/time types), defaulted per dialect.
    pub fn length(&self) -> Option<u32> {
        let name = self.name.as_str();
        match (&self.kind, self.dialect) {
            (TypeKind::Character { length }, dialect) => length.or(match (dialect, name) {
                (Dialect::Mysql, "CHAR" | "BINARY") => Some(255),
                (Dialect::Mysql, "VARCHAR" | "VARBINARY") => Some(65_535),
                (Dialect::Oracle, "CHAR" | "NCHAR") => Some(1),
                (Dialect::Oracle, "VARCHAR2" | "NVARCHAR2" | "UROWID") => Some(4_000),
                (Dialect::Postgres, "CHARACTER" | "BIT") => Some(1),
                (Dialect::Standard, "CHARACTER" | "BINARY" | "BIT") => Some(1),
                _ => None,
            }),
            (TypeKind::Numeric { precision, .. }, Dialect::Mysql) => precision.or(match name {
                "TINYINT" | "BIT" => Some(1),
                "SMALLINT" => Some(2),
                "MEDIUMINT" => Some(3),
                "INT" => Some(4),
                "BIGINT" => Some(8),
                _ => None,
            }),
            (TypeKind::DateTime { .. }, _) => self.fractional_precision(),
            _ => None,
        }
    }

    /// Total digits (numeric types), fractional-seconds precision (date/time)
    /// or leading-field precision (intervals), defaulted per dialect.
    pub fn precision(&self) -> Option<u32> {
        let name = self.name.as_str();
        match (&self.kind, self.dialect) {
            (TypeKind::Numeric { precision, .. }, dialect) => precision.or(match (dialect, name) {
                (Dialect::Mysql, "DECIMAL") => Some(10),
                (Dialect::Mysql, "FLOAT") => Some(23),
                (Dialect::Mysql, "DOUBLE") => Some(53),
                (Dialect::Oracle, "NUMBER") => Some(38),
                (Dialect::Oracle, "FLOAT") => Some(126),
                (Dialect::Postgres, "NUMERIC") => Some(1_000),
                (Dialect::Postgres, "REAL") => Some(24),
                (Dialect::Postgres, "DOUBLE PRECISION") => Some(53),
                _ => None,
            }),
            (TypeKind::DateTime { .. }, _) => self.fractional_precision(),
            (
                TypeKind::Interval {
                    leading_precision, ..
                },
                dialect,
            ) => leading_precision.or(match dialect {
                Dialect::Oracle | Dialect::Standard => Some(2),
                Dialect::Mysql | Dialect::Postgres => None,
            }),
            _ => None,
        }
    }

    /// Fractional digits (numeric types) or fractional-seconds precision of
    /// the trailing interval field, defaulted per dialect.
    pub fn scale(&self) -> Option<i32> {
        let name = self.name.as_str();
        match (&self.kind, self.dialect) {
            (TypeKind::Numeric { scale, .. }, dialect) => scale.or(match (dialect, name) {
                (Dialect::Mysql, "DECIMAL") => Some(0),
                (Dialect::Oracle, "NUMBER") => Some(0),
                (Dialect::Standard, "NUMERIC" | "DECIMAL") => Some(0),
                _ => None,
            }),
            (
                TypeKind::Interval {
                    range,
                    fractional_precision,
                    ..
                },
                dialect,
            ) => {
                let ends_in_seconds = range.is_some_and(|r| r.last_unit() == "SECOND");
                fractional_precision
                    .or(match dialect {
                        Dialect::Oracle | Dialect::Standard if ends_in_seconds => Some(6),
                        _ => None,
                    })
                    .and_then(|p| i32::try_from(p).ok())
            }
            _ => None,
        }
    }

    /// Whether the type carries a time zone, for types that can.
    pub fn time_zone(&self) -> Option<bool> {
        match &self.kind {
            TypeKind::DateTime { time_zone, .. } => {
                let zoned = match self.dialect {
                    Dialect::Mysql => false,
                    Dialect::Oracle => self.name == "TIMESTAMP",
                    Dialect::Postgres | Dialect::Standard => {
                        matches!(self.name.as_str(), "TIME" | "TIMESTAMP")
                    }
                };
                zoned.then(|| time_zone.is_some_and(|tz| tz.is_with()))
            }
            _ => None,
        }
    }

    /// Literal values of an enumerated type, quotes kept.
    pub fn names(&self) -> &[String] {
        match &self.kind {
            TypeKind::Enumerated { names } => names,
            _ => &[],
        }
    }

    pub fn is_unsigned(&self) -> bool {
        matches!(self.kind, TypeKind::Numeric { unsigned: true, .. })
    }

    pub fn is_zerofill(&self) -> bool {
        matches!(self.kind, TypeKind::Numeric { zerofill: true, .. })
    }

    /// Element type and dimension count of a Postgres array.
    pub fn array_element(&self) -> Option<(&DataType, u32)> {
        match &self.kind {
            TypeKind::Array {
                element,
                dimensions,
            } => Some((element, *dimensions)),
            _ => None,
        }
    }

    pub fn is_serial(&self) -> bool {
        grammar::is_serial(self.dialect, &self.name)
    }

    fn fractional_precision(&self) -> Option<u32> {
        let TypeKind::DateTime { precision, .. } = &self.kind else {
            return None;
        };
        precision.or(match (self.dialect, self.name.as_str()) {
            (Dialect::Mysql, "TIME" | "DATETIME" | "TIMESTAMP") => Some(0),
            (Dialect::Mysql, "YEAR") => Some(4),
            (Dialect::Oracle, "TIMESTAMP") => Some(6),
            (Dialect::Postgres | Dialect::Standard, "TIME" | "TIMESTAMP") => Some(6),
            _ => None,
        })
    }

    /// Canonical SQL spelling, parameters included when they were written.
    pub fn to_sql(&self) -> String {
        let name = self.name.as_str();
        match &self.kind {
            TypeKind::Character { length } => match length {
                Some(len) => format!("{}({})", name, len),
                None => name.to_string(),
            },
            TypeKind::Numeric {
                precision,
                scale,
                unsigned,
                zerofill,
            } => {
                let mut sql = match (precision, scale) {
                    (Some(p), Some(s)) => format!("{}({},{})", name, p, s),
                    (Some(p), None) => format!("{}({})", name, p),
                    (None, Some(s)) => format!("{}(*,{})", name, s),
                    (None, None) => name.to_string(),
                };
                if self.dialect == Dialect::Mysql {
                    if *zerofill {
                        sql.push_str(" UNSIGNED ZEROFILL");
                    } else if *unsigned {
                        sql.push_str(" UNSIGNED");
                    }
                }
                sql
            }
            TypeKind::Enumerated { names } => format!("{}({})", name, names.join(",")),
            TypeKind::DateTime {
                precision,
                time_zone,
            } => {
                let mut sql = match precision {
                    Some(p) => format!("{}({})", name, p),
                    None => name.to_string(),
                };
                if let Some(tz) = time_zone {
                    sql.push_str(tz.as_sql());
                }
                sql
            }
            TypeKind::Interval {
                range,
                leading_precision,
                fractional_precision,
            } => match range {
                Some(range) => {
                    let (from, to) = range.units();
                    let mut sql = format!("{} {}", name, from);
                    if let Some(p) = leading_precision {
                        sql.push_str(&format!("({})", p));
                    }
                    if let Some(to) = to {
                        sql.push_str(" TO ");
                        sql.push_str(to);
                    }
                    if let Some(p) = fractional_precision {
                        sql.push_str(&format!("({})", p));
                    }
                    sql
                }
                None => match fractional_precision {
                    Some(p) => format!("{}({})", name, p),
                    None => name.to_string(),
                },
            },
            TypeKind::Array {
                element,
                dimensions,
            } => {
                let mut sql = element.to_sql();
                for _ in 0..*dimensions {
                    sql.push_str("[]");
                }
                sql
            }
            TypeKind::Boolean => name.to_string(),
            TypeKind::UserDefined { parameters } => match parameters {
                Some(p) => format!("{}({})", name, p),
                None => name.to_string(),
            },
        }
    }

    fn check_bounds(&self, diagnostics: &mut Diagnostics) {
        let name = self.name.as_str();
        let mut warn = |message: String| {
            diagnostics.push(Diagnostic::Bounds {
                type_name: name.to_string(),
                message,
            })
        };

        match &self.kind {
            TypeKind::Character { length } => {
                let Some(len) = *length else { return };
                let at_least_one = match self.dialect {
                    Dialect::Mysql => false,
                    Dialect::Oracle => true,
                    Dialect::Postgres | Dialect::Standard => {
                        name.starts_with("CHARACTER") || name.starts_with("BIT") || name.starts_with("BINARY")
                    }
                };
                if at_least_one && len < 1 {
                    warn("length must be at least 1".to_string());
                }
                let max = match (self.dialect, name) {
                    (Dialect::Mysql, "CHAR" | "BINARY") => Some(255),
                    (Dialect::Mysql, "VARCHAR" | "VARBINARY") => Some(65_535),
                    (Dialect::Oracle, "CHAR" | "NCHAR" | "RAW") => Some(2_000),
                    (Dialect::Oracle, "VARCHAR2" | "NVARCHAR2" | "UROWID") => Some(4_000),
                    (Dialect::Postgres, "CHARACTER" | "CHARACTER VARYING") => Some(10_485_760),
                    (Dialect::Postgres, "BIT" | "BIT VARYING") => Some(83_886_080),
                    _ => None,
                };
                if let Some(max) = max {
                    if len > max {
                        warn(format!("length {} exceeds {}", len, max));
                    }
                }
            }
            TypeKind::Numeric {
                precision, scale, ..
            } => {
                let (p, s) = (*precision, *scale);
                match self.dialect {
                    Dialect::Mysql => {
                        let max_width = match name {
                            "TINYINT" => Some(4),
                            "SMALLINT" => Some(6),
                            "MEDIUMINT" => Some(9),
                            "INT" => Some(11),
                            "BIGINT" => Some(20),
                            _ => None,
                        };
                        match (name, p) {
                            (_, Some(p)) if max_width.is_some_and(|m| p > m) => {
                                warn(format!("display width {} exceeds {}", p, max_width.unwrap_or_default()));
                            }
                            ("DECIMAL", Some(p)) if p > 65 => {
                                warn(format!("precision {} exceeds 65", p));
                            }
                            ("FLOAT" | "DOUBLE", Some(p)) if s.is_none() && p > 53 => {
                                warn(format!("precision {} exceeds 53", p));
                            }
                            ("BIT", Some(p)) if !(1..=64).contains(&p) => {
                                warn(format!("length {} outside 1..=64", p));
                            }
                            _ => {}
                        }
                        if name == "DECIMAL" && s.is_some_and(|s| s > 30) {
                            warn("scale must not exceed 30".to_string());
                        }
                    }
                    Dialect::Oracle => match name {
                        "NUMBER" => {
                            if p.is_some_and(|p| !(1..=38).contains(&p)) {
                                warn("precision must be between 1 and 38".to_string());
                            }
                            if s.is_some_and(|s| !(-84..=127).contains(&s)) {
                                warn("scale must be between -84 and 127".to_string());
                            }
                        }
                        "FLOAT" if p.is_some_and(|p| !(1..=126).contains(&p)) => {
                            warn("binary precision must be between 1 and 126".to_string());
                        }
                        _ => {}
                    },
                    Dialect::Postgres => {
                        if name == "NUMERIC" && p.is_some_and(|p| !(1..=1_000).contains(&p)) {
                            warn("precision must be between 1 and 1000".to_string());
                        }
                    }
                    Dialect::Standard => {
                        if p == Some(0) {
                            warn("precision must be at least 1".to_string());
                        }
                    }
                }
                if let (Some(p), Some(s)) = (p, s) {
                    let checks_scale = match self.dialect {
                        Dialect::Mysql => name == "DECIMAL",
                        Dialect::Postgres => name == "NUMERIC",
                        Dialect::Standard => matches!(name, "NUMERIC" | "DECIMAL"),
                        Dialect::Oracle => false,
                    };
                    if checks_scale && i64::from(s) > i64::from(p) {
                        warn(format!("scale {} exceeds precision {}", s, p));
                    }
                }
            }
            TypeKind::Enumerated { names } => {
                if names.is_empty() {
                    warn("at least one value is required".to_string());
                }
                match (self.dialect, name) {
                    (Dialect::Mysql, "ENUM") if names.len() > 65_535 => {
                        warn("more than 65535 values".to_string());
                    }
                    (Dialect::Mysql, "SET") if names.len() > 64 => {
                        warn("more than 64 members".to_string());
                    }
                    _ => {}
                }
            }
            TypeKind::DateTime { precision, .. } => {
                let Some(p) = *precision else { return };
                let max = match (self.dialect, name) {
                    (_, "DATE") => {
                        warn("DATE takes no precision".to_string());
                        return;
                    }
                    (Dialect::Mysql, "YEAR") => {
                        if p != 2 && p != 4 {
                            warn(format!("display width {} must be 2 or 4", p));
                        }
                        return;
                    }
                    (Dialect::Mysql, _) => 6,
                    (Dialect::Oracle, _) => 9,
                    (Dialect::Postgres, _) => 6,
                    (Dialect::Standard, _) => return,
                };
                if p > max {
                    warn(format!("fractional seconds precision {} exceeds {}", p, max));
                }
            }
            TypeKind::Interval {
                range,
                leading_precision,
                fractional_precision,
            } => match self.dialect {
                Dialect::Oracle => {
                    if range.is_some_and(|r| {
                        !matches!(r, IntervalRange::YearToMonth | IntervalRange::DayToSecond)
                    }) {
                        warn("only YEAR TO MONTH and DAY TO SECOND are supported".to_string());
                    }
                    if leading_precision.is_some_and(|p| p > 9) {
                        warn("leading field precision must not exceed 9".to_string());
                    }
                    if fractional_precision.is_some_and(|p| p > 9) {
                        warn("fractional seconds precision must not exceed 9".to_string());
                    }
                }
                Dialect::Postgres => {
                    if leading_precision.is_some() {
                        warn("leading field precision is not supported".to_string());
                    }
                    if fractional_precision.is_some_and(|p| p > 6) {
                        warn("fractional seconds precision must not exceed 6".to_string());
                    }
                }
                Dialect::Mysql | Dialect::Standard => {}
            },
            TypeKind::Array { .. } | TypeKind::Boolean | TypeKind::UserDefined { .. } => {}
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

fn unsigned_param(
    type_name: &str,
    value: Option<i64>,
    offset: usize,
) -> Result<Option<u32>, DdlError> {
    value
        .map(|v| u32::try_from(v).map_err(|_| bad_param(type_name, v, offset)))
        .transpose()
}

fn bad_param(type_name: &str, value: i64, offset: usize) -> DdlError {
    DdlError::syntax(
        format!("a valid {} parameter", type_name),
        value.to_string(),
        offset,
    )
}
