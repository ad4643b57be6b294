//! Table model: dialects, identifiers, data types, columns and constraints

mod constraint;
mod data_type;
mod dialect;
pub mod grammar;
mod identifier;
mod sql_writer;
mod table;

pub use constraint::{
    Check, ColumnRef, Constraint, ForeignKey, Index, PrimaryKey, ReferenceColumn, UniqueKey,
};
pub use data_type::{DataType, IntervalRange, IntervalSpec, TimeZone, TypeKind, TypeSpec};
pub use dialect::Dialect;
pub use grammar::TypeCategory;
pub use identifier::{unquote, Identifier, QualifiedName};
pub use table::{Column, Table};
