//! Column types recognized by the value generators.
//!
//! `TypeTag` is deliberately database-neutral: each database crate maps its
//! own catalog vocabulary onto it, and anything it cannot map lands in
//! [`TypeTag::Unsupported`] with the declared type name preserved.

use std::fmt;

/// Closed enumeration of column data types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Character data of any length
    Text,
    /// Raw bytes
    Blob,
    /// Boolean
    Boolean,
    /// Arbitrary-precision integer
    VarInt,
    /// 64-bit signed integer
    BigInt,
    /// Arbitrary-precision decimal
    Decimal,
    /// 64-bit floating point
    Double,
    /// 32-bit floating point
    Float,
    /// 32-bit signed integer
    Int,
    /// 16-bit signed integer
    SmallInt,
    /// 8-bit signed integer
    TinyInt,
    /// Random UUID
    Uuid,
    /// Time-ordered UUID
    TimeUuid,
    /// Instant in time
    Timestamp,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Anything else (collections, user-defined types, network addresses,
    /// counters, ...). Holds the type name as declared in the catalog.
    Unsupported(String),
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Text => "text",
            TypeTag::Blob => "blob",
            TypeTag::Boolean => "boolean",
            TypeTag::VarInt => "varint",
            TypeTag::BigInt => "bigint",
            TypeTag::Decimal => "decimal",
            TypeTag::Double => "double",
            TypeTag::Float => "float",
            TypeTag::Int => "int",
            TypeTag::SmallInt => "smallint",
            TypeTag::TinyInt => "tinyint",
            TypeTag::Uuid => "uuid",
            TypeTag::TimeUuid => "timeuuid",
            TypeTag::Timestamp => "timestamp",
            TypeTag::Date => "date",
            TypeTag::Time => "time",
            TypeTag::Unsupported(declared) => declared,
        };
        f.write_str(name)
    }
}

/// A column as reported by the schema catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,
    /// Declared type
    pub type_tag: TypeTag,
    /// Declared maximum length in characters, for bounded character types
    pub max_length: Option<usize>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
            max_length: None,
        }
    }

    /// Attach a declared length bound, e.g. the `n` of `varchar(n)`.
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }
}
