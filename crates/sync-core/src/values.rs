//! Generated values.
//!
//! A `Value` is what one generator produces for one column in one row. The
//! variant carries the semantic type; database crates decide how to bind it.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// One generated column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Character data
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
    /// Boolean
    Boolean(bool),
    /// Non-negative integer of up to 128 bits
    VarInt(u128),
    /// 64-bit signed integer
    BigInt(i64),
    /// Decimal
    Decimal(Decimal),
    /// 64-bit floating point
    Double(f64),
    /// 32-bit floating point
    Float(f32),
    /// 32-bit signed integer
    Int(i32),
    /// 16-bit signed integer
    SmallInt(i16),
    /// 8-bit signed integer
    TinyInt(i8),
    /// UUID (random or time-based)
    Uuid(Uuid),
    /// Instant in UTC
    Timestamp(DateTime<Utc>),
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
}

impl Value {
    /// Short name of the value's semantic type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
            Value::Boolean(_) => "boolean",
            Value::VarInt(_) => "varint",
            Value::BigInt(_) => "bigint",
            Value::Decimal(_) => "decimal",
            Value::Double(_) => "double",
            Value::Float(_) => "float",
            Value::Int(_) => "int",
            Value::SmallInt(_) => "smallint",
            Value::TinyInt(_) => "tinyint",
            Value::Uuid(_) => "uuid",
            Value::Timestamp(_) => "timestamp",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
        }
    }

    /// Try to get this value as a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(b) => Some(b),
            _ => None,
        }
    }
}
