//! PostgreSQL column type mapping.
//!
//! This module maps PostgreSQL data types, as returned by
//! `information_schema.columns`, to the generator-facing `TypeTag`.

use sync_core::{ColumnDescriptor, TypeTag};

/// Smallest NUMERIC precision that holds every 128-bit unsigned integer.
pub const VARINT_MIN_PRECISION: u32 = 39;

/// Column defaults that mark a UUID column as time-ordered.
const TIME_UUID_DEFAULTS: &[&str] = &["uuid_generate_v1", "uuid_generate_v7", "uuidv7"];

/// Convert PostgreSQL INFORMATION_SCHEMA column type information to a `TypeTag`.
///
/// # Arguments
///
/// * `data_type` - The PostgreSQL data type name (e.g., "integer", "character varying")
/// * `precision` - Numeric precision, for `numeric` columns
/// * `scale` - Numeric scale, for `numeric` columns
/// * `column_default` - The column's default expression, if any
///
/// # Example
///
/// ```
/// use loadtest_populate_postgresql::postgresql_column_to_type_tag;
/// use sync_core::{ColumnDescriptor, TypeTag};
///
/// assert_eq!(postgresql_column_to_type_tag("integer", None, None, None), TypeTag::Int);
/// assert_eq!(
///     postgresql_column_to_type_tag("inet", None, None, None),
///     TypeTag::Unsupported("inet".to_string())
/// );
/// ```
pub fn postgresql_column_to_type_tag(
    data_type: &str,
    precision: Option<u32>,
    scale: Option<u32>,
    column_default: Option<&str>,
) -> TypeTag {
    match data_type.to_lowercase().as_str() {
        // String types
        "text" | "character varying" | "varchar" | "character" | "char" | "bpchar" | "name" => {
            TypeTag::Text
        }

        // Binary
        "bytea" => TypeTag::Blob,

        // Boolean
        "boolean" | "bool" => TypeTag::Boolean,

        // Numeric types
        "numeric" | "decimal" => match (precision, scale) {
            (Some(p), Some(0)) if p >= VARINT_MIN_PRECISION => TypeTag::VarInt,
            _ => TypeTag::Decimal,
        },
        "bigint" | "int8" => TypeTag::BigInt,
        "double precision" | "float8" => TypeTag::Double,
        "real" | "float4" => TypeTag::Float,
        "integer" | "int" | "int4" => TypeTag::Int,
        "smallint" | "int2" => TypeTag::SmallInt,
        // The single-byte internal type, reported with its quotes
        "\"char\"" => TypeTag::TinyInt,

        // UUID
        "uuid" => match column_default {
            Some(default) if is_time_uuid_default(default) => TypeTag::TimeUuid,
            _ => TypeTag::Uuid,
        },

        // Date/Time types
        "timestamp" | "timestamp without time zone" | "timestamptz"
        | "timestamp with time zone" => TypeTag::Timestamp,
        "date" => TypeTag::Date,
        "time" | "time without time zone" => TypeTag::Time,

        // ARRAY, USER-DEFINED, inet, json, interval, ...
        _ => TypeTag::Unsupported(data_type.to_string()),
    }
}

/// One row of `information_schema.columns`, as selected by the populator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostgreSQLColumn {
    pub column_name: String,
    pub data_type: String,
    pub character_maximum_length: Option<u32>,
    pub numeric_precision: Option<u32>,
    pub numeric_scale: Option<u32>,
    pub column_default: Option<String>,
}

impl PostgreSQLColumn {
    /// Build the generator-facing descriptor, keeping the declared length of
    /// `varchar(n)` and `char(n)` columns.
    pub fn to_descriptor(&self) -> ColumnDescriptor {
        let type_tag = postgresql_column_to_type_tag(
            &self.data_type,
            self.numeric_precision,
            self.numeric_scale,
            self.column_default.as_deref(),
        );
        let max_length = match type_tag {
            TypeTag::Text => self.character_maximum_length.map(|n| n as usize),
            _ => None,
        };
        ColumnDescriptor::new(self.column_name.clone(), type_tag).with_max_length(max_length)
    }
}

fn is_time_uuid_default(default: &str) -> bool {
    let default = default.to_lowercase();
    TIME_UUID_DEFAULTS.iter().any(|f| default.contains(f))
}
