//! Registry mapping column types to value generators.

use crate::generators::{numeric, text, timestamp, uuid};
use chrono::Utc;
use rand::Rng;
use sync_core::{ColumnDescriptor, TypeTag, Value};

/// Default upper bound (exclusive) for generated text and blob lengths.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Error returned for columns whose type has no generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{type_name} datatype of column {column} is not supported")]
pub struct UnsupportedTypeError {
    /// Column name
    pub column: String,
    /// Declared type name
    pub type_name: String,
}

/// Knobs shared by all generators of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Exclusive upper bound for text lengths
    pub max_text_len: usize,
    /// Exclusive upper bound for blob lengths
    pub max_binary_len: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_text_len: DEFAULT_MAX_LENGTH,
            max_binary_len: DEFAULT_MAX_LENGTH,
        }
    }
}

/// Generation strategy, one variant per supported [`TypeTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorKind {
    Text { max_len: usize },
    Blob { max_len: usize },
    Boolean,
    VarInt,
    BigInt,
    Decimal,
    Double,
    Float,
    Int,
    SmallInt,
    TinyInt,
    Uuid,
    TimeUuid { node_id: [u8; 6] },
    Timestamp,
    Date,
    Time,
}

/// A value producer bound to one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSpec {
    /// The column this generator feeds
    pub column: ColumnDescriptor,
    /// How values are produced
    pub kind: GeneratorKind,
}

impl GeneratorSpec {
    /// Produce one fresh value.
    ///
    /// Nothing is carried between calls except the state of `rng` (and the
    /// wall clock for time-based kinds).
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Value {
        match &self.kind {
            GeneratorKind::Text { max_len } => text::generate_text(rng, *max_len),
            GeneratorKind::Blob { max_len } => text::generate_bytes(rng, *max_len),
            GeneratorKind::Boolean => numeric::generate_bool(rng),
            GeneratorKind::VarInt => numeric::generate_varint(rng),
            GeneratorKind::BigInt => numeric::generate_bigint(rng),
            GeneratorKind::Decimal => numeric::generate_decimal(rng),
            GeneratorKind::Double => numeric::generate_double(rng),
            GeneratorKind::Float => numeric::generate_float(rng),
            GeneratorKind::Int => numeric::generate_int(rng),
            GeneratorKind::SmallInt => numeric::generate_smallint(rng),
            GeneratorKind::TinyInt => numeric::generate_tinyint(rng),
            GeneratorKind::Uuid => uuid::generate_uuid_v4(rng),
            GeneratorKind::TimeUuid { node_id } => uuid::generate_time_uuid(node_id),
            GeneratorKind::Timestamp => timestamp::generate_timestamp(rng, Utc::now()),
            GeneratorKind::Date => timestamp::generate_date(rng, Utc::now()),
            GeneratorKind::Time => timestamp::generate_time(rng),
        }
    }
}

/// Build the generator for one column.
pub fn generator_for(
    column: &ColumnDescriptor,
    options: &GeneratorOptions,
) -> Result<GeneratorSpec, UnsupportedTypeError> {
    let kind = match &column.type_tag {
        // varchar(n) holds at most n characters; lengths are drawn below max_len
        TypeTag::Text => GeneratorKind::Text {
            max_len: match column.max_length {
                Some(n) => options.max_text_len.min(n.saturating_add(1)),
                None => options.max_text_len,
            },
        },
        TypeTag::Blob => GeneratorKind::Blob {
            max_len: options.max_binary_len,
        },
        TypeTag::Boolean => GeneratorKind::Boolean,
        TypeTag::VarInt => GeneratorKind::VarInt,
        TypeTag::BigInt => GeneratorKind::BigInt,
        TypeTag::Decimal => GeneratorKind::Decimal,
        TypeTag::Double => GeneratorKind::Double,
        TypeTag::Float => GeneratorKind::Float,
        TypeTag::Int => GeneratorKind::Int,
        TypeTag::SmallInt => GeneratorKind::SmallInt,
        TypeTag::TinyInt => GeneratorKind::TinyInt,
        TypeTag::Uuid => GeneratorKind::Uuid,
        TypeTag::TimeUuid => GeneratorKind::TimeUuid {
            node_id: uuid::random_node_id(&mut rand::rng()),
        },
        TypeTag::Timestamp => GeneratorKind::Timestamp,
        TypeTag::Date => GeneratorKind::Date,
        TypeTag::Time => GeneratorKind::Time,
        TypeTag::Unsupported(type_name) => {
            return Err(UnsupportedTypeError {
                column: column.name.clone(),
                type_name: type_name.clone(),
            })
        }
    };

    Ok(GeneratorSpec {
        column: column.clone(),
        kind,
    })
}

/// Build generators for every column, in column order.
///
/// Fails on the first unsupported column; no partial list is returned.
pub fn generators_for(
    columns: &[ColumnDescriptor],
    options: &GeneratorOptions,
) -> Result<Vec<GeneratorSpec>, UnsupportedTypeError> {
    columns
        .iter()
        .map(|column| generator_for(column, options))
        .collect()
}
