//! Numeric and boolean value generators.

use rand::Rng;
use rust_decimal::Decimal;
use sync_core::Value;

/// Generate a fair boolean.
pub fn generate_bool<R: Rng>(rng: &mut R) -> Value {
    Value::Boolean(rng.random())
}

/// Generate a uniform non-negative integer with 128 bits of magnitude.
pub fn generate_varint<R: Rng>(rng: &mut R) -> Value {
    Value::VarInt(rng.random())
}

/// Generate a uniform value over the whole `i64` range.
pub fn generate_bigint<R: Rng>(rng: &mut R) -> Value {
    Value::BigInt(rng.random())
}

/// Generate a uniform value over the whole `i32` range.
pub fn generate_int<R: Rng>(rng: &mut R) -> Value {
    Value::Int(rng.random())
}

/// Generate a 16-bit value by truncating a random `i32`.
pub fn generate_smallint<R: Rng>(rng: &mut R) -> Value {
    Value::SmallInt(rng.random::<i32>() as i16)
}

/// Generate an 8-bit value by truncating a random `i32`.
pub fn generate_tinyint<R: Rng>(rng: &mut R) -> Value {
    Value::TinyInt(rng.random::<i32>() as i8)
}

/// Generate a double in `[0, 1)`.
pub fn generate_double<R: Rng>(rng: &mut R) -> Value {
    Value::Double(rng.random::<f64>())
}

/// Generate a float in `[0, 1)`.
pub fn generate_float<R: Rng>(rng: &mut R) -> Value {
    Value::Float(rng.random::<f32>())
}

/// Generate a decimal from a double in `[0, 1)`.
///
/// The decimal keeps as many digits of the double's binary expansion as
/// `Decimal` can hold.
pub fn generate_decimal<R: Rng>(rng: &mut R) -> Value {
    let d: f64 = rng.random();
    Value::Decimal(Decimal::from_f64_retain(d).unwrap_or_default())
}
