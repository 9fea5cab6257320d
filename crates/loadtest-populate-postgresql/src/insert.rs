//! Binding generated values as PostgreSQL parameters.

use bytes::{BufMut, BytesMut};
use postgres_types::{to_sql_checked, IsNull, ToSql, Type, WrongType};
use std::error::Error;
use sync_core::Value;

/// NUMERIC sign word for non-negative values.
const NUMERIC_POS: u16 = 0x0000;
/// NUMERIC digits are base 10000.
const NUMERIC_BASE: u128 = 10_000;

/// A [`Value`] borrowed for binding to a prepared statement.
///
/// Each variant delegates to the matching `tokio-postgres` conversion, so a
/// value bound to a column of the wrong type fails with `WrongType` rather
/// than sending garbage.
#[derive(Debug)]
pub struct PostgreSQLParam<'a>(pub &'a Value);

impl ToSql for PostgreSQLParam<'_> {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self.0 {
            Value::Text(s) => s.to_sql_checked(ty, out),
            Value::Blob(b) => b.to_sql_checked(ty, out),
            Value::Boolean(b) => b.to_sql_checked(ty, out),
            Value::VarInt(n) => {
                if *ty != Type::NUMERIC {
                    return Err(Box::new(WrongType::new::<u128>(ty.clone())));
                }
                encode_numeric(*n, out);
                Ok(IsNull::No)
            }
            Value::BigInt(i) => i.to_sql_checked(ty, out),
            Value::Decimal(d) => d.to_sql_checked(ty, out),
            Value::Double(f) => f.to_sql_checked(ty, out),
            Value::Float(f) => f.to_sql_checked(ty, out),
            Value::Int(i) => i.to_sql_checked(ty, out),
            Value::SmallInt(i) => i.to_sql_checked(ty, out),
            Value::TinyInt(i) => i.to_sql_checked(ty, out),
            Value::Uuid(u) => u.to_sql_checked(ty, out),
            // timestamptz takes DateTime<Utc>, timestamp takes the naive form
            Value::Timestamp(ts) if *ty == Type::TIMESTAMP => ts.naive_utc().to_sql_checked(ty, out),
            Value::Timestamp(ts) => ts.to_sql_checked(ty, out),
            Value::Date(d) => d.to_sql_checked(ty, out),
            Value::Time(t) => t.to_sql_checked(ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

/// Write `value` in PostgreSQL's binary NUMERIC format.
///
/// Layout: ndigits, weight, sign, dscale (all 16-bit), then ndigits base-10000
/// digits, most significant first, trailing zero digits omitted.
pub fn encode_numeric(value: u128, out: &mut BytesMut) {
    // Least significant digit first
    let mut digits: Vec<i16> = Vec::new();
    let mut n = value;
    while n > 0 {
        digits.push((n % NUMERIC_BASE) as i16);
        n /= NUMERIC_BASE;
    }

    let weight = digits.len() as i16 - 1;
    let trailing_zeros = digits.iter().take_while(|d| **d == 0).count();
    digits.drain(..trailing_zeros);
    digits.reverse();

    out.put_i16(digits.len() as i16);
    out.put_i16(if digits.is_empty() { 0 } else { weight });
    out.put_u16(NUMERIC_POS);
    out.put_u16(0);
    for digit in digits {
        out.put_i16(digit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn encoded(value: u128) -> Vec<u8> {
        let mut out = BytesMut::new();
        encode_numeric(value, &mut out);
        out.to_vec()
    }

    /// Decode the non-negative integers `encode_numeric` produces.
    fn decode(bytes: &[u8]) -> u128 {
        let word = |i: usize| i16::from_be_bytes([bytes[i], bytes[i + 1]]);
        let ndigits = word(0) as usize;
        let weight = word(2) as i32;
        let mut value: u128 = 0;
        for i in 0..ndigits {
            value = value * NUMERIC_BASE + word(8 + 2 * i) as u128;
        }
        let missing = weight + 1 - ndigits as i32;
        for _ in 0..missing.max(0) {
            value *= NUMERIC_BASE;
        }
        value
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encoded(0), vec![0, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_small_values() {
        // 12345 = 1 * 10000 + 2345
        assert_eq!(
            encoded(12345),
            vec![0, 2, 0, 1, 0, 0, 0, 0, 0, 1, 0x09, 0x29]
        );
        // 10000 keeps a single digit with weight 1
        assert_eq!(encoded(10_000), vec![0, 1, 0, 1, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_encode_decodes_back() {
        for value in [1, 9_999, 10_000, 100_000_000, u64::MAX as u128, u128::MAX] {
            assert_eq!(decode(&encoded(value)), value, "{value}");
        }
    }

    #[test]
    fn test_bind_matching_types() {
        let cases = [
            (Value::Int(7), Type::INT4, 4),
            (Value::SmallInt(7), Type::INT2, 2),
            (Value::TinyInt(7), Type::CHAR, 1),
            (Value::BigInt(7), Type::INT8, 8),
            (Value::Boolean(true), Type::BOOL, 1),
            (Value::Double(0.5), Type::FLOAT8, 8),
            (Value::Float(0.5), Type::FLOAT4, 4),
            (Value::Text("abc".to_string()), Type::VARCHAR, 3),
            (Value::Blob(vec![1, 2]), Type::BYTEA, 2),
            (Value::Uuid(Uuid::nil()), Type::UUID, 16),
            (Value::Time(NaiveTime::MIN), Type::TIME, 8),
        ];

        for (value, ty, len) in cases {
            let mut out = BytesMut::new();
            let result = PostgreSQLParam(&value).to_sql_checked(&ty, &mut out);
            assert!(result.is_ok(), "{value:?} as {ty}");
            assert_eq!(out.len(), len, "{value:?} as {ty}");
        }
    }

    #[test]
    fn test_bind_timestamps_to_both_timestamp_types() {
        let value = Value::Timestamp(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());

        for ty in [Type::TIMESTAMP, Type::TIMESTAMPTZ] {
            let mut out = BytesMut::new();
            PostgreSQLParam(&value).to_sql_checked(&ty, &mut out).unwrap();
            assert_eq!(out.len(), 8);
        }
    }

    #[test]
    fn test_bind_numeric_values() {
        let mut out = BytesMut::new();
        PostgreSQLParam(&Value::VarInt(12345))
            .to_sql_checked(&Type::NUMERIC, &mut out)
            .unwrap();
        assert_eq!(out.to_vec(), encoded(12345));

        let mut out = BytesMut::new();
        PostgreSQLParam(&Value::Decimal(Decimal::new(25, 2)))
            .to_sql_checked(&Type::NUMERIC, &mut out)
            .unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn test_bind_wrong_type_fails() {
        let mut out = BytesMut::new();
        assert!(PostgreSQLParam(&Value::Int(1))
            .to_sql_checked(&Type::TEXT, &mut out)
            .is_err());
        assert!(PostgreSQLParam(&Value::VarInt(1))
            .to_sql_checked(&Type::INT8, &mut out)
            .is_err());
        assert!(PostgreSQLParam(&Value::Date(NaiveDate::MIN))
            .to_sql_checked(&Type::TIMESTAMP, &mut out)
            .is_err());
    }
}
