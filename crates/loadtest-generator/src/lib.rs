//! Value generators for the loadtest-feed framework.
//!
//! This crate maps a column's [`TypeTag`](sync_core::TypeTag) to a
//! [`GeneratorSpec`] that produces one random [`Value`](sync_core::Value) of
//! the matching semantic type per call.
//!
//! # Architecture
//!
//! ```text
//! ColumnDescriptor { name, type_tag, max_length }
//!        │
//!        ▼  generator_for()
//! ┌─────────────────┐
//! │  GeneratorSpec  │
//! │                 │
//! │  - column       │
//! │  - kind         │
//! └────────┬────────┘
//!          │  generate(&mut rng)
//!          ▼
//!        Value
//! ```
//!
//! # Example
//!
//! ```rust
//! use loadtest_generator::{generator_for, GeneratorOptions};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sync_core::{ColumnDescriptor, TypeTag, Value};
//!
//! let column = ColumnDescriptor::new("age", TypeTag::Int);
//! let generator = generator_for(&column, &GeneratorOptions::default()).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! assert!(matches!(generator.generate(&mut rng), Value::Int(_)));
//! ```
//!
//! # Generators
//!
//! - `text` - Uppercase ASCII letters, length in `[1, max_text_len)`
//! - `blob` - Random bytes, length in `[0, max_binary_len)`
//! - `boolean` - Fair coin
//! - `varint` - Uniform 128-bit unsigned integer
//! - `bigint`, `int`, `smallint`, `tinyint` - Full-range integers
//! - `decimal`, `double`, `float` - Uniform in `[0, 1)`
//! - `uuid` - Random v4 UUID
//! - `timeuuid` - Time-based v1 UUID
//! - `timestamp`, `date` - Random instant in the recent lookback window
//! - `time` - Random nanosecond of the day

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{
    generator_for, generators_for, GeneratorKind, GeneratorOptions, GeneratorSpec,
    UnsupportedTypeError, DEFAULT_MAX_LENGTH,
};
