//! Individual value generators for different data types.
//!
//! Each function takes the RNG explicitly so callers decide between a
//! seeded and an entropy-backed source.

pub mod numeric;
pub mod text;
pub mod timestamp;
pub mod uuid;
