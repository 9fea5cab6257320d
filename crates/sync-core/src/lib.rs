//! Core types for the loadtest-feed framework.
//!
//! This crate provides the value objects shared by every other crate in the
//! workspace:
//!
//! - [`TableRef`] - Fully-qualified table reference and its resolver
//! - [`TypeTag`] - Closed set of column types the generators understand
//! - [`ColumnDescriptor`] - A column name with its declared type
//! - [`Value`] - One generated value, ready to be bound to a statement
//!
//! # Architecture
//!
//! ```text
//! sync-core (this crate)
//!    │
//!    ├─── loadtest-generator            (TypeTag -> GeneratorSpec -> Value)
//!    │
//!    ├─── loadtest-populate             (catalog/session traits, feeder)
//!    │
//!    └─── loadtest-populate-postgresql  (catalog types -> TypeTag, Value -> ToSql)
//! ```
//!
//! # Example
//!
//! ```rust
//! use sync_core::{resolve_table, TableRef};
//!
//! let table = resolve_table("users", Some("public")).unwrap();
//! assert_eq!(table, TableRef::new("public", "users"));
//! assert_eq!(table.to_string(), "public.users");
//! ```

pub mod table;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use table::{resolve_table, ResolutionError, TableRef};
pub use types::{ColumnDescriptor, TypeTag};
pub use values::Value;
