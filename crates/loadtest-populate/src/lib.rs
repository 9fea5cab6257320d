//! Database-agnostic table feeding pipeline.
//!
//! This crate owns everything between "a list of table identifiers" and
//! "rows inserted", except the database itself, which is reached through the
//! [`SchemaCatalog`] and [`Session`] traits:
//!
//! ```text
//! "ns.table" ──resolve──▶ TableRef ──lookup_columns──▶ [ColumnDescriptor]
//!                                                          │
//!                                 ┌────────────────────────┴──────┐
//!                                 ▼                               ▼
//!                         [GeneratorSpec]                 InsertStatement
//!                                 │                               │ prepare
//!                                 └──────────▶ FeedJob ◀──────────┘
//!                                                 │ run: N x execute
//!                                                 ▼
//!                                            FeedMetrics
//! ```
//!
//! Database crates (e.g. `loadtest-populate-postgresql`) implement the two
//! traits and reuse [`CommonFeedArgs`] for their CLI.

pub mod args;
pub mod config;
pub mod error;
pub mod feeder;
pub mod pipeline;
pub mod session;
pub mod statement;

#[cfg(test)]
pub(crate) mod testing;

pub use args::CommonFeedArgs;
pub use config::FeedConfig;
pub use error::FeedError;
pub use feeder::{FeedJob, FeedMetrics};
pub use pipeline::{feed_table, populate_tables, PopulateSummary, TableFailure, TableReport};
pub use session::{LookupError, SchemaCatalog, Session};
pub use statement::{quote_identifier, InsertStatement};
