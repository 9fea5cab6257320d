//! PostgreSQL backend for loadtest-feed.
//!
//! Namespaces are PostgreSQL schemas and the catalog is
//! `information_schema`. [`PostgreSQLSession`] implements both
//! [`SchemaCatalog`](loadtest_populate::SchemaCatalog) and
//! [`Session`](loadtest_populate::Session) over a single `tokio-postgres`
//! connection.

pub mod args;
pub mod error;
pub mod insert;
pub mod populator;
pub mod schema;

pub use args::PostgreSQLPopulateArgs;
pub use error::PostgreSQLPopulatorError;
pub use insert::PostgreSQLParam;
pub use populator::{populate, PostgreSQLSession};
pub use schema::{postgresql_column_to_type_tag, PostgreSQLColumn};
