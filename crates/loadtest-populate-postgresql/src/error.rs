//! Error types for the PostgreSQL populator.

use thiserror::Error;

/// Errors that abort a PostgreSQL run before any table is processed.
#[derive(Error, Debug)]
pub enum PostgreSQLPopulatorError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),
}
