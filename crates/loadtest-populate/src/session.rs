//! Database collaborator traits.
//!
//! The pipeline never talks to a database directly. A backend implements
//! [`SchemaCatalog`] for introspection and [`Session`] for prepare/execute;
//! the two are usually the same connection object.

use crate::error::single_line;
use crate::statement::InsertStatement;
use async_trait::async_trait;
use sync_core::{ColumnDescriptor, TableRef, Value};

/// Errors from a schema lookup.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The table's namespace does not exist.
    #[error("table {table} ignored: namespace {namespace} does not exist")]
    NamespaceNotFound { table: TableRef, namespace: String },

    /// The namespace exists but the table does not.
    #[error("table {table} ignored: the table does not exist")]
    TableNotFound { table: TableRef },

    /// The catalog query itself failed.
    #[error("table {table} ignored: schema lookup failed: {}", single_line(.cause))]
    Catalog { table: TableRef, cause: anyhow::Error },
}

/// Read access to the database's metadata catalog.
#[async_trait]
pub trait SchemaCatalog: Send + Sync {
    /// Columns of `table` in physical order.
    ///
    /// The order returned here fixes both the statement's parameter order
    /// and the generator order.
    async fn lookup_columns(&self, table: &TableRef)
        -> Result<Vec<ColumnDescriptor>, LookupError>;
}

/// An open database session able to prepare and run inserts.
#[async_trait]
pub trait Session: Send + Sync {
    /// Backend handle for a prepared statement.
    type Statement: Send + Sync;

    /// Prepare `insert` against this session.
    async fn prepare(&self, insert: &InsertStatement) -> anyhow::Result<Self::Statement>;

    /// Execute a prepared statement with values bound positionally.
    async fn execute(&self, statement: &Self::Statement, values: &[Value]) -> anyhow::Result<()>;
}
