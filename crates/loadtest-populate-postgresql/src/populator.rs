//! PostgreSQL session: catalog lookups, prepare and execute.

use crate::args::PostgreSQLPopulateArgs;
use crate::error::PostgreSQLPopulatorError;
use crate::insert::PostgreSQLParam;
use crate::schema::PostgreSQLColumn;
use anyhow::Context;
use async_trait::async_trait;
use loadtest_populate::{
    populate_tables, FeedConfig, InsertStatement, LookupError, PopulateSummary, SchemaCatalog,
    Session,
};
use sync_core::{ColumnDescriptor, TableRef, Value};
use tokio::task::JoinHandle;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls, Statement};
use tracing::{debug, info};

const NAMESPACE_EXISTS: &str =
    "SELECT 1 FROM information_schema.schemata WHERE schema_name = $1::text";

const TABLE_EXISTS: &str = "
    SELECT 1 FROM information_schema.tables
    WHERE table_schema = $1::text AND table_name = $2::text";

// Generated columns and GENERATED ALWAYS identity columns reject explicit
// values, so they are left out of the insert
const TABLE_COLUMNS: &str = "
    SELECT column_name::text, data_type::text, character_maximum_length::int4,
           numeric_precision::int4, numeric_scale::int4, column_default::text
    FROM information_schema.columns
    WHERE table_schema = $1::text AND table_name = $2::text
      AND is_generated <> 'ALWAYS'
      AND NOT (is_identity = 'YES' AND identity_generation = 'ALWAYS')
    ORDER BY ordinal_position";

/// A single PostgreSQL connection used for every table of a run.
pub struct PostgreSQLSession {
    client: Client,
    driver: JoinHandle<()>,
}

impl PostgreSQLSession {
    /// Connect and verify the connection.
    ///
    /// # Arguments
    ///
    /// * `connection_string` - PostgreSQL connection string (e.g., "host=localhost user=postgres password=postgres dbname=testdb")
    pub async fn connect(connection_string: &str) -> Result<Self, PostgreSQLPopulatorError> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls).await?;

        // Drive the connection on the same runtime; it ends when the client drops
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        // Test connection
        client.simple_query("SELECT 1").await?;

        Ok(Self { client, driver })
    }

    /// Drop the client and wait for the connection task to finish.
    pub async fn close(self) -> Result<(), PostgreSQLPopulatorError> {
        drop(self.client);
        self.driver
            .await
            .map_err(|e| PostgreSQLPopulatorError::Connection(e.to_string()))
    }

    async fn exists(&self, query: &str, params: &[&(dyn ToSql + Sync)]) -> anyhow::Result<bool> {
        Ok(self.client.query_opt(query, params).await?.is_some())
    }

    async fn columns(&self, table: &TableRef) -> anyhow::Result<Vec<ColumnDescriptor>> {
        let rows = self
            .client
            .query(TABLE_COLUMNS, &[&table.namespace, &table.name])
            .await?;

        rows.iter()
            .map(|row| -> anyhow::Result<ColumnDescriptor> {
                let column = PostgreSQLColumn {
                    column_name: row.try_get(0)?,
                    data_type: row.try_get(1)?,
                    character_maximum_length: unsigned(row.try_get(2)?),
                    numeric_precision: unsigned(row.try_get(3)?),
                    numeric_scale: unsigned(row.try_get(4)?),
                    column_default: row.try_get(5)?,
                };
                Ok(column.to_descriptor())
            })
            .collect()
    }
}

fn unsigned(value: Option<i32>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

#[async_trait]
impl SchemaCatalog for PostgreSQLSession {
    async fn lookup_columns(
        &self,
        table: &TableRef,
    ) -> Result<Vec<ColumnDescriptor>, LookupError> {
        let catalog_error = |cause: anyhow::Error| LookupError::Catalog {
            table: table.clone(),
            cause,
        };

        if !self
            .exists(NAMESPACE_EXISTS, &[&table.namespace])
            .await
            .map_err(catalog_error)?
        {
            return Err(LookupError::NamespaceNotFound {
                table: table.clone(),
                namespace: table.namespace.clone(),
            });
        }

        if !self
            .exists(TABLE_EXISTS, &[&table.namespace, &table.name])
            .await
            .map_err(catalog_error)?
        {
            return Err(LookupError::TableNotFound {
                table: table.clone(),
            });
        }

        self.columns(table).await.map_err(catalog_error)
    }
}

#[async_trait]
impl Session for PostgreSQLSession {
    type Statement = Statement;

    async fn prepare(&self, insert: &InsertStatement) -> anyhow::Result<Statement> {
        let sql = insert.text();
        let statement = self
            .client
            .prepare(&sql)
            .await
            .with_context(|| format!("preparing `{sql}`"))?;

        anyhow::ensure!(
            statement.params().len() == insert.parameter_count(),
            "prepared statement has {} parameters, expected {}",
            statement.params().len(),
            insert.parameter_count()
        );
        debug!("Prepared: {}", sql);

        Ok(statement)
    }

    async fn execute(&self, statement: &Statement, values: &[Value]) -> anyhow::Result<()> {
        let params: Vec<PostgreSQLParam<'_>> = values.iter().map(PostgreSQLParam).collect();
        let param_refs: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect();

        self.client.execute(statement, &param_refs).await?;
        Ok(())
    }
}

/// Connect, feed every requested table, and close the connection.
///
/// Per-table failures are reported in the summary; only a failure to
/// connect is returned as an error.
pub async fn populate(
    args: &PostgreSQLPopulateArgs,
) -> Result<PopulateSummary, PostgreSQLPopulatorError> {
    let config = FeedConfig::from(&args.common);
    let session = PostgreSQLSession::connect(&args.postgresql_connection_string).await?;

    info!(
        "Feeding {} table(s) with {} rows each{}",
        args.common.tables.len(),
        config.iterations,
        if config.dry_run { " [DRY-RUN]" } else { "" }
    );

    let summary = populate_tables(&session, &config, &args.common.tables).await;
    session.close().await?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_query_skips_columns_that_reject_values() {
        assert!(TABLE_COLUMNS.contains("is_generated <> 'ALWAYS'"));
        assert!(TABLE_COLUMNS.contains(
            "NOT (is_identity = 'YES' AND identity_generation = 'ALWAYS')"
        ));
        assert!(TABLE_COLUMNS.contains("character_maximum_length"));
    }

    #[test]
    fn test_negative_catalog_numbers_are_dropped() {
        assert_eq!(unsigned(Some(10)), Some(10));
        assert_eq!(unsigned(Some(-1)), None);
        assert_eq!(unsigned(None), None);
    }
}
