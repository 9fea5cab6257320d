//! Per-table pipeline and the orchestrating loop.

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::feeder::{FeedJob, FeedMetrics};
use crate::session::{SchemaCatalog, Session};
use crate::statement::InsertStatement;
use loadtest_generator::generators_for;
use rand::Rng;
use serde::Serialize;
use sync_core::{resolve_table, TableRef};
use tracing::{debug, error, info};

/// Outcome of a table that was fed successfully.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableReport {
    /// Resolved `namespace.table`
    pub table: String,
    /// Rows inserted
    pub rows_inserted: u64,
    /// Duration in milliseconds
    pub duration_ms: u64,
    /// Rows per second
    pub rows_per_second: f64,
}

/// A table that was skipped or aborted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableFailure {
    /// Identifier as requested
    pub table: String,
    /// Single-line error message
    pub error: String,
}

/// Result of [`populate_tables`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PopulateSummary {
    pub tables: Vec<TableReport>,
    pub failures: Vec<TableFailure>,
}

impl PopulateSummary {
    /// Rows inserted across all successful tables.
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|t| t.rows_inserted).sum()
    }

    /// Whether every requested table was fed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the whole pipeline for one table identifier, returning the resolved
/// table along with the metrics.
///
/// resolve → introspect → generators → prepare → feed. Nothing is prepared
/// and no generator is built unless the lookup succeeds, and the statement
/// is only prepared once every column has a generator.
pub async fn feed_table<S, R>(
    session: &S,
    config: &FeedConfig,
    raw_table: &str,
    rng: &mut R,
) -> Result<(TableRef, FeedMetrics), FeedError>
where
    S: SchemaCatalog + Session,
    R: Rng,
{
    let table = resolve_table(raw_table, config.default_namespace.as_deref())?;

    let columns = session.lookup_columns(&table).await?;
    debug!("{}: {} columns", table, columns.len());

    let generators = generators_for(&columns, &config.generator_options).map_err(|source| {
        FeedError::UnsupportedType {
            table: table.clone(),
            source,
        }
    })?;

    let insert = InsertStatement::new(table.clone(), &columns);
    debug_assert_eq!(generators.len(), insert.parameter_count());
    debug!("{}: {}", table, insert.text());

    let statement = session
        .prepare(&insert)
        .await
        .map_err(|cause| FeedError::Prepare {
            table: table.clone(),
            cause,
        })?;

    if config.dry_run {
        info!(
            "[DRY-RUN] Would insert {} rows into {} with: {}",
            config.iterations,
            table,
            insert.text()
        );
        return Ok((table, FeedMetrics::default()));
    }

    let job = FeedJob::new(table, statement, generators, config.iterations);
    info!("Populating {} with {} rows", job.table(), job.iterations());
    let metrics = job.run(session, rng).await?;
    Ok((job.table().clone(), metrics))
}

/// Feed every table in order, isolating failures per table.
///
/// Each error is logged once and recorded in the summary; the remaining
/// tables are still attempted.
pub async fn populate_tables<S>(
    session: &S,
    config: &FeedConfig,
    tables: &[String],
) -> PopulateSummary
where
    S: SchemaCatalog + Session,
{
    let mut summary = PopulateSummary::default();

    for (position, raw_table) in tables.iter().enumerate() {
        let mut rng = config.rng_for_table(position);

        match feed_table(session, config, raw_table, &mut rng).await {
            Ok((table, metrics)) => {
                info!(
                    "Populated {}: {} rows in {:?} ({:.2} rows/sec)",
                    table,
                    metrics.rows_inserted,
                    metrics.duration,
                    metrics.rows_per_second()
                );
                summary.tables.push(TableReport {
                    table: table.to_string(),
                    rows_inserted: metrics.rows_inserted,
                    duration_ms: metrics.duration.as_millis() as u64,
                    rows_per_second: metrics.rows_per_second(),
                });
            }
            Err(e) => {
                error!("{}", e);
                summary.failures.push(TableFailure {
                    table: raw_table.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    summary
}
