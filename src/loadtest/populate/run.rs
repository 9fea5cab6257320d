//! Populate command runner.

use anyhow::Context;
use loadtest_populate::PopulateSummary;
use loadtest_populate_postgresql::PostgreSQLPopulateArgs;
use std::path::Path;

use super::mask_connection_password;

/// Run the populate command: connect, feed every table, report.
///
/// Only a failure to connect (or to write the metrics file) is an error;
/// tables that fail are logged and listed in the summary.
pub async fn run_populate(args: PostgreSQLPopulateArgs) -> anyhow::Result<PopulateSummary> {
    tracing::info!(
        "Connecting to PostgreSQL: {}",
        mask_connection_password(&args.postgresql_connection_string)
    );

    let summary = loadtest_populate_postgresql::populate(&args)
        .await
        .context("Failed to connect to PostgreSQL")?;

    tracing::info!(
        "Fed {} of {} table(s), {} rows total",
        summary.tables.len(),
        args.common.tables.len(),
        summary.total_rows()
    );
    if !summary.is_clean() {
        tracing::warn!("{} table(s) skipped or aborted", summary.failures.len());
    }

    if let Some(path) = &args.common.metrics_output {
        write_summary(&summary, path)?;
        tracing::info!("Metrics written to {:?}", path);
    }

    Ok(summary)
}

/// Write the summary as pretty JSON.
pub fn write_summary(summary: &PopulateSummary, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, &json)
        .with_context(|| format!("Failed to write metrics to {path:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadtest_populate::{TableFailure, TableReport};

    #[test]
    fn test_write_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");
        let summary = PopulateSummary {
            tables: vec![TableReport {
                table: "app.users".to_string(),
                rows_inserted: 10,
                duration_ms: 5,
                rows_per_second: 2000.0,
            }],
            failures: vec![TableFailure {
                table: "ghost".to_string(),
                error: "table ghost ignored: no namespace available".to_string(),
            }],
        };

        write_summary(&summary, &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["tables"][0]["table"], "app.users");
        assert_eq!(json["failures"][0]["table"], "ghost");
    }
}
