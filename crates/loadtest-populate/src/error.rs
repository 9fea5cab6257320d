//! Per-table error taxonomy.

use crate::session::LookupError;
use loadtest_generator::UnsupportedTypeError;
use sync_core::{ResolutionError, TableRef};

/// Anything that stops one table from being fed.
///
/// Every variant renders as a single line naming the table.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Bare identifier with no default namespace.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// Namespace or table missing, or the catalog query failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// A column has a type without a generator.
    #[error("table {table} ignored: {source}")]
    UnsupportedType {
        table: TableRef,
        source: UnsupportedTypeError,
    },

    /// The database rejected the INSERT at prepare time.
    #[error("table {table} ignored: failed to prepare insert: {}", single_line(.cause))]
    Prepare { table: TableRef, cause: anyhow::Error },

    /// An INSERT failed; earlier rows stay in the table.
    #[error(
        "table {table} aborted after {completed} of {iterations} rows: {}",
        single_line(.cause)
    )]
    Execute {
        table: TableRef,
        completed: u64,
        iterations: u64,
        cause: anyhow::Error,
    },
}

/// Render an error chain on one line.
///
/// Causes are joined with `": "`, skipping a cause its parent already
/// printed; line breaks inside a cause (such as the `DETAIL:` and `HINT:`
/// lines of a server error) become `"; "`.
pub(crate) fn single_line(cause: &anyhow::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    for e in cause.chain() {
        let part = e
            .to_string()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("; ");
        if parts.last().is_some_and(|parent| parent.ends_with(&part)) {
            continue;
        }
        parts.push(part);
    }
    parts.join(": ")
}
