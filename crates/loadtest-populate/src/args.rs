//! Common CLI argument definitions shared by all populators.

use clap::Args;
use std::path::PathBuf;

/// Arguments every populator accepts, whatever the database.
#[derive(Args, Clone, Debug)]
pub struct CommonFeedArgs {
    /// Default namespace (schema) for table identifiers given without one
    #[arg(
        long,
        short = 'k',
        visible_alias = "keyspace",
        env = "LOADTEST_FEED_NAMESPACE"
    )]
    pub namespace: Option<String>,

    /// Number of rows to insert into each table
    #[arg(long, short = 'n', default_value = "100")]
    pub iterations: u64,

    /// Random seed for reproducible values (clock-based columns still vary)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Exclusive upper bound for generated text lengths
    #[arg(long, default_value = "100")]
    pub max_text_length: usize,

    /// Exclusive upper bound for generated binary lengths
    #[arg(long, default_value = "100")]
    pub max_binary_length: usize,

    /// Dry-run mode: introspect and prepare, but insert nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON summary of the run to this path
    #[arg(long)]
    pub metrics_output: Option<PathBuf>,

    /// Tables to populate, as `namespace.table` or bare `table`
    #[arg(required = true, num_args = 1.., value_name = "TABLE")]
    pub tables: Vec<String>,
}
