//! Run configuration.

use crate::args::CommonFeedArgs;
use loadtest_generator::GeneratorOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default number of rows inserted per table.
pub const DEFAULT_ITERATIONS: u64 = 100;

/// Immutable settings for one run over a list of tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Namespace used for unqualified table identifiers
    pub default_namespace: Option<String>,
    /// Rows inserted per table
    pub iterations: u64,
    /// Base seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Length bounds for text and blob generators
    pub generator_options: GeneratorOptions,
    /// Prepare statements but skip inserts
    pub dry_run: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_namespace: None,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            generator_options: GeneratorOptions::default(),
            dry_run: false,
        }
    }
}

impl From<&CommonFeedArgs> for FeedConfig {
    fn from(args: &CommonFeedArgs) -> Self {
        Self {
            default_namespace: args.namespace.clone(),
            iterations: args.iterations,
            seed: args.seed,
            generator_options: GeneratorOptions {
                max_text_len: args.max_text_length,
                max_binary_len: args.max_binary_length,
            },
            dry_run: args.dry_run,
        }
    }
}

impl FeedConfig {
    /// RNG for the table at `position` in the request list.
    ///
    /// With a seed, each position gets its own derived stream so a table's
    /// data does not depend on how many rows earlier tables consumed.
    pub fn rng_for_table(&self, position: usize) -> StdRng {
        match self.seed {
            Some(seed) => {
                let offset = (position as u64).wrapping_mul(0x9E3779B97F4A7C15);
                StdRng::seed_from_u64(seed.wrapping_add(offset))
            }
            None => StdRng::from_os_rng(),
        }
    }
}
