//! The per-table insert loop.

use crate::error::FeedError;
use crate::session::Session;
use loadtest_generator::GeneratorSpec;
use rand::Rng;
use std::time::{Duration, Instant};
use sync_core::{TableRef, Value};
use tracing::debug;

/// Rows between progress log lines.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Metrics from one [`FeedJob::run`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedMetrics {
    /// Number of rows inserted.
    pub rows_inserted: u64,
    /// Total time taken.
    pub duration: Duration,
}

impl FeedMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// One table's unit of work: a prepared statement, the generators aligned
/// with its parameters, and how many rows to insert.
///
/// Each call to [`run`](Self::run) inserts `iterations` more rows.
pub struct FeedJob<St> {
    table: TableRef,
    statement: St,
    generators: Vec<GeneratorSpec>,
    iterations: u64,
}

impl<St> FeedJob<St> {
    pub fn new(
        table: TableRef,
        statement: St,
        generators: Vec<GeneratorSpec>,
        iterations: u64,
    ) -> Self {
        Self {
            table,
            statement,
            generators,
            iterations,
        }
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Invoke every generator once, in order.
    pub fn next_values<R: Rng>(&self, rng: &mut R) -> Vec<Value> {
        self.generators.iter().map(|g| g.generate(rng)).collect()
    }

    /// Insert `iterations` rows, one execute per row.
    ///
    /// Stops at the first failed execute; rows already inserted remain.
    pub async fn run<S, R>(&self, session: &S, rng: &mut R) -> Result<FeedMetrics, FeedError>
    where
        S: Session<Statement = St>,
        R: Rng,
    {
        let start_time = Instant::now();

        for iteration in 0..self.iterations {
            let values = self.next_values(rng);

            session
                .execute(&self.statement, &values)
                .await
                .map_err(|cause| FeedError::Execute {
                    table: self.table.clone(),
                    completed: iteration,
                    iterations: self.iterations,
                    cause,
                })?;

            let done = iteration + 1;
            if done % PROGRESS_INTERVAL == 0 {
                debug!(
                    "{}: {} rows inserted, {} remaining",
                    self.table,
                    done,
                    self.iterations - done
                );
            }
        }

        Ok(FeedMetrics {
            rows_inserted: self.iterations,
            duration: start_time.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::InsertStatement;
    use crate::testing::FakeDatabase;
    use loadtest_generator::{generators_for, GeneratorOptions};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sync_core::{ColumnDescriptor, TypeTag};

    fn job(db: &FakeDatabase, iterations: u64) -> FeedJob<InsertStatement> {
        let table = TableRef::new("ks", "t");
        let columns = db.columns(&table);
        let generators = generators_for(&columns, &GeneratorOptions::default()).unwrap();
        let statement = InsertStatement::new(table.clone(), &columns);
        FeedJob::new(table, statement, generators, iterations)
    }

    fn db() -> FakeDatabase {
        FakeDatabase::new().with_table(
            "ks",
            "t",
            vec![
                ColumnDescriptor::new("id", TypeTag::Uuid),
                ColumnDescriptor::new("name", TypeTag::Text),
                ColumnDescriptor::new("score", TypeTag::Int),
            ],
        )
    }

    #[tokio::test]
    async fn test_runs_exactly_iterations() {
        let db = db();
        let mut rng = StdRng::seed_from_u64(42);

        let metrics = job(&db, 5).run(&db, &mut rng).await.unwrap();

        assert_eq!(metrics.rows_inserted, 5);
        assert_eq!(db.executed().len(), 5);
    }

    #[tokio::test]
    async fn test_zero_iterations() {
        let db = db();
        let mut rng = StdRng::seed_from_u64(42);

        let metrics = job(&db, 0).run(&db, &mut rng).await.unwrap();

        assert_eq!(metrics.rows_inserted, 0);
        assert!(db.executed().is_empty());
    }

    #[tokio::test]
    async fn test_values_align_with_parameters() {
        let db = db();
        let mut rng = StdRng::seed_from_u64(42);

        job(&db, 3).run(&db, &mut rng).await.unwrap();

        for (_, values) in db.executed() {
            assert_eq!(values.len(), 3);
            assert!(matches!(values[0], Value::Uuid(_)));
            assert!(matches!(values[1], Value::Text(_)));
            assert!(matches!(values[2], Value::Int(_)));
        }
    }

    #[tokio::test]
    async fn test_run_twice_inserts_twice() {
        let db = db();
        let mut rng = StdRng::seed_from_u64(42);
        let job = job(&db, 4);

        job.run(&db, &mut rng).await.unwrap();
        job.run(&db, &mut rng).await.unwrap();

        assert_eq!(db.executed().len(), 8);
    }

    #[tokio::test]
    async fn test_failed_execute_aborts_remaining_iterations() {
        let db = db().failing_after(TableRef::new("ks", "t"), 2);
        let mut rng = StdRng::seed_from_u64(42);

        let err = job(&db, 10).run(&db, &mut rng).await.unwrap_err();

        match err {
            FeedError::Execute {
                completed,
                iterations,
                ..
            } => {
                assert_eq!(completed, 2);
                assert_eq!(iterations, 10);
            }
            other => panic!("Expected Execute error, got {other:?}"),
        }
        assert_eq!(db.executed().len(), 2);
    }

    #[test]
    fn test_metrics() {
        let metrics = FeedMetrics {
            rows_inserted: 1000,
            duration: Duration::from_secs(10),
        };
        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(FeedMetrics::default().rows_per_second(), 0.0);
    }
}
