use async_trait::async_trait;

use crate::api::job::models::{Job, NewJob};

/// Storage interface for jobs
///
/// Implementations must make `insert` atomic per record and return jobs from
/// `list` in insertion order.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Persist a validated job and return it with its assigned id
    async fn insert(&self, job: &NewJob) -> Result<Job, sqlx::Error>;

    /// All jobs, ordered by id
    async fn list(&self) -> Result<Vec<Job>, sqlx::Error>;

    /// Cheap connectivity probe used by the health endpoints
    async fn ping(&self) -> Result<(), sqlx::Error>;

    /// Release underlying resources
    async fn close(&self);
}
