use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::api::job::models::{Job, NewJob};
use crate::db::repository::JobRepository;

/// In-process job store; contents are lost on restart
#[derive(Default)]
pub struct MemoryJobRepository {
    jobs: RwLock<Vec<Job>>,
}

impl MemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobRepository for MemoryJobRepository {
    async fn insert(&self, job: &NewJob) -> Result<Job, sqlx::Error> {
        let mut jobs = self.jobs.write().await;
        // Ids are never reused since nothing is ever removed.
        let id = jobs.last().map_or(1, |last| last.id + 1);

        let job = Job {
            id,
            status: job.status,
            name: job.name.clone(),
            message: job.message.clone(),
        };
        jobs.push(job.clone());

        debug!("Job stored in memory with id={}", id);
        Ok(job)
    }

    async fn list(&self) -> Result<Vec<Job>, sqlx::Error> {
        Ok(self.jobs.read().await.clone())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn close(&self) {}
}
