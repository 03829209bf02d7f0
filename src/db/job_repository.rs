use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::api::job::models::{Job, NewJob};
use crate::db::models::JobRow;
use crate::db::repository::JobRepository;

/// PostgreSQL-backed job store
pub struct PgJobRepository {
    pool: Pool<Postgres>,
}

impl PgJobRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn insert(&self, job: &NewJob) -> Result<Job, sqlx::Error> {
        debug!("Creating job: name={}, status={}", job.name, job.status);

        let row = sqlx::query_as::<_, JobRow>(
            r#"
            INSERT INTO jobs (status, name, message)
            VALUES ($1, $2, $3)
            RETURNING id, status, name, message
            "#,
        )
        .bind(job.status.as_str())
        .bind(&job.name)
        .bind(&job.message)
        .fetch_one(&self.pool)
        .await?;

        debug!("Job created with id={}", row.id);
        Job::try_from(row)
    }

    async fn list(&self) -> Result<Vec<Job>, sqlx::Error> {
        let rows = sqlx::query_as::<_, JobRow>(
            "SELECT id, status, name, message FROM jobs ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} jobs", rows.len());
        rows.into_iter().map(Job::try_from).collect()
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
