use sqlx::FromRow;

use crate::api::job::models::{Job, JobStatus};

/// Database representation of a job
#[derive(Debug, FromRow)]
pub struct JobRow {
    pub id: i32,
    pub status: String,
    pub name: String,
    pub message: String,
}

impl TryFrom<JobRow> for Job {
    type Error = sqlx::Error;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let status: JobStatus = row
            .status
            .parse()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Job {
            id: row.id,
            status,
            name: row.name,
            message: row.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str) -> JobRow {
        JobRow {
            id: 1,
            status: status.to_string(),
            name: "Deploy".to_string(),
            message: "Deploy service X".to_string(),
        }
    }

    #[test]
    fn converts_known_status() {
        let job = Job::try_from(row("completed")).unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.id, 1);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(matches!(Job::try_from(row("new")), Err(sqlx::Error::Decode(_))));
    }
}
