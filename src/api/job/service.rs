use actix_web::{HttpResponse, ResponseError};
use std::fmt;
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::{Validate, ValidationErrors};

use crate::api::validation::ErrorResponse;
use crate::db::JobRepository;
use super::dto::CreateJobRequest;
use super::models::Job;

/// Service-level errors
#[derive(Debug)]
pub enum ServiceError {
    /// Storage operation failed
    DatabaseError(sqlx::Error),

    /// Request violated a field constraint
    ValidationError(ValidationErrors),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::DatabaseError(e) => write!(f, "Database error: {}", e),
            ServiceError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::DatabaseError(e)
    }
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::DatabaseError(e) => {
                error!("Database error: {}", e);
                HttpResponse::InternalServerError().json(ErrorResponse {
                    error: "Failed to process request".to_string(),
                    fields: serde_json::json!({"message": "Database error occurred"}),
                })
            }
            ServiceError::ValidationError(errors) => {
                HttpResponse::BadRequest().json(ErrorResponse::validation(errors))
            }
        }
    }
}

/// Job service containing business logic
pub struct JobService {
    repo: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(repo: Arc<dyn JobRepository>) -> Self {
        Self { repo }
    }

    /// Validate and persist a new job
    ///
    /// Validation runs here as well as in the JSON extractor so that every
    /// caller (HTTP or CLI) goes through the same checks. Nothing is written
    /// when validation fails.
    pub async fn create_job(&self, request: CreateJobRequest) -> Result<Job, ServiceError> {
        if let Err(errors) = request.validate() {
            warn!("Service: Validation failed for job: {}", errors);
            return Err(ServiceError::ValidationError(errors));
        }

        let new_job = request.into_new_job();
        info!("Service: Creating job with name={}, status={}", new_job.name, new_job.status);

        let job = self.repo.insert(&new_job).await?;

        info!("Service: Job created successfully with id={}", job.id);
        Ok(job)
    }

    /// All jobs in insertion order
    pub async fn list_jobs(&self) -> Result<Vec<Job>, ServiceError> {
        let jobs = self.repo.list().await?;
        info!("Service: Listed {} jobs", jobs.len());
        Ok(jobs)
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        self.repo.ping().await
    }
}
