pub mod models;
pub mod dto;
pub mod handlers;
pub mod service;

// Re-export commonly used types
pub use dto::CreateJobRequest;
pub use models::{Job, JobStatus};
pub use service::JobService;
