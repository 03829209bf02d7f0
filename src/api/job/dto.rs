use serde::{Deserialize, Serialize};
use validator::Validate;

use super::models::{JobStatus, NewJob};

/// Payload for `POST /api/job/`
///
/// `status` may be omitted or `null`, in which case the job starts out
/// `unassigned`. Fields not listed here (a client-sent `id`, for one) are ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct CreateJobRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "Message must be between 1 and 255 characters"
    ))]
    pub message: String,
    #[serde(default)]
    pub status: Option<JobStatus>,
}

impl CreateJobRequest {
    /// Resolve the default status. Call only after `validate()` succeeded.
    pub fn into_new_job(self) -> NewJob {
        NewJob {
            name: self.name,
            message: self.message,
            status: self.status.unwrap_or_default(),
        }
    }
}
