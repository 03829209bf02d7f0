use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a job
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Unassigned,
    Open,
    Completed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [JobStatus::Unassigned, JobStatus::Open, JobStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Unassigned => "unassigned",
            JobStatus::Open => "open",
            JobStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseJobStatusError(pub String);

impl fmt::Display for ParseJobStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid job status '{}', expected one of: unassigned, open, completed",
            self.0
        )
    }
}

impl std::error::Error for ParseJobStatusError {}

/// Accepts only the lowercase names; any non-string value is an invalid type
/// error expecting "job status".
impl<'de> Deserialize<'de> for JobStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatusVisitor;

        impl Visitor<'_> for StatusVisitor {
            type Value = JobStatus;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("job status")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<JobStatus, E> {
                v.parse()
                    .map_err(|_| E::unknown_variant(v, &["unassigned", "open", "completed"]))
            }
        }

        deserializer.deserialize_str(StatusVisitor)
    }
}

impl FromStr for JobStatus {
    type Err = ParseJobStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseJobStatusError(s.to_string()))
    }
}

/// A persisted job as returned by the store and the API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: i32,
    pub status: JobStatus,
    pub name: String,
    pub message: String,
}

/// A validated job that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub name: String,
    pub message: String,
    pub status: JobStatus,
}
