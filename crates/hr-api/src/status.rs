use core::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a remote job (geometry import, mesh operation, run).
///
/// Statuses the service documents are typed; anything else is carried
/// verbatim so it can still be printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Ready,
    Queued,
    Running,
    Finished,
    Failed,
    Canceled,
    Other(String),
}

impl JobStatus {
    /// Only FINISHED and FAILED end a poll loop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Finished | JobStatus::Failed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Ready => "READY",
            JobStatus::Queued => "QUEUED",
            JobStatus::Running => "RUNNING",
            JobStatus::Finished => "FINISHED",
            JobStatus::Failed => "FAILED",
            JobStatus::Canceled => "CANCELED",
            JobStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "READY" => JobStatus::Ready,
            "QUEUED" => JobStatus::Queued,
            "RUNNING" => JobStatus::Running,
            "FINISHED" => JobStatus::Finished,
            "FAILED" => JobStatus::Failed,
            "CANCELED" => JobStatus::Canceled,
            _ => JobStatus::Other(raw),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
