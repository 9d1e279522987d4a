use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{PersistenceId, Timestamp};

/// Progress record of one submission, tracked by the caller that submitted it
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub job_id: PersistenceId,
    pub status: SubmissionStatus,
    /// id assigned by the execution engine
    pub external_id: Option<String>,
    pub external_link: Option<String>,
    /// 0.0 - 1.0, None when the engine does not report it
    pub progress: Option<f64>,
    pub creation_date: Timestamp,
    pub last_update_date: Timestamp,
    pub exception_info: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    /// accepted by the engine, not running yet
    Booting,
    FailureOnSubmit,
    Running,
    Succeeded,
    Failed,
    #[default]
    Unknown,
    NeverExecuted,
}

impl Submission {
    pub fn new(job_id: PersistenceId, status: SubmissionStatus, creation_date: Timestamp) -> Self {
        Self {
            job_id,
            status,
            external_id: None,
            external_link: None,
            progress: None,
            creation_date,
            last_update_date: creation_date,
            exception_info: None,
        }
    }
}

impl SubmissionStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Booting | Self::Running)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FailureOnSubmit | Self::Failed)
    }

    pub fn unfinished() -> &'static [SubmissionStatus] {
        &[Self::Booting, Self::Running]
    }
}

impl Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            Self::Booting => "BOOTING",
            Self::FailureOnSubmit => "FAILURE_ON_SUBMIT",
            Self::Running => "RUNNING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
            Self::Unknown => "UNKNOWN",
            Self::NeverExecuted => "NEVER_EXECUTED",
        };
        write!(f, "{str}")
    }
}
