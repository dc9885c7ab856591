//! Workload orchestrator port definition.

use crate::domain::{AppError, Hcl2Options};

/// A fully resolved job submission: descriptor literals plus the jobspec text
/// read from disk, passed through byte-for-byte.
#[derive(Debug, Clone)]
pub struct JobSubmission {
    /// Job identifier; the orchestrator resource is created under this name.
    pub name: String,
    /// Raw jobspec text, exactly as read from the spec file.
    pub jobspec: String,
    /// When false, the call blocks until the orchestrator accepts placement.
    pub detach: bool,
    /// DSL flags.
    pub hcl2: Hcl2Options,
}

/// Handle to a job the orchestrator has accepted.
#[derive(Debug, Clone)]
pub struct JobHandle {
    /// Identifier the orchestrator assigned (normally equal to the submitted name).
    pub job_id: String,
    /// Orchestrator-reported status at acceptance time.
    pub status: String,
}

/// Client for the workload orchestrator's job API.
pub trait Orchestrator {
    /// Submit a job, waiting for the orchestrator to accept or reject it.
    fn submit_job(&self, submission: JobSubmission) -> Result<JobHandle, AppError>;
}
