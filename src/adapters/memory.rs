//! In-memory port implementations for testing.

use std::sync::{Arc, Mutex};

use crate::domain::{AppError, EndpointWrite};
use crate::ports::{JobHandle, JobSubmission, Orchestrator, SecretsStore};

/// Recording orchestrator that accepts every submission.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrchestrator {
    // Arc<Mutex> so clones share one call log
    submissions: Arc<Mutex<Vec<JobSubmission>>>,
}

#[allow(dead_code)]
impl MemoryOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions received so far, in call order.
    pub fn submissions(&self) -> Vec<JobSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

impl Orchestrator for MemoryOrchestrator {
    fn submit_job(&self, submission: JobSubmission) -> Result<JobHandle, AppError> {
        let handle = JobHandle { job_id: submission.name.clone(), status: "registered".into() };
        self.submissions.lock().unwrap().push(submission);
        Ok(handle)
    }
}

/// Recording secrets store that accepts every write.
#[derive(Debug, Clone, Default)]
pub struct MemorySecretsStore {
    policies: Arc<Mutex<Vec<(String, String)>>>,
    endpoints: Arc<Mutex<Vec<EndpointWrite>>>,
}

#[allow(dead_code)]
impl MemorySecretsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(name, rules)` pairs registered so far, in call order.
    pub fn policies(&self) -> Vec<(String, String)> {
        self.policies.lock().unwrap().clone()
    }

    /// Endpoint writes received so far, in call order.
    pub fn endpoints(&self) -> Vec<EndpointWrite> {
        self.endpoints.lock().unwrap().clone()
    }
}

impl SecretsStore for MemorySecretsStore {
    fn write_policy(&self, name: &str, rules: &str) -> Result<(), AppError> {
        self.policies.lock().unwrap().push((name.to_string(), rules.to_string()));
        Ok(())
    }

    fn write_endpoint(&self, write: &EndpointWrite) -> Result<(), AppError> {
        self.endpoints.lock().unwrap().push(write.clone());
        Ok(())
    }
}
