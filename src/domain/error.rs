use std::io;

use thiserror::Error;

/// Library-wide error type for stratos-deploy operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure (e.g. a missing jobspec or policy file).
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The orchestrator rejected or failed a job submission.
    #[error("Failed to register job '{job}': {message}")]
    Orchestrator { job: String, message: String },

    /// The secrets manager rejected a policy or endpoint write.
    #[error("Failed to write '{target}' to the secrets manager: {message}")]
    Secrets { target: String, message: String },
}

impl AppError {
    /// Build an orchestrator error naming the job identifier.
    pub fn orchestrator<J: Into<String>, M: Into<String>>(job: J, message: M) -> Self {
        AppError::Orchestrator { job: job.into(), message: message.into() }
    }

    /// Build a secrets-manager error naming the policy or endpoint path.
    pub fn secrets<T: Into<String>, M: Into<String>>(target: T, message: M) -> Self {
        AppError::Secrets { target: target.into(), message: message.into() }
    }
}
