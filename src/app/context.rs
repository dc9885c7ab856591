use crate::ports::{Orchestrator, SecretsStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<O: Orchestrator, S: SecretsStore> {
    orchestrator: O,
    secrets: S,
}

impl<O: Orchestrator, S: SecretsStore> AppContext<O, S> {
    /// Create a new application context.
    pub fn new(orchestrator: O, secrets: S) -> Self {
        Self { orchestrator, secrets }
    }

    /// Get a reference to the orchestrator client.
    pub fn orchestrator(&self) -> &O {
        &self.orchestrator
    }

    /// Get a reference to the secrets-manager client.
    pub fn secrets(&self) -> &S {
        &self.secrets
    }
}
