//! Client configuration for the external provisioning APIs.

use std::env;

use url::Url;

use crate::domain::AppError;

/// Workload orchestrator (Nomad) connection settings.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Orchestrator API base address.
    pub address: Url,
    /// ACL token sent with each request; empty when the cluster runs without ACLs.
    pub token: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self { address: default_orchestrator_address(), token: String::new(), timeout_secs: 30 }
    }
}

impl OrchestratorConfig {
    /// Read settings from `NOMAD_ADDR` / `NOMAD_TOKEN`, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Ok(addr) = env::var("NOMAD_ADDR") {
            config.address = Url::parse(&addr)
                .map_err(|e| AppError::Configuration(format!("Invalid NOMAD_ADDR '{addr}': {e}")))?;
        }
        if let Ok(token) = env::var("NOMAD_TOKEN") {
            config.token = token;
        }
        Ok(config)
    }
}

/// Secrets manager (Vault) connection settings.
#[derive(Debug, Clone)]
pub struct SecretsConfig {
    /// Secrets manager API base address.
    pub address: Url,
    /// Authentication token. Required; every provisioning write is authenticated.
    pub token: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl SecretsConfig {
    /// Read settings from `VAULT_ADDR` / `VAULT_TOKEN`.
    ///
    /// The token has no sensible default and missing it is a configuration error.
    pub fn from_env() -> Result<Self, AppError> {
        let address = match env::var("VAULT_ADDR") {
            Ok(addr) => Url::parse(&addr)
                .map_err(|e| AppError::Configuration(format!("Invalid VAULT_ADDR '{addr}': {e}")))?,
            Err(_) => default_secrets_address(),
        };
        let token = env::var("VAULT_TOKEN").map_err(|_| {
            AppError::Configuration("VAULT_TOKEN environment variable not set".into())
        })?;

        Ok(Self { address, token, timeout_secs: 30 })
    }
}

fn default_orchestrator_address() -> Url {
    Url::parse("http://localhost:4646").expect("default orchestrator address is valid")
}

fn default_secrets_address() -> Url {
    Url::parse("http://localhost:8200").expect("default secrets address is valid")
}
