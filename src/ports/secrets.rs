//! Secrets manager port definition.

use crate::domain::{AppError, EndpointWrite};

/// Client for the secrets manager's policy and configuration-tree APIs.
pub trait SecretsStore {
    /// Register (upsert) an ACL policy under `name`. Rules are opaque text.
    fn write_policy(&self, name: &str, rules: &str) -> Result<(), AppError>;

    /// Write structured data to an arbitrary path in the configuration tree.
    fn write_endpoint(&self, write: &EndpointWrite) -> Result<(), AppError>;
}
