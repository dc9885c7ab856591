//! Vault policy and generic-endpoint client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use url::Url;

use crate::domain::{AppError, EndpointWrite, SecretsConfig};
use crate::ports::SecretsStore;

const X_VAULT_TOKEN: &str = "X-Vault-Token";

/// HTTP client for the secrets manager's policy and configuration-tree APIs.
#[derive(Clone)]
pub struct HttpVaultClient {
    address: Url,
    token: String,
    client: Client,
}

impl std::fmt::Debug for HttpVaultClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpVaultClient")
            .field("address", &self.address)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpVaultClient {
    /// Create a new HTTP client from secrets-manager connection settings.
    pub fn new(config: &SecretsConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { address: config.address.clone(), token: config.token.clone(), client })
    }

    /// Create from `VAULT_ADDR` / `VAULT_TOKEN` with default settings.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(&SecretsConfig::from_env()?)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, AppError> {
        self.address
            .join(&format!("v1/{}", path))
            .map_err(|e| AppError::Configuration(format!("Invalid secrets address: {}", e)))
    }

    fn put(&self, target: &str, url: Url, body: String) -> Result<(), AppError> {
        let response = self
            .client
            .put(url)
            .header(X_VAULT_TOKEN, &self.token)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| AppError::secrets(target, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::secrets(
                target,
                format!("API error ({}): {}", status.as_u16(), error_text),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct PolicyRequest<'a> {
    policy: &'a str,
}

impl SecretsStore for HttpVaultClient {
    fn write_policy(&self, name: &str, rules: &str) -> Result<(), AppError> {
        let url = self.endpoint_url(&format!("sys/policies/acl/{}", name))?;
        let body = serde_json::to_string(&PolicyRequest { policy: rules })
            .map_err(|e| AppError::secrets(name, format!("Failed to serialize policy: {}", e)))?;

        self.put(name, url, body)
    }

    fn write_endpoint(&self, write: &EndpointWrite) -> Result<(), AppError> {
        let url = self.endpoint_url(&write.path)?;
        let body = serde_json::to_string(&write.payload)
            .map_err(|e| AppError::secrets(&write.path, format!("Failed to serialize payload: {}", e)))?;

        self.put(&write.path, url, body)?;

        // Write-only endpoints answer reads with 404, so verification is opt-out.
        if !write.read_disabled {
            let url = self.endpoint_url(&write.path)?;
            let response = self
                .client
                .get(url)
                .header(X_VAULT_TOKEN, &self.token)
                .send()
                .map_err(|e| AppError::secrets(&write.path, format!("HTTP request failed: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(AppError::secrets(
                    &write.path,
                    format!("Readback after write failed ({})", status.as_u16()),
                ));
            }
        }

        Ok(())
    }
}
