//! Nomad job API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, Hcl2Options, OrchestratorConfig};
use crate::ports::{JobHandle, JobSubmission, Orchestrator};

const X_NOMAD_TOKEN: &str = "X-Nomad-Token";

/// HTTP client for the orchestrator's job registration API.
#[derive(Clone)]
pub struct HttpNomadClient {
    address: Url,
    token: String,
    client: Client,
}

impl std::fmt::Debug for HttpNomadClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpNomadClient")
            .field("address", &self.address)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpNomadClient {
    /// Create a new HTTP client from orchestrator connection settings.
    pub fn new(config: &OrchestratorConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { address: config.address.clone(), token: config.token.clone(), client })
    }

    /// Create from `NOMAD_ADDR` / `NOMAD_TOKEN` with default settings.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(&OrchestratorConfig::from_env()?)
    }
}

#[derive(Debug, Serialize)]
struct JobRequest<'a> {
    name: &'a str,
    jobspec: &'a str,
    detach: bool,
    hcl2: Hcl2Options,
}

#[derive(Debug, Deserialize)]
struct JobResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl Orchestrator for HttpNomadClient {
    fn submit_job(&self, submission: JobSubmission) -> Result<JobHandle, AppError> {
        let request = JobRequest {
            name: &submission.name,
            jobspec: &submission.jobspec,
            detach: submission.detach,
            hcl2: submission.hcl2,
        };

        let url = self
            .address
            .join("v1/jobs")
            .map_err(|e| AppError::Configuration(format!("Invalid orchestrator address: {}", e)))?;

        let mut builder = self.client.post(url).header(CONTENT_TYPE, "application/json");
        if !self.token.is_empty() {
            builder = builder.header(X_NOMAD_TOKEN, &self.token);
        }

        let response = builder
            .json(&request)
            .send()
            .map_err(|e| AppError::orchestrator(&submission.name, format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::orchestrator(
                &submission.name,
                format!("API error ({}): {}", status.as_u16(), error_text),
            ));
        }

        let body: JobResponse = response.json().map_err(|e| {
            AppError::orchestrator(&submission.name, format!("Failed to parse response: {}", e))
        })?;

        Ok(JobHandle {
            job_id: body.id.unwrap_or_else(|| submission.name.clone()),
            status: body.status.unwrap_or_else(|| "registered".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server) -> HttpNomadClient {
        let config = OrchestratorConfig {
            address: Url::parse(&server.url()).unwrap(),
            token: "test-token".into(),
            timeout_secs: 5,
        };
        HttpNomadClient::new(&config).unwrap()
    }

    fn submission() -> JobSubmission {
        JobSubmission {
            name: "acme-example".into(),
            jobspec: "job \"x\" {}".into(),
            detach: false,
            hcl2: Hcl2Options::default(),
        }
    }

    #[test]
    fn submit_job_posts_spec_text_and_dsl_flags() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/v1/jobs")
            .match_header(X_NOMAD_TOKEN, "test-token")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "acme-example",
                "jobspec": "job \"x\" {}",
                "detach": false,
                "hcl2": { "enabled": true, "allow_fs": true },
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "acme-example", "status": "running"}"#)
            .create();

        let handle = client_for(&server).submit_job(submission()).unwrap();
        mock.assert();
        assert_eq!(handle.job_id, "acme-example");
        assert_eq!(handle.status, "running");
    }

    #[test]
    fn submit_job_surfaces_rejection_naming_the_job() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/v1/jobs")
            .with_status(400)
            .with_body("invalid jobspec")
            .create();

        let err = client_for(&server).submit_job(submission()).unwrap_err();
        match err {
            AppError::Orchestrator { job, message } => {
                assert_eq!(job, "acme-example");
                assert!(message.contains("400"));
                assert!(message.contains("invalid jobspec"));
            }
            other => panic!("expected orchestrator error, got {:?}", other),
        }
    }

    #[test]
    fn submit_job_omits_token_header_when_unset() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/v1/jobs")
            .match_header(X_NOMAD_TOKEN, Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .create();

        let config = OrchestratorConfig {
            address: Url::parse(&server.url()).unwrap(),
            token: String::new(),
            timeout_secs: 5,
        };
        let client = HttpNomadClient::new(&config).unwrap();

        let handle = client.submit_job(submission()).unwrap();
        mock.assert();
        // Empty response body falls back to the submitted name.
        assert_eq!(handle.job_id, "acme-example");
        assert_eq!(handle.status, "registered");
    }
}
