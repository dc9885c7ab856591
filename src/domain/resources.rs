//! Declarative resource descriptors for one provisioning pass.
//!
//! Every descriptor is fully determined by static literals plus file contents read
//! at apply time. Nothing here is mutated after construction and nothing outlives a
//! single pass.

use std::path::PathBuf;

use serde::Serialize;

/// Reference to a previously registered resource, used for dependency ordering.
///
/// Sequencing hook only: today no descriptor declares prerequisites, so the
/// orchestrator sees jobs in mapping order with no edges between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef(pub String);

/// HCL2 DSL flags carried on a job submission.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Hcl2Options {
    /// Enable the HCL2 jobspec language instead of the raw JSON format.
    pub enabled: bool,
    /// Allow the jobspec to read sibling files by relative path.
    pub allow_fs: bool,
}

impl Default for Hcl2Options {
    fn default() -> Self {
        Self { enabled: true, allow_fs: true }
    }
}

/// One named job to register with the orchestrator.
#[derive(Debug, Clone)]
pub struct JobDescriptor {
    /// Job identifier; doubles as the orchestrator resource name.
    pub name: String,
    /// Path to the jobspec file, read verbatim at apply time.
    pub spec_path: PathBuf,
    /// When false, the submission call waits for placement acceptance.
    pub detach: bool,
    /// DSL flags for the submission.
    pub hcl2: Hcl2Options,
    /// Prerequisite resources (e.g. volumes). Always empty today.
    pub depends_on: Vec<ResourceRef>,
}

impl JobDescriptor {
    /// Describe a job whose spec lives at `spec_path`, submitted synchronously
    /// with the HCL2 DSL and filesystem access enabled.
    pub fn new<N: Into<String>>(name: N, spec_path: PathBuf) -> Self {
        Self {
            name: name.into(),
            spec_path,
            detach: false,
            hcl2: Hcl2Options::default(),
            depends_on: Vec::new(),
        }
    }
}

/// A named ACL policy to register with the secrets manager.
#[derive(Debug, Clone)]
pub struct PolicyDescriptor {
    /// Policy name.
    pub name: String,
    /// Path to the HCL policy rules, read verbatim at apply time.
    pub rules_path: PathBuf,
}

/// A raw write into the secrets manager's configuration tree.
#[derive(Debug, Clone)]
pub struct EndpointWrite {
    /// Mount-relative path, e.g. `acme/roles/acme-example`.
    pub path: String,
    /// Skip reading the endpoint back after writing. Some endpoints are
    /// write-only and answer reads with 404.
    pub read_disabled: bool,
    /// Forbid deleting the endpoint on a future teardown pass. Dormant: no
    /// teardown exists yet, the flag is carried as data only.
    pub delete_disabled: bool,
    /// JSON body, serialized compactly before transmission.
    pub payload: serde_json::Value,
}

/// Certificate-issuance role configuration written under the ACME mount.
#[derive(Debug, Clone, Serialize)]
pub struct CertRole {
    /// CA backend account name.
    pub account: String,
    /// Domain the role may issue for.
    pub allowed_domains: String,
    /// Whether subdomains of `allowed_domains` may be issued.
    pub allow_subdomains: bool,
    /// Whether the bare domain itself may be issued.
    pub allow_bare_domains: bool,
}
