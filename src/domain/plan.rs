//! The static deployment declaration for the acme-example service.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::{CertRole, EndpointWrite, JobDescriptor, PolicyDescriptor};

/// Service identifier; also the orchestrator job name and the policy name.
pub const SERVICE_NAME: &str = "acme-example";

/// Secrets-manager mount the certificate roles live under.
// TODO: read the mount from deployment configuration instead of defaulting here
pub const DEFAULT_MOUNT_PREFIX: &str = "acme";

/// Jobspec filename expected inside the deploy directory.
pub const JOB_SPEC_FILE: &str = "job.hcl";

/// Policy-rules filename expected inside the deploy directory.
pub const POLICY_FILE: &str = "policy.hcl";

/// Everything one provisioning pass registers, resolved against a deploy directory.
///
/// The job mapping is keyed by job identifier; keys are unique and iteration order
/// carries no meaning. It holds a single entry today but the registrant treats it
/// uniformly so further services can be declared without code changes.
#[derive(Debug, Clone)]
pub struct DeploymentPlan {
    /// Named jobs to submit to the orchestrator.
    pub jobs: BTreeMap<String, JobDescriptor>,
    /// ACL policy to register with the secrets manager.
    pub policy: PolicyDescriptor,
    /// Certificate-role endpoint to write.
    pub role: EndpointWrite,
}

impl DeploymentPlan {
    /// Build the acme-example declaration rooted at `dir`, with certificate roles
    /// under `mount_prefix` (pass [`DEFAULT_MOUNT_PREFIX`] for the stock layout).
    pub fn acme_example(dir: &Path, mount_prefix: &str) -> Self {
        let mut jobs = BTreeMap::new();
        jobs.insert(
            SERVICE_NAME.to_string(),
            JobDescriptor::new(SERVICE_NAME, dir.join(JOB_SPEC_FILE)),
        );

        let policy = PolicyDescriptor {
            name: SERVICE_NAME.to_string(),
            rules_path: dir.join(POLICY_FILE),
        };

        let role = CertRole {
            account: "letsencrypt-staging".to_string(),
            allowed_domains: format!("{SERVICE_NAME}.prod.stratos.host"),
            allow_subdomains: true,
            allow_bare_domains: false,
        };
        let role = EndpointWrite {
            path: format!("{mount_prefix}/roles/{SERVICE_NAME}"),
            read_disabled: true,
            delete_disabled: false,
            payload: serde_json::to_value(role).expect("role payload is plain data"),
        };

        Self { jobs, policy, role }
    }
}
