//! Domain types: resource descriptors, the deployment plan, client configuration,
//! and the library-wide error type.

mod config;
mod error;
mod plan;
mod resources;

pub use config::{OrchestratorConfig, SecretsConfig};
pub use error::AppError;
pub use plan::{DeploymentPlan, DEFAULT_MOUNT_PREFIX, JOB_SPEC_FILE, POLICY_FILE, SERVICE_NAME};
pub use resources::{
    CertRole, EndpointWrite, Hcl2Options, JobDescriptor, PolicyDescriptor, ResourceRef,
};
