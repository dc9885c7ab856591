//! stratos-deploy: register Nomad jobs and their Vault policies and
//! certificate-issuance roles in one synchronous provisioning pass.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::Path;

use adapters::{HttpNomadClient, HttpVaultClient};
use app::{commands::apply, AppContext};

pub use app::commands::apply::ApplySummary;
pub use domain::{AppError, DeploymentPlan, DEFAULT_MOUNT_PREFIX};

/// Run one provisioning pass for the deploy directory at `dir`.
///
/// Registers each declared job with the orchestrator, registers the ACL policy,
/// and writes the certificate-issuance role under `mount_prefix`. Clients are
/// configured from `NOMAD_ADDR`/`NOMAD_TOKEN` and `VAULT_ADDR`/`VAULT_TOKEN`.
pub fn apply(dir: &Path, mount_prefix: &str) -> Result<ApplySummary, AppError> {
    let orchestrator = HttpNomadClient::from_env()?;
    let secrets = HttpVaultClient::from_env()?;
    let ctx = AppContext::new(orchestrator, secrets);

    let plan = DeploymentPlan::acme_example(dir, mount_prefix);
    let summary = apply::execute(&ctx, &plan)?;

    for (name, handle) in &summary.jobs {
        println!("✅ Registered job '{}' ({})", name, handle.status);
    }
    println!("✅ Registered policy '{}'", summary.policy);
    println!("✅ Wrote role endpoint '{}'", summary.role_path);

    Ok(summary)
}
