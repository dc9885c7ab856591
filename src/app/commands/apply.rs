//! Execute one provisioning pass: jobs, then policy, then the certificate role.

use std::collections::BTreeMap;
use std::fs;

use crate::app::AppContext;
use crate::domain::{AppError, DeploymentPlan};
use crate::ports::{JobHandle, JobSubmission, Orchestrator, SecretsStore};

/// Handles for everything the pass registered.
#[derive(Debug)]
pub struct ApplySummary {
    /// Submitted jobs, keyed by job identifier.
    pub jobs: BTreeMap<String, JobHandle>,
    /// Name of the registered policy.
    pub policy: String,
    /// Path of the written role endpoint.
    pub role_path: String,
}

/// Execute the apply command.
///
/// The three registrants run sequentially with no rollback; a failure leaves
/// earlier registrations in place (upsert semantics on re-run belong to the
/// external APIs). Each input file is read in full before its network call, so
/// a missing file aborts that resource before anything is transmitted.
pub fn execute<O, S>(ctx: &AppContext<O, S>, plan: &DeploymentPlan) -> Result<ApplySummary, AppError>
where
    O: Orchestrator,
    S: SecretsStore,
{
    let mut jobs = BTreeMap::new();
    for (name, descriptor) in &plan.jobs {
        // depends_on is a dormant sequencing hook; nothing declares
        // prerequisites yet, so there is no ordering to resolve.
        debug_assert!(descriptor.depends_on.is_empty());

        let jobspec = fs::read_to_string(&descriptor.spec_path)?;
        let handle = ctx.orchestrator().submit_job(JobSubmission {
            name: descriptor.name.clone(),
            jobspec,
            detach: descriptor.detach,
            hcl2: descriptor.hcl2,
        })?;
        jobs.insert(name.clone(), handle);
    }

    let rules = fs::read_to_string(&plan.policy.rules_path)?;
    ctx.secrets().write_policy(&plan.policy.name, &rules)?;

    ctx.secrets().write_endpoint(&plan.role)?;

    Ok(ApplySummary {
        jobs,
        policy: plan.policy.name.clone(),
        role_path: plan.role.path.clone(),
    })
}
