//! Shared testing utilities for stratos-deploy CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated deploy directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    deploy_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create an isolated environment with an empty deploy directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let deploy_dir = root.path().join("deploy");
        fs::create_dir_all(&deploy_dir).expect("Failed to create test deploy directory");

        Self { root, deploy_dir }
    }

    /// Path to the deploy directory used for CLI invocations.
    pub fn deploy_dir(&self) -> &Path {
        &self.deploy_dir
    }

    /// Write a jobspec and policy file into the deploy directory.
    pub fn write_deploy_files(&self, jobspec: &str, policy: &str) {
        fs::write(self.deploy_dir.join("job.hcl"), jobspec).expect("Failed to write job.hcl");
        fs::write(self.deploy_dir.join("policy.hcl"), policy).expect("Failed to write policy.hcl");
    }

    /// Build a command for the compiled `stratos-deploy` binary pointed at the
    /// given orchestrator and secrets-manager addresses.
    pub fn cli(&self, nomad_addr: &str, vault_addr: &str) -> Command {
        let mut cmd =
            Command::cargo_bin("stratos-deploy").expect("Failed to locate stratos-deploy binary");
        cmd.current_dir(self.root.path())
            .env("NOMAD_ADDR", nomad_addr)
            .env("NOMAD_TOKEN", "test-nomad-token")
            .env("VAULT_ADDR", vault_addr)
            .env("VAULT_TOKEN", "test-vault-token");
        cmd
    }
}
