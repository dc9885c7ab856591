mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn help_lists_apply_command() {
    let ctx = TestContext::new();

    ctx.cli("http://localhost:4646", "http://localhost:8200")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply"));
}

#[test]
fn apply_provisions_job_policy_and_role() {
    let ctx = TestContext::new();
    ctx.write_deploy_files("job \"x\" {}", "path \"secret/*\" {}");

    let mut nomad = mockito::Server::new();
    let job_mock = nomad
        .mock("POST", "/v1/jobs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "acme-example", "status": "running"}"#)
        .create();

    let mut vault = mockito::Server::new();
    let policy_mock = vault.mock("PUT", "/v1/sys/policies/acl/acme-example").with_status(204).create();
    let role_mock = vault.mock("PUT", "/v1/acme/roles/acme-example").with_status(204).create();

    ctx.cli(&nomad.url(), &vault.url())
        .args(["apply", "--dir", "deploy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered job 'acme-example'"))
        .stdout(predicate::str::contains("Registered policy 'acme-example'"))
        .stdout(predicate::str::contains("Wrote role endpoint 'acme/roles/acme-example'"));

    job_mock.assert();
    policy_mock.assert();
    role_mock.assert();
}

#[test]
fn apply_honors_a_custom_mount_prefix() {
    let ctx = TestContext::new();
    ctx.write_deploy_files("job \"x\" {}", "rules");

    let mut nomad = mockito::Server::new();
    let _job = nomad
        .mock("POST", "/v1/jobs")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create();

    let mut vault = mockito::Server::new();
    let _policy = vault.mock("PUT", "/v1/sys/policies/acl/acme-example").with_status(204).create();
    let role_mock = vault.mock("PUT", "/v1/pki-acme/roles/acme-example").with_status(204).create();

    ctx.cli(&nomad.url(), &vault.url())
        .args(["apply", "--dir", "deploy", "--mount-prefix", "pki-acme"])
        .assert()
        .success();

    role_mock.assert();
}

#[test]
fn apply_fails_before_any_network_call_when_jobspec_is_missing() {
    let ctx = TestContext::new();
    // Deploy directory exists but holds no files.

    let mut nomad = mockito::Server::new();
    let job_mock = nomad.mock("POST", "/v1/jobs").expect(0).create();

    let mut vault = mockito::Server::new();
    let policy_mock =
        vault.mock("PUT", "/v1/sys/policies/acl/acme-example").expect(0).create();

    ctx.cli(&nomad.url(), &vault.url())
        .args(["apply", "--dir", "deploy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    job_mock.assert();
    policy_mock.assert();
}

#[test]
fn apply_requires_a_vault_token() {
    let ctx = TestContext::new();
    ctx.write_deploy_files("job \"x\" {}", "rules");

    ctx.cli("http://localhost:4646", "http://localhost:8200")
        .env_remove("VAULT_TOKEN")
        .args(["apply", "--dir", "deploy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("VAULT_TOKEN"));
}
