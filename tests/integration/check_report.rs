use serde_json::Value;

use crate::common::{fixture, run_binary};

fn parse_payload(stdout: &[u8]) -> Value {
    let text = String::from_utf8_lossy(stdout);
    serde_json::from_str(text.trim()).unwrap_or_else(|err| {
        panic!("check must print a JSON payload ({err}); stdout: {text}")
    })
}

#[test]
fn check_reports_resolved_options_for_an_admin_project() {
    let manifest = fixture("tests/fixtures/project_admin/extension.toml");
    let output = run_binary(&["check", "--manifest", &manifest]).expect("check should run");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let payload = parse_payload(&output.stdout);

    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["extension_type"], "admin_ui");
    assert_eq!(payload["renderer_version"], "0.9.3");
    assert_eq!(
        payload["options"],
        serde_json::json!([
            "--port=39351",
            "--store=inventory-badges.lattice.dev",
            "--apiKey=2f7ad0f2c9e54c0fa1f2b1d3e4a5b6c7",
            "--rendererVersion=0.9.3",
            "--uuid=4b4d6d8e-8a5a-4f9c-9d3e-2b1f0c9a7e11",
            "--name=Inventory Badges",
        ])
    );
}

#[test]
fn check_includes_the_public_url_only_with_a_tunnel() {
    let manifest = fixture("tests/fixtures/project_checkout/extension.toml");

    let without = run_binary(&["check", "--manifest", &manifest]).expect("check should run");
    assert!(without.status.success());
    let payload = parse_payload(&without.stdout);
    let options = payload["options"].to_string();
    assert!(
        !options.contains("--publicUrl"),
        "options: {options}"
    );

    let with = run_binary(&[
        "check",
        "--manifest",
        &manifest,
        "--tunnel-url",
        "https://tunnel.example.dev",
    ])
    .expect("check should run");
    assert!(with.status.success());
    let payload = parse_payload(&with.stdout);
    let options = payload["options"].to_string();
    assert!(
        options.contains("--publicUrl=https://tunnel.example.dev"),
        "options: {options}"
    );
}

#[test]
fn check_reports_both_command_variants() {
    let manifest = fixture("tests/fixtures/project_checkout/extension.toml");
    let output = run_binary(&["check", "--manifest", &manifest]).expect("check should run");

    let payload = parse_payload(&output.stdout);
    let commands = payload["commands"]
        .as_array()
        .expect("commands must be an array");

    assert_eq!(commands.len(), 2);
    let yarn = commands[0].as_str().expect("command is a string");
    let npm = commands[1].as_str().expect("command is a string");
    assert!(yarn.starts_with("yarn server "), "yarn: {yarn}");
    assert!(npm.starts_with("npm run-script server -- "), "npm: {npm}");
}

#[test]
fn check_reports_missing_required_fields() {
    let manifest = fixture("tests/fixtures/extension_blank_shop.toml");
    let output = run_binary(&["check", "--manifest", &manifest]).expect("check should run");

    assert!(output.status.success());
    let payload = parse_payload(&output.stdout);
    assert_eq!(payload["status"], "missing_information");
    assert_eq!(payload["missing_fields"], serde_json::json!(["shop"]));
}

#[test]
fn check_fails_for_an_unknown_extension_type() {
    let manifest = fixture("tests/fixtures/extension_unknown_type.toml");
    let output = run_binary(&["check", "--manifest", &manifest]).expect("check should run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("extension.type"), "stderr: {stderr}");
}
