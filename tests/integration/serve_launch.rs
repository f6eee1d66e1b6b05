use std::fs;

use tempfile::tempdir;

use crate::common::run_binary;

// Serve runs against scratch projects that have no server script, so every
// toolchain attempt fails fast and the binary exits instead of blocking.

#[test]
fn serve_surfaces_the_generic_failure_message() {
    let temp = tempdir().expect("can create temporary directory");
    let manifest = temp.path().join("extension.toml");
    fs::write(
        &manifest,
        r#"
[extension]
type = "checkout_ui"
title = "Gift Note"

[env]
shop = "gift-note.lattice.dev"
api_key = "abc123"
"#,
    )
    .expect("can write manifest");

    let output = run_binary(&["--manifest", manifest.to_str().expect("utf-8 path")])
        .expect("serve should run");

    assert!(
        !output.status.success(),
        "serve must fail without a server script"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("the development server could not be started"),
        "stderr: {stderr}"
    );
}

#[test]
fn serve_aborts_with_missing_information_when_stdin_is_closed() {
    let temp = tempdir().expect("can create temporary directory");
    let manifest = temp.path().join("extension.toml");
    fs::write(
        &manifest,
        r#"
[extension]
type = "checkout_ui"
title = "Gift Note"

[env]
api_key = "abc123"
"#,
    )
    .expect("can write manifest");

    let output = run_binary(&["--manifest", manifest.to_str().expect("utf-8 path")])
        .expect("serve should run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("missing required project configuration: shop"),
        "stderr: {stderr}"
    );
}

#[test]
fn serve_rejects_a_project_without_a_manifest() {
    let temp = tempdir().expect("can create temporary directory");
    let manifest = temp.path().join("extension.toml");

    let output = run_binary(&["--manifest", manifest.to_str().expect("utf-8 path")])
        .expect("serve should run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to read project manifest"),
        "stderr: {stderr}"
    );
}
