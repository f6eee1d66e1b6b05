//! CLI entrypoint module structure.
use anyhow::{anyhow, Result};
use serde_json::json;
use tracing::warn;

use crate::lib::command::serve_commands;
use crate::lib::errors::ServeError;
use crate::project::{FileProjectStore, ProjectStore};
use crate::registry::{self, Capability};
use crate::serve::{
    build_serve_options, resolve_renderer_version, EnvironmentValidator, NoopRemediator,
    ServeContext,
};

pub mod args;
pub mod profile;

pub use args::{CliCommand, ParsedCommand, ServeProfileArgs};
pub use profile::{
    build_launch_args, normalize_tunnel_url, resolve_manifest_path, ServeProfile, DEFAULT_PORT,
};

/// Execute utility command mode and return a user-facing result payload.
pub fn execute_cli_command(command: CliCommand, profile: &ServeProfile) -> Result<String> {
    match command {
        CliCommand::Check => execute_check(profile),
    }
}

/// Non-interactive preflight report: missing required fields, resolved serve
/// options, and the command variants that would be attempted.
fn execute_check(profile: &ServeProfile) -> Result<String> {
    let store = FileProjectStore::new(profile.manifest_path.clone());
    let manifest = store.current()?;
    let spec = registry::find(&manifest.extension.type_id).ok_or_else(|| {
        anyhow!(
            "unknown extension type `{}`",
            manifest.extension.type_id
        )
    })?;

    let validator = EnvironmentValidator::new(&store, &NoopRemediator);
    let missing: Vec<&'static str> = match validator.validate(spec.required_fields) {
        Ok(()) => Vec::new(),
        Err(ServeError::MissingInformation { fields }) => {
            fields.iter().map(|field| field.as_str()).collect()
        }
        Err(other) => return Err(anyhow!(other)),
    };

    let renderer_version = if spec.capabilities.supports(Capability::RendererVersion) {
        match resolve_renderer_version(store.project_root(), spec.renderer_package) {
            Ok(version) => Some(version),
            Err(err) => {
                warn!(
                    target: "lattice_dev::serve",
                    reason = %err,
                    "Renderer version could not be resolved"
                );
                None
            }
        }
    } else {
        None
    };

    let context = ServeContext {
        port: profile.port,
        tunnel_url: profile.tunnel_url.clone(),
        manifest,
        renderer_version: renderer_version.clone(),
    };
    let options = build_serve_options(spec.capabilities, &context);
    let commands = serve_commands(&options);

    let status = if missing.is_empty() {
        "ok"
    } else {
        "missing_information"
    };
    let payload = json!({
        "status": status,
        "extension_type": spec.id,
        "manifest_path": profile.manifest_path.to_string_lossy(),
        "missing_fields": missing,
        "renderer_version": renderer_version,
        "options": options,
        "commands": commands.iter().map(|spec| spec.rendered()).collect::<Vec<_>>(),
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}
