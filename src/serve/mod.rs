//! Serve workflow: preflight validation, option building, server launch.
mod launcher;
mod options;
mod preflight;
mod renderer;

pub use launcher::{launch, CommandRunner, ToolchainRunner};
pub use options::{build_serve_options, ServeContext};
pub use preflight::{field_satisfied, EnvironmentValidator, NoopRemediator, Remediator};
pub use renderer::{resolve_renderer_version, RendererLookupError};

use std::path::Path;

use tracing::{error, info};

use crate::cli::ServeProfile;
use crate::lib::command::serve_commands;
use crate::lib::errors::{RuntimeExit, ServeError};
use crate::lib::telemetry::{self, ServeModeTelemetry, ServeSpan};
use crate::project::{FileProjectStore, ProjectStore, TerminalRemediator};
use crate::registry::{self, Capability, ExtensionSpec};

/// One serve invocation over injected collaborators.
///
/// Runs as the sole foreground activity: validation, option building, and
/// the launch each complete fully before the next begins, and the launch
/// blocks for the lifetime of the dev server process.
pub struct ServeWorkflow<'a> {
    pub spec: &'a ExtensionSpec,
    pub store: &'a dyn ProjectStore,
    pub remediator: &'a dyn Remediator,
    pub runner: &'a dyn CommandRunner,
    pub project_root: &'a Path,
    pub port: u16,
    pub tunnel_url: Option<String>,
}

impl ServeWorkflow<'_> {
    /// Run the workflow inside a serve session frame.
    pub async fn run(&self) -> Result<(), ServeError> {
        let session = ServeSpan::start(self.spec.id);
        info!(
            target: "lattice_dev::serve",
            extension_type = self.spec.id,
            port = self.port,
            "Serving extension"
        );

        let result = self.execute().await;
        match &result {
            Ok(()) => session.finish("completed"),
            Err(err) => {
                error!(
                    target: "lattice_dev::serve",
                    reason = %err.log_detail(),
                    "Serve session failed"
                );
                session.finish("failed");
            }
        }
        result
    }

    async fn execute(&self) -> Result<(), ServeError> {
        EnvironmentValidator::new(self.store, self.remediator)
            .validate(self.spec.required_fields)?;

        let manifest = self
            .store
            .current()
            .map_err(|err| ServeError::internal(err.to_string()))?;
        let renderer_version = if self.spec.capabilities.supports(Capability::RendererVersion) {
            let version =
                resolve_renderer_version(self.project_root, self.spec.renderer_package)
                    .map_err(|err| ServeError::internal(err.to_string()))?;
            Some(version)
        } else {
            None
        };

        let context = ServeContext {
            port: self.port,
            tunnel_url: self.tunnel_url.clone(),
            manifest,
            renderer_version,
        };
        let options = build_serve_options(self.spec.capabilities, &context);
        let commands = serve_commands(&options);

        launch(self.runner, &commands, self.project_root).await
    }
}

/// Serve the extension project described by the profile with the default
/// collaborators.
pub async fn run_serve(profile: ServeProfile) -> Result<(), RuntimeExit> {
    let store = FileProjectStore::new(profile.manifest_path.clone());
    let manifest = store.current().map_err(RuntimeExit::from_error)?;
    let spec = registry::find(&manifest.extension.type_id).ok_or_else(|| {
        RuntimeExit::from_message(format!(
            "unknown extension type `{}`",
            manifest.extension.type_id
        ))
    })?;

    telemetry::emit_serve_mode(&ServeModeTelemetry {
        extension_type: spec.id,
        port: profile.port,
        tunnel: profile.tunnel_url.is_some(),
        manifest_path: profile.manifest_path.to_string_lossy().as_ref(),
        launch_args: &profile.launch_args,
    });

    let remediator = TerminalRemediator::new(&store);
    let runner = ToolchainRunner;
    let workflow = ServeWorkflow {
        spec,
        store: &store,
        remediator: &remediator,
        runner: &runner,
        project_root: store.project_root(),
        port: profile.port,
        tunnel_url: profile.tunnel_url.clone(),
    };

    workflow.run().await.map_err(RuntimeExit::from_error)
}
