//! Telemetry initialization and serve session span helpers.

use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a serve session.
///
/// This is the visual frame around a serve attempt: opened before preflight
/// validation begins and closed after the launch attempt, so failures report
/// into the same enclosing scope.
pub struct ServeSpan {
    span: Span,
    started_at: Instant,
    session_id: Uuid,
}

impl ServeSpan {
    /// Open a serve session span.
    pub fn start(extension_type: &'static str) -> Self {
        let session_id = Uuid::new_v4();
        let span = info_span!(
            target: "lattice_dev::serve",
            "serve_session",
            %session_id,
            extension_type
        );
        Self {
            span,
            started_at: Instant::now(),
            session_id,
        }
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "lattice_dev::serve",
            session_id = %self.session_id,
            status = status,
            elapsed_ms = elapsed_ms,
            "Closed serve session"
        );
    }
}

/// Payload for logging the resolved serve mode as structured telemetry.
#[derive(Debug, Serialize)]
pub struct ServeModeTelemetry<'a> {
    pub extension_type: &'a str,
    pub port: u16,
    pub tunnel: bool,
    pub manifest_path: &'a str,
    pub launch_args: &'a [String],
}

/// Emit the resolved serve mode to `tracing`.
pub fn emit_serve_mode(telemetry: &ServeModeTelemetry<'_>) {
    info!(
        target: "lattice_dev::runtime",
        extension_type = telemetry.extension_type,
        port = telemetry.port,
        tunnel = telemetry.tunnel,
        manifest_path = telemetry.manifest_path,
        launch_args = ?telemetry.launch_args,
        "Resolved serve profile"
    );
}
