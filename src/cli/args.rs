//! CLI argument definitions and `ServeProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::{
    build_launch_args, normalize_tunnel_url, resolve_manifest_path, ServeProfile, DEFAULT_PORT,
};

/// Parsed command intent from CLI.
#[derive(Debug, Clone)]
pub enum ParsedCommand {
    Serve(ServeProfile),
    Cli(CliCommand, ServeProfile),
}

/// Optional utility commands.
#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// Print a preflight report for the project without launching anything.
    Check,
}

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Local development server launcher for Lattice UI extensions",
    long_about = None
)]
pub struct ServeProfileArgs {
    /// Port the development server listens on.
    #[arg(long, global = true, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Public tunnel URL forwarded to the development server.
    #[arg(long = "tunnel-url", global = true)]
    pub tunnel_url: Option<String>,
    /// Path to extension.toml (overrides LATTICE_MANIFEST_PATH).
    #[arg(long = "manifest", global = true)]
    pub manifest_override: Option<PathBuf>,
    /// Optional utility command mode.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl ServeProfileArgs {
    /// Build a `ServeProfile` from CLI args and environment variables.
    pub fn build(&self) -> Result<ServeProfile> {
        let manifest_path = resolve_manifest_path(self.manifest_override.clone())?;
        let tunnel_url = normalize_tunnel_url(self.tunnel_url.as_deref())?;
        let launch_args = build_launch_args(self.port, tunnel_url.as_deref(), &manifest_path);

        Ok(ServeProfile {
            manifest_path,
            port: self.port,
            tunnel_url,
            launch_args,
        })
    }

    /// Parse CLI args into either serve mode or utility command mode.
    pub fn into_command(self) -> Result<ParsedCommand> {
        let profile = self.build()?;
        Ok(match self.command {
            Some(command) => ParsedCommand::Cli(command, profile),
            None => ParsedCommand::Serve(profile),
        })
    }
}
