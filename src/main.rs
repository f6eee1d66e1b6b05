//! Entry point for lattice-dev.
use std::process::ExitCode;

use clap::Parser;
use lattice_dev::{
    cli::{execute_cli_command, CliCommand, ParsedCommand, ServeProfile, ServeProfileArgs},
    lib::{errors::RuntimeExit, telemetry},
    serve,
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = ServeProfileArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::Serve(profile) => serve::run_serve(profile).await,
        ParsedCommand::Cli(command, profile) => handle_cli_command(command, &profile),
    }
}

fn handle_cli_command(command: CliCommand, profile: &ServeProfile) -> Result<(), RuntimeExit> {
    let message = execute_cli_command(command, profile).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(())
}
