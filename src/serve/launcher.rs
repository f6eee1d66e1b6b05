use std::{io, path::Path, process::ExitStatus};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{info, warn};

use crate::lib::command::CommandSpec;
use crate::lib::errors::ServeError;

#[cfg(unix)]
const SIGINT: i32 = 2;

/// Selects and executes one serve toolchain, streaming its output to the
/// terminal until the server exits or is interrupted.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, commands: &[CommandSpec], project_root: &Path) -> io::Result<bool>;
}

/// Default runner: tries each command variant in order, falling through to
/// the next one when a toolchain is not installed.
pub struct ToolchainRunner;

#[async_trait]
impl CommandRunner for ToolchainRunner {
    async fn run(&self, commands: &[CommandSpec], project_root: &Path) -> io::Result<bool> {
        for spec in commands {
            let mut command = Command::new(spec.program);
            command
                .args(&spec.args)
                .current_dir(project_root)
                .kill_on_drop(true);

            match command.spawn() {
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    warn!(
                        target: "lattice_dev::toolchain",
                        toolchain = spec.program,
                        "Toolchain is not installed, trying the next variant"
                    );
                    continue;
                }
                Err(err) => return Err(err),
                Ok(mut child) => {
                    info!(
                        target: "lattice_dev::toolchain",
                        toolchain = spec.program,
                        command = %spec.rendered(),
                        "Starting development server"
                    );
                    let status = child.wait().await?;
                    return Ok(exit_status_is_normal(status));
                }
            }
        }

        warn!(target: "lattice_dev::toolchain", "No serve toolchain is available");
        Ok(false)
    }
}

// A terminal interrupt ends an interactive serve session without marking it
// failed.
fn exit_status_is_normal(status: ExitStatus) -> bool {
    if status.success() {
        return true;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if status.signal() == Some(SIGINT) {
            return true;
        }
    }
    false
}

/// Run the serve command, normalizing every failure into the generic launch
/// failure. No retry: the workflow aborts on the first failed attempt.
pub async fn launch(
    runner: &dyn CommandRunner,
    commands: &[CommandSpec],
    project_root: &Path,
) -> Result<(), ServeError> {
    match runner.run(commands, project_root).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(ServeError::internal("no serve toolchain exited cleanly")),
        Err(err) => Err(ServeError::internal(format!(
            "failed to spawn the serve toolchain: {err}"
        ))),
    }
}
