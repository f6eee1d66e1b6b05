use std::{io, path::PathBuf, process::ExitCode};

use config::ConfigError as ConfigLoaderError;
use thiserror::Error;

use crate::registry::FieldName;

/// Errors that can occur while loading, validating, or writing the project
/// manifest.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the manifest file.
    #[error("Failed to read project manifest {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse project manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Required field is missing.
    #[error("Project manifest {path} is missing `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
    /// Field failed validation.
    #[error("Project manifest {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
    /// Failed to write the manifest back to disk.
    #[error("Failed to write project manifest {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }

    /// Helper to wrap an `io::Error` as a write failure.
    pub fn from_write_error(path: PathBuf, source: io::Error) -> Self {
        Self::FileWrite { path, source }
    }
}

/// Terminal failures of the serve workflow.
///
/// Every lower-level failure inside the workflow (store re-read, renderer
/// lookup, toolchain spawn) is normalized into one of these two kinds before
/// it reaches the caller.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Required fields remain unsatisfied after remediation.
    #[error(
        "missing required project configuration: {}. Update extension.toml and retry.",
        format_fields(.fields)
    )]
    MissingInformation { fields: Vec<FieldName> },
    /// The serve toolchain failed to start or exited abnormally.
    #[error("the development server could not be started")]
    LaunchFailure { detail: String },
}

impl ServeError {
    /// Normalize a lower-level failure into the generic launch failure.
    pub fn internal(detail: impl Into<String>) -> Self {
        ServeError::LaunchFailure {
            detail: detail.into(),
        }
    }

    /// Specific cause for the log; the Display form stays user-facing.
    pub fn log_detail(&self) -> String {
        match self {
            ServeError::MissingInformation { fields } => {
                format!("unsatisfied required fields: {}", format_fields(fields))
            }
            ServeError::LaunchFailure { detail } => detail.clone(),
        }
    }
}

fn format_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(FieldName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures inside a remediation step.
///
/// The validator treats remediation as best-effort; these never abort the
/// preflight on their own.
#[derive(Debug, Error)]
pub enum RemediationError {
    #[error(transparent)]
    Store(#[from] ConfigError),
    #[error("failed to read remediation input: {0}")]
    Io(#[from] io::Error),
}

/// Bundles a runtime error message with an exit code for `main`.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}
