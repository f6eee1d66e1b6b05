//! Load and validate the extension project manifest.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;
use crate::registry::FieldName;

pub mod env;
pub mod extension;
pub mod remediate;
pub mod store;

pub use env::{parse_env_section, EnvSection, RawEnvSection};
pub use extension::{parse_extension_section, ExtensionSection, RawExtensionSection};
pub use remediate::TerminalRemediator;
pub use store::{FileProjectStore, ProjectStore};

/// Validated snapshot of the project manifest.
#[derive(Debug, Clone)]
pub struct ProjectManifest {
    pub extension: ExtensionSection,
    pub env: EnvSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawProjectManifest {
    extension: Option<RawExtensionSection>,
    env: Option<RawEnvSection>,
}

impl ProjectManifest {
    /// Load the manifest from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "lattice_dev::config",
            path = %path.display(),
            "Loading project manifest"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "lattice_dev::config",
                path = %path.display(),
                reason = %error,
                "Failed to read project manifest"
            );
            error
        })?;

        let raw: RawProjectManifest = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "lattice_dev::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse project manifest"
            );
            error
        })?;

        Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "lattice_dev::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate project manifest"
            );
            err
        })
    }

    fn from_raw(raw: RawProjectManifest, path: PathBuf) -> Result<Self, ConfigError> {
        let extension = parse_extension_section(raw.extension, &path)?;
        let env = parse_env_section(raw.env, &path)?;

        Ok(Self {
            extension,
            env,
            source_path: path,
        })
    }

    /// Value of a requirable environment field, verbatim.
    pub fn field(&self, name: FieldName) -> Option<&str> {
        match name {
            FieldName::Shop => self.env.shop.as_deref(),
            FieldName::ApiKey => self.env.api_key.as_deref(),
            FieldName::RegistrationUuid => self.env.registration_uuid.as_deref(),
        }
    }
}
