use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::lib::errors::ConfigError;

use super::ProjectManifest;

/// Read access to the latest on-disk project state.
///
/// `current` re-reads the manifest on every call: remediation steps are
/// allowed to mutate the project out-of-band, so cached snapshots go stale.
pub trait ProjectStore {
    fn current(&self) -> Result<ProjectManifest, ConfigError>;
}

/// Project store backed by the manifest file on disk.
#[derive(Debug, Clone)]
pub struct FileProjectStore {
    manifest_path: PathBuf,
}

impl FileProjectStore {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Directory the extension project lives in.
    pub fn project_root(&self) -> &Path {
        self.manifest_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Write the manifest back to disk, e.g. after remediation collected
    /// missing values.
    pub fn persist(&self, manifest: &ProjectManifest) -> Result<(), ConfigError> {
        let document = WriteManifest::from(manifest);
        let rendered = toml::to_string_pretty(&document).map_err(|err| {
            ConfigError::from_write_error(
                self.manifest_path.clone(),
                io::Error::new(io::ErrorKind::InvalidData, err),
            )
        })?;
        fs::write(&self.manifest_path, rendered)
            .map_err(|err| ConfigError::from_write_error(self.manifest_path.clone(), err))
    }
}

impl ProjectStore for FileProjectStore {
    fn current(&self) -> Result<ProjectManifest, ConfigError> {
        ProjectManifest::load_from_path(self.manifest_path.clone())
    }
}

#[derive(Serialize)]
struct WriteManifest<'a> {
    extension: WriteExtensionSection<'a>,
    #[serde(skip_serializing_if = "WriteEnvSection::is_empty")]
    env: WriteEnvSection<'a>,
}

#[derive(Serialize)]
struct WriteExtensionSection<'a> {
    #[serde(rename = "type")]
    type_id: &'a str,
    title: &'a str,
}

#[derive(Serialize)]
struct WriteEnvSection<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    shop: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    registration_uuid: Option<&'a str>,
}

impl WriteEnvSection<'_> {
    fn is_empty(&self) -> bool {
        self.shop.is_none() && self.api_key.is_none() && self.registration_uuid.is_none()
    }
}

impl<'a> From<&'a ProjectManifest> for WriteManifest<'a> {
    fn from(manifest: &'a ProjectManifest) -> Self {
        Self {
            extension: WriteExtensionSection {
                type_id: &manifest.extension.type_id,
                title: &manifest.extension.title,
            },
            env: WriteEnvSection {
                shop: manifest.env.shop.as_deref(),
                api_key: manifest.env.api_key.as_deref(),
                registration_uuid: manifest.env.registration_uuid.as_deref(),
            },
        }
    }
}
