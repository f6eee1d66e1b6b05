use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::Value;
use thiserror::Error;

/// Failures while resolving the installed renderer package version.
#[derive(Debug, Error)]
pub enum RendererLookupError {
    #[error("renderer package `{package}` is not installed ({path} not found); run `yarn install` or `npm install`")]
    NotInstalled { package: String, path: PathBuf },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} does not declare a version")]
    MissingVersion { path: PathBuf },
}

/// Version of the installed renderer package, read from its package manifest
/// under `node_modules`.
pub fn resolve_renderer_version(
    project_root: &Path,
    package: &str,
) -> Result<String, RendererLookupError> {
    let manifest_path = project_root
        .join("node_modules")
        .join(package)
        .join("package.json");
    if !manifest_path.exists() {
        return Err(RendererLookupError::NotInstalled {
            package: package.to_string(),
            path: manifest_path,
        });
    }

    let contents = fs::read_to_string(&manifest_path).map_err(|source| RendererLookupError::Io {
        path: manifest_path.clone(),
        source,
    })?;
    let document: Value =
        serde_json::from_str(&contents).map_err(|source| RendererLookupError::Parse {
            path: manifest_path.clone(),
            source,
        })?;

    document
        .get("version")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(RendererLookupError::MissingVersion {
            path: manifest_path,
        })
}
