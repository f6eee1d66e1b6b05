//! ServeProfile and manifest/tunnel resolution.
use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

/// Default dev server port.
pub const DEFAULT_PORT: u16 = 39351;

const DEFAULT_MANIFEST: &str = "extension.toml";
const MANIFEST_ENV: &str = "LATTICE_MANIFEST_PATH";

/// Resolved serve invocation profile.
#[derive(Debug, Clone)]
pub struct ServeProfile {
    pub manifest_path: PathBuf,
    pub port: u16,
    pub tunnel_url: Option<String>,
    pub launch_args: Vec<String>,
}

/// Resolve the manifest path in the order: CLI override → env var → default.
pub fn resolve_manifest_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    let path = override_path
        .or_else(|| env::var_os(MANIFEST_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));

    if path.is_absolute() {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(path))
}

/// Normalize the tunnel URL: blank means absent, anything else must be an
/// http(s) URL.
pub fn normalize_tunnel_url(raw: Option<&str>) -> Result<Option<String>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(anyhow!(
            "invalid tunnel URL `{trimmed}`: expected an http(s) URL"
        ));
    }
    Ok(Some(trimmed.to_string()))
}

/// Build launch arguments suitable for reproduction/logging.
pub fn build_launch_args(port: u16, tunnel_url: Option<&str>, manifest: &Path) -> Vec<String> {
    let mut args = vec![
        format!("--port={port}"),
        format!("--manifest={}", manifest.display()),
    ];
    if let Some(url) = tunnel_url {
        args.push(format!("--tunnel-url={url}"));
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins_over_environment() {
        let resolved = resolve_manifest_path(Some(PathBuf::from("/projects/demo/extension.toml")))
            .expect("absolute override should resolve");
        assert_eq!(resolved, PathBuf::from("/projects/demo/extension.toml"));
    }

    #[test]
    fn relative_paths_are_anchored_to_the_current_directory() {
        let resolved = resolve_manifest_path(Some(PathBuf::from("demo/extension.toml")))
            .expect("relative override should resolve");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("demo/extension.toml"));
    }

    #[test]
    fn blank_tunnel_url_is_treated_as_absent() {
        assert_eq!(normalize_tunnel_url(None).expect("none is fine"), None);
        assert_eq!(normalize_tunnel_url(Some("   ")).expect("blank is fine"), None);
    }

    #[test]
    fn tunnel_url_must_be_http() {
        assert_eq!(
            normalize_tunnel_url(Some(" https://tunnel.example.dev ")).expect("https is fine"),
            Some("https://tunnel.example.dev".to_string())
        );
        assert!(normalize_tunnel_url(Some("ftp://tunnel.example.dev")).is_err());
    }

    #[test]
    fn launch_args_include_the_tunnel_only_when_present() {
        let manifest = Path::new("/projects/demo/extension.toml");

        let without = build_launch_args(39351, None, manifest);
        assert_eq!(
            without,
            vec![
                "--port=39351".to_string(),
                "--manifest=/projects/demo/extension.toml".to_string(),
            ]
        );

        let with = build_launch_args(39351, Some("https://tunnel.example.dev"), manifest);
        assert_eq!(with.len(), 3);
        assert_eq!(with[2], "--tunnel-url=https://tunnel.example.dev");
    }
}
