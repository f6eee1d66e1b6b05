use std::path::Path;

use serde::Deserialize;
use uuid::Uuid;

use crate::lib::errors::ConfigError;

/// `[env]` manifest section.
///
/// Values are kept verbatim, including surrounding whitespace; whether a
/// blank value satisfies a requirement is the preflight validator's call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSection {
    pub shop: Option<String>,
    pub api_key: Option<String>,
    pub registration_uuid: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawEnvSection {
    pub shop: Option<String>,
    pub api_key: Option<String>,
    pub registration_uuid: Option<String>,
}

pub fn parse_env_section(
    raw: Option<RawEnvSection>,
    path: &Path,
) -> Result<EnvSection, ConfigError> {
    let raw = raw.unwrap_or_default();

    if let Some(id) = raw.registration_uuid.as_deref() {
        let trimmed = id.trim();
        if !trimmed.is_empty() {
            Uuid::parse_str(trimmed).map_err(|err| ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "env.registration_uuid",
                message: format!("not a valid UUID: {err}"),
            })?;
        }
    }

    Ok(EnvSection {
        shop: raw.shop,
        api_key: raw.api_key,
        registration_uuid: raw.registration_uuid,
    })
}
