use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;
use crate::registry;

/// `[extension]` manifest section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSection {
    pub type_id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct RawExtensionSection {
    #[serde(rename = "type")]
    pub type_id: Option<String>,
    pub title: Option<String>,
}

pub fn parse_extension_section(
    raw: Option<RawExtensionSection>,
    path: &Path,
) -> Result<ExtensionSection, ConfigError> {
    let raw = raw.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "extension",
    })?;

    let type_id = raw.type_id.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "extension.type",
    })?;
    if registry::find(type_id.trim()).is_none() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "extension.type",
            message: format!(
                "unknown extension type `{type_id}`; expected one of {}",
                registry::known_type_ids()
            ),
        });
    }

    let title = raw.title.ok_or(ConfigError::MissingField {
        path: path.to_path_buf(),
        field: "extension.title",
    })?;
    if title.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "extension.title",
            message: "Title cannot be blank".into(),
        });
    }

    Ok(ExtensionSection {
        type_id: type_id.trim().to_string(),
        title,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn manifest_path() -> PathBuf {
        PathBuf::from("/projects/demo/extension.toml")
    }

    #[test]
    fn missing_section_returns_error() {
        let error = parse_extension_section(None, &manifest_path())
            .expect_err("missing [extension] should produce an error");
        match error {
            ConfigError::MissingField { field, .. } => assert_eq!(field, "extension"),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_rejected_with_known_list() {
        let raw = RawExtensionSection {
            type_id: Some("banner_ui".into()),
            title: Some("Demo".into()),
        };
        let error = parse_extension_section(Some(raw), &manifest_path())
            .expect_err("unknown type should produce an error");
        match error {
            ConfigError::InvalidField { field, message, .. } => {
                assert_eq!(field, "extension.type");
                assert!(message.contains("admin_ui"), "message: {message}");
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let raw = RawExtensionSection {
            type_id: Some("admin_ui".into()),
            title: Some("   ".into()),
        };
        let error = parse_extension_section(Some(raw), &manifest_path())
            .expect_err("blank title should produce an error");
        match error {
            ConfigError::InvalidField { field, .. } => assert_eq!(field, "extension.title"),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn type_id_surrounding_whitespace_is_trimmed() {
        let raw = RawExtensionSection {
            type_id: Some(" checkout_ui ".into()),
            title: Some("Demo".into()),
        };
        let section = parse_extension_section(Some(raw), &manifest_path())
            .expect("padded type id should parse");
        assert_eq!(section.type_id, "checkout_ui");
    }
}
