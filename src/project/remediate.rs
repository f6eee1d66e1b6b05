use std::io::{self, BufRead, Write};

use tracing::info;

use crate::lib::errors::RemediationError;
use crate::registry::FieldName;
use crate::serve::{field_satisfied, Remediator};

use super::{FileProjectStore, ProjectManifest, ProjectStore};

/// Interactive remediation: prompts on the terminal for missing required
/// values and persists whatever the user provides through the store.
///
/// Only genuinely blank values trigger a prompt; an empty answer leaves the
/// field unsatisfied for the validator's final check to report.
pub struct TerminalRemediator<'a> {
    store: &'a FileProjectStore,
}

impl<'a> TerminalRemediator<'a> {
    pub fn new(store: &'a FileProjectStore) -> Self {
        Self { store }
    }

    fn collect(&self, field: FieldName, manifest: &mut ProjectManifest) -> io::Result<bool> {
        let value = prompt_value(&format!(
            "{} is required to serve this extension. Enter a value: ",
            field.label()
        ))?;
        if value.is_empty() {
            return Ok(false);
        }
        set_field(manifest, field, value);
        Ok(true)
    }
}

impl Remediator for TerminalRemediator<'_> {
    fn ensure_env(&self, required_fields: &[FieldName]) -> Result<(), RemediationError> {
        let mut manifest = self.store.current()?;
        let mut collected = false;

        for field in required_fields {
            if field_satisfied(manifest.field(*field)) {
                continue;
            }
            collected |= self.collect(*field, &mut manifest)?;
        }

        if collected {
            self.store.persist(&manifest)?;
            info!(
                target: "lattice_dev::config",
                path = %self.store.manifest_path().display(),
                "Saved collected values to the project manifest"
            );
        }
        Ok(())
    }

    fn ensure_dev_store(&self) -> Result<(), RemediationError> {
        let mut manifest = self.store.current()?;
        if field_satisfied(manifest.field(FieldName::Shop)) {
            return Ok(());
        }

        let value = prompt_value(
            "Development store domain (e.g. my-store.lattice.dev): ",
        )?;
        if value.is_empty() {
            return Ok(());
        }
        manifest.env.shop = Some(value);
        self.store.persist(&manifest)?;
        Ok(())
    }
}

fn set_field(manifest: &mut ProjectManifest, field: FieldName, value: String) {
    match field {
        FieldName::Shop => manifest.env.shop = Some(value),
        FieldName::ApiKey => manifest.env.api_key = Some(value),
        FieldName::RegistrationUuid => manifest.env.registration_uuid = Some(value),
    }
}

fn prompt_value(prompt: &str) -> io::Result<String> {
    let mut stderr = io::stderr();
    stderr.write_all(prompt.as_bytes())?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
