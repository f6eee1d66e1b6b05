use tracing::warn;

use crate::lib::errors::{RemediationError, ServeError};
use crate::project::ProjectStore;
use crate::registry::FieldName;

/// Interactive or automated steps that try to fill in missing required
/// configuration before final validation.
pub trait Remediator {
    /// Give the surrounding system a chance to collect missing values.
    fn ensure_env(&self, required_fields: &[FieldName]) -> Result<(), RemediationError>;
    /// Make sure a development store is configured.
    fn ensure_dev_store(&self) -> Result<(), RemediationError>;
}

/// Remediator that collects nothing; used by non-interactive reports.
pub struct NoopRemediator;

impl Remediator for NoopRemediator {
    fn ensure_env(&self, _required_fields: &[FieldName]) -> Result<(), RemediationError> {
        Ok(())
    }

    fn ensure_dev_store(&self) -> Result<(), RemediationError> {
        Ok(())
    }
}

/// A field is satisfied only by a present, non-blank value.
pub fn field_satisfied(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}

/// Preflight check that required environment values are present before the
/// long-running launch.
pub struct EnvironmentValidator<'a> {
    store: &'a dyn ProjectStore,
    remediator: &'a dyn Remediator,
}

impl<'a> EnvironmentValidator<'a> {
    pub fn new(store: &'a dyn ProjectStore, remediator: &'a dyn Remediator) -> Self {
        Self { store, remediator }
    }

    /// Run remediation, then perform exactly one final satisfaction check
    /// against freshly re-read project state.
    ///
    /// Remediation is a black box that may mutate the project out-of-band; a
    /// step that fails is logged and the final check alone decides the
    /// outcome.
    pub fn validate(&self, required_fields: &[FieldName]) -> Result<(), ServeError> {
        if required_fields.is_empty() {
            return Ok(());
        }

        if let Err(err) = self.remediator.ensure_env(required_fields) {
            warn!(
                target: "lattice_dev::serve",
                reason = %err,
                "Environment remediation did not complete"
            );
        }
        if required_fields.contains(&FieldName::Shop) {
            if let Err(err) = self.remediator.ensure_dev_store() {
                warn!(
                    target: "lattice_dev::serve",
                    reason = %err,
                    "Dev store remediation did not complete"
                );
            }
        }

        let manifest = self
            .store
            .current()
            .map_err(|err| ServeError::internal(err.to_string()))?;
        let missing: Vec<FieldName> = required_fields
            .iter()
            .copied()
            .filter(|field| !field_satisfied(manifest.field(*field)))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ServeError::MissingInformation { fields: missing })
        }
    }
}
