use crate::project::ProjectManifest;
use crate::registry::{Capability, CapabilitySet};

/// Inputs available when building serve options.
///
/// Assembled fresh per serve invocation from current project state and
/// discarded after the launch attempt.
#[derive(Debug, Clone)]
pub struct ServeContext {
    pub port: u16,
    pub tunnel_url: Option<String>,
    pub manifest: ProjectManifest,
    pub renderer_version: Option<String>,
}

/// Build the ordered serve option list, including only flags whose
/// capability the runtime variant supports.
///
/// Pure function of its inputs: repeated calls produce byte-identical
/// sequences, and the result is independent of which command variant
/// consumes it. Fields that were not required may be blank, producing an
/// empty-valued flag.
pub fn build_serve_options(capabilities: CapabilitySet, context: &ServeContext) -> Vec<String> {
    let manifest = &context.manifest;
    let mut options = Vec::new();

    if capabilities.supports(Capability::Port) {
        options.push(format!("--port={}", context.port));
    }
    if capabilities.supports(Capability::Shop) {
        options.push(format!(
            "--store={}",
            manifest.env.shop.as_deref().unwrap_or_default()
        ));
    }
    if capabilities.supports(Capability::ApiKey) {
        options.push(format!(
            "--apiKey={}",
            manifest.env.api_key.as_deref().unwrap_or_default()
        ));
    }
    if capabilities.supports(Capability::RendererVersion) {
        options.push(format!(
            "--rendererVersion={}",
            context.renderer_version.as_deref().unwrap_or_default()
        ));
    }
    if capabilities.supports(Capability::Uuid) {
        options.push(format!(
            "--uuid={}",
            manifest.env.registration_uuid.as_deref().unwrap_or_default()
        ));
    }
    // Without a tunnel there is no public URL to announce; that is not an
    // error, the flag is simply omitted.
    if let Some(tunnel_url) = context.tunnel_url.as_deref() {
        if capabilities.supports(Capability::PublicUrl) {
            options.push(format!("--publicUrl={tunnel_url}"));
        }
    }
    if capabilities.supports(Capability::Name) {
        options.push(format!("--name={}", manifest.extension.title));
    }

    options
}
