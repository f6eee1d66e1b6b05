//! Static extension specifications: capability sets, required fields, and
//! renderer package names per extension type.

use std::fmt;

/// A serve parameter a runtime variant may or may not understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Capability {
    Port = 0,
    Shop = 1,
    ApiKey = 2,
    RendererVersion = 3,
    Uuid = 4,
    PublicUrl = 5,
    Name = 6,
}

impl Capability {
    /// Canonical option order for the serve command line.
    pub const ALL: [Capability; 7] = [
        Capability::Port,
        Capability::Shop,
        Capability::ApiKey,
        Capability::RendererVersion,
        Capability::Uuid,
        Capability::PublicUrl,
        Capability::Name,
    ];
}

/// Immutable set of serve parameters a runtime variant understands.
///
/// Fixed per extension type; constructed once as static data and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapabilitySet(u8);

impl CapabilitySet {
    pub const EMPTY: CapabilitySet = CapabilitySet(0);

    pub const fn of(capabilities: &[Capability]) -> Self {
        let mut bits = 0u8;
        let mut index = 0;
        while index < capabilities.len() {
            bits |= 1 << capabilities[index] as u8;
            index += 1;
        }
        CapabilitySet(bits)
    }

    pub const fn supports(&self, capability: Capability) -> bool {
        self.0 & (1 << capability as u8) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Project environment fields a specification may require before serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Shop,
    ApiKey,
    RegistrationUuid,
}

impl FieldName {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldName::Shop => "shop",
            FieldName::ApiKey => "api_key",
            FieldName::RegistrationUuid => "registration_uuid",
        }
    }

    /// Human-readable label used in prompts and messages.
    pub const fn label(&self) -> &'static str {
        match self {
            FieldName::Shop => "store domain",
            FieldName::ApiKey => "API key",
            FieldName::RegistrationUuid => "registration id",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static specification record for one extension type.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionSpec {
    pub id: &'static str,
    pub capabilities: CapabilitySet,
    pub required_fields: &'static [FieldName],
    pub renderer_package: &'static str,
}

/// Extension types this CLI knows how to serve.
pub const REGISTRY: &[ExtensionSpec] = &[
    ExtensionSpec {
        id: "admin_ui",
        capabilities: CapabilitySet::of(&[
            Capability::Port,
            Capability::Shop,
            Capability::ApiKey,
            Capability::RendererVersion,
            Capability::Uuid,
            Capability::Name,
        ]),
        required_fields: &[FieldName::Shop, FieldName::ApiKey],
        renderer_package: "@lattice/admin-ui",
    },
    ExtensionSpec {
        id: "checkout_ui",
        capabilities: CapabilitySet::of(&[
            Capability::Port,
            Capability::Shop,
            Capability::ApiKey,
            Capability::PublicUrl,
        ]),
        required_fields: &[FieldName::Shop, FieldName::ApiKey],
        renderer_package: "@lattice/checkout-ui",
    },
    ExtensionSpec {
        id: "post_purchase",
        capabilities: CapabilitySet::of(&[
            Capability::Port,
            Capability::ApiKey,
            Capability::RendererVersion,
            Capability::PublicUrl,
        ]),
        required_fields: &[],
        renderer_package: "@lattice/post-purchase-ui",
    },
];

/// Look up the specification for an extension type id.
pub fn find(type_id: &str) -> Option<&'static ExtensionSpec> {
    REGISTRY.iter().find(|spec| spec.id == type_id)
}

/// Comma-separated list of known type ids, for error messages.
pub fn known_type_ids() -> String {
    REGISTRY
        .iter()
        .map(|spec| spec.id)
        .collect::<Vec<_>>()
        .join(", ")
}
