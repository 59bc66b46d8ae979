//! Attribute records for components and packs.
//!
//! These are the opaque attribute bags handed over by the metadata provider.
//! Absent attributes are represented as empty strings, matching the
//! degradation policy of the identifier codec: an empty field is simply
//! elided from the canonical identifier together with its delimiter.

use serde::{Deserialize, Serialize};

/// Named attributes describing a single software component.
///
/// `class` is the only field required when deriving a full component
/// identifier; every other field may be left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentAttributes {
    /// Vendor that supplies the component.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vendor: String,
    /// Component class name (e.g. `Driver`).
    pub class: String,
    /// Bundle grouping within the class.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bundle: String,
    /// Group name within the class (e.g. `USART`).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,
    /// Sub-group name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub: String,
    /// Variant name distinguishing alternative implementations.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub variant: String,
    /// Version string of the component.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl ComponentAttributes {
    /// Creates an attribute record with only the class name populated.
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Self::default()
        }
    }
}

/// Named attributes describing a pack (a distribution unit of components).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackAttributes {
    /// Vendor that publishes the pack.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vendor: String,
    /// Pack name.
    pub name: String,
    /// Pack version string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
}

impl PackAttributes {
    /// Creates a pack attribute record from its three parts.
    pub fn new(
        vendor: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            vendor: vendor.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}
