//! Capability record types handed to the CDMI capability service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Object type a capability applies to.
///
/// Unknown type names are kept in `Other` rather than rejected so a record
/// can still be described; they have no CDMI type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CapabilityType {
    Container,
    DataObject,
    Other(String),
}

impl CapabilityType {
    /// CDMI path segment for this type, `None` for `Other`.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            CapabilityType::Container => Some("container"),
            CapabilityType::DataObject => Some("dataobject"),
            CapabilityType::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CapabilityType::Other(value) => value.as_str(),
            known => known.type_name().unwrap_or_default(),
        }
    }
}

impl From<String> for CapabilityType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "container" => CapabilityType::Container,
            "dataobject" => CapabilityType::DataObject,
            _ => CapabilityType::Other(value),
        }
    }
}

impl From<&str> for CapabilityType {
    fn from(value: &str) -> Self {
        CapabilityType::from(value.to_string())
    }
}

impl From<CapabilityType> for String {
    fn from(value: CapabilityType) -> Self {
        match value {
            CapabilityType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CapabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One CDMI capability record built from an EOS QoS class description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendCapability {
    pub name: String,
    #[serde(rename = "type")]
    pub capability_type: CapabilityType,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub capabilities: Map<String, Value>,
}

impl BackendCapability {
    pub fn new(name: impl Into<String>, capability_type: CapabilityType) -> Self {
        Self {
            name: name.into(),
            capability_type,
            metadata: Map::new(),
            capabilities: Map::new(),
        }
    }

    /// Transition URIs recorded under `cdmi_capabilities_allowed`, if any.
    pub fn capabilities_allowed(&self) -> Option<Vec<&str>> {
        self.metadata
            .get(super::CAPABILITIES_ALLOWED_KEY)?
            .as_array()?
            .iter()
            .map(Value::as_str)
            .collect()
    }
}
