//! Mapping from EOS JSON responses (QoS class descriptions and `fileinfo`
//! listings) into CDMI capability data.
//!
//! Everything except the record name is optional here. Missing or malformed
//! optional data degrades to an empty map, an empty list, or an omitted key,
//! and never partially: a map either holds every metadata field or none.

use crate::capability::{BackendCapability, CAPABILITIES_ALLOWED_KEY, CapabilityType};
use crate::error::BackendError;
use serde_json::{Map, Value};

/// Build a capability record from an EOS QoS class description.
///
/// `capabilities` is the backend-wide capability set attached to every
/// record unchanged.
pub fn backend_capability_from_json(
    description: &Value,
    capability_type: CapabilityType,
    capabilities: &Map<String, Value>,
) -> Result<BackendCapability, BackendError> {
    let mut metadata = metadata_from_qos_json(description, "");

    match transition_list(description) {
        Some(transition) => match capabilities_allowed(&transition, &capability_type) {
            Some(allowed) => {
                metadata.insert(CAPABILITIES_ALLOWED_KEY.to_string(), allowed);
            }
            None => log::debug!(
                "No CDMI type name for '{capability_type}'; omitting {CAPABILITIES_ALLOWED_KEY}"
            ),
        },
        None => log::debug!("QoS description has no usable transition list"),
    }

    let name = description
        .get("name")
        .and_then(Value::as_str)
        .ok_or(BackendError::MissingField("name"))?;

    let mut capability = BackendCapability::new(name, capability_type);
    capability.metadata = metadata;
    capability.capabilities = capabilities.clone();
    Ok(capability)
}

/// Extract CDMI metadata from a QoS description of a class or of an entry.
///
/// Keys get `suffix` appended so class-level and entry-level metadata can
/// share one map (e.g. `cdmi_latency` vs `cdmi_latency_provided`).
pub fn metadata_from_qos_json(description: &Value, suffix: &str) -> Map<String, Value> {
    match qos_metadata_fields(description) {
        Some((redundancy, latency, placement)) => {
            let mut metadata = Map::new();
            metadata.insert(format!("cdmi_data_redundancy{suffix}"), redundancy);
            metadata.insert(format!("cdmi_latency{suffix}"), latency);
            metadata.insert(format!("cdmi_geographic_placement{suffix}"), placement);
            metadata
        }
        None => {
            log::debug!("Failed to retrieve metadata. Returning empty map.");
            Map::new()
        }
    }
}

/// Names of the children listed in an EOS `fileinfo` response.
///
/// Only directories have children; anything without `treesize` yields an
/// empty list without looking at `children`.
pub fn children_from_fileinfo_json(fileinfo: &Value) -> Vec<String> {
    if !fileinfo_is_directory(fileinfo) {
        return Vec::new();
    }

    let names = fileinfo
        .get("children")
        .and_then(Value::as_array)
        .and_then(|children| {
            children
                .iter()
                .map(|child| child.get("name").and_then(Value::as_str).map(str::to_string))
                .collect::<Option<Vec<_>>>()
        });

    names.unwrap_or_else(|| {
        log::debug!("Failed to retrieve children information. Returning empty list.");
        Vec::new()
    })
}

/// EOS marks directories in `fileinfo` output by the presence of `treesize`.
pub fn fileinfo_is_directory(fileinfo: &Value) -> bool {
    fileinfo.get("treesize").is_some()
}

/// QoS class named by a capability URI, e.g. `/cdmi_capabilities/dataobject/disk_plain/`.
pub fn qos_class_from_cap_uri(uri: &str) -> String {
    let trimmed = uri.trim();
    trimmed
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(trimmed)
        .to_string()
}

/// CDMI type name for a capability type; `None` when the type has none.
pub fn capability_type_to_string(capability_type: &CapabilityType) -> Option<&'static str> {
    capability_type.type_name()
}

fn qos_metadata_fields(description: &Value) -> Option<(Value, Value, Value)> {
    let metadata = description.get("metadata")?.as_object()?;

    let redundancy = metadata
        .get("cdmi_data_redundancy_provided")
        .filter(|value| value.is_i64() || value.is_u64())?;
    let latency = metadata
        .get("cdmi_latency_provided")
        .filter(|value| value.is_i64() || value.is_u64())?;
    let placement = metadata
        .get("cdmi_geographic_placement_provided")
        .and_then(Value::as_array)
        .filter(|items| items.iter().all(Value::is_string))?;

    Some((
        redundancy.clone(),
        latency.clone(),
        Value::Array(placement.clone()),
    ))
}

fn transition_list(description: &Value) -> Option<Vec<&str>> {
    description
        .get("transition")?
        .as_array()?
        .iter()
        .map(Value::as_str)
        .collect()
}

fn capabilities_allowed(transition: &[&str], capability_type: &CapabilityType) -> Option<Value> {
    let type_name = capability_type.type_name()?;
    Some(Value::Array(
        transition
            .iter()
            .map(|class| Value::String(format!("/cdmi_capabilities/{type_name}/{class}/")))
            .collect(),
    ))
}
