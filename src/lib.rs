//! Adapter between the EOS MGM command interface and a CDMI capability
//! service.
//!
//! [`response`] pulls command output (or the server's error) out of an
//! `mgm.proc.*` response; [`capability`] maps QoS class descriptions and
//! `fileinfo` listings into capability records; [`protobuf`] holds the
//! precomputed `qos ls` payloads.

pub mod capability;
pub mod config;
pub mod error;
pub mod protobuf;
pub mod response;
pub mod schema;

use anyhow::{Context, Result, bail};
use serde_json::Value;

pub use capability::{
    BackendCapability, CAPABILITIES_ALLOWED_KEY, CapabilityType, backend_capability_from_json,
    capability_type_to_string, children_from_fileinfo_json, fileinfo_is_directory,
    metadata_from_qos_json, qos_class_from_cap_uri,
};
pub use config::BackendConfig;
pub use error::BackendError;
pub use response::{CommandResponse, extract_cmd_output};
pub use schema::RecordSchema;

/// Parse extracted command output holding one or more JSON documents.
///
/// Accepts a single object, an array of objects, or newline-delimited
/// objects, which covers both `qos ls` (every class) and per-class replies.
pub fn parse_json_documents(input: &str) -> Result<Vec<Value>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("No JSON input provided");
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return match value {
            Value::Array(items) => {
                if let Some(idx) = items.iter().position(|item| !item.is_object()) {
                    bail!("Array entry {} is not a JSON object", idx + 1);
                }
                Ok(items)
            }
            Value::Object(_) => Ok(vec![value]),
            _ => bail!("Unsupported JSON input; expected object or array"),
        };
    }

    let mut documents = Vec::new();
    for (idx, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line)
            .with_context(|| format!("Unable to parse JSON document from line {}", idx + 1))?;
        if !value.is_object() {
            bail!("Line {} is not a JSON object", idx + 1);
        }
        documents.push(value);
    }

    if documents.is_empty() {
        bail!("No JSON documents found in input");
    }

    Ok(documents)
}
