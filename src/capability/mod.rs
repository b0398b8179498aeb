//! CDMI capability records derived from EOS QoS classes.
//!
//! `model` holds the record types handed to the capability service; `mapper`
//! turns EOS JSON (QoS class descriptions and `fileinfo` listings) into them.

pub mod mapper;
pub mod model;

pub use mapper::{
    backend_capability_from_json, capability_type_to_string, children_from_fileinfo_json,
    fileinfo_is_directory, metadata_from_qos_json, qos_class_from_cap_uri,
};
pub use model::{BackendCapability, CapabilityType};

/// Metadata key holding the transition URIs a class may move to.
pub const CAPABILITIES_ALLOWED_KEY: &str = "cdmi_capabilities_allowed";
