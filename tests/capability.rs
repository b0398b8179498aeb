// Capability mapping guard rails: QoS descriptions to CDMI records, fileinfo
// listings, and capability URI helpers.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use eos_cdmi::{
    BackendConfig, CAPABILITIES_ALLOWED_KEY, CapabilityType, RecordSchema,
    backend_capability_from_json, capability_type_to_string, children_from_fileinfo_json,
    fileinfo_is_directory, metadata_from_qos_json, qos_class_from_cap_uri,
};
use serde_json::json;

use common::{directory_fileinfo, disk_plain, disk_replica};

#[test]
fn disk_replica_dataobject_record() -> Result<()> {
    let config = BackendConfig::default();
    let record = backend_capability_from_json(
        &disk_replica(),
        CapabilityType::DataObject,
        &config.capabilities,
    )?;

    assert_eq!(record.name, "disk_replica");
    assert_eq!(record.capability_type, CapabilityType::DataObject);
    assert_eq!(record.metadata["cdmi_data_redundancy"], json!(2));
    assert_eq!(record.metadata["cdmi_latency"], json!(1));
    assert_eq!(record.metadata["cdmi_geographic_placement"], json!(["CH", "FR"]));
    assert_eq!(
        record.metadata[CAPABILITIES_ALLOWED_KEY],
        json!(["/cdmi_capabilities/dataobject/disk_plain/"])
    );
    assert_eq!(record.capabilities, config.capabilities);
    Ok(())
}

#[test]
fn container_transitions_keep_order() -> Result<()> {
    let record = backend_capability_from_json(
        &disk_plain(),
        CapabilityType::Container,
        &serde_json::Map::new(),
    )?;
    assert_eq!(
        record.capabilities_allowed(),
        Some(vec![
            "/cdmi_capabilities/container/disk_replica/",
            "/cdmi_capabilities/container/tape/",
        ])
    );
    Ok(())
}

#[test]
fn missing_transition_omits_allowed_key() -> Result<()> {
    let mut description = disk_plain();
    description.as_object_mut().unwrap().remove("transition");
    let record = backend_capability_from_json(
        &description,
        CapabilityType::Container,
        &serde_json::Map::new(),
    )?;
    assert!(!record.metadata.contains_key(CAPABILITIES_ALLOWED_KEY));
    assert_eq!(record.metadata.len(), 3);
    Ok(())
}

#[test]
fn empty_transition_yields_empty_list() -> Result<()> {
    let mut description = disk_plain();
    description["transition"] = json!([]);
    let record = backend_capability_from_json(
        &description,
        CapabilityType::DataObject,
        &serde_json::Map::new(),
    )?;
    assert_eq!(record.metadata[CAPABILITIES_ALLOWED_KEY], json!([]));
    Ok(())
}

#[test]
fn missing_metadata_field_empties_map_but_keeps_transitions() -> Result<()> {
    let mut description = disk_replica();
    description["metadata"]
        .as_object_mut()
        .unwrap()
        .remove("cdmi_geographic_placement_provided");

    assert!(metadata_from_qos_json(&description, "").is_empty());

    let record = backend_capability_from_json(
        &description,
        CapabilityType::DataObject,
        &serde_json::Map::new(),
    )?;
    assert_eq!(record.metadata.len(), 1);
    assert!(record.metadata.contains_key(CAPABILITIES_ALLOWED_KEY));
    Ok(())
}

#[test]
fn records_pass_bundled_schema() -> Result<()> {
    let schema = RecordSchema::bundled()?;
    let config = BackendConfig::default();
    for (description, capability_type) in [
        (disk_replica(), CapabilityType::DataObject),
        (disk_plain(), CapabilityType::Container),
    ] {
        let record =
            backend_capability_from_json(&description, capability_type, &config.capabilities)?;
        let value = schema.validate_record(&record)?;
        assert_eq!(value["type"], json!(record.capability_type.as_str()));
    }
    Ok(())
}

#[test]
fn children_require_treesize() {
    let mut fileinfo = directory_fileinfo();
    assert!(fileinfo_is_directory(&fileinfo));
    assert_eq!(
        children_from_fileinfo_json(&fileinfo),
        vec!["file1.dat".to_string(), "subdir".to_string()]
    );

    fileinfo.as_object_mut().unwrap().remove("treesize");
    assert!(!fileinfo_is_directory(&fileinfo));
    assert!(children_from_fileinfo_json(&fileinfo).is_empty());
}

#[test]
fn directory_without_children_array_is_empty() {
    let fileinfo = json!({"treesize": 0, "children": "none"});
    assert!(children_from_fileinfo_json(&fileinfo).is_empty());
    assert!(children_from_fileinfo_json(&json!({"treesize": 0})).is_empty());
}

#[test]
fn capability_uri_and_type_names() {
    assert_eq!(qos_class_from_cap_uri(" /a/b/disk_plain/ "), "disk_plain");
    assert_eq!(
        qos_class_from_cap_uri("/cdmi_capabilities/container/disk_replica"),
        "disk_replica"
    );
    assert_eq!(capability_type_to_string(&CapabilityType::Container), Some("container"));
    assert_eq!(capability_type_to_string(&CapabilityType::DataObject), Some("dataobject"));
    assert_eq!(capability_type_to_string(&CapabilityType::from("queue")), None);
}
