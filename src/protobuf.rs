//! Precomputed protobuf payloads for the EOS `qos ls` console command.
//!
//! The payloads are base64 strings sent to the MGM as-is. Only the classes
//! the instance is deployed with have a filtered payload.

const QOS_LIST: &str = "CAGiAQIKAPgBAQ==";

const QOS_LIST_CLASS: &[(&str, &str)] = &[
    ("disk_plain", "CAGiAQ4KDAoKZGlza19wbGFpbg=="),
    ("disk_replica", "CAGiARAKDgoMZGlza19yZXBsaWNh"),
];

/// Payload listing every QoS class.
pub fn qos_list() -> &'static str {
    QOS_LIST
}

/// Payload describing a single QoS class, `None` for unknown class names.
pub fn qos_list_class(class_name: &str) -> Option<&'static str> {
    QOS_LIST_CLASS
        .iter()
        .find(|(name, _)| *name == class_name)
        .map(|(_, payload)| *payload)
}

/// Class names that have a filtered payload.
pub fn known_classes() -> impl Iterator<Item = &'static str> {
    QOS_LIST_CLASS.iter().map(|(name, _)| *name)
}
