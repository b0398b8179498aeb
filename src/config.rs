//! Backend configuration: the capability set attached to every record.
//!
//! The CDMI service advertises one capability set for the whole EOS backend.
//! It can be overridden with a JSON file:
//!
//! ```json
//! {
//!   "schema_version": "eos_cdmi_config_v1",
//!   "capabilities": { "cdmi_latency": true }
//! }
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::env;
use std::env::VarError;
use std::fs;
use std::path::{Path, PathBuf};

/// Version marker expected in configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "eos_cdmi_config_v1";
/// Environment variable naming a configuration file.
pub const ENV_CONFIG_PATH: &str = "EOS_CDMI_CONFIG";

const DEFAULT_CAPABILITIES: &[&str] = &[
    "cdmi_capabilities_templates",
    "cdmi_capabilities_exact_inherit",
    "cdmi_data_redundancy",
    "cdmi_geographic_placement",
    "cdmi_latency",
];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BackendConfig {
    pub schema_version: String,
    #[serde(default = "default_capabilities")]
    pub capabilities: Map<String, Value>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION.to_string(),
            capabilities: default_capabilities(),
        }
    }
}

impl BackendConfig {
    /// Parse a configuration file and verify its version marker.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: BackendConfig = serde_json::from_str(&data)
            .with_context(|| format!("parsing config {}", path.display()))?;

        if config.schema_version != CONFIG_SCHEMA_VERSION {
            bail!(
                "unsupported config schema_version '{}', expected {}",
                config.schema_version,
                CONFIG_SCHEMA_VERSION
            );
        }
        if config.capabilities.keys().any(|key| key.trim().is_empty()) {
            bail!("config capabilities must not contain empty keys");
        }
        log::debug!(
            "Loaded {} backend capabilities from {}",
            config.capabilities.len(),
            path.display()
        );
        Ok(config)
    }

    /// Load from the CLI override, then `EOS_CDMI_CONFIG`, else built-in defaults.
    pub fn resolve(cli_override: Option<&Path>) -> Result<Self> {
        match config_path(cli_override) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration file to use, if any.
pub fn config_path(cli_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_override {
        return Some(path.to_path_buf());
    }
    match env::var(ENV_CONFIG_PATH) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        Ok(_) => None,
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(os)) => Some(PathBuf::from(os)),
    }
}

pub fn default_capabilities() -> Map<String, Value> {
    DEFAULT_CAPABILITIES
        .iter()
        .map(|name| (name.to_string(), Value::Bool(true)))
        .collect()
}
