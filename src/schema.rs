//! JSON Schema check for capability records before they leave the adapter.
//!
//! The schema ships inside the binary (`schema/capability_record.schema.json`)
//! and encodes the record invariants: metadata fields appear together or not
//! at all, and transition URIs follow the CDMI capability path layout.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

const BUNDLED_RECORD_SCHEMA: &str = include_str!("../schema/capability_record.schema.json");

pub struct RecordSchema {
    compiled: JSONSchema,
}

impl RecordSchema {
    /// Compile the schema bundled with the crate.
    pub fn bundled() -> Result<Self> {
        let raw: Value =
            serde_json::from_str(BUNDLED_RECORD_SCHEMA).context("parsing bundled record schema")?;
        Self::compile(&raw, "bundled record schema")
    }

    /// Compile a schema from disk, e.g. a site-specific tightening of the bundled one.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::compile(&raw, &path.display().to_string())
    }

    fn compile(raw: &Value, label: &str) -> Result<Self> {
        let compiled = JSONSchema::compile(raw)
            .map_err(|err| anyhow!("compiling {label}: {err}"))?;
        Ok(Self { compiled })
    }

    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            bail!("capability record failed schema validation:\n{details}");
        }
        Ok(())
    }

    /// Serialize and validate any record type.
    pub fn validate_record<T: Serialize>(&self, record: &T) -> Result<Value> {
        let value = serde_json::to_value(record).context("serializing capability record")?;
        self.validate(&value)?;
        Ok(value)
    }
}
