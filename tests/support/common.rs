#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// QoS class description as returned by `eos qos ls` for a replicated class.
pub fn disk_replica() -> Value {
    json!({
        "name": "disk_replica",
        "metadata": {
            "cdmi_data_redundancy_provided": 2,
            "cdmi_latency_provided": 1,
            "cdmi_geographic_placement_provided": ["CH", "FR"]
        },
        "transition": ["disk_plain"]
    })
}

pub fn disk_plain() -> Value {
    json!({
        "name": "disk_plain",
        "metadata": {
            "cdmi_data_redundancy_provided": 1,
            "cdmi_latency_provided": 1,
            "cdmi_geographic_placement_provided": ["CH"]
        },
        "transition": ["disk_replica", "tape"]
    })
}

/// `fileinfo` reply for a directory with two entries.
pub fn directory_fileinfo() -> Value {
    json!({
        "name": "/eos/dev/qos/",
        "treesize": 4096,
        "children": [
            {"name": "file1.dat", "size": 1024},
            {"name": "subdir", "treesize": 0}
        ]
    })
}

/// Wrap output the way the MGM does.
pub fn mgm_response(stdout: &str, stderr: &str, retc: i32) -> String {
    format!("mgm.proc.stdout={stdout}&mgm.proc.stderr={stderr}&mgm.proc.retc={retc}")
}

pub fn write_temp(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate temp file")?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub fn cli_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_eos-cdmi"))
}

pub fn run_cli(args: &[&str]) -> Result<Output> {
    Command::new(cli_binary())
        .args(args)
        .env_remove("EOS_CDMI_CONFIG")
        .output()
        .with_context(|| format!("failed to execute eos-cdmi {args:?}"))
}

pub fn run_cli_with_env(args: &[&str], key: &str, value: &Path) -> Result<Output> {
    Command::new(cli_binary())
        .args(args)
        .env(key, value)
        .output()
        .with_context(|| format!("failed to execute eos-cdmi {args:?} with {key} set"))
}
