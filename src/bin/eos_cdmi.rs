//! Command-line front end for the EOS CDMI adapter.
//!
//! Each subcommand wraps one library operation over stdin or a file so MGM
//! replies can be inspected and turned into capability records from scripts:
//!
//!   eos-cdmi extract < reply.txt
//!   eos-cdmi capability --type dataobject --file qos_ls.json --validate
//!   eos-cdmi capability --type container --schema site_record.schema.json < qos_ls.json
//!   eos-cdmi children < fileinfo.json
//!   eos-cdmi class-name /cdmi_capabilities/container/disk_plain/
//!   eos-cdmi qos-command --class disk_replica

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use eos_cdmi::{
    BackendConfig, CapabilityType, RecordSchema, backend_capability_from_json,
    children_from_fileinfo_json, extract_cmd_output, parse_json_documents, protobuf,
    qos_class_from_cap_uri,
};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "eos-cdmi")]
#[command(about = "Translate EOS MGM replies into CDMI capability data")]
struct Cli {
    /// Backend config file (falls back to EOS_CDMI_CONFIG, then built-in defaults).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the stdout field of an mgm.proc response; fails on a non-empty stderr.
    ///
    /// Trailing newlines are stripped from the input first, so a reply without
    /// mgm.proc fields is echoed back without them.
    Extract {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Build capability records (one JSON object per line) from QoS class descriptions.
    Capability {
        #[arg(long = "type", value_enum)]
        capability_type: TypeArg,
        #[arg(long)]
        file: Option<PathBuf>,
        /// Check each record against the bundled record schema before printing.
        #[arg(long)]
        validate: bool,
        /// Validate against this schema file instead of the bundled one (implies --validate).
        #[arg(long)]
        schema: Option<PathBuf>,
    },
    /// List the children of a directory from a fileinfo JSON reply.
    Children {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the QoS class named by a capability URI.
    ClassName { uri: String },
    /// Print the `qos ls` command payload, optionally filtered to one class.
    QosCommand {
        #[arg(long = "class")]
        class_name: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TypeArg {
    Container,
    Dataobject,
}

impl From<TypeArg> for CapabilityType {
    fn from(value: TypeArg) -> Self {
        match value {
            TypeArg::Container => CapabilityType::Container,
            TypeArg::Dataobject => CapabilityType::DataObject,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Extract { file } => {
            let input = read_input(file.as_deref())?;
            let output = extract_cmd_output(input.trim_end_matches(['\r', '\n']))?;
            println!("{output}");
        }
        Command::Capability {
            capability_type,
            file,
            validate,
            schema,
        } => {
            let config = BackendConfig::resolve(cli.config.as_deref())?;
            let schema = match schema {
                Some(path) => Some(RecordSchema::load(&path)?),
                None if validate => Some(RecordSchema::bundled()?),
                None => None,
            };
            let input = read_input(file.as_deref())?;
            for (idx, description) in parse_json_documents(&input)?.iter().enumerate() {
                let record = backend_capability_from_json(
                    description,
                    capability_type.into(),
                    &config.capabilities,
                )
                .with_context(|| format!("building capability record {}", idx + 1))?;
                let value = match &schema {
                    Some(schema) => schema.validate_record(&record)?,
                    None => serde_json::to_value(&record)?,
                };
                println!("{}", serde_json::to_string(&value)?);
            }
        }
        Command::Children { file } => {
            let input = read_input(file.as_deref())?;
            let fileinfo: Value = serde_json::from_str(&input).context("parsing fileinfo JSON")?;
            for child in children_from_fileinfo_json(&fileinfo) {
                println!("{child}");
            }
        }
        Command::ClassName { uri } => println!("{}", qos_class_from_cap_uri(&uri)),
        Command::QosCommand { class_name } => {
            let payload = match class_name.as_deref() {
                None => protobuf::qos_list(),
                Some(name) => protobuf::qos_list_class(name).ok_or_else(|| {
                    anyhow!(
                        "no qos command for class '{name}'; known classes: {}",
                        protobuf::known_classes().collect::<Vec<_>>().join(", ")
                    )
                })?,
            };
            println!("{payload}");
        }
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin().read_to_string(&mut buf).context("reading stdin")?;
    }
    Ok(buf)
}
