//! Generate command CLI handler.

use crate::config::{DataKind, GeneratorConfig};
use crate::generator::DataGenerator;
use crate::schema::SchemaNode;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn run(
    data_type: String,
    count: usize,
    seed: Option<u64>,
    output: String,
    schema_path: Option<PathBuf>,
    constraint_pairs: Vec<String>,
) -> anyhow::Result<()> {
    let kind: DataKind = data_type.parse()?;

    let schema = match schema_path {
        Some(ref path) => Some(load_schema(path)?),
        None => None,
    };

    let mut constraints = BTreeMap::new();
    for pair in &constraint_pairs {
        let Some((key, value)) = pair.split_once('=') else {
            anyhow::bail!("constraint must be KEY=VALUE, got: {pair}");
        };
        constraints.insert(key.trim().to_string(), value.trim().to_string());
    }

    let config = GeneratorConfig {
        kind,
        count,
        seed,
        schema,
        constraints,
    };

    let dataset = DataGenerator::new().generate(&config)?;

    eprintln!(
        "Generated {} {} samples in {:.1} ms.",
        dataset.metadata.generated_count, kind, dataset.metadata.generation_time_ms
    );

    if output == "-" {
        let stdout = io::stdout();
        dataset.write_jsonl(&mut stdout.lock())?;
    } else {
        let file = File::create(&output)?;
        let mut writer = BufWriter::new(file);
        dataset.write_jsonl(&mut writer)?;
        writer.flush()?;
        eprintln!("Output written to: {output}");
    }

    Ok(())
}

/// Read and parse a schema file; `.yaml`/`.yml` files go through YAML,
/// everything else is treated as JSON.
fn load_schema(path: &Path) -> anyhow::Result<SchemaNode> {
    if !path.exists() {
        anyhow::bail!("schema file does not exist: {}", path.display());
    }
    let raw = std::fs::read_to_string(path)?;
    let document: serde_json::Value = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml_ng::from_str(&raw)?,
        _ => serde_json::from_str(&raw)?,
    };
    Ok(SchemaNode::parse(&document)?)
}
