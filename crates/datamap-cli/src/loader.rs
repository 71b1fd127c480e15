// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Document loading: JSON, TOML and YAML files into a [`DataMap`]

use anyhow::{anyhow, Context, Result};
use datamap::DataMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Source document format
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Json,
    Toml,
    Yaml,
}

impl Format {
    /// Infer the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "toml" => Some(Format::Toml),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Parse document text. The document root must be a mapping.
pub fn parse_document(content: &str, format: Format) -> Result<DataMap> {
    let map = match format {
        Format::Json => serde_json::from_str(content).context("parsing JSON document")?,
        Format::Toml => toml::from_str(content).context("parsing TOML document")?,
        Format::Yaml => parse_yaml(content)?,
    };
    Ok(map)
}

/// YAML documents have `<<` merge keys applied before conversion
fn parse_yaml(content: &str) -> Result<DataMap> {
    let mut value: serde_yaml::Value =
        serde_yaml::from_str(content).context("parsing YAML document")?;
    value.apply_merge().context("applying YAML merge keys")?;
    serde_yaml::from_value(value).context("converting YAML document")
}

/// Read and parse a document from `path`, or from stdin when `path` is `-`
pub fn read_document(path: &Path, format: Option<Format>) -> Result<DataMap> {
    let format = format
        .or_else(|| Format::from_path(path))
        .ok_or_else(|| anyhow!("cannot infer document format of {:?}; pass --format", path))?;

    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("reading document from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading document {:?}", path))?
    };

    let map = parse_document(&content, format)?;
    debug!(path = %path.display(), ?format, keys = map.len(), "loaded document");
    Ok(map)
}
