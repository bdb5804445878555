// SPDX-License-Identifier: PMPL-1.0-or-later

//! Reading and writing catalog content as JSON or YAML

use super::Catalog;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(CatalogFormat::Json),
            "yaml" | "yml" => Some(CatalogFormat::Yaml),
            _ => None,
        }
    }

    /// Pick the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
            .unwrap_or(CatalogFormat::Json)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            CatalogFormat::Json => "json",
            CatalogFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, catalog: &Catalog) -> Result<String> {
        match self {
            CatalogFormat::Json => Ok(serde_json::to_string_pretty(catalog)?),
            CatalogFormat::Yaml => Ok(serde_yaml::to_string(catalog)?),
        }
    }

    pub fn deserialize(&self, raw: &str) -> Result<Catalog> {
        match self {
            CatalogFormat::Json => Ok(serde_json::from_str(raw)?),
            CatalogFormat::Yaml => Ok(serde_yaml::from_str(raw)?),
        }
    }
}

pub(crate) fn load_json_or_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    match CatalogFormat::from_path(path) {
        CatalogFormat::Yaml => {
            serde_yaml::from_str::<T>(&raw).with_context(|| format!("parsing {}", path.display()))
        }
        CatalogFormat::Json => {
            serde_json::from_str::<T>(&raw).with_context(|| format!("parsing {}", path.display()))
        }
    }
}

/// Load a catalog file. A missing entry field is reported as a parse error
/// naming the file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let catalog: Catalog = load_json_or_yaml(path)?;
    log::debug!(
        "loaded catalog {} ({} languages, {} entries)",
        path.display(),
        catalog.summary().len(),
        catalog.entry_count()
    );
    Ok(catalog)
}

pub fn save_catalog(catalog: &Catalog, path: &Path, format: CatalogFormat) -> Result<()> {
    let content = format.serialize(catalog)?;
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    log::debug!("saved catalog to {}", path.display());
    Ok(())
}
