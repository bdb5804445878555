// SPDX-License-Identifier: PMPL-1.0-or-later

//! Browser configuration: initial language and catalog source.
//!
//! Read from a JSON or YAML file (chosen by extension); command-line flags
//! override individual fields.

use crate::browser::Browser;
use crate::catalog::{self, Catalog};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowserConfig {
    /// Language shown at startup.
    pub initial_language: Option<String>,
    /// Catalog file; the built-in catalog when unset.
    pub catalog: Option<PathBuf>,
}

impl BrowserConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Self = catalog::load_json_or_yaml(path)?;
        // Relative catalog paths are resolved against the config file.
        if let Some(parent) = path.parent() {
            config.catalog = config.catalog.map(|file| parent.join(file));
        }
        Ok(config)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        initial_language: Option<String>,
        catalog: Option<PathBuf>,
    ) -> Self {
        if initial_language.is_some() {
            self.initial_language = initial_language;
        }
        if catalog.is_some() {
            self.catalog = catalog;
        }
        self
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => catalog::load_catalog(path),
            None => Ok(Catalog::builtin()),
        }
    }

    /// Load the catalog and attach a browser to it.
    pub fn build_browser(&self) -> Result<Browser> {
        Browser::new(self.load_catalog()?, self.initial_language.as_deref())
    }
}
