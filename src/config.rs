// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plugin options.
//!
//! Options live under the `docfind` key of the site's theme config. Every key
//! is optional; missing ones take the defaults below. Validation is deliberately
//! shallow: the only hard error is a `docfind` value that isn't an object.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_CLI_BINARY;
use crate::{Error, Result};

pub const DEFAULT_MAX_RESULTS: usize = 10;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOptions {
    /// Path or name of the docfind binary.
    pub cli_binary: String,
    pub index_docs: bool,
    pub index_blog: bool,
    /// Standalone pages under `src/pages`.
    pub index_pages: bool,
    /// Passed through to the query function at runtime.
    pub max_results: usize,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            cli_binary: DEFAULT_CLI_BINARY.to_string(),
            index_docs: true,
            index_blog: true,
            index_pages: false,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl ThemeOptions {
    /// What the search widget gets to see.
    pub fn global_data(&self) -> GlobalData {
        GlobalData {
            max_results: self.max_results,
        }
    }
}

/// Options exposed to the client at runtime.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalData {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for GlobalData {
    fn default() -> Self {
        ThemeOptions::default().global_data()
    }
}

/// The slice of the site theme config this plugin owns.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docfind: Option<ThemeOptions>,
}

impl ThemeConfig {
    pub fn options(&self) -> ThemeOptions {
        self.docfind.clone().unwrap_or_default()
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        validate_theme_config(value)
    }
}

/// Check the shape of a theme config value and parse it.
pub fn validate_theme_config(value: serde_json::Value) -> Result<ThemeConfig> {
    match value.get("docfind") {
        None | Some(serde_json::Value::Null) => {}
        Some(serde_json::Value::Object(_)) => {}
        Some(_) => {
            return Err(Error::Config(
                "themeConfig.docfind must be an object if provided.".to_string(),
            ))
        }
    }

    serde_json::from_value(value).map_err(|e| Error::Config(e.to_string()))
}
