// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The docfind CLI as an [`IndexEngine`].

use std::path::Path;

use tokio::process::Command;
use tracing::debug;

use super::IndexEngine;
use crate::{Error, Result};

/// Binary name used when none is configured, resolved through `PATH`.
pub const DEFAULT_CLI_BINARY: &str = "docfind";

/// Runs `<binary> <corpus.json> <output dir>` and waits for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliEngine {
    binary: String,
}

impl CliEngine {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }
}

impl Default for CliEngine {
    fn default() -> Self {
        Self::new(DEFAULT_CLI_BINARY)
    }
}

impl IndexEngine for CliEngine {
    async fn build(&self, corpus_path: &Path, output_dir: &Path) -> Result<()> {
        let command = format!(
            "{} {} {}",
            self.binary,
            corpus_path.display(),
            output_dir.display()
        );
        debug!("Running {}", command);

        let output = Command::new(&self.binary)
            .arg(corpus_path)
            .arg(output_dir)
            .output()
            .await
            .map_err(|source| Error::EngineSpawn {
                binary: self.binary.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        // docfind reports on stderr; fall back to stdout, then to the status.
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let diagnostics = if !stderr.is_empty() {
            stderr
        } else if !stdout.is_empty() {
            stdout
        } else {
            output.status.to_string()
        };

        Err(Error::EngineFailed {
            command,
            code: output.status.code(),
            diagnostics,
        })
    }
}
