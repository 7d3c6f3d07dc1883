// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate-wide error type.
//!
//! Most conditions in this crate are soft: a missing content root is zero
//! documents, a malformed front matter block is no metadata, a failed engine
//! run is a logged warning for the site build. The variants below are what
//! remains once those have been absorbed, and callers decide whether they are
//! fatal.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// The engine binary could not be started at all (not installed, not on PATH).
    #[error("failed to spawn docfind CLI `{binary}`: {source}")]
    EngineSpawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran and exited unsuccessfully.
    #[error("docfind CLI failed ({command}): {diagnostics}")]
    EngineFailed {
        command: String,
        /// Exit code, `None` when the process was killed by a signal.
        code: Option<i32>,
        diagnostics: String,
    },

    #[error("failed to load search module from {url}: {reason}")]
    EngineLoad { url: String, reason: String },

    #[error("search query failed: {0}")]
    Query(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
