// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Handing the corpus to the search engine.
//!
//! The engine is a black box: give it a JSON file of documents and a directory,
//! get back `docfind.js` and `docfind_bg.wasm`. [`build_index`] owns everything
//! around that call: the temp corpus file, a staging directory so a failed run
//! can't leave half-written artifacts over a good index, and cleanup of both
//! no matter how the call ends.
//!
//! The engine sits behind [`IndexEngine`] so tests can swap in a fake instead of
//! spawning processes.

pub mod cli;

use std::future::Future;
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile, TempDir};
use tracing::{debug, info, warn};

use crate::corpus::Document;
use crate::{Error, Result};

pub use cli::{CliEngine, DEFAULT_CLI_BINARY};

/// Prefix of the temporary corpus file written next to the index.
pub const CORPUS_FILE_PREFIX: &str = "_docfind_documents";

/// Prefix of the directory the engine writes into before artifacts are published.
pub const STAGING_DIR_PREFIX: &str = "_docfind_staging";

/// Something that turns a corpus file into search artifacts in a directory.
pub trait IndexEngine {
    fn build(&self, corpus_path: &Path, output_dir: &Path) -> impl Future<Output = Result<()>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    /// Nothing to index; no files were touched.
    Skipped,
    Built {
        documents: usize,
        /// Published artifact paths, sorted.
        artifacts: Vec<PathBuf>,
    },
}

/// Serialize `documents`, run `engine`, and publish its output into `output_dir`.
///
/// An empty slice is not an error: a site with nothing to index is valid and
/// gets a warning instead of an index.
pub async fn build_index<E: IndexEngine>(
    documents: &[Document],
    output_dir: &Path,
    engine: &E,
) -> Result<IndexOutcome> {
    if documents.is_empty() {
        warn!("No documents found to index. Skipping index generation.");
        return Ok(IndexOutcome::Skipped);
    }

    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| Error::io(output_dir, e))?;

    // Both guards delete their path on drop, so every return below cleans up.
    let corpus_file = write_corpus(documents, output_dir).await?;
    let staging = Builder::new()
        .prefix(STAGING_DIR_PREFIX)
        .tempdir_in(output_dir)
        .map_err(|e| Error::io(output_dir, e))?;

    engine.build(corpus_file.path(), staging.path()).await?;

    let artifacts = publish(&staging, output_dir).await?;
    info!(
        "Engine produced {} artifact(s) for {} documents",
        artifacts.len(),
        documents.len()
    );

    Ok(IndexOutcome::Built {
        documents: documents.len(),
        artifacts,
    })
}

async fn write_corpus(documents: &[Document], output_dir: &Path) -> Result<NamedTempFile> {
    let json = serde_json::to_vec(documents)?;
    let file = Builder::new()
        .prefix(CORPUS_FILE_PREFIX)
        .suffix(".json")
        .tempfile_in(output_dir)
        .map_err(|e| Error::io(output_dir, e))?;

    tokio::fs::write(file.path(), &json)
        .await
        .map_err(|e| Error::io(file.path(), e))?;
    debug!("Wrote {} bytes of corpus to {}", json.len(), file.path().display());

    Ok(file)
}

/// Move everything the engine wrote from staging into the output directory.
async fn publish(staging: &TempDir, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(staging.path())
        .await
        .map_err(|e| Error::io(staging.path(), e))?;

    let mut artifacts = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io(staging.path(), e))?
    {
        let target = output_dir.join(entry.file_name());
        tokio::fs::rename(entry.path(), &target)
            .await
            .map_err(|e| Error::io(&target, e))?;
        artifacts.push(target);
    }

    artifacts.sort();
    Ok(artifacts)
}
