// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The post-build step: extract the site's content and build the search index.
//!
//! Runs after the site generator has written its output. Content comes from
//! the standard roots (`docs/`, `blog/`, `src/pages/`), whichever the options
//! enable, in that order. The index lands in `<out_dir>/docfind/`, next to the
//! rest of the built site, where the widget fetches it from.
//!
//! Search is an enhancement. If the engine fails, the failure is logged and
//! reported, and the site build carries on without an index.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::ThemeOptions;
use crate::corpus::{Corpus, DocumentRoot};
use crate::engine::{build_index, IndexEngine, IndexOutcome};

/// Directory under the site output that holds the engine artifacts.
pub const INDEX_DIR_NAME: &str = "docfind";

/// The content roots enabled by `options`, in processing order.
pub fn content_roots(site_dir: &Path, options: &ThemeOptions) -> Vec<DocumentRoot> {
    let mut roots = Vec::new();
    if options.index_docs {
        roots.push(DocumentRoot::new(site_dir.join("docs"), "docs", "docs"));
    }
    if options.index_blog {
        roots.push(DocumentRoot::new(site_dir.join("blog"), "blog", "blog"));
    }
    if options.index_pages {
        roots.push(DocumentRoot::new(site_dir.join("src").join("pages"), "pages", ""));
    }
    roots
}

/// Extract every root, one after another, into a single corpus.
pub async fn collect_corpus(roots: &[DocumentRoot]) -> Corpus {
    let mut corpus = Corpus::new();
    for root in roots {
        let extracted = root.extract().await;
        info!(
            "Extracted {} {} document(s) from {}",
            extracted.len(),
            root.category,
            root.dir.display()
        );
        corpus.extend(extracted);
    }
    corpus
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Empty corpus; no index was generated.
    Skipped,
    Built { artifacts: Vec<PathBuf> },
    /// The engine failed. The message carries its diagnostics.
    Failed { reason: String },
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub corpus: Corpus,
    pub index_dir: PathBuf,
    pub outcome: BuildOutcome,
}

/// Extract the enabled roots under `site_dir` and index them into
/// `<out_dir>/docfind`. Never fails: engine errors end up in the report.
pub async fn run_post_build<E: IndexEngine>(
    site_dir: &Path,
    out_dir: &Path,
    options: &ThemeOptions,
    engine: &E,
) -> BuildReport {
    let roots = content_roots(site_dir, options);
    let corpus = collect_corpus(&roots).await;
    let index_dir = out_dir.join(INDEX_DIR_NAME);

    if !corpus.is_empty() {
        info!("Indexing {} documents...", corpus.len());
    }

    let outcome = match build_index(corpus.documents(), &index_dir, engine).await {
        Ok(IndexOutcome::Skipped) => BuildOutcome::Skipped,
        Ok(IndexOutcome::Built { artifacts, .. }) => {
            info!("Search index written to {}", index_dir.display());
            BuildOutcome::Built { artifacts }
        }
        Err(e) => {
            error!(
                "Failed to build search index. Is the docfind CLI installed?\n{}",
                e
            );
            BuildOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    BuildReport {
        corpus,
        index_dir,
        outcome,
    }
}
