// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus extraction: Markdown/MDX source trees to plain-text documents.
//!
//! A content root is walked depth-first in file-name order, each `.md`/`.mdx`
//! file is split into front matter and content, the content is stripped to
//! plain text, and a title and URL are resolved. Files with nothing left after
//! stripping (MDX shells that only import components, empty placeholders) are
//! dropped quietly.
//!
//! Nothing in here fails a build. A root that doesn't exist is an empty root
//! (plenty of sites have no blog), an unreadable file is skipped with a
//! warning, and broken markup just leaves a few extra characters in the index.
//!
//! Files are read one after another, not concurrently. The corpus is small and
//! a stable order makes builds reproducible.

pub mod document;
pub mod front_matter;
pub mod route;
pub mod strip;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

pub use document::Document;
pub use front_matter::{parse_front_matter, FrontMatter};
pub use route::{derive_href, resolve_href, resolve_title, HrefSource, INDEX_FILE_STEM};
pub use strip::strip_markdown;

/// File extensions treated as structured text. `.md` and `.mdx` are handled
/// identically.
pub const MARKUP_EXTENSIONS: &[&str] = &["md", "mdx"];

/// One content source: a directory, the category its documents get, and the
/// URL prefix their paths live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoot {
    pub dir: PathBuf,
    pub category: String,
    pub url_base: String,
}

impl DocumentRoot {
    pub fn new(dir: impl Into<PathBuf>, category: &str, url_base: &str) -> Self {
        Self {
            dir: dir.into(),
            category: category.to_string(),
            url_base: url_base.to_string(),
        }
    }

    pub async fn extract(&self) -> Corpus {
        extract(&self.dir, &self.category, &self.url_base).await
    }
}

/// Two documents resolved to the same href. `kept` is the file whose document
/// is in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrefCollision {
    pub href: String,
    pub kept: PathBuf,
    pub discarded: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Origin {
    path: PathBuf,
    source: HrefSource,
}

/// Ordered, href-unique documents plus the collisions hit while building them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
    origins: Vec<Origin>,
    by_href: HashMap<String, usize>,
    collisions: Vec<HrefCollision>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document extracted from `path`.
    ///
    /// On an href collision the earlier document keeps its slot, unless the
    /// newcomer's href is an explicit slug and the incumbent's was derived from
    /// its path; then the newcomer replaces it in place. Either way the
    /// collision is logged and recorded.
    pub fn push(&mut self, document: Document, source: HrefSource, path: impl Into<PathBuf>) {
        let path = path.into();
        let Some(&index) = self.by_href.get(&document.href) else {
            self.by_href.insert(document.href.clone(), self.documents.len());
            self.documents.push(document);
            self.origins.push(Origin { path, source });
            return;
        };

        let incumbent = &self.origins[index];
        let replace = source == HrefSource::Slug && incumbent.source == HrefSource::Derived;
        let collision = if replace {
            HrefCollision {
                href: document.href.clone(),
                kept: path.clone(),
                discarded: incumbent.path.clone(),
            }
        } else {
            HrefCollision {
                href: document.href.clone(),
                kept: incumbent.path.clone(),
                discarded: path.clone(),
            }
        };

        warn!(
            "Duplicate href {}: keeping {}, dropping {}",
            collision.href,
            collision.kept.display(),
            collision.discarded.display()
        );
        self.collisions.push(collision);

        if replace {
            self.documents[index] = document;
            self.origins[index] = Origin { path, source };
        }
    }

    /// Append another corpus, applying the same collision rule.
    pub fn extend(&mut self, other: Corpus) {
        self.collisions.extend(other.collisions);
        for (document, origin) in other.documents.into_iter().zip(other.origins) {
            self.push(document, origin.source, origin.path);
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }

    pub fn collisions(&self) -> &[HrefCollision] {
        &self.collisions
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document count per category, in first-seen order.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for doc in &self.documents {
            match counts.iter_mut().find(|(c, _)| *c == doc.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((doc.category.clone(), 1)),
            }
        }
        counts
    }
}

/// Every `.md`/`.mdx` file under `dir`, depth-first in file-name order.
/// A missing directory yields nothing.
pub fn discover_markup_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| is_markup_file(path))
        .collect()
}

pub fn is_markup_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| MARKUP_EXTENSIONS.contains(&ext))
}

/// Turn one file's contents into a document. `None` when nothing indexable is
/// left after stripping.
pub fn document_from_source(
    raw: &str,
    path: &Path,
    relative: &Path,
    category: &str,
    url_base: &str,
) -> Option<(Document, HrefSource)> {
    let (meta, content) = parse_front_matter(raw, path);
    let body = strip_markdown(content);
    if body.is_empty() {
        return None;
    }

    let (href, source) = resolve_href(&meta, relative, url_base);
    let title = resolve_title(&meta, path);
    Some((
        Document {
            title,
            category: category.to_string(),
            href,
            body,
        },
        source,
    ))
}

/// Extract every document under `dir`.
pub async fn extract(dir: &Path, category: &str, url_base: &str) -> Corpus {
    let walk_dir = dir.to_path_buf();
    let files = match tokio::task::spawn_blocking(move || discover_markup_files(&walk_dir)).await {
        Ok(files) => files,
        Err(e) => {
            warn!("File discovery under {} failed: {}", dir.display(), e);
            Vec::new()
        }
    };

    let mut corpus = Corpus::new();
    for path in files {
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let relative = path.strip_prefix(dir).unwrap_or(&path);
        match document_from_source(&raw, &path, relative, category, url_base) {
            Some((document, source)) => {
                debug!("{} -> {}", path.display(), document.href);
                corpus.push(document, source, path);
            }
            None => debug!("{} has no text after stripping; skipped", path.display()),
        }
    }

    corpus
}
