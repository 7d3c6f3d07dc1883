// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use crate::client::{EngineLoader, QueryEngine};
use crate::corpus::Document;
use crate::engine::IndexEngine;
use crate::{Error, Result};

/// A document with a body derived from the title.
pub fn make_doc(title: &str, category: &str, href: &str) -> Document {
    Document {
        title: title.to_string(),
        category: category.to_string(),
        href: href.to_string(),
        body: format!("Body of {}", title),
    }
}

/// Write `files` (relative path, content) under `root`, creating directories.
pub fn write_site(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture dir");
        }
        std::fs::write(&path, content).expect("write fixture file");
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// INDEX ENGINE FAKE
// ═══════════════════════════════════════════════════════════════════════════

/// Stands in for the docfind CLI: records the corpus it was given and writes
/// placeholder artifacts, or fails with `failure` if set.
#[derive(Default)]
pub struct RecordingEngine {
    pub corpora: RefCell<Vec<Vec<Document>>>,
    pub failure: Option<String>,
}

impl RecordingEngine {
    pub fn failing(diagnostics: &str) -> Self {
        Self {
            failure: Some(diagnostics.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.corpora.borrow().len()
    }
}

impl IndexEngine for RecordingEngine {
    async fn build(&self, corpus_path: &Path, output_dir: &Path) -> Result<()> {
        let raw = std::fs::read_to_string(corpus_path).map_err(|e| Error::io(corpus_path, e))?;
        self.corpora.borrow_mut().push(serde_json::from_str(&raw)?);

        if let Some(diagnostics) = &self.failure {
            return Err(Error::EngineFailed {
                command: format!("docfind {} {}", corpus_path.display(), output_dir.display()),
                code: Some(1),
                diagnostics: diagnostics.clone(),
            });
        }

        for name in ["docfind.js", "docfind_bg.wasm"] {
            let path: PathBuf = output_dir.join(name);
            std::fs::write(&path, name).map_err(|e| Error::io(&path, e))?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// QUERY ENGINE FAKE
// ═══════════════════════════════════════════════════════════════════════════

/// Shared knobs and call log for [`FakeLoader`] and the engine it loads.
#[derive(Default)]
pub struct FakeSearch {
    /// Every query text, in call order.
    pub queries: RefCell<Vec<String>>,
    pub loads: Cell<usize>,
    /// Per-query latency; unlisted queries answer immediately.
    pub delays: RefCell<HashMap<String, Duration>>,
    /// Queries that fail instead of answering.
    pub failing: RefCell<Vec<String>>,
    pub load_delay: Cell<Duration>,
}

impl FakeSearch {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn delay(&self, query: &str, delay: Duration) {
        self.delays.borrow_mut().insert(query.to_string(), delay);
    }

    pub fn fail(&self, query: &str) {
        self.failing.borrow_mut().push(query.to_string());
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

pub struct FakeLoader(pub Rc<FakeSearch>);

pub struct FakeEngine(Rc<FakeSearch>);

impl EngineLoader for FakeLoader {
    type Engine = FakeEngine;

    async fn load(&self, _module_url: &str) -> Result<FakeEngine> {
        self.0.loads.set(self.0.loads.get() + 1);
        let delay = self.0.load_delay.get();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(FakeEngine(Rc::clone(&self.0)))
    }
}

impl QueryEngine for FakeEngine {
    /// Answers with one document whose title is the query text.
    async fn query(&self, text: &str, limit: usize) -> Result<Vec<Document>> {
        self.0.queries.borrow_mut().push(text.to_string());
        let delay = self.0.delays.borrow().get(text).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.0.failing.borrow().iter().any(|q| q == text) {
            return Err(Error::Query(format!("no answer for {}", text)));
        }
        let hits = vec![make_doc(text, "docs", &format!("/docs/{}", text))];
        Ok(hits.into_iter().take(limit).collect())
    }
}
