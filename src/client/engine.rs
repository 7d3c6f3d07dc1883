// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazily loaded query engine.
//!
//! The generated `docfind.js` module is only fetched when the first search
//! actually runs. Concurrent searches share one load; a failed load is not
//! remembered, so the next search tries again.

use std::future::Future;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::corpus::Document;
use crate::Result;

/// A resolved search function.
pub trait QueryEngine {
    /// Up to `limit` documents matching `text`, best first.
    fn query(&self, text: &str, limit: usize) -> impl Future<Output = Result<Vec<Document>>>;
}

/// Loads the engine module from a URL.
pub trait EngineLoader {
    type Engine: QueryEngine;

    fn load(&self, module_url: &str) -> impl Future<Output = Result<Self::Engine>>;
}

pub struct LazyEngine<L: EngineLoader> {
    loader: L,
    module_url: String,
    engine: OnceCell<L::Engine>,
}

impl<L: EngineLoader> LazyEngine<L> {
    pub fn new(loader: L, module_url: impl Into<String>) -> Self {
        Self {
            loader,
            module_url: module_url.into(),
            engine: OnceCell::new(),
        }
    }

    pub fn module_url(&self) -> &str {
        &self.module_url
    }

    pub fn is_resolved(&self) -> bool {
        self.engine.initialized()
    }

    /// The engine, loading it on first use.
    pub async fn resolve(&self) -> Result<&L::Engine> {
        self.engine
            .get_or_try_init(|| async {
                debug!("Loading search module from {}", self.module_url);
                self.loader.load(&self.module_url).await.inspect_err(|e| {
                    warn!("Search module {} failed to load: {}", self.module_url, e);
                })
            })
            .await
    }

    pub async fn query(&self, text: &str, limit: usize) -> Result<Vec<Document>> {
        let engine = self.resolve().await?;
        engine.query(text, limit).await
    }
}
