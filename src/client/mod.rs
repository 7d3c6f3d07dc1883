// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search widget runtime.
//!
//! - [`session`]: pure state machine over UI events
//! - [`debounce`]: restartable timer
//! - [`engine`]: lazily resolved query function
//! - [`widget`]: event loop driving the three
//! - [`view`]: dropdown rendering model
//!
//! ```text
//! keystroke ─> session ─> debounce (200ms) ─> session ─> engine.query
//!                 ^                                          │
//!                 └────────── complete(seq, results) <───────┘
//! ```

pub mod debounce;
pub mod engine;
pub mod session;
pub mod view;
pub mod widget;

use std::time::Duration;

pub use debounce::Debouncer;
pub use engine::{EngineLoader, LazyEngine, QueryEngine};
pub use session::{
    Effect, Key, KeyPress, Phase, SearchSession, SearchTicket, SessionState, WidgetEvent,
};
pub use view::{shortcut_hint, DropdownView, ResultRow};
pub use widget::{SearchWidget, WidgetHost};

use crate::build::INDEX_DIR_NAME;
use crate::config::{GlobalData, DEFAULT_MAX_RESULTS};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Engine entry point, relative to the site base URL.
pub const ENGINE_MODULE_FILE: &str = "docfind.js";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub module_url: String,
    pub max_results: usize,
    pub debounce: Duration,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            module_url: engine_module_url(base_url),
            max_results: DEFAULT_MAX_RESULTS,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn from_global_data(base_url: &str, data: &GlobalData) -> Self {
        Self {
            max_results: data.max_results,
            ..Self::new(base_url)
        }
    }
}

/// `<base>docfind/docfind.js`, treating `base_url` as a directory.
pub fn engine_module_url(base_url: &str) -> String {
    let sep = if base_url.ends_with('/') { "" } else { "/" };
    format!("{}{}{}/{}", base_url, sep, INDEX_DIR_NAME, ENGINE_MODULE_FILE)
}
