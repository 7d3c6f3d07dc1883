// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the dropdown shows for a given [`SessionState`].

use super::session::SessionState;

/// Body text shown under each result title.
pub const EXCERPT_CHARS: usize = 120;

pub const NO_RESULTS_MESSAGE: &str = "No results found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub title: String,
    pub category: String,
    pub excerpt: String,
    pub href: String,
    /// Highlighted row (keyboard or hover).
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    pub rows: Vec<ResultRow>,
    /// Render the empty-state message instead of rows.
    pub no_results: bool,
}

impl DropdownView {
    /// `None` when the dropdown is hidden.
    ///
    /// While the first search waits on the engine the list is empty and the
    /// empty-state message is withheld.
    pub fn from_state(state: &SessionState) -> Option<Self> {
        if !state.is_open || state.query.trim().is_empty() {
            return None;
        }

        let rows = state
            .results
            .iter()
            .enumerate()
            .map(|(i, doc)| ResultRow {
                title: doc.title.clone(),
                category: doc.category.clone(),
                excerpt: doc.excerpt(EXCERPT_CHARS).to_string(),
                href: doc.href.clone(),
                active: state.active_index == Some(i),
            })
            .collect::<Vec<_>>();
        let no_results = rows.is_empty() && !state.is_loading;

        Some(Self { rows, no_results })
    }
}

/// Keyboard hint shown inside the input.
pub fn shortcut_hint(platform: &str) -> &'static str {
    if platform.contains("Mac") {
        "⌘K"
    } else {
        "Ctrl+K"
    }
}
