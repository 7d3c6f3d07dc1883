// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// One indexable page. This is also the shape the query module hands back.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    /// Content source grouping ("docs", "blog", "pages"), set per root.
    pub category: String,
    /// Leading-slash URL path. Unique within a corpus.
    pub href: String,
    /// Plain text with markup stripped. Never empty inside a corpus.
    pub body: String,
}

impl Document {
    /// First `max_chars` characters of the body, for result rows.
    pub fn excerpt(&self, max_chars: usize) -> &str {
        match self.body.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.body[..idx],
            None => &self.body,
        }
    }
}
