// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! YAML front matter between `---` fences at the top of a file.

use serde_yaml::Value;
use std::path::Path;
use tracing::warn;

const FENCE: &str = "---";

/// The metadata keys the corpus cares about. Everything else is ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub sidebar_label: Option<String>,
    pub slug: Option<String>,
}

/// Split `raw` into (yaml, content). Without a complete fence pair the whole
/// input is content.
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = raw.split_inclusive('\n');

    let yaml_start = match lines.next() {
        Some(first) if first.trim_end() == FENCE => first.len(),
        _ => return (None, raw),
    };

    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == FENCE {
            let yaml = &raw[yaml_start..offset];
            let content = &raw[offset + line.len()..];
            return (Some(yaml), content);
        }
        offset += line.len();
    }

    (None, raw)
}

/// Parse the front matter of `raw`, returning the metadata and the content
/// after it. Malformed YAML is reported and treated as no metadata.
pub fn parse_front_matter<'a>(raw: &'a str, path: &Path) -> (FrontMatter, &'a str) {
    let (yaml, content) = split_front_matter(raw);
    let Some(yaml) = yaml.filter(|y| !y.trim().is_empty()) else {
        return (FrontMatter::default(), content);
    };

    let value: Value = match serde_yaml::from_str(yaml) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring malformed front matter in {}: {}", path.display(), e);
            return (FrontMatter::default(), content);
        }
    };

    let Value::Mapping(map) = value else {
        return (FrontMatter::default(), content);
    };

    let field = |key: &str| map.get(key).and_then(scalar_text);
    let meta = FrontMatter {
        title: field("title"),
        sidebar_label: field("sidebar_label"),
        slug: field("slug"),
    };
    (meta, content)
}

/// YAML scalars as text; `title: 2024` is a title too.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
