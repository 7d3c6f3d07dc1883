// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Titles and URLs for extracted files.

use std::path::{Component, Path};

use super::front_matter::FrontMatter;

/// Files with this stem stand for their directory (`guides/index.md` is `/guides`).
pub const INDEX_FILE_STEM: &str = "index";

/// Where a document's href came from. Explicit slugs win href collisions
/// against derived paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefSource {
    Slug,
    Derived,
}

/// `title` → `sidebar_label` → file stem. Blank values don't count.
pub fn resolve_title(meta: &FrontMatter, path: &Path) -> String {
    non_blank(meta.title.as_deref())
        .or_else(|| non_blank(meta.sidebar_label.as_deref()))
        .map(str::to_string)
        .unwrap_or_else(|| file_stem(path))
}

/// An explicit `slug` verbatim, otherwise the path-derived URL.
pub fn resolve_href(meta: &FrontMatter, relative: &Path, url_base: &str) -> (String, HrefSource) {
    match non_blank(meta.slug.as_deref()) {
        Some(slug) => (slug.to_string(), HrefSource::Slug),
        None => (derive_href(relative, url_base), HrefSource::Derived),
    }
}

/// `guides/setup.md` under `docs` → `/docs/guides/setup`.
///
/// Segments are collected from the URL base, the relative directory and the
/// stem (dropped for index files), empty ones skipped, so the result always has
/// exactly one leading slash and no doubled separators.
pub fn derive_href(relative: &Path, url_base: &str) -> String {
    let mut segments: Vec<String> = url_base
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(parent) = relative.parent() {
        segments.extend(parent.components().filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        }));
    }

    let stem = file_stem(relative);
    if stem != INDEX_FILE_STEM {
        segments.push(stem);
    }

    format!("/{}", segments.join("/"))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| INDEX_FILE_STEM.to_string())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
