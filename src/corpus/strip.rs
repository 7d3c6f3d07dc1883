// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markdown/MDX to plain text.
//!
//! This is not a parser. It's a fixed sequence of regex rewrites that gets
//! "good enough for a search index" out of whatever people put in their docs.
//! Malformed markup degrades to a few stray characters in the index, which
//! nobody notices, instead of a failed site build, which everybody notices.
//!
//! The order matters. Tags go before code fences so a `<div>` inside prose
//! doesn't eat a fence delimiter, images go before links because an image is
//! a link with a `!` in front, and whitespace collapsing runs last so the
//! blank lines left behind by earlier passes get folded.
//!
//! Each pass is a plain `fn(&str) -> String` so it can be tested on its own.

use regex::Regex;
use std::sync::LazyLock;

static IMPORT_EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:import|export)\s.*$").expect("IMPORT_EXPORT regex"));

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG regex"));

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("FENCED_CODE regex"));

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]*`").expect("INLINE_CODE regex"));

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("IMAGE regex"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("LINK regex"));

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").expect("HEADING regex"));

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_]{1,3}([^*_]+)[*_]{1,3}").expect("EMPHASIS regex"));

static BLOCKQUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^>\s+").expect("BLOCKQUOTE regex"));

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[-*_]{3,}\s*$").expect("HORIZONTAL_RULE regex"));

static ADMONITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^:::.*$").expect("ADMONITION regex"));

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("BLANK_RUN regex"));

/// A single named rewrite.
pub type StripPass = (&'static str, fn(&str) -> String);

/// The passes in application order.
pub static PASSES: &[StripPass] = &[
    ("import-export", strip_import_export),
    ("tags", strip_tags),
    ("fenced-code", strip_fenced_code),
    ("inline-code", strip_inline_code),
    ("images", strip_images),
    ("links", strip_links),
    ("headings", strip_headings),
    ("emphasis", strip_emphasis),
    ("blockquotes", strip_blockquotes),
    ("horizontal-rules", strip_horizontal_rules),
    ("admonitions", strip_admonitions),
    ("blank-lines", collapse_blank_lines),
    ("trim", trim),
];

/// Run every pass over `content`.
pub fn strip_markdown(content: &str) -> String {
    PASSES
        .iter()
        .fold(content.to_string(), |text, (_, pass)| pass(&text))
}

pub fn strip_import_export(text: &str) -> String {
    IMPORT_EXPORT.replace_all(text, "").into_owned()
}

pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

pub fn strip_fenced_code(text: &str) -> String {
    FENCED_CODE.replace_all(text, "").into_owned()
}

pub fn strip_inline_code(text: &str) -> String {
    INLINE_CODE.replace_all(text, "").into_owned()
}

pub fn strip_images(text: &str) -> String {
    IMAGE.replace_all(text, "").into_owned()
}

/// `[text](url)` becomes `text`.
pub fn strip_links(text: &str) -> String {
    LINK.replace_all(text, "${1}").into_owned()
}

pub fn strip_headings(text: &str) -> String {
    HEADING.replace_all(text, "").into_owned()
}

/// `**bold**`, `_em_`, `***both***` keep their inner text.
pub fn strip_emphasis(text: &str) -> String {
    EMPHASIS.replace_all(text, "${1}").into_owned()
}

pub fn strip_blockquotes(text: &str) -> String {
    BLOCKQUOTE.replace_all(text, "").into_owned()
}

pub fn strip_horizontal_rules(text: &str) -> String {
    HORIZONTAL_RULE.replace_all(text, "").into_owned()
}

/// Docusaurus `:::note` / `:::` fences. The text between them stays.
pub fn strip_admonitions(text: &str) -> String {
    ADMONITION.replace_all(text, "").into_owned()
}

pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}

pub fn trim(text: &str) -> String {
    text.trim().to_string()
}
