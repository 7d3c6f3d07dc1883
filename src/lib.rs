// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site search for static documentation sites, backed by the docfind engine.
//!
//! At build time, the Markdown/MDX content of the site is flattened into a
//! corpus of plain-text documents and handed to the external `docfind` CLI,
//! which writes a self-contained search module next to the built site. At
//! runtime, the search widget loads that module on first use and queries it
//! as the user types.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus/     │────▶│  engine/     │────▶│  docfind/    │
//! │ (front matter│     │ (temp corpus,│     │ docfind.js   │
//! │  strip, href)│     │  CLI, publish│     │ docfind_bg.  │
//! └──────────────┘     └──────────────┘     │   wasm       │
//!        ▲                    ▲             └──────┬───────┘
//!        │                    │                    │ lazy load
//! ┌──────┴────────────────────┴──┐          ┌──────▼───────┐
//! │  build/ (post-build step)    │          │  client/     │
//! │  config (theme options)      │          │ (debounce,   │
//! └──────────────────────────────┘          │  session)    │
//!                                           └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use docfind_theme::build::run_post_build;
//! use docfind_theme::config::ThemeOptions;
//! use docfind_theme::engine::CliEngine;
//!
//! let options = ThemeOptions::default();
//! let engine = CliEngine::new(&options.cli_binary);
//! let report = run_post_build(site_dir, out_dir, &options, &engine).await;
//! ```

pub mod build;
pub mod client;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;

// Test utilities (always compiled, hidden from docs)
#[doc(hidden)]
pub mod testing;

pub use corpus::Document;
pub use error::{Error, Result};
