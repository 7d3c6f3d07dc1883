// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docfind-theme command-line interface.
//!
//! Two subcommands: `index` runs the post-build step against a built site,
//! and `extract` shows the corpus that step would hand to the engine, either
//! as a table or as the exact JSON the engine receives.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use docfind_theme::config::ThemeOptions;

#[derive(Parser)]
#[command(
    name = "docfind-theme",
    about = "Build docfind search indexes for documentation sites",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the site content and build the search index
    Index {
        /// Site source directory (contains docs/, blog/, src/pages/)
        #[arg(long, default_value = ".")]
        site_dir: PathBuf,

        /// Built site output directory; the index goes to <OUT_DIR>/docfind
        #[arg(long, default_value = "build")]
        out_dir: PathBuf,

        /// Theme config JSON file ({"docfind": {...}})
        #[arg(long)]
        config: Option<PathBuf>,

        /// docfind binary to invoke (overrides the config file)
        #[arg(long)]
        cli_binary: Option<String>,

        #[command(flatten)]
        roots: RootArgs,
    },

    /// Print the extracted corpus without building an index
    Extract {
        /// Site source directory (contains docs/, blog/, src/pages/)
        #[arg(long, default_value = ".")]
        site_dir: PathBuf,

        /// Theme config JSON file ({"docfind": {...}})
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the corpus as the JSON array handed to the engine
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        roots: RootArgs,
    },
}

/// Per-root switches. Unset flags keep the config file's value.
#[derive(Args, Debug, Default)]
pub struct RootArgs {
    /// Index docs/
    #[arg(long, value_name = "BOOL")]
    pub index_docs: Option<bool>,

    /// Index blog/
    #[arg(long, value_name = "BOOL")]
    pub index_blog: Option<bool>,

    /// Index src/pages/
    #[arg(long, value_name = "BOOL")]
    pub index_pages: Option<bool>,
}

impl RootArgs {
    pub fn apply(&self, options: &mut ThemeOptions) {
        if let Some(docs) = self.index_docs {
            options.index_docs = docs;
        }
        if let Some(blog) = self.index_blog {
            options.index_blog = blog;
        }
        if let Some(pages) = self.index_pages {
            options.index_pages = pages;
        }
    }
}
