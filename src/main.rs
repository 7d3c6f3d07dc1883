// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use docfind_theme::build::{collect_corpus, content_roots, run_post_build};
use docfind_theme::config::{ThemeConfig, ThemeOptions};
use docfind_theme::engine::CliEngine;

mod cli;
use cli::{display, Cli, Commands, RootArgs};

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `extract --json` stays pipeable. `RUST_LOG` wins
/// over the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Index {
            site_dir,
            out_dir,
            config,
            cli_binary,
            roots,
        } => {
            let mut options = load_options(config.as_deref(), &roots)?;
            if let Some(binary) = cli_binary {
                options.cli_binary = binary;
            }

            let engine = CliEngine::new(options.cli_binary.clone());
            let report = run_post_build(&site_dir, &out_dir, &options, &engine).await;
            display::print_build_report(&report);
            Ok(())
        }
        Commands::Extract {
            site_dir,
            config,
            json,
            roots,
        } => {
            let options = load_options(config.as_deref(), &roots)?;
            let corpus = collect_corpus(&content_roots(&site_dir, &options)).await;

            if json {
                let out = serde_json::to_string_pretty(corpus.documents())
                    .context("Failed to serialize corpus")?;
                println!("{}", out);
            } else {
                display::print_corpus(&corpus);
            }
            Ok(())
        }
    }
}

/// Config file (if any), then flag overrides.
fn load_options(config: Option<&Path>, roots: &RootArgs) -> Result<ThemeOptions> {
    let mut options = match config {
        Some(path) => ThemeConfig::from_file(path)
            .with_context(|| format!("Invalid theme config {}", path.display()))?
            .options(),
        None => ThemeOptions::default(),
    };
    roots.apply(&mut options);
    Ok(options)
}
