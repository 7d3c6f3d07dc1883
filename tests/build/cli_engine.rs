//! Running a real subprocess as the engine.

#![cfg(unix)]

use docfind_theme::build::{run_post_build, BuildOutcome};
use docfind_theme::config::ThemeOptions;
use docfind_theme::engine::{build_index, CliEngine, IndexEngine};
use docfind_theme::testing::{make_doc, write_site};
use docfind_theme::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[tokio::test]
async fn test_missing_binary_is_spawn_error() {
    let temp = TempDir::new().unwrap();
    let engine = CliEngine::new("docfind-definitely-not-installed");

    let err = engine.build(&temp.path().join("c.json"), temp.path()).await.unwrap_err();
    assert!(matches!(err, Error::EngineSpawn { ref binary, .. } if binary == "docfind-definitely-not-installed"));
}

#[tokio::test]
async fn test_nonzero_exit_carries_stderr() {
    let temp = TempDir::new().unwrap();
    let bin = script(temp.path(), "fails.sh", "echo 'corpus rejected' >&2\nexit 3");
    let engine = CliEngine::new(bin.to_string_lossy());

    let err = engine.build(&temp.path().join("c.json"), temp.path()).await.unwrap_err();
    match err {
        Error::EngineFailed { code, diagnostics, .. } => {
            assert_eq!(code, Some(3));
            assert_eq!(diagnostics, "corpus rejected");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_receives_corpus_then_output_dir() {
    let temp = TempDir::new().unwrap();
    let bin = script(
        temp.path(),
        "docfind.sh",
        "cp \"$1\" \"$2/seen.json\"\necho js > \"$2/docfind.js\"\necho wasm > \"$2/docfind_bg.wasm\"",
    );
    let out = temp.path().join("site-build").join("docfind");
    let docs = vec![make_doc("Intro", "docs", "/docs/intro")];

    build_index(&docs, &out, &CliEngine::new(bin.to_string_lossy()))
        .await
        .unwrap();

    let seen: Vec<docfind_theme::Document> =
        serde_json::from_str(&fs::read_to_string(out.join("seen.json")).unwrap()).unwrap();
    assert_eq!(seen, docs);
    assert!(out.join("docfind.js").exists());
    assert!(out.join("docfind_bg.wasm").exists());
}

#[tokio::test]
async fn test_post_build_survives_missing_cli() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), &[("docs/a.md", "Some text")]);
    let out = TempDir::new().unwrap();
    let options = ThemeOptions {
        cli_binary: "docfind-definitely-not-installed".to_string(),
        ..ThemeOptions::default()
    };

    let engine = CliEngine::new(options.cli_binary.clone());
    let report = run_post_build(site.path(), out.path(), &options, &engine).await;

    assert!(matches!(report.outcome, BuildOutcome::Failed { .. }));
    assert_eq!(report.corpus.len(), 1);
}
