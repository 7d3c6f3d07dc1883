//! The post-build step end to end, with the engine faked out.

use docfind_theme::build::{run_post_build, BuildOutcome, INDEX_DIR_NAME};
use docfind_theme::config::ThemeOptions;
use docfind_theme::testing::{write_site, RecordingEngine};
use std::fs;
use tempfile::TempDir;

fn sample_site() -> TempDir {
    let site = TempDir::new().unwrap();
    write_site(
        site.path(),
        &[
            ("docs/intro.md", "---\ntitle: Introduction\n---\n# Welcome\n\nStart **here**."),
            ("docs/guides/setup.mdx", "import Tabs from '@theme/Tabs';\n\nRun `npm i`."),
            ("blog/launch.md", "We launched."),
            ("src/pages/about.md", "About page."),
        ],
    );
    site
}

#[tokio::test]
async fn test_builds_index_into_out_dir() {
    let site = sample_site();
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::default();

    let report = run_post_build(site.path(), out.path(), &ThemeOptions::default(), &engine).await;

    let index_dir = out.path().join(INDEX_DIR_NAME);
    assert_eq!(report.index_dir, index_dir);
    assert_eq!(
        report.outcome,
        BuildOutcome::Built {
            artifacts: vec![index_dir.join("docfind.js"), index_dir.join("docfind_bg.wasm")],
        }
    );

    // Pages are off by default.
    let corpora = engine.corpora.borrow();
    let hrefs: Vec<&str> = corpora[0].iter().map(|d| d.href.as_str()).collect();
    assert_eq!(hrefs, ["/docs/guides/setup", "/docs/intro", "/blog/launch"]);
    assert_eq!(corpora[0][1].title, "Introduction");
    assert_eq!(corpora[0][1].body, "Welcome\n\nStart here.");

    let mut names: Vec<String> = fs::read_dir(&index_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["docfind.js", "docfind_bg.wasm"]);
}

#[tokio::test]
async fn test_disabled_roots_are_not_read() {
    let site = sample_site();
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::default();
    let options = ThemeOptions {
        index_docs: false,
        index_blog: false,
        index_pages: true,
        ..ThemeOptions::default()
    };

    let report = run_post_build(site.path(), out.path(), &options, &engine).await;

    assert_eq!(report.corpus.len(), 1);
    assert_eq!(report.corpus.documents()[0].href, "/about");
    assert_eq!(report.corpus.documents()[0].category, "pages");
}

#[tokio::test]
async fn test_empty_site_skips_engine() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::default();

    let report = run_post_build(site.path(), out.path(), &ThemeOptions::default(), &engine).await;

    assert_eq!(report.outcome, BuildOutcome::Skipped);
    assert_eq!(engine.calls(), 0);
    assert!(!out.path().join(INDEX_DIR_NAME).exists());
}

#[tokio::test]
async fn test_engine_failure_is_reported_not_raised() {
    let site = sample_site();
    let out = TempDir::new().unwrap();
    let engine = RecordingEngine::failing("wasm-pack exploded");

    let report = run_post_build(site.path(), out.path(), &ThemeOptions::default(), &engine).await;

    match &report.outcome {
        BuildOutcome::Failed { reason } => assert!(reason.contains("wasm-pack exploded")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(engine.calls(), 1);

    // Temp corpus and staging dir are gone.
    let leftovers: Vec<_> = fs::read_dir(out.path().join(INDEX_DIR_NAME))
        .unwrap()
        .collect();
    assert!(leftovers.is_empty());
}
