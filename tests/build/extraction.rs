//! Corpus extraction over real directory trees.

use docfind_theme::build::{collect_corpus, content_roots};
use docfind_theme::config::ThemeOptions;
use docfind_theme::corpus::{extract, DocumentRoot};
use docfind_theme::testing::write_site;
use tempfile::TempDir;

#[tokio::test]
async fn test_slug_overrides_path() {
    let site = TempDir::new().unwrap();
    write_site(
        site.path(),
        &[("docs/deep/nested/page.md", "---\nslug: /custom\n---\nSome text.")],
    );

    let corpus = extract(&site.path().join("docs"), "docs", "docs").await;
    assert_eq!(corpus.documents()[0].href, "/custom");
}

#[tokio::test]
async fn test_derived_hrefs() {
    let site = TempDir::new().unwrap();
    write_site(
        site.path(),
        &[
            ("docs/guides/setup.md", "# Setup\n\nInstall it."),
            ("docs/guides/index.md", "Guides overview."),
            ("docs/intro.mdx", "import X from './x';\n\nWelcome <X />"),
        ],
    );

    let corpus = extract(&site.path().join("docs"), "docs", "docs").await;
    let hrefs: Vec<&str> = corpus.documents().iter().map(|d| d.href.as_str()).collect();
    assert_eq!(hrefs, ["/docs/guides", "/docs/guides/setup", "/docs/intro"]);

    let intro = &corpus.documents()[2];
    assert_eq!(intro.title, "intro");
    assert_eq!(intro.body, "Welcome");
}

#[tokio::test]
async fn test_title_fallbacks() {
    let site = TempDir::new().unwrap();
    write_site(
        site.path(),
        &[
            ("docs/a.md", "---\ntitle: Real Title\nsidebar_label: Short\n---\nText."),
            ("docs/b.md", "---\nsidebar_label: Short\n---\nText."),
            ("docs/c.md", "---\ntitle: \"\"\n---\nText."),
        ],
    );

    let corpus = extract(&site.path().join("docs"), "docs", "docs").await;
    let titles: Vec<&str> = corpus.documents().iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, ["Real Title", "Short", "c"]);
}

#[tokio::test]
async fn test_empty_bodies_and_other_files_are_skipped() {
    let site = TempDir::new().unwrap();
    write_site(
        site.path(),
        &[
            ("docs/hello.md", "Hello world"),
            ("docs/empty.md", ""),
            ("docs/only-code.md", "```js\nconsole.log(1)\n```"),
            ("docs/notes.txt", "not markup"),
            ("docs/_category_.json", "{}"),
        ],
    );

    let corpus = extract(&site.path().join("docs"), "docs", "docs").await;
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.documents()[0].body, "Hello world");
}

#[tokio::test]
async fn test_missing_root_yields_nothing() {
    let site = TempDir::new().unwrap();
    let corpus = extract(&site.path().join("nope"), "docs", "docs").await;
    assert!(corpus.is_empty());
}

#[tokio::test]
async fn test_extraction_is_idempotent() {
    let site = TempDir::new().unwrap();
    write_site(
        site.path(),
        &[
            ("docs/b.md", "---\ntitle: B\n---\nbee"),
            ("docs/a/z.md", "zed"),
            ("docs/a/index.md", "---\nslug: /start\n---\nstart here"),
            ("blog/2024-01-01-post.md", "# Post\n\nNews."),
        ],
    );

    let roots = content_roots(site.path(), &ThemeOptions::default());
    let first = collect_corpus(&roots).await;
    let second = collect_corpus(&roots).await;

    assert_eq!(first.documents(), second.documents());
    assert_eq!(
        serde_json::to_string(first.documents()).unwrap(),
        serde_json::to_string(second.documents()).unwrap()
    );
}

#[tokio::test]
async fn test_roots_processed_in_order() {
    let site = TempDir::new().unwrap();
    write_site(
        site.path(),
        &[
            ("blog/post.md", "News."),
            ("docs/page.md", "Docs."),
            ("src/pages/index.md", "Landing."),
            ("src/pages/about.mdx", "About us."),
        ],
    );

    let options = ThemeOptions {
        index_pages: true,
        ..ThemeOptions::default()
    };
    let corpus = collect_corpus(&content_roots(site.path(), &options)).await;
    let summary: Vec<(&str, &str)> = corpus
        .documents()
        .iter()
        .map(|d| (d.category.as_str(), d.href.as_str()))
        .collect();

    assert_eq!(
        summary,
        [
            ("docs", "/docs/page"),
            ("blog", "/blog/post"),
            ("pages", "/about"),
            ("pages", "/"),
        ]
    );
}

#[tokio::test]
async fn test_href_collision_across_roots_keeps_first() {
    let site = TempDir::new().unwrap();
    write_site(
        site.path(),
        &[
            ("docs/a.md", "---\nslug: /shared\n---\nfrom docs"),
            ("blog/b.md", "---\nslug: /shared\n---\nfrom blog"),
        ],
    );

    let roots = vec![
        DocumentRoot::new(site.path().join("docs"), "docs", "docs"),
        DocumentRoot::new(site.path().join("blog"), "blog", "blog"),
    ];
    let corpus = collect_corpus(&roots).await;

    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.documents()[0].body, "from docs");
    assert_eq!(corpus.collisions().len(), 1);
    assert_eq!(corpus.collisions()[0].href, "/shared");
}

#[cfg(unix)]
#[tokio::test]
async fn test_non_utf8_file_is_skipped() {
    let site = TempDir::new().unwrap();
    write_site(site.path(), &[("docs/ok.md", "fine")]);
    std::fs::write(site.path().join("docs/bad.md"), [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let corpus = extract(&site.path().join("docs"), "docs", "docs").await;
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.documents()[0].href, "/docs/ok");
}

#[tokio::test]
async fn test_empty_document_in_second_root_is_dropped() {
    let site = TempDir::new().unwrap();
    write_site(
        site.path(),
        &[("docs/hello.md", "Hello world"), ("blog/empty.md", "")],
    );

    let corpus = collect_corpus(&content_roots(site.path(), &ThemeOptions::default())).await;

    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.documents()[0].body, "Hello world");
    assert_eq!(corpus.documents()[0].category, "docs");
    assert!(corpus.collisions().is_empty());
}
