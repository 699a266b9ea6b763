//! Page processor tests against a mock server

use crate::common::{config_with_depth, html, SharedBuffer};
use crawsan::config::{validate_processor_options, PickMode, ProcessorKind};
use crawsan::crawler::Crawler;
use crawsan::output::{build_processor, SelectorReporter};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

#[tokio::test]
async fn test_selector_reporter_prints_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(html(
            r#"<html><body>
                <h2 class="headline">First story</h2>
                <p>body</p>
                <h2 class="headline">Second story</h2>
                <h2>Not a headline</h2>
            </body></html>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let buffer = SharedBuffer::default();
    let reporter = SelectorReporter::new("h2.headline", PickMode::Text, buffer.clone()).unwrap();
    let crawler = Crawler::new(config_with_depth(0), Arc::new(reporter)).unwrap();

    let errors = crawler.run(&[format!("{}/news", server.uri())]).await;

    assert!(errors.is_empty());
    assert_eq!(buffer.lines(), vec!["First story", "Second story"]);
}

#[tokio::test]
async fn test_selector_reporter_prints_attributes_across_pages() {
    let server = MockServer::start().await;
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(format!(
            r#"<a href="{}/one">one</a><a href="{}/two">two</a>"#,
            base, base
        )))
        .mount(&server)
        .await;

    for page in ["/one", "/two"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(html(r#"<img src="/logo.png"><img src="/photo.jpg">"#))
            .expect(1)
            .mount(&server)
            .await;
    }

    let kind = validate_processor_options(Some("img, a"), Some("attr"), Some("src")).unwrap();
    let buffer = SharedBuffer::default();
    let processor = build_processor(&kind, buffer.clone()).unwrap();
    let crawler = Crawler::new(config_with_depth(1), processor).unwrap();

    let errors = crawler.run(&[base.clone()]).await;
    assert!(errors.is_empty());

    let output = buffer.contents();
    // Each page's block is written in one piece, in document order
    assert_eq!(output.matches("/logo.png\n/photo.jpg\n").count(), 2);
    // The seed is processed before its links are claimed, and its anchors
    // have no src attribute
    assert!(output.starts_with("\n\n"));
}

#[tokio::test]
async fn test_status_processor_from_kind() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("<p>home</p>"))
        .mount(&server)
        .await;

    console::set_colors_enabled(false);
    let buffer = SharedBuffer::default();
    let processor = build_processor(&ProcessorKind::Status, buffer.clone()).unwrap();
    let crawler = Crawler::new(config_with_depth(0), processor).unwrap();

    let errors = crawler.run(&[server.uri()]).await;

    assert!(errors.is_empty());
    assert_eq!(buffer.lines(), vec![format!("{}/\t200 OK", server.uri())]);
}
