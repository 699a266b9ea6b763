//! Shared helpers for the integration tests

use crawsan::config::RunConfig;
use crawsan::crawler::Crawler;
use crawsan::output::StatusReporter;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use wiremock::{MockServer, ResponseTemplate};

/// In-memory writer that can be inspected while a processor owns a clone
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An HTML page response
pub fn html(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body.into())
        .insert_header("content-type", "text/html")
}

/// An HTML page containing one `<a>` per href
pub fn page_with_links(hrefs: &[String]) -> ResponseTemplate {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{}">link</a>"#, href))
        .collect();
    html(format!("<html><body>{}</body></html>", anchors))
}

pub fn config_with_depth(max_depth: u32) -> RunConfig {
    RunConfig {
        user_agent: "TestBot/1.0".to_string(),
        max_depth,
        ..RunConfig::default()
    }
}

/// A crawler with a Status Reporter writing into the returned buffer
pub fn status_crawler(config: RunConfig) -> (Crawler, SharedBuffer) {
    console::set_colors_enabled(false);
    let buffer = SharedBuffer::default();
    let crawler = Crawler::new(config, Arc::new(StatusReporter::new(buffer.clone())))
        .expect("Failed to build crawler");
    (crawler, buffer)
}

/// Number of requests the server received for `path`
pub async fn hits(server: &MockServer, path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == path)
        .count()
}
