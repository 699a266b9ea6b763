//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching
//! - HTML parsing, link extraction and content picking
//! - URL deduplication and completion tracking across concurrent tasks
//! - Overall crawl coordination and error collection

mod collector;
mod coordinator;
mod fetcher;
mod parser;
mod tracker;
mod visited;

pub use collector::ErrorCollector;
pub use coordinator::{run_crawl, Crawler};
pub use fetcher::{build_http_client, fetch_url, FetchResult, Page};
pub use parser::{
    extract_hrefs, pick_content, resolve_link, HtmlLinkExtractor, LinkExtractor,
};
pub use tracker::{TaskGuard, TaskTracker};
pub use visited::VisitedSet;
