//! Page processor trait

use crate::crawler::Page;

/// Handles one successfully fetched page
///
/// Called concurrently from many crawl tasks. Failures are the processor's
/// own concern: they are logged, never returned, and never stop the crawl.
pub trait PageProcessor: Send + Sync {
    fn process(&self, url: &str, page: &Page);
}
