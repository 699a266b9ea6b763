//! Selector Reporter: prints values picked out of every fetched page

use crate::config::PickMode;
use crate::crawler::{pick_content, Page};
use crate::output::PageProcessor;
use crate::ValidationError;
use scraper::Selector;
use std::io::{Stdout, Write};
use std::sync::{Mutex, PoisonError};

/// Prints the text or attribute value of every element matching a selector
pub struct SelectorReporter<W = Stdout> {
    selector: Selector,
    mode: PickMode,
    out: Mutex<W>,
}

impl<W: Write> SelectorReporter<W> {
    pub fn new(selector: &str, mode: PickMode, out: W) -> Result<Self, ValidationError> {
        let selector = Selector::parse(selector).map_err(|e| ValidationError::InvalidSelector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            selector,
            mode,
            out: Mutex::new(out),
        })
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> PageProcessor for SelectorReporter<W> {
    fn process(&self, url: &str, page: &Page) {
        let values = pick_content(&page.body, &self.selector, &self.mode);
        tracing::debug!("Picked {} values from {}", values.len(), url);

        let mut block = String::new();
        for value in &values {
            block.push_str(value);
            block.push('\n');
        }

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(block.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!("Failed to write picked values for {}: {}", url, e);
        }
    }
}
