//! Status Reporter: prints `<url>\t<status line>` for every fetched page

use crate::crawler::Page;
use crate::output::PageProcessor;
use console::style;
use std::io::{Stdout, Write};
use std::sync::{Mutex, PoisonError};

/// Coarse classification of an HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBand {
    /// 2xx
    Success,
    /// 3xx
    Redirect,
    /// 4xx
    ClientError,
    /// 5xx, anything outside 200-499, and unparseable status lines
    Other,
}

impl StatusBand {
    pub fn classify(code: u16) -> Self {
        match code / 100 {
            2 => Self::Success,
            3 => Self::Redirect,
            4 => Self::ClientError,
            _ => Self::Other,
        }
    }

    /// Classifies a status line such as `404 Not Found` by its leading code
    pub fn from_status_line(line: &str) -> Self {
        line.split_whitespace()
            .next()
            .and_then(|code| code.parse::<u16>().ok())
            .map(Self::classify)
            .unwrap_or(Self::Other)
    }

    /// Styles `text` for terminal display; styling is dropped when colors are off
    pub fn paint(self, text: &str) -> String {
        match self {
            Self::Success => style(text).cyan().to_string(),
            Self::Redirect => style(text).yellow().to_string(),
            Self::ClientError => style(text).red().to_string(),
            Self::Other => text.to_string(),
        }
    }
}

/// Prints each URL with its colored HTTP status
pub struct StatusReporter<W = Stdout> {
    out: Mutex<W>,
}

impl StatusReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> StatusReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> PageProcessor for StatusReporter<W> {
    fn process(&self, url: &str, page: &Page) {
        let status_line = page.status_line();
        let band = StatusBand::from_status_line(&status_line);
        let line = format!("{}\t{}\n", url, band.paint(&status_line));

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(line.as_bytes()).and_then(|()| out.flush()) {
            tracing::warn!("Failed to write status for {}: {}", url, e);
        }
    }
}
