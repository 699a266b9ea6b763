//! Page processors: what the crawler does with every fetched page
//!
//! Two interchangeable strategies implement [`PageProcessor`]:
//! - [`StatusReporter`] prints each URL with its classified HTTP status
//! - [`SelectorReporter`] prints values picked out of each page with a CSS selector
//!
//! Both serialize writes to their output so that concurrent tasks never
//! interleave inside one page's output block.

mod selector;
mod status;
mod traits;

pub use selector::SelectorReporter;
pub use status::{StatusBand, StatusReporter};
pub use traits::PageProcessor;

use crate::config::ProcessorKind;
use crate::ValidationError;
use std::io::Write;
use std::sync::Arc;

/// Builds the processor selected for a run, writing to `out`
///
/// # Returns
///
/// * `Ok(Arc<dyn PageProcessor>)` - Processor ready to share across tasks
/// * `Err(ValidationError)` - The selector does not parse
pub fn build_processor<W>(
    kind: &ProcessorKind,
    out: W,
) -> Result<Arc<dyn PageProcessor>, ValidationError>
where
    W: Write + Send + 'static,
{
    let processor: Arc<dyn PageProcessor> = match kind {
        ProcessorKind::Status => Arc::new(StatusReporter::new(out)),
        ProcessorKind::Selector { selector, mode } => {
            Arc::new(SelectorReporter::new(selector, mode.clone(), out)?)
        }
    };
    Ok(processor)
}
