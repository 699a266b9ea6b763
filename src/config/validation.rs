use crate::config::types::{PickMode, ProcessorKind};
use crate::{ConfigError, ValidationError};
use scraper::Selector;
use url::Url;

/// Validates the selector options and builds the processor they describe
///
/// Empty strings count as absent. A pick type without a selector is
/// accepted and ignored; the Status Reporter is used in that case.
///
/// # Returns
///
/// * `Ok(ProcessorKind)` - The processor to run
/// * `Err(ValidationError)` - The combination of options is invalid
pub fn validate_processor_options(
    selector: Option<&str>,
    pick_type: Option<&str>,
    attribute: Option<&str>,
) -> Result<ProcessorKind, ValidationError> {
    let selector = selector.filter(|s| !s.is_empty());
    let pick_type = pick_type.filter(|s| !s.is_empty());
    let attribute = attribute.filter(|s| !s.is_empty());

    if let Some(pick) = pick_type {
        if pick != "text" && pick != "attr" {
            return Err(ValidationError::InvalidPickMode(pick.to_string()));
        }
    }

    let Some(selector) = selector else {
        return Ok(ProcessorKind::Status);
    };

    let mode = match pick_type {
        None => return Err(ValidationError::SelectorWithoutPickMode),
        Some("text") => PickMode::Text,
        Some(_) => match attribute {
            Some(name) => PickMode::Attr(name.to_string()),
            None => return Err(ValidationError::AttrWithoutAttribute),
        },
    };

    Selector::parse(selector).map_err(|e| ValidationError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })?;

    Ok(ProcessorKind::Selector {
        selector: selector.to_string(),
        mode,
    })
}

/// Validates that every seed is an absolute HTTP(S) URL
pub fn validate_seeds(urls: &[String]) -> Result<(), ConfigError> {
    for seed in urls {
        let url = Url::parse(seed)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "Seed URL '{}' must use the http or https scheme",
                seed
            )));
        }
    }

    Ok(())
}
