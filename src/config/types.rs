use serde::Deserialize;
use std::time::Duration;

/// User agent sent when neither the CLI nor the config file provides one
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Content written when the user agrees to create the default config file
pub const DEFAULT_CONFIG_CONTENT: &str = "urls = [\"https://example.com\"]\n";

/// Persisted configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    /// Seed URLs, crawled in this order
    #[serde(default)]
    pub urls: Vec<String>,

    /// User agent override
    #[serde(default, rename = "useragent")]
    pub user_agent: Option<String>,
}

/// What the Selector Reporter picks out of each matched element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickMode {
    /// Concatenated descendant text
    Text,
    /// Value of the named attribute
    Attr(String),
}

/// Page processing strategy selected for a run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProcessorKind {
    /// Print each URL with its classified HTTP status
    #[default]
    Status,
    /// Print values picked out of each page with a CSS selector
    Selector { selector: String, mode: PickMode },
}

/// Immutable configuration for one crawl run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub user_agent: String,

    /// Per-request timeout; `None` means no timeout
    pub timeout: Option<Duration>,

    pub follow_redirects: bool,

    /// Number of link hops to follow from each seed (0 = seeds only)
    pub max_depth: u32,

    pub processor: ProcessorKind,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            follow_redirects: true,
            max_depth: 1,
            processor: ProcessorKind::Status,
        }
    }
}

impl RunConfig {
    /// Picks the effective user agent: explicit value, then config file, then default
    pub fn resolve_user_agent(cli: Option<&str>, file: Option<&str>) -> String {
        cli.filter(|s| !s.is_empty())
            .or_else(|| file.filter(|s| !s.is_empty()))
            .unwrap_or(DEFAULT_USER_AGENT)
            .to_string()
    }

    /// Converts a timeout in whole seconds; 0 disables it
    pub fn timeout_from_secs(secs: u64) -> Option<Duration> {
        (secs > 0).then(|| Duration::from_secs(secs))
    }
}
