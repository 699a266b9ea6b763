//! Crawler coordinator - main crawl orchestration logic
//!
//! Every claimed URL becomes one task on the tokio runtime. A task fetches
//! its page, hands it to the page processor, and, while depth remains,
//! claims the page's links and spawns a task for each one it won. The run
//! ends once the task tracker reports that no task is outstanding.

use crate::config::RunConfig;
use crate::crawler::collector::ErrorCollector;
use crate::crawler::fetcher::{build_http_client, fetch_url};
use crate::crawler::parser::{resolve_link, HtmlLinkExtractor, LinkExtractor};
use crate::crawler::tracker::TaskTracker;
use crate::crawler::visited::VisitedSet;
use crate::output::PageProcessor;
use crate::{CrawsanError, MultipleErrors};
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Crawl engine
///
/// Holds what stays fixed across runs: configuration, HTTP client, page
/// processor and link extractor. Each call to [`Crawler::run`] gets its own
/// visited set and error collection, so one engine can run several crawls.
pub struct Crawler {
    config: Arc<RunConfig>,
    client: Client,
    processor: Arc<dyn PageProcessor>,
    extractor: Arc<dyn LinkExtractor>,
}

/// State shared by all tasks of one run
struct CrawlRun {
    client: Client,
    processor: Arc<dyn PageProcessor>,
    extractor: Arc<dyn LinkExtractor>,
    visited: VisitedSet,
    errors: ErrorCollector,
    tracker: Arc<TaskTracker>,
}

impl Crawler {
    /// Creates a crawler with the default `<a href>` link extractor
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(CrawsanError)` - The HTTP client could not be built
    pub fn new(config: RunConfig, processor: Arc<dyn PageProcessor>) -> Result<Self, CrawsanError> {
        let client = build_http_client(&config)?;

        Ok(Self {
            config: Arc::new(config),
            client,
            processor,
            extractor: Arc::new(HtmlLinkExtractor),
        })
    }

    /// Replaces the link extractor
    pub fn with_link_extractor(mut self, extractor: Arc<dyn LinkExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Crawls from `seeds` and returns every fetch failure of the run
    ///
    /// Duplicate seeds are skipped. Returns only after every task, including
    /// those spawned while expanding links, has finished. Must be called
    /// from within a tokio runtime.
    pub async fn run(&self, seeds: &[String]) -> MultipleErrors {
        let run = Arc::new(CrawlRun {
            client: self.client.clone(),
            processor: Arc::clone(&self.processor),
            extractor: Arc::clone(&self.extractor),
            visited: VisitedSet::new(),
            errors: ErrorCollector::new(),
            tracker: TaskTracker::new(),
        });

        tracing::info!(
            "Starting crawl of {} seed URLs (max depth {})",
            seeds.len(),
            self.config.max_depth
        );

        for seed in seeds {
            let url = canonical_seed(seed);
            if run.visited.try_claim(&url) {
                run.spawn_task(url, self.config.max_depth);
            } else {
                tracing::debug!("Skipping duplicate seed {}", seed);
            }
        }

        run.tracker.wait_idle().await;

        let errors = run.errors.drain();
        tracing::info!(
            "Crawl finished: {} URLs visited, {} failed",
            run.visited.len(),
            errors.len()
        );
        errors
    }
}

impl CrawlRun {
    /// Spawns the task for a URL that was just claimed
    ///
    /// The task is registered with the tracker before it is spawned, and its
    /// children are registered before its own registration is released.
    fn spawn_task(self: &Arc<Self>, url: String, depth: u32) {
        let guard = self.tracker.start();
        let run = Arc::clone(self);

        tokio::spawn(async move {
            let _guard = guard;
            let Some(children) = run.visit(&url, depth).await else {
                return;
            };
            for child in children {
                run.spawn_task(child, depth - 1);
            }
        });
    }

    /// Fetches, processes and expands one URL
    ///
    /// Returns the newly claimed links to crawl next, or `None` when the
    /// fetch failed or no depth remains.
    async fn visit(&self, url: &str, depth: u32) -> Option<Vec<String>> {
        let page = match fetch_url(&self.client, url).await {
            Ok(page) => page,
            Err(e) => {
                self.errors.record(e);
                return None;
            }
        };

        self.processor.process(url, &page);

        if depth == 0 {
            return None;
        }

        let claimed: Vec<String> = self
            .extractor
            .extract_links(&page)
            .iter()
            .filter_map(|href| resolve_link(href, &page.final_url))
            .filter(|link| self.visited.try_claim(link))
            .collect();

        tracing::debug!("{} new links claimed from {}", claimed.len(), url);
        Some(claimed)
    }
}

/// Serializes a seed the same way discovered links are serialized
///
/// `https://a.test` becomes `https://a.test/`, so a page linking back to its
/// seed is recognized as already visited. Unparseable seeds are kept as-is
/// and fail at fetch time.
fn canonical_seed(seed: &str) -> String {
    match Url::parse(seed) {
        Ok(url) => url.to_string(),
        Err(_) => seed.to_string(),
    }
}

/// Runs one crawl with the default link extractor
///
/// # Example
///
/// ```no_run
/// use crawsan::config::RunConfig;
/// use crawsan::crawler::run_crawl;
/// use crawsan::output::StatusReporter;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let seeds = vec!["https://example.com".to_string()];
/// let errors = run_crawl(&seeds, RunConfig::default(), Arc::new(StatusReporter::stdout())).await?;
/// errors.into_result()?;
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(
    seeds: &[String],
    config: RunConfig,
    processor: Arc<dyn PageProcessor>,
) -> Result<MultipleErrors, CrawsanError> {
    let crawler = Crawler::new(config, processor)?;
    Ok(crawler.run(seeds).await)
}
