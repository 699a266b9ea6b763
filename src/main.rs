//! Crawsan main entry point
//!
//! This is the command-line interface for the Crawsan web crawler.

use anyhow::Context;
use clap::Parser;
use crawsan::config::{read_or_create_config, validate_processor_options, RunConfig};
use crawsan::crawler::run_crawl;
use crawsan::output::build_processor;
use crawsan::CrawsanError;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Crawsan: web crawling command utility
///
/// Fetches every seed URL from the config file, prints the HTTP status of
/// each page (or values picked with a CSS selector) and follows links up to
/// the given depth, visiting each URL at most once.
#[derive(Parser, Debug)]
#[command(name = "crawsan")]
#[command(version)]
#[command(about = "Web crawling command utility", long_about = None)]
struct Cli {
    /// User agent sent with every request
    #[arg(short = 'U', long)]
    useragent: Option<String>,

    /// Path to TOML configuration file (default: ~/.config/crawsan/config.toml)
    #[arg(short = 'C', long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Report redirect responses instead of following them
    #[arg(long)]
    no_redirect: bool,

    /// CSS selector whose matches are printed instead of the status
    #[arg(long)]
    selector: Option<String>,

    /// What to print for each match: 'text' or 'attr'
    #[arg(long)]
    pick_type: Option<String>,

    /// Attribute to print when pick-type is 'attr'
    #[arg(long)]
    attribute: Option<String>,

    /// Do not report fetch failures or exit non-zero because of them
    #[arg(long)]
    no_error: bool,

    /// Per-request timeout in seconds (0 = no timeout)
    #[arg(long, default_value_t = 0)]
    timeout: u64,

    /// Number of link hops to follow from each seed
    #[arg(long, default_value_t = 1)]
    depth: u32,

    /// Enable debug logging
    #[arg(short = 'D', long)]
    debug: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.debug, cli.verbose);

    match run(cli, std::io::stdout(), std::io::stderr()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only crawl output. `RUST_LOG`
/// overrides the flags when set.
fn setup_logging(debug: bool, verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(debug, verbose));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Filter used when `RUST_LOG` is unset
///
/// At the default level fetch failures are not logged; they are reported
/// once, by `run`, after the crawl.
fn default_filter(debug: bool, verbose: u8) -> EnvFilter {
    match (debug, verbose) {
        (false, 0) => EnvFilter::new("crawsan=warn"),
        (true, 0) | (false, 1) => EnvFilter::new("crawsan=debug,warn"),
        _ => EnvFilter::new("crawsan=trace,info"),
    }
}

/// Validates options, loads seeds, crawls, and maps the outcome to an exit code
///
/// Crawl output and the config prompt go to `out`; the aggregate fetch
/// failure report goes to `err`.
async fn run<W, E>(cli: Cli, mut out: W, mut err: E) -> anyhow::Result<ExitCode>
where
    W: Write + Send + 'static,
    E: Write,
{
    // Processor options are checked before touching the config file or network
    let processor_kind = validate_processor_options(
        cli.selector.as_deref(),
        cli.pick_type.as_deref(),
        cli.attribute.as_deref(),
    )?;

    let file = read_or_create_config(
        cli.config.as_deref(),
        std::io::stdin().lock(),
        &mut out,
    )
    .context("failed to load configuration")?;

    let Some(file) = file else {
        tracing::info!("No configuration file, nothing to crawl");
        return Ok(ExitCode::SUCCESS);
    };

    let config = RunConfig {
        user_agent: RunConfig::resolve_user_agent(
            cli.useragent.as_deref(),
            file.user_agent.as_deref(),
        ),
        timeout: RunConfig::timeout_from_secs(cli.timeout),
        follow_redirects: !cli.no_redirect,
        max_depth: cli.depth,
        processor: processor_kind,
    };

    let processor = build_processor(&config.processor, out)?;
    let errors = run_crawl(&file.urls, config, processor).await?;

    match errors.into_result() {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(_) if cli.no_error => Ok(ExitCode::SUCCESS),
        Err(errors) => {
            writeln!(err, "{}", CrawsanError::from(errors))?;
            Ok(ExitCode::from(1))
        }
    }
}
