//! Configuration module for Crawsan
//!
//! This module handles the persisted TOML configuration file (seed URLs and
//! user agent) and the immutable per-run configuration assembled from it.
//!
//! # Example
//!
//! ```no_run
//! use crawsan::config::load_config;
//! use std::path::Path;
//!
//! let file = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawler will start from {} seeds", file.urls.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    ConfigFile, PickMode, ProcessorKind, RunConfig, DEFAULT_CONFIG_CONTENT, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{create_default_config, default_config_path, load_config, read_or_create_config};

// Re-export validation functions
pub use validation::{validate_processor_options, validate_seeds};
