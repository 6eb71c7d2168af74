//! Configuration module for doc-census
//!
//! Settings come from an optional TOML file. Every section has defaults, so
//! running without a file targets the public Python documentation sites.
//! The expected-status table is deliberately not part of the configuration.
//!
//! # Example
//!
//! ```no_run
//! use doc_census::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("doc-census.toml")).unwrap();
//! println!("Cache enabled: {}", config.cache.enabled);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CacheConfig, Config, HttpConfig, OutputConfig, SitesConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
