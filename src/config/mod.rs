//! Configuration module for Wiki-Quiz
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so an empty file (or no file at all) is a valid
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use wiki_quiz::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("wiki-quiz.toml")).unwrap();
//! println!("Server will listen on: {}", config.server.bind);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, ServerConfig, StorageConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, load_config_with_hash};
pub use validation::validate;
