//! Wiki-Quiz: quiz generation from encyclopedia articles
//!
//! This crate fetches an article page, extracts its title and summary,
//! synthesizes a multiple-choice quiz from it, persists the quiz and serves
//! generation and history lookups over HTTP.

pub mod config;
pub mod pipeline;
pub mod quiz;
pub mod server;
pub mod state;
pub mod storage;

use thiserror::Error;

/// Main error type for Wiki-Quiz operations
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] pipeline::FetchError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),
}

/// Result type alias for Wiki-Quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::{build_pipeline, GeneratedQuiz, PipelineError, QuizPipeline};
pub use quiz::{Difficulty, QuestionRecord, QuizSynthesizer, SynthesizedQuiz, TemplateSynthesizer};
pub use state::{FailureReason, RequestState};
pub use storage::{QuizRecord, QuizStore, QuizSummary, SqliteStorage};
