//! Quiz generation pipeline
//!
//! This module contains the request-handling core, including:
//! - HTTP fetching of article markup
//! - Title and summary extraction
//! - Orchestration of fetch → parse → synthesize → persist → respond

mod fetcher;
mod orchestrator;
mod parser;

pub use fetcher::{build_http_client, FetchError, PageFetcher};
pub use orchestrator::{GeneratedQuiz, PipelineError, QuizPipeline};
pub use parser::{parse_page, ParseError, ParsedPage};

use crate::config::Config;
use crate::quiz::TemplateSynthesizer;
use crate::storage::{shared, SqliteStorage};
use crate::QuizError;
use std::path::Path;
use std::sync::Arc;

/// Path value that selects a throwaway in-memory store
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Builds the pipeline described by a configuration
///
/// This is the main entry point for wiring the service. It will:
/// 1. Open (or create) the quiz database
/// 2. Build the HTTP client used for article fetches
/// 3. Select the template synthesizer
///
/// # Arguments
///
/// * `config` - The validated service configuration
///
/// # Returns
///
/// * `Ok(QuizPipeline)` - Ready to serve requests
/// * `Err(QuizError)` - The store or HTTP client could not be initialized
pub fn build_pipeline(config: &Config) -> Result<QuizPipeline, QuizError> {
    let storage = if config.storage.database_path == IN_MEMORY_DATABASE {
        tracing::warn!("Using an in-memory quiz store; quizzes are lost on exit");
        SqliteStorage::new_in_memory()?
    } else {
        SqliteStorage::new(Path::new(&config.storage.database_path))?
    };

    let fetcher = PageFetcher::new(&config.fetcher)?;

    Ok(QuizPipeline::new(
        fetcher,
        Arc::new(TemplateSynthesizer::new()),
        shared(storage),
    ))
}
