//! Shared fixtures for the integration tests

use std::sync::Arc;
use wiki_quiz::config::{Config, FetcherConfig};
use wiki_quiz::pipeline::{PageFetcher, QuizPipeline, IN_MEMORY_DATABASE};
use wiki_quiz::storage::{shared, QuizRecord, QuizStore, QuizSummary, StorageError, StorageResult};
use wiki_quiz::{build_pipeline, QuestionRecord, TemplateSynthesizer};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A minimal article page with one title heading and one paragraph
pub fn article_html(title: &str, summary: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>{title} - Wikipedia</title></head>
<body>
  <div id="content">
    <h1 id="firstHeading">{title}</h1>
    <div class="mw-parser-output">
      <p class="mw-empty-elt"></p>
      <p>{summary}</p>
      <p>A second paragraph that is not part of the summary.</p>
    </div>
  </div>
</body></html>"#
    )
}

/// Serves `html` at `route` on the mock origin
pub async fn mount_article(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

/// Default configuration backed by an in-memory store
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.storage.database_path = IN_MEMORY_DATABASE.to_string();
    config
}

/// A pipeline over a fresh in-memory store
pub fn test_pipeline() -> QuizPipeline {
    build_pipeline(&test_config()).expect("Failed to build pipeline")
}

/// A pipeline whose store rejects every operation
pub fn failing_pipeline() -> QuizPipeline {
    QuizPipeline::new(
        PageFetcher::new(&FetcherConfig::default()).expect("Failed to build fetcher"),
        Arc::new(TemplateSynthesizer::new()),
        shared(FailingStore),
    )
}

/// A store that is always unavailable
pub struct FailingStore;

impl QuizStore for FailingStore {
    fn create(&mut self, _: &str, _: &str, _: &[QuestionRecord]) -> StorageResult<QuizRecord> {
        Err(StorageError::Unavailable("database is locked".to_string()))
    }

    fn list_all(&self) -> StorageResult<Vec<QuizSummary>> {
        Err(StorageError::Unavailable("database is locked".to_string()))
    }

    fn get_by_id(&self, _: i64) -> StorageResult<QuizRecord> {
        Err(StorageError::Unavailable("database is locked".to_string()))
    }

    fn count(&self) -> StorageResult<u64> {
        Err(StorageError::Unavailable("database is locked".to_string()))
    }
}
