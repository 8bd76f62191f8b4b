//! Request orchestration - the quiz generation pipeline
//!
//! This module sequences every generation request through
//! fetch → parse → synthesize → persist → respond, tracking the request's
//! state and converting each step's failure into a [`PipelineError`].
//! Persistence is the last fallible step, so a failed request never leaves a
//! partial record behind.

use crate::pipeline::fetcher::{FetchError, PageFetcher};
use crate::pipeline::parser::{parse_page, ParseError};
use crate::quiz::{QuestionRecord, QuizSynthesizer};
use crate::state::{FailureReason, RequestState};
use crate::storage::{QuizRecord, QuizStore, QuizSummary, SharedStore, StorageError};
use std::sync::{Arc, MutexGuard};
use thiserror::Error;

/// Errors surfaced by the pipeline and history lookups
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("URL is required")]
    MissingInput,

    #[error("Failed to fetch Wikipedia page: {0}")]
    FetchFailed(FetchError),

    #[error("Failed to fetch Wikipedia page: {0}")]
    ParseFailed(ParseError),

    #[error("Failed to save quiz: {0}")]
    PersistFailed(StorageError),

    #[error("Quiz {0} not found")]
    NotFound(i64),

    #[error("Failed to load quiz history: {0}")]
    Storage(StorageError),

    #[error("Invalid request state transition: {from} -> {to}")]
    InvalidTransition { from: RequestState, to: RequestState },
}

impl PipelineError {
    /// The failure recorded on the request when this error ends it
    pub fn failure_reason(&self) -> Option<FailureReason> {
        match self {
            Self::MissingInput => Some(FailureReason::MissingInput),
            Self::FetchFailed(_) => Some(FailureReason::FetchFailed),
            Self::ParseFailed(_) => Some(FailureReason::ParseFailed),
            Self::PersistFailed(_) => Some(FailureReason::PersistFailed),
            Self::NotFound(_) | Self::Storage(_) | Self::InvalidTransition { .. } => None,
        }
    }
}

/// A successfully generated and stored quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuiz {
    /// The stored record
    pub record: QuizRecord,

    /// The article's first paragraph (not persisted)
    pub summary: String,

    /// Suggested follow-up topics (not persisted)
    pub related_topics: Vec<String>,
}

/// Tracks one request's walk through [`RequestState`]
struct RequestTracker {
    state: RequestState,
}

impl RequestTracker {
    fn new() -> Self {
        Self {
            state: RequestState::Start,
        }
    }

    fn advance(&mut self, to: RequestState) -> Result<(), PipelineError> {
        if !self.state.can_transition_to(to) {
            return Err(PipelineError::InvalidTransition {
                from: self.state,
                to,
            });
        }

        tracing::debug!("Request state: {} -> {}", self.state, to);
        self.state = to;
        Ok(())
    }

    /// Moves the request to `Failed` and hands the error back
    fn fail(&mut self, error: PipelineError) -> PipelineError {
        if let Some(reason) = error.failure_reason() {
            let failed = RequestState::Failed(reason);
            if self.state.can_transition_to(failed) {
                self.state = failed;
            }
        }

        tracing::warn!("Quiz generation {}: {}", self.state, error);
        error
    }
}

/// The quiz generation pipeline and its collaborators
#[derive(Clone)]
pub struct QuizPipeline {
    fetcher: PageFetcher,
    synthesizer: Arc<dyn QuizSynthesizer>,
    store: SharedStore,
}

impl QuizPipeline {
    /// Creates a pipeline from its collaborators
    pub fn new(
        fetcher: PageFetcher,
        synthesizer: Arc<dyn QuizSynthesizer>,
        store: SharedStore,
    ) -> Self {
        Self {
            fetcher,
            synthesizer,
            store,
        }
    }

    /// Name of the configured synthesizer backend
    pub fn synthesizer_name(&self) -> &'static str {
        self.synthesizer.name()
    }

    /// Runs one generation request
    ///
    /// # Arguments
    ///
    /// * `url` - The article URL from the request, if one was supplied
    ///
    /// # Returns
    ///
    /// * `Ok(GeneratedQuiz)` - The stored quiz plus summary and related topics
    /// * `Err(PipelineError)` - `MissingInput`, `FetchFailed`, `ParseFailed`
    ///   or `PersistFailed`; nothing is stored on failure
    pub async fn generate(&self, url: Option<&str>) -> Result<GeneratedQuiz, PipelineError> {
        let mut tracker = RequestTracker::new();

        let url = match url.filter(|u| !u.trim().is_empty()) {
            Some(url) => url,
            None => return Err(tracker.fail(PipelineError::MissingInput)),
        };

        tracker.advance(RequestState::Fetching)?;
        let markup = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| tracker.fail(PipelineError::FetchFailed(e)))?;

        tracker.advance(RequestState::Parsing)?;
        let page = parse_page(&markup).map_err(|e| tracker.fail(PipelineError::ParseFailed(e)))?;

        tracker.advance(RequestState::Synthesizing)?;
        let quiz = self.synthesizer.synthesize(&page.title, &page.summary);
        tracing::debug!(
            "Synthesizer '{}' produced {} questions for '{}'",
            self.synthesizer.name(),
            quiz.questions.len(),
            page.title
        );

        tracker.advance(RequestState::Persisting)?;
        let record = self
            .persist(url, &page.title, &quiz.questions)
            .map_err(|e| tracker.fail(PipelineError::PersistFailed(e)))?;

        tracker.advance(RequestState::Responding)?;
        tracing::info!("Generated quiz {} for '{}' ({})", record.id, record.title, url);

        Ok(GeneratedQuiz {
            record,
            summary: page.summary,
            related_topics: quiz.related_topics,
        })
    }

    /// Lists stored quizzes, newest first
    pub fn history(&self) -> Result<Vec<QuizSummary>, PipelineError> {
        self.lock_store()
            .and_then(|store| store.list_all())
            .map_err(PipelineError::Storage)
    }

    /// Looks up one stored quiz
    ///
    /// Returns [`PipelineError::NotFound`] when no quiz has this id.
    pub fn quiz(&self, id: i64) -> Result<QuizRecord, PipelineError> {
        self.lock_store()
            .and_then(|store| store.get_by_id(id))
            .map_err(|e| match e {
                StorageError::QuizNotFound(id) => PipelineError::NotFound(id),
                other => PipelineError::Storage(other),
            })
    }

    /// Counts stored quizzes
    pub fn quiz_count(&self) -> Result<u64, PipelineError> {
        self.lock_store()
            .and_then(|store| store.count())
            .map_err(PipelineError::Storage)
    }

    fn persist(
        &self,
        url: &str,
        title: &str,
        questions: &[QuestionRecord],
    ) -> Result<QuizRecord, StorageError> {
        let mut store = self.lock_store()?;
        store.create(url, title, questions)
    }

    fn lock_store(&self) -> Result<MutexGuard<'_, dyn QuizStore + Send + 'static>, StorageError> {
        self.store
            .lock()
            .map_err(|_| StorageError::Unavailable("store lock poisoned".to_string()))
    }
}
