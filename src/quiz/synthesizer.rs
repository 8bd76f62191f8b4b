//! Synthesizer trait and types
//!
//! This module defines the interface quiz generation backends implement.

use crate::quiz::QuestionRecord;
use serde::Serialize;

/// Number of questions a synthesized quiz contains
pub const QUESTIONS_PER_QUIZ: usize = 5;

/// Number of related topics a synthesized quiz suggests
pub const RELATED_TOPICS_PER_QUIZ: usize = 3;

/// Output of a synthesizer run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesizedQuiz {
    /// Questions in display order
    pub questions: Vec<QuestionRecord>,

    /// Topics to read next
    pub related_topics: Vec<String>,
}

/// Trait for quiz generation backends
///
/// Implementations must return [`QUESTIONS_PER_QUIZ`] well-formed questions
/// and [`RELATED_TOPICS_PER_QUIZ`] related topics, and must not fail: any
/// fallback has to happen inside the backend.
pub trait QuizSynthesizer: Send + Sync {
    /// Short backend name used in logs
    fn name(&self) -> &'static str;

    /// Produces a quiz for an article
    ///
    /// # Arguments
    ///
    /// * `title` - The article title
    /// * `summary` - The article's first paragraph (may be empty)
    fn synthesize(&self, title: &str, summary: &str) -> SynthesizedQuiz;
}
