//! Storage traits and error types
//!
//! This module defines the trait interface for quiz store backends and
//! associated error types.

use crate::quiz::QuestionRecord;
use crate::storage::{QuizRecord, QuizSummary};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Quiz not found: {0}")]
    QuizNotFound(i64),

    #[error("Invalid quiz record: {0}")]
    InvalidRecord(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database schema version {found} is newer than supported version {supported}")]
    UnsupportedSchema { found: u32, supported: u32 },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for quiz store implementations
///
/// The store is append-only: records are created once and never updated or
/// deleted. It assigns the identifier and creation timestamp of every record.
pub trait QuizStore {
    /// Appends a new quiz
    ///
    /// # Arguments
    ///
    /// * `source_url` - The article URL, stored verbatim
    /// * `title` - The extracted article title
    /// * `questions` - The questions in display order
    ///
    /// # Returns
    ///
    /// The full record, including its assigned id and creation timestamp
    fn create(
        &mut self,
        source_url: &str,
        title: &str,
        questions: &[QuestionRecord],
    ) -> StorageResult<QuizRecord>;

    /// Lists every quiz without its questions, newest first
    fn list_all(&self) -> StorageResult<Vec<QuizSummary>>;

    /// Gets a quiz by ID
    ///
    /// Returns [`StorageError::QuizNotFound`] when no quiz has this id.
    fn get_by_id(&self, id: i64) -> StorageResult<QuizRecord>;

    /// Counts stored quizzes
    fn count(&self) -> StorageResult<u64>;
}
