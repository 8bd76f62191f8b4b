//! Storage module for persisting quizzes
//!
//! This module handles all database operations, including:
//! - SQLite database initialization and schema management
//! - Appending quiz records
//! - History listing and lookup by id

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStorage;
pub use traits::{QuizStore, StorageError, StorageResult};

use crate::quiz::QuestionRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// A store shared between concurrent requests
///
/// The lock is only held for the duration of a single synchronous store call.
pub type SharedStore = Arc<Mutex<dyn QuizStore + Send>>;

/// Wraps a store so it can be shared between requests
pub fn shared<S>(store: S) -> SharedStore
where
    S: QuizStore + Send + 'static,
{
    Arc::new(Mutex::new(store))
}

/// Initializes or opens a storage database
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStorage)` - Successfully initialized storage
/// * `Err(StorageError)` - Failed to initialize storage
pub fn open_storage(path: &Path) -> StorageResult<SqliteStorage> {
    SqliteStorage::new(path)
}

/// A persisted quiz
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRecord {
    pub id: i64,

    /// The article URL exactly as submitted
    #[serde(rename = "url")]
    pub source_url: String,

    pub title: String,
    pub questions: Vec<QuestionRecord>,
    pub created_at: DateTime<Utc>,
}

/// A quiz as shown in the history listing (no questions)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub id: i64,

    #[serde(rename = "url")]
    pub source_url: String,

    pub title: String,
    pub created_at: DateTime<Utc>,
}
