//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the QuizStore trait.

use crate::quiz::QuestionRecord;
use crate::storage::schema::{initialize_schema, schema_version, SCHEMA_VERSION};
use crate::storage::traits::{QuizStore, StorageError, StorageResult};
use crate::storage::{QuizRecord, QuizSummary};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Creates a new SqliteStorage instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStorage)` - Successfully opened/created database
    /// * `Err(StorageError)` - Failed to open database
    pub fn new(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        Self::with_schema(conn)
    }

    /// Creates an in-memory database
    pub fn new_in_memory() -> StorageResult<Self> {
        Self::with_schema(Connection::open_in_memory()?)
    }

    /// Creates the schema on a fresh database
    ///
    /// Refuses databases written by a newer schema rather than downgrading
    /// their recorded version.
    fn with_schema(conn: Connection) -> StorageResult<Self> {
        let found = schema_version(&conn)?;
        if found > SCHEMA_VERSION {
            return Err(StorageError::UnsupportedSchema {
                found,
                supported: SCHEMA_VERSION,
            });
        }

        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

/// Formats a timestamp with a fixed width so text order matches time order
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(column: usize, value: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

fn parse_questions(column: usize, value: &str) -> rusqlite::Result<Vec<QuestionRecord>> {
    serde_json::from_str(value)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<QuizRecord> {
    Ok(QuizRecord {
        id: row.get(0)?,
        source_url: row.get(1)?,
        title: row.get(2)?,
        questions: parse_questions(3, &row.get::<_, String>(3)?)?,
        created_at: parse_timestamp(4, &row.get::<_, String>(4)?)?,
    })
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<QuizSummary> {
    Ok(QuizSummary {
        id: row.get(0)?,
        source_url: row.get(1)?,
        title: row.get(2)?,
        created_at: parse_timestamp(3, &row.get::<_, String>(3)?)?,
    })
}

impl QuizStore for SqliteStorage {
    fn create(
        &mut self,
        source_url: &str,
        title: &str,
        questions: &[QuestionRecord],
    ) -> StorageResult<QuizRecord> {
        if source_url.trim().is_empty() {
            return Err(StorageError::InvalidRecord(
                "source url cannot be empty".to_string(),
            ));
        }

        if title.trim().is_empty() {
            return Err(StorageError::InvalidRecord(
                "title cannot be empty".to_string(),
            ));
        }

        if let Some(position) = questions.iter().position(|q| !q.is_well_formed()) {
            return Err(StorageError::InvalidQuestion(format!(
                "question {} must have {} distinct options including its answer",
                position + 1,
                crate::quiz::OPTIONS_PER_QUESTION
            )));
        }

        let questions_json = serde_json::to_string(questions)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        // Round-trip through the stored form so the returned record matches a later read
        let stamp = format_timestamp(Utc::now());
        let created_at = parse_timestamp(4, &stamp)?;

        self.conn.execute(
            "INSERT INTO quizzes (url, title, questions, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![source_url, title, questions_json, stamp],
        )?;

        Ok(QuizRecord {
            id: self.conn.last_insert_rowid(),
            source_url: source_url.to_string(),
            title: title.to_string(),
            questions: questions.to_vec(),
            created_at,
        })
    }

    fn list_all(&self) -> StorageResult<Vec<QuizSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, url, title, created_at FROM quizzes ORDER BY created_at DESC, id DESC",
        )?;

        let quizzes = stmt
            .query_map([], summary_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(quizzes)
    }

    fn get_by_id(&self, id: i64) -> StorageResult<QuizRecord> {
        let mut stmt = self.conn.prepare(
            "SELECT id, url, title, questions, created_at FROM quizzes WHERE id = ?1",
        )?;

        stmt.query_row(params![id], record_from_row)
            .optional()?
            .ok_or(StorageError::QuizNotFound(id))
    }

    fn count(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quizzes", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
