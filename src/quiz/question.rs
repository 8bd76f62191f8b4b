//! Question records embedded in every quiz

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Number of options every question offers
pub const OPTIONS_PER_QUESTION: usize = 4;

/// How hard a question is meant to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the wire representation of the difficulty
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single multiple-choice question
///
/// The answer is stored as the option text itself, not as a position, so
/// reordering options never changes which one is correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Prompt text
    pub question: String,

    /// Options in display order
    pub options: Vec<String>,

    /// Correct option, equal to exactly one entry of `options`
    pub answer: String,

    pub difficulty: Difficulty,

    /// Why the answer is correct
    pub explanation: String,
}

impl QuestionRecord {
    /// Builds a question from string slices
    pub fn new(
        question: impl Into<String>,
        options: [&str; OPTIONS_PER_QUESTION],
        answer: &str,
        difficulty: Difficulty,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
            difficulty,
            explanation: explanation.into(),
        }
    }

    /// Position of the answer within `options`, if present
    pub fn answer_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.answer)
    }

    /// Returns true if the question has a prompt, exactly
    /// [`OPTIONS_PER_QUESTION`] distinct options, and an answer that is one
    /// of them
    pub fn is_well_formed(&self) -> bool {
        if self.question.trim().is_empty() || self.options.len() != OPTIONS_PER_QUESTION {
            return false;
        }

        let distinct: HashSet<&str> = self.options.iter().map(String::as_str).collect();
        distinct.len() == self.options.len() && self.answer_index().is_some()
    }
}
