//! Request state definitions for tracking quiz generation progress
//!
//! Every generation request walks the same linear path; any step that can
//! fail may instead end the request in `Failed`.

use std::fmt;

/// Why a generation request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// No article URL was supplied
    MissingInput,

    /// The article could not be retrieved
    FetchFailed,

    /// The article markup had no title
    ParseFailed,

    /// The quiz could not be stored
    PersistFailed,
}

impl FailureReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::FetchFailed => "fetch_failed",
            Self::ParseFailed => "parse_failed",
            Self::PersistFailed => "persist_failed",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the current state of a generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestState {
    // ===== Active States =====
    /// Request received, input not yet validated
    Start,

    /// Article markup is being retrieved
    Fetching,

    /// Title and summary are being extracted
    Parsing,

    /// Questions are being produced
    Synthesizing,

    /// The quiz is being written to the store
    Persisting,

    // ===== Terminal States =====
    /// The quiz was stored and the response is being assembled
    Responding,

    /// The request ended without a quiz
    Failed(FailureReason),
}

impl RequestState {
    /// Returns true if no further transition is possible
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Responding | Self::Failed(_))
    }

    /// The state that follows this one when the current step succeeds
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Start => Some(Self::Fetching),
            Self::Fetching => Some(Self::Parsing),
            Self::Parsing => Some(Self::Synthesizing),
            Self::Synthesizing => Some(Self::Persisting),
            Self::Persisting => Some(Self::Responding),
            Self::Responding | Self::Failed(_) => None,
        }
    }

    /// Returns true if moving to `to` is a legal transition
    ///
    /// Steps advance one at a time. Synthesis never fails, so `Synthesizing`
    /// cannot move to `Failed`.
    pub fn can_transition_to(&self, to: RequestState) -> bool {
        match (self, to) {
            (Self::Synthesizing, Self::Failed(_)) => false,
            (from, Self::Failed(_)) => !from.is_terminal(),
            (from, to) => from.next() == Some(to),
        }
    }

    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Fetching => "fetching",
            Self::Parsing => "parsing",
            Self::Synthesizing => "synthesizing",
            Self::Persisting => "persisting",
            Self::Responding => "responding",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(reason) => write!(f, "failed({})", reason),
            other => write!(f, "{}", other.as_str()),
        }
    }
}
