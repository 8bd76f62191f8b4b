//! State module for tracking request progress
//!
//! # Components
//!
//! - `RequestState`: Tracks where a generation request is in the pipeline
//! - `FailureReason`: Why a request ended without a quiz

mod request_state;

// Re-export main types
pub use request_state::{FailureReason, RequestState};
