//! Integration tests for wiki-quiz
//!
//! These tests use wiremock to stand in for article origins and drive the
//! pipeline and the HTTP API end-to-end.

mod api_tests;
mod common;
