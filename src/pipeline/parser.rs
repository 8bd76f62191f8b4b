//! HTML parser for extracting article metadata
//!
//! This module handles parsing article markup to extract:
//! - The title (first `<h1>`)
//! - The summary (first `<p>` with text)

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Errors raised while extracting article metadata
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No title heading (<h1>) found in page")]
    MissingTitle,
}

/// Extracted information from an article page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// Text of the first top-level heading, never empty
    pub title: String,

    /// Text of the first non-empty paragraph, or empty if there is none
    pub summary: String,
}

/// Parses article markup and extracts its title and summary
///
/// Inner markup is discarded and entities are decoded; the only other
/// normalization is trimming leading and trailing whitespace.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
///
/// # Returns
///
/// * `Ok(ParsedPage)` - Title found; summary may be empty
/// * `Err(ParseError::MissingTitle)` - No `<h1>`, or the first one is empty
///
/// # Example
///
/// ```
/// use wiki_quiz::pipeline::parse_page;
///
/// let html = "<h1>Rust (programming language)</h1><p>Rust is...</p>";
/// let page = parse_page(html).unwrap();
/// assert_eq!(page.title, "Rust (programming language)");
/// assert_eq!(page.summary, "Rust is...");
/// ```
pub fn parse_page(html: &str) -> Result<ParsedPage, ParseError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document).ok_or(ParseError::MissingTitle)?;
    let summary = extract_summary(&document).unwrap_or_default();

    Ok(ParsedPage { title, summary })
}

/// Trimmed text content of an element, inner markup discarded
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Extracts the text of the first `<h1>` in the document
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("h1").ok()?;
    let heading = document.select(&selector).next()?;
    Some(element_text(heading)).filter(|title| !title.is_empty())
}

/// Extracts the text of the first paragraph that has any
fn extract_summary(document: &Html) -> Option<String> {
    let selector = Selector::parse("p").ok()?;
    document
        .select(&selector)
        .map(element_text)
        .find(|text| !text.is_empty())
}
