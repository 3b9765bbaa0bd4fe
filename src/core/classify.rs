//! Keyword-based lithology classification.

use crate::models::{LITHOLOGIES, Lithology, UNKNOWN};

/// Classify a free-text section description.
///
/// Matching is case-insensitive substring matching against the stems of
/// each category, in table order; the first category that matches wins.
/// Every input yields a category: a missing, empty, or unmatched
/// description classifies as [`UNKNOWN`].
pub fn classify(description: Option<&str>) -> &'static Lithology {
    let text = match description {
        Some(t) if !t.trim().is_empty() => t.to_lowercase(),
        _ => return &UNKNOWN,
    };

    LITHOLOGIES
        .iter()
        .find(|lith| lith.keywords.iter().any(|kw| text.contains(kw)))
        .unwrap_or(&UNKNOWN)
}
