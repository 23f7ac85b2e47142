//! Missing-keyword detection: essentials the resume never mentions, plus
//! technical keywords worth adding when coverage is thin.

use crate::analysis::reference::technical_keywords;

/// Checked first, reported in this order.
const ESSENTIAL_KEYWORDS: &[&str] = &["experience", "education", "skills", "project"];

const MISSING_CAP: usize = 10;
const MIN_TECHNICAL_PRESENT: usize = 3;
const TECHNICAL_POOL: usize = 5;
const TECHNICAL_SUGGESTIONS: usize = 3;

/// Lists important keywords absent from the resume, most essential first.
///
/// Technical suggestions only kick in when fewer than three technical
/// keywords are present, and are drawn from the head of the technical
/// table so the output stays deterministic.
pub fn find_missing_keywords(text_lower: &str) -> Vec<String> {
    let mut missing: Vec<String> = ESSENTIAL_KEYWORDS
        .iter()
        .filter(|kw| !text_lower.contains(**kw))
        .map(|kw| kw.to_string())
        .collect();

    let technical = technical_keywords();
    let found_tech = technical
        .iter()
        .filter(|kw| text_lower.contains(**kw))
        .count();
    if found_tech < MIN_TECHNICAL_PRESENT {
        missing.extend(
            technical
                .iter()
                .take(TECHNICAL_POOL)
                .filter(|kw| !text_lower.contains(**kw))
                .take(TECHNICAL_SUGGESTIONS)
                .map(|kw| kw.to_string()),
        );
    }

    missing.truncate(MISSING_CAP);
    missing
}
