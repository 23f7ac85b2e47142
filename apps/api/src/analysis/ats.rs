//! ATS compatibility scoring: section presence, keyword density, and
//! formatting penalties combined into a 0-100 integer.

use crate::analysis::reference::all_keywords;

/// Resume section names the scorer looks for.
const SECTION_NAMES: &[&str] = &[
    "education",
    "experience",
    "skills",
    "projects",
    "summary",
    "objective",
];

/// Keyword matches beyond this count earn no extra credit.
const KEYWORD_CAP: usize = 10;

const SECTION_WEIGHT: f64 = 40.0;
const KEYWORD_WEIGHT: f64 = 30.0;
const FORMATTING_WEIGHT: f64 = 30.0;

/// Computes the ATS compatibility score for a resume.
///
/// `text_lower` must be the lowercased form of `text`; the pipeline
/// lowercases once and shares it across stages. Components accumulate as
/// floats and only the final sum is truncated and clamped, so a single
/// component may sit at 0 without dragging the total below 0.
pub fn calculate_ats_score(text: &str, text_lower: &str) -> i64 {
    let mut score = 0.0_f64;

    // Section presence (40 points)
    let found_sections = SECTION_NAMES
        .iter()
        .filter(|section| text_lower.contains(**section))
        .count();
    score += (found_sections as f64 / SECTION_NAMES.len() as f64) * SECTION_WEIGHT;

    // Keyword density (30 points, full credit at 10 matches)
    let found_keywords = all_keywords().filter(|kw| text_lower.contains(kw)).count();
    score += (found_keywords as f64 / KEYWORD_CAP as f64).min(1.0) * KEYWORD_WEIGHT;

    // Formatting (30 points, subtractive)
    let mut formatting = FORMATTING_WEIGHT;

    // Pipes and tabs suggest tabular layout, which ATS parsers mishandle
    if text.contains('|') || text.contains('\t') {
        formatting -= 5.0;
    }

    let long_lines = text
        .split('\n')
        .filter(|line| line.chars().count() > 150)
        .count();
    if long_lines > 3 {
        formatting -= 5.0;
    }

    let total_chars = text.chars().count();
    if total_chars < 200 {
        formatting -= 10.0; // too sparse to be a real resume
    }
    if total_chars > 2000 {
        formatting -= 5.0; // likely verbose or unstructured
    }

    score += formatting;

    (score as i64).clamp(0, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A clean resume: all six sections, well over ten keywords, length
    /// inside the (200, 2000) window, no pipes, tabs, or overlong lines.
    fn full_credit_resume() -> String {
        let mut text = String::from(
            "Summary\nObjective\nEducation\nExperience\nSkills\nProjects\n\
             python javascript react sql git docker aws api rest agile scrum\n\
             leadership communication teamwork\n",
        );
        while text.chars().count() < 1000 {
            text.push_str("worked across the stack\n");
        }
        text
    }

    fn score(text: &str) -> i64 {
        calculate_ats_score(text, &text.to_lowercase())
    }

    #[test]
    fn test_clean_complete_resume_scores_100() {
        assert_eq!(score(&full_credit_resume()), 100);
    }

    #[test]
    fn test_score_always_in_bounds() {
        let clean = full_credit_resume();
        let hostile = "|\t".repeat(2500);
        for text in ["", "x", clean.as_str(), hostile.as_str()] {
            let s = score(text);
            assert!((0..=100).contains(&s), "score {s} out of bounds");
        }
    }

    #[test]
    fn test_short_unrecognized_text_scores_20() {
        // No sections, no keywords, and the sparse-text penalty: 30 - 10.
        let text = "z".repeat(100);
        assert_eq!(score(&text), 20);
    }

    #[test]
    fn test_pipe_costs_five_points() {
        let clean = full_credit_resume();
        let piped = format!("{clean}| cell | cell\n");
        assert_eq!(score(&piped), score(&clean) - 5);
    }

    #[test]
    fn test_tab_costs_five_points() {
        let clean = full_credit_resume();
        let tabbed = format!("{clean}name\tvalue\n");
        assert_eq!(score(&tabbed), score(&clean) - 5);
    }

    #[test]
    fn test_pipe_and_tab_penalty_applies_once() {
        let clean = full_credit_resume();
        let both = format!("{clean}a | b\tc\n");
        assert_eq!(score(&both), score(&clean) - 5);
    }

    #[test]
    fn test_overlong_lines_penalized_above_three() {
        let clean = full_credit_resume();
        let long_line = "x".repeat(160);

        // Three long lines: no penalty
        let three = format!("{clean}{long_line}\n{long_line}\n{long_line}\n");
        assert_eq!(score(&three), score(&clean));

        // Four long lines: -5
        let four = format!("{three}{long_line}\n");
        assert_eq!(score(&four), score(&clean) - 5);
    }

    #[test]
    fn test_verbose_text_penalized() {
        let mut text = full_credit_resume();
        while text.chars().count() <= 2000 {
            text.push_str("more prose about the same work\n");
        }
        assert_eq!(score(&text), 95);
    }

    #[test]
    fn test_half_the_sections_earn_half_the_section_weight() {
        // 3 of 6 sections. "experience" doubles as a keyword, so the
        // breakdown is 20 + 3 + (30 - 10) = 43.
        let text = "education experience skills";
        assert_eq!(score(text), 43);
    }

    #[test]
    fn test_keyword_credit_caps_at_ten_matches() {
        // The shorter text already clears ten keyword matches ("javascript"
        // also hits "java"); adding five more keywords earns nothing extra.
        let base = "python javascript react sql git docker aws api rest agile";
        let more = format!("{base} scrum leadership communication teamwork bachelor");
        // Both: 0 sections, full keyword credit, short-text penalty: 0 + 30 + 20
        assert_eq!(score(base), 50);
        assert_eq!(score(&more), 50);
    }
}
