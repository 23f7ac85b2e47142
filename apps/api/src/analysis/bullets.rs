//! Bullet-point critique: flags bullets with no quantified outcome and
//! bullets long enough to hurt readability.

use crate::analysis::models::BulletIssue;

const BULLET_MARKERS: &[char] = &['-', '•', '*'];

/// Lines this short are decoration or noise, not bullets worth critiquing.
const MIN_BULLET_CHARS: usize = 10;
const LONG_BULLET_CHARS: usize = 100;
const EXCERPT_CHARS: usize = 50;
const MAX_ISSUES: usize = 5;

const METRICS_SUGGESTION: &str =
    "Add quantifiable metrics (numbers, percentages) to make this bullet point more impactful";
const LENGTH_SUGGESTION: &str =
    "Consider breaking this into multiple shorter bullet points for better readability";

/// Scans line by line for weak bullets, in order of first detection.
/// A single bullet can raise both issues. Capped at five issues total.
pub fn improve_bullet_points(text: &str) -> Vec<BulletIssue> {
    let mut issues = Vec::new();

    for line in text.split('\n') {
        let trimmed = line.trim();
        let char_count = trimmed.chars().count();
        if !trimmed.starts_with(BULLET_MARKERS) || char_count <= MIN_BULLET_CHARS {
            continue;
        }

        if !trimmed.chars().any(|c| c.is_ascii_digit()) {
            issues.push(BulletIssue {
                excerpt: excerpt(trimmed, char_count),
                suggestion: METRICS_SUGGESTION.to_string(),
            });
        }
        if char_count > LONG_BULLET_CHARS {
            issues.push(BulletIssue {
                excerpt: excerpt(trimmed, char_count),
                suggestion: LENGTH_SUGGESTION.to_string(),
            });
        }
    }

    issues.truncate(MAX_ISSUES);
    issues
}

fn excerpt(line: &str, char_count: usize) -> String {
    if char_count > EXCERPT_CHARS {
        let head: String = line.chars().take(EXCERPT_CHARS).collect();
        format!("{head}...")
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unquantified_bullet_gets_metrics_suggestion() {
        let issues = improve_bullet_points("- Led team to success");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].excerpt, "- Led team to success");
        assert_eq!(issues[0].suggestion, METRICS_SUGGESTION);
    }

    #[test]
    fn test_quantified_bullet_passes() {
        assert!(improve_bullet_points("- Reduced latency by 40% across 3 services").is_empty());
    }

    #[test]
    fn test_long_quantified_bullet_gets_only_length_suggestion() {
        let line = format!("- Shipped 12 features {}", "covering many product areas ".repeat(4));
        assert!(line.trim().chars().count() > 100);
        let issues = improve_bullet_points(&line);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].suggestion, LENGTH_SUGGESTION);
    }

    #[test]
    fn test_long_unquantified_bullet_raises_both_issues() {
        let line = format!("- {}", "improved collaboration across teams ".repeat(4));
        assert!(line.trim().chars().count() > 100);
        let issues = improve_bullet_points(&line);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].suggestion, METRICS_SUGGESTION);
        assert_eq!(issues[1].suggestion, LENGTH_SUGGESTION);
    }

    #[test]
    fn test_all_three_markers_are_recognized() {
        let text = "- Led the platform effort\n• Drove adoption internally\n* Mentored junior engineers";
        assert_eq!(improve_bullet_points(text).len(), 3);
    }

    #[test]
    fn test_short_bullets_are_ignored() {
        // Ten characters or fewer after trimming; eleven qualifies.
        assert!(improve_bullet_points("- abcdefgh").is_empty());
        assert!(improve_bullet_points("-").is_empty());
        assert_eq!(improve_bullet_points("- abcdefghi").len(), 1);
    }

    #[test]
    fn test_plain_lines_are_ignored() {
        assert!(improve_bullet_points("Led team to success without a marker").is_empty());
    }

    #[test]
    fn test_leading_whitespace_is_trimmed_first() {
        let issues = improve_bullet_points("    - Led team to success");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].excerpt, "- Led team to success");
    }

    #[test]
    fn test_excerpt_truncates_at_fifty_chars() {
        let line = format!("- {}", "a".repeat(80));
        let issues = improve_bullet_points(&line);
        let excerpt = &issues[0].excerpt;
        assert!(excerpt.ends_with("..."));
        assert_eq!(excerpt.chars().count(), 53);
    }

    #[test]
    fn test_issues_capped_at_five() {
        let text = "- Led the migration effort\n".repeat(10);
        assert_eq!(improve_bullet_points(&text).len(), 5);
    }
}
