//! Resume analysis core: static reference tables, the pure scoring stages,
//! and the pipeline that aggregates them into one result.
//!
//! Matching throughout is case-insensitive substring containment over a
//! single lowercased copy of the input. That includes partial-word hits
//! ("java" matches inside "javascript"); counts downstream depend on this,
//! so keep it when touching any stage.

pub mod ats;
pub mod bullets;
pub mod company;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod reference;
pub mod roles;
pub mod salary;
pub mod skill_gaps;

use crate::analysis::models::AnalysisResult;

/// Emitted when no role clears the match threshold.
const SALARY_UNAVAILABLE: &str = "unavailable";

const PREVIEW_CHARS: usize = 200;

/// Runs the full analysis pipeline over extracted resume text.
///
/// Pure and synchronous: no I/O, no shared state, and identical input
/// yields an identical result. The stages that need the top-matched role
/// fall back gracefully when nothing matched.
pub fn analyze_resume_text(text: &str) -> AnalysisResult {
    let text_lower = text.to_lowercase();

    let ats_score = ats::calculate_ats_score(text, &text_lower);
    let missing_keywords = keywords::find_missing_keywords(&text_lower);
    let role_matches = roles::suggest_roles(&text_lower);

    let top_role = role_matches.first().map(|m| m.name.as_str());
    let salary_estimate = match top_role {
        Some(role) => salary::estimate_salary(role, true),
        None => SALARY_UNAVAILABLE.to_string(),
    };
    let tier = company::recommend_company_level(&text_lower, ats_score, top_role);
    let skill_gaps = skill_gaps::analyze_skill_gaps(&text_lower, top_role);
    let bullet_issues = bullets::improve_bullet_points(text);

    AnalysisResult {
        ats_score,
        missing_keywords,
        role_matches,
        salary_estimate,
        company_tier: tier.level,
        tier_justification: tier.justification,
        skill_gaps,
        bullet_issues,
        text_preview: text_preview(text),
    }
}

fn text_preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "\
Summary
Software engineer with 3 years of experience building web platforms.

Experience
- Developed a payment service in python handling 2M requests per day
- Led a migration to react that cut page load times by 40%
- Improved the deployment pipeline using git and docker

Education
Bachelor of Engineering, GPA 8.4

Skills
python, javascript, java, sql, git, docker, api design, rest, agile

Projects
- Built an open source scrum board used by 300 teams";

    #[test]
    fn test_pipeline_is_idempotent() {
        assert_eq!(
            analyze_resume_text(SAMPLE_RESUME),
            analyze_resume_text(SAMPLE_RESUME)
        );
    }

    #[test]
    fn test_pipeline_wires_top_role_into_salary_and_gaps() {
        let result = analyze_resume_text(SAMPLE_RESUME);

        assert!(!result.role_matches.is_empty());
        assert_ne!(result.salary_estimate, SALARY_UNAVAILABLE);
        assert!(result.salary_estimate.contains("INR (India)"));

        // Skill gaps belong to the top role only.
        let top = crate::analysis::reference::role_profile(&result.role_matches[0].name).unwrap();
        for gap in &result.skill_gaps {
            assert!(top.required_skills.contains(&gap.skill.as_str()));
        }
    }

    #[test]
    fn test_pipeline_handles_no_role_match() {
        let text = "A short note about gardening, pottery and creative writing hobbies.";
        let result = analyze_resume_text(text);

        assert!(result.role_matches.is_empty());
        assert_eq!(result.salary_estimate, SALARY_UNAVAILABLE);
        assert!(result.skill_gaps.is_empty());
        // The tier recommender does not depend on a matched role.
        assert!(!result.tier_justification.is_empty());
    }

    #[test]
    fn test_pipeline_respects_all_caps() {
        // Adversarial input: hundreds of weak bullets and zero keywords.
        let text = "- Led the replatforming initiative for the group\n".repeat(400);
        let result = analyze_resume_text(&text);

        assert!((0..=100).contains(&result.ats_score));
        assert!(result.missing_keywords.len() <= 10);
        assert!(result.role_matches.len() <= 5);
        assert!(result.skill_gaps.len() <= 5);
        assert!(result.bullet_issues.len() <= 5);
    }

    #[test]
    fn test_role_matches_sorted_non_increasing() {
        let result = analyze_resume_text(SAMPLE_RESUME);
        for pair in result.role_matches.windows(2) {
            assert!(pair[0].match_percent >= pair[1].match_percent);
        }
    }

    #[test]
    fn test_short_text_preview_is_verbatim() {
        let text = "short resume text";
        assert_eq!(analyze_resume_text(text).text_preview, text);
    }

    #[test]
    fn test_long_text_preview_truncates_with_ellipsis() {
        let text = "r".repeat(450);
        let preview = analyze_resume_text(&text).text_preview;
        assert_eq!(preview.chars().count(), 203);
        assert!(preview.ends_with("..."));
    }
}
