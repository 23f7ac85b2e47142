//! Skill-gap analysis for the top-matched role.

use crate::analysis::models::SkillGap;
use crate::analysis::reference::role_profile;

const MAX_GAPS: usize = 5;

/// Lists required skills for `top_role` that the resume never mentions,
/// in role-table order, each with a learning recommendation.
///
/// Returns an empty list when no role matched or the name is unknown;
/// the caller treats that as "nothing to report", not an error.
pub fn analyze_skill_gaps(text_lower: &str, top_role: Option<&str>) -> Vec<SkillGap> {
    let Some(profile) = top_role.and_then(role_profile) else {
        return Vec::new();
    };

    profile
        .required_skills
        .iter()
        .filter(|skill| !text_lower.contains(**skill))
        .take(MAX_GAPS)
        .map(|skill| SkillGap {
            skill: skill.to_string(),
            recommendation: format!(
                "Learn {skill} through online courses, projects, or certifications"
            ),
        })
        .collect()
}
