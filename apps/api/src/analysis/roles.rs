//! Role suggestion: ranks the role table by required-skill overlap.

use crate::analysis::models::RoleMatch;
use crate::analysis::reference::ROLE_PROFILES;

/// Roles at or below this overlap percentage are not suggested.
const MATCH_THRESHOLD: i64 = 20;

const MAX_SUGGESTIONS: usize = 5;

/// Suggests up to five roles, strongest overlap first.
///
/// Percentages are floored integers. The sort is stable, so roles with
/// equal percentages keep their table order. An empty result is a valid
/// outcome; downstream stages fall back rather than fail.
pub fn suggest_roles(text_lower: &str) -> Vec<RoleMatch> {
    let mut matches: Vec<RoleMatch> = ROLE_PROFILES
        .iter()
        .filter_map(|role| {
            let matched = role
                .required_skills
                .iter()
                .filter(|skill| text_lower.contains(**skill))
                .count();
            let percent = (matched * 100 / role.required_skills.len()) as i64;

            (percent > MATCH_THRESHOLD).then(|| RoleMatch {
                name: role.name.to_string(),
                match_percent: percent.min(100),
            })
        })
        .collect();

    matches.sort_by(|a, b| b.match_percent.cmp(&a.match_percent));
    matches.truncate(MAX_SUGGESTIONS);
    matches
}
