//! Company-size tier recommendation from overall resume strength.

use crate::analysis::models::{CompanyTier, TierRecommendation};

const EXPERIENCE_KEYWORDS: &[&str] = &["years", "experience", "internship", "worked", "developed"];

const ACHIEVEMENT_KEYWORDS: &[&str] = &[
    "achieved",
    "improved",
    "increased",
    "reduced",
    "led",
    "managed",
];

const EXPERIENCE_POINTS: i64 = 5;
const EXPERIENCE_BONUS_CAP: i64 = 20;
const ACHIEVEMENT_POINTS: i64 = 3;
const ACHIEVEMENT_BONUS_CAP: i64 = 15;

const MNC_THRESHOLD: i64 = 80;
const MID_SIZE_THRESHOLD: i64 = 60;

const MNC_JUSTIFICATION: &str = "Strong resume with good ATS score, experience indicators, and achievements. Suitable for large multinational companies.";
const MID_SIZE_JUSTIFICATION: &str =
    "Good resume with decent ATS score. Mid-size companies offer good growth opportunities.";
const STARTUP_JUSTIFICATION: &str = "Resume shows potential but needs improvement. Startups offer great learning opportunities and faster growth.";

/// Recommends a company tier from the ATS score plus capped bonuses for
/// experience and achievement vocabulary. Each keyword counts once no
/// matter how often it occurs.
///
/// The top-role argument is accepted for signature parity with the other
/// per-role stages but does not influence the recommendation.
pub fn recommend_company_level(
    text_lower: &str,
    ats_score: i64,
    _top_role: Option<&str>,
) -> TierRecommendation {
    let experience_count = EXPERIENCE_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(**kw))
        .count() as i64;
    let achievement_count = ACHIEVEMENT_KEYWORDS
        .iter()
        .filter(|kw| text_lower.contains(**kw))
        .count() as i64;

    let strength_score = ats_score
        + (experience_count * EXPERIENCE_POINTS).min(EXPERIENCE_BONUS_CAP)
        + (achievement_count * ACHIEVEMENT_POINTS).min(ACHIEVEMENT_BONUS_CAP);

    if strength_score >= MNC_THRESHOLD {
        TierRecommendation {
            level: CompanyTier::Mnc,
            justification: MNC_JUSTIFICATION.to_string(),
        }
    } else if strength_score >= MID_SIZE_THRESHOLD {
        TierRecommendation {
            level: CompanyTier::MidSize,
            justification: MID_SIZE_JUSTIFICATION.to_string(),
        }
    } else {
        TierRecommendation {
            level: CompanyTier::Startup,
            justification: STARTUP_JUSTIFICATION.to_string(),
        }
    }
}
