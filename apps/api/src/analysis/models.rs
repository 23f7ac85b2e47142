//! Output data model for a single resume analysis.

use serde::{Deserialize, Serialize};

/// A candidate role ranked by required-skill overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub name: String,
    pub match_percent: i64,
}

/// A required skill for the top-matched role that the resume never mentions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub recommendation: String,
}

/// One flagged bullet line, paired with a concrete improvement suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletIssue {
    pub excerpt: String,
    pub suggestion: String,
}

/// Company-size tier a candidate should target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CompanyTier {
    Startup,
    #[serde(rename = "Mid-size")]
    MidSize,
    #[serde(rename = "MNC")]
    Mnc,
}

/// A tier plus the fixed justification shown to the candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRecommendation {
    pub level: CompanyTier,
    pub justification: String,
}

/// Aggregate result of the full analysis pipeline. Built once per request
/// and serialized as the /api/v1/analyze response body; nothing is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub ats_score: i64,
    pub missing_keywords: Vec<String>,
    pub role_matches: Vec<RoleMatch>,
    pub salary_estimate: String,
    pub company_tier: CompanyTier,
    pub tier_justification: String,
    pub skill_gaps: Vec<SkillGap>,
    pub bullet_issues: Vec<BulletIssue>,
    pub text_preview: String,
}
