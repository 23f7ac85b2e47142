#![allow(dead_code)]

//! Static reference tables: ATS keyword categories, role profiles, and
//! salary bands. Fixed at compile time; every analysis stage reads them,
//! none mutate them. All keywords and skills are stored lowercase because
//! matching happens against lowercased resume text.

/// Keyword categories checked during ATS scoring, in table order.
pub const ATS_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technical",
        &[
            "python",
            "javascript",
            "java",
            "react",
            "node.js",
            "sql",
            "git",
            "docker",
            "aws",
            "machine learning",
            "data analysis",
            "api",
            "rest",
            "agile",
            "scrum",
        ],
    ),
    (
        "soft_skills",
        &[
            "leadership",
            "communication",
            "teamwork",
            "problem solving",
            "analytical",
            "collaboration",
            "time management",
            "adaptability",
        ],
    ),
    (
        "education",
        &["bachelor", "master", "degree", "certification", "diploma", "gpa"],
    ),
    (
        "experience",
        &["experience", "years", "internship", "project", "achievement", "result"],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Entry,
    Mid,
}

/// A job role and the skills a matching resume is expected to mention.
#[derive(Debug, Clone, Copy)]
pub struct RoleProfile {
    pub name: &'static str,
    pub required_skills: &'static [&'static str],
    pub experience_level: ExperienceLevel,
}

/// Role table. Order matters: ties in match percentage keep this order.
pub const ROLE_PROFILES: &[RoleProfile] = &[
    RoleProfile {
        name: "Software Developer",
        required_skills: &[
            "programming",
            "coding",
            "software",
            "development",
            "python",
            "javascript",
            "java",
            "git",
        ],
        experience_level: ExperienceLevel::Entry,
    },
    RoleProfile {
        name: "Data Analyst",
        required_skills: &[
            "data",
            "analysis",
            "excel",
            "sql",
            "python",
            "statistics",
            "visualization",
        ],
        experience_level: ExperienceLevel::Entry,
    },
    RoleProfile {
        name: "Frontend Developer",
        required_skills: &[
            "html", "css", "javascript", "react", "angular", "vue", "ui", "ux", "frontend",
        ],
        experience_level: ExperienceLevel::Entry,
    },
    RoleProfile {
        name: "Backend Developer",
        required_skills: &[
            "backend", "server", "api", "database", "node.js", "python", "java", "sql",
        ],
        experience_level: ExperienceLevel::Entry,
    },
    RoleProfile {
        name: "Full Stack Developer",
        required_skills: &[
            "frontend",
            "backend",
            "full stack",
            "react",
            "node.js",
            "database",
            "api",
        ],
        experience_level: ExperienceLevel::Entry,
    },
    RoleProfile {
        name: "Machine Learning Engineer",
        required_skills: &[
            "machine learning",
            "ml",
            "python",
            "tensorflow",
            "pytorch",
            "data science",
            "ai",
        ],
        experience_level: ExperienceLevel::Mid,
    },
    RoleProfile {
        name: "DevOps Engineer",
        required_skills: &[
            "devops",
            "docker",
            "kubernetes",
            "ci/cd",
            "aws",
            "cloud",
            "linux",
        ],
        experience_level: ExperienceLevel::Mid,
    },
    RoleProfile {
        name: "Product Manager",
        required_skills: &[
            "product",
            "management",
            "strategy",
            "agile",
            "scrum",
            "stakeholder",
            "roadmap",
        ],
        experience_level: ExperienceLevel::Mid,
    },
    RoleProfile {
        name: "Business Analyst",
        required_skills: &[
            "business",
            "analysis",
            "requirements",
            "documentation",
            "sql",
            "excel",
        ],
        experience_level: ExperienceLevel::Entry,
    },
    RoleProfile {
        name: "UI/UX Designer",
        required_skills: &[
            "ui",
            "ux",
            "design",
            "figma",
            "prototyping",
            "wireframe",
            "user research",
        ],
        experience_level: ExperienceLevel::Entry,
    },
];

/// Entry-level compensation band for one role. Domestic figures are INR,
/// remote figures are USD.
#[derive(Debug, Clone, Copy)]
pub struct SalaryBand {
    pub role_name: &'static str,
    pub domestic_min: i64,
    pub domestic_max: i64,
    pub remote_usd_min: i64,
    pub remote_usd_max: i64,
}

pub const SALARY_BANDS: &[SalaryBand] = &[
    SalaryBand {
        role_name: "Software Developer",
        domestic_min: 300_000,
        domestic_max: 600_000,
        remote_usd_min: 30_000,
        remote_usd_max: 50_000,
    },
    SalaryBand {
        role_name: "Data Analyst",
        domestic_min: 250_000,
        domestic_max: 500_000,
        remote_usd_min: 25_000,
        remote_usd_max: 45_000,
    },
    SalaryBand {
        role_name: "Frontend Developer",
        domestic_min: 300_000,
        domestic_max: 600_000,
        remote_usd_min: 30_000,
        remote_usd_max: 50_000,
    },
    SalaryBand {
        role_name: "Backend Developer",
        domestic_min: 350_000,
        domestic_max: 700_000,
        remote_usd_min: 35_000,
        remote_usd_max: 60_000,
    },
    SalaryBand {
        role_name: "Full Stack Developer",
        domestic_min: 400_000,
        domestic_max: 800_000,
        remote_usd_min: 40_000,
        remote_usd_max: 70_000,
    },
    SalaryBand {
        role_name: "Machine Learning Engineer",
        domestic_min: 500_000,
        domestic_max: 1_000_000,
        remote_usd_min: 50_000,
        remote_usd_max: 90_000,
    },
    SalaryBand {
        role_name: "DevOps Engineer",
        domestic_min: 400_000,
        domestic_max: 800_000,
        remote_usd_min: 40_000,
        remote_usd_max: 70_000,
    },
    SalaryBand {
        role_name: "Product Manager",
        domestic_min: 600_000,
        domestic_max: 1_200_000,
        remote_usd_min: 60_000,
        remote_usd_max: 100_000,
    },
    SalaryBand {
        role_name: "Business Analyst",
        domestic_min: 300_000,
        domestic_max: 600_000,
        remote_usd_min: 30_000,
        remote_usd_max: 50_000,
    },
    SalaryBand {
        role_name: "UI/UX Designer",
        domestic_min: 250_000,
        domestic_max: 550_000,
        remote_usd_min: 25_000,
        remote_usd_max: 50_000,
    },
];

/// Iterates over every keyword across all categories.
pub fn all_keywords() -> impl Iterator<Item = &'static str> {
    ATS_KEYWORDS.iter().flat_map(|(_, kws)| kws.iter().copied())
}

pub fn technical_keywords() -> &'static [&'static str] {
    ATS_KEYWORDS
        .iter()
        .find(|(name, _)| *name == "technical")
        .map(|(_, kws)| *kws)
        .unwrap_or(&[])
}

/// Looks up a role by exact name.
pub fn role_profile(name: &str) -> Option<&'static RoleProfile> {
    ROLE_PROFILES.iter().find(|r| r.name == name)
}

/// Looks up the salary band for a role by exact name.
pub fn salary_band(role_name: &str) -> Option<&'static SalaryBand> {
    SALARY_BANDS.iter().find(|b| b.role_name == role_name)
}
