//! Skill and education keyword catalogs.
//!
//! Both are injectable so callers can screen against their own taxonomy;
//! the defaults carry the canonical lists the engine ships with.

use serde::{Deserialize, Serialize};

const PROGRAMMING: &[&str] = &[
    "python", "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust",
];
const WEB_DEVELOPMENT: &[&str] = &[
    "html", "css", "react", "angular", "vue", "node.js", "django", "flask",
];
const DATA_SCIENCE: &[&str] = &[
    "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "matplotlib",
];
const DATABASES: &[&str] = &[
    "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch",
];
const CLOUD: &[&str] = &["aws", "azure", "gcp", "docker", "kubernetes", "terraform"];
const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "problem-solving", "analytical",
];

const EDUCATION: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "degree", "university", "college",
    "b.s.", "b.a.", "m.s.", "m.a.", "mba", "ph.d.",
];

/// One named group of related skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// The closed skill vocabulary, grouped by category.
/// Extraction matches against every skill in every category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub categories: Vec<SkillCategory>,
}

impl Default for SkillCatalog {
    fn default() -> Self {
        let category = |name: &str, skills: &[&str]| SkillCategory {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        };
        SkillCatalog {
            categories: vec![
                category("programming", PROGRAMMING),
                category("web_development", WEB_DEVELOPMENT),
                category("data_science", DATA_SCIENCE),
                category("databases", DATABASES),
                category("cloud", CLOUD),
                category("soft_skills", SOFT_SKILLS),
            ],
        }
    }
}

impl SkillCatalog {
    /// Every skill across all categories, in catalog order. Duplicates
    /// across categories are yielded as-is; extraction deduplicates.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .flat_map(|category| category.skills.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|category| category.skills.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Keywords whose presence signals formal education.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationKeywords(pub Vec<String>);

impl Default for EducationKeywords {
    fn default() -> Self {
        EducationKeywords(EDUCATION.iter().map(|k| k.to_string()).collect())
    }
}

impl EducationKeywords {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
