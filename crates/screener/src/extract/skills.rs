//! Skill detection against the closed catalog.

use std::collections::BTreeSet;

use crate::catalog::SkillCatalog;

/// Finds catalog skills mentioned anywhere in a resume.
///
/// Matching is case-insensitive substring containment, so a skill counts
/// even when embedded in a longer word ("go" matches inside "going").
/// Results are deduplicated and ordered; each skill appears at most once
/// no matter how often the text mentions it.
#[derive(Debug, Clone, Default)]
pub struct SkillExtractor {
    catalog: SkillCatalog,
}

impl SkillExtractor {
    pub fn new(catalog: SkillCatalog) -> Self {
        Self { catalog }
    }

    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        self.catalog
            .all_skills()
            .filter(|skill| text_lower.contains(&skill.to_lowercase()))
            .map(str::to_string)
            .collect()
    }
}
