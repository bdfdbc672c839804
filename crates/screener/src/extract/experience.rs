//! Stated years-of-experience detection.

use regex::Regex;

use crate::errors::ScreenerError;

/// Patterns for stated years of experience, applied to lowercased text.
/// Each captures the number in group 1.
const EXPERIENCE_PATTERNS: &[&str] = &[
    r"(\d+)\+?\s*years?\s*(?:of\s*)?experience",
    r"(\d+)\+?\s*yrs?\s*(?:of\s*)?experience",
    r"experience\s*:?\s*(\d+)\+?\s*years?",
];

/// Extracts the largest stated years-of-experience figure from a resume.
///
/// Taking the maximum over every match keeps one qualified stint
/// ("2 years of experience with rust") from masking a larger total
/// stated elsewhere. Text with no match reads as zero years.
#[derive(Debug, Clone)]
pub struct ExperienceExtractor {
    patterns: Vec<Regex>,
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        // The built-in patterns are fixed literals; compilation cannot fail.
        Self::with_patterns(EXPERIENCE_PATTERNS).expect("built-in experience patterns compile")
    }
}

impl ExperienceExtractor {
    pub fn with_patterns(patterns: &[&str]) -> Result<Self, ScreenerError> {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn extract(&self, text: &str) -> u32 {
        let text_lower = text.to_lowercase();
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.captures_iter(&text_lower))
            .filter_map(|captures| captures.get(1))
            .filter_map(|group| group.as_str().parse::<u32>().ok())
            .max()
            .unwrap_or(0)
    }
}
