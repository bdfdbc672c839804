//! Resume-to-job-description similarity.
//!
//! Every call builds a fresh two-document TF-IDF space from exactly the
//! resume and the job description, then takes the cosine between the two
//! weighted vectors. No state survives between calls, so one scorer can
//! serve concurrent screenings.

use std::collections::{HashMap, HashSet};

use crate::text::stopwords::StopwordFilter;
use crate::text::TextNormalizer;

/// Returned when either side is empty: no signal, not no match.
pub const NEUTRAL_SIMILARITY: f64 = 0.5;

/// Vocabulary cap, most frequent terms first.
pub const DEFAULT_MAX_FEATURES: usize = 5000;

// ────────────────────────────────────────────────────────────────────────────
// TF-IDF vectorizer
// ────────────────────────────────────────────────────────────────────────────

/// Term weights fitted to one pair of documents.
///
/// Idf uses the smoothed form `ln((1 + n) / (1 + df)) + 1`, which stays
/// positive even for terms present in both documents.
#[derive(Debug)]
struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    fn fit(documents: &[&[String]], stopwords: &StopwordFilter, max_features: usize) -> Self {
        let mut total_counts: HashMap<&str, usize> = HashMap::new();
        let mut document_frequency: HashMap<&str, usize> = HashMap::new();

        for document in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in document.iter() {
                if stopwords.is_stopword(token) {
                    continue;
                }
                *total_counts.entry(token).or_insert(0) += 1;
                if seen.insert(token) {
                    *document_frequency.entry(token).or_insert(0) += 1;
                }
            }
        }

        // Keep the most frequent terms, ties broken alphabetically.
        let mut terms: Vec<(&str, usize)> = total_counts.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(max_features);

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, (term, _)) in terms.into_iter().enumerate() {
            let df = document_frequency[term] as f64;
            vocabulary.insert(term.to_string(), index);
            idf.push(((1.0 + n) / (1.0 + df)).ln() + 1.0);
        }

        Self { vocabulary, idf }
    }

    fn transform(&self, tokens: &[String]) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token.as_str()) {
                vector[index] += self.idf[index];
            }
        }
        vector
    }
}

fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }
    dot / (magnitude_a * magnitude_b)
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    normalizer: TextNormalizer,
    stopwords: StopwordFilter,
    max_features: usize,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self {
            normalizer: TextNormalizer::default(),
            stopwords: StopwordFilter::default(),
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl SimilarityScorer {
    pub fn new(normalizer: TextNormalizer, stopwords: StopwordFilter, max_features: usize) -> Self {
        Self {
            normalizer,
            stopwords,
            max_features,
        }
    }

    /// Scores how closely a resume matches a job description, in `[0, 1]`.
    ///
    /// Either side empty returns [`NEUTRAL_SIMILARITY`]. Inputs that
    /// normalize to nothing produce zero-magnitude vectors and score 0.0.
    pub fn score(&self, resume_text: &str, job_description: &str) -> f64 {
        if resume_text.is_empty() || job_description.is_empty() {
            return NEUTRAL_SIMILARITY;
        }

        let resume_tokens: Vec<String> = self
            .normalizer
            .normalize(resume_text)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        let jd_tokens: Vec<String> = self
            .normalizer
            .normalize(job_description)
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let vectorizer = TfidfVectorizer::fit(
            &[resume_tokens.as_slice(), jd_tokens.as_slice()],
            &self.stopwords,
            self.max_features,
        );
        let resume_vector = vectorizer.transform(&resume_tokens);
        let jd_vector = vectorizer.transform(&jd_tokens);

        cosine_similarity(&resume_vector, &jd_vector).clamp(0.0, 1.0)
    }
}
