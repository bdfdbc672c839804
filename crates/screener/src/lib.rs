//! Resume screening engine.
//!
//! Screens plain-text resumes against a plain-text job description:
//! extracts skills, stated experience and education signals, measures
//! textual similarity, and blends them into a weighted overall score
//! with a categorical verdict. A parallel Gaussian naive Bayes path
//! trains on synthetic score-derived labels and persists its fitted
//! parameters as a JSON artifact.
//!
//! Callers hand in strings; file parsing, transport and storage live
//! outside this crate.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod extract;
pub mod model;
pub mod scorer;
pub mod similarity;
pub mod text;
