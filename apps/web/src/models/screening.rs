use serde::{Deserialize, Serialize};

/// Per-resume verdict produced by the external analysis service.
/// Immutable once received; never reclassified client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// File name of the resume as submitted.
    pub name: String,
    /// Relevance score, 0-100.
    pub score: u32,
    /// Ordered bullet points explaining the score.
    pub reasoning: Vec<String>,
}

/// The service's partition of one resume batch. A new submission replaces any
/// prior outcome wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub relevant: Vec<AnalysisResult>,
    pub irrelevant: Vec<AnalysisResult>,
}

/// Lightweight descriptor of an uploaded file, safe to echo back to the UI
/// without the file contents.
#[derive(Debug, Clone, Serialize)]
pub struct DocSummary {
    pub name: String,
    pub size_bytes: usize,
}
