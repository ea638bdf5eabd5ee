//! Typed results returned by the generative model.
//!
//! Wire names are camelCase to match the response schemas in
//! `generation::schema`. Deserialization is the contract boundary: a
//! payload missing a required field or carrying a wrong field type fails
//! here and never reaches session state. Values are otherwise passed
//! through unchanged (no clamping, trimming, or reordering).

use serde::{Deserialize, Serialize};

/// A weak verb found in the resume and stronger replacements for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionVerbSuggestion {
    pub weak_verb: String,
    pub stronger_alternatives: Vec<String>,
}

/// A phrase that could be quantified, with an optional worked example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementSuggestion {
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Resume-vs-job evaluation.
///
/// Scores are nominally 0–100 but kept as `i64` so out-of-range values
/// from the service survive verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub relevance_score: i64,
    pub ats_score: i64,
    pub summary: String,
    pub missing_keywords: Vec<String>,
    pub action_verb_suggestions: Vec<ActionVerbSuggestion>,
    pub quantification_suggestions: Vec<ImprovementSuggestion>,
    pub general_feedback: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResult {
    pub cover_letter: String,
}

/// Usually five questions, but the count is only requested in the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsResult {
    pub questions: Vec<String>,
}
