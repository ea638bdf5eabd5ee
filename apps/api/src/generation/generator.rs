//! Generation client. Turns user text into typed feedback via the remote model.
//!
//! Flow per call: build prompt → one schema-constrained model call → trim →
//! strict deserialize. Every failure collapses into a `GenerationError` with a
//! fixed user-facing message; the underlying cause is logged only.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::generation::prompts::{
    build_analysis_prompt, build_cover_letter_prompt, build_questions_prompt,
};
use crate::generation::schema::{analysis_schema, cover_letter_schema, questions_schema};
use crate::llm_client::GenerativeModel;
use crate::models::feedback::{AnalysisResult, CoverLetterResult, InterviewQuestionsResult};

/// User-facing failure of a generation call. The display text is the exact
/// message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Failed to get analysis from AI. Please check the console for details.")]
    Analysis,

    #[error("Failed to generate cover letter.")]
    CoverLetter,

    #[error("Failed to generate interview questions.")]
    InterviewQuestions,
}

#[derive(Clone)]
pub struct CoachGenerator {
    model: Arc<dyn GenerativeModel>,
}

impl CoachGenerator {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Scores the resume against the job description. Inputs are assumed
    /// non-empty; the caller checks.
    pub async fn analyze(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<AnalysisResult, GenerationError> {
        let prompt = build_analysis_prompt(resume_text, job_description_text);
        let result: AnalysisResult = self
            .request(&prompt, &analysis_schema(), "analysis", GenerationError::Analysis)
            .await?;
        info!(
            "Analysis complete: relevance={}, ats={}, missing_keywords={}",
            result.relevance_score,
            result.ats_score,
            result.missing_keywords.len()
        );
        Ok(result)
    }

    pub async fn generate_cover_letter(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<CoverLetterResult, GenerationError> {
        let prompt = build_cover_letter_prompt(resume_text, job_description_text);
        self.request(
            &prompt,
            &cover_letter_schema(),
            "cover letter",
            GenerationError::CoverLetter,
        )
        .await
    }

    /// The prompt asks for five questions; callers must not rely on the count.
    pub async fn generate_interview_questions(
        &self,
        resume_text: &str,
    ) -> Result<InterviewQuestionsResult, GenerationError> {
        let prompt = build_questions_prompt(resume_text);
        self.request(
            &prompt,
            &questions_schema(),
            "interview questions",
            GenerationError::InterviewQuestions,
        )
        .await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        prompt: &str,
        schema: &Value,
        label: &str,
        on_failure: GenerationError,
    ) -> Result<T, GenerationError> {
        let text = self
            .model
            .generate_json(prompt, schema)
            .await
            .map_err(|e| {
                error!("Error generating {label}: {e}");
                on_failure
            })?;

        serde_json::from_str(text.trim()).map_err(|e| {
            error!("Error generating {label}: response violated schema: {e}");
            on_failure
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::mock::MockModel;
    use crate::models::feedback::{ActionVerbSuggestion, ImprovementSuggestion};

    const ANALYSIS_JSON: &str = r#"
        {"relevanceScore":78,"atsScore":64,"summary":"Strong technical match...",
         "missingKeywords":["Kubernetes"],
         "actionVerbSuggestions":[{"weakVerb":"worked on","strongerAlternatives":["engineered","architected"]}],
         "quantificationSuggestions":[{"suggestion":"improved performance","example":"reduced latency by 40%"}],
         "generalFeedback":["Add metrics to bullet points."]}
    "#;

    fn generator(model: MockModel) -> (CoachGenerator, Arc<MockModel>) {
        let model = Arc::new(model);
        (CoachGenerator::new(model.clone()), model)
    }

    #[tokio::test]
    async fn test_analyze_returns_parsed_values_verbatim() {
        let (gen, model) = generator(MockModel::new().reply(ANALYSIS_JSON));

        let result = gen
            .analyze("Senior Engineer, 5 years Go and Rust", "Backend role")
            .await
            .unwrap();

        assert_eq!(
            result,
            AnalysisResult {
                relevance_score: 78,
                ats_score: 64,
                summary: "Strong technical match...".to_string(),
                missing_keywords: vec!["Kubernetes".to_string()],
                action_verb_suggestions: vec![ActionVerbSuggestion {
                    weak_verb: "worked on".to_string(),
                    stronger_alternatives: vec![
                        "engineered".to_string(),
                        "architected".to_string()
                    ],
                }],
                quantification_suggestions: vec![ImprovementSuggestion {
                    suggestion: "improved performance".to_string(),
                    example: Some("reduced latency by 40%".to_string()),
                }],
                general_feedback: vec!["Add metrics to bullet points.".to_string()],
            }
        );
        assert_eq!(model.calls(), 1);
        assert!(model.prompts()[0].contains("Senior Engineer, 5 years Go and Rust"));
        assert_eq!(model.schemas()[0], analysis_schema());
    }

    #[tokio::test]
    async fn test_invalid_json_maps_to_fixed_messages() {
        let (gen, _) = generator(
            MockModel::new()
                .reply("not json at all")
                .reply("{\"coverLetter\": ")
                .reply("<html>"),
        );

        let err = gen.analyze("r", "j").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to get analysis from AI. Please check the console for details."
        );

        let err = gen.generate_cover_letter("r", "j").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate cover letter.");

        let err = gen.generate_interview_questions("r").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate interview questions.");
    }

    #[tokio::test]
    async fn test_schema_violation_is_generation_error() {
        // Well-formed JSON, but the required `questions` field is missing.
        let (gen, _) = generator(MockModel::new().reply(r#"{"items": ["a"]}"#));
        let err = gen.generate_interview_questions("r").await.unwrap_err();
        assert_eq!(err, GenerationError::InterviewQuestions);
    }

    #[tokio::test]
    async fn test_transport_failure_is_generation_error_without_retry() {
        let (gen, model) = generator(MockModel::new().fail("upstream 503"));
        let err = gen.generate_cover_letter("r", "j").await.unwrap_err();
        assert_eq!(err, GenerationError::CoverLetter);
        assert!(!err.to_string().contains("503"));
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_trimmed() {
        let (gen, _) = generator(
            MockModel::new().reply("\n\t {\"coverLetter\": \"Dear Hiring Manager,\"}  \n"),
        );
        let result = gen.generate_cover_letter("r", "j").await.unwrap();
        assert_eq!(result.cover_letter, "Dear Hiring Manager,");
    }

    #[tokio::test]
    async fn test_questions_use_questions_schema() {
        let (gen, model) = generator(MockModel::new().reply(r#"{"questions": ["q1", "q2"]}"#));
        let result = gen.generate_interview_questions("Resume body").await.unwrap();
        assert_eq!(result.questions, vec!["q1", "q2"]);
        assert_eq!(model.schemas()[0], questions_schema());
    }
}
