//! Response schemas sent with every generation call.
//!
//! Written in the provider's OpenAPI-subset dialect. Each schema mirrors a
//! type in `models::feedback`; keep the two in step.

use serde_json::{json, Value};

/// Schema for `AnalysisResult`.
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "relevanceScore": {
                "type": "INTEGER",
                "description": "A score from 0 to 100 indicating how well the resume matches the job description."
            },
            "atsScore": {
                "type": "INTEGER",
                "description": "A score from 0 to 100 for ATS compatibility based on formatting, keywords, and structure."
            },
            "summary": {
                "type": "STRING",
                "description": "A brief, 2-3 sentence summary of the resume's strengths and weaknesses for this role."
            },
            "missingKeywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of important keywords from the job description that are missing from the resume."
            },
            "actionVerbSuggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "weakVerb": { "type": "STRING" },
                        "strongerAlternatives": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "minItems": 1
                        }
                    },
                    "required": ["weakVerb", "strongerAlternatives"]
                },
                "description": "Suggestions for replacing weak verbs with stronger action verbs."
            },
            "quantificationSuggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "suggestion": {
                            "type": "STRING",
                            "description": "The phrase that could be quantified."
                        },
                        "example": {
                            "type": "STRING",
                            "description": "An example of how to quantify it."
                        }
                    },
                    "required": ["suggestion"]
                },
                "description": "Recommendations for quantifying achievements."
            },
            "generalFeedback": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of general feedback points for improving the resume's impact and clarity."
            }
        },
        "required": [
            "relevanceScore",
            "atsScore",
            "summary",
            "missingKeywords",
            "actionVerbSuggestions",
            "quantificationSuggestions",
            "generalFeedback"
        ]
    })
}

/// Schema for `CoverLetterResult`.
pub fn cover_letter_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "coverLetter": {
                "type": "STRING",
                "description": "The full text of the generated cover letter."
            }
        },
        "required": ["coverLetter"]
    })
}

/// Schema for `InterviewQuestionsResult`. No length bound: the count of
/// five is requested in the prompt only.
pub fn questions_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "questions": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "A list of 5 generated interview questions."
            }
        },
        "required": ["questions"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(schema: &Value) -> Vec<&str> {
        schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_analysis_schema_requires_every_top_level_field() {
        let schema = analysis_schema();
        let props = schema["properties"].as_object().unwrap();
        let req = required(&schema);
        assert_eq!(req.len(), 7);
        for key in props.keys() {
            assert!(req.contains(&key.as_str()), "{key} should be required");
        }
    }

    #[test]
    fn test_analysis_schema_score_fields_are_integers() {
        let schema = analysis_schema();
        assert_eq!(schema["properties"]["relevanceScore"]["type"], "INTEGER");
        assert_eq!(schema["properties"]["atsScore"]["type"], "INTEGER");
    }

    #[test]
    fn test_quantification_example_not_required() {
        let schema = analysis_schema();
        let item = &schema["properties"]["quantificationSuggestions"]["items"];
        assert_eq!(required(item), vec!["suggestion"]);
    }

    #[test]
    fn test_action_verb_item_requires_both_fields() {
        let schema = analysis_schema();
        let item = &schema["properties"]["actionVerbSuggestions"]["items"];
        assert_eq!(required(item), vec!["weakVerb", "strongerAlternatives"]);
    }

    #[test]
    fn test_questions_schema_has_no_length_bound() {
        let schema = questions_schema();
        let questions = &schema["properties"]["questions"];
        assert!(questions.get("minItems").is_none());
        assert!(questions.get("maxItems").is_none());
        assert_eq!(required(&schema), vec!["questions"]);
    }

    #[test]
    fn test_cover_letter_schema() {
        let schema = cover_letter_schema();
        assert_eq!(schema["properties"]["coverLetter"]["type"], "STRING");
        assert_eq!(required(&schema), vec!["coverLetter"]);
    }
}
