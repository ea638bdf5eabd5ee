//! Presentation: a pure function from `SessionState` to the view model the
//! browser renders. No I/O, no state of its own.

use serde::Serialize;

use crate::models::feedback::{AnalysisResult, CoverLetterResult, InterviewQuestionsResult};
use crate::session::state::{ActiveView, Phase, SessionState};

pub const LOADING_MESSAGE: &str = "AI is analyzing... this may take a moment.";
pub const EMPTY_STATE_MESSAGE: &str = "Your resume analysis will appear here. Paste your resume and a job description, then click \"Analyze Resume\" to start.";
pub const NO_MISSING_KEYWORDS_MESSAGE: &str =
    "Great job! No critical keywords seem to be missing.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub resume_text: String,
    pub job_description_text: String,
    pub phase: Phase,
    pub busy: bool,
    pub error: Option<String>,
    pub loading_message: Option<&'static str>,
    pub actions: Actions,
    pub active_view: ActiveView,
    pub tabs: Vec<Tab>,
    pub panel: Panel,
}

/// Whether each trigger button is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Actions {
    pub analyze: bool,
    pub cover_letter: bool,
    pub questions: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub view: ActiveView,
    pub label: &'static str,
    pub active: bool,
}

/// Content of the results pane.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Panel {
    /// Analysis tab before any analysis.
    Empty { message: &'static str },
    Analysis(AnalysisPanel),
    CoverLetter { text: String },
    Questions { items: Vec<String> },
    /// The active tab's result is absent; offers to generate it.
    Placeholder(Placeholder),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn for_score(score: i64) -> Self {
        if score >= 85 {
            ScoreBand::Strong
        } else if score >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub title: &'static str,
    pub score: i64,
    pub band: ScoreBand,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantificationLine {
    pub instead_of: String,
    pub example: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPanel {
    pub score_cards: [ScoreCard; 2],
    pub summary: String,
    pub missing_keywords: Vec<String>,
    pub missing_keywords_message: Option<&'static str>,
    pub action_verb_lines: Vec<String>,
    pub quantification: Vec<QuantificationLine>,
    pub general_feedback: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    pub title: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
}

const COVER_LETTER_PLACEHOLDER: Placeholder = Placeholder {
    title: "AI Cover Letter Generator",
    description: "Generate a professional cover letter tailored to your resume and the job description in seconds.",
    button_text: "Generate Cover Letter",
};

const QUESTIONS_PLACEHOLDER: Placeholder = Placeholder {
    title: "AI Interview Question Generator",
    description: "Get a list of potential interview questions based on your resume to help you prepare.",
    button_text: "Generate Questions",
};

pub fn render(state: &SessionState) -> SessionView {
    let busy = state.busy();

    SessionView {
        resume_text: state.resume_text.clone(),
        job_description_text: state.job_description_text.clone(),
        phase: state.phase,
        busy,
        error: state.error.clone(),
        loading_message: busy.then_some(LOADING_MESSAGE),
        actions: Actions {
            analyze: !busy && state.has_both_inputs(),
            cover_letter: !busy && state.has_both_inputs(),
            questions: !busy && state.has_resume(),
        },
        active_view: state.active_view,
        tabs: tabs(state.active_view),
        panel: panel(state),
    }
}

fn tabs(active: ActiveView) -> Vec<Tab> {
    [
        (ActiveView::Analysis, "Resume Analysis"),
        (ActiveView::CoverLetter, "Cover Letter"),
        (ActiveView::Questions, "Interview Questions"),
    ]
    .into_iter()
    .map(|(view, label)| Tab {
        view,
        label,
        active: view == active,
    })
    .collect()
}

fn panel(state: &SessionState) -> Panel {
    match state.active_view {
        ActiveView::Analysis => match &state.analysis_result {
            Some(analysis) => Panel::Analysis(analysis_panel(analysis)),
            None => Panel::Empty {
                message: EMPTY_STATE_MESSAGE,
            },
        },
        ActiveView::CoverLetter => cover_letter_panel(state.cover_letter.as_ref()),
        ActiveView::Questions => questions_panel(state.interview_questions.as_ref()),
    }
}

fn analysis_panel(result: &AnalysisResult) -> AnalysisPanel {
    AnalysisPanel {
        score_cards: [
            ScoreCard {
                title: "Relevance Score",
                score: result.relevance_score,
                band: ScoreBand::for_score(result.relevance_score),
                description: "How well your resume matches the job description.",
            },
            ScoreCard {
                title: "ATS Compatibility",
                score: result.ats_score,
                band: ScoreBand::for_score(result.ats_score),
                description: "How well an Applicant Tracking System can parse your resume.",
            },
        ],
        summary: result.summary.clone(),
        missing_keywords: result.missing_keywords.clone(),
        missing_keywords_message: result
            .missing_keywords
            .is_empty()
            .then_some(NO_MISSING_KEYWORDS_MESSAGE),
        action_verb_lines: result
            .action_verb_suggestions
            .iter()
            .map(|s| {
                format!(
                    "Replace \"{}\" with stronger alternatives like: {}.",
                    s.weak_verb,
                    s.stronger_alternatives.join(", ")
                )
            })
            .collect(),
        quantification: result
            .quantification_suggestions
            .iter()
            .map(|s| QuantificationLine {
                instead_of: s.suggestion.clone(),
                example: s.example.clone(),
            })
            .collect(),
        general_feedback: result.general_feedback.clone(),
    }
}

fn cover_letter_panel(letter: Option<&CoverLetterResult>) -> Panel {
    match letter {
        Some(letter) => Panel::CoverLetter {
            text: letter.cover_letter.clone(),
        },
        None => Panel::Placeholder(COVER_LETTER_PLACEHOLDER),
    }
}

fn questions_panel(questions: Option<&InterviewQuestionsResult>) -> Panel {
    match questions {
        Some(q) => Panel::Questions {
            items: q
                .questions
                .iter()
                .enumerate()
                .map(|(i, text)| format!("{}. {}", i + 1, text))
                .collect(),
        },
        None => Panel::Placeholder(QUESTIONS_PLACEHOLDER),
    }
}
