use serde::{Deserialize, Serialize};

use crate::models::feedback::{AnalysisResult, CoverLetterResult, InterviewQuestionsResult};

/// Which result category the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveView {
    #[default]
    Analysis,
    CoverLetter,
    Questions,
}

/// The three remote operations a session can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Analyze,
    CoverLetter,
    Questions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "operation", rename_all = "camelCase")]
pub enum Phase {
    #[default]
    Idle,
    Busy(Operation),
}

/// Everything one user session holds. Results start absent and are only
/// ever replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub resume_text: String,
    pub job_description_text: String,
    pub analysis_result: Option<AnalysisResult>,
    pub cover_letter: Option<CoverLetterResult>,
    pub interview_questions: Option<InterviewQuestionsResult>,
    pub phase: Phase,
    pub error: Option<String>,
    pub active_view: ActiveView,
}

impl SessionState {
    pub fn busy(&self) -> bool {
        matches!(self.phase, Phase::Busy(_))
    }

    pub fn has_resume(&self) -> bool {
        !self.resume_text.trim().is_empty()
    }

    pub fn has_both_inputs(&self) -> bool {
        self.has_resume() && !self.job_description_text.trim().is_empty()
    }
}

/// Latest request ticket issued per operation. A response is applied only
/// while its ticket is still the latest for its operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sequences {
    analyze: u64,
    cover_letter: u64,
    questions: u64,
}

impl Sequences {
    fn slot(&mut self, op: Operation) -> &mut u64 {
        match op {
            Operation::Analyze => &mut self.analyze,
            Operation::CoverLetter => &mut self.cover_letter,
            Operation::Questions => &mut self.questions,
        }
    }

    /// Issues a new ticket for `op`, superseding any outstanding one.
    pub fn issue(&mut self, op: Operation) -> u64 {
        let slot = self.slot(op);
        *slot += 1;
        *slot
    }

    pub fn is_latest(&self, op: Operation, ticket: u64) -> bool {
        let latest = match op {
            Operation::Analyze => self.analyze,
            Operation::CoverLetter => self.cover_letter,
            Operation::Questions => self.questions,
        };
        latest == ticket
    }
}
