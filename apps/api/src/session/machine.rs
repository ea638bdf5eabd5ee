//! Session state machine.
//!
//! Idle → Busy(op) on an allowed trigger, back to Idle when the remote call
//! settles (success or failure). The guard check and the move to Busy happen
//! under one write lock; the lock is never held across the remote call.

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::generation::generator::{CoachGenerator, GenerationError};
use crate::session::state::{ActiveView, Operation, Phase, Sequences, SessionState};

/// Shown when analysis is requested without both inputs.
pub const MISSING_INPUTS_MESSAGE: &str = "Please provide both a resume and a job description.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Busy,
    MissingInputs,
}

/// What a trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The call succeeded and its result was stored.
    Completed,
    /// The call failed; the fixed message is now the session error.
    Failed(GenerationError),
    /// The call settled after a newer request for the same slot was issued.
    Discarded,
    /// No call was made.
    Rejected(Rejection),
}

impl TriggerOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            TriggerOutcome::Completed => "completed",
            TriggerOutcome::Failed(_) => "failed",
            TriggerOutcome::Discarded => "discarded",
            TriggerOutcome::Rejected(Rejection::Busy) => "busy",
            TriggerOutcome::Rejected(Rejection::MissingInputs) => "ignored",
        }
    }
}

struct Inner {
    state: SessionState,
    latest: Sequences,
}

/// One user's session: the two text inputs, the three results, and the
/// single-operation guard.
pub struct Session {
    inner: RwLock<Inner>,
    generator: CoachGenerator,
}

impl Session {
    pub fn new(generator: CoachGenerator) -> Self {
        Self {
            inner: RwLock::new(Inner {
                state: SessionState::default(),
                latest: Sequences::default(),
            }),
            generator,
        }
    }

    pub async fn snapshot(&self) -> SessionState {
        self.inner.read().await.state.clone()
    }

    /// Replaces whichever inputs are given. Allowed while busy; stored
    /// results are kept.
    pub async fn update_inputs(
        &self,
        resume_text: Option<String>,
        job_description_text: Option<String>,
    ) -> SessionState {
        let mut inner = self.inner.write().await;
        if let Some(text) = resume_text {
            inner.state.resume_text = text;
        }
        if let Some(text) = job_description_text {
            inner.state.job_description_text = text;
        }
        inner.state.clone()
    }

    pub async fn set_active_view(&self, view: ActiveView) -> SessionState {
        let mut inner = self.inner.write().await;
        inner.state.active_view = view;
        inner.state.clone()
    }

    pub async fn trigger_analyze(&self) -> TriggerOutcome {
        let (ticket, resume_text, job_description_text) = {
            let mut inner = self.inner.write().await;
            if inner.state.busy() {
                debug!("Analyze ignored: another operation is in flight");
                return TriggerOutcome::Rejected(Rejection::Busy);
            }
            if !inner.state.has_both_inputs() {
                inner.state.error = Some(MISSING_INPUTS_MESSAGE.to_string());
                return TriggerOutcome::Rejected(Rejection::MissingInputs);
            }

            let state = &mut inner.state;
            state.analysis_result = None;
            state.cover_letter = None;
            state.interview_questions = None;
            state.error = None;
            state.active_view = ActiveView::Analysis;
            state.phase = Phase::Busy(Operation::Analyze);
            let inputs = (state.resume_text.clone(), state.job_description_text.clone());

            // Clearing the derived slots supersedes any tickets issued for them.
            inner.latest.issue(Operation::CoverLetter);
            inner.latest.issue(Operation::Questions);
            (inner.latest.issue(Operation::Analyze), inputs.0, inputs.1)
        };

        info!("Analysis started (ticket {ticket})");
        let result = self
            .generator
            .analyze(&resume_text, &job_description_text)
            .await;

        self.settle(Operation::Analyze, ticket, result, |state, analysis| {
            state.analysis_result = Some(analysis);
        })
        .await
    }

    /// Silently does nothing without both inputs.
    pub async fn trigger_cover_letter(&self) -> TriggerOutcome {
        let (ticket, resume_text, job_description_text) = {
            let mut inner = self.inner.write().await;
            if inner.state.busy() {
                debug!("Cover letter ignored: another operation is in flight");
                return TriggerOutcome::Rejected(Rejection::Busy);
            }
            if !inner.state.has_both_inputs() {
                return TriggerOutcome::Rejected(Rejection::MissingInputs);
            }
            inner.state.error = None;
            inner.state.phase = Phase::Busy(Operation::CoverLetter);
            let ticket = inner.latest.issue(Operation::CoverLetter);
            (
                ticket,
                inner.state.resume_text.clone(),
                inner.state.job_description_text.clone(),
            )
        };

        info!("Cover letter generation started (ticket {ticket})");
        let result = self
            .generator
            .generate_cover_letter(&resume_text, &job_description_text)
            .await;

        self.settle(Operation::CoverLetter, ticket, result, |state, letter| {
            state.cover_letter = Some(letter);
            state.active_view = ActiveView::CoverLetter;
        })
        .await
    }

    /// Needs the resume only; silently does nothing without it.
    pub async fn trigger_questions(&self) -> TriggerOutcome {
        let (ticket, resume_text) = {
            let mut inner = self.inner.write().await;
            if inner.state.busy() {
                debug!("Questions ignored: another operation is in flight");
                return TriggerOutcome::Rejected(Rejection::Busy);
            }
            if !inner.state.has_resume() {
                return TriggerOutcome::Rejected(Rejection::MissingInputs);
            }
            inner.state.error = None;
            inner.state.phase = Phase::Busy(Operation::Questions);
            let ticket = inner.latest.issue(Operation::Questions);
            (ticket, inner.state.resume_text.clone())
        };

        info!("Interview question generation started (ticket {ticket})");
        let result = self
            .generator
            .generate_interview_questions(&resume_text)
            .await;

        self.settle(Operation::Questions, ticket, result, |state, questions| {
            state.interview_questions = Some(questions);
            state.active_view = ActiveView::Questions;
        })
        .await
    }

    /// Returns to Idle unconditionally, then applies the result only if
    /// `ticket` is still the latest for `op`.
    async fn settle<T>(
        &self,
        op: Operation,
        ticket: u64,
        result: Result<T, GenerationError>,
        apply: impl FnOnce(&mut SessionState, T),
    ) -> TriggerOutcome {
        let mut inner = self.inner.write().await;
        inner.state.phase = Phase::Idle;

        if !inner.latest.is_latest(op, ticket) {
            warn!("Discarding stale {op:?} response (ticket {ticket})");
            return TriggerOutcome::Discarded;
        }

        match result {
            Ok(value) => {
                apply(&mut inner.state, value);
                info!("{op:?} completed (ticket {ticket})");
                TriggerOutcome::Completed
            }
            Err(e) => {
                inner.state.error = Some(e.to_string());
                TriggerOutcome::Failed(e)
            }
        }
    }
}
