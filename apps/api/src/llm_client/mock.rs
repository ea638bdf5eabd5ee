//! Scripted `GenerativeModel` for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Notify;

use super::{GenerativeModel, LlmError};

/// Lets a test hold a call open: `entered` fires when the call starts,
/// the call then waits for `release`.
#[derive(Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

/// Replays queued replies in order. `Err` replies surface as a 500 from the
/// provider; an exhausted queue behaves like an empty candidate.
#[derive(Default)]
pub struct MockModel {
    replies: Mutex<VecDeque<Result<String, String>>>,
    prompts: Mutex<Vec<String>>,
    schemas: Mutex<Vec<Value>>,
    calls: AtomicUsize,
    gate: Option<Gate>,
}

impl MockModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Gate::default()),
            ..Self::default()
        }
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    pub fn fail(self, message: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(Err(message.into()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn schemas(&self) -> Vec<Value> {
        self.schemas.lock().unwrap().clone()
    }

    pub fn gate(&self) -> &Gate {
        self.gate.as_ref().expect("MockModel was not built with gated()")
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate_json(&self, prompt: &str, schema: &Value) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.schemas.lock().unwrap().push(schema.clone());

        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(LlmError::Api {
                status: 500,
                message,
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}
