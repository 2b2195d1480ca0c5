//! [`ScriptedBackend`]: replays queued outcomes for unit and integration tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use econcast_core::{CompletionBackend, CompletionRequest};
use thiserror::Error;

/// Error produced by a [`ScriptedBackend`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ScriptedFailure(pub String);

/// A backend that returns pre-configured outcomes in the order they were
/// queued and records every request it receives.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    outcomes: Mutex<VecDeque<Result<Option<String>, ScriptedFailure>>>,
    recorded: Mutex<Vec<CompletionRequest>>,
    call_count: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue response text.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.push(Ok(Some(text.into())));
        self
    }

    /// Queue a response that carries no text.
    pub fn with_no_text(self) -> Self {
        self.push(Ok(None));
        self
    }

    /// Queue a backend failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(Err(ScriptedFailure(message.into())));
        self
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn recorded(&self) -> Vec<CompletionRequest> {
        self.recorded.lock().unwrap().clone()
    }

    fn push(&self, outcome: Result<Option<String>, ScriptedFailure>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }
}

impl CompletionBackend for ScriptedBackend {
    type Error = ScriptedFailure;

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<Option<String>, ScriptedFailure> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.recorded.lock().unwrap().push(request.clone());
        let next = self.outcomes.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(ScriptedFailure("no scripted outcome left".into())))
    }
}
