//! Date prompt port - the external capability that collects dates.
//!
//! The capability renders a prompt, parses the user's reply into timex
//! candidates, and applies a validator predicate. It re-prompts with the
//! retry text until the predicate holds, so a successful `collect` always
//! hands back a candidate the validator accepted. Retry and timeout policy
//! belong to the capability, not to this crate.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::timex::TimexToken;

/// One candidate temporal expression produced by the recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeResolution {
    /// The candidate in timex form.
    pub timex: TimexToken,
    /// The recognizer's natural-language rendering, when available.
    pub value: Option<String>,
}

impl DateTimeResolution {
    /// Creates a resolution from a timex token.
    pub fn new(timex: TimexToken) -> Self {
        Self { timex, value: None }
    }

    /// Attaches the recognizer's rendering of the candidate.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Outcome of one recognition attempt over raw user text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Whether the recognizer parsed the text at all.
    pub succeeded: bool,
    /// Candidate expressions, best first. Empty when recognition failed.
    pub resolutions: Vec<DateTimeResolution>,
}

impl RecognitionResult {
    /// A successful recognition carrying the given candidates.
    pub fn recognized(resolutions: Vec<DateTimeResolution>) -> Self {
        Self {
            succeeded: true,
            resolutions,
        }
    }

    /// A failed recognition (unparseable user text).
    pub fn failed() -> Self {
        Self {
            succeeded: false,
            resolutions: Vec::new(),
        }
    }

    /// Returns the best candidate, if any.
    pub fn first(&self) -> Option<&DateTimeResolution> {
        self.resolutions.first()
    }
}

/// Prompt texts for one collection round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Shown when the capability takes the floor.
    pub prompt: String,
    /// Shown on every rejected or failed recognition.
    pub retry_prompt: String,
}

impl PromptRequest {
    /// Creates a request from prompt and retry texts.
    pub fn new(prompt: impl Into<String>, retry_prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            retry_prompt: retry_prompt.into(),
        }
    }
}

/// Errors surfaced by the prompt capability.
#[derive(Debug, Clone, Error)]
pub enum PromptError {
    /// The capability cannot take the floor or lost its channel.
    #[error("prompt capability unavailable: {0}")]
    Unavailable(String),

    /// The conversation was abandoned before a date was collected.
    #[error("conversation abandoned before a date was collected")]
    Abandoned,
}

/// Validator predicate the prompt capability applies to each recognition.
///
/// Pure and synchronous: implementations inspect the recognition only.
pub trait RecognitionValidator: Send + Sync {
    /// Returns true when the recognition should be accepted.
    fn validate(&self, recognition: &RecognitionResult) -> bool;
}

/// Port for the external date-collection capability.
#[async_trait]
pub trait DatePrompt: Send + Sync {
    /// Collects a date from the user.
    ///
    /// Implementations show `request.prompt`, parse each reply, and apply
    /// `validator`; on rejection they re-prompt with `request.retry_prompt`.
    /// The returned resolution is the first candidate of the accepted
    /// recognition.
    ///
    /// # Errors
    ///
    /// Returns `PromptError` when the capability cannot complete the
    /// round trip (channel loss, conversation abandoned).
    async fn collect(
        &self,
        request: &PromptRequest,
        validator: &dyn RecognitionValidator,
    ) -> Result<DateTimeResolution, PromptError>;
}
