//! Scripted Date Prompt Adapter
//!
//! Replays a queue of canned recognition results against the supplied
//! validator with the same retry semantics as a live prompt capability.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

use crate::ports::{
    DatePrompt, DateTimeResolution, PromptError, PromptRequest, RecognitionResult,
    RecognitionValidator,
};

/// In-memory prompt capability driven by a scripted set of user replies.
pub struct ScriptedDatePrompt {
    replies: Mutex<VecDeque<RecognitionResult>>,
    transcript: Mutex<Vec<String>>,
}

impl ScriptedDatePrompt {
    /// Creates a prompt that replays the given recognitions in order.
    pub fn new(replies: Vec<RecognitionResult>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Returns every prompt text shown so far, in order.
    pub async fn transcript(&self) -> Vec<String> {
        self.transcript.lock().await.clone()
    }

    /// Returns the number of scripted replies not yet consumed.
    pub async fn remaining_replies(&self) -> usize {
        self.replies.lock().await.len()
    }
}

#[async_trait]
impl DatePrompt for ScriptedDatePrompt {
    async fn collect(
        &self,
        request: &PromptRequest,
        validator: &dyn RecognitionValidator,
    ) -> Result<DateTimeResolution, PromptError> {
        let mut shown = request.prompt.clone();
        loop {
            self.transcript.lock().await.push(shown);

            let next = self.replies.lock().await.pop_front();
            let Some(recognition) = next else {
                // Script exhausted: the simulated user walked away.
                return Err(PromptError::Abandoned);
            };

            if validator.validate(&recognition) {
                return recognition.resolutions.into_iter().next().ok_or_else(|| {
                    PromptError::Unavailable(
                        "validated recognition carried no candidates".to_string(),
                    )
                });
            }

            shown = request.retry_prompt.clone();
        }
    }
}
