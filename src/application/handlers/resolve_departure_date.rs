//! ResolveDepartureDate command handler.
//!
//! Bridges the ambiguity policy to the external prompt capability and
//! emits a definite departure date to the parent dialog. One invocation
//! performs at most one prompt interaction; the suspend/resume round trip
//! lives inside the `DatePrompt` port's `collect` future.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::config::PromptsConfig;
use crate::domain::foundation::{DialogId, StateMachine, ValidationError};
use crate::domain::resolution::{AmbiguityPolicy, PromptAction, ResolutionState};
use crate::domain::timex::TimexToken;
use crate::ports::{
    DatePrompt, DialogEvent, NullTelemetrySink, PromptError, PromptRequest, RecognitionValidator,
    TelemetrySink,
};

/// Command to resolve a departure date for one dialog instance.
#[derive(Debug, Clone)]
pub struct ResolveDepartureDateCommand {
    /// The dialog instance running this step.
    pub dialog_id: DialogId,
    /// Token supplied by the parent dialog, when it already has one.
    pub prior: Option<TimexToken>,
}

impl ResolveDepartureDateCommand {
    /// Creates a new resolve command.
    pub fn new(dialog_id: DialogId, prior: Option<TimexToken>) -> Self {
        Self { dialog_id, prior }
    }
}

/// The step's single output: a definite departure date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateResolution {
    /// The dialog instance that produced the resolution.
    pub dialog_id: DialogId,
    /// The resolved token, owned by the parent dialog from here on.
    pub token: TimexToken,
}

/// Errors that can occur while resolving a departure date.
#[derive(Debug, Clone, Error)]
pub enum ResolveDateError {
    /// The prompt capability could not complete its round trip.
    #[error("prompt capability failed: {0}")]
    Prompt(#[from] PromptError),

    /// The step attempted an invalid state transition.
    #[error("invalid resolution state: {0}")]
    State(#[from] ValidationError),
}

/// Handler for the departure-date resolution step.
pub struct ResolveDepartureDateHandler {
    prompt: Arc<dyn DatePrompt>,
    validator: Arc<dyn RecognitionValidator>,
    telemetry: Arc<dyn TelemetrySink>,
    prompts: PromptsConfig,
}

impl ResolveDepartureDateHandler {
    /// Creates a handler with a no-op telemetry sink.
    pub fn new(
        prompt: Arc<dyn DatePrompt>,
        validator: Arc<dyn RecognitionValidator>,
        prompts: PromptsConfig,
    ) -> Self {
        Self {
            prompt,
            validator,
            telemetry: Arc::new(NullTelemetrySink),
            prompts,
        }
    }

    /// Replaces the telemetry sink.
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Runs the resolution step to completion.
    ///
    /// The future suspends inside `DatePrompt::collect` for the user
    /// round trip; dropping it at that point abandons the step without
    /// holding resources.
    ///
    /// # Errors
    ///
    /// Returns `ResolveDateError::Prompt` when the capability cannot
    /// complete the interaction.
    #[instrument(skip(self, command), fields(dialog_id = %command.dialog_id))]
    pub async fn handle(
        &self,
        command: ResolveDepartureDateCommand,
    ) -> Result<DateResolution, ResolveDateError> {
        let dialog_id = command.dialog_id;
        let state = ResolutionState::default();

        let (state, token) = match AmbiguityPolicy::decide(command.prior) {
            PromptAction::Accept(token) => {
                debug!(timex = %token, "caller-supplied date accepted without prompting");
                (state.transition_to(ResolutionState::Accepted)?, token)
            }
            PromptAction::RequestInitial => {
                let state = state.transition_to(ResolutionState::AwaitingInput)?;
                debug!("no date supplied, requesting initial input");
                let request =
                    PromptRequest::new(self.prompts.initial.clone(), self.prompts.clarify.clone());
                let resolution = self.prompt.collect(&request, self.validator.as_ref()).await?;
                (state.transition_to(ResolutionState::Accepted)?, resolution.timex)
            }
            PromptAction::RequestClarification => {
                let state = state.transition_to(ResolutionState::AwaitingClarification)?;
                debug!("ambiguous date supplied, requesting clarification");
                let request =
                    PromptRequest::new(self.prompts.clarify.clone(), self.prompts.clarify.clone());
                let resolution = self.prompt.collect(&request, self.validator.as_ref()).await?;
                (state.transition_to(ResolutionState::Accepted)?, resolution.timex)
            }
        };

        let state = state.transition_to(ResolutionState::Ended)?;
        debug_assert!(state.is_terminal());

        info!(timex = %token, "departure date resolved");
        self.telemetry.track_event(
            DialogEvent::new("departure_date_resolved", dialog_id)
                .with_property("timex", token.as_str()),
        );

        Ok(DateResolution {
            dialog_id,
            token,
        })
    }
}
