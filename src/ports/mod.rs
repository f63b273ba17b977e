//! Ports: interfaces to external collaborators of the date dialog.

mod classifier;
mod date_prompt;
mod telemetry;

pub use classifier::TimexClassifier;
pub use date_prompt::{
    DatePrompt, DateTimeResolution, PromptError, PromptRequest, RecognitionResult,
    RecognitionValidator,
};
pub use telemetry::{DialogEvent, NullTelemetrySink, TelemetrySink};
