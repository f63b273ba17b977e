//! Adapters: concrete implementations of the ports.

mod definite_validator;
mod scripted_prompt;
mod surface_classifier;

pub use definite_validator::DefiniteDateValidator;
pub use scripted_prompt::ScriptedDatePrompt;
pub use surface_classifier::SurfaceTimexClassifier;
