//! Date resolution domain module.
//!
//! The ambiguity policy decides how to treat a caller-supplied timex token,
//! and the resolution state machine tracks one invocation of the
//! date-collection step from entry to emission.

mod policy;
mod state;

pub use policy::{AmbiguityPolicy, PromptAction};
pub use state::ResolutionState;
