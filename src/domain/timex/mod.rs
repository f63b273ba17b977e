//! Timex domain module.
//!
//! Value objects and surface classification for the constrained temporal
//! expression grammar the date dialog exchanges with its collaborators.

mod classifier;
mod token;
mod types;

pub use classifier::classify;
pub use token::{TimexToken, AMBIGUITY_MARKER};
pub use types::TimexType;
