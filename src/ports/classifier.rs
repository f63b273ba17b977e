//! Timex classifier port.
//!
//! The classifier consumes a timex token and produces its set of type
//! tags. The date expression grammar itself stays behind this interface;
//! this crate only reads the tags.

use std::collections::HashSet;

use crate::domain::timex::{TimexToken, TimexType};

/// Port for classifying timex tokens.
pub trait TimexClassifier: Send + Sync {
    /// Returns the set of type tags for the token.
    ///
    /// An empty set means the token is not a recognized temporal
    /// expression.
    fn classify(&self, token: &TimexToken) -> HashSet<TimexType>;
}
