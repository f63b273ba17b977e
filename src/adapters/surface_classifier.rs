//! Surface Timex Classifier Adapter
//!
//! Classifies tokens by their surface form using the domain grammar rules.
//! Stands in for a full date-expression library behind the classifier port.

use std::collections::HashSet;

use crate::domain::timex::{self, TimexToken, TimexType};
use crate::ports::TimexClassifier;

/// Classifier over the timex surface grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceTimexClassifier;

impl SurfaceTimexClassifier {
    /// Creates a new surface classifier.
    pub fn new() -> Self {
        Self
    }
}

impl TimexClassifier for SurfaceTimexClassifier {
    fn classify(&self, token: &TimexToken) -> HashSet<TimexType> {
        timex::classify(token)
    }
}
