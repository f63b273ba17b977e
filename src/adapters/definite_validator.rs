//! Definite Date Validator Adapter
//!
//! The validator predicate handed to the prompt capability: accepts a
//! recognition only when its best candidate, with any time of day
//! stripped, classifies as definite.

use std::sync::Arc;

use crate::domain::timex::TimexType;
use crate::ports::{RecognitionResult, RecognitionValidator, TimexClassifier};

/// Accepts only fully specified dates from user-entered input.
///
/// This gate is independent of the ambiguity policy's surface-marker
/// check: the policy screens caller-supplied tokens before prompting, the
/// validator screens user-entered tokens after parsing. Both must hold for
/// the step's emission guarantee.
#[derive(Clone)]
pub struct DefiniteDateValidator {
    classifier: Arc<dyn TimexClassifier>,
}

impl DefiniteDateValidator {
    /// Creates a validator over the given classifier.
    pub fn new(classifier: Arc<dyn TimexClassifier>) -> Self {
        Self { classifier }
    }
}

impl RecognitionValidator for DefiniteDateValidator {
    fn validate(&self, recognition: &RecognitionResult) -> bool {
        if !recognition.succeeded {
            return false;
        }
        let Some(best) = recognition.first() else {
            return false;
        };
        let date_only = best.timex.strip_time();
        self.classifier.classify(&date_only).contains(&TimexType::Definite)
    }
}
