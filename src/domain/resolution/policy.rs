//! Ambiguity policy.
//!
//! Decides, for an optional caller-supplied timex token, whether to request
//! fresh input, request disambiguating re-input, or accept the token
//! unchanged. Pure and total over its input domain.

use crate::domain::timex::TimexToken;

/// The next interaction the step should take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// No token was supplied: ask the user for a departure date.
    RequestInitial,

    /// The token carries an unresolved component: ask the user to restate
    /// the date with day, month and year.
    RequestClarification,

    /// The token is unambiguous on its surface: accept it unchanged.
    Accept(TimexToken),
}

/// Decision function over caller-supplied input.
///
/// The check is the surface ambiguity marker only. A token without the
/// marker is accepted even when semantically incomplete for the caller's
/// purposes; the validator gate on user-entered input is the stricter,
/// classifier-based one.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbiguityPolicy;

impl AmbiguityPolicy {
    /// Selects the next interaction for the given input.
    pub fn decide(prior: Option<TimexToken>) -> PromptAction {
        match prior {
            None => PromptAction::RequestInitial,
            Some(token) if token.has_unresolved_component() => PromptAction::RequestClarification,
            Some(token) => PromptAction::Accept(token),
        }
    }
}
