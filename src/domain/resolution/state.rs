//! Resolution step state machine.
//!
//! Tracks one invocation of the date-collection step. The step suspends
//! while the external prompt capability holds the floor and ends exactly
//! once, with an accepted token.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The state of one date resolution invocation.
///
/// - `Start`: entered with the caller's (optional) token, nothing decided.
/// - `AwaitingInput`: suspended on the prompt capability for a first date.
/// - `AwaitingClarification`: suspended for disambiguating re-input.
/// - `Accepted`: a token passed its gate and awaits emission.
/// - `Ended`: the resolution was handed back to the parent dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionState {
    #[default]
    Start,
    AwaitingInput,
    AwaitingClarification,
    Accepted,
    Ended,
}

impl ResolutionState {
    /// Returns true while the step is suspended on the prompt capability.
    pub fn is_suspended(&self) -> bool {
        matches!(self, Self::AwaitingInput | Self::AwaitingClarification)
    }

    /// Returns true once a token has been accepted or emitted.
    pub fn has_accepted(&self) -> bool {
        matches!(self, Self::Accepted | Self::Ended)
    }
}

impl StateMachine for ResolutionState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ResolutionState::*;
        matches!(
            (self, target),
            // No caller token: ask for one
            (Start, AwaitingInput) |
            // Ambiguous caller token: ask again with guidance
            (Start, AwaitingClarification) |
            // Unambiguous caller token: accept unchanged
            (Start, Accepted) |
            // The prompt capability returned a validated token
            (AwaitingInput, Accepted) |
            (AwaitingClarification, Accepted) |
            // Emission to the parent dialog
            (Accepted, Ended)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ResolutionState::*;
        match self {
            Start => vec![AwaitingInput, AwaitingClarification, Accepted],
            AwaitingInput => vec![Accepted],
            AwaitingClarification => vec![Accepted],
            Accepted => vec![Ended],
            Ended => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod state_definition {
        use super::*;

        #[test]
        fn default_state_is_start() {
            assert_eq!(ResolutionState::default(), ResolutionState::Start);
        }

        #[test]
        fn serializes_to_snake_case() {
            let json = serde_json::to_string(&ResolutionState::AwaitingClarification).unwrap();
            assert_eq!(json, "\"awaiting_clarification\"");
        }

        #[test]
        fn deserializes_from_snake_case() {
            let state: ResolutionState = serde_json::from_str("\"awaiting_input\"").unwrap();
            assert_eq!(state, ResolutionState::AwaitingInput);
        }
    }

    mod suspension {
        use super::*;

        #[test]
        fn awaiting_states_are_suspended() {
            assert!(ResolutionState::AwaitingInput.is_suspended());
            assert!(ResolutionState::AwaitingClarification.is_suspended());
        }

        #[test]
        fn other_states_are_not_suspended() {
            assert!(!ResolutionState::Start.is_suspended());
            assert!(!ResolutionState::Accepted.is_suspended());
            assert!(!ResolutionState::Ended.is_suspended());
        }

        #[test]
        fn acceptance_covers_accepted_and_ended() {
            assert!(ResolutionState::Accepted.has_accepted());
            assert!(ResolutionState::Ended.has_accepted());
            assert!(!ResolutionState::Start.has_accepted());
            assert!(!ResolutionState::AwaitingInput.has_accepted());
        }
    }

    mod state_machine_trait {
        use super::*;

        #[test]
        fn start_can_branch_three_ways() {
            let state = ResolutionState::Start;
            assert!(state.can_transition_to(&ResolutionState::AwaitingInput));
            assert!(state.can_transition_to(&ResolutionState::AwaitingClarification));
            assert!(state.can_transition_to(&ResolutionState::Accepted));
        }

        #[test]
        fn start_cannot_end_directly() {
            assert!(!ResolutionState::Start.can_transition_to(&ResolutionState::Ended));
        }

        #[test]
        fn suspended_states_resume_only_into_accepted() {
            for state in [ResolutionState::AwaitingInput, ResolutionState::AwaitingClarification] {
                assert_eq!(state.valid_transitions(), vec![ResolutionState::Accepted]);
            }
        }

        #[test]
        fn awaiting_input_cannot_switch_to_clarification() {
            let state = ResolutionState::AwaitingInput;
            assert!(!state.can_transition_to(&ResolutionState::AwaitingClarification));
        }

        #[test]
        fn accepted_transitions_to_ended() {
            let state = ResolutionState::Accepted;
            assert_eq!(state.transition_to(ResolutionState::Ended), Ok(ResolutionState::Ended));
        }

        #[test]
        fn ended_is_terminal() {
            assert!(ResolutionState::Ended.is_terminal());
            assert!(ResolutionState::Ended.valid_transitions().is_empty());
        }

        #[test]
        fn transition_to_fails_for_invalid_transition() {
            let result = ResolutionState::Ended.transition_to(ResolutionState::Start);
            assert!(result.is_err());
        }

        #[test]
        fn valid_transitions_matches_can_transition_to() {
            for state in [
                ResolutionState::Start,
                ResolutionState::AwaitingInput,
                ResolutionState::AwaitingClarification,
                ResolutionState::Accepted,
                ResolutionState::Ended,
            ] {
                for valid_target in state.valid_transitions() {
                    assert!(
                        state.can_transition_to(&valid_target),
                        "can_transition_to should return true for {:?} -> {:?}",
                        state,
                        valid_target
                    );
                }
            }
        }
    }
}
