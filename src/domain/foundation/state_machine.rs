//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions across entity lifecycle statuses (resolution steps, turns).

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ResolutionState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Start, AwaitingInput) |
///             (AwaitingInput, Accepted) |
///             // ... etc
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Start => vec![AwaitingInput, AwaitingClarification, Accepted],
///             AwaitingInput => vec![Accepted],
///             // ... etc
///         }
///     }
/// }
///
/// // Usage:
/// let new_state = current_state.transition_to(ResolutionState::Accepted)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    ///
    /// This is the preferred way to change state, as it ensures
    /// the transition is valid according to the state machine rules.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test enum for StateMachine trait
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TurnStatus {
        Pending,
        Prompting,
        Resolved,
        Closed,
    }

    impl StateMachine for TurnStatus {
        fn can_transition_to(&self, target: &Self) -> bool {
            use TurnStatus::*;
            matches!(
                (self, target),
                (Pending, Prompting) | (Prompting, Resolved) | (Prompting, Closed) | (Resolved, Closed)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use TurnStatus::*;
            match self {
                Pending => vec![Prompting],
                Prompting => vec![Resolved, Closed],
                Resolved => vec![Closed],
                Closed => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let status = TurnStatus::Pending;
        let result = status.transition_to(TurnStatus::Prompting);
        assert_eq!(result, Ok(TurnStatus::Prompting));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let status = TurnStatus::Pending;
        let result = status.transition_to(TurnStatus::Resolved);
        assert!(result.is_err());
    }

    #[test]
    fn is_terminal_returns_true_for_closed() {
        assert!(TurnStatus::Closed.is_terminal());
    }

    #[test]
    fn is_terminal_returns_false_for_non_terminal() {
        assert!(!TurnStatus::Pending.is_terminal());
        assert!(!TurnStatus::Prompting.is_terminal());
        assert!(!TurnStatus::Resolved.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for status in [
            TurnStatus::Pending,
            TurnStatus::Prompting,
            TurnStatus::Resolved,
            TurnStatus::Closed,
        ] {
            for valid_target in status.valid_transitions() {
                assert!(
                    status.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    status,
                    valid_target
                );
            }
        }
    }
}
