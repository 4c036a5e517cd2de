//! State machine trait for status enums.

use super::ValidationError;

/// Trait for status enums whose transitions are constrained.
///
/// Implementors declare which transitions are legal; `transition_to`
/// then validates on every state change.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns true if no transition out of this state is permitted.
    fn is_terminal(&self) -> bool;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "status",
                format!("cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }
}
