//! The error raised when a trigger has no rule for the current state.

use super::state::{State, Trigger};
use thiserror::Error;

/// A trigger was fired from a state that has no rule for it.
///
/// Carries the rejected pair as structured data so callers can branch on
/// `from` and `trigger` instead of matching on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "No valid leaving transitions are permitted from state '{}' for trigger '{}'.",
    .from.name(),
    .trigger.name()
)]
pub struct InvalidTransition<S: State, T: Trigger> {
    /// The state the machine was in when the trigger was rejected
    pub from: S,
    /// The trigger that was rejected
    pub trigger: T,
}
