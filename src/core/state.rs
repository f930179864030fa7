//! State and trigger traits for table-driven machines.
//!
//! States are the nodes of a transition table and triggers are the labels on
//! its edges. Both are plain values: cheap to copy, comparable, and
//! serializable so a table can be described in configuration.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state describes where an entity currently sits in
/// its lifecycle and carries no other data.
///
/// # Required Traits
///
/// - `Copy` + `Eq`: states are compared during table lookup
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: tables can be loaded from configuration
///
/// # Example
///
/// ```rust
/// use bugstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum TicketState {
///     Open,
///     Resolved,
/// }
///
/// impl State for TicketState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Resolved => "Resolved",
///         }
///     }
/// }
///
/// assert_eq!(TicketState::Resolved.name(), "Resolved");
/// assert!(!TicketState::Resolved.is_final());
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states are declared, not inferred from the table; use
    /// [`TransitionTable::states_without_exits`](crate::core::TransitionTable::states_without_exits)
    /// to find states that have no outgoing rule.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Trait for the named actions that drive a machine.
///
/// A trigger may or may not cause a transition; that is decided by the
/// transition table, never by the trigger itself.
pub trait Trigger:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the trigger's name for display/logging.
    fn name(&self) -> &'static str;
}
