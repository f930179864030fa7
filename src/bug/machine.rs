//! A single bug and the operations that move it through its lifecycle.

use super::table::ClosePolicy;
use super::{BugState, BugTrigger};
use crate::core::{InvalidTransition, StateHistory, StateMachine, TransitionTable};
use std::sync::Arc;

/// Error returned when a trigger is not valid for a bug's current state.
pub type BugTransitionError = InvalidTransition<BugState, BugTrigger>;

/// A tracked bug.
///
/// Holds its current state and nothing else of the domain. Each trigger
/// operation either moves the bug to the table's destination or fails with
/// [`BugTransitionError`] and leaves it where it was.
#[derive(Clone, Debug)]
pub struct Bug {
    machine: StateMachine<BugState, BugTrigger>,
}

impl Bug {
    /// Create a bug in `initial` using the default table.
    ///
    /// Any state is a legal starting point; `Open` is the usual one.
    pub fn new(initial: BugState) -> Self {
        Self::with_policy(initial, ClosePolicy::default())
    }

    /// Create a bug using the built-in table for `policy`.
    pub fn with_policy(initial: BugState, policy: ClosePolicy) -> Self {
        Self::with_table(initial, policy.shared_table())
    }

    /// Create a bug driven by a custom table.
    pub fn with_table(
        initial: BugState,
        table: Arc<TransitionTable<BugState, BugTrigger>>,
    ) -> Self {
        Self {
            machine: StateMachine::new(initial, table),
        }
    }

    /// Get the bug's current state (pure)
    pub fn state(&self) -> BugState {
        self.machine.current_state()
    }

    /// Fire `Assign`.
    pub fn assign(&mut self) -> Result<(), BugTransitionError> {
        self.fire(BugTrigger::Assign)
    }

    /// Fire `Close`.
    pub fn close(&mut self) -> Result<(), BugTransitionError> {
        self.fire(BugTrigger::Close)
    }

    /// Fire `Defer`.
    pub fn defer(&mut self) -> Result<(), BugTransitionError> {
        self.fire(BugTrigger::Defer)
    }

    /// Fire `CreateFix`.
    pub fn create_fix(&mut self) -> Result<(), BugTransitionError> {
        self.fire(BugTrigger::CreateFix)
    }

    /// Fire `DeclineFix`.
    pub fn decline_fix(&mut self) -> Result<(), BugTransitionError> {
        self.fire(BugTrigger::DeclineFix)
    }

    /// Fire `AcceptFix`.
    pub fn accept_fix(&mut self) -> Result<(), BugTransitionError> {
        self.fire(BugTrigger::AcceptFix)
    }

    /// Apply any trigger. The named operations delegate here.
    pub fn fire(&mut self, trigger: BugTrigger) -> Result<(), BugTransitionError> {
        self.machine.fire(trigger).map(|_| ())
    }

    /// Check whether `trigger` would succeed from the current state.
    pub fn can_fire(&self, trigger: BugTrigger) -> bool {
        self.machine.can_fire(trigger)
    }

    /// Triggers valid from the current state, in table order.
    pub fn permitted_triggers(&self) -> Vec<BugTrigger> {
        self.machine.permitted_triggers()
    }

    /// Transitions applied since the bug was created.
    pub fn history(&self) -> &StateHistory<BugState, BugTrigger> {
        self.machine.history()
    }
}
