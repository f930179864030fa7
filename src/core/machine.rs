//! State machine that applies triggers against a shared transition table.

use super::error::InvalidTransition;
use super::history::{StateHistory, StateTransition};
use super::state::{State, Trigger};
use super::table::TransitionTable;
use chrono::Utc;
use std::sync::Arc;

/// A single entity's position in a transition table.
///
/// The table is shared and never mutated; the machine owns only its current
/// state and the history of applied transitions. Firing takes `&mut self`, so
/// callers that share a machine across threads must wrap it in a lock.
#[derive(Clone, Debug)]
pub struct StateMachine<S: State, T: Trigger> {
    current: S,
    table: Arc<TransitionTable<S, T>>,
    history: StateHistory<S, T>,
}

impl<S: State, T: Trigger> StateMachine<S, T> {
    /// Create a machine in `initial`. Any state is accepted.
    pub fn new(initial: S, table: Arc<TransitionTable<S, T>>) -> Self {
        Self {
            current: initial,
            table,
            history: StateHistory::new(),
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> S {
        self.current
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S, T> {
        &self.history
    }

    /// Get the shared transition table (pure)
    pub fn table(&self) -> &TransitionTable<S, T> {
        &self.table
    }

    /// Check whether `trigger` has a rule from the current state (pure)
    pub fn can_fire(&self, trigger: T) -> bool {
        self.table.contains(&self.current, &trigger)
    }

    /// Triggers that are valid from the current state (pure)
    pub fn permitted_triggers(&self) -> Vec<T> {
        self.table.triggers_from(&self.current)
    }

    /// Apply `trigger` to the current state.
    ///
    /// On success the current state becomes the rule's destination, even
    /// when that is the same state. On failure nothing changes.
    pub fn fire(&mut self, trigger: T) -> Result<S, InvalidTransition<S, T>> {
        let from = self.current;

        let Some(&to) = self.table.destination(&from, &trigger) else {
            tracing::debug!(
                from = from.name(),
                trigger = trigger.name(),
                "Rejected trigger"
            );
            return Err(InvalidTransition { from, trigger });
        };

        self.history.push(StateTransition {
            from,
            trigger,
            to,
            timestamp: Utc::now(),
        });
        self.current = to;

        tracing::debug!(
            from = from.name(),
            trigger = trigger.name(),
            to = to.name(),
            "State transition"
        );

        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TransitionTableBuilder;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum Job {
        Pending,
        Running,
        Complete,
    }

    impl State for Job {
        fn name(&self) -> &'static str {
            match self {
                Self::Pending => "Pending",
                Self::Running => "Running",
                Self::Complete => "Complete",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Complete)
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum Cmd {
        Start,
        Finish,
        Heartbeat,
    }

    impl Trigger for Cmd {
        fn name(&self) -> &'static str {
            match self {
                Self::Start => "Start",
                Self::Finish => "Finish",
                Self::Heartbeat => "Heartbeat",
            }
        }
    }

    fn job_machine(initial: Job) -> StateMachine<Job, Cmd> {
        let table = TransitionTableBuilder::new()
            .permit(Job::Pending, Cmd::Start, Job::Running)
            .permit(Job::Running, Cmd::Finish, Job::Complete)
            .permit_reentry(Job::Running, Cmd::Heartbeat)
            .build()
            .unwrap();

        StateMachine::new(initial, Arc::new(table))
    }

    #[test]
    fn fire_moves_to_destination() {
        let mut machine = job_machine(Job::Pending);

        let to = machine.fire(Cmd::Start).unwrap();

        assert_eq!(to, Job::Running);
        assert_eq!(machine.current_state(), Job::Running);
        assert_eq!(machine.history().len(), 1);
    }

    #[test]
    fn rejected_trigger_leaves_state_and_history_untouched() {
        let mut machine = job_machine(Job::Pending);

        let err = machine.fire(Cmd::Finish).unwrap_err();

        assert_eq!(err.from, Job::Pending);
        assert_eq!(err.trigger, Cmd::Finish);
        assert_eq!(machine.current_state(), Job::Pending);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn reentry_is_recorded() {
        let mut machine = job_machine(Job::Running);

        machine.fire(Cmd::Heartbeat).unwrap();
        machine.fire(Cmd::Heartbeat).unwrap();

        assert_eq!(machine.current_state(), Job::Running);
        assert_eq!(machine.history().len(), 2);
    }

    #[test]
    fn permitted_triggers_follow_current_state() {
        let mut machine = job_machine(Job::Pending);
        assert_eq!(machine.permitted_triggers(), vec![Cmd::Start]);
        assert!(machine.can_fire(Cmd::Start));
        assert!(!machine.can_fire(Cmd::Heartbeat));

        machine.fire(Cmd::Start).unwrap();
        assert_eq!(
            machine.permitted_triggers(),
            vec![Cmd::Finish, Cmd::Heartbeat]
        );
    }

    #[test]
    fn long_running_machine_records_every_fire() {
        let mut machine = job_machine(Job::Running);

        for _ in 0..20_000 {
            machine.fire(Cmd::Heartbeat).unwrap();
        }
        machine.fire(Cmd::Finish).unwrap();

        assert_eq!(machine.history().len(), 20_001);
        assert_eq!(machine.current_state(), Job::Complete);
    }

    #[test]
    fn multi_step_workflow() {
        let mut machine = job_machine(Job::Pending);

        machine.fire(Cmd::Start).unwrap();
        machine.fire(Cmd::Finish).unwrap();

        assert!(machine.is_final());
        let path = machine.history().get_path();
        assert_eq!(path, vec![&Job::Pending, &Job::Running, &Job::Complete]);
    }

    #[test]
    fn clones_share_table_but_not_state() {
        let mut machine = job_machine(Job::Pending);
        let snapshot = machine.clone();

        machine.fire(Cmd::Start).unwrap();

        assert_eq!(snapshot.current_state(), Job::Pending);
        assert_eq!(machine.table(), snapshot.table());
    }
}
