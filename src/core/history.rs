//! Transition history tracking.
//!
//! Every successfully applied trigger leaves one record. Rejected triggers
//! never appear here, so the history always replays to the current state.

use super::state::{State, Trigger};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use bugstate::bug::{BugState, BugTrigger};
/// use bugstate::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: BugState::Open,
///     trigger: BugTrigger::Assign,
///     to: BugState::Assigned,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, BugState::Assigned);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, T: Trigger> {
    /// The state being transitioned from
    pub from: S,
    /// The trigger that caused the transition
    pub trigger: T,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use bugstate::bug::{BugState, BugTrigger};
/// use bugstate::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: BugState::Open,
///         trigger: BugTrigger::Assign,
///         to: BugState::Assigned,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: BugState::Assigned,
///         trigger: BugTrigger::Close,
///         to: BugState::Closed,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&BugState::Open, &BugState::Assigned, &BugState::Closed]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, T: Trigger> {
    transitions: Vec<StateTransition<S, T>>,
}

impl<S: State, T: Trigger> Default for StateHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> StateHistory<S, T> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, T>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition in place.
    pub(crate) fn push(&mut self, transition: StateTransition<S, T>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first transition's `from` state followed by the `to` state
    /// of each transition. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Triggers in the order they were applied.
    pub fn triggers(&self) -> Vec<&T> {
        self.transitions.iter().map(|t| &t.trigger).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S, T>] {
        &self.transitions
    }

    /// Number of recorded transitions
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum Phase {
        Queued,
        Running,
        Done,
    }

    impl State for Phase {
        fn name(&self) -> &'static str {
            match self {
                Self::Queued => "Queued",
                Self::Running => "Running",
                Self::Done => "Done",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Done)
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
    enum Step {
        Start,
        Finish,
    }

    impl Trigger for Step {
        fn name(&self) -> &'static str {
            match self {
                Self::Start => "Start",
                Self::Finish => "Finish",
            }
        }
    }

    fn transition(from: Phase, trigger: Step, to: Phase) -> StateTransition<Phase, Step> {
        StateTransition {
            from,
            trigger,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Phase, Step> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();

        let new_history = history.record(transition(Phase::Queued, Step::Start, Phase::Running));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = StateHistory::new();

        history.push(transition(Phase::Queued, Step::Start, Phase::Running));
        history.push(transition(Phase::Running, Step::Finish, Phase::Done));

        assert_eq!(history.len(), 2);
        assert_eq!(history.triggers(), vec![&Step::Start, &Step::Finish]);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(Phase::Queued, Step::Start, Phase::Running))
            .record(transition(Phase::Running, Step::Finish, Phase::Done));

        let path = history.get_path();
        assert_eq!(path, vec![&Phase::Queued, &Phase::Running, &Phase::Done]);
    }

    #[test]
    fn triggers_are_kept_in_order() {
        let history = StateHistory::new()
            .record(transition(Phase::Queued, Step::Start, Phase::Running))
            .record(transition(Phase::Running, Step::Finish, Phase::Done));

        assert_eq!(history.triggers(), vec![&Step::Start, &Step::Finish]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: Phase::Queued,
                trigger: Step::Start,
                to: Phase::Running,
                timestamp: start,
            })
            .record(StateTransition {
                from: Phase::Running,
                trigger: Step::Finish,
                to: Phase::Done,
                timestamp: start + chrono::Duration::milliseconds(250),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history =
            StateHistory::new().record(transition(Phase::Queued, Step::Start, Phase::Running));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            StateHistory::new().record(transition(Phase::Queued, Step::Start, Phase::Running));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Phase, Step> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
