//! Immutable transition tables.
//!
//! A table maps `(state, trigger)` pairs to destination states. Pairs with no
//! rule are invalid transitions. Tables are built once (see
//! [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder)) and
//! then only read.

use super::state::{State, Trigger};
use serde::{Deserialize, Serialize};

/// One valid edge of the state graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRule<S: State, T: Trigger> {
    /// The state the rule applies to
    pub from: S,
    /// The trigger that activates the rule
    pub trigger: T,
    /// The state the machine moves to
    pub to: S,
}

impl<S: State, T: Trigger> TransitionRule<S, T> {
    /// Check if this rule applies to the given pair (pure)
    pub fn matches(&self, from: &S, trigger: &T) -> bool {
        self.from == *from && self.trigger == *trigger
    }
}

/// Ordered set of transition rules, at most one per `(state, trigger)` pair.
///
/// # Example
///
/// ```rust
/// use bugstate::bug::{BugState, BugTrigger, ClosePolicy};
///
/// let table = ClosePolicy::Permissive.table();
///
/// assert_eq!(
///     table.destination(&BugState::Open, &BugTrigger::Assign),
///     Some(&BugState::Assigned)
/// );
/// assert!(table.destination(&BugState::Closed, &BugTrigger::AcceptFix).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable<S: State, T: Trigger> {
    rules: Vec<TransitionRule<S, T>>,
}

impl<S: State, T: Trigger> TransitionTable<S, T> {
    /// Wrap rules that the builder has already checked for conflicts.
    pub(crate) fn from_rules(rules: Vec<TransitionRule<S, T>>) -> Self {
        Self { rules }
    }

    /// Look up the destination for a pair. `None` means the transition is
    /// invalid.
    pub fn destination(&self, from: &S, trigger: &T) -> Option<&S> {
        self.rules
            .iter()
            .find(|rule| rule.matches(from, trigger))
            .map(|rule| &rule.to)
    }

    /// Check whether a rule exists for the pair
    pub fn contains(&self, from: &S, trigger: &T) -> bool {
        self.destination(from, trigger).is_some()
    }

    /// All rules in insertion order
    pub fn rules(&self) -> &[TransitionRule<S, T>] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Triggers that have a rule from `from`, in table order.
    pub fn triggers_from(&self, from: &S) -> Vec<T> {
        self.rules
            .iter()
            .filter(|rule| rule.from == *from)
            .map(|rule| rule.trigger)
            .collect()
    }

    /// The subset of `states` with no outgoing rule at all.
    ///
    /// A machine that reaches one of these can never leave it.
    pub fn states_without_exits(&self, states: &[S]) -> Vec<S> {
        states
            .iter()
            .filter(|state| !self.rules.iter().any(|rule| rule.from == **state))
            .copied()
            .collect()
    }
}
