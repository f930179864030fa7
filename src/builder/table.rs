//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{State, TransitionRule, TransitionTable, Trigger};

/// Builder for constructing transition tables with a fluent API.
///
/// Rules are collected as given and checked in [`build`](Self::build):
/// permitting the same rule twice is harmless, permitting the same
/// `(from, trigger)` pair to two destinations is an error.
///
/// # Example
///
/// ```rust
/// use bugstate::builder::TransitionTableBuilder;
/// use bugstate::bug::{BugState, BugTrigger};
///
/// let table = TransitionTableBuilder::new()
///     .permit(BugState::Open, BugTrigger::Assign, BugState::Assigned)
///     .permit(BugState::Assigned, BugTrigger::Close, BugState::Closed)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTableBuilder<S: State, T: Trigger> {
    rules: Vec<TransitionRule<S, T>>,
}

impl<S: State, T: Trigger> TransitionTableBuilder<S, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Start from an existing table's rules.
    pub fn from_table(table: &TransitionTable<S, T>) -> Self {
        Self {
            rules: table.rules().to_vec(),
        }
    }

    /// Allow `trigger` to move the machine from `from` to `to`.
    pub fn permit(mut self, from: S, trigger: T, to: S) -> Self {
        self.rules.push(TransitionRule { from, trigger, to });
        self
    }

    /// Allow `trigger` in `state` as a self-transition.
    pub fn permit_reentry(self, state: S, trigger: T) -> Self {
        self.permit(state, trigger, state)
    }

    /// Add a pre-built rule.
    pub fn rule(mut self, rule: TransitionRule<S, T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Drop every rule for `(from, trigger)` added so far.
    pub fn forbid(mut self, from: S, trigger: T) -> Self {
        self.rules.retain(|rule| !rule.matches(&from, &trigger));
        self
    }

    /// Build the table.
    /// Returns an error if the table is empty or has conflicting rules.
    pub fn build(self) -> Result<TransitionTable<S, T>, BuildError> {
        if self.rules.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut rules: Vec<TransitionRule<S, T>> = Vec::with_capacity(self.rules.len());
        for rule in self.rules {
            match rules.iter().find(|r| r.matches(&rule.from, &rule.trigger)) {
                Some(existing) if existing.to == rule.to => continue,
                Some(existing) => {
                    return Err(BuildError::ConflictingTransition {
                        from: rule.from.name().to_string(),
                        trigger: rule.trigger.name().to_string(),
                        existing: existing.to.name().to_string(),
                        requested: rule.to.name().to_string(),
                    });
                }
                None => rules.push(rule),
            }
        }

        Ok(TransitionTable::from_rules(rules))
    }
}

impl<S: State, T: Trigger> Default for TransitionTableBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}
