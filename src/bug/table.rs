//! Built-in transition tables for the bug lifecycle.

use super::{BugState, BugTrigger};
use crate::core::{TransitionRule, TransitionTable};
use std::sync::{Arc, OnceLock};

use BugState::*;
use BugTrigger::*;

const RULES: &[(BugState, BugTrigger, BugState)] = &[
    (Open, Assign, Assigned),
    (Closed, Assign, Assigned),
    (Defered, Assign, Assigned),
    (AcceptedFixes, Assign, Assigned),
    (DeclinedFixes, Assign, Assigned),
    (Assigned, Close, Closed),
    (Defered, Close, Closed),
    (CreatedFixes, Close, Closed),
    (AcceptedFixes, Close, Closed),
    (Assigned, Defer, Defered),
    (Defered, Defer, Defered),
    (CreatedFixes, DeclineFix, DeclinedFixes),
    (DeclinedFixes, CreateFix, CreatedFixes),
    (CreatedFixes, AcceptFix, AcceptedFixes),
];

/// How `Close` is treated from `Defered` and `CreatedFixes`.
///
/// Closing a deferred bug, or a bug with a fix still under review, is allowed
/// by some workflows and refused by others.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ClosePolicy {
    /// `Close` is valid from `Defered` and `CreatedFixes`.
    #[default]
    Permissive,
    /// `Close` is valid only from `Assigned` and `AcceptedFixes`; a deferred
    /// bug must be reassigned and a pending fix accepted first.
    Strict,
}

impl ClosePolicy {
    /// Whether this policy allows the given rule.
    fn allows(self, from: BugState, trigger: BugTrigger) -> bool {
        match self {
            Self::Permissive => true,
            Self::Strict => !(trigger == Close && matches!(from, Defered | CreatedFixes)),
        }
    }

    /// Build a fresh table for this policy.
    pub fn table(self) -> TransitionTable<BugState, BugTrigger> {
        let rules = RULES
            .iter()
            .filter(|(from, trigger, _)| self.allows(*from, *trigger))
            .map(|&(from, trigger, to)| TransitionRule { from, trigger, to })
            .collect();
        TransitionTable::from_rules(rules)
    }

    /// The process-wide table for this policy, built on first use.
    pub fn shared_table(self) -> Arc<TransitionTable<BugState, BugTrigger>> {
        static PERMISSIVE: OnceLock<Arc<TransitionTable<BugState, BugTrigger>>> = OnceLock::new();
        static STRICT: OnceLock<Arc<TransitionTable<BugState, BugTrigger>>> = OnceLock::new();

        let cell = match self {
            Self::Permissive => &PERMISSIVE,
            Self::Strict => &STRICT,
        };
        Arc::clone(cell.get_or_init(|| Arc::new(self.table())))
    }
}
