//! Build errors for transition tables.

use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one transition with .permit()")]
    NoTransitions,

    #[error(
        "Conflicting transitions from state '{from}' for trigger '{trigger}': \
         '{existing}' and '{requested}'"
    )]
    ConflictingTransition {
        from: String,
        trigger: String,
        existing: String,
        requested: String,
    },
}
