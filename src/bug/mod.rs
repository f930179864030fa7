//! The bug lifecycle.
//!
//! A bug moves between seven states in response to six triggers. Which moves
//! are allowed is decided entirely by a [`TransitionTable`](crate::core::TransitionTable);
//! see [`ClosePolicy`] for the two built-in tables.
//!
//! # Example
//!
//! ```rust
//! use bugstate::bug::{Bug, BugState, BugTrigger};
//!
//! let mut bug = Bug::new(BugState::Open);
//! bug.assign().unwrap();
//! bug.close().unwrap();
//! assert_eq!(bug.state(), BugState::Closed);
//!
//! let err = bug.accept_fix().unwrap_err();
//! assert_eq!(err.from, BugState::Closed);
//! assert_eq!(err.trigger, BugTrigger::AcceptFix);
//! assert_eq!(bug.state(), BugState::Closed);
//! ```

mod machine;
mod table;

pub use machine::{Bug, BugTransitionError};
pub use table::ClosePolicy;

use crate::{state_enum, trigger_enum};

state_enum! {
    /// Lifecycle stage of a bug. No stage is terminal.
    pub enum BugState {
        Open,
        Assigned,
        Closed,
        Defered,
        CreatedFixes,
        DeclinedFixes,
        AcceptedFixes,
    }
}

trigger_enum! {
    /// Action requested on a bug.
    pub enum BugTrigger {
        Assign,
        Close,
        Defer,
        CreateFix,
        DeclineFix,
        AcceptFix,
    }
}
