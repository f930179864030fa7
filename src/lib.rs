//! Bugstate: a table-driven state machine for the lifecycle of a tracked bug
//!
//! A bug sits in exactly one of seven states and moves only when a trigger
//! has a rule for its current state in the transition table. Triggers without
//! a rule fail with a typed error and change nothing.
//!
//! # Core Concepts
//!
//! - **State / Trigger**: plain enums implementing the `State` and `Trigger` traits
//! - **Transition table**: immutable `(state, trigger) -> state` rules
//! - **Machine**: current state plus history, driven by the table
//! - **Bug**: the bug lifecycle built on the generic machine
//!
//! # Example
//!
//! ```rust
//! use bugstate::bug::{Bug, BugState, ClosePolicy};
//!
//! let mut bug = Bug::new(BugState::CreatedFixes);
//! bug.decline_fix().unwrap();
//! bug.create_fix().unwrap();
//! bug.accept_fix().unwrap();
//! bug.close().unwrap();
//! assert_eq!(bug.state(), BugState::Closed);
//!
//! let mut strict = Bug::with_policy(BugState::Defered, ClosePolicy::Strict);
//! assert!(strict.close().is_err());
//! assert_eq!(strict.state(), BugState::Defered);
//! ```

pub mod bug;
pub mod builder;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use bug::{Bug, BugState, BugTransitionError, BugTrigger, ClosePolicy};
pub use builder::{BuildError, TransitionTableBuilder};
pub use config::{ConfigError, TableConfig};
pub use crate::core::{
    InvalidTransition, State, StateHistory, StateMachine, TransitionTable, Trigger,
};
