//! Core state machine types and logic.
//!
//! This module contains the table-driven engine:
//! - State and trigger definitions via the `State` and `Trigger` traits
//! - Immutable transition tables
//! - The machine that applies triggers and tracks history
//!
//! Nothing here knows about bugs; see [`crate::bug`] for the lifecycle built
//! on top of it.

mod error;
mod history;
mod machine;
mod state;
mod table;

pub use error::InvalidTransition;
pub use history::{StateHistory, StateTransition};
pub use machine::StateMachine;
pub use state::{State, Trigger};
pub use table::{TransitionRule, TransitionTable};
