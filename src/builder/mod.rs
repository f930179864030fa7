//! Builder API for declaring transition tables.
//!
//! This module provides a fluent table builder and macros for declaring state
//! and trigger enums with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::TransitionTableBuilder;
