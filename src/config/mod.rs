//! Transition tables described in JSON.
//!
//! A table can be written out as a list of rules and loaded back through the
//! builder, so embedders can review or adjust a lifecycle without recompiling:
//!
//! ```json
//! {
//!   "transitions": [
//!     { "from": "Open", "trigger": "Assign", "to": "Assigned" },
//!     { "from": "Assigned", "trigger": "Close", "to": "Closed" }
//!   ]
//! }
//! ```

use crate::builder::{BuildError, TransitionTableBuilder};
use crate::core::{State, TransitionRule, TransitionTable, Trigger};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a table from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or names an unknown state/trigger
    #[error("Failed to parse transition table: {0}")]
    Parse(#[from] serde_json::Error),

    /// The rules parsed but do not form a valid table
    #[error("Invalid transition table: {0}")]
    Build(#[from] BuildError),
}

/// Serializable description of a transition table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct TableConfig<S: State, T: Trigger> {
    pub transitions: Vec<TransitionRule<S, T>>,
}

impl<S: State, T: Trigger> TableConfig<S, T> {
    /// Parse a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Describe an existing table.
    pub fn from_table(table: &TransitionTable<S, T>) -> Self {
        Self {
            transitions: table.rules().to_vec(),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the rules and build the table.
    pub fn build(self) -> Result<TransitionTable<S, T>, ConfigError> {
        let table = self
            .transitions
            .into_iter()
            .fold(TransitionTableBuilder::new(), |builder, rule| builder.rule(rule))
            .build()?;

        tracing::debug!(rules = table.len(), "Loaded transition table");
        Ok(table)
    }
}

/// Parse and build a table in one step.
pub fn load_table<S: State, T: Trigger>(
    json: &str,
) -> Result<TransitionTable<S, T>, ConfigError> {
    TableConfig::from_json(json)?.build()
}
