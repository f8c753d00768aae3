//! Value objects shared across the command toolkit.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque parameter handed to a command chain.
///
/// Flows unchanged from the caller through composites, branches, and gates
/// down to the leaf commands. Commands that do not care about it (the
/// confirmation gate, for instance) simply ignore it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandParameter {
    pub data: Value,
}

impl CommandParameter {
    /// Parameter carrying no payload.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(data: Value) -> Self {
        Self { data }
    }
}

impl From<Value> for CommandParameter {
    fn from(data: Value) -> Self {
        Self { data }
    }
}
