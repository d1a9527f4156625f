//! Execution parameters: group chat loop control.
//!
//! [`ExecutionParams`] groups the static limits applied by
//! [`AgentGroupChat`](crate::group_chat::AgentGroupChat) and
//! [`ChatAgent`](crate::agents::ChatAgent). These are application-layer
//! concerns, not domain policy.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Maximum number of agent turns before the chat stops unfinished.
    pub max_iterations: usize,
    /// Maximum tool-call round trips within a single agent turn.
    pub max_tool_turns: usize,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            max_tool_turns: 10,
        }
    }
}

impl ExecutionParams {
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_max_tool_turns(mut self, max: usize) -> Self {
        self.max_tool_turns = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ExecutionParams::default();
        assert_eq!(params.max_iterations, 20);
        assert_eq!(params.max_tool_turns, 10);
    }

    #[test]
    fn test_builders() {
        let params = ExecutionParams::default()
            .with_max_iterations(3)
            .with_max_tool_turns(1);
        assert_eq!(params.max_iterations, 3);
        assert_eq!(params.max_tool_turns, 1);
    }
}
