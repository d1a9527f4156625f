//! Group chat limits from TOML (`[chat]` section)

use docgen_application::ExecutionParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Maximum agent turns before the chat stops unfinished
    pub max_iterations: usize,
    /// Maximum tool round trips within one agent turn
    pub max_tool_turns: usize,
    /// Approve every draft without prompting the user
    pub auto_approve: bool,
    /// File whose content replaces the built-in task
    pub task_file: Option<PathBuf>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        let params = ExecutionParams::default();
        Self {
            max_iterations: params.max_iterations,
            max_tool_turns: params.max_tool_turns,
            auto_approve: false,
            task_file: None,
        }
    }
}

impl FileChatConfig {
    pub fn to_execution_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_max_iterations(self.max_iterations)
            .with_max_tool_turns(self.max_tool_turns)
    }
}
