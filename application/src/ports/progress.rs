//! Progress notification port
//!
//! Callbacks fired while the group chat runs. Implementations live in the
//! presentation layer (console output, spinner).

use docgen_domain::{ChatMessage, TerminationVerdict};

pub trait GroupChatProgress: Send + Sync {
    /// An agent was selected for turn `iteration` (1-based)
    fn on_agent_selected(&self, _agent: &str, _iteration: usize) {}

    /// An agent's plugin function is about to run
    fn on_tool_call_started(&self, _agent: &str, _tool: &str) {}

    /// An agent's plugin function finished
    fn on_tool_call_finished(&self, _agent: &str, _tool: &str, _success: bool) {}

    /// An agent reply was appended to the history
    fn on_agent_response(&self, message: &ChatMessage);

    /// The termination check ran after `agent`'s turn
    fn on_termination_check(&self, _agent: &str, _verdict: TerminationVerdict) {}

    /// The chat stopped
    fn on_chat_finished(&self, _iterations: usize, _is_complete: bool) {}
}

/// No-op progress notifier
pub struct NoProgress;

impl GroupChatProgress for NoProgress {
    fn on_agent_response(&self, _message: &ChatMessage) {}
}
