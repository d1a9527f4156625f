//! Next-speaker selection

use crate::agent::{CODE_VALIDATION_AGENT, CONTENT_CREATION_AGENT, USER_AGENT};
use crate::chat::history::ChatHistory;
use std::collections::HashMap;

/// Decides which agent takes the next turn in a group chat.
pub trait SelectionStrategy: Send + Sync {
    /// Index into `agents` of the next speaker.
    ///
    /// Returns `None` only when `agents` is empty.
    fn next(&self, agents: &[&str], history: &ChatHistory) -> Option<usize>;
}

/// Fixed "last speaker → next speaker" table.
///
/// | Last message | Next speaker |
/// |--------------|--------------|
/// | none, or not from an agent | `initial` |
/// | from an agent with a transition | its target |
/// | anything else | first agent (fallback) |
///
/// A target that is not part of the chat also falls back to the first agent.
#[derive(Debug, Clone)]
pub struct RotationSelection {
    initial: String,
    transitions: HashMap<String, String>,
}

impl RotationSelection {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            transitions: HashMap::new(),
        }
    }

    pub fn with_transition(mut self, after: impl Into<String>, next: impl Into<String>) -> Self {
        self.transitions.insert(after.into(), next.into());
        self
    }

    /// Write → validate code → ask the user → write again
    pub fn document_rotation() -> Self {
        Self::new(CONTENT_CREATION_AGENT)
            .with_transition(CONTENT_CREATION_AGENT, CODE_VALIDATION_AGENT)
            .with_transition(CODE_VALIDATION_AGENT, USER_AGENT)
            .with_transition(USER_AGENT, CONTENT_CREATION_AGENT)
    }

    /// Name of the agent the table points at, before the membership check
    pub fn target<'a>(&'a self, history: &'a ChatHistory) -> Option<&'a str> {
        match history.last_agent() {
            None => Some(self.initial.as_str()),
            Some(last) => self.transitions.get(last).map(String::as_str),
        }
    }
}

impl SelectionStrategy for RotationSelection {
    fn next(&self, agents: &[&str], history: &ChatHistory) -> Option<usize> {
        if agents.is_empty() {
            return None;
        }
        let index = self
            .target(history)
            .and_then(|name| agents.iter().position(|a| *a == name))
            .unwrap_or(0);
        Some(index)
    }
}
