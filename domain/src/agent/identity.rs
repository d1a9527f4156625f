//! Agent identity value object and the built-in document roles

use crate::core::error::DomainError;
use crate::prompt::AgentPromptTemplate;
use serde::{Deserialize, Serialize};

pub const CONTENT_CREATION_AGENT: &str = "ContentCreationAgent";
pub const CODE_VALIDATION_AGENT: &str = "CodeValidationAgent";
pub const USER_AGENT: &str = "UserAgent";

/// Name, description and instructions of a chat agent (Value Object)
///
/// The name doubles as the author name on chat messages, which chat
/// completion APIs restrict to `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentIdentity {
    name: String,
    description: String,
    instructions: String,
}

impl AgentIdentity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if !is_valid_agent_name(&name) {
            return Err(DomainError::InvalidAgentName(name));
        }
        Ok(Self {
            name,
            description: description.into(),
            instructions: instructions.into(),
        })
    }

    /// Writes and revises the blog post
    pub fn content_creation() -> Self {
        Self::builtin(
            CONTENT_CREATION_AGENT,
            "Creates and revises the document content.",
            AgentPromptTemplate::content_creation(),
        )
    }

    /// Runs the code found in the latest draft
    pub fn code_validation() -> Self {
        Self::builtin(
            CODE_VALIDATION_AGENT,
            "Validates the code samples in the document.",
            AgentPromptTemplate::code_validation(),
        )
    }

    /// Relays the draft to the human and returns their feedback
    pub fn user_proxy() -> Self {
        Self::builtin(
            USER_AGENT,
            "Collects feedback on the document from the user.",
            AgentPromptTemplate::user_proxy(),
        )
    }

    fn builtin(name: &str, description: &str, instructions: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            instructions: instructions.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

fn is_valid_agent_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 64
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
