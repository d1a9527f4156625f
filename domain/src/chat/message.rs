//! Chat message entity

use serde::{Deserialize, Serialize};

/// Role of a message author in the group chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorRole {
    System,
    User,
    Assistant,
}

impl AuthorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorRole::System => "system",
            AuthorRole::User => "user",
            AuthorRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for AuthorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single message in the shared conversation (Entity)
///
/// Agent replies are `Assistant` messages carrying the agent name, so the
/// history can be filtered by author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: AuthorRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: AuthorRole::System,
            name: None,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: AuthorRole::User,
            name: None,
            content: content.into(),
        }
    }

    /// An agent reply
    pub fn assistant(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: AuthorRole::Assistant,
            name: Some(name.into()),
            content: content.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Author name, if any
    pub fn author(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether this message was written by the named author
    pub fn is_from(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}
