//! Shared chat history

use super::message::{AuthorRole, ChatMessage};
use serde::{Deserialize, Serialize};

/// Ordered, append-only conversation shared by every agent in a group chat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistory {
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Messages in arrival order
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Name of the agent that wrote the last message.
    ///
    /// Returns `None` when the history is empty or the last message did not
    /// come from an agent (user or system input).
    pub fn last_agent(&self) -> Option<&str> {
        self.last()
            .filter(|m| m.role == AuthorRole::Assistant)
            .and_then(|m| m.author())
    }

    /// Messages in reverse arrival order
    pub fn newest_first(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().rev()
    }

    /// Messages written by `name`, in arrival order
    pub fn by_author<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ChatMessage> + 'a {
        self.messages.iter().filter(move |m| m.is_from(name))
    }

    /// Most recent message written by `name`
    pub fn latest_by(&self, name: &str) -> Option<&ChatMessage> {
        self.newest_first().find(|m| m.is_from(name))
    }

    /// Plain-text rendering used when a model has to judge the conversation.
    pub fn transcript(&self) -> String {
        self.messages
            .iter()
            .map(|m| {
                let author = m.author().unwrap_or(m.role.as_str());
                format!("[{}]: {}", author, m.content)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl From<Vec<ChatMessage>> for ChatHistory {
    fn from(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChatHistory {
        ChatHistory::from(vec![
            ChatMessage::user("task"),
            ChatMessage::assistant("ContentCreationAgent", "draft 1"),
            ChatMessage::assistant("CodeValidationAgent", "code ok"),
            ChatMessage::assistant("ContentCreationAgent", "draft 2"),
        ])
    }

    #[test]
    fn test_last_agent() {
        assert_eq!(sample().last_agent(), Some("ContentCreationAgent"));
        assert_eq!(ChatHistory::new().last_agent(), None);

        let mut history = sample();
        history.push(ChatMessage::user("more feedback"));
        assert_eq!(history.last_agent(), None);
    }

    #[test]
    fn test_latest_by_returns_newest() {
        let history = sample();
        let latest = history.latest_by("ContentCreationAgent").unwrap();
        assert_eq!(latest.content, "draft 2");
        assert!(history.latest_by("UserAgent").is_none());
    }

    #[test]
    fn test_by_author_keeps_arrival_order() {
        let history = sample();
        let drafts: Vec<_> = history
            .by_author("ContentCreationAgent")
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(drafts, vec!["draft 1", "draft 2"]);
    }

    #[test]
    fn test_newest_first() {
        let history = sample();
        let first = history.newest_first().next().unwrap();
        assert_eq!(first.content, "draft 2");
        assert_eq!(history.len(), 4);
    }

    #[test]
    fn test_transcript_labels_authors() {
        let transcript = sample().transcript();
        assert!(transcript.starts_with("[user]: task"));
        assert!(transcript.contains("[CodeValidationAgent]: code ok"));
    }
}
