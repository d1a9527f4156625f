//! Human feedback port.
//!
//! The user agent shows the latest draft to a person and relays their reply.
//!
//! - **Port**: [`HumanFeedbackPort`] - defined here
//! - **Adapters**: `ConsoleHumanFeedback` in the presentation layer, and
//!   [`AutoApproveFeedback`] for unattended runs

use async_trait::async_trait;
use thiserror::Error;

/// Failures while collecting feedback (not the feedback itself)
#[derive(Error, Debug)]
pub enum HumanFeedbackError {
    #[error("Feedback cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    IoError(String),
}

/// Port for asking a person about a draft
#[async_trait]
pub trait HumanFeedbackPort: Send + Sync {
    /// Show `content` and return the person's reply
    async fn request_feedback(&self, content: &str) -> Result<String, HumanFeedbackError>;
}

/// Approves every draft without asking anyone.
pub struct AutoApproveFeedback {
    reply: String,
}

impl AutoApproveFeedback {
    pub const DEFAULT_REPLY: &'static str = "I approve the content. No further changes needed.";

    pub fn new() -> Self {
        Self {
            reply: Self::DEFAULT_REPLY.to_string(),
        }
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for AutoApproveFeedback {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HumanFeedbackPort for AutoApproveFeedback {
    async fn request_feedback(&self, _content: &str) -> Result<String, HumanFeedbackError> {
        Ok(self.reply.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_approve_replies_with_approval() {
        let feedback = AutoApproveFeedback::new();
        let reply = feedback.request_feedback("# Draft").await.unwrap();
        assert!(reply.contains("approve"));
    }

    #[tokio::test]
    async fn test_auto_approve_custom_reply() {
        let feedback = AutoApproveFeedback::with_reply("ship it");
        assert_eq!(feedback.request_feedback("x").await.unwrap(), "ship it");
    }
}
