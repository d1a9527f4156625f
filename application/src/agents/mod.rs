//! Group chat participants
//!
//! An [`Agent`] takes the shared history and produces one reply.
//! [`ChatAgent`] is the model-backed implementation used by the document
//! generator.

pub mod chat_agent;

pub use chat_agent::ChatAgent;

use crate::ports::llm_gateway::GatewayError;
use crate::ports::progress::GroupChatProgress;
use async_trait::async_trait;
use docgen_domain::{ChatHistory, ChatMessage};
use thiserror::Error;

/// Errors raised while an agent takes its turn
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Agent {0} produced no reply")]
    EmptyResponse(String),
}

/// A participant in an [`AgentGroupChat`](crate::group_chat::AgentGroupChat)
#[async_trait]
pub trait Agent: Send + Sync {
    fn name(&self) -> &str;

    /// Produce this agent's next message given the full history
    async fn invoke(
        &self,
        history: &ChatHistory,
        progress: &dyn GroupChatProgress,
    ) -> Result<ChatMessage, AgentError>;
}
