//! LLM Gateway port
//!
//! Defines the interface for talking to a chat-completion backend.

use async_trait::async_trait;
use docgen_domain::{ChatHistory, LlmResponse, Model};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Result of one tool call, sent back to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResultMessage {
    /// Call id assigned by the provider
    pub tool_use_id: String,
    pub tool_name: String,
    /// Output, or the error message when `is_error`
    pub output: String,
    pub is_error: bool,
}

/// Gateway for LLM communication
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create an empty session
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Create a session with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Create a session seeded with a system prompt and a group chat history.
    ///
    /// Messages written by other agents keep their author names so the model
    /// can tell the participants apart.
    async fn create_session_with_history(
        &self,
        model: &Model,
        system_prompt: &str,
        history: &ChatHistory,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;
}

/// An active LLM session
///
/// Sessions keep their own message list; every call appends the request and
/// the model's reply to it.
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a user message and get the text reply
    async fn send(&self, content: &str) -> Result<String, GatewayError>;

    /// Ask for the next reply to the messages already in the session,
    /// offering `tools` (JSON Schema function definitions).
    ///
    /// The tools stay offered on every later request of the session.
    async fn complete_with_tools(
        &self,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError>;

    /// Return tool results for the calls in the previous response, offering
    /// the tools from the last `complete_with_tools` again
    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError>;
}
