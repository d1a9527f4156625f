//! Application layer for docgen
//!
//! This crate contains the group chat engine, the model-backed agent, use
//! cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod agents;
pub mod config;
pub mod group_chat;
pub mod ports;
pub mod strategies;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use agents::{Agent, AgentError, ChatAgent};
pub use config::{ExecutionParams, ModelConfig};
pub use group_chat::{AgentGroupChat, GroupChatError, GroupChatOutcome};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    human_feedback::{AutoApproveFeedback, HumanFeedbackError, HumanFeedbackPort},
    llm_gateway::{GatewayError, LlmGateway, LlmSession, ToolResultMessage},
    progress::{GroupChatProgress, NoProgress},
    tool_executor::ToolExecutorPort,
    tool_schema::ToolSchemaPort,
};
pub use strategies::{ModelTerminationStrategy, TerminationError, TerminationStrategy};
pub use use_cases::generate_document::{
    AgentToolkits, GenerateDocumentError, GenerateDocumentInput, GenerateDocumentOutput,
    GenerateDocumentUseCase,
};
