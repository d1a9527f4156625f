//! Domain layer for docgen
//!
//! This crate contains the core types of the document generator. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Group chat
//!
//! Several agents share one [`ChatHistory`]. After every turn a
//! [`SelectionStrategy`] picks the next speaker and a termination check
//! decides whether the document is finished.
//!
//! ## Agents
//!
//! An [`AgentIdentity`] is a name plus instructions. The three built-in roles
//! write content, validate code samples and relay user feedback.
//!
//! ## Plugins
//!
//! A [`Plugin`] groups functions that agents call through the model's native
//! tool-calling API.

pub mod agent;
pub mod chat;
pub mod core;
pub mod prompt;
pub mod session;
pub mod strategy;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use agent::{AgentIdentity, CODE_VALIDATION_AGENT, CONTENT_CREATION_AGENT, USER_AGENT};
pub use chat::{
    history::ChatHistory,
    message::{AuthorRole, ChatMessage},
};
pub use core::{error::DomainError, model::Model, task::Task};
pub use prompt::{AgentPromptTemplate, TerminationPromptTemplate};
pub use session::response::{ContentBlock, LlmResponse, StopReason};
pub use strategy::{
    RotationSelection, SelectionStrategy, TerminationVerdict, parse_completion_answer,
};
pub use tool::{
    Plugin, PluginError, ToolCall, ToolDefinition, ToolError, ToolParameter, ToolResult,
    ToolResultMetadata, ToolSpec,
};
