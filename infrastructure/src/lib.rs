//! Infrastructure layer for docgen
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the chat-completions gateway, the agent
//! plugins, configuration file loading and the transcript logger.

pub mod config;
pub mod logging;
pub mod openai;
pub mod plugins;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileChatConfig, FileConfig, FileLoggingConfig, FileModelsConfig,
    FilePluginsConfig, FileProviderConfig, ProviderKind, Severity, has_errors,
};
pub use logging::JsonlConversationLogger;
pub use openai::{ChatClient, Endpoint, OpenAiGateway, OpenAiSession};
pub use plugins::{
    CodeExecutionPlugin, JsonSchemaToolConverter, PluginRegistry, RepoFilePlugin, UserPlugin,
};
