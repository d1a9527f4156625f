//! Plugin abstraction
//!
//! A [`Plugin`] is a named group of functions that agents can call through
//! the model's tool-calling API. The registry in the infrastructure layer
//! exposes each function under a qualified name, `<Plugin>-<function>`:
//!
//! ```text
//! RepoFilePlugin ─┬─ read_file_by_path   →  RepoFilePlugin-read_file_by_path
//!                 ├─ read_file_by_name   →  RepoFilePlugin-read_file_by_name
//!                 └─ list_directory      →  RepoFilePlugin-list_directory
//! ```
//!
//! Functions return `Result<String, PluginError>`; errors are turned into
//! failed [`ToolResult`](super::value_objects::ToolResult)s and shown to the
//! model instead of aborting the chat.

use async_trait::async_trait;
use thiserror::Error;

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::ToolError;

/// Separator between plugin and function in a qualified name
pub const QUALIFIED_NAME_SEPARATOR: char = '-';

/// Error raised by a plugin function
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Timeout(String),

    #[error("{0}")]
    ExecutionFailed(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl PluginError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        PluginError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PluginError::NotFound(_))
    }
}

impl From<PluginError> for ToolError {
    fn from(error: PluginError) -> Self {
        let message = error.to_string();
        match error {
            PluginError::NotFound(_) => ToolError::not_found(message),
            PluginError::PermissionDenied(_) => ToolError::permission_denied(message),
            PluginError::InvalidArgument(_) => ToolError::invalid_argument(message),
            PluginError::Timeout(_) => ToolError::timeout(message),
            PluginError::ExecutionFailed(_) | PluginError::Io { .. } => {
                ToolError::execution_failed(message)
            }
        }
    }
}

/// A named group of functions callable by agents
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Plugin name, used as the prefix of qualified function names
    fn name(&self) -> &str;

    /// Functions offered by this plugin, with unqualified names
    fn functions(&self) -> Vec<ToolDefinition>;

    /// Invoke `function` with the arguments in `call`
    async fn invoke(&self, function: &str, call: &ToolCall) -> Result<String, PluginError>;
}

/// `<plugin>-<function>`
pub fn qualified_name(plugin: &str, function: &str) -> String {
    format!("{}{}{}", plugin, QUALIFIED_NAME_SEPARATOR, function)
}

/// Split a qualified name at the first separator
pub fn split_qualified_name(name: &str) -> Option<(&str, &str)> {
    name.split_once(QUALIFIED_NAME_SEPARATOR)
}
