//! Tool Executor port
//!
//! Defines the interface for executing plugin functions.

use async_trait::async_trait;
use docgen_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::ToolResult,
};

/// Port for plugin function execution
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolExecutorPort: Send + Sync {
    /// Get the specification of all available functions
    fn tool_spec(&self) -> &ToolSpec;

    /// Check if a function is available
    fn has_tool(&self, name: &str) -> bool {
        self.tool_spec().get(name).is_some()
    }

    /// Get the definition of a specific function
    fn get_tool(&self, name: &str) -> Option<&ToolDefinition> {
        self.tool_spec().get(name)
    }

    /// Execute a call. Failures are reported in the result, never raised.
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}
