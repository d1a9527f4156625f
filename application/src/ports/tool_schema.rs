//! Tool schema conversion port.
//!
//! Separates "which functions an agent may call" (domain) from "how to
//! serialize them for the API" (infrastructure).

use docgen_domain::tool::entities::{ToolDefinition, ToolSpec};

/// Port for converting function definitions to the model API's tool format.
pub trait ToolSchemaPort: Send + Sync {
    /// Convert a single definition
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value;

    /// Convert all definitions (sorted by name)
    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<serde_json::Value> {
        let mut tools: Vec<&ToolDefinition> = spec.all().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}
