//! Plugin Registry
//!
//! The [`PluginRegistry`] aggregates plugins and implements
//! [`ToolExecutorPort`]. Every plugin function is offered under its
//! qualified name, `<Plugin>-<function>`, and calls are routed back to the
//! owning plugin by splitting that name.
//!
//! ```ignore
//! let registry = PluginRegistry::new().register(RepoFilePlugin::new(".")?);
//!
//! assert!(registry.has_tool("RepoFilePlugin-list_directory"));
//!
//! let call = ToolCall::new("RepoFilePlugin-list_directory").with_arg("path", "src");
//! let result = registry.execute(&call).await;
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use docgen_application::ports::tool_executor::ToolExecutorPort;
use docgen_domain::tool::{
    entities::{ToolCall, ToolSpec},
    plugin::{Plugin, qualified_name, split_qualified_name},
    value_objects::{ToolError, ToolResult, ToolResultMetadata},
};
use tracing::{debug, warn};

pub struct PluginRegistry {
    plugins: HashMap<String, Arc<dyn Plugin>>,
    tool_spec: ToolSpec,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
            tool_spec: ToolSpec::new(),
        }
    }

    /// Register a plugin
    pub fn register<P: Plugin + 'static>(self, plugin: P) -> Self {
        self.register_arc(Arc::new(plugin))
    }

    /// Register a plugin (Arc version). A plugin with the same name replaces
    /// the earlier one's entry for routing.
    pub fn register_arc(mut self, plugin: Arc<dyn Plugin>) -> Self {
        let plugin_name = plugin.name().to_string();
        for mut function in plugin.functions() {
            function.name = qualified_name(&plugin_name, &function.name);
            debug!(tool = %function.name, "Registered plugin function");
            self.tool_spec = self.tool_spec.register(function);
        }
        self.plugins.insert(plugin_name, plugin);
        self
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for PluginRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let start = Instant::now();

        let routed = split_qualified_name(&call.tool_name)
            .filter(|_| self.tool_spec.get(&call.tool_name).is_some())
            .and_then(|(plugin, function)| {
                self.plugins.get(plugin).map(|p| (p, function))
            });

        let Some((plugin, function)) = routed else {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::not_found(format!("Function {} not found.", call.tool_name)),
            );
        };

        let outcome = plugin.invoke(function, call).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(output) => {
                debug!(tool = %call.tool_name, duration_ms, bytes = output.len(), "Plugin call succeeded");
                let metadata = ToolResultMetadata {
                    duration_ms: Some(duration_ms),
                    bytes: Some(output.len()),
                    path: call.get_string("path").map(str::to_string),
                };
                ToolResult::success(&call.tool_name, output).with_metadata(metadata)
            }
            Err(e) => {
                warn!(tool = %call.tool_name, duration_ms, error = %e, "Plugin call failed");
                ToolResult::failure(&call.tool_name, ToolError::from(e)).with_duration(duration_ms)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::repo_file::RepoFilePlugin;
    use std::fs;

    fn registry() -> (tempfile::TempDir, PluginRegistry) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "registry test").unwrap();
        let registry = PluginRegistry::new().register(RepoFilePlugin::new(dir.path()).unwrap());
        (dir, registry)
    }

    #[test]
    fn test_functions_use_qualified_names() {
        let (_dir, registry) = registry();
        assert!(registry.has_tool("RepoFilePlugin-read_file_by_path"));
        assert!(registry.has_tool("RepoFilePlugin-read_file_by_name"));
        assert!(registry.has_tool("RepoFilePlugin-list_directory"));
        assert!(!registry.has_tool("read_file_by_path"));
        assert_eq!(registry.tool_spec().len(), 3);
        assert!(registry
            .tool_spec()
            .names()
            .all(|name| name.starts_with("RepoFilePlugin-")));
    }

    #[tokio::test]
    async fn test_execute_routes_to_plugin() {
        let (_dir, registry) = registry();
        let call = ToolCall::new("RepoFilePlugin-read_file_by_path").with_arg("path", "notes.txt");

        let result = registry.execute(&call).await;

        assert!(result.is_success());
        assert_eq!(result.output(), Some("registry test"));
        assert_eq!(result.metadata.path.as_deref(), Some("notes.txt"));
        assert!(result.metadata.duration_ms.is_some());
    }

    #[tokio::test]
    async fn test_plugin_error_becomes_failed_result() {
        let (_dir, registry) = registry();
        let call = ToolCall::new("RepoFilePlugin-read_file_by_name").with_arg("file_name", "x.md");

        let result = registry.execute(&call).await;

        assert!(!result.is_success());
        let error = result.error().unwrap();
        assert_eq!(error.code, "NOT_FOUND");
        assert_eq!(error.message, "File x.md not found in repository.");
    }

    #[tokio::test]
    async fn test_unknown_function() {
        let (_dir, registry) = registry();
        for name in ["RepoFilePlugin-delete_file", "OtherPlugin-list_directory", "nonsense"] {
            let result = registry.execute(&ToolCall::new(name)).await;
            assert!(!result.is_success());
            assert_eq!(result.error().unwrap().code, "NOT_FOUND", "name: {name}");
        }
    }
}
