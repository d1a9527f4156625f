//! JSON Schema tool converter.
//!
//! Implementation of [`ToolSchemaPort`] that produces the chat-completions
//! `function` tool format:
//!
//! ```json
//! { "type": "function",
//!   "function": { "name": "...", "description": "...",
//!                 "parameters": { "type": "object", "properties": {...}, "required": [...] } } }
//! ```

use docgen_application::ports::tool_schema::ToolSchemaPort;
use docgen_domain::tool::entities::ToolDefinition;
use serde_json::{Map, Value, json};

/// Maps `param_type` to a JSON Schema type; unknown types become `"string"`.
pub struct JsonSchemaToolConverter;

impl JsonSchemaToolConverter {
    fn schema_type(param_type: &str) -> &'static str {
        match param_type {
            "number" => "number",
            "integer" => "integer",
            "boolean" => "boolean",
            _ => "string",
        }
    }
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            properties.insert(
                param.name.clone(),
                json!({
                    "type": Self::schema_type(&param.param_type),
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgen_domain::tool::entities::{ToolParameter, ToolSpec};

    #[test]
    fn test_tool_to_schema() {
        let converter = JsonSchemaToolConverter;
        let tool = ToolDefinition::new("RepoFilePlugin-read_file_by_path", "Read a file")
            .with_parameter(ToolParameter::new("path", "Relative path", true))
            .with_parameter(ToolParameter::new("limit", "Max bytes", false).with_type("integer"));

        let schema = converter.tool_to_schema(&tool);

        assert_eq!(schema["type"], "function");
        let function = &schema["function"];
        assert_eq!(function["name"], "RepoFilePlugin-read_file_by_path");
        assert_eq!(function["description"], "Read a file");
        assert_eq!(function["parameters"]["type"], "object");
        assert_eq!(function["parameters"]["properties"]["path"]["type"], "string");
        assert_eq!(function["parameters"]["properties"]["limit"]["type"], "integer");

        let required = function["parameters"]["required"].as_array().unwrap();
        assert_eq!(required, &vec![json!("path")]);
    }

    #[test]
    fn test_unknown_type_maps_to_string() {
        let tool = ToolDefinition::new("x-y", "")
            .with_parameter(ToolParameter::new("p", "", true).with_type("path"));
        let schema = JsonSchemaToolConverter.tool_to_schema(&tool);
        assert_eq!(schema["function"]["parameters"]["properties"]["p"]["type"], "string");
    }

    #[test]
    fn test_all_tools_schema_is_sorted() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("b-list", "List"))
            .register(ToolDefinition::new("a-read", "Read"));

        let tools = JsonSchemaToolConverter.all_tools_schema(&spec);
        let names: Vec<_> = tools
            .iter()
            .map(|t| t["function"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a-read", "b-list"]);
    }
}
