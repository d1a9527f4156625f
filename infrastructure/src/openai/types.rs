//! Chat-completions wire types and conversions to domain types.

use docgen_application::ports::llm_gateway::{GatewayError, ToolResultMessage};
use docgen_domain::{ChatMessage, ContentBlock, LlmResponse, StopReason};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type", default = "function_kind")]
    pub kind: String,
    pub function: WireFunctionCall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    /// JSON-encoded argument object
    #[serde(default)]
    pub arguments: String,
}

fn function_kind() -> String {
    "function".to_string()
}

impl WireMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: Some(content.into()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn tool_result(result: &ToolResultMessage) -> Self {
        let content = if result.is_error {
            format!("Error: {}", result.output)
        } else {
            result.output.clone()
        };
        Self {
            tool_call_id: Some(result.tool_use_id.clone()),
            ..Self::new("tool", content)
        }
    }

    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

impl From<&ChatMessage> for WireMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            name: message.name.clone(),
            ..Self::new(message.role.as_str(), message.content.clone())
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [WireMessage],
    #[serde(skip_serializing_if = "<[Value]>::is_empty")]
    pub tools: &'a [Value],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: WireMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

fn parse_arguments(call: &WireToolCall) -> HashMap<String, Value> {
    if call.function.arguments.trim().is_empty() {
        return HashMap::new();
    }
    match serde_json::from_str(&call.function.arguments) {
        Ok(args) => args,
        Err(e) => {
            warn!(
                tool = %call.function.name,
                "Tool call arguments are not a JSON object: {}", e
            );
            HashMap::new()
        }
    }
}

impl ChatCompletionResponse {
    /// First choice as a domain response, plus the assistant message to keep
    /// in the session history.
    pub fn into_parts(self) -> Result<(LlmResponse, WireMessage), GatewayError> {
        let model = self.model;
        let choice = self
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidResponse("Response has no choices".to_string()))?;

        let message = choice.message;
        let mut content = Vec::new();
        if let Some(text) = message.content.as_deref().filter(|t| !t.is_empty()) {
            content.push(ContentBlock::Text(text.to_string()));
        }
        for call in message.tool_calls.iter().flatten() {
            content.push(ContentBlock::ToolUse {
                id: call.id.clone(),
                name: call.function.name.clone(),
                input: parse_arguments(call),
            });
        }

        let response = LlmResponse {
            content,
            stop_reason: choice.finish_reason.as_deref().map(StopReason::from_finish_reason),
            model,
        };
        Ok((response, message))
    }
}
