//! Scripted ports shared by the unit tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession, ToolResultMessage};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use async_trait::async_trait;
use docgen_domain::{
    ChatHistory, ContentBlock, LlmResponse, Model, StopReason, ToolCall, ToolDefinition,
    ToolError, ToolParameter, ToolResult, ToolSpec,
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

type Queue = Arc<Mutex<VecDeque<LlmResponse>>>;

/// Gateway whose sessions pop replies from one shared queue.
pub(crate) struct ScriptedGateway {
    responses: Queue,
    pub system_prompts: Mutex<Vec<String>>,
    pub seeded_history_lens: Mutex<Vec<usize>>,
    pub sent_messages: Arc<Mutex<Vec<String>>>,
    pub tool_results: Arc<Mutex<Vec<ToolResultMessage>>>,
    /// Tool names offered on each tool-bearing request
    pub tools_seen: Arc<Mutex<Vec<Vec<String>>>>,
}

impl ScriptedGateway {
    pub fn new(responses: Vec<LlmResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            system_prompts: Mutex::new(Vec::new()),
            seeded_history_lens: Mutex::new(Vec::new()),
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            tool_results: Arc::new(Mutex::new(Vec::new())),
            tools_seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| LlmResponse::from_text(*t)).collect())
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }

    fn session(&self, model: &Model) -> Box<dyn LlmSession> {
        Box::new(ScriptedSession {
            model: model.clone(),
            responses: self.responses.clone(),
            sent_messages: self.sent_messages.clone(),
            tool_results: self.tool_results.clone(),
            tools: Mutex::new(Vec::new()),
            tools_seen: self.tools_seen.clone(),
        })
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(self.session(model))
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.system_prompts
            .lock()
            .unwrap()
            .push(system_prompt.to_string());
        Ok(self.session(model))
    }

    async fn create_session_with_history(
        &self,
        model: &Model,
        system_prompt: &str,
        history: &ChatHistory,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.seeded_history_lens.lock().unwrap().push(history.len());
        self.create_session_with_system_prompt(model, system_prompt)
            .await
    }
}

struct ScriptedSession {
    model: Model,
    responses: Queue,
    sent_messages: Arc<Mutex<Vec<String>>>,
    tool_results: Arc<Mutex<Vec<ToolResultMessage>>>,
    tools: Mutex<Vec<String>>,
    tools_seen: Arc<Mutex<Vec<Vec<String>>>>,
}

impl ScriptedSession {
    fn record_tools(&self) {
        let offered = self.tools.lock().unwrap().clone();
        self.tools_seen.lock().unwrap().push(offered);
    }

    fn next(&self) -> Result<LlmResponse, GatewayError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GatewayError::Other("No more responses".to_string()))
    }
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.sent_messages.lock().unwrap().push(content.to_string());
        Ok(self.next()?.text_content())
    }

    async fn complete_with_tools(
        &self,
        tools: &[serde_json::Value],
    ) -> Result<LlmResponse, GatewayError> {
        *self.tools.lock().unwrap() = tools
            .iter()
            .filter_map(|t| t["name"].as_str().map(str::to_string))
            .collect();
        self.record_tools();
        self.next()
    }

    async fn send_tool_results(
        &self,
        results: &[ToolResultMessage],
    ) -> Result<LlmResponse, GatewayError> {
        self.tool_results
            .lock()
            .unwrap()
            .extend(results.iter().cloned());
        self.record_tools();
        self.next()
    }
}

/// Response requesting one tool call
pub(crate) fn tool_use(id: &str, name: &str, args: &[(&str, &str)]) -> LlmResponse {
    let input: HashMap<String, serde_json::Value> = args
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::json!(v)))
        .collect();
    LlmResponse {
        content: vec![ContentBlock::ToolUse {
            id: id.to_string(),
            name: name.to_string(),
            input,
        }],
        stop_reason: Some(StopReason::ToolUse),
        model: None,
    }
}

/// Executor with one `Echo-say` function; `Echo-fail` always fails.
pub(crate) struct EchoTools {
    spec: ToolSpec,
    pub calls: Mutex<Vec<String>>,
}

impl EchoTools {
    pub fn new() -> Self {
        Self {
            spec: ToolSpec::new()
                .register(
                    ToolDefinition::new("Echo-say", "Echo the text")
                        .with_parameter(ToolParameter::new("text", "Text to echo", true)),
                )
                .register(ToolDefinition::new("Echo-fail", "Always fails")),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ToolExecutorPort for EchoTools {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.calls.lock().unwrap().push(call.tool_name.clone());
        match call.tool_name.as_str() {
            "Echo-say" => ToolResult::success(
                &call.tool_name,
                format!("echo: {}", call.get_string("text").unwrap_or("")),
            ),
            "Echo-fail" => {
                ToolResult::failure(&call.tool_name, ToolError::execution_failed("boom"))
            }
            other => ToolResult::failure(
                other,
                ToolError::not_found(format!("Unknown function: {}", other)),
            ),
        }
    }
}

pub(crate) struct NameOnlySchema;

impl ToolSchemaPort for NameOnlySchema {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> serde_json::Value {
        serde_json::json!({ "name": tool.name })
    }
}
