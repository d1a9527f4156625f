//! Model-backed group chat agent.
//!
//! Each turn opens a fresh session seeded with the agent's instructions and
//! the whole group history, then runs a tool loop until the model answers in
//! plain text:
//!
//! ```text
//! complete_with_tools() ─┬─ text only ──────────────▶ reply
//!                        └─ tool calls ─▶ execute (parallel)
//!                                         └─ send_tool_results() ─┐
//!                           ▲                                      │
//!                           └──────────────────────────────────────┘
//! ```

use super::{Agent, AgentError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{LlmGateway, ToolResultMessage};
use crate::ports::progress::GroupChatProgress;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use async_trait::async_trait;
use docgen_domain::util::preview;
use docgen_domain::{AgentIdentity, ChatHistory, ChatMessage, Model, ToolCall};
use std::sync::Arc;
use tracing::{debug, info, warn};

const DEFAULT_MAX_TOOL_TURNS: usize = 10;

pub struct ChatAgent {
    identity: AgentIdentity,
    model: Model,
    gateway: Arc<dyn LlmGateway>,
    tools: Arc<dyn ToolExecutorPort>,
    tool_schema: Arc<dyn ToolSchemaPort>,
    max_tool_turns: usize,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatAgent {
    pub fn new(
        identity: AgentIdentity,
        model: Model,
        gateway: Arc<dyn LlmGateway>,
        tools: Arc<dyn ToolExecutorPort>,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            identity,
            model,
            gateway,
            tools,
            tool_schema,
            max_tool_turns: DEFAULT_MAX_TOOL_TURNS,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_max_tool_turns(mut self, max_tool_turns: usize) -> Self {
        self.max_tool_turns = max_tool_turns;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn identity(&self) -> &AgentIdentity {
        &self.identity
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    async fn execute_calls(
        &self,
        calls: &[ToolCall],
        progress: &dyn GroupChatProgress,
    ) -> Vec<ToolResultMessage> {
        let name = self.identity.name();
        let mut futures = Vec::with_capacity(calls.len());
        for call in calls {
            progress.on_tool_call_started(name, &call.tool_name);
            futures.push(self.tools.execute(call));
        }

        let results = futures::future::join_all(futures).await;

        let mut messages = Vec::with_capacity(calls.len());
        for (call, result) in calls.iter().zip(results) {
            let is_error = !result.is_success();
            progress.on_tool_call_finished(name, &call.tool_name, !is_error);

            self.conversation_logger.log(ConversationEvent::new(
                "tool_call",
                serde_json::json!({
                    "agent": name,
                    "tool": call.tool_name,
                    "arguments": call.arguments,
                    "success": !is_error,
                    "duration_ms": result.metadata.duration_ms,
                }),
            ));

            let Some(tool_use_id) = call.native_id.clone() else {
                warn!(
                    agent = name,
                    "Missing native_id for tool call '{}'; skipping result.", call.tool_name
                );
                continue;
            };

            messages.push(ToolResultMessage {
                tool_use_id,
                tool_name: call.tool_name.clone(),
                output: result.model_text(),
                is_error,
            });
        }
        messages
    }
}

#[async_trait]
impl Agent for ChatAgent {
    fn name(&self) -> &str {
        self.identity.name()
    }

    async fn invoke(
        &self,
        history: &ChatHistory,
        progress: &dyn GroupChatProgress,
    ) -> Result<ChatMessage, AgentError> {
        let name = self.identity.name();
        let session = self
            .gateway
            .create_session_with_history(&self.model, self.identity.instructions(), history)
            .await?;

        let tools = self.tool_schema.all_tools_schema(self.tools.tool_spec());
        debug!(
            agent = name,
            model = %self.model,
            tools = tools.len(),
            history = history.len(),
            "Agent turn started"
        );

        let mut response = session.complete_with_tools(&tools).await?;
        let mut texts = Vec::new();
        let mut turn_count = 0;

        loop {
            let text = response.text_content();
            if !text.trim().is_empty() {
                texts.push(text);
            }

            let calls = response.tool_calls();
            if calls.is_empty() {
                break;
            }

            turn_count += 1;
            if turn_count > self.max_tool_turns {
                warn!(
                    agent = name,
                    "Tool loop exceeded max_tool_turns ({})", self.max_tool_turns
                );
                break;
            }

            let results = self.execute_calls(&calls, progress).await;
            debug!(
                agent = name,
                "Tool turn {}/{}: sending {} tool results",
                turn_count,
                self.max_tool_turns,
                results.len()
            );
            response = session.send_tool_results(&results).await?;
        }

        // Intermediate texts ("Let me check the file...") are dropped.
        let Some(reply) = texts.pop() else {
            return Err(AgentError::EmptyResponse(name.to_string()));
        };

        info!(
            agent = name,
            tool_turns = turn_count,
            bytes = reply.len(),
            "Agent replied: {}",
            preview(&reply, 80)
        );

        Ok(ChatMessage::assistant(name, reply))
    }
}
