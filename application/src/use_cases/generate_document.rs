//! Generate Document use case.
//!
//! Wires the three document agents into a group chat, posts the task and
//! returns the latest draft written by the content-creation agent.

use crate::agents::{Agent, ChatAgent};
use crate::config::{ExecutionParams, ModelConfig};
use crate::group_chat::{AgentGroupChat, GroupChatError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::GroupChatProgress;
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::tool_schema::ToolSchemaPort;
use crate::strategies::ModelTerminationStrategy;
use docgen_domain::util::truncate_str;
use docgen_domain::{
    AgentIdentity, CONTENT_CREATION_AGENT, ChatHistory, ChatMessage, RotationSelection, Task,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum GenerateDocumentError {
    #[error(transparent)]
    GroupChat(#[from] GroupChatError),

    #[error("ContentCreationAgent never produced any content")]
    NoContent,
}

/// Plugin functions available to each agent
#[derive(Clone)]
pub struct AgentToolkits {
    pub content_creation: Arc<dyn ToolExecutorPort>,
    pub code_validation: Arc<dyn ToolExecutorPort>,
    pub user: Arc<dyn ToolExecutorPort>,
}

#[derive(Debug, Clone)]
pub struct GenerateDocumentInput {
    pub task: Task,
    pub models: ModelConfig,
    pub execution: ExecutionParams,
}

impl GenerateDocumentInput {
    pub fn new(task: Task, models: ModelConfig, execution: ExecutionParams) -> Self {
        Self {
            task,
            models,
            execution,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateDocumentOutput {
    /// Latest message from the content-creation agent
    pub content: String,
    pub iterations: usize,
    /// Whether the termination check approved the content
    pub is_complete: bool,
    pub history: ChatHistory,
}

pub struct GenerateDocumentUseCase {
    gateway: Arc<dyn LlmGateway>,
    toolkits: AgentToolkits,
    tool_schema: Arc<dyn ToolSchemaPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl GenerateDocumentUseCase {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        toolkits: AgentToolkits,
        tool_schema: Arc<dyn ToolSchemaPort>,
    ) -> Self {
        Self {
            gateway,
            toolkits,
            tool_schema,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    fn agent(
        &self,
        identity: AgentIdentity,
        tools: &Arc<dyn ToolExecutorPort>,
        input: &GenerateDocumentInput,
    ) -> Arc<dyn Agent> {
        Arc::new(
            ChatAgent::new(
                identity,
                input.models.agents.clone(),
                self.gateway.clone(),
                tools.clone(),
                self.tool_schema.clone(),
            )
            .with_max_tool_turns(input.execution.max_tool_turns)
            .with_conversation_logger(self.conversation_logger.clone()),
        )
    }

    /// Build the group chat for `input` without running it
    pub fn build_chat(&self, input: &GenerateDocumentInput) -> AgentGroupChat {
        let agents = vec![
            self.agent(
                AgentIdentity::content_creation(),
                &self.toolkits.content_creation,
                input,
            ),
            self.agent(
                AgentIdentity::code_validation(),
                &self.toolkits.code_validation,
                input,
            ),
            self.agent(AgentIdentity::user_proxy(), &self.toolkits.user, input),
        ];
        let names: Vec<String> = agents.iter().map(|a| a.name().to_string()).collect();

        let termination = ModelTerminationStrategy::new(
            self.gateway.clone(),
            input.models.termination.clone(),
            names,
        );

        AgentGroupChat::new(
            agents,
            Box::new(RotationSelection::document_rotation()),
            Box::new(termination),
        )
        .with_max_iterations(input.execution.max_iterations)
        .with_conversation_logger(self.conversation_logger.clone())
    }

    pub async fn execute(
        &self,
        input: GenerateDocumentInput,
        progress: &dyn GroupChatProgress,
    ) -> Result<GenerateDocumentOutput, GenerateDocumentError> {
        info!(
            agents_model = %input.models.agents,
            termination_model = %input.models.termination,
            max_iterations = input.execution.max_iterations,
            "Generating document: {}",
            truncate_str(input.task.content(), 100)
        );

        let mut chat = self.build_chat(&input);
        chat.add_chat_message(ChatMessage::user(input.task.content()));

        let outcome = chat.invoke(progress).await?;

        let content = chat
            .messages_by(CONTENT_CREATION_AGENT)
            .next()
            .map(|m| m.content.clone())
            .ok_or(GenerateDocumentError::NoContent)?;

        self.conversation_logger.log(ConversationEvent::new(
            "final_content",
            serde_json::json!({
                "iterations": outcome.iterations,
                "complete": outcome.is_complete,
                "bytes": content.len(),
                "text": content,
            }),
        ));

        Ok(GenerateDocumentOutput {
            content,
            iterations: outcome.iterations,
            is_complete: outcome.is_complete,
            history: chat.history().clone(),
        })
    }
}
