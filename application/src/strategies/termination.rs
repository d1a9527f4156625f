//! Model-backed termination check.
//!
//! After each applicable turn a chat model reads the transcript and answers
//! whether the user has approved the content.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use async_trait::async_trait;
use docgen_domain::{
    ChatHistory, Model, TerminationPromptTemplate, TerminationVerdict, parse_completion_answer,
};
use docgen_domain::util::preview;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum TerminationError {
    #[error("Termination check failed: {0}")]
    Gateway(#[from] GatewayError),
}

/// Decides whether a group chat is finished.
#[async_trait]
pub trait TerminationStrategy: Send + Sync {
    /// Whether turns by `agent` are checked at all
    fn applies_to(&self, agent: &str) -> bool;

    /// Evaluate the history after an applicable turn
    async fn evaluate(&self, history: &ChatHistory) -> Result<TerminationVerdict, TerminationError>;
}

pub struct ModelTerminationStrategy {
    gateway: Arc<dyn LlmGateway>,
    model: Model,
    agents: Vec<String>,
}

impl ModelTerminationStrategy {
    pub fn new(
        gateway: Arc<dyn LlmGateway>,
        model: Model,
        agents: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            gateway,
            model,
            agents: agents.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl TerminationStrategy for ModelTerminationStrategy {
    fn applies_to(&self, agent: &str) -> bool {
        self.agents.iter().any(|a| a == agent)
    }

    async fn evaluate(&self, history: &ChatHistory) -> Result<TerminationVerdict, TerminationError> {
        let session = self
            .gateway
            .create_session_with_system_prompt(&self.model, TerminationPromptTemplate::system())
            .await?;

        let answer = session
            .send(&TerminationPromptTemplate::query(&history.transcript()))
            .await?;
        let verdict = parse_completion_answer(&answer);

        debug!(
            answer = %preview(&answer, 40),
            complete = verdict.is_complete(),
            "Termination check"
        );
        Ok(verdict)
    }
}
