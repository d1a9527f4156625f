//! Multi-agent group chat engine.
//!
//! Agents take strictly sequential turns over one append-only history:
//!
//! ```text
//! ┌────────────┐   ┌─────────────┐   ┌────────┐   ┌─────────────┐
//! │ selection  │──▶│ agent.invoke│──▶│ append │──▶│ termination │──┐
//! └────────────┘   └─────────────┘   └────────┘   └─────────────┘  │
//!       ▲                                                          │
//!       └──────────── continue (until max_iterations) ─────────────┘
//! ```

use crate::agents::{Agent, AgentError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::GroupChatProgress;
use crate::strategies::{TerminationError, TerminationStrategy};
use docgen_domain::{ChatHistory, ChatMessage, SelectionStrategy};
use std::sync::Arc;
use thiserror::Error;
use tracing::{Instrument, info, info_span, warn};

pub const DEFAULT_MAX_ITERATIONS: usize = 20;

#[derive(Error, Debug)]
pub enum GroupChatError {
    #[error("Group chat has no agents")]
    NoAgents,

    #[error("Agent {agent} failed: {source}")]
    Agent {
        agent: String,
        #[source]
        source: AgentError,
    },

    #[error(transparent)]
    Termination(#[from] TerminationError),
}

/// Result of one [`AgentGroupChat::invoke`] run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupChatOutcome {
    /// Agent turns taken in this run
    pub iterations: usize,
    pub is_complete: bool,
}

pub struct AgentGroupChat {
    agents: Vec<Arc<dyn Agent>>,
    history: ChatHistory,
    selection: Box<dyn SelectionStrategy>,
    termination: Box<dyn TerminationStrategy>,
    max_iterations: usize,
    is_complete: bool,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AgentGroupChat {
    pub fn new(
        agents: Vec<Arc<dyn Agent>>,
        selection: Box<dyn SelectionStrategy>,
        termination: Box<dyn TerminationStrategy>,
    ) -> Self {
        Self {
            agents,
            history: ChatHistory::new(),
            selection,
            termination,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            is_complete: false,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn add_chat_message(&mut self, message: ChatMessage) {
        self.conversation_logger.log(ConversationEvent::new(
            "chat_message",
            serde_json::json!({
                "role": message.role.as_str(),
                "name": message.name,
                "text": message.content,
            }),
        ));
        self.history.push(message);
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Messages written by `agent`, newest first
    pub fn messages_by<'a>(&'a self, agent: &'a str) -> impl Iterator<Item = &'a ChatMessage> + 'a {
        self.history.newest_first().filter(move |m| m.is_from(agent))
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn agent_names(&self) -> Vec<&str> {
        self.agents.iter().map(|a| a.name()).collect()
    }

    /// Run turns until the termination strategy says the chat is complete,
    /// or `max_iterations` turns have been taken.
    pub async fn invoke(
        &mut self,
        progress: &dyn GroupChatProgress,
    ) -> Result<GroupChatOutcome, GroupChatError> {
        if self.is_complete {
            return Ok(GroupChatOutcome {
                iterations: 0,
                is_complete: true,
            });
        }
        if self.agents.is_empty() {
            return Err(GroupChatError::NoAgents);
        }

        for iteration in 1..=self.max_iterations {
            let agent = {
                let names = self.agent_names();
                self.selection
                    .next(&names, &self.history)
                    .and_then(|index| self.agents.get(index))
                    .cloned()
                    .ok_or(GroupChatError::NoAgents)?
            };
            let name = agent.name().to_string();
            progress.on_agent_selected(&name, iteration);

            let span = info_span!("agent_turn", agent = %name, iteration);
            let message = agent
                .invoke(&self.history, progress)
                .instrument(span)
                .await
                .map_err(|source| GroupChatError::Agent {
                    agent: name.clone(),
                    source,
                })?;

            self.add_chat_message(message);
            if let Some(message) = self.history.last() {
                progress.on_agent_response(message);
            }

            if !self.termination.applies_to(&name) {
                continue;
            }

            let verdict = self.termination.evaluate(&self.history).await?;
            progress.on_termination_check(&name, verdict);
            self.conversation_logger.log(ConversationEvent::new(
                "termination_check",
                serde_json::json!({
                    "agent": name,
                    "iteration": iteration,
                    "complete": verdict.is_complete(),
                }),
            ));

            if verdict.is_complete() {
                self.is_complete = true;
                info!(iterations = iteration, "Group chat complete");
                progress.on_chat_finished(iteration, true);
                return Ok(GroupChatOutcome {
                    iterations: iteration,
                    is_complete: true,
                });
            }
        }

        warn!(
            max_iterations = self.max_iterations,
            "Group chat stopped at maximum iterations without completion"
        );
        progress.on_chat_finished(self.max_iterations, false);
        Ok(GroupChatOutcome {
            iterations: self.max_iterations,
            is_complete: false,
        })
    }
}
