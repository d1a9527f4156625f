//! [`LlmGateway`] over an OpenAI-compatible chat-completions endpoint.

use super::client::{ChatClient, Endpoint};
use super::session::OpenAiSession;
use super::types::WireMessage;
use crate::config::{FileProviderConfig, ProviderKind};
use async_trait::async_trait;
use docgen_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use docgen_domain::{ChatHistory, Model};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct OpenAiGateway {
    client: Arc<ChatClient>,
}

impl OpenAiGateway {
    pub fn new(client: ChatClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Build a gateway from the `[provider]` section.
    ///
    /// The API key comes from `api_key` when set, otherwise from the
    /// environment variable named by `api_key_env`.
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        let (endpoint, api_key) = match config.kind {
            ProviderKind::OpenAi => {
                let openai = &config.openai;
                let key = resolve_api_key(openai.api_key.as_deref(), &openai.api_key_env)?;
                let endpoint = Endpoint::OpenAi {
                    base_url: openai.base_url.clone(),
                    organization: openai.organization.clone(),
                };
                (endpoint, key)
            }
            ProviderKind::Azure => {
                let azure = &config.azure;
                let key = resolve_api_key(azure.api_key.as_deref(), &azure.api_key_env)?;
                let base = azure.endpoint.clone().ok_or_else(|| {
                    GatewayError::Other(
                        "provider.azure.endpoint is required for the azure provider".to_string(),
                    )
                })?;
                let endpoint = Endpoint::Azure {
                    endpoint: base,
                    deployment: azure.deployment.clone(),
                    api_version: azure.api_version.clone(),
                };
                (endpoint, key)
            }
        };

        let client = ChatClient::new(endpoint, api_key, Duration::from_secs(config.timeout_secs))?
            .with_temperature(config.temperature);

        info!(provider = ?config.kind, "Chat completions gateway ready");
        Ok(Self::new(client))
    }

    fn session(&self, model: &Model, messages: Vec<WireMessage>) -> Box<dyn LlmSession> {
        Box::new(OpenAiSession::new(
            self.client.clone(),
            model.clone(),
            messages,
        ))
    }
}

fn resolve_api_key(direct: Option<&str>, env_var: &str) -> Result<String, GatewayError> {
    if let Some(key) = direct.filter(|k| !k.trim().is_empty()) {
        return Ok(key.to_string());
    }
    match std::env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(GatewayError::AuthenticationFailed(format!(
            "No API key configured; set {} or provider api_key",
            env_var
        ))),
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(self.session(model, Vec::new()))
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(self.session(model, vec![WireMessage::system(system_prompt)]))
    }

    async fn create_session_with_history(
        &self,
        model: &Model,
        system_prompt: &str,
        history: &ChatHistory,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(WireMessage::system(system_prompt));
        messages.extend(history.messages().iter().map(WireMessage::from));
        Ok(self.session(model, messages))
    }
}
