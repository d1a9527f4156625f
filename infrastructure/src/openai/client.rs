//! HTTP client for the chat-completions endpoint.

use super::error;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, WireMessage};
use docgen_application::ports::llm_gateway::GatewayError;
use docgen_domain::Model;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Where requests go and how they authenticate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST {base_url}/v1/chat/completions` with a bearer key
    OpenAi {
        base_url: String,
        organization: Option<String>,
    },
    /// `POST {endpoint}/openai/deployments/{deployment}/chat/completions`
    /// with an `api-key` header. The model name is the deployment when
    /// `deployment` is unset.
    Azure {
        endpoint: String,
        deployment: Option<String>,
        api_version: String,
    },
}

impl Endpoint {
    pub fn url(&self, model: &Model) -> String {
        match self {
            Endpoint::OpenAi { base_url, .. } => {
                format!("{}/v1/chat/completions", base_url.trim_end_matches('/'))
            }
            Endpoint::Azure {
                endpoint,
                deployment,
                api_version,
            } => format!(
                "{}/openai/deployments/{}/chat/completions?api-version={}",
                endpoint.trim_end_matches('/'),
                deployment.as_deref().unwrap_or(model.as_str()),
                api_version
            ),
        }
    }
}

pub struct ChatClient {
    http: Client,
    endpoint: Endpoint,
    api_key: String,
    temperature: Option<f32>,
}

impl ChatClient {
    pub fn new(
        endpoint: Endpoint,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            http,
            endpoint,
            api_key: api_key.into(),
            temperature: None,
        })
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// One stateless chat-completions call
    pub async fn complete(
        &self,
        model: &Model,
        messages: &[WireMessage],
        tools: &[Value],
    ) -> Result<ChatCompletionResponse, GatewayError> {
        let url = self.endpoint.url(model);
        let request = ChatCompletionRequest {
            model: model.as_str(),
            messages,
            tools,
            // reasoning models reject sampling parameters
            temperature: self.temperature.filter(|_| !model.is_reasoning()),
        };

        debug!(
            model = %model,
            messages = messages.len(),
            tools = tools.len(),
            "Calling chat completions"
        );

        let builder = self.http.post(&url).json(&request);
        let builder = match &self.endpoint {
            Endpoint::OpenAi { organization, .. } => {
                let builder = builder.bearer_auth(&self.api_key);
                match organization {
                    Some(org) => builder.header("OpenAI-Organization", org),
                    None => builder,
                }
            }
            Endpoint::Azure { .. } => builder.header("api-key", &self.api_key),
        };

        let response = builder.send().await.map_err(error::from_reqwest)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error::from_status(status, &body));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(error::from_reqwest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_url() {
        let endpoint = Endpoint::OpenAi {
            base_url: "https://api.openai.com/".to_string(),
            organization: None,
        };
        assert_eq!(
            endpoint.url(&Model::Gpt4o),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_azure_url_uses_deployment_or_model() {
        let mut endpoint = Endpoint::Azure {
            endpoint: "https://res.openai.azure.com".to_string(),
            deployment: Some("prod-gpt4o".to_string()),
            api_version: "2024-10-21".to_string(),
        };
        assert_eq!(
            endpoint.url(&Model::Gpt4o),
            "https://res.openai.azure.com/openai/deployments/prod-gpt4o/chat/completions?api-version=2024-10-21"
        );

        if let Endpoint::Azure { deployment, .. } = &mut endpoint {
            *deployment = None;
        }
        assert!(endpoint.url(&Model::Gpt4oMini).contains("/deployments/gpt-4o-mini/"));
    }
}
