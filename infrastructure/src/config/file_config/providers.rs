//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// Which chat-completions endpoint to talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Azure,
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended; use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API.
    pub base_url: String,
    /// Optional organization header.
    pub organization: Option<String>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            organization: None,
        }
    }
}

/// Azure OpenAI provider configuration.
///
/// Azure routes by deployment name instead of model id; when `deployment`
/// is unset the configured model name is used as the deployment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAzureConfig {
    /// Environment variable name for the API key (default: "AZURE_OPENAI_API_KEY").
    pub api_key_env: String,
    pub api_key: Option<String>,
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: Option<String>,
    pub deployment: Option<String>,
    pub api_version: String,
}

impl Default for FileAzureConfig {
    fn default() -> Self {
        Self {
            api_key_env: "AZURE_OPENAI_API_KEY".to_string(),
            api_key: None,
            endpoint: None,
            deployment: None,
            api_version: "2024-10-21".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    pub kind: ProviderKind,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Sampling temperature; omitted from requests when unset
    pub temperature: Option<f32>,
    pub openai: FileOpenAiConfig,
    pub azure: FileAzureConfig,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::default(),
            timeout_secs: 120,
            temperature: None,
            openai: FileOpenAiConfig::default(),
            azure: FileAzureConfig::default(),
        }
    }
}
