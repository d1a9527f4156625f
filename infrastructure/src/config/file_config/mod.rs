//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod chat;
mod logging;
mod models;
mod plugins;
mod providers;

pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use plugins::FilePluginsConfig;
pub use providers::{FileAzureConfig, FileOpenAiConfig, FileProviderConfig, ProviderKind};

use super::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat-completions endpoint
    pub provider: FileProviderConfig,
    /// Role-based model selection
    pub models: FileModelsConfig,
    /// Group chat limits
    pub chat: FileChatConfig,
    /// Plugin settings
    pub plugins: FilePluginsConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.models.to_model_config().1;

        if self.chat.max_iterations == 0 {
            issues.push(ConfigIssue::error(
                "chat.max_iterations",
                "must be at least 1",
            ));
        }
        if self.chat.max_tool_turns == 0 {
            issues.push(ConfigIssue::warning(
                "chat.max_tool_turns",
                "0 disables plugin calls entirely",
            ));
        }
        if self.plugins.timeout_secs == 0 {
            issues.push(ConfigIssue::error("plugins.timeout_secs", "cannot be 0"));
        }
        if self.plugins.interpreter.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "plugins.interpreter",
                "interpreter cannot be empty",
            ));
        }
        if self.provider.timeout_secs == 0 {
            issues.push(ConfigIssue::error("provider.timeout_secs", "cannot be 0"));
        }
        if let Some(t) = self.provider.temperature.filter(|t| !(0.0..=2.0).contains(t)) {
            issues.push(ConfigIssue::warning(
                "provider.temperature",
                format!("{} is outside 0.0..=2.0", t),
            ));
        }
        if self.provider.kind == ProviderKind::Azure && self.provider.azure.endpoint.is_none() {
            issues.push(ConfigIssue::error(
                "provider.azure.endpoint",
                "required when provider.kind = \"azure\"",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[provider]
kind = "azure"
timeout_secs = 30

[provider.azure]
endpoint = "https://example.openai.azure.com"
deployment = "gpt-4o"

[models]
agents = "gpt-4o"
termination = "gpt-4o-mini"

[chat]
max_iterations = 8
auto_approve = true

[plugins]
repo_root = "/srv/repo"
interpreter = "python3.12"
timeout_secs = 10

[logging]
conversation_log = "transcript.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.kind, ProviderKind::Azure);
        assert_eq!(config.provider.timeout_secs, 30);
        assert_eq!(
            config.provider.azure.endpoint.as_deref(),
            Some("https://example.openai.azure.com")
        );
        assert_eq!(config.provider.azure.api_key_env, "AZURE_OPENAI_API_KEY");
        assert_eq!(config.models.termination.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.chat.max_iterations, 8);
        assert_eq!(config.chat.max_tool_turns, 10);
        assert!(config.chat.auto_approve);
        assert_eq!(config.plugins.repo_root, PathBuf::from("/srv/repo"));
        assert_eq!(config.plugins.timeout_secs, 10);
        assert_eq!(
            config.logging.conversation_log,
            Some(PathBuf::from("transcript.jsonl"))
        );
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.provider.kind, ProviderKind::OpenAi);
        assert_eq!(config.provider.openai.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.chat.max_iterations, 20);
        assert_eq!(config.plugins.interpreter, "python3");
        assert_eq!(config.plugins.timeout_secs, 60);
        assert!(config.logging.log_dir.is_none());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_issues() {
        let mut config = FileConfig::default();
        config.chat.max_iterations = 0;
        config.provider.kind = ProviderKind::Azure;
        config.provider.temperature = Some(3.5);

        let issues = config.validate();
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"chat.max_iterations"));
        assert!(fields.contains(&"provider.azure.endpoint"));
        assert!(fields.contains(&"provider.temperature"));
        assert!(crate::config::has_errors(&issues));
    }
}
