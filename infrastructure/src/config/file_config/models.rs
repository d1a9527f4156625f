//! Model selection from TOML (`[models]` section)

use docgen_application::ModelConfig;
use docgen_domain::Model;
use serde::{Deserialize, Serialize};

use crate::config::validation::ConfigIssue;

/// Role-based model names; unset roles use the default model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model used by the three chat agents
    pub agents: Option<String>,
    /// Model used for the termination check
    pub termination: Option<String>,
}

impl FileModelsConfig {
    fn parse(field: &str, value: &Option<String>) -> (Option<Model>, Option<ConfigIssue>) {
        match value.as_deref().map(str::trim) {
            None => (None, None),
            Some("") => (
                None,
                Some(ConfigIssue::error(
                    format!("models.{}", field),
                    "model name cannot be empty",
                )),
            ),
            Some(name) => {
                let Ok(model) = name.parse::<Model>();
                (Some(model), None)
            }
        }
    }

    /// Resolve to a [`ModelConfig`], collecting issues for invalid names.
    pub fn to_model_config(&self) -> (ModelConfig, Vec<ConfigIssue>) {
        let mut config = ModelConfig::default();
        let mut issues = Vec::new();

        let (agents, issue) = Self::parse("agents", &self.agents);
        issues.extend(issue);
        if let Some(model) = agents {
            config.agents = model;
        }

        let (termination, issue) = Self::parse("termination", &self.termination);
        issues.extend(issue);
        config.termination = termination.unwrap_or_else(|| config.agents.clone());

        (config, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_uses_defaults() {
        let (config, issues) = FileModelsConfig::default().to_model_config();
        assert_eq!(config, ModelConfig::default());
        assert!(issues.is_empty());
    }

    #[test]
    fn test_termination_follows_agents_model() {
        let models = FileModelsConfig {
            agents: Some("gpt-4o-mini".to_string()),
            termination: None,
        };
        let (config, _) = models.to_model_config();
        assert_eq!(config.agents, Model::Gpt4oMini);
        assert_eq!(config.termination, Model::Gpt4oMini);
    }

    #[test]
    fn test_custom_model_names_pass_through() {
        let models = FileModelsConfig {
            agents: None,
            termination: Some("my-deployment".to_string()),
        };
        let (config, _) = models.to_model_config();
        assert_eq!(config.termination, Model::Custom("my-deployment".to_string()));
    }

    #[test]
    fn test_empty_name_is_an_issue() {
        let models = FileModelsConfig {
            agents: Some("  ".to_string()),
            termination: None,
        };
        let (config, issues) = models.to_model_config();
        assert_eq!(config.agents, Model::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "models.agents");
    }
}
