//! Model selection per role

use docgen_domain::Model;
use serde::{Deserialize, Serialize};

/// Which model each part of the group chat runs on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model shared by the three agents
    pub agents: Model,
    /// Model answering the yes/no completion check
    pub termination: Model,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::uniform(Model::default())
    }
}

impl ModelConfig {
    /// Same model for every role
    pub fn uniform(model: Model) -> Self {
        Self {
            agents: model.clone(),
            termination: model,
        }
    }

    pub fn with_termination(mut self, model: Model) -> Self {
        self.termination = model;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        let config = ModelConfig::uniform(Model::Gpt41Mini);
        assert_eq!(config.agents, Model::Gpt41Mini);
        assert_eq!(config.termination, Model::Gpt41Mini);
    }

    #[test]
    fn test_with_termination() {
        let config = ModelConfig::default().with_termination(Model::Gpt4oMini);
        assert_eq!(config.agents, Model::Gpt4o);
        assert_eq!(config.termination, Model::Gpt4oMini);
    }
}
