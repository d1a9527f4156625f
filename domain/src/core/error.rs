//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid agent name '{0}': only ASCII letters, digits, '_' and '-' are allowed")]
    InvalidAgentName(String),

    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Task must not be empty")]
    EmptyTask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_agent_name_display() {
        let error = DomainError::InvalidAgentName("bad name".to_string());
        assert!(error.to_string().contains("'bad name'"));
    }

    #[test]
    fn test_empty_task_display() {
        assert_eq!(DomainError::EmptyTask.to_string(), "Task must not be empty");
    }
}
