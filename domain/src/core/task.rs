//! Task value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// The document request that opens the group chat (Value Object)
///
/// Content is stored trimmed; a task that is empty after trimming is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    content: String,
}

impl Task {
    /// Create a new task from raw text
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyTask);
        }
        Ok(Self {
            content: trimmed.to_string(),
        })
    }

    /// The built-in blog post task
    pub fn blog_post() -> Self {
        Self {
            content: DEFAULT_TASK.trim().to_string(),
        }
    }

    /// Get the task content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

const DEFAULT_TASK: &str = r#"
Create a blog post about how to create a custom plugin for a Rust agent runtime.
The content of the blog post should include the following:
1. What are plugins in an agent runtime?
2. How do people use plugins with chat agents?
3. How do devs create custom plugins?
    - Include a walk through of creating a custom plugin.
    - Include a sample on how to use the plugin.
    - If a reader follows the walk through and the sample, they should be able to create their own plugin.

You can use the following files as examples:
infrastructure/src/plugins/repo_file.rs
infrastructure/src/plugins/code_execution.rs
infrastructure/src/plugins/user.rs
"#;
