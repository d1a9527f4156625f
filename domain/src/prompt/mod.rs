//! Prompt domain
//!
//! Agent instructions and the termination-check prompt.

pub mod agent;
mod template;

pub use agent::AgentPromptTemplate;
pub use template::TerminationPromptTemplate;
