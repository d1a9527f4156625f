//! Agent domain.
//!
//! An agent is a named role: a system prompt plus the plugins it may call.
//! The model backend is shared and lives outside the domain.

pub mod identity;

pub use identity::{AgentIdentity, CODE_VALIDATION_AGENT, CONTENT_CREATION_AGENT, USER_AGENT};
