//! Group chat conversation domain.
//!
//! - [`message::ChatMessage`] - one message (role, author name, text)
//! - [`history::ChatHistory`] - the ordered history shared by all agents

pub mod history;
pub mod message;
