//! OpenAI and Azure OpenAI chat-completions adapter

pub mod client;
pub mod error;
pub mod gateway;
pub mod session;
pub mod types;

pub use client::{ChatClient, Endpoint};
pub use gateway::OpenAiGateway;
pub use session::OpenAiSession;
