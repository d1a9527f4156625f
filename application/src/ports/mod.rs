//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod conversation_logger;
pub mod human_feedback;
pub mod llm_gateway;
pub mod progress;
pub mod tool_executor;
pub mod tool_schema;
