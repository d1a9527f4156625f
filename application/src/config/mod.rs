//! Application-level configuration.
//!
//! - [`ExecutionParams`] - loop limits (agent turns, tool turns)
//! - [`ModelConfig`] - model per role

pub mod execution_params;
pub mod model_config;

pub use execution_params::ExecutionParams;
pub use model_config::ModelConfig;
