//! Plugin function domain
//!
//! Agents reach the local environment (repository files, a code
//! interpreter, the human user) through plugin functions offered to the
//! model as tools.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (offered)    │    │ (requested)  │    │ (returned)   │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! - [`ToolDefinition`] - schema for one function
//! - [`ToolCall`] - a model-requested invocation with its call id
//! - [`ToolResult`] - output or [`ToolError`]
//! - [`Plugin`] - a named group of functions

pub mod entities;
pub mod plugin;
pub mod value_objects;

pub use entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec};
pub use plugin::{Plugin, PluginError, qualified_name, split_qualified_name};
pub use value_objects::{ToolError, ToolResult, ToolResultMetadata};
