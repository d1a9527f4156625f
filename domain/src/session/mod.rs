//! Model session domain.
//!
//! - [`response::LlmResponse`] - text and tool-call blocks returned by a model

pub mod response;
