//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - chat models and Azure deployments
//! - [`task::Task`] - the validated request the group chat works on
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod task;
