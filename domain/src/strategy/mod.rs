//! Group chat policies.
//!
//! - [`selection`] - who speaks next (fixed rotation with fallback)
//! - [`termination`] - how a yes/no completion answer is read
//!
//! The model call behind the termination check lives in the application
//! layer; only the pure decision logic is here.

pub mod selection;
pub mod termination;

pub use selection::{RotationSelection, SelectionStrategy};
pub use termination::{TerminationVerdict, parse_completion_answer};
