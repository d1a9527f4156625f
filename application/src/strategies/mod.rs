//! Group chat strategies backed by ports.
//!
//! Next-speaker selection is pure and lives in the domain
//! ([`RotationSelection`](docgen_domain::RotationSelection)); termination
//! needs a model call and lives here.

pub mod termination;

pub use termination::{ModelTerminationStrategy, TerminationError, TerminationStrategy};
