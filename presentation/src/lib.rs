//! Presentation layer for docgen
//!
//! This crate contains CLI definitions, console output, progress
//! reporters and the interactive feedback prompt.

pub mod cli;
pub mod feedback;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use feedback::console::ConsoleHumanFeedback;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
