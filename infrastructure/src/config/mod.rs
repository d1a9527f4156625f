//! Configuration file loading for docgen
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DOCGEN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./docgen.toml` or `./.docgen.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/docgen/config.toml`
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    FileAzureConfig, FileChatConfig, FileConfig, FileLoggingConfig, FileModelsConfig,
    FileOpenAiConfig, FilePluginsConfig, FileProviderConfig, ProviderKind,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, Severity, has_errors};
