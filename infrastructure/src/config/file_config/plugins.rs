//! Plugin settings from TOML (`[plugins]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePluginsConfig {
    /// Root directory the repository file plugin reads from
    pub repo_root: PathBuf,
    /// Interpreter receiving code snippets on stdin
    pub interpreter: String,
    pub interpreter_args: Vec<String>,
    /// Wall-clock limit for one snippet
    pub timeout_secs: u64,
    /// Output beyond this many bytes is truncated
    pub max_output_bytes: usize,
}

impl Default for FilePluginsConfig {
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from("."),
            interpreter: "python3".to_string(),
            interpreter_args: Vec::new(),
            timeout_secs: 60,
            max_output_bytes: 64 * 1024,
        }
    }
}
