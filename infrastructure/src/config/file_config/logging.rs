//! Logging destinations from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the daily rolling trace log; disabled when unset
    pub log_dir: Option<PathBuf>,
    /// JSONL transcript file; disabled when unset
    pub conversation_log: Option<PathBuf>,
}
