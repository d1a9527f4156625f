//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for docgen
#[derive(Parser, Debug)]
#[command(name = "docgen")]
#[command(author, version, about = "Multi-agent document generator")]
#[command(long_about = r#"
docgen asks a small group of agents to write a document together.

Agents take turns on a shared chat history:
1. ContentCreationAgent writes and revises the draft, reading files from the repository
2. CodeValidationAgent runs the code samples in the draft
3. UserAgent shows the draft to you and relays your feedback

The run stops once your approval is detected or the iteration limit is reached,
then the latest draft is printed.

Configuration files are loaded from (in priority order):
1. DOCGEN_* environment variables
2. --config <path>     Explicit config file
3. ./docgen.toml       Project-level config
4. ~/.config/docgen/config.toml   Global config

Example:
  docgen
  docgen --task-file task.md --max-iterations 12
  docgen --auto-approve -q
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Read the task from a file instead of using the built-in blog post task
    #[arg(long, value_name = "PATH")]
    pub task_file: Option<PathBuf>,

    /// Approve every draft without asking
    #[arg(long)]
    pub auto_approve: bool,

    /// Maximum number of agent turns
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_iterations: Option<usize>,
}
