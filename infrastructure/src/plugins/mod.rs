//! Plugins reachable by the document agents
//!
//! | Plugin | Functions | Used by |
//! |--------|-----------|---------|
//! | [`RepoFilePlugin`] | read_file_by_path, read_file_by_name, list_directory | ContentCreationAgent |
//! | [`CodeExecutionPlugin`] | execute_code | CodeValidationAgent |
//! | [`UserPlugin`] | request_user_feedback | UserAgent |

pub mod code_execution;
pub mod registry;
pub mod repo_file;
pub mod schema;
pub mod user;

pub use code_execution::CodeExecutionPlugin;
pub use registry::PluginRegistry;
pub use repo_file::RepoFilePlugin;
pub use schema::JsonSchemaToolConverter;
pub use user::UserPlugin;
