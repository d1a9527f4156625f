//! Repository file plugin: read_file_by_path, read_file_by_name, list_directory
//!
//! All paths are relative to a root directory fixed at construction. Paths
//! that are absolute, climb above the root with `..`, or pass through a
//! symlink pointing outside the root are rejected.

use async_trait::async_trait;
use docgen_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    plugin::{Plugin, PluginError},
};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

pub const PLUGIN_NAME: &str = "RepoFilePlugin";

pub const READ_FILE_BY_PATH: &str = "read_file_by_path";
pub const READ_FILE_BY_NAME: &str = "read_file_by_name";
pub const LIST_DIRECTORY: &str = "list_directory";

pub struct RepoFilePlugin {
    root: PathBuf,
}

impl RepoFilePlugin {
    /// Scope the plugin to `root`, resolved to an absolute path.
    pub fn new(root: impl AsRef<Path>) -> io::Result<Self> {
        let root = std::fs::canonicalize(root.as_ref())?;
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", root.display()),
            ));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join `relative` onto the root without leaving it.
    fn resolve(&self, relative: &str) -> Result<PathBuf, PluginError> {
        let mut resolved = PathBuf::new();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !resolved.pop() {
                        return Err(PluginError::PermissionDenied(format!(
                            "Path {} is outside the repository.",
                            relative
                        )));
                    }
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(PluginError::PermissionDenied(format!(
                        "Path {} must be relative to the repository root.",
                        relative
                    )));
                }
            }
        }
        let joined = self.root.join(resolved);
        match std::fs::canonicalize(&joined) {
            Ok(real) if !real.starts_with(&self.root) => Err(PluginError::PermissionDenied(
                format!("Path {} is outside the repository.", relative),
            )),
            _ => Ok(joined),
        }
    }

    async fn read_text(path: &Path, missing: impl FnOnce() -> String) -> Result<String, PluginError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PluginError::NotFound(missing()));
            }
            Err(e) if e.kind() == io::ErrorKind::IsADirectory => {
                return Err(PluginError::InvalidArgument(format!(
                    "{} is a directory, not a file.",
                    path.display()
                )));
            }
            Err(e) => {
                return Err(PluginError::io(
                    format!("Failed to read {}", path.display()),
                    e,
                ));
            }
        };

        String::from_utf8(bytes).map_err(|_| {
            PluginError::InvalidArgument(format!("File {} is not UTF-8 text.", path.display()))
        })
    }

    pub async fn read_file_by_path(&self, path: &str) -> Result<String, PluginError> {
        let full_path = self.resolve(path)?;
        if full_path.is_dir() {
            return Err(PluginError::InvalidArgument(format!(
                "{} is a directory, not a file.",
                full_path.display()
            )));
        }
        Self::read_text(&full_path, || {
            format!("File {} not found in repository.", full_path.display())
        })
        .await
    }

    /// Find `file_name` anywhere under the root. The shallowest match wins;
    /// matches at the same depth are ordered by path.
    pub async fn find_file(&self, file_name: &str) -> Result<Option<PathBuf>, PluginError> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name == ".." {
            return Err(PluginError::InvalidArgument(format!(
                "{:?} is not a plain file name.",
                file_name
            )));
        }

        let pattern = format!(
            "{}/**/{}",
            glob::Pattern::escape(&self.root.to_string_lossy()),
            glob::Pattern::escape(file_name)
        );

        let root = self.root.clone();
        let matches = tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>, String> {
            let paths = glob::glob(&pattern).map_err(|e| e.to_string())?;
            Ok(paths
                .filter_map(Result::ok)
                .filter(|p| p.is_file())
                .filter(|p| std::fs::canonicalize(p).is_ok_and(|real| real.starts_with(&root)))
                .collect())
        })
        .await
        .map_err(|e| PluginError::ExecutionFailed(format!("File search failed: {}", e)))?
        .map_err(PluginError::ExecutionFailed)?;

        Ok(matches
            .into_iter()
            .min_by(|a, b| {
                a.components()
                    .count()
                    .cmp(&b.components().count())
                    .then_with(|| a.cmp(b))
            }))
    }

    pub async fn read_file_by_name(&self, file_name: &str) -> Result<String, PluginError> {
        let missing = || format!("File {} not found in repository.", file_name);

        let Some(found) = self.find_file(file_name).await? else {
            return Err(PluginError::NotFound(missing()));
        };
        debug!(
            "Found file {} in {}",
            file_name,
            found.parent().unwrap_or(self.root.as_path()).display()
        );
        Self::read_text(&found, missing).await
    }

    /// Immediate entries of a directory, sorted by name, one per line.
    pub async fn list_directory(&self, path: &str) -> Result<String, PluginError> {
        let full_path = self.resolve(path)?;
        let not_found = || {
            PluginError::NotFound(format!(
                "Directory {} not found in repository.",
                full_path.display()
            ))
        };

        let mut entries = match tokio::fs::read_dir(&full_path).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(e) if e.kind() == io::ErrorKind::NotADirectory => {
                return Err(PluginError::InvalidArgument(format!(
                    "{} is a file, not a directory.",
                    full_path.display()
                )));
            }
            Err(e) => {
                return Err(PluginError::io(
                    format!("Failed to list {}", full_path.display()),
                    e,
                ));
            }
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            PluginError::io(format!("Failed to list {}", full_path.display()), e)
        })? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        Ok(names.join("\n"))
    }
}

#[async_trait]
impl Plugin for RepoFilePlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn functions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition::new(
                READ_FILE_BY_PATH,
                "Read a file given a relative path to the root of the repository.",
            )
            .with_parameter(ToolParameter::new("path", "The relative path to the file.", true)),
            ToolDefinition::new(
                READ_FILE_BY_NAME,
                "Read a file given the name of the file. Function will search for the file in the repository.",
            )
            .with_parameter(ToolParameter::new("file_name", "The name of the file.", true)),
            ToolDefinition::new(
                LIST_DIRECTORY,
                "List all files or subdirectories in a directory.",
            )
            .with_parameter(ToolParameter::new(
                "path",
                "Path of a directory relative to the root of the repository.",
                true,
            )),
        ]
    }

    async fn invoke(&self, function: &str, call: &ToolCall) -> Result<String, PluginError> {
        match function {
            READ_FILE_BY_PATH => {
                let path = call
                    .require_string("path")
                    .map_err(PluginError::InvalidArgument)?;
                self.read_file_by_path(path).await
            }
            READ_FILE_BY_NAME => {
                let name = call
                    .require_string("file_name")
                    .map_err(PluginError::InvalidArgument)?;
                self.read_file_by_name(name).await
            }
            LIST_DIRECTORY => {
                let path = call.get_string("path").unwrap_or("");
                self.list_directory(path).await
            }
            other => Err(PluginError::NotFound(format!(
                "Function {} not found in {}.",
                other, PLUGIN_NAME
            ))),
        }
    }
}
