//! Code execution plugin: execute_code
//!
//! Runs a snippet with a configured interpreter. The code is written to the
//! interpreter's stdin; stdout and stderr are captured and returned together.

use async_trait::async_trait;
use docgen_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    plugin::{Plugin, PluginError},
};
use docgen_domain::util::truncate_str;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

pub const PLUGIN_NAME: &str = "CodeExecutionPlugin";

pub const EXECUTE_CODE: &str = "execute_code";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_MAX_OUTPUT: usize = 64 * 1024;

pub struct CodeExecutionPlugin {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    timeout: Duration,
    max_output: usize,
}

impl Default for CodeExecutionPlugin {
    fn default() -> Self {
        Self::new("python3")
    }
}

impl CodeExecutionPlugin {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            timeout: DEFAULT_TIMEOUT,
            max_output: DEFAULT_MAX_OUTPUT,
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_output(mut self, bytes: usize) -> Self {
        self.max_output = bytes;
        self
    }

    fn combine(&self, stdout: &[u8], stderr: &[u8]) -> String {
        let stdout = String::from_utf8_lossy(stdout);
        let stderr = String::from_utf8_lossy(stderr);

        let mut combined = stdout.into_owned();
        if !stderr.is_empty() {
            if !combined.is_empty() {
                combined.push_str("\n--- stderr ---\n");
            }
            combined.push_str(&stderr);
        }

        if combined.len() > self.max_output {
            let mut truncated = truncate_str(&combined, self.max_output).to_string();
            truncated.push_str("\n... (output truncated)");
            return truncated;
        }
        combined
    }

    /// Run `code` and return its output. A non-zero exit status is an error
    /// whose message still carries the output.
    pub async fn execute_code(&self, code: &str) -> Result<String, PluginError> {
        let start = Instant::now();

        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn().map_err(|e| {
            PluginError::ExecutionFailed(format!("Failed to start {}: {}", self.program, e))
        })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            PluginError::ExecutionFailed(format!("No stdin for {}", self.program))
        })?;
        let feed = async move {
            // The program may exit without reading all of stdin.
            if let Err(e) = stdin.write_all(code.as_bytes()).await {
                debug!("Writing code to interpreter stdin failed: {}", e);
            }
            drop(stdin);
        };

        let run = async {
            let (_, output) = tokio::join!(feed, child.wait_with_output());
            output
        };

        let output = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| {
                PluginError::Timeout(format!(
                    "Code execution timed out after {} seconds.",
                    self.timeout.as_secs_f32()
                ))
            })?
            .map_err(|e| PluginError::io(format!("Failed to run {}", self.program), e))?;

        let text = self.combine(&output.stdout, &output.stderr);
        let exit_code = output.status.code().unwrap_or(-1);
        info!(
            program = %self.program,
            exit_code,
            duration_ms = start.elapsed().as_millis() as u64,
            bytes = text.len(),
            "Code executed"
        );

        if output.status.success() {
            Ok(text)
        } else {
            Err(PluginError::ExecutionFailed(format!(
                "Code exited with code {}\n{}",
                exit_code, text
            )))
        }
    }
}

#[async_trait]
impl Plugin for CodeExecutionPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn functions(&self) -> Vec<ToolDefinition> {
        vec![
            ToolDefinition::new(
                EXECUTE_CODE,
                "Execute a code snippet and return its combined stdout and stderr.",
            )
            .with_parameter(ToolParameter::new("code", "The source code to run.", true)),
        ]
    }

    async fn invoke(&self, function: &str, call: &ToolCall) -> Result<String, PluginError> {
        match function {
            EXECUTE_CODE => {
                let code = call
                    .require_string("code")
                    .map_err(PluginError::InvalidArgument)?;
                self.execute_code(code).await
            }
            other => Err(PluginError::NotFound(format!(
                "Function {} not found in {}.",
                other, PLUGIN_NAME
            ))),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell() -> CodeExecutionPlugin {
        CodeExecutionPlugin::new("sh")
    }

    #[tokio::test]
    async fn test_stdout_is_returned() {
        let output = shell().execute_code("echo hello").await.unwrap();
        assert_eq!(output, "hello\n");
    }

    #[tokio::test]
    async fn test_stderr_is_appended() {
        let output = shell().execute_code("echo out; echo err >&2").await.unwrap();
        assert_eq!(output, "out\n\n--- stderr ---\nerr\n");
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_an_error_with_output() {
        let err = shell()
            .execute_code("echo broken >&2; exit 3")
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, PluginError::ExecutionFailed(_)));
        assert!(message.starts_with("Code exited with code 3"));
        assert!(message.contains("broken"));
    }

    #[tokio::test]
    async fn test_timeout_kills_the_program() {
        let err = shell()
            .with_timeout(Duration::from_millis(200))
            .execute_code("sleep 5")
            .await
            .unwrap_err();
        assert!(matches!(err, PluginError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_missing_interpreter() {
        let err = CodeExecutionPlugin::new("definitely-not-an-interpreter")
            .execute_code("print(1)")
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to start definitely-not-an-interpreter"));
    }

    #[tokio::test]
    async fn test_output_is_truncated() {
        let output = shell()
            .with_max_output(4)
            .execute_code("echo 0123456789")
            .await
            .unwrap();
        assert_eq!(output, "0123\n... (output truncated)");
    }

    #[tokio::test]
    async fn test_invoke_requires_code() {
        let call = ToolCall::new("CodeExecutionPlugin-execute_code");
        let err = shell().invoke(EXECUTE_CODE, &call).await.unwrap_err();
        assert!(matches!(err, PluginError::InvalidArgument(_)));

        let call = call.with_arg("code", "echo ok");
        assert_eq!(shell().invoke(EXECUTE_CODE, &call).await.unwrap(), "ok\n");
    }
}
