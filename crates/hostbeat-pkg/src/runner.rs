//! Local command execution using `tokio::process`

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

use crate::error::InventoryError;

/// Output of a finished command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit status code (0 for success)
    pub status: i32,
    /// stdout output
    pub stdout: String,
    /// stderr output
    pub stderr: String,
}

impl CommandOutput {
    /// Check if the command succeeded (exit code 0)
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Seam for running package query commands
///
/// The dpkg inventory talks to the OS only through this trait, so tests can
/// substitute scripted output for the real tool.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program with arguments and capture its output
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, InventoryError>;
}

/// Command runner backed by `tokio::process::Command`
#[derive(Debug, Clone, Default)]
pub struct LocalRunner;

impl LocalRunner {
    /// Create a new local runner
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for LocalRunner {
    #[instrument(skip(self), level = "debug")]
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, InventoryError> {
        debug!(program, "running package query");

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => InventoryError::ToolMissing(program.to_string()),
                _ => InventoryError::Io(e.to_string()),
            })?;

        let status = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        debug!(program, status, "package query completed");

        Ok(CommandOutput {
            status,
            stdout,
            stderr,
        })
    }
}
