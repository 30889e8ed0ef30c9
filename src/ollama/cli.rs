//! `ollama` command-line fallback
//!
//! Used to pull a model when the HTTP API is unreachable but the CLI may
//! still work (e.g. the server listens on a socket we cannot see).

use std::time::Duration;

use tokio::process::Command;

use super::error::OllamaError;

/// Runs `ollama pull` as a child process
#[derive(Debug, Clone)]
pub struct OllamaCli {
    program: String,
    timeout: Duration,
}

impl OllamaCli {
    pub fn new(timeout: Duration) -> Self {
        Self::with_program("ollama", timeout)
    }

    /// Use a different executable, mostly for tests
    pub fn with_program(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub async fn pull(&self, model: &str) -> Result<(), OllamaError> {
        tracing::info!("Pulling {} via `{} pull`", model, self.program);

        let child = Command::new(&self.program)
            .args(["pull", model])
            .kill_on_drop(true)
            .output();

        let output = match tokio::time::timeout(self.timeout, child).await {
            Ok(result) => result.map_err(|e| OllamaError::Cli(e.to_string()))?,
            Err(_) => {
                return Err(OllamaError::Cli(format!(
                    "download timed out after {} minutes",
                    self.timeout.as_secs() / 60
                )))
            }
        };

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(OllamaError::Cli(if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            }))
        }
    }
}
