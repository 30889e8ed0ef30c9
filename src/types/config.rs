//! Configuration types
//!
//! Connection and timeout settings for talking to the Ollama server.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Ollama server address
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Prompt sent by the "Test Model" action
pub const DEFAULT_TEST_PROMPT: &str = "Please say hello";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HerderConfig {
    /// Ollama server base URL
    pub base_url: String,
    /// Timeout for listing and show requests, in seconds
    pub request_timeout_secs: u64,
    /// Timeout for delete requests, in seconds
    pub delete_timeout_secs: u64,
    /// Timeout for the non-streaming generate request used by model tests
    pub generate_timeout_secs: u64,
    /// Timeout for the connectivity probe issued before a pull
    pub probe_timeout_secs: u64,
    /// Connect timeout for pull requests
    pub pull_connect_timeout_secs: u64,
    /// A pull with no new bytes for this long is considered stalled
    pub stall_timeout_secs: u64,
    /// Fall back to `ollama pull` when the API is unreachable
    #[serde(default = "default_cli_fallback")]
    pub cli_fallback: bool,
    /// Deadline for the CLI fallback, in seconds
    pub cli_timeout_secs: u64,
    /// Prompt used when testing a model
    pub test_prompt: String,
}

fn default_cli_fallback() -> bool {
    true
}

impl Default for HerderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 10,
            delete_timeout_secs: 60,
            generate_timeout_secs: 30,
            probe_timeout_secs: 5,
            pull_connect_timeout_secs: 30,
            stall_timeout_secs: 60,
            cli_fallback: true,
            cli_timeout_secs: 600,
            test_prompt: DEFAULT_TEST_PROMPT.to_string(),
        }
    }
}

impl HerderConfig {
    /// Configuration pointing at a different server, all other values default
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Validate configuration values
    ///
    /// Zero timeouts fall back to their defaults and a trailing slash is
    /// stripped from the base URL.
    pub fn validate(&mut self) {
        let defaults = Self::default();

        let trimmed = self.base_url.trim().trim_end_matches('/');
        self.base_url = if trimmed.is_empty() {
            defaults.base_url.clone()
        } else {
            trimmed.to_string()
        };

        for (value, fallback) in [
            (&mut self.request_timeout_secs, defaults.request_timeout_secs),
            (&mut self.delete_timeout_secs, defaults.delete_timeout_secs),
            (&mut self.generate_timeout_secs, defaults.generate_timeout_secs),
            (&mut self.probe_timeout_secs, defaults.probe_timeout_secs),
            (&mut self.pull_connect_timeout_secs, defaults.pull_connect_timeout_secs),
            (&mut self.stall_timeout_secs, defaults.stall_timeout_secs),
            (&mut self.cli_timeout_secs, defaults.cli_timeout_secs),
        ] {
            if *value == 0 {
                *value = fallback;
            }
        }

        if self.test_prompt.trim().is_empty() {
            self.test_prompt = defaults.test_prompt;
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn delete_timeout(&self) -> Duration {
        Duration::from_secs(self.delete_timeout_secs)
    }

    pub fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn pull_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.pull_connect_timeout_secs)
    }

    pub fn stall_timeout(&self) -> Duration {
        Duration::from_secs(self.stall_timeout_secs)
    }

    pub fn cli_timeout(&self) -> Duration {
        Duration::from_secs(self.cli_timeout_secs)
    }
}
