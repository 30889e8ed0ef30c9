//! Ollama server integration
//!
//! This module handles all HTTP interaction with the Ollama REST API, plus the
//! CLI fallback used when the API cannot be reached.

pub mod cli;
pub mod client;
pub mod error;
pub mod progress;
pub mod stream;

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use crate::types::model::{InstalledModel, ModelDetail};
use crate::types::pull::PullProgress;

pub use cli::OllamaCli;
pub use client::{validate_model_name, OllamaClient};
pub use error::{FailureKind, OllamaError};
pub use progress::{DownloadSnapshot, DownloadTracker};

/// Operations the application needs from a model server
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Models installed on the server; empty when none are installed
    async fn list_models(&self) -> Result<Vec<InstalledModel>, OllamaError>;

    /// Extended information about one installed model
    async fn show_model(&self, name: &str) -> Result<ModelDetail, OllamaError>;

    async fn delete_model(&self, name: &str) -> Result<(), OllamaError>;

    /// Download a model, forwarding each progress event to `progress`
    ///
    /// Resolves once the server reports success.
    async fn pull_model(
        &self,
        name: &str,
        progress: UnboundedSender<PullProgress>,
    ) -> Result<(), OllamaError>;

    /// Run a single non-streamed completion
    async fn generate(&self, name: &str, prompt: &str) -> Result<String, OllamaError>;

    /// Server version, also used as a connectivity probe
    async fn version(&self) -> Result<String, OllamaError>;
}
