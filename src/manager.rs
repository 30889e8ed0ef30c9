//! Model manager
//!
//! Sits between the UI and a [`ModelService`]. It owns the installed-model
//! snapshot, chains follow-up calls (delete then refresh, pull then verify) and
//! turns service errors into messages fit for the status bar.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;

use crate::ollama::{
    validate_model_name, FailureKind, ModelService, OllamaCli, OllamaClient, OllamaError,
};
use crate::types::config::HerderConfig;
use crate::types::model::{base_name, InstalledModel, ModelDetail};
use crate::types::pull::PullProgress;

/// Status line sent on the progress channel when the CLI takes over a pull
pub const CLI_FALLBACK_STATUS: &str = "API failed, trying CLI method...";

/// User-triggered operation, used to phrase failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Connect,
    Refresh,
    Show,
    Remove,
    Install,
    Test,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::Connect => "connect to Ollama",
            Action::Refresh => "refresh installed models",
            Action::Show => "load model details",
            Action::Remove => "remove model",
            Action::Install => "install model",
            Action::Test => "test model",
        };
        f.write_str(text)
    }
}

/// Errors surfaced to the user
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Please select a model to {0}.")]
    NoSelection(&'static str),

    #[error("Failed to {action}: {source}")]
    Failed {
        action: Action,
        source: OllamaError,
    },
}

impl ActionError {
    fn failed(action: Action, source: OllamaError) -> Self {
        tracing::error!("Failed to {}: {}", action, source);
        ActionError::Failed { action, source }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ActionError::NoSelection(_) => FailureKind::Input,
            ActionError::Failed { source, .. } => source.kind(),
        }
    }
}

/// Resolve the current selection or explain that one is needed
pub fn require_selection<'a>(
    selection: Option<&'a str>,
    verb: &'static str,
) -> Result<&'a str, ActionError> {
    match selection.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ActionError::NoSelection(verb)),
    }
}

/// Result of a refresh
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The listing replaced the snapshot
    Applied(Vec<InstalledModel>),
    /// A refresh issued later already landed; this result was dropped
    Superseded,
}

/// How an install reached the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallChannel {
    Api,
    Cli,
}

/// Whether an installed model showed up in the listing afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Confirmed,
    Missing,
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub model: String,
    pub via: InstallChannel,
    pub verification: Verification,
}

/// Prompt and answer from a model test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub model: String,
    pub prompt: String,
    pub response: String,
}

impl TestReport {
    pub fn render(&self) -> String {
        let response = if self.response.trim().is_empty() {
            "No response received"
        } else {
            self.response.trim()
        };
        format!("Test Prompt: {}\n\nModel Response:\n{}", self.prompt, response)
    }
}

#[derive(Debug, Default)]
struct Snapshot {
    generation: u64,
    models: Vec<InstalledModel>,
}

pub struct ModelManager {
    service: Arc<dyn ModelService>,
    cli: Option<OllamaCli>,
    test_prompt: String,
    issued: AtomicU64,
    snapshot: Mutex<Snapshot>,
}

impl ModelManager {
    pub fn new(service: Arc<dyn ModelService>, cli: Option<OllamaCli>, test_prompt: impl Into<String>) -> Self {
        Self {
            service,
            cli,
            test_prompt: test_prompt.into(),
            issued: AtomicU64::new(0),
            snapshot: Mutex::new(Snapshot::default()),
        }
    }

    /// Manager backed by the HTTP client described by `config`
    pub fn from_config(mut config: HerderConfig) -> Result<Self, OllamaError> {
        config.validate();
        let cli = config
            .cli_fallback
            .then(|| OllamaCli::new(config.cli_timeout()));
        let test_prompt = config.test_prompt.clone();
        let client = OllamaClient::new(config)?;
        Ok(Self::new(Arc::new(client), cli, test_prompt))
    }

    /// Last applied listing
    pub async fn installed(&self) -> Vec<InstalledModel> {
        self.snapshot.lock().await.models.clone()
    }

    /// Fetch the listing and replace the snapshot unless a newer one landed first
    pub async fn refresh(&self) -> Result<RefreshOutcome, ActionError> {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let models = self
            .service
            .list_models()
            .await
            .map_err(|e| ActionError::failed(Action::Refresh, e))?;

        let mut snapshot = self.snapshot.lock().await;
        if ticket < snapshot.generation {
            tracing::debug!(
                "Dropping refresh #{}; #{} already applied",
                ticket,
                snapshot.generation
            );
            return Ok(RefreshOutcome::Superseded);
        }

        snapshot.generation = ticket;
        snapshot.models = models.clone();
        tracing::info!("Found {} installed models", models.len());
        Ok(RefreshOutcome::Applied(models))
    }

    pub async fn show(&self, name: &str) -> Result<ModelDetail, ActionError> {
        self.service
            .show_model(name)
            .await
            .map_err(|e| ActionError::failed(Action::Show, e))
    }

    /// Delete a model and refresh the listing
    pub async fn remove(&self, name: &str) -> Result<RefreshOutcome, ActionError> {
        self.service
            .delete_model(name)
            .await
            .map_err(|e| ActionError::failed(Action::Remove, e))?;
        tracing::info!("Successfully removed {}", name);
        self.refresh().await
    }

    /// Pull a model, falling back to the CLI when the API is unreachable, then verify it
    pub async fn install(
        &self,
        name: &str,
        progress: UnboundedSender<PullProgress>,
    ) -> Result<InstallOutcome, ActionError> {
        let name = validate_model_name(name).map_err(|e| ActionError::failed(Action::Install, e))?;

        let via = match self.pull_via_api(name, progress.clone()).await {
            Ok(()) => InstallChannel::Api,
            Err(e) if e.is_unreachable() => match &self.cli {
                Some(cli) => {
                    tracing::warn!("API download failed ({}), trying CLI method", e);
                    let _ = progress.send(PullProgress {
                        model: name.to_string(),
                        status: CLI_FALLBACK_STATUS.to_string(),
                        digest: None,
                        total: None,
                        completed: None,
                    });
                    cli.pull(name)
                        .await
                        .map_err(|e| ActionError::failed(Action::Install, e))?;
                    InstallChannel::Cli
                }
                None => return Err(ActionError::failed(Action::Install, e)),
            },
            Err(e) => return Err(ActionError::failed(Action::Install, e)),
        };

        let verification = self.verify_installed(name).await;
        Ok(InstallOutcome {
            model: name.to_string(),
            via,
            verification,
        })
    }

    async fn pull_via_api(
        &self,
        name: &str,
        progress: UnboundedSender<PullProgress>,
    ) -> Result<(), OllamaError> {
        let version = self.service.version().await?;
        tracing::debug!("Ollama {} reachable, pulling {}", version, name);
        self.service.pull_model(name, progress).await
    }

    /// Refresh and look for the model (or another tag of it) in the listing
    pub async fn verify_installed(&self, name: &str) -> Verification {
        let models = match self.refresh().await {
            Ok(RefreshOutcome::Applied(models)) => models,
            Ok(RefreshOutcome::Superseded) => self.installed().await,
            Err(e) => return Verification::Unavailable(e.to_string()),
        };

        let wanted = base_name(name);
        if models.iter().any(|m| m.name == name || m.base_name() == wanted) {
            Verification::Confirmed
        } else {
            tracing::warn!("{} finished downloading but is not listed", name);
            Verification::Missing
        }
    }

    pub async fn test_model(&self, name: &str) -> Result<TestReport, ActionError> {
        let response = self
            .service
            .generate(name, &self.test_prompt)
            .await
            .map_err(|e| ActionError::failed(Action::Test, e))?;
        Ok(TestReport {
            model: name.to_string(),
            prompt: self.test_prompt.clone(),
            response,
        })
    }

    pub async fn server_version(&self) -> Result<String, ActionError> {
        self.service
            .version()
            .await
            .map_err(|e| ActionError::failed(Action::Connect, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn model(name: &str) -> InstalledModel {
        InstalledModel {
            name: name.to_string(),
            size: 1024,
            modified_at: None,
            digest: String::new(),
            details: Default::default(),
        }
    }

    fn unreachable() -> OllamaError {
        OllamaError::Connection {
            url: "http://localhost:11434".to_string(),
            reason: "connection refused".to_string(),
        }
    }

    /// In-memory server
    #[derive(Default)]
    struct FakeServer {
        models: Mutex<Vec<InstalledModel>>,
        list_delays: Mutex<VecDeque<Duration>>,
        list_calls: AtomicU64,
        offline: bool,
        /// Pull reports success but the model never appears
        pull_loses_model: bool,
    }

    impl FakeServer {
        fn with_models(names: &[&str]) -> Self {
            Self {
                models: Mutex::new(names.iter().map(|n| model(n)).collect()),
                ..Default::default()
            }
        }

        fn offline() -> Self {
            Self {
                offline: true,
                ..Default::default()
            }
        }

        fn check(&self) -> Result<(), OllamaError> {
            if self.offline {
                Err(unreachable())
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl ModelService for FakeServer {
        async fn list_models(&self) -> Result<Vec<InstalledModel>, OllamaError> {
            self.check()?;
            let call = self.list_calls.fetch_add(1, Ordering::SeqCst) + 1;
            let delay = self.list_delays.lock().await.pop_front();
            let mut models = self.models.lock().await.clone();
            if let Some(delay) = delay {
                models.push(model(&format!("call-{}", call)));
                tokio::time::sleep(delay).await;
            }
            Ok(models)
        }

        async fn show_model(&self, name: &str) -> Result<ModelDetail, OllamaError> {
            self.check()?;
            let models = self.models.lock().await;
            models
                .iter()
                .find(|m| m.name == name)
                .map(|m| ModelDetail {
                    details: m.details.clone(),
                    ..Default::default()
                })
                .ok_or_else(|| OllamaError::ModelNotFound(name.to_string()))
        }

        async fn delete_model(&self, name: &str) -> Result<(), OllamaError> {
            self.check()?;
            let mut models = self.models.lock().await;
            let before = models.len();
            models.retain(|m| m.name != name);
            if models.len() == before {
                return Err(OllamaError::ModelNotFound(name.to_string()));
            }
            Ok(())
        }

        async fn pull_model(
            &self,
            name: &str,
            progress: UnboundedSender<PullProgress>,
        ) -> Result<(), OllamaError> {
            self.check()?;
            for (status, completed) in [("pulling manifest", None), ("pulling abc", Some(10)), ("success", None)] {
                let _ = progress.send(PullProgress {
                    model: name.to_string(),
                    status: status.to_string(),
                    digest: None,
                    total: completed.map(|_| 10),
                    completed,
                });
            }
            if !self.pull_loses_model {
                self.models.lock().await.push(model(name));
            }
            Ok(())
        }

        async fn generate(&self, name: &str, prompt: &str) -> Result<String, OllamaError> {
            self.check()?;
            Ok(format!("{} says: {}", name, prompt.to_lowercase()))
        }

        async fn version(&self) -> Result<String, OllamaError> {
            self.check()?;
            Ok("0.5.7".to_string())
        }
    }

    fn manager(server: FakeServer) -> ModelManager {
        ModelManager::new(Arc::new(server), None, "Please say hello")
    }

    #[tokio::test]
    async fn test_empty_listing_is_not_an_error() {
        let manager = manager(FakeServer::default());
        let outcome = manager.refresh().await.unwrap();
        assert_eq!(outcome, RefreshOutcome::Applied(vec![]));
        assert!(manager.installed().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_drops_model_from_next_listing() {
        let manager = manager(FakeServer::with_models(&["llama3.2:1b", "mistral:7b"]));
        manager.refresh().await.unwrap();
        assert_eq!(manager.installed().await.len(), 2);

        let outcome = manager.remove("mistral:7b").await.unwrap();
        match outcome {
            RefreshOutcome::Applied(models) => {
                assert_eq!(models, vec![model("llama3.2:1b")]);
            }
            RefreshOutcome::Superseded => panic!("Expected applied listing"),
        }
        assert!(!manager.installed().await.iter().any(|m| m.name == "mistral:7b"));
    }

    #[tokio::test]
    async fn test_remove_unknown_model_fails() {
        let manager = manager(FakeServer::with_models(&["llama3.2:1b"]));
        let err = manager.remove("ghost:latest").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to remove model: Model not found: ghost:latest");
    }

    #[tokio::test]
    async fn test_rapid_refreshes_keep_latest_result() {
        let server = FakeServer::with_models(&["base:latest"]);
        server
            .list_delays
            .lock()
            .await
            .extend([Duration::from_millis(80), Duration::from_millis(1)]);
        let manager = manager(server);

        let (first, second) = tokio::join!(manager.refresh(), manager.refresh());

        assert_eq!(first.unwrap(), RefreshOutcome::Superseded);
        let applied = match second.unwrap() {
            RefreshOutcome::Applied(models) => models,
            RefreshOutcome::Superseded => panic!("Later refresh must win"),
        };
        assert!(applied.iter().any(|m| m.name == "call-2"));
        assert_eq!(manager.installed().await, applied);
    }

    #[tokio::test]
    async fn test_offline_server_surfaces_errors() {
        let manager = manager(FakeServer::offline());

        let err = manager.refresh().await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to refresh installed models: Cannot connect"));

        assert!(manager.show("x").await.is_err());
        assert!(manager.remove("x").await.is_err());
        assert!(manager.test_model("x").await.is_err());
        assert!(matches!(
            manager.server_version().await,
            Err(ActionError::Failed { action: Action::Connect, .. })
        ));

        let (tx, _rx) = mpsc::unbounded_channel();
        match manager.install("x", tx).await {
            Err(ActionError::Failed { action: Action::Install, source }) => {
                assert!(source.is_unreachable())
            }
            other => panic!("Expected install failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_install_reports_cli_failure() {
        let cli = OllamaCli::with_program("llama-herder-no-such-binary", Duration::from_secs(5));
        let manager = ModelManager::new(Arc::new(FakeServer::offline()), Some(cli), "hi");

        let (tx, _rx) = mpsc::unbounded_channel();
        match manager.install("phi3:mini", tx).await {
            Err(ActionError::Failed { action: Action::Install, source: OllamaError::Cli(_) }) => {}
            other => panic!("Expected CLI failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_install_falls_back_to_cli() {
        let cli = OllamaCli::with_program("true", Duration::from_secs(5));
        let manager = ModelManager::new(Arc::new(FakeServer::offline()), Some(cli), "hi");

        let (tx, mut rx) = mpsc::unbounded_channel();
        let outcome = manager.install("phi3:mini", tx).await.unwrap();
        assert_eq!(outcome.model, "phi3:mini");
        assert_eq!(outcome.via, InstallChannel::Cli);
        // Listing is still offline, so the result cannot be confirmed
        assert!(matches!(outcome.verification, Verification::Unavailable(_)));

        let switched = rx.try_recv().unwrap();
        assert_eq!(switched.status, CLI_FALLBACK_STATUS);
        assert_eq!(switched.model, "phi3:mini");
    }

    #[tokio::test]
    async fn test_api_install_sends_no_fallback_status() {
        let cli = OllamaCli::with_program("llama-herder-no-such-binary", Duration::from_secs(5));
        let manager = ModelManager::new(Arc::new(FakeServer::default()), Some(cli), "hi");

        let (tx, mut rx) = mpsc::unbounded_channel();
        let outcome = manager.install("phi3:mini", tx).await.unwrap();
        assert_eq!(outcome.via, InstallChannel::Api);
        while let Ok(event) = rx.try_recv() {
            assert_ne!(event.status, CLI_FALLBACK_STATUS);
        }
    }

    #[test]
    fn test_action_error_kind() {
        assert_eq!(ActionError::NoSelection("remove").kind(), FailureKind::Input);
        let offline = ActionError::Failed {
            action: Action::Refresh,
            source: unreachable(),
        };
        assert_eq!(offline.kind(), FailureKind::Connectivity);
        let garbled = ActionError::Failed {
            action: Action::Show,
            source: OllamaError::Parse("expected value".to_string()),
        };
        assert_eq!(garbled.kind(), FailureKind::Parse);
    }

    #[tokio::test]
    async fn test_install_forwards_progress_and_verifies() {
        let manager = manager(FakeServer::default());
        let (tx, mut rx) = mpsc::unbounded_channel();

        let outcome = manager.install("phi3:mini", tx).await.unwrap();
        assert_eq!(outcome.via, InstallChannel::Api);
        assert_eq!(outcome.verification, Verification::Confirmed);

        let mut statuses = Vec::new();
        while let Ok(event) = rx.try_recv() {
            statuses.push(event.status);
        }
        assert_eq!(statuses, vec!["pulling manifest", "pulling abc", "success"]);
        assert_eq!(manager.installed().await, vec![model("phi3:mini")]);
    }

    #[tokio::test]
    async fn test_install_reports_missing_model() {
        let server = FakeServer {
            pull_loses_model: true,
            ..Default::default()
        };
        let manager = manager(server);
        let (tx, _rx) = mpsc::unbounded_channel();
        let outcome = manager.install("phi3:mini", tx).await.unwrap();
        assert_eq!(outcome.verification, Verification::Missing);
    }

    #[tokio::test]
    async fn test_install_rejects_empty_name() {
        let manager = manager(FakeServer::default());
        let (tx, _rx) = mpsc::unbounded_channel();
        match manager.install("  ", tx).await {
            Err(ActionError::Failed { source: OllamaError::InvalidModelName(_), .. }) => {}
            other => panic!("Expected invalid name, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_model_report() {
        let manager = manager(FakeServer::with_models(&["llama3.2:1b"]));
        let report = manager.test_model("llama3.2:1b").await.unwrap();
        assert_eq!(
            report.render(),
            "Test Prompt: Please say hello\n\nModel Response:\nllama3.2:1b says: please say hello"
        );

        let empty = TestReport {
            model: "m".into(),
            prompt: "p".into(),
            response: "  ".into(),
        };
        assert!(empty.render().ends_with("No response received"));
    }

    #[test]
    fn test_require_selection() {
        assert_eq!(require_selection(Some(" mistral:7b "), "remove").unwrap(), "mistral:7b");
        let err = require_selection(None, "remove").unwrap_err();
        assert_eq!(err.to_string(), "Please select a model to remove.");
        assert!(require_selection(Some(""), "test").is_err());
    }
}
