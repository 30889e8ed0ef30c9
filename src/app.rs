//! Root Dioxus application component
//!
//! This module contains the App component and the shared state every panel
//! reads from. User actions live here as methods so the panels only wire
//! buttons to them; each one runs its network call on a background task and
//! writes the result back into signals.

use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::mpsc;

use crate::catalog::{CatalogEntry, SortState};
use crate::manager::{
    require_selection, ActionError, InstallChannel, InstallOutcome, ModelManager, RefreshOutcome, Verification,
};
use crate::ollama::{DownloadSnapshot, DownloadTracker, FailureKind};
use crate::types::model::InstalledModel;
use crate::types::pull::PullStage;
use crate::ui::Layout;

/// Product name, used for the window and the page header
pub const APP_TITLE: &str = "Llama Herder";

/// Reachability of the Ollama server, as last observed
#[derive(Clone, PartialEq, Debug)]
pub enum ServerState {
    Unknown,
    Online(String),
    Offline(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Modal message box
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Notice for a failed action, titled by what went wrong
    pub fn failure(err: &ActionError) -> Self {
        let (level, title) = match err.kind() {
            FailureKind::Connectivity => (NoticeLevel::Error, "Connection Error"),
            FailureKind::Request => (NoticeLevel::Error, "Error"),
            FailureKind::Parse => (NoticeLevel::Error, "Unexpected Response"),
            FailureKind::Input => (NoticeLevel::Warning, "Invalid Input"),
        };
        Self::new(level, title, err.to_string())
    }
}

/// Action awaiting a yes/no answer
#[derive(Clone, PartialEq, Debug)]
pub enum PendingAction {
    Remove(String),
    Install(String),
}

impl PendingAction {
    pub fn title(&self) -> &'static str {
        match self {
            PendingAction::Remove(_) => "Confirm Deletion",
            PendingAction::Install(_) => "Confirm Installation",
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            PendingAction::Remove(name) => format!(
                "Are you sure you want to remove '{}'?\n\nThis action cannot be undone.",
                name
            ),
            PendingAction::Install(name) => format!(
                "Are you sure you want to install '{}'?\n\n\
                 This may take several minutes depending on your internet connection.",
                name
            ),
        }
    }
}

/// What the download area shows while a pull runs
#[derive(Clone, PartialEq, Debug)]
pub struct DownloadView {
    pub model: String,
    pub percent: f64,
    /// Short text next to the bar
    pub label: String,
    /// Longer line under the bar
    pub detail: String,
}

impl DownloadView {
    pub fn starting(model: &str) -> Self {
        Self {
            model: model.to_string(),
            percent: 0.0,
            label: String::new(),
            detail: format!("Preparing to download {}...", model),
        }
    }

    pub fn update(&mut self, snapshot: &DownloadSnapshot) {
        let model = &self.model;
        let bytes = snapshot.bytes_label();

        self.detail = match &snapshot.stage {
            PullStage::Manifest => format!("Downloading manifest for {}...", model),
            PullStage::Downloading => match &bytes {
                Some(bytes) => {
                    let rate = snapshot
                        .rate_label()
                        .map(|r| format!(" {}", r))
                        .unwrap_or_default();
                    format!("Downloading {}: {}{}", model, bytes, rate)
                }
                None => format!("Downloading {}...", model),
            },
            PullStage::Verifying => format!("Verifying {}...", model),
            PullStage::WritingManifest => format!("Finalizing {}...", model),
            PullStage::Cleanup => format!("Cleaning up {}...", model),
            PullStage::Success => format!("Successfully installed {}!", model),
            PullStage::Other(status) => status.clone(),
        };

        self.label = bytes.unwrap_or_else(|| snapshot.stage.label().to_string());

        self.percent = match (snapshot.percent, &snapshot.stage) {
            (Some(percent), _) => percent,
            (None, PullStage::Downloading) => self.percent.max(10.0),
            (None, _) => self.percent,
        };
    }
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<ModelManager>,
    pub installed: Signal<Vec<InstalledModel>>,
    pub selected_installed: Signal<Option<String>>,
    pub model_info: Signal<String>,
    pub test_results: Signal<String>,
    pub search: Signal<String>,
    pub sort: Signal<SortState>,
    pub selected_available: Signal<Option<&'static CatalogEntry>>,
    pub download: Signal<Option<DownloadView>>,
    pub status: Signal<String>,
    pub server: Signal<ServerState>,
    pub pending: Signal<Option<PendingAction>>,
    pub notice: Signal<Option<Notice>>,
}

impl AppState {
    pub fn new(manager: Arc<ModelManager>) -> Self {
        tracing::info!("AppState initialized");
        Self {
            manager,
            installed: Signal::new(Vec::new()),
            selected_installed: Signal::new(None),
            model_info: Signal::new(String::new()),
            test_results: Signal::new(String::new()),
            search: Signal::new(String::new()),
            sort: Signal::new(SortState::default()),
            selected_available: Signal::new(None),
            download: Signal::new(None),
            status: Signal::new("Ready".to_string()),
            server: Signal::new(ServerState::Unknown),
            pending: Signal::new(None),
            notice: Signal::new(None),
        }
    }

    fn apply_listing(&mut self, models: Vec<InstalledModel>) {
        let selected = self.selected_installed.read().clone();
        let still_listed = selected
            .map(|name| models.iter().any(|m| m.name == name))
            .unwrap_or(true);
        if !still_listed {
            self.selected_installed.set(None);
            self.model_info.set(String::new());
            self.test_results.set(String::new());
        }
        self.installed.set(models);
    }

    /// Probe the server and record its version
    pub fn check_server(&self) {
        let mut state = self.clone();
        spawn(async move {
            match state.manager.server_version().await {
                Ok(version) => state.server.set(ServerState::Online(version)),
                Err(e) => state.server.set(ServerState::Offline(e.to_string())),
            }
        });
    }

    pub fn refresh_installed(&self) {
        let mut state = self.clone();
        state.status.set("Refreshing installed models...".to_string());
        spawn(async move {
            match state.manager.refresh().await {
                Ok(RefreshOutcome::Applied(models)) => {
                    state
                        .status
                        .set(format!("Found {} installed models", models.len()));
                    if !matches!(*state.server.read(), ServerState::Online(_)) {
                        state.check_server();
                    }
                    state.apply_listing(models);
                }
                Ok(RefreshOutcome::Superseded) => {}
                Err(e) => {
                    if e.kind() == FailureKind::Connectivity {
                        state.server.set(ServerState::Offline(e.to_string()));
                    }
                    state.status.set(format!("Error: {}", e));
                }
            }
        });
    }

    pub fn select_installed(&self, name: String) {
        let mut state = self.clone();
        let model = state
            .installed
            .read()
            .iter()
            .find(|m| m.name == name)
            .cloned();
        let Some(model) = model else {
            return;
        };

        let summary = model.summary();
        state.selected_installed.set(Some(name.clone()));
        state.model_info.set(summary.clone());
        state
            .test_results
            .set("Select 'Test Model' to verify this model is working.".to_string());

        spawn(async move {
            match state.manager.show(&name).await {
                Ok(detail) => {
                    let extra = detail.summary();
                    let still_selected = state.selected_installed.read().as_deref() == Some(name.as_str());
                    if still_selected && !extra.is_empty() {
                        state.model_info.set(format!("{}\n{}", summary, extra));
                    }
                }
                Err(e) => tracing::debug!("No extended details for {}: {}", name, e),
            }
        });
    }

    fn selection_or_warn(&self, verb: &'static str) -> Option<String> {
        let selected = self.selected_installed.read().clone();
        match require_selection(selected.as_deref(), verb) {
            Ok(name) => Some(name.to_string()),
            Err(e) => {
                let mut notice = self.notice;
                notice.set(Some(Notice::new(NoticeLevel::Warning, "No Selection", e.to_string())));
                None
            }
        }
    }

    pub fn request_remove(&self) {
        if let Some(name) = self.selection_or_warn("remove") {
            let mut pending = self.pending;
            pending.set(Some(PendingAction::Remove(name)));
        }
    }

    pub fn request_install(&self) {
        if self.download.read().is_some() {
            let mut notice = self.notice;
            notice.set(Some(Notice::new(
                NoticeLevel::Warning,
                "Download in Progress",
                "Please wait for the current download to complete.",
            )));
            return;
        }

        let selected = *self.selected_available.read();
        match require_selection(selected.map(|entry| entry.name), "install") {
            Ok(name) => {
                let mut pending = self.pending;
                pending.set(Some(PendingAction::Install(name.to_string())));
            }
            Err(e) => {
                let mut notice = self.notice;
                notice.set(Some(Notice::new(NoticeLevel::Warning, "No Selection", e.to_string())));
            }
        }
    }

    /// Run the action the user just confirmed
    pub fn confirm(&self, action: PendingAction) {
        let mut pending = self.pending;
        pending.set(None);
        match action {
            PendingAction::Remove(name) => self.remove(name),
            PendingAction::Install(name) => self.install(name),
        }
    }

    fn remove(&self, name: String) {
        let mut state = self.clone();
        state.status.set(format!("Removing {}...", name));
        spawn(async move {
            match state.manager.remove(&name).await {
                Ok(outcome) => {
                    state.status.set(format!("Successfully removed {}", name));
                    if let RefreshOutcome::Applied(models) = outcome {
                        state.apply_listing(models);
                    }
                }
                Err(e) => {
                    state.status.set(e.to_string());
                    state.notice.set(Some(Notice::failure(&e)));
                }
            }
        });
    }

    pub fn test_selected(&self) {
        let Some(name) = self.selection_or_warn("test") else {
            return;
        };

        let mut state = self.clone();
        state
            .test_results
            .set("Testing model... Please wait.".to_string());
        state.status.set(format!("Testing {}...", name));

        spawn(async move {
            match state.manager.test_model(&name).await {
                Ok(report) => {
                    state.test_results.set(report.render());
                    state.status.set(format!("Test completed for {}", name));
                }
                Err(e) => {
                    state.test_results.set(format!("Test failed: {}", e));
                    state.status.set(format!("Test failed for {}", name));
                }
            }
        });
    }

    fn install(&self, name: String) {
        let mut state = self.clone();
        state.download.set(Some(DownloadView::starting(&name)));
        state
            .status
            .set(format!("Starting download of {}...", name));

        spawn(async move {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let manager = state.manager.clone();
            let model = name.clone();
            let worker = tokio::spawn(async move { manager.install(&model, tx).await });

            let mut tracker = DownloadTracker::new();
            while let Some(progress) = rx.recv().await {
                let snapshot = tracker.observe(&progress);
                let mut view = state
                    .download
                    .read()
                    .clone()
                    .unwrap_or_else(|| DownloadView::starting(&name));
                view.update(&snapshot);
                state.status.set(view.detail.clone());
                state.download.set(Some(view));
            }

            let result = worker.await;
            state.download.set(None);
            match result {
                Ok(Ok(outcome)) => {
                    let listing = state.manager.installed().await;
                    state.apply_listing(listing);
                    state.report_install(outcome);
                }
                Ok(Err(e)) => {
                    state.status.set(e.to_string());
                    state.notice.set(Some(Notice::failure(&e)));
                }
                Err(e) => {
                    tracing::error!("Download task for {} ended unexpectedly: {}", name, e);
                    let message = format!("Download task ended unexpectedly: {}", e);
                    state.status.set(message.clone());
                    state
                        .notice
                        .set(Some(Notice::new(NoticeLevel::Error, "Error", message)));
                }
            }
        });
    }

    fn report_install(&mut self, outcome: InstallOutcome) {
        let name = &outcome.model;
        let via = match outcome.via {
            InstallChannel::Api => "",
            InstallChannel::Cli => " via CLI",
        };
        self.status
            .set(format!("Successfully installed {}{}", name, via));

        let notice = match outcome.verification {
            Verification::Confirmed => Notice::new(
                NoticeLevel::Info,
                "Success",
                format!("Model '{}' installed successfully and verified!", name),
            ),
            Verification::Missing => Notice::new(
                NoticeLevel::Warning,
                "Installation Warning",
                format!(
                    "Model '{}' download completed but may not be properly installed.\n\
                     Please check your Ollama installation and try again.",
                    name
                ),
            ),
            Verification::Unavailable(reason) => Notice::new(
                NoticeLevel::Warning,
                "Verification Error",
                format!(
                    "Could not verify installation: {}\n\
                     Please check the installed models list manually.",
                    reason
                ),
            ),
        };
        self.notice.set(Some(notice));
    }
}

#[component]
pub fn App() -> Element {
    let manager = use_context::<Arc<ModelManager>>();
    let app_state = use_context_provider(|| AppState::new(manager));

    use_effect(move || {
        app_state.check_server();
        app_state.refresh_installed();
    });

    rsx! {
        Layout {}
    }
}
