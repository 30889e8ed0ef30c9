//! Pull progress types
//!
//! One event of the `/api/pull` progress stream, plus the coarse stage it
//! belongs to.

use serde::{Deserialize, Serialize};

/// Phase of a model pull, derived from the status text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PullStage {
    /// Fetching the manifest
    Manifest,
    /// Transferring a layer
    Downloading,
    /// Checking layer digests
    Verifying,
    /// Writing the manifest to disk
    WritingManifest,
    /// Removing layers no longer referenced
    Cleanup,
    /// Pull complete
    Success,
    /// Any status the server adds later
    Other(String),
}

impl PullStage {
    pub fn from_status(status: &str) -> Self {
        let status = status.trim();
        match status {
            "pulling manifest" => PullStage::Manifest,
            "verifying sha256 digest" => PullStage::Verifying,
            "writing manifest" => PullStage::WritingManifest,
            "removing any unused layers" | "removing unused layers" => PullStage::Cleanup,
            "success" => PullStage::Success,
            s if s.starts_with("pulling ") || s.starts_with("downloading") => {
                PullStage::Downloading
            }
            other => PullStage::Other(other.to_string()),
        }
    }

    /// Fixed progress shown for phases that carry no byte counts
    pub fn nominal_percentage(&self) -> Option<f64> {
        match self {
            PullStage::Manifest => Some(5.0),
            PullStage::Verifying => Some(95.0),
            PullStage::WritingManifest => Some(98.0),
            PullStage::Cleanup => Some(99.0),
            PullStage::Success => Some(100.0),
            PullStage::Downloading | PullStage::Other(_) => None,
        }
    }

    /// Short label for the progress bar
    pub fn label(&self) -> &str {
        match self {
            PullStage::Manifest => "Getting manifest",
            PullStage::Downloading => "Downloading",
            PullStage::Verifying => "Verifying download",
            PullStage::WritingManifest => "Writing manifest",
            PullStage::Cleanup => "Cleaning up",
            PullStage::Success => "Download complete!",
            PullStage::Other(status) => status,
        }
    }
}

/// Progress information for one pull stream event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullProgress {
    /// Model being pulled
    pub model: String,
    /// Raw status text from the server
    pub status: String,
    /// Layer digest, when the event concerns a layer
    pub digest: Option<String>,
    /// Total bytes of the current layer
    pub total: Option<u64>,
    /// Bytes of the current layer received so far
    pub completed: Option<u64>,
}

impl PullProgress {
    pub fn stage(&self) -> PullStage {
        PullStage::from_status(&self.status)
    }

    /// Progress percentage (0-100)
    ///
    /// Byte counts win when present; otherwise the stage's nominal value.
    pub fn percentage(&self) -> Option<f64> {
        match (self.total, self.completed) {
            (Some(total), Some(completed)) if total > 0 => {
                Some((completed as f64 / total as f64 * 100.0).min(100.0))
            }
            _ => self.stage().nominal_percentage(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.stage() == PullStage::Success
    }
}
