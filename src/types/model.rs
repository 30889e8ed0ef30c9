//! Model types
//!
//! Records describing models installed on the Ollama server.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A model present in the server's local library (`/api/tags`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstalledModel {
    /// Model name including tag, e.g. `llama3.2:latest`
    pub name: String,
    /// Size on disk in bytes
    #[serde(default)]
    pub size: u64,
    /// When the model was last modified
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
    /// Manifest digest
    #[serde(default)]
    pub digest: String,
    /// Format and parameter metadata
    #[serde(default)]
    pub details: ModelDetails,
}

/// Format and parameter metadata reported by the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDetails {
    #[serde(default)]
    pub parent_model: String,
    /// Weight file format, usually `gguf`
    #[serde(default)]
    pub format: String,
    /// Architecture family, e.g. `llama`
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub families: Option<Vec<String>>,
    /// Parameter count label, e.g. `3.2B`
    #[serde(default)]
    pub parameter_size: String,
    /// Quantization label, e.g. `Q4_K_M`
    #[serde(default)]
    pub quantization_level: String,
}

/// Extended information about one model (`/api/show`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDetail {
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub modelfile: Option<String>,
    /// Runtime parameters, one `key value` pair per line
    #[serde(default)]
    pub parameters: Option<String>,
    /// Prompt template
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub system: Option<String>,
    #[serde(default)]
    pub details: ModelDetails,
    /// e.g. `completion`, `vision`, `tools`
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub modified_at: Option<DateTime<Utc>>,
}

impl InstalledModel {
    /// Size in mebibytes, as shown in the installed list
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / (1024.0 * 1024.0)
    }

    /// Label for the installed list: `name (123.4 MB)`
    pub fn list_label(&self) -> String {
        format!("{} ({:.1} MB)", self.name, self.size_mb())
    }

    /// First 16 characters of the digest
    pub fn short_digest(&self) -> &str {
        match self.digest.char_indices().nth(16) {
            Some((idx, _)) => &self.digest[..idx],
            None => &self.digest,
        }
    }

    /// Name without the tag, e.g. `llama3.2` for `llama3.2:latest`
    pub fn base_name(&self) -> &str {
        base_name(&self.name)
    }

    /// Multi-line summary for the information pane
    pub fn summary(&self) -> String {
        let modified = self
            .modified_at
            .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        let mut info = format!(
            "Name: {}\nSize: {:.1} MB\nModified: {}\nDigest: {}...\n",
            self.name,
            self.size_mb(),
            modified,
            or_unknown(self.short_digest()),
        );

        if self.details != ModelDetails::default() {
            info.push_str("\nDetails:\n");
            info.push_str(&format!("  Format: {}\n", or_unknown(&self.details.format)));
            info.push_str(&format!("  Family: {}\n", or_unknown(&self.details.family)));
            info.push_str(&format!(
                "  Parameters: {}\n",
                or_unknown(&self.details.parameter_size)
            ));
            info.push_str(&format!(
                "  Quantization: {}\n",
                or_unknown(&self.details.quantization_level)
            ));
        }

        info
    }
}

impl ModelDetail {
    /// Extra lines shown under the listing summary once `/api/show` returns
    pub fn summary(&self) -> String {
        let mut out = String::new();
        if !self.capabilities.is_empty() {
            out.push_str(&format!("Capabilities: {}\n", self.capabilities.join(", ")));
        }
        if let Some(parameters) = self.parameters.as_deref().filter(|p| !p.trim().is_empty()) {
            out.push_str("Parameters:\n");
            for line in parameters.lines().filter(|l| !l.trim().is_empty()) {
                out.push_str(&format!("  {}\n", line.split_whitespace().collect::<Vec<_>>().join(" ")));
            }
        }
        if let Some(license) = self.license.as_deref() {
            if let Some(first) = license.lines().find(|l| !l.trim().is_empty()) {
                out.push_str(&format!("License: {}\n", first.trim()));
            }
        }
        out
    }
}

/// Name without the `:tag` suffix
pub fn base_name(name: &str) -> &str {
    name.split(':').next().unwrap_or(name)
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "Unknown"
    } else {
        value
    }
}
