//! HTTP client for the Ollama REST API

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::mpsc::UnboundedSender;

use super::error::OllamaError;
use super::stream::NdjsonDecoder;
use super::ModelService;
use crate::types::config::HerderConfig;
use crate::types::model::{InstalledModel, ModelDetail};
use crate::types::pull::PullProgress;

/// `/api/tags` response
#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Option<Vec<InstalledModel>>,
}

/// `/api/version` response
#[derive(Debug, Deserialize)]
struct VersionResponse {
    version: String,
}

/// `/api/generate` response with `stream: false`
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// One line of the `/api/pull` stream
#[derive(Debug, Deserialize)]
struct PullLine {
    #[serde(default)]
    status: String,
    #[serde(default)]
    digest: Option<String>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    completed: Option<u64>,
    #[serde(default)]
    error: Option<String>,
}

/// Error body returned by Ollama on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Reject empty model names before any request is made
pub fn validate_model_name(name: &str) -> Result<&str, OllamaError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(OllamaError::InvalidModelName(
            "Model name cannot be empty".to_string(),
        ))
    } else {
        Ok(trimmed)
    }
}

/// Client for one Ollama server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    config: HerderConfig,
}

impl OllamaClient {
    pub fn new(mut config: HerderConfig) -> Result<Self, OllamaError> {
        config.validate();

        let client = Client::builder()
            .connect_timeout(config.pull_connect_timeout())
            .build()
            .map_err(|e| OllamaError::Connection {
                url: config.base_url.clone(),
                reason: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    async fn send(&self, request: RequestBuilder, timeout: Option<Duration>) -> Result<Response, OllamaError> {
        let request = match timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };
        request
            .send()
            .await
            .map_err(|e| OllamaError::from_reqwest(&self.config.base_url, e))
    }

    /// Turn a non-success response into an error, keeping the server's message
    async fn check(&self, response: Response, model: Option<&str>) -> Result<Response, OllamaError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("Could not read error body ({}): {}", status, e);
                String::new()
            }
        };
        let body = serde_json::from_str::<ErrorBody>(&text)
            .map(|b| b.error)
            .unwrap_or(text);

        match (status, model) {
            (StatusCode::NOT_FOUND, Some(model)) => {
                Err(OllamaError::ModelNotFound(model.to_string()))
            }
            _ => Err(OllamaError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }

    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, OllamaError> {
        let bytes = response
            .bytes()
            .await
            .map_err(|e| OllamaError::from_reqwest(&self.config.base_url, e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn stalled(&self) -> OllamaError {
        OllamaError::Stalled(self.config.stall_timeout_secs)
    }
}

#[async_trait]
impl ModelService for OllamaClient {
    async fn list_models(&self) -> Result<Vec<InstalledModel>, OllamaError> {
        tracing::debug!("Listing installed models");

        let request = self.client.get(self.url("/api/tags"));
        let response = self.send(request, Some(self.config.request_timeout())).await?;
        let response = self.check(response, None).await?;
        let tags: TagsResponse = self.read_json(response).await?;

        let mut seen = HashSet::new();
        let models: Vec<InstalledModel> = tags
            .models
            .unwrap_or_default()
            .into_iter()
            .filter(|m| {
                let fresh = seen.insert(m.name.clone());
                if !fresh {
                    tracing::warn!("Duplicate model in listing: {}", m.name);
                }
                fresh
            })
            .collect();

        tracing::debug!("Listed {} models", models.len());
        Ok(models)
    }

    async fn show_model(&self, name: &str) -> Result<ModelDetail, OllamaError> {
        let name = validate_model_name(name)?;
        tracing::debug!("Showing model: {}", name);

        let request = self
            .client
            .post(self.url("/api/show"))
            .json(&serde_json::json!({ "model": name }));
        let response = self.send(request, Some(self.config.request_timeout())).await?;
        let response = self.check(response, Some(name)).await?;
        self.read_json(response).await
    }

    async fn delete_model(&self, name: &str) -> Result<(), OllamaError> {
        let name = validate_model_name(name)?;
        tracing::debug!("Deleting model: {}", name);

        let request = self
            .client
            .delete(self.url("/api/delete"))
            .json(&serde_json::json!({ "model": name }));
        let response = self.send(request, Some(self.config.delete_timeout())).await?;
        self.check(response, Some(name)).await?;

        tracing::info!("Deleted model: {}", name);
        Ok(())
    }

    async fn pull_model(
        &self,
        name: &str,
        progress: UnboundedSender<PullProgress>,
    ) -> Result<(), OllamaError> {
        let name = validate_model_name(name)?;
        tracing::debug!("Pulling model: {}", name);

        let request = self
            .client
            .post(self.url("/api/pull"))
            .json(&serde_json::json!({ "model": name, "stream": true }));
        let response = self.send(request, None).await?;
        let mut response = self.check(response, None).await?;

        let stall = self.config.stall_timeout();
        let mut decoder = NdjsonDecoder::new();
        let mut succeeded = false;

        loop {
            let chunk = tokio::time::timeout(stall, response.chunk())
                .await
                .map_err(|_| self.stalled())?
                .map_err(|e| OllamaError::from_reqwest(&self.config.base_url, e))?;

            let lines: Vec<Result<PullLine, serde_json::Error>> = match &chunk {
                Some(bytes) => decoder.push(bytes),
                None => decoder.finish().into_iter().collect(),
            };

            for line in lines {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!("Skipping unreadable pull line: {}", e);
                        continue;
                    }
                };

                if let Some(message) = line.error {
                    tracing::error!("Pull of {} failed: {}", name, message);
                    return Err(OllamaError::PullFailed(message));
                }

                let event = PullProgress {
                    model: name.to_string(),
                    status: line.status,
                    digest: line.digest,
                    total: line.total,
                    completed: line.completed,
                };
                succeeded |= event.is_success();
                if progress.send(event).is_err() {
                    tracing::debug!("Progress receiver dropped for {}", name);
                }
            }

            if chunk.is_none() || succeeded {
                break;
            }
        }

        if succeeded {
            tracing::info!("Pulled model: {}", name);
            Ok(())
        } else {
            Err(OllamaError::PullFailed(
                "stream ended before the pull completed".to_string(),
            ))
        }
    }

    async fn generate(&self, name: &str, prompt: &str) -> Result<String, OllamaError> {
        let name = validate_model_name(name)?;
        tracing::debug!("Testing model: {}", name);

        let request = self.client.post(self.url("/api/generate")).json(&serde_json::json!({
            "model": name,
            "prompt": prompt,
            "stream": false,
        }));
        let response = self.send(request, Some(self.config.generate_timeout())).await?;
        let response = self.check(response, Some(name)).await?;
        let generated: GenerateResponse = self.read_json(response).await?;
        Ok(generated.response)
    }

    async fn version(&self) -> Result<String, OllamaError> {
        let request = self.client.get(self.url("/api/version"));
        let response = self.send(request, Some(self.config.probe_timeout())).await?;
        let response = self.check(response, None).await?;
        let version: VersionResponse = self.read_json(response).await?;
        Ok(version.version)
    }
}
