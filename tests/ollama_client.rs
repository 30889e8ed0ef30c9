//! HTTP client tests against a mock Ollama server

use std::sync::Arc;
use std::time::{Duration, Instant};

use llama_herder::manager::{ModelManager, RefreshOutcome};
use llama_herder::ollama::{ModelService, OllamaClient, OllamaError};
use llama_herder::types::config::HerderConfig;
use llama_herder::types::pull::PullStage;
use mockito::Matcher;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

fn client_for(server: &mockito::Server) -> OllamaClient {
    OllamaClient::new(HerderConfig::with_base_url(server.url())).unwrap()
}

#[tokio::test]
async fn test_list_models_parses_tags() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/tags")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "models": [
                {
                    "name": "mistral:latest",
                    "modified_at": "2024-05-02T10:01:51.640937-07:00",
                    "size": 4109865159,
                    "digest": "2ae6f6dd7a3dd734790bbbf58b8909a606e0e7e97e94b7604e0aa7ae4490e6d8",
                    "details": {
                        "format": "gguf",
                        "family": "llama",
                        "families": ["llama"],
                        "parameter_size": "7.2B",
                        "quantization_level": "Q4_0"
                    }
                },
                {
                    "name": "mistral:latest",
                    "size": 1
                },
                {
                    "name": "gemma:2b",
                    "size": 1678447520
                }
            ]
        }"#,
        )
        .create_async()
        .await;

    let models = client_for(&server).list_models().await.unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].name, "mistral:latest");
    assert_eq!(models[0].size, 4109865159);
    assert_eq!(models[0].details.parameter_size, "7.2B");
    assert!(models[0].modified_at.is_some());
    assert_eq!(models[1].name, "gemma:2b");
    assert!(models[1].modified_at.is_none());
}

#[tokio::test]
async fn test_empty_installation_is_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let empty = server
        .mock("GET", "/api/tags")
        .with_status(200)
        .with_body(r#"{"models": []}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.list_models().await.unwrap().is_empty());

    empty.assert_async().await;
    empty.remove_async().await;

    let _missing = server
        .mock("GET", "/api/tags")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    assert!(client.list_models().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_show_model() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/show")
        .match_body(Matcher::Json(json!({ "model": "llama3.2:1b" })))
        .with_status(200)
        .with_body(
            r#"{
            "license": "LLAMA 3.2 COMMUNITY LICENSE AGREEMENT",
            "parameters": "stop \"<|eot_id|>\"",
            "template": "{{ .Prompt }}",
            "details": { "family": "llama", "parameter_size": "1.2B", "quantization_level": "Q8_0" },
            "capabilities": ["completion", "tools"]
        }"#,
        )
        .create_async()
        .await;

    let detail = client_for(&server).show_model("llama3.2:1b").await.unwrap();
    assert_eq!(detail.details.family, "llama");
    assert_eq!(detail.capabilities, vec!["completion", "tools"]);
    assert!(detail.summary().contains("completion, tools"));
}

#[tokio::test]
async fn test_delete_missing_model_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/api/delete")
        .match_body(Matcher::Json(json!({ "model": "ghost:latest" })))
        .with_status(404)
        .with_body(r#"{"error": "model 'ghost:latest' not found"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .delete_model("ghost:latest")
        .await
        .unwrap_err();
    assert!(matches!(err, OllamaError::ModelNotFound(ref name) if name == "ghost:latest"));
}

#[tokio::test]
async fn test_server_error_keeps_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/api/delete")
        .with_status(500)
        .with_body(r#"{"error": "disk is read-only"}"#)
        .create_async()
        .await;

    match client_for(&server).delete_model("mistral:7b").await {
        Err(OllamaError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "disk is read-only");
        }
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_truncated_error_body_still_reports_status() {
    // Promises a longer body than it sends, then hangs up
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await.unwrap();
        socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\n{\"err")
            .await
            .unwrap();
        socket.flush().await.unwrap();
    });

    let client = OllamaClient::new(HerderConfig::with_base_url(format!("http://{}", addr))).unwrap();
    match client.delete_model("mistral:7b").await {
        Err(OllamaError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.is_empty());
        }
        other => panic!("Expected status error, got {:?}", other),
    }

    server.await.unwrap();
}

#[tokio::test]
async fn test_delete_then_refresh_drops_model() {
    let mut server = mockito::Server::new_async().await;
    let _delete = server
        .mock("DELETE", "/api/delete")
        .with_status(200)
        .create_async()
        .await;
    let _tags = server
        .mock("GET", "/api/tags")
        .with_status(200)
        .with_body(r#"{"models": [{"name": "gemma:2b", "size": 10}]}"#)
        .create_async()
        .await;

    let manager = ModelManager::new(Arc::new(client_for(&server)), None, "Please say hello");
    match manager.remove("mistral:7b").await.unwrap() {
        RefreshOutcome::Applied(models) => {
            assert!(models.iter().all(|m| m.name != "mistral:7b"));
        }
        RefreshOutcome::Superseded => panic!("Expected applied listing"),
    }
}

#[tokio::test]
async fn test_pull_streams_progress_until_success() {
    let mut server = mockito::Server::new_async().await;
    let body = [
        r#"{"status":"pulling manifest"}"#,
        r#"{"status":"pulling 2ae6f6dd7a3d","digest":"sha256:2ae6f6dd7a3d","total":4109853248,"completed":0}"#,
        "not json",
        r#"{"status":"pulling 2ae6f6dd7a3d","digest":"sha256:2ae6f6dd7a3d","total":4109853248,"completed":4109853248}"#,
        r#"{"status":"verifying sha256 digest"}"#,
        r#"{"status":"writing manifest"}"#,
        r#"{"status":"success"}"#,
    ]
    .join("\n");
    let _mock = server
        .mock("POST", "/api/pull")
        .match_body(Matcher::PartialJson(json!({ "model": "mistral:7b", "stream": true })))
        .with_status(200)
        .with_header("content-type", "application/x-ndjson")
        .with_body(body)
        .create_async()
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    client_for(&server).pull_model("mistral:7b", tx).await.unwrap();

    let mut stages = Vec::new();
    while let Ok(event) = rx.try_recv() {
        assert_eq!(event.model, "mistral:7b");
        stages.push(event.stage());
    }
    assert_eq!(
        stages,
        vec![
            PullStage::Manifest,
            PullStage::Downloading,
            PullStage::Downloading,
            PullStage::Verifying,
            PullStage::WritingManifest,
            PullStage::Success,
        ]
    );
}

#[tokio::test]
async fn test_pull_error_line_fails() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/pull")
        .with_status(200)
        .with_body("{\"status\":\"pulling manifest\"}\n{\"error\":\"pull model manifest: file does not exist\"}\n")
        .create_async()
        .await;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let err = client_for(&server)
        .pull_model("nonexistent:latest", tx)
        .await
        .unwrap_err();

    assert!(matches!(err, OllamaError::PullFailed(ref m) if m.contains("file does not exist")));
    assert_eq!(rx.try_recv().unwrap().stage(), PullStage::Manifest);
}

#[tokio::test]
async fn test_pull_without_success_fails() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/pull")
        .with_status(200)
        .with_body("{\"status\":\"pulling manifest\"}\n{\"status\":\"verifying sha256 digest\"}")
        .create_async()
        .await;

    let (tx, _rx) = mpsc::unbounded_channel();
    let err = client_for(&server).pull_model("gemma:2b", tx).await.unwrap_err();
    assert!(matches!(err, OllamaError::PullFailed(_)));
}

#[tokio::test]
async fn test_pull_stalls_without_new_bytes() {
    // Server sends headers and one line, then goes quiet
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await.unwrap();

        let line = "{\"status\":\"pulling manifest\"}\n";
        let head = "HTTP/1.1 200 OK\r\n\
                    content-type: application/x-ndjson\r\n\
                    transfer-encoding: chunked\r\n\r\n";
        socket.write_all(head.as_bytes()).await.unwrap();
        socket
            .write_all(format!("{:x}\r\n{}\r\n", line.len(), line).as_bytes())
            .await
            .unwrap();
        socket.flush().await.unwrap();

        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(socket);
    });

    let config = HerderConfig {
        stall_timeout_secs: 1,
        ..HerderConfig::with_base_url(format!("http://{}", addr))
    };
    let client = OllamaClient::new(config).unwrap();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let started = Instant::now();
    let err = client.pull_model("mistral:7b", tx).await.unwrap_err();

    assert!(matches!(err, OllamaError::Stalled(1)));
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(rx.try_recv().unwrap().stage(), PullStage::Manifest);

    server.abort();
}

#[tokio::test]
async fn test_generate_and_version() {
    let mut server = mockito::Server::new_async().await;
    let _generate = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::Json(json!({
            "model": "gemma:2b",
            "prompt": "Please say hello",
            "stream": false
        })))
        .with_status(200)
        .with_body(r#"{"model":"gemma:2b","response":"Hello there!","done":true}"#)
        .create_async()
        .await;
    let _version = server
        .mock("GET", "/api/version")
        .with_status(200)
        .with_body(r#"{"version":"0.5.7"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(
        client.generate("gemma:2b", "Please say hello").await.unwrap(),
        "Hello there!"
    );
    assert_eq!(client.version().await.unwrap(), "0.5.7");
}

#[tokio::test]
async fn test_malformed_listing_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/tags")
        .with_status(200)
        .with_body("<html>proxy error</html>")
        .create_async()
        .await;

    let err = client_for(&server).list_models().await.unwrap_err();
    assert!(matches!(err, OllamaError::Parse(_)));
}

#[tokio::test]
async fn test_unreachable_server_errors_without_panic() {
    let client = OllamaClient::new(HerderConfig::with_base_url("http://127.0.0.1:1")).unwrap();

    let err = client.list_models().await.unwrap_err();
    assert!(err.is_unreachable());
    assert!(err.to_string().contains("make sure it's running"));

    assert!(client.show_model("x").await.is_err());
    assert!(client.delete_model("x").await.is_err());
    assert!(client.version().await.is_err());

    let (tx, _rx) = mpsc::unbounded_channel();
    assert!(client.pull_model("x", tx).await.unwrap_err().is_unreachable());
}
