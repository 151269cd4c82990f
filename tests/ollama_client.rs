//! HTTP tests for the Ollama client
//!
//! Each test serves exactly one canned HTTP response from a local socket.

use cah_ollama::{
    client::{CompletionClient, OllamaClient},
    CahError, Result,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one response, returning the base URL and a handle yielding the raw request
async fn serve_once(status: &'static str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/x-ndjson\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        request
    });

    (format!("http://{addr}/api"), handle)
}

/// Read headers plus a content-length body
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + content_length {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[tokio::test]
async fn test_list_models_filters_default() -> Result<()> {
    let (base, server) = serve_once(
        "200 OK",
        r#"{"models":[{"name":"default"},{"name":"qwen3:8b","size":1},{"name":"llama3"}]}"#,
    )
    .await;
    let client = OllamaClient::new(base, None)?;

    let models = client.list_models().await?;
    assert_eq!(models, vec!["qwen3:8b".to_string(), "llama3".to_string()]);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/tags "), "{request}");
    Ok(())
}

#[tokio::test]
async fn test_list_models_only_default_is_no_models() -> Result<()> {
    let (base, _server) = serve_once("200 OK", r#"{"models":[{"name":"default"}]}"#).await;
    let client = OllamaClient::new(base, None)?;

    let err = client.list_models().await.unwrap_err();
    assert!(matches!(err, CahError::NoModelsAvailable));
    assert!(err.is_fatal());
    Ok(())
}

#[tokio::test]
async fn test_list_models_error_status() -> Result<()> {
    let (base, _server) = serve_once("500 Internal Server Error", "boom").await;
    let client = OllamaClient::new(base, None)?;

    let err = client.list_models().await.unwrap_err();
    assert!(matches!(err, CahError::EndpointUnreachable(_)), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint() -> Result<()> {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = OllamaClient::new(format!("http://{addr}/api"), None)?;
    let err = client.list_models().await.unwrap_err();
    assert!(matches!(err, CahError::EndpointUnreachable(_)), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn test_complete_reassembles_stream() -> Result<()> {
    let body = concat!(
        "{\"model\":\"m\",\"response\":\"Thinking... \",\"done\":false}\n",
        "garbage line\n",
        "{\"model\":\"m\",\"response\":\"{\\\"card\\\": \",\"done\":false}\n",
        "{\"model\":\"m\",\"response\":\"\\\"Decaf\\\"}\",\"done\":false}\n",
        "{\"model\":\"m\",\"done\":true}\n",
    );
    let (base, server) = serve_once("200 OK", body).await;
    let client = OllamaClient::new(base, None)?;

    let text = client.complete("m", "Pick a card").await?;
    assert_eq!(text, "Thinking... {\"card\": \"Decaf\"}");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/generate "), "{request}");
    let (_, json_body) = request.split_once("\r\n\r\n").unwrap();
    let sent: serde_json::Value = serde_json::from_str(json_body).unwrap();
    assert_eq!(sent, serde_json::json!({"model": "m", "prompt": "Pick a card"}));
    Ok(())
}

#[tokio::test]
async fn test_complete_json_extracts_trailing_object() -> Result<()> {
    let body = "{\"response\":\"chatter {\\\"a\\\":1} more {\\\"card\\\":\\\"Foo\\\"}\"}\n";
    let (base, _server) = serve_once("200 OK", body).await;
    let client = OllamaClient::new(base, None)?;

    let object = client.complete_json("m", "p").await?.unwrap();
    assert_eq!(object["card"], "Foo");
    assert!(object.get("a").is_none());
    Ok(())
}

#[tokio::test]
async fn test_complete_error_status() -> Result<()> {
    let (base, _server) = serve_once("404 Not Found", "{\"error\":\"model not found\"}").await;
    let client = OllamaClient::new(base, None)?;

    let err = client.complete("missing", "p").await.unwrap_err();
    match err {
        CahError::EndpointUnreachable(message) => assert!(message.contains("404"), "{message}"),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}
