//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use relaylog::config::LoggerConfig;
use relaylog::sink::MemorySink;
use relaylog::Logger;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "123456:test-token";
pub const CHAT_ID: i64 = -1001234;

#[allow(dead_code)]
pub fn send_message_path() -> String {
    format!("/bot{}/sendMessage", TOKEN)
}

/// Configuration with credentials pointing at `api_base`.
pub fn notifying_config(api_base: &str) -> LoggerConfig {
    LoggerConfig {
        chat_id: Some(CHAT_ID),
        bot_token: Some(TOKEN.to_string()),
        api_base: api_base.to_string(),
        request_timeout_secs: Some(5),
        ..Default::default()
    }
}

/// Logger writing into a fresh memory sink.
#[allow(dead_code)]
pub fn memory_logger(config: LoggerConfig) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    (Logger::with_sink(config, sink.clone()), sink)
}

/// Mount a `sendMessage` mock answering with `status` and `body`, expecting
/// exactly `calls` requests.
#[allow(dead_code)]
pub async fn mount_send_message(server: &MockServer, status: u16, body: Value, calls: u64) {
    Mock::given(method("POST"))
        .and(path(send_message_path()))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(calls)
        .mount(server)
        .await;
}

#[allow(dead_code)]
pub fn ok_response() -> Value {
    json!({"ok": true, "result": {"message_id": 1}})
}

/// JSON bodies of every request the mock server received.
#[allow(dead_code)]
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| serde_json::from_slice(&req.body).unwrap())
        .collect()
}

/// Start a backend that answers every connection with raw `response` bytes.
///
/// Used to feed the client responses no well-behaved HTTP server produces.
#[allow(dead_code)]
pub async fn start_raw_backend(response: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
