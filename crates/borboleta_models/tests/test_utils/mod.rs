//! Test utilities for the Gemini client.
//!
//! [`FakeGemini`] is a one-route HTTP server on localhost that answers every
//! request with a canned status and body, recording what it received.

use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request captured by [`FakeGemini`].
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// Request path, e.g. `/models/gemini-2.5-flash:generateContent`
    pub path: String,
    /// Header pairs with lowercased names
    pub headers: Vec<(String, String)>,
    /// Parsed JSON body
    pub body: serde_json::Value,
}

impl CapturedRequest {
    /// Value of the first header with the given (lowercase) name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Canned Gemini endpoint.
pub struct FakeGemini {
    /// Base URL to hand to the client as `api_base`
    pub base: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeGemini {
    /// Start a server answering every request with `status` and `body`.
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let body = body.into();

        let captured = Arc::clone(&requests);
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let captured = Arc::clone(&captured);
                let body = body.clone();
                tokio::spawn(answer(stream, status, body, captured));
            }
        });

        Self { base, requests }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn answer(
    mut stream: TcpStream,
    status: u16,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
) -> Option<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..read]);
        if let Some(pos) = buf.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let path = lines
        .next()?
        .split_whitespace()
        .nth(1)
        .unwrap_or_default()
        .to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_lowercase(), value.trim().to_string()))
        .collect();
    let content_length = headers
        .iter()
        .find(|(key, _)| key == "content-length")
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..read]);
    }

    let request_body = serde_json::from_slice(&buf[header_end..]).unwrap_or(serde_json::Value::Null);
    captured.lock().unwrap().push(CapturedRequest {
        path,
        headers,
        body: request_body,
    });

    let response = format!(
        "HTTP/1.1 {} Fake\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await.ok()?;
    stream.shutdown().await.ok()
}
