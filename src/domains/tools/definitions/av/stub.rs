//! In-process stand-in for the upstream provider, used by tests.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// What the stub sends back for every request.
#[derive(Debug, Clone)]
pub struct StubReply {
    status: u16,
    body: String,
    declared_length: usize,
    hang_up: bool,
}

impl StubReply {
    /// `200 OK` with `body`.
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    /// Arbitrary status with `body`.
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            declared_length: body.len(),
            hang_up: false,
        }
    }

    /// `200 OK` announcing `declared_length` bytes but closing after `body`.
    pub fn truncated(body: &str, declared_length: usize) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            declared_length,
            hang_up: false,
        }
    }

    /// Read the request, then close the connection without replying.
    pub fn hang_up() -> Self {
        Self {
            status: 200,
            body: String::new(),
            declared_length: 0,
            hang_up: true,
        }
    }

    fn render(&self) -> String {
        format!(
            "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status, self.declared_length, self.body
        )
    }
}

/// A local HTTP server that records request lines and replies with a
/// fixed [`StubReply`].
pub struct StubUpstream {
    /// Query endpoint to hand to the client under test.
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubUpstream {
    /// Bind to an ephemeral local port and serve `reply` to every request.
    pub async fn start(reply: StubReply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut head = Vec::new();
                let mut buf = [0u8; 1024];
                loop {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            head.extend_from_slice(&buf[..n]);
                            if head.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                    }
                }

                let head = String::from_utf8_lossy(&head);
                let request_line = head.lines().next().unwrap_or_default().to_string();
                recorded.lock().unwrap().push(request_line);

                if !reply.hang_up {
                    let _ = socket.write_all(reply.render().as_bytes()).await;
                }
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{}/query", addr),
            requests,
        }
    }

    /// Request lines received so far, e.g. `GET /query?... HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// A query endpoint on a local port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/query", addr)
}
