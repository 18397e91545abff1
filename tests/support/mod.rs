//! Minimal canned HTTP server for exercising the portal client.
//!
//! Serves a fixed list of responses on a loopback port, one connection per
//! response, and captures each request for assertions.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// One scripted response.
pub struct CannedResponse {
    status: u16,
    body: String,
}

impl CannedResponse {
    /// A JSON response with the given status.
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

/// A request as the server saw it.
pub struct CapturedRequest {
    /// First line, e.g. `POST /api/doctor-login HTTP/1.1`.
    pub request_line: String,
    /// Header lines, verbatim.
    pub headers: Vec<String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        let prefix = format!("{}:", name.to_ascii_lowercase());
        self.headers
            .iter()
            .find(|line| line.to_ascii_lowercase().starts_with(&prefix))
            .and_then(|line| line.split_once(':'))
            .map(|(_, value)| value.trim())
    }

    /// Body as lossy text, convenient for multipart assertions.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Loopback server handing out the scripted responses in order.
pub struct CannedServer {
    base_url: String,
    requests: Receiver<CapturedRequest>,
}

impl CannedServer {
    /// Bind a fresh port and serve `responses`, one connection each.
    pub fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback listener");
        let base_url = format!("http://{}", listener.local_addr().expect("listener addr"));
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for response in responses {
                let Ok((stream, _)) = listener.accept() else {
                    break;
                };
                if let Some(request) = serve_one(stream, &response) {
                    let _ = tx.send(request);
                }
            }
        });
        Self {
            base_url,
            requests: rx,
        }
    }

    /// Origin to point the client's `base_url` at.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Next captured request, waiting briefly for the worker.
    pub fn next_request(&self) -> CapturedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("request should have been captured")
    }
}

fn serve_one(stream: TcpStream, response: &CannedResponse) -> Option<CapturedRequest> {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    let mut headers = Vec::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end().to_string();
        if line.is_empty() {
            break;
        }
        if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
            content_length = value.trim().parse().unwrap_or(0);
        }
        headers.push(line);
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).ok()?;

    let mut stream = reader.into_inner();
    let payload = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason(response.status),
        response.body.len(),
        response.body
    );
    stream.write_all(payload.as_bytes()).ok()?;
    let _ = stream.flush();

    Some(CapturedRequest {
        request_line: request_line.trim_end().to_string(),
        headers,
        body,
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        500 => "Internal Server Error",
        _ => "OK",
    }
}
