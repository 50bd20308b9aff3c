//! Canned HTTP responder for adapter tests.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// Serves the same response to every request on a loopback port.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Start answering with `status` and a JSON `body`.
    pub fn serve(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let address = listener.local_addr().expect("local address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                answer(stream, &response, &recorded);
            }
        });

        Self {
            base_url: format!("http://{address}"),
            requests,
        }
    }

    /// Base URL to hand to an adapter.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request lines received so far, e.g. `GET /search?q=... HTTP/1.1`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log").clone()
    }
}

fn answer(mut stream: TcpStream, response: &str, recorded: &Mutex<Vec<String>>) {
    let mut head = Vec::new();
    let mut chunk = [0_u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(read) => head.extend_from_slice(chunk.get(..read).unwrap_or_default()),
        }
    }
    let text = String::from_utf8_lossy(&head);
    if let Some(line) = text.lines().next() {
        recorded.lock().expect("request log").push(line.to_owned());
    }
    if stream.write_all(response.as_bytes()).is_ok() {
        stream.flush().ok();
    }
}
