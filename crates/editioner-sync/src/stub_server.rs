//! Local HTTP/1.1 server with canned responses, for exercising the clients.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub(crate) struct StubServer {
    listener: TcpListener,
    /// Base URL, e.g. `http://127.0.0.1:40123`.
    pub(crate) url: String,
}

impl StubServer {
    pub(crate) async fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        Self { listener, url }
    }

    /// Answer one connection per `(status, body)`, in order, closing each
    /// after the response. Resolves to the request lines received.
    pub(crate) fn serve(self, responses: Vec<(u16, String)>) -> JoinHandle<Vec<String>> {
        tokio::spawn(async move {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = self.listener.accept().await.unwrap();

                let mut head = Vec::new();
                let mut chunk = [0u8; 1024];
                while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = socket.read(&mut chunk).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    head.extend_from_slice(&chunk[..n]);
                }
                let head = String::from_utf8_lossy(&head);
                requests.push(head.lines().next().unwrap_or_default().to_string());

                let response = format!(
                    "HTTP/1.1 {status} Stub\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
            }
            requests
        })
    }
}
