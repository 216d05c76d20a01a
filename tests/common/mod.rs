//! Common test utilities for integration tests

use async_trait::async_trait;
use noon_menu::config::ResolvedConfig;
use noon_menu::downloader::LinkSource;
use noon_menu::errors::AppResult;
use noon_menu::models::CandidateLink;
use noon_menu::viewer::ViewerBackend;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A one-shot HTTP server on a random local port.
#[allow(dead_code)]
pub struct OneShotServer {
    pub base_url: String,
    /// Connections accepted so far (0 or 1).
    pub hits: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl OneShotServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serves a single PDF response.
#[allow(dead_code)]
pub async fn serve_once(status_line: &'static str, body: Vec<u8>) -> OneShotServer {
    serve_once_as(status_line, "application/pdf", body).await
}

/// Serves a single HTTP response with the given content type.
///
/// The body is written in 1000-byte pieces so the client sees several chunks.
#[allow(dead_code)]
pub async fn serve_once_as(
    status_line: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
) -> OneShotServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let task_hits = hits.clone();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        task_hits.fetch_add(1, Ordering::SeqCst);

        // Read the request head; the body of a GET is empty
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let head = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        for piece in body.chunks(1000) {
            socket.write_all(piece).await.unwrap();
        }
        socket.shutdown().await.ok();
    });

    OneShotServer {
        base_url: format!("http://{addr}"),
        hits,
    }
}

/// Client that never goes through a proxy, so local test servers are reachable.
#[allow(dead_code)]
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Deterministic PDF-like payload of `len` bytes.
#[allow(dead_code)]
pub fn pdf_bytes(len: usize) -> Vec<u8> {
    let mut bytes = b"%PDF-1.4\n".to_vec();
    bytes.extend((0..len).map(|i| (i % 251) as u8));
    bytes.truncate(len);
    bytes
}

/// Viewer that must never be reached; counts calls so tests can assert on it.
#[allow(dead_code)]
#[derive(Default)]
pub struct UnreachableViewer {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ViewerBackend for UnreachableViewer {
    async fn open(&self, _path: &Path) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn window_count(&self) -> AppResult<usize> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }

    async fn quit(&self) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Link source returning a fixed list, standing in for the browser.
#[allow(dead_code)]
pub struct StaticLinks(pub Vec<CandidateLink>);

#[async_trait]
impl LinkSource for StaticLinks {
    async fn candidate_links(&self, _config: &ResolvedConfig) -> AppResult<Vec<CandidateLink>> {
        Ok(self.0.clone())
    }
}

/// Viewer whose window is closed as soon as it opens.
/// Records each opened path and whether the file existed at that moment.
#[allow(dead_code)]
#[derive(Default)]
pub struct ClosingViewer {
    pub opened: Mutex<Vec<(PathBuf, bool)>>,
    pub quits: AtomicUsize,
}

#[async_trait]
impl ViewerBackend for ClosingViewer {
    async fn open(&self, path: &Path) -> AppResult<()> {
        self.opened
            .lock()
            .unwrap()
            .push((path.to_path_buf(), path.exists()));
        Ok(())
    }

    async fn window_count(&self) -> AppResult<usize> {
        Ok(0)
    }

    async fn quit(&self) -> AppResult<()> {
        self.quits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
