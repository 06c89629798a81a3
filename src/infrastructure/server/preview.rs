//! Static preview server built on `tiny_http`.
//!
//! Serves the output directory read-only on a loopback port:
//!
//! - Exact file match → the file
//! - Directory with `index.html` → that index
//! - `..` segments → 403
//! - Anything else → 404
//!
//! The server runs on its own thread and shares nothing with the compile
//! pipeline except the output directory on disk.

use std::fs;
use std::io::Cursor;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::JoinHandle;

use tiny_http::{Header, Request, Response, Server, StatusCode};

use crate::error::{BloggerError, BloggerResult};

/// Interface the preview server binds to
pub const PREVIEW_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// Ports tried after the requested one is taken
const MAX_PORT_RETRIES: u16 = 10;

/// A bound, not yet running, preview server.
pub struct PreviewServer {
    server: Arc<Server>,
    addr: SocketAddr,
    root: PathBuf,
}

impl PreviewServer {
    /// Bind to `port` on loopback, trying the next ports if it is in use.
    /// Port 0 lets the OS pick.
    pub fn bind(root: impl Into<PathBuf>, port: u16) -> BloggerResult<Self> {
        let (server, addr) = try_bind_port(PREVIEW_HOST, port, MAX_PORT_RETRIES)?;
        Ok(Self {
            server: Arc::new(server),
            addr,
            root: root.into(),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Start answering requests on a background thread.
    pub fn spawn(self) -> BloggerResult<PreviewHandle> {
        let server = Arc::clone(&self.server);
        let root = self.root;
        let thread = std::thread::Builder::new()
            .name("preview-server".to_string())
            .spawn(move || {
                for request in server.incoming_requests() {
                    if let Err(e) = handle_request(request, &root) {
                        tracing::warn!("preview request failed: {}", e);
                    }
                }
                tracing::debug!("preview server stopped");
            })?;

        Ok(PreviewHandle {
            server: self.server,
            addr: self.addr,
            thread: Some(thread),
        })
    }
}

/// Handle to a running preview server.
pub struct PreviewHandle {
    server: Arc<Server>,
    addr: SocketAddr,
    thread: Option<JoinHandle<()>>,
}

impl PreviewHandle {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Unblock the accept loop without waiting for the thread.
    pub fn unblock(&self) {
        self.server.unblock();
    }

    /// Stop accepting requests and wait for the server thread to exit.
    pub fn stop(mut self) {
        self.server.unblock();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!("preview server thread panicked");
            }
        }
    }
}

fn try_bind_port(
    interface: IpAddr,
    base_port: u16,
    max_retries: u16,
) -> BloggerResult<(Server, SocketAddr)> {
    let mut last_error = String::new();
    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        match Server::http(SocketAddr::new(interface, port)) {
            Ok(server) => {
                let addr = server
                    .server_addr()
                    .to_ip()
                    .unwrap_or_else(|| SocketAddr::new(interface, port));
                if offset > 0 {
                    tracing::warn!("port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => {
                last_error = e.to_string();
                // An OS-assigned port never collides; retrying makes no sense.
                if base_port == 0 {
                    break;
                }
            }
        }
    }
    Err(BloggerError::Server {
        message: format!(
            "failed to bind {} starting at port {}: {}",
            interface, base_port, last_error
        ),
    })
}

/// Map a request URL onto a path under `root`.
///
/// Returns `None` when the URL tries to climb out of `root`.
fn resolve_request_path(root: &Path, url: &str) -> Option<PathBuf> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let decoded = urlencoding::decode(path)
        .map(std::borrow::Cow::into_owned)
        .unwrap_or_else(|_| path.to_string());

    let mut local = root.to_path_buf();
    for segment in decoded.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => return None,
            s if s.contains(':') => return None,
            s => local.push(s),
        }
    }
    Some(local)
}

fn handle_request(request: Request, root: &Path) -> BloggerResult<()> {
    let Some(local_path) = resolve_request_path(root, request.url()) else {
        return respond_status(request, 403, "403 Forbidden");
    };

    if local_path.is_file() {
        return serve_file(request, &local_path);
    }
    if local_path.is_dir() {
        let index = local_path.join("index.html");
        if index.is_file() {
            return serve_file(request, &index);
        }
    }
    respond_status(request, 404, "404 Not Found")
}

fn serve_file(request: Request, path: &Path) -> BloggerResult<()> {
    let content = fs::read(path).map_err(|source| BloggerError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let mut response = Response::from_data(content);
    if let Ok(header) = Header::from_bytes("Content-Type", guess_content_type(path)) {
        response = response.with_header(header);
    }
    request.respond(response)?;
    Ok(())
}

fn respond_status(request: Request, code: u16, body: &str) -> BloggerResult<()> {
    let headers = Header::from_bytes("Content-Type", "text/plain; charset=utf-8")
        .into_iter()
        .collect();
    let response = Response::new(
        StatusCode(code),
        headers,
        Cursor::new(body.as_bytes().to_vec()),
        Some(body.len()),
        None,
    );
    request.respond(response)?;
    Ok(())
}

/// Guess MIME content type from file extension.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "application/javascript; charset=utf-8",
        Some("json") => "application/json; charset=utf-8",
        Some("xml") => "application/xml; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpStream;
    use tempfile::tempdir;

    fn get(addr: SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        write!(
            stream,
            "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
            path
        )
        .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }

    #[test]
    fn resolve_rejects_traversal() {
        let root = Path::new("/out");
        assert_eq!(
            resolve_request_path(root, "/posts/a%20b.html?t=1"),
            Some(PathBuf::from("/out/posts/a b.html"))
        );
        assert_eq!(resolve_request_path(root, "/../etc/passwd"), None);
        assert_eq!(resolve_request_path(root, "/%2e%2e/secret"), None);
    }

    #[test]
    fn content_types() {
        assert_eq!(
            guess_content_type(Path::new("a.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            guess_content_type(Path::new("a.unknown")),
            "application/octet-stream"
        );
    }

    #[test]
    fn serves_files_index_and_404() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<h1>home</h1>").unwrap();
        fs::create_dir(dir.path().join("about")).unwrap();
        fs::write(dir.path().join("about/index.html"), "about page").unwrap();
        fs::write(dir.path().join("style.css"), "body{}").unwrap();

        let handle = PreviewServer::bind(dir.path(), 0).unwrap().spawn().unwrap();
        let addr = handle.addr();

        let home = get(addr, "/");
        assert!(home.starts_with("HTTP/1.1 200"));
        assert!(home.contains("<h1>home</h1>"));

        let about = get(addr, "/about/");
        assert!(about.contains("about page"));

        let css = get(addr, "/style.css");
        assert!(css.contains("text/css"));

        let missing = get(addr, "/nope.html");
        assert!(missing.starts_with("HTTP/1.1 404"));

        handle.stop();
    }
}
