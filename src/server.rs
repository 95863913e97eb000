//! HTTP surface
//!
//! Requests are routed by [`BriefService::handle`], which knows nothing about
//! sockets and returns a plain [`BriefResponse`]. [`BriefServer`] runs a fixed
//! pool of worker threads over a `tiny_http` listener and feeds each request
//! through the service.

use std::io::Cursor;
use std::net::SocketAddr;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use log::{debug, error, info, warn};
use serde_json::json;
use tiny_http::{Header, Method, Response, Server, StatusCode};

use crate::config::BriefOptions;
use crate::error::{BriefError, BriefResult};
use crate::generate_brief;
use crate::store::ProjectStore;

/// Path segment that precedes the project slug.
pub const ROUTE_SEGMENT: &str = "investor-brief";
pub const HEALTH_PATH: &str = "/health";

const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
];

/// Transport-independent response; always carries the CORS headers.
#[derive(Debug, Clone, PartialEq)]
pub struct BriefResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl BriefResponse {
    fn new(status: u16) -> Self {
        Self {
            status,
            headers: CORS_HEADERS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            body: Vec::new(),
        }
    }

    fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        let mut response = Self::new(status).with_header("Content-Type", "application/json");
        response.body = value.to_string().into_bytes();
        response
    }

    pub fn error(err: &BriefError) -> Self {
        Self::json(err.status_code(), &json!({ "error": err.to_string() }))
    }

    pub fn pdf(slug: &str, bytes: Vec<u8>) -> Self {
        let mut response = Self::new(200)
            .with_header("Content-Type", "application/pdf")
            .with_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", attachment_name(slug)),
            );
        response.body = bytes;
        response
    }

    /// First header with `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    fn into_tiny(self) -> Response<Cursor<Vec<u8>>> {
        let mut response = Response::from_data(self.body).with_status_code(StatusCode(self.status));
        for (name, value) in &self.headers {
            match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
                Ok(header) => response.add_header(header),
                Err(()) => warn!("Dropping invalid response header {}", name),
            }
        }
        response
    }
}

/// `<slug>-investor-brief.pdf`, restricted to characters safe in a quoted header value.
fn attachment_name(slug: &str) -> String {
    let safe: String = slug
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    format!("{}-investor-brief.pdf", safe)
}

fn request_path(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or_default()
}

/// Slug from a path ending in `/investor-brief/<slug>`, with any prefix.
/// The slug must be the last non-empty segment.
pub fn extract_slug(url: &str) -> BriefResult<String> {
    let segments: Vec<&str> = request_path(url)
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    let raw = match segments.as_slice() {
        [.., route, raw] if *route == ROUTE_SEGMENT => *raw,
        _ => return Err(BriefError::MissingSlug),
    };
    let decoded = urlencoding::decode(raw).map_err(|_| BriefError::MissingSlug)?;
    let slug = decoded.trim();
    if slug.is_empty() {
        return Err(BriefError::MissingSlug);
    }
    Ok(slug.to_string())
}

/// Routes requests to brief generation
pub struct BriefService {
    store: Arc<dyn ProjectStore>,
    options: BriefOptions,
}

impl BriefService {
    pub fn new(store: Arc<dyn ProjectStore>, options: BriefOptions) -> Self {
        Self { store, options }
    }

    pub fn handle(&self, method: &Method, url: &str) -> BriefResponse {
        match method {
            Method::Options => BriefResponse::new(200),
            Method::Get if request_path(url) == HEALTH_PATH => {
                BriefResponse::json(200, &json!({ "status": "ok" }))
            }
            Method::Get => self.generate(url).unwrap_or_else(|err| {
                log_failure(url, &err);
                BriefResponse::error(&err)
            }),
            _ => BriefResponse::error(&BriefError::MethodNotAllowed),
        }
    }

    fn generate(&self, url: &str) -> BriefResult<BriefResponse> {
        let slug = extract_slug(url)?;
        let project = self
            .store
            .find_by_slug(&slug)?
            .ok_or_else(|| BriefError::ProjectNotFound(slug.clone()))?;
        let bytes = generate_brief(&project, &self.options)?;
        Ok(BriefResponse::pdf(&slug, bytes))
    }
}

fn log_failure(url: &str, err: &BriefError) {
    match err {
        BriefError::ProjectNotFound(slug) => info!("No project with slug '{}'", slug),
        BriefError::MissingSlug => info!("No project slug in {}", url),
        _ => error!("Brief request {} failed: {}", url, err),
    }
}

/// Stops the worker pool of a running [`BriefServer`]
#[derive(Clone)]
pub struct ShutdownHandle {
    server: Arc<Server>,
    shutting_down: Arc<AtomicBool>,
    workers: usize,
}

impl ShutdownHandle {
    /// Workers finish their current request and exit.
    pub fn shutdown(&self) {
        if self.shutting_down.swap(true, Ordering::SeqCst) {
            return;
        }
        for _ in 0..self.workers {
            self.server.unblock();
        }
    }
}

pub struct BriefServer {
    server: Arc<Server>,
    service: Arc<BriefService>,
    shutting_down: Arc<AtomicBool>,
    workers: usize,
}

impl BriefServer {
    pub fn bind(addr: &str, service: BriefService, workers: usize) -> BriefResult<Self> {
        let server = Server::http(addr)
            .map_err(|err| BriefError::Config(format!("cannot listen on {}: {}", addr, err)))?;
        Ok(Self {
            server: Arc::new(server),
            service: Arc::new(service),
            shutting_down: Arc::new(AtomicBool::new(false)),
            workers: workers.max(1),
        })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            server: Arc::clone(&self.server),
            shutting_down: Arc::clone(&self.shutting_down),
            workers: self.workers,
        }
    }

    /// Serve until [`ShutdownHandle::shutdown`] is called.
    pub fn run(self) -> BriefResult<()> {
        let addr = self
            .local_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_default();
        info!("Listening on {} with {} worker(s)", addr, self.workers);

        let mut handles = Vec::with_capacity(self.workers);
        for index in 0..self.workers {
            let server = Arc::clone(&self.server);
            let service = Arc::clone(&self.service);
            let shutting_down = Arc::clone(&self.shutting_down);
            let handle = thread::Builder::new()
                .name(format!("brief-worker-{}", index))
                .spawn(move || serve(&server, &service, &shutting_down))?;
            handles.push(handle);
        }

        for handle in handles {
            if handle.join().is_err() {
                error!("Worker thread exited with a panic");
            }
        }
        info!("Server stopped");
        Ok(())
    }
}

fn serve(server: &Server, service: &BriefService, shutting_down: &AtomicBool) {
    loop {
        let request = match server.recv() {
            Ok(request) => request,
            Err(err) => {
                if shutting_down.load(Ordering::SeqCst) {
                    break;
                }
                warn!("Failed to accept request: {}", err);
                continue;
            }
        };

        let method = request.method().clone();
        let url = request.url().to_string();
        let response = panic::catch_unwind(AssertUnwindSafe(|| service.handle(&method, &url)))
            .unwrap_or_else(|_| {
                error!("Brief request {} panicked", url);
                BriefResponse::error(&BriefError::PdfError("brief generation failed".to_string()))
            });
        debug!("{} {} -> {} ({} bytes)", method, url, response.status, response.body.len());

        if let Err(err) = request.respond(response.into_tiny()) {
            warn!("Failed to send response for {}: {}", url, err);
        }
    }
}
