//! HTTP API handlers.

use axum::extract::{ConnectInfo, State};
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, Method, Uri};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::host::{HostInfoProvider, SysinfoHost, SystemSnapshot};
use crate::runtime::RuntimeSnapshot;

/// Application state shared with handlers.
///
/// The start timestamp is captured exactly once, here, and only read
/// afterwards; request handling shares no other state.
#[derive(Clone)]
pub struct AppState {
    /// Process start time, fixed at construction.
    pub started_at: DateTime<Utc>,
    /// Host fact lookup, stubbable in tests.
    pub host: Arc<dyn HostInfoProvider>,
}

impl AppState {
    /// Create app state backed by the live host provider.
    pub fn new() -> Self {
        Self::with_provider(SysinfoHost::shared())
    }

    /// Create app state with a specific host provider.
    pub fn with_provider(host: Arc<dyn HostInfoProvider>) -> Self {
        Self {
            started_at: Utc::now(),
            host,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Static service identity.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceIdentity {
    /// Service name.
    pub name: &'static str,
    /// Semantic version.
    pub version: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Serving-framework label.
    pub framework: &'static str,
}

/// Immutable after process start; byte-identical across responses.
pub const SERVICE_IDENTITY: ServiceIdentity = ServiceIdentity {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
    description: env!("CARGO_PKG_DESCRIPTION"),
    framework: "Axum",
};

/// One exposed route.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointDescriptor {
    /// URL path.
    pub path: &'static str,
    /// HTTP method.
    pub method: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// The declared route table, one entry per exposed route.
pub const ENDPOINTS: [EndpointDescriptor; 2] = [
    EndpointDescriptor {
        path: "/",
        method: "GET",
        description: "Service information",
    },
    EndpointDescriptor {
        path: "/health",
        method: "GET",
        description: "Health check",
    },
];

/// Metadata extracted from the inbound request.
#[derive(Debug, Clone, Serialize)]
pub struct RequestSnapshot {
    /// Originating client IP; absent if the transport does not expose it.
    pub client_ip: Option<String>,
    /// Raw User-Agent header value, empty string if absent.
    pub user_agent: String,
    /// HTTP method.
    pub method: String,
    /// URL path.
    pub path: String,
}

impl RequestSnapshot {
    fn extract(
        client: Option<SocketAddr>,
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
    ) -> Self {
        let user_agent = headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();

        Self {
            client_ip: client.map(|addr| addr.ip().to_string()),
            user_agent,
            method: method.to_string(),
            path: uri.path().to_string(),
        }
    }
}

/// `GET /` response body.
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    /// Static service identity.
    pub service: ServiceIdentity,
    /// Host facts, queried live.
    pub system: SystemSnapshot,
    /// Uptime and wall-clock facts.
    pub runtime: RuntimeSnapshot,
    /// Inbound request metadata.
    pub request: RequestSnapshot,
    /// Declared route table.
    pub endpoints: Vec<EndpointDescriptor>,
}

/// `GET /health` response body.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always the literal "healthy"; the service has no observable
    /// dependency that could degrade it.
    pub status: &'static str,
    /// Current time, ISO-8601 with UTC offset.
    pub timestamp: String,
    /// Whole seconds since process start.
    pub uptime_seconds: i64,
}

/// Main handler - service, system, runtime, and request information.
pub async fn index(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<InfoResponse> {
    info!("handling request for {} {}", method, uri.path());

    let request = RequestSnapshot::extract(
        connect_info.map(|ConnectInfo(addr)| addr),
        &method,
        &uri,
        &headers,
    );

    Json(InfoResponse {
        service: SERVICE_IDENTITY,
        system: state.host.snapshot(),
        runtime: RuntimeSnapshot::now(state.started_at),
        request,
        endpoints: ENDPOINTS.to_vec(),
    })
}

/// Health check handler - always reports healthy when reachable.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let runtime = RuntimeSnapshot::now(state.started_at);

    Json(HealthResponse {
        status: "healthy",
        timestamp: runtime.current_time,
        uptime_seconds: runtime.uptime_seconds,
    })
}
