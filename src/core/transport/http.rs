//! HTTP transport implementation.
//!
//! Routes:
//! - `GET /` - liveness string
//! - `GET /health` - health report
//! - `GET|POST /mcp` - discovery manifest
//! - `POST /<endpoint>` - tool invocation, answered with `{"content": ...}`
//!
//! Caller mistakes (unknown endpoint, malformed body, invalid parameters)
//! are answered with an error status and `{"error", "message"}`; they never
//! carry a `content` field.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Map, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, instrument, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::ToolServer;
use crate::domains::tools::DispatchError;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: ToolServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: ToolServer) -> TransportResult<()> {
        let addr = self.address();
        let tool_endpoints: Vec<String> = server
            .registry()
            .list()
            .iter()
            .map(|t| t.endpoint().to_string())
            .collect();

        let app = router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Manifest: GET|POST /mcp");
        for endpoint in &tool_endpoints {
            info!("  → Tool:     POST {}", endpoint);
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the application router.
pub fn router(server: ToolServer, enable_cors: bool) -> Router {
    let state = AppState { server };

    let mut app = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .route("/mcp", get(handle_manifest).post(handle_manifest))
        .route(
            "/{*endpoint}",
            post(handle_tool_call).fallback(handle_wrong_method),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Error body returned for caller mistakes.
#[derive(Debug)]
pub struct ApiError(DispatchError);

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DispatchError::UnknownTool(_) => StatusCode::NOT_FOUND,
            DispatchError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            DispatchError::MissingParameter(_)
            | DispatchError::InvalidParameterType { .. }
            | DispatchError::UnexpectedParameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.0.code(),
            "message": self.0.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

/// Root handler - liveness string.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    format!("{} is running", state.server.name())
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": state.server.version(),
        "tools": state.server.registry().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Serve the manifest. GET and POST share this handler, so both answer with
/// the same bytes.
async fn handle_manifest(State(state): State<AppState>) -> Response {
    debug!("Serving manifest");
    match serde_json::to_vec(&state.server.manifest()) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            error!("Failed to serialize manifest: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Invoke the tool routed at the request path.
#[instrument(skip_all, fields(endpoint))]
async fn handle_tool_call(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let endpoint = format!("/{}", endpoint);
    tracing::Span::current().record("endpoint", endpoint.as_str());

    let arguments = parse_arguments(&body)?;
    let response = state.server.call_endpoint(&endpoint, arguments).await?;

    Ok(Json(response).into_response())
}

/// Decode a call body into parameters. An empty body means no parameters.
pub fn parse_arguments(body: &[u8]) -> Result<Map<String, Value>, DispatchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Null) => Ok(Map::new()),
        Ok(_) => Err(DispatchError::invalid_body("expected a JSON object")),
        Err(e) => Err(DispatchError::invalid_body(e.to_string())),
    }
}

/// Non-POST request to a tool path.
async fn handle_wrong_method(State(state): State<AppState>, uri: Uri) -> Response {
    if state.server.registry().find_by_endpoint(uri.path()).is_some() {
        warn!("Tool endpoint {} called with the wrong method", uri.path());
        StatusCode::METHOD_NOT_ALLOWED.into_response()
    } else {
        ApiError(DispatchError::unknown_tool(uri.path())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_empty_body() {
        assert!(parse_arguments(b"").unwrap().is_empty());
        assert!(parse_arguments(b"  \n").unwrap().is_empty());
        assert!(parse_arguments(b"null").unwrap().is_empty());
    }

    #[test]
    fn test_parse_object_body() {
        let args = parse_arguments(br#"{"claim": "x"}"#).unwrap();
        assert_eq!(args.get("claim"), Some(&json!("x")));
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert_eq!(parse_arguments(b"[1, 2]").unwrap_err().code(), "invalid_body");
        assert_eq!(parse_arguments(b"{not json").unwrap_err().code(), "invalid_body");
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ApiError::from(DispatchError::unknown_tool("/x")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(DispatchError::missing_parameter("claim")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(DispatchError::invalid_body("bad")).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
