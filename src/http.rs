//! HTTP layer: axum routes over the shared graph snapshot.
//!
//! All query routes read an immutable snapshot and respond with a
//! `{success, data}` envelope; absence of a path is a normal outcome (200
//! with null data), absence of the queried node is a 404. GET responses are
//! cached by URI until the next rebuild.

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::db::Db;
use crate::error::{LegisgraphError, Result};
use crate::graph::{build_graph, NodeType, SharedGraph};
use axum::{
    extract::{Path, Query, Request, State},
    http::{header::HeaderName, HeaderValue, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Db>,
    pub graph: SharedGraph,
    pub cache: Arc<ResponseCache>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: Db, graph: SharedGraph, config: Config) -> Self {
        let cache = Arc::new(ResponseCache::new(
            config.cache.capacity,
            Duration::from_secs(config.cache.ttl_seconds),
        ));
        Self {
            db: Arc::new(db),
            graph,
            cache,
            config: Arc::new(config),
        }
    }
}

/// An error with an HTTP status, rendered as a JSON envelope
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(what: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("{} not found", what),
        }
    }

    fn internal(err: LegisgraphError) -> Self {
        log::error!("Internal error: {}", err);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({"success": false, "error": self.message})),
        )
            .into_response()
    }
}

/// Build the axum router
pub fn create_router(state: AppState) -> Router {
    // CORS mirrors config: explicit origin list when configured, otherwise
    // open (local dev)
    let allowed_origins = &state.config.server.allowed_origins;
    let cors = if allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(handle_health))
        .route("/api/graph/stats", get(handle_stats))
        .route("/api/graph/connections/:node_id", get(handle_connections))
        .route("/api/graph/path/:from/:to", get(handle_path))
        .route("/api/graph/influence/:node_id", get(handle_influence))
        .route("/api/graph/build", post(handle_build))
        .layer(middleware::from_fn(request_id))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Run the HTTP server
pub async fn serve(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr();
    let app = create_router(state);

    log::info!("Starting Legisgraph HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            LegisgraphError::Io(std::io::Error::new(
                std::io::ErrorKind::AddrInUse,
                format!("Failed to bind to {}: {}", addr, e),
            ))
        })?;

    axum::serve(listener, app).await.map_err(|e| {
        LegisgraphError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("HTTP server error: {}", e),
        ))
    })?;

    Ok(())
}

/// Tag every response with an x-request-id, honoring an inbound one
async fn request_id(request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), value);
    }
    response
}

fn envelope(data: Value) -> Value {
    json!({"success": true, "data": data})
}

/// Serve from the response cache, computing and storing on miss
fn cached(state: &AppState, uri: &Uri, compute: impl FnOnce() -> Value) -> Json<Value> {
    let key = uri.to_string();
    if let Some(hit) = state.cache.get(&key) {
        return Json(hit);
    }
    let value = compute();
    state.cache.put(key, value.clone());
    Json(value)
}

async fn handle_health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "legisgraph",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn handle_stats(State(state): State<AppState>, uri: Uri) -> Json<Value> {
    cached(&state, &uri, || {
        let graph = state.graph.snapshot();
        envelope(serde_json::to_value(graph.stats()).unwrap_or(Value::Null))
    })
}

#[derive(Debug, Deserialize)]
struct ConnectionsQuery {
    depth: Option<usize>,
    #[serde(rename = "type")]
    filter_type: Option<NodeType>,
}

async fn handle_connections(
    State(state): State<AppState>,
    Path(node_id): Path<String>,
    Query(params): Query<ConnectionsQuery>,
    uri: Uri,
) -> std::result::Result<Json<Value>, ApiError> {
    let graph = state.graph.snapshot();
    let source = graph
        .node(&node_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Graph node"))?;

    let depth = params
        .depth
        .unwrap_or(2)
        .min(state.config.graph.max_connection_depth);
    let cap = state.config.graph.connection_result_cap;

    Ok(cached(&state, &uri, || {
        let mut connections = graph.connections(&node_id, depth, params.filter_type);
        let total = connections.len();
        connections.truncate(cap);
        envelope(json!({
            "source": source,
            "connections": connections,
            "total": total,
        }))
    }))
}

async fn handle_path(
    State(state): State<AppState>,
    Path((from_id, to_id)): Path<(String, String)>,
    uri: Uri,
) -> Json<Value> {
    cached(&state, &uri, || {
        let graph = state.graph.snapshot();
        match graph.find_path(&from_id, &to_id, state.config.graph.path_max_depth) {
            Some(path) => envelope(serde_json::to_value(path).unwrap_or(Value::Null)),
            None => json!({
                "success": true,
                "data": Value::Null,
                "message": "No path found between these nodes",
            }),
        }
    })
}

async fn handle_influence(
    State(state): State<AppState>,
    Path(node_id): Path<String>,
    uri: Uri,
) -> std::result::Result<Json<Value>, ApiError> {
    let graph = state.graph.snapshot();
    if graph.node(&node_id).is_none() {
        return Err(ApiError::not_found("Graph node"));
    }

    Ok(cached(&state, &uri, || {
        envelope(serde_json::to_value(graph.influence(&node_id)).unwrap_or(Value::Null))
    }))
}

async fn handle_build(
    State(state): State<AppState>,
) -> std::result::Result<Json<Value>, ApiError> {
    let (store, summary) = build_graph(&state.db, &state.config.graph)
        .await
        .map_err(ApiError::internal)?;

    state.graph.publish(store);
    state.cache.clear();

    Ok(Json(envelope(
        serde_json::to_value(summary).unwrap_or(Value::Null),
    )))
}
