//! Demo HTTP server.
//!
//! # Responsibilities
//! - Show how axum handlers drive a [`ResponseWriter`] into a [`Recorder`]
//! - Exercise every outcome family over real HTTP
//! - Apply the configured writer defaults to each response

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, WriterConfig};
use crate::http::{Payload, Recorder, ResponseWriter, StatusMessage};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub writer: Arc<WriterConfig>,
}

impl AppState {
    /// Run `f` against a fresh writer and hand back the recorded response.
    fn respond<F>(&self, f: F) -> Recorder
    where
        F: FnOnce(ResponseWriter<'_, Recorder>),
    {
        let mut rec = Recorder::new();
        f(ResponseWriter::with_config(&mut rec, &self.writer));
        rec
    }
}

/// Domain errors that know their HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    UnknownItem(u64),
    Upstream,
}

impl StatusMessage for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownItem(_) => StatusCode::NOT_FOUND,
            AppError::Upstream => StatusCode::BAD_GATEWAY,
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::UnknownItem(id) => format!("item {} does not exist", id),
            AppError::Upstream => "upstream unavailable".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewItem {
    pub name: String,
}

/// HTTP server for the demo.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState {
            writer: Arc::new(config.writer.clone()),
        };
        Self {
            router: build_router(state),
            config,
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Build the axum router with all demo routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).delete(delete_item))
        .route("/jobs", post(enqueue_job))
        .route("/upstream", get(upstream))
        .route("/limited", get(limited))
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

fn catalog() -> Vec<Item> {
    vec![
        Item { id: 1, name: "anvil".into() },
        Item { id: 2, name: "bellows".into() },
    ]
}

async fn index(State(state): State<AppState>) -> Recorder {
    state.respond(|w| w.ok("json-response demo"))
}

async fn list_items(State(state): State<AppState>) -> Recorder {
    state.respond(|w| w.success(Payload::json(&catalog())))
}

async fn get_item(State(state): State<AppState>, Path(id): Path<u64>) -> Recorder {
    match catalog().into_iter().find(|item| item.id == id) {
        Some(item) => state.respond(|w| w.ok(Payload::json(&item))),
        None => state.respond(|w| w.error_from(&AppError::UnknownItem(id))),
    }
}

async fn create_item(State(state): State<AppState>, Json(new): Json<NewItem>) -> Recorder {
    if new.name.trim().is_empty() {
        return state.respond(|w| w.unprocessable_entity(json!({"error": "name is required"})));
    }
    let item = Item { id: 3, name: new.name };
    let location = format!("/items/{}", item.id);
    state.respond(|w| w.add_header("Location", &location).created(Payload::json(&item)))
}

async fn delete_item(State(state): State<AppState>, Path(id): Path<u64>) -> Recorder {
    if catalog().iter().any(|item| item.id == id) {
        state.respond(|w| w.no_content())
    } else {
        state.respond(|w| w.not_found(format!("item {} does not exist", id)))
    }
}

async fn enqueue_job(State(state): State<AppState>) -> Recorder {
    state.respond(|w| w.accepted(json!({"queued": true})))
}

async fn upstream(State(state): State<AppState>) -> Recorder {
    state.respond(|w| w.error_from(&AppError::Upstream))
}

async fn limited(State(state): State<AppState>) -> Recorder {
    state.respond(|w| w.add_header("Retry-After", "30").too_many_requests("slow down"))
}

async fn fallback(State(state): State<AppState>) -> Recorder {
    state.respond(|w| w.not_found("Not Found"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
    }
    tracing::info!("Shutdown signal received");
}
