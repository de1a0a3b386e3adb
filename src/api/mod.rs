//! HTTP surface of the graph service
//!
//! Routes:
//! - GET  /health     - liveness
//! - POST /upload/    - multipart CSV edge list (`file` field)
//! - GET  /generate/  - Erdos-Renyi graph from `n_nodes` / `p_edge`
//! - GET  /filter/    - filter/style a default generated graph
//!
//! Every graph route also accepts `degree_threshold`, `show_labels` and
//! `highlight_hubs` query parameters.

pub mod error;
pub mod graph_routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::error::RenderError;
use crate::visualization::VisualizationRenderer;

pub use error::AppError;

/// Read-only per-process state; nothing here changes between requests
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub renderer: Arc<VisualizationRenderer>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, RenderError> {
        Ok(Self {
            config: Arc::new(config),
            renderer: Arc::new(VisualizationRenderer::new()?),
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(graph_routes::health))
        .route("/upload/", post(graph_routes::upload_edges))
        .route("/generate/", get(graph_routes::generate_graph))
        .route("/filter/", get(graph_routes::filter_graph))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
