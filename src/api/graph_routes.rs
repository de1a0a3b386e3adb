//! Graph endpoints: upload, generate, filter
//!
//! Each request builds its own graph, runs it through the processing
//! pipeline and returns `{stats, html}`. No state survives the request.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::{AppError, AppState};
use crate::api_types::{GenerateQuery, GraphResponse, HealthResponse, SeedQuery};
use crate::graph::{parse_edge_csv, GenerateParams, Graph, GraphOptions, MAX_GENERATED_NODES};
use crate::visualization::build_response;

const UPLOAD_FIELD: &str = "file";

/// Request seed, then configured seed, then entropy
fn request_rng(state: &AppState, seed: Option<u64>) -> StdRng {
    match seed.or(state.config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn respond(
    state: &AppState,
    graph: &Graph,
    options: &GraphOptions,
) -> Result<Json<GraphResponse>, AppError> {
    let response = build_response(graph, options, &state.renderer)?;
    info!(
        num_nodes = response.stats.num_nodes,
        num_edges = response.stats.num_edges,
        "graph rendered"
    );
    Ok(Json(response))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /upload/ - multipart CSV with `source,target` header
pub async fn upload_edges(
    State(state): State<AppState>,
    Query(options): Query<GraphOptions>,
    mut multipart: Multipart,
) -> Result<Json<GraphResponse>, AppError> {
    let mut contents = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some(UPLOAD_FIELD) {
            let file_name = field.file_name().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            debug!(?file_name, size = bytes.len(), "received edge list");
            contents = Some(bytes);
            break;
        }
    }
    let contents = contents.ok_or_else(|| {
        AppError::BadRequest(format!("missing multipart field '{}'", UPLOAD_FIELD))
    })?;

    let rows = parse_edge_csv(&contents)?;
    info!(rows = rows.len(), ?options, "building graph from upload");
    let graph = Graph::from_edge_rows(rows);
    respond(&state, &graph, &options)
}

/// GET /generate/?n_nodes=10&p_edge=0.2
pub async fn generate_graph(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
    Query(options): Query<GraphOptions>,
) -> Result<Json<GraphResponse>, AppError> {
    if query.n_nodes > MAX_GENERATED_NODES {
        return Err(AppError::BadRequest(format!(
            "n_nodes must be at most {}, got {}",
            MAX_GENERATED_NODES, query.n_nodes
        )));
    }

    info!(
        n_nodes = query.n_nodes,
        p_edge = query.p_edge,
        seed = ?query.seed,
        ?options,
        "generating graph"
    );
    let params = GenerateParams::new(query.n_nodes, query.p_edge);
    let graph = params.build(&mut request_rng(&state, query.seed))?;
    respond(&state, &graph, &options)
}

/// GET /filter/?degree_threshold=0&show_labels=true&highlight_hubs=true
///
/// Works on a default generated graph rather than user input.
pub async fn filter_graph(
    State(state): State<AppState>,
    Query(seed): Query<SeedQuery>,
    Query(options): Query<GraphOptions>,
) -> Result<Json<GraphResponse>, AppError> {
    info!(?options, "filtering default graph");
    let graph = state
        .config
        .filter_graph
        .build(&mut request_rng(&state, seed.seed))?;
    respond(&state, &graph, &options)
}
