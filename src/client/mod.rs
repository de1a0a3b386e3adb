//! Presentation client for the graph service
//!
//! One request per user action, no retries. Any non-success status is
//! surfaced as `ClientError::Backend` without inspecting the body.

pub mod results;

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tracing::{debug, info};

use crate::api_types::{GenerateQuery, GraphResponse, SeedQuery};
use crate::error::ClientError;
use crate::graph::GraphOptions;

pub use results::{
    embed_results, embed_results_in, save_results, stats_json, DEFAULT_RESULTS_PATH,
    RESULTS_FRAME_HEIGHT,
};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// What the user asked for when triggering a load
#[derive(Debug, Clone, PartialEq)]
pub enum LoadRequest {
    /// Upload mode; `None` when no file was selected
    Upload(Option<std::path::PathBuf>),
    Generate(GenerateQuery),
    /// Filter-only operation on the service's own default graph
    Filter(SeedQuery),
}

pub struct GraphClient {
    client: Client,
    base_url: String,
}

impl GraphClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Dispatch a load action to the matching service operation
    pub async fn load(
        &self,
        request: &LoadRequest,
        options: &GraphOptions,
    ) -> Result<GraphResponse, ClientError> {
        match request {
            LoadRequest::Upload(None) => Err(ClientError::MissingFile),
            LoadRequest::Upload(Some(path)) => self.upload_file(path, options).await,
            LoadRequest::Generate(query) => self.generate(query, options).await,
            LoadRequest::Filter(seed) => self.filter(seed, options).await,
        }
    }

    /// Load and write the results page to `output`. The response is only
    /// handed back once the page is on disk, so callers never show stats
    /// for a load whose page could not be delivered.
    pub async fn load_into(
        &self,
        request: &LoadRequest,
        options: &GraphOptions,
        output: &Path,
    ) -> Result<GraphResponse, ClientError> {
        let response = self.load(request, options).await?;
        save_results(&response, output)?;
        info!(output = %output.display(), "results page written");
        Ok(response)
    }

    /// Read `path` and POST it to `/upload/`. Fails before any request
    /// when the file cannot be read.
    pub async fn upload_file(
        &self,
        path: &Path,
        options: &GraphOptions,
    ) -> Result<GraphResponse, ClientError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ClientError::UnreadableFile {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "edges.csv".to_string());
        self.upload_bytes(file_name, bytes, options).await
    }

    pub async fn upload_bytes(
        &self,
        file_name: String,
        bytes: Vec<u8>,
        options: &GraphOptions,
    ) -> Result<GraphResponse, ClientError> {
        info!(%file_name, size = bytes.len(), "uploading edge list");
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload/", self.base_url))
            .query(options)
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn generate(
        &self,
        query: &GenerateQuery,
        options: &GraphOptions,
    ) -> Result<GraphResponse, ClientError> {
        info!(n_nodes = query.n_nodes, p_edge = query.p_edge, "requesting generated graph");
        let response = self
            .client
            .get(format!("{}/generate/", self.base_url))
            .query(query)
            .query(options)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn filter(
        &self,
        seed: &SeedQuery,
        options: &GraphOptions,
    ) -> Result<GraphResponse, ClientError> {
        info!(?options, "requesting filtered default graph");
        let response = self
            .client
            .get(format!("{}/filter/", self.base_url))
            .query(seed)
            .query(options)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode(response: Response) -> Result<GraphResponse, ClientError> {
        let status = response.status();
        if !status.is_success() {
            debug!(%status, "backend rejected request");
            return Err(ClientError::Backend(status));
        }
        Ok(response.json::<GraphResponse>().await?)
    }
}
