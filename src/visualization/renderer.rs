//! Handlebars rendering of styled graphs

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use super::types::{StyledGraph, VisualizationDocument};
use crate::api_types::GraphResponse;
use crate::error::RenderError;
use crate::graph::{process, Graph, GraphOptions};

const NETWORK_TEMPLATE_NAME: &str = "network";
const NETWORK_TEMPLATE: &str = include_str!("network.html.hbs");

pub const VIS_NETWORK_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/vis-network/9.1.2/dist/vis-network.min.js";

/// Canvas settings for the rendered page
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub width: String,
    pub height: String,
    pub script_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Network".to_string(),
            width: "100%".to_string(),
            height: "600px".to_string(),
            script_url: VIS_NETWORK_URL.to_string(),
        }
    }
}

/// Immutable after construction; shared across requests behind an `Arc`
pub struct VisualizationRenderer {
    handlebars: Handlebars<'static>,
    options: RenderOptions,
}

impl VisualizationRenderer {
    pub fn new() -> Result<Self, RenderError> {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_template_string(NETWORK_TEMPLATE_NAME, NETWORK_TEMPLATE)?;
        Ok(Self {
            handlebars,
            options,
        })
    }

    pub fn render(&self, graph: &StyledGraph) -> Result<VisualizationDocument, RenderError> {
        let nodes: Vec<serde_json::Value> = graph
            .nodes
            .iter()
            .map(|node| {
                let mut value = json!({
                    "id": node.id,
                    "label": node.label,
                    "title": node.id,
                    "shape": "dot",
                    "size": 10,
                });
                if let Some(color) = node.color {
                    value["color"] = json!(color.css());
                }
                value
            })
            .collect();
        let edges: Vec<serde_json::Value> = graph
            .edges
            .iter()
            .map(|(from, to)| json!({ "from": from, "to": to }))
            .collect();

        let context = json!({
            "title": self.options.title,
            "width": self.options.width,
            "height": self.options.height,
            "script_url": self.options.script_url,
            "nodes_json": script_safe_json(&nodes)?,
            "edges_json": script_safe_json(&edges)?,
        });

        let html = self.handlebars.render(NETWORK_TEMPLATE_NAME, &context)?;
        Ok(VisualizationDocument::from(html))
    }
}

/// JSON that can sit inside a `<script>` element: `<`, `>` and `&` only
/// occur inside string literals, where the `\u` escapes are equivalent.
fn script_safe_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

/// Full pipeline for one request: filter, stats, styling, document
pub fn build_response(
    graph: &Graph,
    options: &GraphOptions,
    renderer: &VisualizationRenderer,
) -> Result<GraphResponse, RenderError> {
    let processed = process(graph, options);
    let document = renderer.render(&processed.styled)?;
    Ok(GraphResponse {
        stats: processed.stats,
        html: document.into_string(),
    })
}
