//! Results page: statistics plus the rendered document in a frame
//!
//! The document is staged in a temporary file before it is embedded; the
//! file is removed when the staging handle drops, on success and on error.

use std::io::Write;
use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use crate::api_types::GraphResponse;
use crate::error::{ClientError, RenderError};
use crate::graph::GraphStats;

/// Height of the embedded network frame, in pixels
pub const RESULTS_FRAME_HEIGHT: u32 = 650;

/// Where the results page goes when no path is given
pub const DEFAULT_RESULTS_PATH: &str = "netviz-results.html";

const RESULTS_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Simple Network Visualization</title>
</head>
<body>
  <h2>Network stats:</h2>
  <p>Number of nodes: {{stats.num_nodes}}</p>
  <p>Number of edges: {{stats.num_edges}}</p>
  <p>Degree distribution (node: degree):</p>
  <pre>{{distribution}}</pre>
  <iframe srcdoc="{{document}}" width="100%" height="{{height}}" scrolling="yes" style="border: none; overflow: auto;"></iframe>
</body>
</html>
"#;

/// Stage the document under the system temp dir and build the results page
pub fn embed_results(response: &GraphResponse) -> Result<String, ClientError> {
    embed_results_in(response, &std::env::temp_dir())
}

pub fn embed_results_in(response: &GraphResponse, staging_dir: &Path) -> Result<String, ClientError> {
    let mut staged = tempfile::Builder::new()
        .prefix("netviz-")
        .suffix(".html")
        .tempfile_in(staging_dir)?;
    staged.write_all(response.html.as_bytes())?;
    staged.flush()?;

    let document = std::fs::read_to_string(staged.path())?;
    let page = render_page(response, &document)?;
    Ok(page)
}

/// Build the results page and write it to `output`
pub fn save_results(response: &GraphResponse, output: &Path) -> Result<(), ClientError> {
    let page = embed_results(response)?;
    std::fs::write(output, page)?;
    Ok(())
}

/// Pretty JSON of the statistics, keys in node order
pub fn stats_json(stats: &GraphStats) -> Result<String, ClientError> {
    let json = serde_json::to_string_pretty(stats).map_err(RenderError::from)?;
    Ok(json)
}

fn render_page(response: &GraphResponse, document: &str) -> Result<String, RenderError> {
    let distribution = serde_json::to_string_pretty(&response.stats.degree_distribution)?;
    let context = json!({
        "stats": response.stats,
        "distribution": distribution,
        "document": document,
        "height": RESULTS_FRAME_HEIGHT,
    });
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    Ok(handlebars.render_template(RESULTS_TEMPLATE, &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{process, EdgeRow, Graph, GraphOptions};

    fn sample_response(html: &str) -> GraphResponse {
        let graph = Graph::from_edge_rows(vec![EdgeRow::new("A", "B")]);
        GraphResponse {
            stats: process(&graph, &GraphOptions::default()).stats,
            html: html.to_string(),
        }
    }

    #[test]
    fn page_shows_stats_and_escaped_document() {
        let dir = tempfile::tempdir().unwrap();
        let page = embed_results_in(&sample_response("<p class=\"x\">net</p>"), dir.path()).unwrap();

        assert!(page.contains("Number of nodes: 2"));
        assert!(page.contains("Number of edges: 1"));
        assert!(page.contains("height=\"650\""));
        assert!(page.contains("&lt;p class"));
        assert!(page.contains("&quot;x&quot;&gt;net&lt;/p&gt;"));
        assert!(!page.contains("<p class"));
    }

    #[test]
    fn staged_file_is_removed_after_embedding() {
        let dir = tempfile::tempdir().unwrap();
        embed_results_in(&sample_response("<html></html>"), dir.path()).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn save_results_writes_the_page() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("results.html");
        save_results(&sample_response("<html></html>"), &output).unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        assert!(page.contains("Number of nodes: 2"));
        assert!(page.contains("<iframe srcdoc="));
    }

    #[test]
    fn save_results_into_missing_directory_fails_locally() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no-such-dir").join("results.html");
        let err = save_results(&sample_response(""), &output).unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
        assert!(!err.is_backend_failure());
    }

    #[test]
    fn stats_json_keeps_node_order() {
        let json = stats_json(&sample_response("").stats).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["num_nodes"], 2);
        assert!(json.find("\"A\"").unwrap() < json.find("\"B\"").unwrap());
    }

    #[test]
    fn staging_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = embed_results_in(&sample_response(""), &missing).unwrap_err();
        assert!(matches!(err, ClientError::Io(_)));
    }
}
