//! Styled graph and document types

/// Display color assigned when hub highlighting is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeColor {
    /// Node attains the maximum degree of the filtered graph
    Hub,
    Default,
}

impl NodeColor {
    pub fn css(&self) -> &'static str {
        match self {
            NodeColor::Hub => "red",
            NodeColor::Default => "blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStyle {
    pub id: String,
    /// Empty when labels are hidden
    pub label: String,
    /// `None` leaves the renderer's default color
    pub color: Option<NodeColor>,
}

/// Filtered graph with per-node display attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledGraph {
    pub nodes: Vec<NodeStyle>,
    pub edges: Vec<(String, String)>,
}

impl StyledGraph {
    pub fn hubs(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes
            .iter()
            .filter(|n| n.color == Some(NodeColor::Hub))
            .map(|n| n.id.as_str())
    }
}

/// Rendered HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizationDocument(String);

impl VisualizationDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for VisualizationDocument {
    fn from(html: String) -> Self {
        Self(html)
    }
}
