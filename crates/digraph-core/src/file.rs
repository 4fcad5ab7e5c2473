/// JSON document model for directed graphs.
///
/// A graph document is a single object with two arrays:
///
/// ```json
/// {"Edges": [{"src": 0, "w": 1.5, "dest": 1}],
///  "Nodes": [{"pos": "35.2,32.1,0.0", "id": 0}, {"id": 1}]}
/// ```
///
/// [`GraphFile`] mirrors that layout one-to-one; [`build_graph`] turns it into
/// a [`DiGraph`] in two passes (all nodes first, then all edges) so edge
/// records may reference nodes declared later in the array. Unknown keys are
/// ignored on input and never written on output.
use serde::{Deserialize, Serialize};

use crate::graph::{DiGraph, GraphError, GraphView};
use crate::newtypes::{NodeId, Position, Weight};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One entry of the `"Nodes"` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Layout coordinate, absent when the node has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<Position>,
    /// Unique node id.
    pub id: NodeId,
}

/// One entry of the `"Edges"` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Tail of the edge.
    pub src: NodeId,
    /// Edge weight.
    pub w: Weight,
    /// Head of the edge.
    pub dest: NodeId,
}

/// Root object of a graph document.
///
/// Both arrays default to empty when the key is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    /// Edge list.
    #[serde(rename = "Edges", default)]
    pub edges: Vec<EdgeRecord>,
    /// Node list.
    #[serde(rename = "Nodes", default)]
    pub nodes: Vec<NodeRecord>,
}

impl GraphFile {
    /// Snapshots `graph` into document form.
    ///
    /// Nodes are listed by ascending id and edges by ascending `(src, dest)`,
    /// so saving the same graph twice yields byte-identical output.
    pub fn from_graph(graph: &DiGraph) -> Self {
        let nodes = graph
            .nodes()
            .into_iter()
            .map(|id| NodeRecord {
                pos: graph.position(id),
                id,
            })
            .collect();
        let edges = graph
            .edges()
            .into_iter()
            .map(|(src, dest, w)| EdgeRecord { src, w, dest })
            .collect();
        Self { edges, nodes }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from loading or saving a graph document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The text is not a well-formed graph document.
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document is well-formed but describes an invalid graph.
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Builds a [`DiGraph`] from a parsed document.
///
/// # Errors
///
/// - [`GraphError::DuplicateNode`] if two node records share an id.
/// - [`GraphError::NodeNotFound`] if an edge references an undeclared node.
/// - [`GraphError::DuplicateEdge`] if two edge records join the same ordered pair.
/// - [`GraphError::InvalidWeight`] for negative or non-finite weights.
pub fn build_graph(file: &GraphFile) -> Result<DiGraph, GraphError> {
    let mut graph = DiGraph::with_capacity(file.nodes.len(), file.edges.len());

    for node in &file.nodes {
        graph.add_node(node.id, node.pos)?;
    }
    for edge in &file.edges {
        graph.add_edge(edge.src, edge.dest, edge.w)?;
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );
    Ok(graph)
}

/// Parses a JSON graph document and builds the graph.
///
/// # Errors
///
/// [`LoadError::Json`] for malformed JSON, [`LoadError::Graph`] for a
/// structurally invalid graph.
pub fn parse_graph(json: &str) -> Result<DiGraph, LoadError> {
    let file: GraphFile = serde_json::from_str(json)?;
    Ok(build_graph(&file)?)
}

/// Serializes `graph` to a JSON graph document.
///
/// # Errors
///
/// [`LoadError::Json`] if serialization fails.
pub fn to_json(graph: &DiGraph, pretty: bool) -> Result<String, LoadError> {
    let file = GraphFile::from_graph(graph);
    let text = if pretty {
        serde_json::to_string_pretty(&file)?
    } else {
        serde_json::to_string(&file)?
    };
    Ok(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
