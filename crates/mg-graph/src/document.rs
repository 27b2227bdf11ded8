use serde::{Deserialize, Serialize};

use crate::attrs::AttrMap;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// How a loader treats edges whose endpoints are missing from the node list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadMode {
    /// Reject unknown endpoints with [`GraphError::MissingEndpoint`].
    #[default]
    Strict,
    /// Auto-create empty stub nodes for unknown endpoints.
    Permissive,
}

/// One node in the serialized graph: its id plus a flattened attribute bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Unique node identifier.
    pub id: String,
    /// All other attributes, preserved opaquely.
    #[serde(flatten)]
    pub attrs: AttrMap,
}

/// One edge in the serialized graph.
///
/// Writers always emit the two-element `nodes` list; readers also accept
/// `source`/`target` fields and normalize them to the pair form. The
/// `undirected` marker travels inside the attribute bag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// The endpoint pair, in the form writers emit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<String>>,
    /// Alternate endpoint spelling accepted on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Alternate endpoint spelling accepted on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// All other attributes, preserved opaquely.
    #[serde(flatten)]
    pub attrs: AttrMap,
}

impl EdgeRecord {
    /// The endpoints in whichever form the record carries.
    pub fn endpoints(&self) -> Option<(&str, &str)> {
        if let Some(pair) = &self.nodes {
            if pair.len() == 2 {
                return Some((&pair[0], &pair[1]));
            }
        }
        match (&self.source, &self.target) {
            (Some(source), Some(target)) => Some((source, target)),
            _ => None,
        }
    }
}

/// The serialized form of a graph: a node list and an edge list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// All nodes, typically in sorted-id order.
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    /// All edges, typically in sorted canonical-pair order.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl Graph {
    /// Serialize to a document, nodes and edges in sorted-key order.
    pub fn to_document(&self) -> Document {
        let nodes = self
            .nodes()
            .map(|(id, attrs)| NodeRecord {
                id: id.to_string(),
                attrs: attrs.clone(),
            })
            .collect();
        let edges = self
            .edges()
            .map(|(key, attrs)| {
                let (a, b) = key.endpoints();
                EdgeRecord {
                    nodes: Some(vec![a.to_string(), b.to_string()]),
                    source: None,
                    target: None,
                    attrs: attrs.clone(),
                }
            })
            .collect();
        Document { nodes, edges }
    }

    /// Build a graph from a document, rejecting unknown edge endpoints.
    pub fn from_document(doc: &Document) -> GraphResult<Self> {
        Self::from_document_with(doc, LoadMode::default())
    }

    /// Build a graph from a document with the given endpoint policy.
    pub fn from_document_with(doc: &Document, mode: LoadMode) -> GraphResult<Self> {
        let mut graph = Graph::new();
        for node in &doc.nodes {
            graph.add_node(&node.id, node.attrs.clone());
        }
        for (index, edge) in doc.edges.iter().enumerate() {
            let Some((a, b)) = edge.endpoints() else {
                return Err(GraphError::MalformedEdge(index));
            };
            if mode == LoadMode::Permissive {
                for id in [a, b] {
                    if !graph.contains_node(id) {
                        graph.add_node(id, AttrMap::new());
                    }
                }
            }
            graph.add_edge(a, b, edge.attrs.clone())?;
        }
        Ok(graph)
    }

    /// Serialize to pretty-printed JSON (diff-friendly graph files).
    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Parse a JSON document with the given endpoint policy.
    pub fn from_json(text: &str, mode: LoadMode) -> GraphResult<Self> {
        let doc: Document = serde_json::from_str(text)?;
        Self::from_document_with(&doc, mode)
    }
}
