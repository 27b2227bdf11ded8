use std::collections::BTreeMap;

use crate::attrs::{AttrMap, AttrValue};
use crate::edge::EdgeKey;
use crate::error::{GraphError, GraphResult};

/// The central graph model. Owns the node and edge collections.
///
/// Both collections are ordered maps, so iteration, adjacency queries, and
/// serialized output come out in sorted-key order. The persisted files get
/// reproducible diffs and the router gets deterministic searches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: BTreeMap<String, AttrMap>,
    edges: BTreeMap<EdgeKey, AttrMap>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Nodes
    // -----------------------------------------------------------------------

    /// Add a node, or merge attributes into an existing one.
    ///
    /// New keys overwrite conflicting ones; other existing keys are kept.
    pub fn add_node(&mut self, id: impl Into<String>, attrs: AttrMap) {
        self.nodes.entry(id.into()).or_default().extend(attrs);
    }

    /// Get a node's attribute bag.
    pub fn node(&self, id: &str) -> Option<&AttrMap> {
        self.nodes.get(id)
    }

    /// Whether a node with the given id exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Remove a node and every edge incident to it. No-op if absent.
    pub fn remove_node(&mut self, id: &str) {
        self.nodes.remove(id);
        self.edges.retain(|key, _| !key.touches(id));
    }

    /// All nodes in sorted-id order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &AttrMap)> {
        self.nodes.iter().map(|(id, attrs)| (id.as_str(), attrs))
    }

    /// All node ids in sorted order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    // -----------------------------------------------------------------------
    // Edges
    // -----------------------------------------------------------------------

    /// Add an undirected edge, merging attributes into any existing edge for
    /// the same canonical pair (later writes win per key).
    ///
    /// Both endpoints must already be nodes; the stored bag always carries
    /// the `undirected` marker that the serialized form emits.
    pub fn add_edge(&mut self, a: &str, b: &str, attrs: AttrMap) -> GraphResult<()> {
        self.check_endpoints(a, b)?;
        let bag = self.edges.entry(EdgeKey::new(a, b)).or_default();
        bag.extend(attrs);
        bag.insert("undirected".to_string(), AttrValue::Bool(true));
        Ok(())
    }

    /// Replace the edge for a canonical pair wholesale (editor semantics),
    /// creating it if absent. Endpoints must already be nodes.
    pub fn upsert_edge(&mut self, a: &str, b: &str, attrs: AttrMap) -> GraphResult<()> {
        self.check_endpoints(a, b)?;
        let mut bag = attrs;
        bag.insert("undirected".to_string(), AttrValue::Bool(true));
        self.edges.insert(EdgeKey::new(a, b), bag);
        Ok(())
    }

    /// Remove the edge between two nodes. No-op if absent.
    pub fn remove_edge(&mut self, a: &str, b: &str) {
        self.edges.remove(&EdgeKey::new(a, b));
    }

    /// Get the attribute bag of the edge between two nodes, in either order.
    pub fn edge(&self, a: &str, b: &str) -> Option<&AttrMap> {
        self.edges.get(&EdgeKey::new(a, b))
    }

    /// All edges in sorted canonical-key order.
    pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, &AttrMap)> {
        self.edges.iter()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Neighbors of a node with the connecting edge's attributes.
    ///
    /// Edges are undirected, so the node may be either endpoint. The order
    /// is stable (sorted by canonical edge key). An unknown id yields an
    /// empty list rather than an error.
    pub fn neighbors(&self, id: &str) -> Vec<(&str, &AttrMap)> {
        self.edges
            .iter()
            .filter_map(|(key, attrs)| key.other(id).map(|other| (other, attrs)))
            .collect()
    }

    fn check_endpoints(&self, a: &str, b: &str) -> GraphResult<()> {
        for id in [a, b] {
            if !self.nodes.contains_key(id) {
                return Err(GraphError::MissingEndpoint(id.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag<const N: usize>(entries: [(&str, AttrValue); N]) -> AttrMap {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn two_node_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_node("A", AttrMap::new());
        graph.add_node("B", AttrMap::new());
        graph
    }

    #[test]
    fn add_node_merges_attributes() {
        let mut graph = Graph::new();
        graph.add_node(
            "Valstaad",
            bag([
                ("kind", AttrValue::String("port_city".into())),
                ("population", AttrValue::Integer(12000)),
            ]),
        );
        graph.add_node(
            "Valstaad",
            bag([("population", AttrValue::Integer(13000))]),
        );

        let attrs = graph.node("Valstaad").unwrap();
        assert_eq!(attrs["population"], AttrValue::Integer(13000));
        assert_eq!(attrs["kind"], AttrValue::String("port_city".into()));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn add_edge_requires_endpoints() {
        let mut graph = Graph::new();
        graph.add_node("A", AttrMap::new());
        let err = graph.add_edge("A", "B", AttrMap::new()).unwrap_err();
        assert!(matches!(err, GraphError::MissingEndpoint(node) if node == "B"));
    }

    #[test]
    fn add_edge_canonicalizes_and_merges() {
        let mut graph = two_node_graph();
        graph
            .add_edge("B", "A", bag([("route_type", AttrValue::String("road".into()))]))
            .unwrap();
        graph
            .add_edge("A", "B", bag([("tolls", AttrValue::Bool(true))]))
            .unwrap();

        assert_eq!(graph.edge_count(), 1);
        let attrs = graph.edge("A", "B").unwrap();
        assert_eq!(attrs["route_type"], AttrValue::String("road".into()));
        assert_eq!(attrs["tolls"], AttrValue::Bool(true));
        assert_eq!(attrs["undirected"], AttrValue::Bool(true));
        assert_eq!(graph.edge("B", "A"), graph.edge("A", "B"));
    }

    #[test]
    fn upsert_edge_replaces_attributes() {
        let mut graph = two_node_graph();
        graph
            .add_edge("A", "B", bag([("tolls", AttrValue::Bool(true))]))
            .unwrap();
        graph
            .upsert_edge("B", "A", bag([("route_type", AttrValue::String("trail".into()))]))
            .unwrap();

        let attrs = graph.edge("A", "B").unwrap();
        assert!(!attrs.contains_key("tolls"));
        assert_eq!(attrs["route_type"], AttrValue::String("trail".into()));
        assert_eq!(attrs["undirected"], AttrValue::Bool(true));
    }

    #[test]
    fn remove_edge_is_idempotent() {
        let mut graph = two_node_graph();
        graph.add_edge("A", "B", AttrMap::new()).unwrap();
        graph.remove_edge("B", "A");
        assert_eq!(graph.edge_count(), 0);
        graph.remove_edge("A", "B");
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn remove_node_cascades_to_edges() {
        let mut graph = two_node_graph();
        graph.add_node("C", AttrMap::new());
        graph.add_edge("A", "B", AttrMap::new()).unwrap();
        graph.add_edge("B", "C", AttrMap::new()).unwrap();
        graph.add_edge("A", "C", AttrMap::new()).unwrap();

        graph.remove_node("B");

        assert!(!graph.contains_node("B"));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edges().all(|(key, _)| !key.touches("B")));
    }

    #[test]
    fn neighbors_cover_both_directions() {
        let mut graph = two_node_graph();
        graph.add_node("C", AttrMap::new());
        graph.add_edge("A", "B", AttrMap::new()).unwrap();
        graph.add_edge("C", "B", AttrMap::new()).unwrap();

        let ids: Vec<&str> = graph.neighbors("B").iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["A", "C"]);
        assert_eq!(graph.neighbors("A").len(), 1);
    }

    #[test]
    fn neighbors_of_unknown_node_is_empty() {
        let graph = two_node_graph();
        assert!(graph.neighbors("Nowhere").is_empty());
    }
}
