use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use mg_graph::Graph;
use mg_graph::edge::{difficulty, distance_km};

/// The result of a shortest-path query.
///
/// An empty `nodes` list means "no route": the endpoints were unset,
/// unknown, or unreachable from one another. Callers branch on
/// [`RoutePlan::is_empty`] rather than handling an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePlan {
    /// The path from start to destination, both inclusive.
    pub nodes: Vec<String>,
    /// Unweighted physical length of the path in kilometers.
    pub distance_km: f64,
    /// Sum of `distance x difficulty` along the path; the quantity the
    /// search minimized.
    pub weighted_cost: f64,
}

impl RoutePlan {
    /// Whether the query found no route.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of legs (edges) in the path.
    pub fn leg_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Pending visit in the search frontier, ordered so the binary heap pops
/// the cheapest entry first (node id breaks cost ties, keeping the order
/// total and the search deterministic).
#[derive(Debug, PartialEq)]
struct Visit {
    cost: f64,
    node: String,
}

impl Eq for Visit {}

impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Least-cost path between two nodes, weighting each edge by
/// `distance x difficulty`.
///
/// Same start and destination yields the single-node path with zero
/// distances. Unset (empty) or unknown endpoints, and unreachable
/// destinations, yield the empty plan.
pub fn shortest_path(graph: &Graph, start: &str, dest: &str) -> RoutePlan {
    if start.is_empty() || dest.is_empty() {
        return RoutePlan::default();
    }
    if !graph.contains_node(start) || !graph.contains_node(dest) {
        return RoutePlan::default();
    }
    if start == dest {
        return RoutePlan {
            nodes: vec![start.to_string()],
            ..RoutePlan::default()
        };
    }

    let mut best: HashMap<String, f64> = HashMap::new();
    let mut prev: HashMap<String, String> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    best.insert(start.to_string(), 0.0);
    frontier.push(Visit {
        cost: 0.0,
        node: start.to_string(),
    });

    while let Some(Visit { cost, node }) = frontier.pop() {
        if node == dest {
            break;
        }
        // Stale entry: a cheaper visit to this node was already processed.
        if cost > best.get(&node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        for (neighbor, attrs) in graph.neighbors(&node) {
            let weight = distance_km(attrs) * difficulty(attrs);
            let candidate = cost + weight;
            if candidate < best.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                best.insert(neighbor.to_string(), candidate);
                prev.insert(neighbor.to_string(), node.clone());
                frontier.push(Visit {
                    cost: candidate,
                    node: neighbor.to_string(),
                });
            }
        }
    }

    let Some(&weighted_cost) = best.get(dest) else {
        return RoutePlan::default();
    };

    // Walk the predecessor chain, summing unweighted distances for display.
    let mut nodes = vec![dest.to_string()];
    let mut physical = 0.0;
    let mut current = dest.to_string();
    while current != start {
        let Some(parent) = prev.get(&current) else {
            return RoutePlan::default();
        };
        if let Some(attrs) = graph.edge(parent, &current) {
            physical += distance_km(attrs);
        }
        current = parent.clone();
        nodes.push(current.clone());
    }
    nodes.reverse();

    RoutePlan {
        nodes,
        distance_km: physical,
        weighted_cost,
    }
}
