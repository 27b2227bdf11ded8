//! Weighted shortest-path routing over a Midgard travel graph.
//!
//! The router compares routes by `distance x difficulty` but reports the
//! plain physical distance alongside the weighted cost, so displays can
//! show real kilometers while the search prefers easy terrain.

/// Dijkstra search and the resulting route plan.
pub mod planner;

/// Re-export the planner entry points.
pub use planner::{RoutePlan, shortest_path};
