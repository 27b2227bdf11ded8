use std::fmt;

use crate::attrs::{AttrMap, AttrValue};

/// Canonical key for an undirected edge: the two endpoint ids in sorted
/// order, so `(A, B)` and `(B, A)` name the same edge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey {
    a: String,
    b: String,
}

impl EdgeKey {
    /// Build the canonical key for a pair of node ids.
    pub fn new(x: &str, y: &str) -> Self {
        if x <= y {
            Self {
                a: x.to_string(),
                b: y.to_string(),
            }
        } else {
            Self {
                a: y.to_string(),
                b: x.to_string(),
            }
        }
    }

    /// The two endpoints in canonical (sorted) order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }

    /// Whether the given node id is one of the endpoints.
    pub fn touches(&self, id: &str) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint opposite the given one, if the id is an endpoint at all.
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.a == id {
            Some(&self.b)
        } else if self.b == id {
            Some(&self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}

/// Physical length of a route in kilometers.
///
/// Reads `approx_distance_km`, falling back to the legacy `distance_km`
/// field; missing or non-numeric values count as zero, and negative values
/// are clamped to zero.
pub fn distance_km(attrs: &AttrMap) -> f64 {
    attrs
        .get("approx_distance_km")
        .or_else(|| attrs.get("distance_km"))
        .and_then(AttrValue::as_f64)
        .unwrap_or(0.0)
        .max(0.0)
}

/// The route type label (road, trail, sea_lane, ...), if set.
pub fn route_type(attrs: &AttrMap) -> Option<&str> {
    attrs.get("route_type").and_then(AttrValue::as_str)
}

/// The travel modes permitted on a route, if the edge declares any.
pub fn allowed_modes(attrs: &AttrMap) -> Option<Vec<&str>> {
    attrs.get("allowed_modes").and_then(AttrValue::as_str_list)
}

/// Difficulty multiplier for a route.
///
/// Resolution order: an explicit `difficulty_factor`, else
/// `difficulty_modifier`, else the default for the route type.
pub fn difficulty(attrs: &AttrMap) -> f64 {
    if let Some(factor) = attrs.get("difficulty_factor").and_then(AttrValue::as_f64) {
        return factor;
    }
    if let Some(modifier) = attrs.get("difficulty_modifier").and_then(AttrValue::as_f64) {
        return modifier;
    }
    base_difficulty(route_type(attrs))
}

/// Default difficulty multiplier for a route type. Unknown types travel at
/// road pace.
pub fn base_difficulty(route_type: Option<&str>) -> f64 {
    match route_type {
        Some("road") => 1.0,
        Some("trail") => 0.85,
        Some("mountain_pass") => 0.7,
        Some("shore") => 1.0,
        Some("sea") => 1.0,
        _ => 1.0,
    }
}
