use mg_graph::AttrMap;

/// One uninterrupted traversal of a single edge, tracked with partial
/// progress across simulated days.
///
/// The edge's attribute bag is snapshotted when the leg starts, so later
/// graph edits do not change a trip already underway.
#[derive(Debug, Clone)]
pub struct ActiveLeg {
    /// Where the leg started.
    pub origin: String,
    /// Where the leg ends.
    pub destination: String,
    /// Snapshot of the route's attributes at departure.
    pub attrs: AttrMap,
    /// Total physical length of the leg in kilometers.
    pub distance_km: f64,
    /// Distance covered so far, `0 <= traveled_km <= distance_km`.
    pub traveled_km: f64,
}

impl ActiveLeg {
    /// Distance still to cover, clamped at zero.
    pub fn remaining_km(&self) -> f64 {
        (self.distance_km - self.traveled_km).max(0.0)
    }
}
