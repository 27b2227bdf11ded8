use mg_graph::edge::{difficulty, distance_km, route_type};
use mg_graph::{AttrMap, Graph};
use mg_route::{RoutePlan, shortest_path};

use crate::error::{TravelError, TravelResult};
use crate::event::{TripEvent, TripEventKind, TripLog};
use crate::leg::ActiveLeg;
use crate::modes::speed_kmh;

/// Tolerance for deciding a leg is finished. The clamp makes the traveled
/// distance land exactly on the leg length, but both the tolerance check
/// and the overshoot check are kept to be robust to floating-point drift.
const ARRIVAL_TOLERANCE_KM: f64 = 1e-9;

/// Where a session is in its trip lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripState {
    /// No trip has been started.
    Idle,
    /// At a city with no leg in progress.
    AtLocation,
    /// Partway along a route leg.
    Traveling,
}

/// Result of one simulated day of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct DayOutcome {
    /// The day number after this call (increments by exactly 1 per call).
    pub day: u64,
    /// Distance covered this day in kilometers, after clamping.
    pub traveled_km: f64,
    /// Distance left on the leg, 0 if the traveler just arrived.
    pub remaining_leg_km: f64,
    /// The traveler's current city (the leg's far end on arrival).
    pub at_city: String,
    /// Whether this day completed the leg.
    pub leg_complete: bool,
}

/// Routing projection from the traveler's position to the trip destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripPlan {
    /// Kilometers left on the in-progress leg, 0 when not traveling.
    pub leg_remaining_km: f64,
    /// Shortest path onward from the leg's far end (or the current city).
    pub route: RoutePlan,
    /// Leg remainder plus the route's physical distance.
    pub total_km: f64,
}

impl TripPlan {
    /// Hours to cover the remaining total at the given mode's speed.
    pub fn estimate_hours(&self, mode: &str) -> f64 {
        self.total_km / speed_kmh(mode)
    }
}

/// A traveler's trip through the graph: current location, optional active
/// leg, day counter, cumulative distance, and the travel log.
///
/// Runtime-only state; never persisted. The graph is passed by reference
/// to the operations that consult it, and each session is owned by exactly
/// one caller at a time.
#[derive(Debug, Clone, Default)]
pub struct TravelSession {
    /// Where the current trip began.
    pub start_city: Option<String>,
    /// The trip's final destination.
    pub destination_city: Option<String>,
    /// The traveler's current city (the leg origin while traveling).
    pub current_city: Option<String>,
    /// The in-progress leg, if any.
    pub active_leg: Option<ActiveLeg>,
    /// Number of days traveled this trip.
    pub day: u64,
    /// Total distance covered this trip, across all legs.
    pub total_traveled_km: f64,
    /// Ordered log of everything that happened this trip.
    pub log: TripLog,
}

impl TravelSession {
    /// Create an idle session with no trip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the session is in its trip lifecycle.
    pub fn state(&self) -> TripState {
        if self.active_leg.is_some() {
            TripState::Traveling
        } else if self.current_city.is_some() {
            TripState::AtLocation
        } else {
            TripState::Idle
        }
    }

    /// Whether the traveler is at the trip destination with no leg active.
    pub fn trip_complete(&self) -> bool {
        self.state() == TripState::AtLocation && self.current_city == self.destination_city
    }

    /// Start a fresh trip from `start` to `destination`.
    ///
    /// Hard reset: clears any active leg, counters, and the log, then
    /// places the traveler at `start`. Both endpoints must be graph nodes.
    pub fn reset_trip(&mut self, graph: &Graph, start: &str, destination: &str) -> TravelResult<()> {
        for id in [start, destination] {
            if !graph.contains_node(id) {
                return Err(TravelError::UnknownNode(id.to_string()));
            }
        }
        self.start_city = Some(start.to_string());
        self.destination_city = Some(destination.to_string());
        self.current_city = Some(start.to_string());
        self.active_leg = None;
        self.day = 0;
        self.total_traveled_km = 0.0;
        self.log.clear();
        self.log.push(TripEvent::new(
            0,
            TripEventKind::TripStarted {
                start: start.to_string(),
                destination: destination.to_string(),
            },
            format!("Trip begins at {start}, heading to {destination}"),
        ));
        Ok(())
    }

    /// Routes leaving the current city: (neighbor, edge attributes) pairs.
    /// Empty when no trip is underway.
    pub fn available_routes<'g>(&self, graph: &'g Graph) -> Vec<(&'g str, &'g AttrMap)> {
        match &self.current_city {
            Some(city) => graph.neighbors(city),
            None => Vec::new(),
        }
    }

    /// Begin traveling toward an adjacent city.
    ///
    /// Snapshots the connecting edge's attributes and physical distance
    /// into the new active leg.
    pub fn start_leg(&mut self, graph: &Graph, destination: &str) -> TravelResult<&ActiveLeg> {
        if self.active_leg.is_some() {
            return Err(TravelError::AlreadyTraveling);
        }
        if Some(destination) == self.current_city.as_deref() {
            return Err(TravelError::SameLocation(destination.to_string()));
        }
        let from = self
            .current_city
            .clone()
            .unwrap_or_else(|| "(no trip)".to_string());
        let attrs = self
            .available_routes(graph)
            .into_iter()
            .find(|(neighbor, _)| *neighbor == destination)
            .map(|(_, attrs)| attrs.clone())
            .ok_or_else(|| TravelError::NoSuchRoute {
                from: from.clone(),
                to: destination.to_string(),
            })?;

        let leg_distance = distance_km(&attrs);
        let via = route_type(&attrs).unwrap_or("route").to_string();
        self.log.push(TripEvent::new(
            self.day,
            TripEventKind::Departed {
                from: from.clone(),
                toward: destination.to_string(),
            },
            format!("Departed {from} toward {destination} ({leg_distance:.1} km via {via})"),
        ));
        Ok(self.active_leg.insert(ActiveLeg {
            origin: from,
            destination: destination.to_string(),
            attrs,
            distance_km: leg_distance,
            traveled_km: 0.0,
        }))
    }

    /// Travel for `hours` using `mode`, covering
    /// `speed(mode) x hours x difficulty(leg)` kilometers, clamped to what
    /// is left of the leg. Completing the leg moves the traveler to its
    /// far end and clears it.
    pub fn travel_day(&mut self, mode: &str, hours: f64) -> TravelResult<DayOutcome> {
        let Some(leg) = self.active_leg.as_mut() else {
            return Err(TravelError::NoActiveLeg);
        };
        if hours <= 0.0 {
            return Err(TravelError::NonPositiveHours(hours));
        }

        self.day += 1;
        let speed = speed_kmh(mode);
        let leg_difficulty = difficulty(&leg.attrs);
        let potential = speed * hours * leg_difficulty;
        let traveled = potential.min(leg.remaining_km());
        leg.traveled_km += traveled;
        self.total_traveled_km += traveled;

        let arrived = (leg.distance_km - leg.traveled_km).abs() <= ARRIVAL_TOLERANCE_KM
            || leg.traveled_km >= leg.distance_km;

        self.log.push(TripEvent::new(
            self.day,
            TripEventKind::Traveled {
                mode: mode.to_string(),
                km: traveled,
            },
            format!(
                "Day {}: {mode} for {hours:.1}h at {speed:.1} km/h \
                 (difficulty {leg_difficulty:.2}); covered {traveled:.1} km",
                self.day
            ),
        ));

        let remaining = leg.remaining_km();
        let mut at_city = leg.origin.clone();
        if arrived {
            let arrival_city = leg.destination.clone();
            self.current_city = Some(arrival_city.clone());
            self.active_leg = None;
            self.log.push(TripEvent::new(
                self.day,
                TripEventKind::Arrived {
                    at: arrival_city.clone(),
                },
                format!("Arrived at {arrival_city}"),
            ));
            at_city = arrival_city;
        }

        Ok(DayOutcome {
            day: self.day,
            traveled_km: traveled,
            remaining_leg_km: if arrived { 0.0 } else { remaining },
            at_city,
            leg_complete: arrived,
        })
    }

    /// Projected distance for one day on the active leg, without moving.
    pub fn project_day(&self, mode: &str, hours: f64) -> Option<f64> {
        let leg = self.active_leg.as_ref()?;
        Some(speed_kmh(mode) * hours * difficulty(&leg.attrs))
    }

    /// Shortest-path projection to the trip destination from the active
    /// leg's far end (or the current city when not traveling), combined
    /// with the leg's remaining distance.
    pub fn remaining_plan(&self, graph: &Graph) -> TripPlan {
        let leg_remaining_km = self
            .active_leg
            .as_ref()
            .map(ActiveLeg::remaining_km)
            .unwrap_or(0.0);
        let from = self
            .active_leg
            .as_ref()
            .map(|leg| leg.destination.as_str())
            .or(self.current_city.as_deref());
        let route = match (from, self.destination_city.as_deref()) {
            (Some(from), Some(dest)) => shortest_path(graph, from, dest),
            _ => RoutePlan::default(),
        };
        TripPlan {
            leg_remaining_km,
            total_km: leg_remaining_km + route.distance_km,
            route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mg_graph::AttrValue;

    fn bag<const N: usize>(entries: [(&str, AttrValue); N]) -> AttrMap {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    /// A -- B (50 km) -- C (10 km), plus an isolated island.
    fn test_graph() -> Graph {
        let mut graph = Graph::new();
        for id in ["A", "B", "C", "Island"] {
            graph.add_node(id, AttrMap::new());
        }
        graph
            .add_edge("A", "B", bag([("approx_distance_km", AttrValue::Float(50.0))]))
            .unwrap();
        graph
            .add_edge("B", "C", bag([("approx_distance_km", AttrValue::Float(10.0))]))
            .unwrap();
        graph
    }

    fn session_at_a(graph: &Graph) -> TravelSession {
        let mut session = TravelSession::new();
        session.reset_trip(graph, "A", "C").unwrap();
        session
    }

    #[test]
    fn fresh_session_is_idle() {
        let session = TravelSession::new();
        assert_eq!(session.state(), TripState::Idle);
        assert!(!session.trip_complete());
        assert!(session.available_routes(&test_graph()).is_empty());
    }

    #[test]
    fn reset_requires_known_nodes() {
        let graph = test_graph();
        let mut session = TravelSession::new();
        let err = session.reset_trip(&graph, "A", "Atlantis").unwrap_err();
        assert!(matches!(err, TravelError::UnknownNode(node) if node == "Atlantis"));
        assert_eq!(session.state(), TripState::Idle);
    }

    #[test]
    fn reset_places_traveler_and_logs() {
        let graph = test_graph();
        let session = session_at_a(&graph);
        assert_eq!(session.state(), TripState::AtLocation);
        assert_eq!(session.current_city.as_deref(), Some("A"));
        assert_eq!(session.day, 0);
        let messages: Vec<&str> = session.log.messages().collect();
        assert_eq!(messages, vec!["Trip begins at A, heading to C"]);
    }

    #[test]
    fn reset_is_a_hard_reset() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        session.start_leg(&graph, "B").unwrap();
        session.travel_day("foot", 2.0).unwrap();

        session.reset_trip(&graph, "B", "A").unwrap();
        assert_eq!(session.day, 0);
        assert_eq!(session.total_traveled_km, 0.0);
        assert!(session.active_leg.is_none());
        assert_eq!(session.log.len(), 1);
    }

    #[test]
    fn start_leg_snapshots_edge() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        let leg = session.start_leg(&graph, "B").unwrap();
        assert_eq!(leg.origin, "A");
        assert_eq!(leg.destination, "B");
        assert_eq!(leg.distance_km, 50.0);
        assert_eq!(session.state(), TripState::Traveling);
    }

    #[test]
    fn start_leg_rejects_double_start() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        session.start_leg(&graph, "B").unwrap();
        let err = session.start_leg(&graph, "B").unwrap_err();
        assert!(matches!(err, TravelError::AlreadyTraveling));
    }

    #[test]
    fn start_leg_rejects_current_city() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        let err = session.start_leg(&graph, "A").unwrap_err();
        assert!(matches!(err, TravelError::SameLocation(city) if city == "A"));
    }

    #[test]
    fn start_leg_rejects_non_adjacent() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        let err = session.start_leg(&graph, "C").unwrap_err();
        assert!(matches!(
            err,
            TravelError::NoSuchRoute { from, to } if from == "A" && to == "C"
        ));
    }

    #[test]
    fn travel_day_requires_active_leg() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        let err = session.travel_day("foot", 8.0).unwrap_err();
        assert!(matches!(err, TravelError::NoActiveLeg));
    }

    #[test]
    fn travel_day_rejects_non_positive_hours() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        session.start_leg(&graph, "B").unwrap();
        let err = session.travel_day("foot", 0.0).unwrap_err();
        assert!(matches!(err, TravelError::NonPositiveHours(_)));
        // Failed days do not count.
        assert_eq!(session.day, 0);
    }

    #[test]
    fn travel_day_clamps_to_leg_distance() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        session.start_leg(&graph, "B").unwrap();

        // 4.5 km/h * 100 h = 450 km of walking against a 50 km leg.
        let outcome = session.travel_day("foot", 100.0).unwrap();
        assert_eq!(outcome.traveled_km, 50.0);
        assert_eq!(outcome.remaining_leg_km, 0.0);
        assert!(outcome.leg_complete);
        assert_eq!(outcome.at_city, "B");
        assert_eq!(session.current_city.as_deref(), Some("B"));
        assert_eq!(session.state(), TripState::AtLocation);
        assert_eq!(session.total_traveled_km, 50.0);
    }

    #[test]
    fn day_increments_by_one_per_call() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        session.start_leg(&graph, "B").unwrap();
        assert_eq!(session.travel_day("foot", 8.0).unwrap().day, 1);
        assert_eq!(session.travel_day("foot", 1.0).unwrap().day, 2);
        assert_eq!(session.travel_day("horse", 18.0).unwrap().day, 3);
    }

    #[test]
    fn partial_day_leaves_leg_in_progress() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        session.start_leg(&graph, "B").unwrap();

        // 4.5 km/h * 8 h = 36 km of the 50 km leg.
        let outcome = session.travel_day("foot", 8.0).unwrap();
        assert!((outcome.traveled_km - 36.0).abs() < 1e-9);
        assert!((outcome.remaining_leg_km - 14.0).abs() < 1e-9);
        assert!(!outcome.leg_complete);
        assert_eq!(outcome.at_city, "A");
        assert_eq!(session.state(), TripState::Traveling);
    }

    #[test]
    fn difficulty_scales_daily_distance() {
        let mut graph = test_graph();
        graph
            .add_edge(
                "A",
                "B",
                bag([("route_type", AttrValue::String("trail".into()))]),
            )
            .unwrap();
        let mut session = session_at_a(&graph);
        session.start_leg(&graph, "B").unwrap();

        // 4.5 * 8 * 0.85 = 30.6 km on a trail.
        let outcome = session.travel_day("foot", 8.0).unwrap();
        assert!((outcome.traveled_km - 30.6).abs() < 1e-9);
    }

    #[test]
    fn full_trip_over_two_legs() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);

        session.start_leg(&graph, "B").unwrap();
        while session.state() == TripState::Traveling {
            session.travel_day("horse", 10.0).unwrap();
        }
        assert_eq!(session.current_city.as_deref(), Some("B"));
        assert!(!session.trip_complete());

        session.start_leg(&graph, "C").unwrap();
        let outcome = session.travel_day("horse", 10.0).unwrap();
        assert!(outcome.leg_complete);
        assert!(session.trip_complete());
        assert_eq!(session.total_traveled_km, 60.0);

        let last = session.log.messages().last().unwrap().to_string();
        assert_eq!(last, "Arrived at C");
    }

    #[test]
    fn departure_log_mentions_route() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        session.start_leg(&graph, "B").unwrap();
        let messages: Vec<&str> = session.log.messages().collect();
        assert_eq!(messages[1], "Departed A toward B (50.0 km via route)");
    }

    #[test]
    fn project_day_does_not_move() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        assert_eq!(session.project_day("foot", 8.0), None);

        session.start_leg(&graph, "B").unwrap();
        let projected = session.project_day("foot", 8.0).unwrap();
        assert!((projected - 36.0).abs() < 1e-9);
        assert_eq!(session.day, 0);
        assert_eq!(session.active_leg.as_ref().unwrap().traveled_km, 0.0);
    }

    #[test]
    fn remaining_plan_from_current_city() {
        let graph = test_graph();
        let session = session_at_a(&graph);
        let plan = session.remaining_plan(&graph);
        assert_eq!(plan.leg_remaining_km, 0.0);
        assert_eq!(plan.route.nodes, vec!["A", "B", "C"]);
        assert!((plan.total_km - 60.0).abs() < 1e-9);
    }

    #[test]
    fn remaining_plan_spans_active_leg() {
        let graph = test_graph();
        let mut session = session_at_a(&graph);
        session.start_leg(&graph, "B").unwrap();
        session.travel_day("foot", 8.0).unwrap();

        let plan = session.remaining_plan(&graph);
        assert!((plan.leg_remaining_km - 14.0).abs() < 1e-9);
        assert_eq!(plan.route.nodes, vec!["B", "C"]);
        assert!((plan.total_km - 24.0).abs() < 1e-9);
        // 24 km at 4.5 km/h.
        assert!((plan.estimate_hours("foot") - 24.0 / 4.5).abs() < 1e-9);
    }

    #[test]
    fn remaining_plan_reports_no_route_to_island() {
        let graph = test_graph();
        let mut session = TravelSession::new();
        session.reset_trip(&graph, "A", "Island").unwrap();
        let plan = session.remaining_plan(&graph);
        assert!(plan.route.is_empty());
        assert_eq!(plan.total_km, 0.0);
    }
}
