//! Stateful multi-day trip simulator over a Midgard travel graph.
//!
//! A [`TravelSession`] tracks a traveler's current location, an optional
//! in-progress route leg, and cumulative day/distance counters. The caller
//! drives the simulation one day at a time ("travel for H hours using mode
//! M"); the session holds no timers and performs no I/O, so it can be
//! driven from a UI event handler, a script loop, or a test.

/// Error types for the simulator.
pub mod error;
/// The trip event log.
pub mod event;
/// An in-progress traversal of a single edge.
pub mod leg;
/// Travel mode speed table.
pub mod modes;
/// The trip state machine.
pub mod session;

/// Re-export error types.
pub use error::{TravelError, TravelResult};
/// Re-export trip log types.
pub use event::{TripEvent, TripEventKind, TripLog};
/// Re-export the active leg type.
pub use leg::ActiveLeg;
/// Re-export the session types.
pub use session::{DayOutcome, TravelSession, TripPlan, TripState};
