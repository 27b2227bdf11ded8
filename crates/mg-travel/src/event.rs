/// What kind of trip event occurred.
#[derive(Debug, Clone, PartialEq)]
pub enum TripEventKind {
    /// A trip was reset to a new start and destination.
    TripStarted {
        /// The starting city.
        start: String,
        /// The final destination of the trip.
        destination: String,
    },
    /// The traveler departed along a route leg.
    Departed {
        /// The city left behind.
        from: String,
        /// The far end of the leg.
        toward: String,
    },
    /// One day of travel along the active leg.
    Traveled {
        /// The mode used this day.
        mode: String,
        /// Distance covered this day in kilometers.
        km: f64,
    },
    /// The traveler arrived at the end of a leg.
    Arrived {
        /// The city arrived at.
        at: String,
    },
}

/// A record of something that happened during a trip.
#[derive(Debug, Clone)]
pub struct TripEvent {
    /// The trip day when this event occurred (0 before any travel).
    pub day: u64,
    /// The specific kind of event.
    pub kind: TripEventKind,
    /// A human-readable description, as shown in the travel log.
    pub message: String,
}

impl TripEvent {
    /// Create a new trip event.
    pub fn new(day: u64, kind: TripEventKind, message: impl Into<String>) -> Self {
        Self {
            day,
            kind,
            message: message.into(),
        }
    }
}

/// Ordered, append-only log of a trip's events.
#[derive(Debug, Clone, Default)]
pub struct TripLog {
    events: Vec<TripEvent>,
}

impl TripLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: TripEvent) {
        self.events.push(event);
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[TripEvent] {
        &self.events
    }

    /// The human-readable log lines in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.message.as_str())
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events (a trip reset starts a fresh log).
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
