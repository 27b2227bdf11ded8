/// Alias for `Result<T, TravelError>`.
pub type TravelResult<T> = Result<T, TravelError>;

/// Input-validation failures surfaced by the trip simulator.
///
/// "No path exists" and "no current trip" are deliberately not here; they
/// are common states reported as empty results for the caller to branch on.
#[derive(Debug, thiserror::Error)]
pub enum TravelError {
    /// A trip reset referenced a node that is not in the graph.
    #[error("unknown node: \"{0}\" is not in the graph")]
    UnknownNode(String),

    /// A new leg was requested while one is already in progress.
    #[error("already traveling along a route")]
    AlreadyTraveling,

    /// The requested leg destination is the current location.
    #[error("already at {0}")]
    SameLocation(String),

    /// The requested leg destination is not adjacent to the current location.
    #[error("no route from {from} to {to}")]
    NoSuchRoute {
        /// The traveler's current location.
        from: String,
        /// The requested destination.
        to: String,
    },

    /// A travel day was requested with no leg in progress.
    #[error("no active route; start a leg first")]
    NoActiveLeg,

    /// Hours traveled must be positive.
    #[error("hours traveled must be positive (got {0})")]
    NonPositiveHours(f64),
}
