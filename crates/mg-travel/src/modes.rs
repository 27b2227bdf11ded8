//! Travel mode speed table: pure, process-wide constants.

/// Baseline walking speed, used for any unknown mode.
pub const BASELINE_SPEED_KMH: f64 = 4.5;

/// The known travel modes.
pub const DEFAULT_MODES: [&str; 9] = [
    "foot",
    "horse",
    "wagon",
    "pack_lizard",
    "barge",
    "river_boat",
    "row",
    "sail",
    "knarr",
];

/// Speed in km/h for a travel mode. Unknown modes walk.
pub fn speed_kmh(mode: &str) -> f64 {
    match mode {
        "foot" => 4.5,
        "horse" => 7.0,
        "wagon" => 5.0,
        "pack_lizard" => 6.0,
        "barge" => 6.0,
        "river_boat" => 9.0,
        "row" => 5.5,
        "sail" => 12.0,
        "knarr" => 10.0,
        _ => BASELINE_SPEED_KMH,
    }
}
