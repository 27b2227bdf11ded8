use std::path::Path;

use colored::Colorize;
use mg_graph::LoadMode;
use mg_travel::{TravelSession, TripState};

pub fn run(
    path: &Path,
    start: &str,
    dest: &str,
    mode: &str,
    hours: f64,
    max_days: u64,
) -> Result<(), String> {
    let graph = super::load_graph(path, LoadMode::Strict)?;

    let mut session = TravelSession::new();
    session
        .reset_trip(&graph, start, dest)
        .map_err(|e| e.to_string())?;

    let plan = session.remaining_plan(&graph);
    if plan.route.is_empty() {
        return Err(format!("no route from {start} to {dest}"));
    }

    while !session.trip_complete() {
        if session.day >= max_days {
            return Err(format!(
                "gave up after {max_days} days with {:.1} km still to go",
                session.remaining_plan(&graph).total_km
            ));
        }
        if session.state() != TripState::Traveling {
            // Trip not complete and the route exists, so there is a next hop.
            let next = session.remaining_plan(&graph).route.nodes[1].clone();
            session.start_leg(&graph, &next).map_err(|e| e.to_string())?;
        }
        session.travel_day(mode, hours).map_err(|e| e.to_string())?;
    }

    for event in session.log.events() {
        if event.message.starts_with("Arrived") {
            println!("  {}", event.message.green());
        } else {
            println!("  {}", event.message);
        }
    }
    println!();
    println!(
        "  {} days, {:.1} km total",
        session.day, session.total_traveled_km
    );

    Ok(())
}
