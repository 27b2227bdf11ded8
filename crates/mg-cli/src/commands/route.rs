use std::path::Path;

use colored::Colorize;
use mg_graph::LoadMode;
use mg_route::shortest_path;
use mg_travel::modes::speed_kmh;

pub fn run(path: &Path, start: &str, dest: &str, mode: &str) -> Result<(), String> {
    let graph = super::load_graph(path, LoadMode::Strict)?;

    for id in [start, dest] {
        if !graph.contains_node(id) {
            return Err(format!("node not found: \"{id}\""));
        }
    }

    let plan = shortest_path(&graph, start, dest);
    if plan.is_empty() {
        println!("  No route from {start} to {dest}.");
        return Ok(());
    }

    println!("  {}", plan.nodes.join(" -> ").bold());
    println!();
    println!("  distance:      {:.1} km", plan.distance_km);
    println!("  weighted cost: {:.1}", plan.weighted_cost);

    let speed = speed_kmh(mode);
    let hours = plan.distance_km / speed;
    println!("  by {mode}:       {hours:.1} h at {speed:.1} km/h");

    Ok(())
}
