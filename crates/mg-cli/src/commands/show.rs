use std::path::Path;

use colored::Colorize;
use mg_graph::{LoadMode, edge};

pub fn run(path: &Path, id: &str) -> Result<(), String> {
    let graph = super::load_graph(path, LoadMode::Strict)?;

    let attrs = graph
        .node(id)
        .ok_or_else(|| format!("node not found: \"{id}\""))?;

    println!("  {}", id.bold());
    println!();

    for (key, value) in attrs {
        println!("  {key}: {value}");
    }
    if !attrs.is_empty() {
        println!();
    }

    let routes = graph.neighbors(id);
    if routes.is_empty() {
        println!("  {} (none)", "Routes:".dimmed());
        return Ok(());
    }

    println!("  {}", "Routes:".dimmed());
    for (other, edge_attrs) in routes {
        let kind = edge::route_type(edge_attrs).unwrap_or("route");
        let distance = edge::distance_km(edge_attrs);
        let difficulty = edge::difficulty(edge_attrs);
        println!("    {other} ({kind}, {distance:.1} km, difficulty {difficulty:.2})");
    }

    Ok(())
}
