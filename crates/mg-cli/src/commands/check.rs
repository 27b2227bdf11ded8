use std::path::Path;

use colored::Colorize;
use mg_graph::LoadMode;

pub fn run(path: &Path, permissive: bool) -> Result<(), String> {
    let mode = if permissive {
        LoadMode::Permissive
    } else {
        LoadMode::Strict
    };
    let graph = super::load_graph(path, mode)?;

    println!("  {} {}", "OK".green().bold(), path.display());
    println!(
        "  {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(())
}
