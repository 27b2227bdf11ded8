use std::path::Path;

use mg_graph::{Graph, LoadMode, sample};

pub fn run(out: &Path, extend: Option<&Path>) -> Result<(), String> {
    let mut graph = match extend {
        Some(path) => super::load_graph(path, LoadMode::Strict)?,
        None => Graph::new(),
    };

    sample::populate_midgard(&mut graph).map_err(|e| format!("cannot build sample graph: {e}"))?;
    super::save_graph(&graph, out)?;

    match extend {
        Some(path) => println!(
            "Loaded {} and saved extended graph to {}",
            path.display(),
            out.display()
        ),
        None => println!("Graph saved to {}", out.display()),
    }
    Ok(())
}
