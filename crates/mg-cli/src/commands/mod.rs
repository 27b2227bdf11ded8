pub mod check;
pub mod edge;
pub mod init;
pub mod list;
pub mod node;
pub mod route;
pub mod show;
pub mod travel;

use std::fs;
use std::path::Path;

use mg_graph::{Graph, LoadMode};

/// Read and parse a graph file.
pub fn load_graph(path: &Path, mode: LoadMode) -> Result<Graph, String> {
    let text =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    Graph::from_json(&text, mode).map_err(|e| format!("cannot load {}: {e}", path.display()))
}

/// Serialize a graph and write it back to its file.
pub fn save_graph(graph: &Graph, path: &Path) -> Result<(), String> {
    let json = graph
        .to_json()
        .map_err(|e| format!("cannot serialize graph: {e}"))?;
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
}
