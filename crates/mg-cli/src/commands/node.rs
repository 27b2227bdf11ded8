use std::path::Path;

use clap::Args;
use mg_graph::{AttrMap, AttrValue, LoadMode};

/// Attribute flags shared by the node-editing subcommands.
#[derive(Debug, Args)]
pub struct NodeSpec {
    /// Node kind, e.g. city, village, landmark
    #[arg(long)]
    pub kind: Option<String>,

    /// Region the node belongs to
    #[arg(long)]
    pub region: Option<String>,

    /// Rough population count
    #[arg(long)]
    pub population: Option<i64>,

    /// Mark the node as a port
    #[arg(long)]
    pub port: bool,

    /// Dominant terrain around the node
    #[arg(long)]
    pub terrain: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl NodeSpec {
    fn to_attrs(&self) -> AttrMap {
        let mut attrs = AttrMap::new();
        if let Some(kind) = &self.kind {
            attrs.insert("kind".into(), AttrValue::String(kind.clone()));
        }
        if let Some(region) = &self.region {
            attrs.insert("region".into(), AttrValue::String(region.clone()));
        }
        if let Some(population) = self.population {
            attrs.insert("population".into(), AttrValue::Integer(population));
        }
        if self.port {
            attrs.insert("is_port".into(), AttrValue::Bool(true));
        }
        if let Some(terrain) = &self.terrain {
            attrs.insert("terrain".into(), AttrValue::String(terrain.clone()));
        }
        if let Some(notes) = &self.notes {
            attrs.insert("notes".into(), AttrValue::String(notes.clone()));
        }
        attrs
    }
}

pub fn add(path: &Path, id: &str, spec: &NodeSpec) -> Result<(), String> {
    let mut graph = super::load_graph(path, LoadMode::Strict)?;

    let existed = graph.node(id).is_some();
    graph.add_node(id, spec.to_attrs());
    super::save_graph(&graph, path)?;

    if existed {
        println!("Updated node {id}");
    } else {
        println!("Added node {id}");
    }
    Ok(())
}

pub fn remove(path: &Path, id: &str) -> Result<(), String> {
    let mut graph = super::load_graph(path, LoadMode::Strict)?;

    if graph.node(id).is_none() {
        return Err(format!("node not found: \"{id}\""));
    }

    let dropped = graph
        .edges()
        .filter(|(key, _)| key.touches(id))
        .count();
    graph.remove_node(id);
    super::save_graph(&graph, path)?;

    match dropped {
        0 => println!("Removed node {id}"),
        1 => println!("Removed node {id} and 1 route"),
        n => println!("Removed node {id} and {n} routes"),
    }
    Ok(())
}
