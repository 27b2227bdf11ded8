use std::path::Path;

use clap::Args;
use mg_graph::{AttrMap, AttrValue, EdgeKey, LoadMode};

/// Attribute flags shared by the route-editing subcommands.
#[derive(Debug, Args)]
pub struct EdgeSpec {
    /// Route type, e.g. road, trail, mountain_pass, shore, sea
    #[arg(long)]
    pub route_type: Option<String>,

    /// Straight-line distance in kilometers
    #[arg(long)]
    pub distance_km: Option<f64>,

    /// Comma-separated travel modes allowed on this route
    #[arg(long, value_delimiter = ',')]
    pub modes: Vec<String>,

    /// Speed multiplier in (0, 1], overriding the route-type default
    #[arg(long)]
    pub difficulty: Option<f64>,
}

impl EdgeSpec {
    fn to_attrs(&self) -> AttrMap {
        let mut attrs = AttrMap::new();
        if let Some(route_type) = &self.route_type {
            attrs.insert("route_type".into(), AttrValue::String(route_type.clone()));
        }
        if let Some(distance) = self.distance_km {
            attrs.insert("approx_distance_km".into(), AttrValue::Float(distance));
        }
        if !self.modes.is_empty() {
            let modes = self
                .modes
                .iter()
                .map(|m| AttrValue::String(m.clone()))
                .collect();
            attrs.insert("allowed_modes".into(), AttrValue::List(modes));
        }
        if let Some(difficulty) = self.difficulty {
            attrs.insert("difficulty_factor".into(), AttrValue::Float(difficulty));
        }
        attrs
    }
}

pub fn add(
    path: &Path,
    a: &str,
    b: &str,
    spec: &EdgeSpec,
    create_missing: bool,
) -> Result<(), String> {
    let mut graph = super::load_graph(path, LoadMode::Strict)?;

    if create_missing {
        for id in [a, b] {
            if graph.node(id).is_none() {
                graph.add_node(id, AttrMap::new());
                println!("Created stub node {id}");
            }
        }
    }

    let existed = graph.edge(a, b).is_some();
    graph
        .add_edge(a, b, spec.to_attrs())
        .map_err(|e| e.to_string())?;
    super::save_graph(&graph, path)?;

    let key = EdgeKey::new(a, b);
    if existed {
        println!("Updated route {key}");
    } else {
        println!("Added route {key}");
    }
    Ok(())
}

pub fn remove(path: &Path, a: &str, b: &str) -> Result<(), String> {
    let mut graph = super::load_graph(path, LoadMode::Strict)?;

    let key = EdgeKey::new(a, b);
    if graph.edge(a, b).is_none() {
        return Err(format!("route not found: {key}"));
    }

    graph.remove_edge(a, b);
    super::save_graph(&graph, path)?;

    println!("Removed route {key}");
    Ok(())
}
