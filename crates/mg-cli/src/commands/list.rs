use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use mg_graph::{AttrValue, LoadMode};

pub fn run(path: &Path) -> Result<(), String> {
    let graph = super::load_graph(path, LoadMode::Strict)?;

    if graph.node_count() == 0 {
        println!("  No nodes found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Kind", "Region", "Population", "Port", "Routes"]);

    for (id, attrs) in graph.nodes() {
        let kind = attrs
            .get("kind")
            .and_then(AttrValue::as_str)
            .unwrap_or("-");
        let region = attrs
            .get("region")
            .and_then(AttrValue::as_str)
            .unwrap_or("-");
        let population = attrs
            .get("population")
            .map(AttrValue::to_string)
            .unwrap_or_else(|| "-".to_string());
        let port = match attrs.get("is_port").and_then(AttrValue::as_bool) {
            Some(true) => "yes",
            _ => "no",
        };
        let routes = graph.neighbors(id).len().to_string();
        table.add_row(vec![id, kind, region, population.as_str(), port, routes.as_str()]);
    }

    println!("{table}");
    println!();
    println!("  {} nodes, {} edges", graph.node_count(), graph.edge_count());

    Ok(())
}
