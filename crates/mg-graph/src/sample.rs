//! The built-in Midgard sample network: seven cities and landmarks joined
//! by overland, river, and sea routes. Used by the CLI `init` command and
//! as a realistic fixture in tests.

use crate::attrs::{AttrMap, AttrValue};
use crate::error::GraphResult;
use crate::graph::Graph;

fn s(value: &str) -> AttrValue {
    AttrValue::String(value.to_string())
}

fn i(value: i64) -> AttrValue {
    AttrValue::Integer(value)
}

fn b(value: bool) -> AttrValue {
    AttrValue::Bool(value)
}

fn list(values: &[&str]) -> AttrValue {
    AttrValue::List(values.iter().map(|v| s(v)).collect())
}

fn bag<const N: usize>(entries: [(&str, AttrValue); N]) -> AttrMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Build the Midgard sample network as a fresh graph.
pub fn midgard() -> GraphResult<Graph> {
    let mut graph = Graph::new();
    populate_midgard(&mut graph)?;
    Ok(graph)
}

/// Merge the Midgard sample network into an existing graph.
///
/// Nodes and edges already present pick up the sample attributes per the
/// usual merge rules, so this can extend a hand-edited file with defaults.
pub fn populate_midgard(graph: &mut Graph) -> GraphResult<()> {
    graph.add_node(
        "Valstaad",
        bag([
            ("kind", s("port_city")),
            ("region", s("North Sea coast")),
            ("population", i(12000)),
            ("is_port", b(true)),
            ("terrain", s("coastal plains")),
            ("notes", s("Main northern trading hub with reliable shipyards.")),
        ]),
    );
    graph.add_node(
        "Thornwell",
        bag([
            ("kind", s("market_town")),
            ("region", s("Heartland")),
            ("population", i(5500)),
            ("is_port", b(false)),
            ("terrain", s("farmland")),
            ("notes", s("Crossroads town with an annual horse fair.")),
        ]),
    );
    graph.add_node(
        "Rivermeet",
        bag([
            ("kind", s("river_port")),
            ("region", s("Heartland")),
            ("population", i(4300)),
            ("is_port", b(true)),
            ("terrain", s("river valley")),
            ("notes", s("Barges change hands here; city has secure warehouses.")),
        ]),
    );
    graph.add_node(
        "Fjellhaven",
        bag([
            ("kind", s("mountain_hold")),
            ("region", s("Frostspire Mountains")),
            ("population", i(2200)),
            ("is_port", b(false)),
            ("terrain", s("high mountains")),
            ("notes", s("Steep approach; pass closes after heavy snows.")),
        ]),
    );
    graph.add_node(
        "Oakheart",
        bag([
            ("kind", s("forest_village")),
            ("region", s("Silverwood")),
            ("population", i(1300)),
            ("is_port", b(false)),
            ("terrain", s("dense forest")),
            ("notes", s("Woodcutters and rangers; frequent wolf sightings.")),
        ]),
    );
    graph.add_node(
        "Stormwatch Keep",
        bag([
            ("kind", s("fortress")),
            ("region", s("Windshore Cliffs")),
            ("population", i(800)),
            ("is_port", b(false)),
            ("terrain", s("clifftop")),
            ("notes", s("Signal beacons mark safe coves during storms.")),
        ]),
    );
    graph.add_node(
        "Isenfjord",
        bag([
            ("kind", s("fishing_hamlet")),
            ("region", s("Frozen Coast")),
            ("population", i(900)),
            ("is_port", b(true)),
            ("terrain", s("arctic shore")),
            ("notes", s("Sea ice common in late winter; small sheltered harbor.")),
        ]),
    );

    // Overland routes
    graph.add_edge(
        "Valstaad",
        "Thornwell",
        bag([
            ("route_type", s("road")),
            ("approx_distance_km", i(140)),
            ("surface", s("paved")),
            ("terrain", s("plains")),
            ("allowed_modes", list(&["foot", "horse", "wagon"])),
            ("tolls", b(false)),
            ("typical_rest_stops", list(&["Wayside Inn", "Red Ford"])),
        ]),
    )?;
    graph.add_edge(
        "Thornwell",
        "Rivermeet",
        bag([
            ("route_type", s("road")),
            ("approx_distance_km", i(60)),
            ("surface", s("packed earth")),
            ("terrain", s("farmland")),
            ("allowed_modes", list(&["foot", "horse", "wagon"])),
            ("tolls", b(false)),
            ("hazards", list(&["spring floods near the river"])),
        ]),
    )?;
    graph.add_edge(
        "Rivermeet",
        "Oakheart",
        bag([
            ("route_type", s("trail")),
            ("approx_distance_km", i(45)),
            ("surface", s("forest path")),
            ("terrain", s("forest")),
            ("allowed_modes", list(&["foot", "horse"])),
            ("tolls", b(false)),
            ("hazards", list(&["bandits near the old mill"])),
        ]),
    )?;
    graph.add_edge(
        "Thornwell",
        "Fjellhaven",
        bag([
            ("route_type", s("mountain_pass")),
            ("approx_distance_km", i(110)),
            ("surface", s("stone and scree")),
            ("terrain", s("mountain")),
            ("allowed_modes", list(&["foot", "horse", "pack_lizard"])),
            ("tolls", b(true)),
            ("seasonal_availability", s("closed after first heavy snow")),
            ("hazards", list(&["rockfalls", "thin air"])),
        ]),
    )?;
    graph.add_edge(
        "Oakheart",
        "Stormwatch Keep",
        bag([
            ("route_type", s("clifftop_track")),
            ("approx_distance_km", i(70)),
            ("surface", s("rocky")),
            ("terrain", s("cliffs")),
            ("allowed_modes", list(&["foot", "horse"])),
            ("tolls", b(false)),
            ("hazards", list(&["high winds"])),
        ]),
    )?;

    // River and sea routes
    graph.add_edge(
        "Rivermeet",
        "Valstaad",
        bag([
            ("route_type", s("river")),
            ("approx_distance_km", i(160)),
            ("current", s("moderate")),
            ("terrain", s("river")),
            ("allowed_modes", list(&["barge", "river_boat"])),
            ("requires_portage", b(false)),
            (
                "notes",
                s("Fast downstream, slower upstream; guarded stretches near Valstaad."),
            ),
        ]),
    )?;
    graph.add_edge(
        "Valstaad",
        "Isenfjord",
        bag([
            ("route_type", s("sea_lane")),
            ("approx_distance_km", i(320)),
            ("open_sea", b(true)),
            ("along_shore", b(false)),
            ("allowed_modes", list(&["sail", "row", "knarr"])),
            ("hazards", list(&["squalls", "icebergs late winter"])),
            ("preferred_weather", s("calm seas")),
        ]),
    )?;
    graph.add_edge(
        "Valstaad",
        "Stormwatch Keep",
        bag([
            ("route_type", s("sea_lane")),
            ("approx_distance_km", i(85)),
            ("open_sea", b(false)),
            ("along_shore", b(true)),
            ("allowed_modes", list(&["sail", "row"])),
            ("hazards", list(&["shoals near Beacon Point"])),
            (
                "notes",
                s("Faster in clear weather; beacon fires guide night approach."),
            ),
        ]),
    )?;
    graph.add_edge(
        "Stormwatch Keep",
        "Isenfjord",
        bag([
            ("route_type", s("sea_lane")),
            ("approx_distance_km", i(260)),
            ("open_sea", b(false)),
            ("along_shore", b(true)),
            ("allowed_modes", list(&["sail", "row", "knarr"])),
            ("hazards", list(&["ice floes", "fog banks"])),
        ]),
    )?;

    // Second declaration of the same connection merges in extra metadata.
    graph.add_edge(
        "Rivermeet",
        "Thornwell",
        bag([
            ("route_type", s("road")),
            ("approx_distance_km", i(60)),
            ("surface", s("packed earth")),
            ("terrain", s("farmland")),
            ("allowed_modes", list(&["foot", "horse", "wagon"])),
            ("tolls", b(false)),
            ("hazards", list(&["spring floods near the river"])),
            (
                "notes",
                s("Defined separately in case travel modifiers differ upstream."),
            ),
        ]),
    )?;

    Ok(())
}
