//! CLI front end for the Midgard travel tools: build and edit graph files,
//! query routes, and play trips day by day.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::edge::EdgeSpec;
use commands::node::NodeSpec;

#[derive(Parser)]
#[command(
    name = "mg",
    about = "Midgard travel tools: graph builder, route planner, and trip simulator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in Midgard sample graph to a JSON file
    Init {
        /// Output path for the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        out: PathBuf,

        /// Load an existing graph first and merge the sample into it
        #[arg(long)]
        extend: Option<PathBuf>,
    },

    /// Validate a graph file and report its shape
    Check {
        /// Path to the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        graph: PathBuf,

        /// Auto-create stub nodes for unknown edge endpoints
        #[arg(long)]
        permissive: bool,
    },

    /// List the nodes in a graph
    List {
        /// Path to the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        graph: PathBuf,
    },

    /// Show a node's attributes and its routes
    Show {
        /// Node identifier
        id: String,

        /// Path to the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        graph: PathBuf,
    },

    /// Add a node, or merge attributes into an existing one
    AddNode {
        /// Node identifier
        id: String,

        #[command(flatten)]
        spec: NodeSpec,

        /// Path to the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        graph: PathBuf,
    },

    /// Remove a node and every route touching it
    RemoveNode {
        /// Node identifier
        id: String,

        /// Path to the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        graph: PathBuf,
    },

    /// Add a route between two nodes, merging into any existing one
    AddEdge {
        /// First endpoint
        a: String,

        /// Second endpoint
        b: String,

        #[command(flatten)]
        spec: EdgeSpec,

        /// Create stub nodes for missing endpoints instead of failing
        #[arg(long)]
        create_missing: bool,

        /// Path to the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        graph: PathBuf,
    },

    /// Remove the route between two nodes
    RemoveEdge {
        /// First endpoint
        a: String,

        /// Second endpoint
        b: String,

        /// Path to the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        graph: PathBuf,
    },

    /// Compute the shortest path between two nodes
    Route {
        /// Starting node
        start: String,

        /// Destination node
        dest: String,

        /// Travel mode for the time estimate
        #[arg(short, long, default_value = "foot")]
        mode: String,

        /// Path to the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        graph: PathBuf,
    },

    /// Simulate a trip day by day until arrival
    Travel {
        /// Starting node
        start: String,

        /// Destination node
        dest: String,

        /// Travel mode for every day
        #[arg(short, long, default_value = "foot")]
        mode: String,

        /// Hours traveled per day
        #[arg(long, default_value = "8.0")]
        hours: f64,

        /// Give up after this many days
        #[arg(long, default_value = "365")]
        max_days: u64,

        /// Path to the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        graph: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { out, extend } => commands::init::run(&out, extend.as_deref()),
        Commands::Check { graph, permissive } => commands::check::run(&graph, permissive),
        Commands::List { graph } => commands::list::run(&graph),
        Commands::Show { id, graph } => commands::show::run(&graph, &id),
        Commands::AddNode { id, spec, graph } => commands::node::add(&graph, &id, &spec),
        Commands::RemoveNode { id, graph } => commands::node::remove(&graph, &id),
        Commands::AddEdge {
            a,
            b,
            spec,
            create_missing,
            graph,
        } => commands::edge::add(&graph, &a, &b, &spec, create_missing),
        Commands::RemoveEdge { a, b, graph } => commands::edge::remove(&graph, &a, &b),
        Commands::Route {
            start,
            dest,
            mode,
            graph,
        } => commands::route::run(&graph, &start, &dest, &mode),
        Commands::Travel {
            start,
            dest,
            mode,
            hours,
            max_days,
            graph,
        } => commands::travel::run(&graph, &start, &dest, &mode, hours, max_days),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
