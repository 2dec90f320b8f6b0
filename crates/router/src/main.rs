use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use graphbuild::{build_graph, load_floors};
use router::{plan_route, steps, RouterConfig};
use schema::graph::ConnectorKind;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compute a route between two places in a venue")]
struct Args {
    /// Directory containing floor_<n>.json feature collections
    #[clap(short, long)]
    floors_dir: PathBuf,

    /// Start room or node id (floor-namespaced)
    #[clap(long)]
    from: String,

    /// Destination room or node id (floor-namespaced)
    #[clap(long)]
    to: String,

    /// Preferred vertical transport: escalator or elevator
    #[clap(short, long, default_value = "escalator")]
    transport: String,

    /// Reject connectors with unresolved floor spans
    #[clap(long)]
    strict_spans: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let preferred = ConnectorKind::parse(&args.transport)
        .with_context(|| format!("unknown transport type: {}", args.transport))?;

    let floors = load_floors(&args.floors_dir)
        .with_context(|| format!("failed to load floor data from {}", args.floors_dir.display()))?;
    info!("loaded {} floors from {}", floors.len(), args.floors_dir.display());

    let graph = build_graph(&floors);
    let config = RouterConfig {
        strict_spans: args.strict_spans,
        ..RouterConfig::default()
    };

    match plan_route(&graph, &args.from, &args.to, preferred, &config) {
        Ok(route) => {
            println!("Path ({} nodes, {:.1} units):", route.path.len(), route.distance);
            for id in &route.path {
                println!("  {}", id);
            }
            println!("Directions:");
            for line in steps::instructions(&graph, &route.steps) {
                println!("  {}", line);
            }
        }
        Err(err) => {
            eprintln!("No route: {}", err);
            std::process::exit(1);
        }
    }

    Ok(())
}
