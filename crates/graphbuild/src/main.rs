use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use graphbuild::{build_graph, load_floors};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Build the venue navigation graph from floor feature files")]
struct Args {
    /// Directory containing floor_<n>.json feature collections
    #[clap(short, long)]
    floors_dir: PathBuf,

    /// Optional path for a JSON dump of the built graph
    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let floors = load_floors(&args.floors_dir)
        .with_context(|| format!("failed to load floor data from {}", args.floors_dir.display()))?;
    info!("loaded {} floors from {}", floors.len(), args.floors_dir.display());

    let graph = build_graph(&floors);
    println!(
        "{} nodes, {} rooms, {} doors, {} store names across {} floors",
        graph.nodes.len(),
        graph.rooms.len(),
        graph.doors.len(),
        graph.store_names.len(),
        graph.floors.len()
    );

    if let Some(output) = args.output {
        let file = File::create(&output)
            .with_context(|| format!("failed to create {}", output.display()))?;
        serde_json::to_writer_pretty(file, &graph).context("failed to write graph dump")?;
        println!("graph written to {}", output.display());
    }

    Ok(())
}
