use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cardex_analysis::{analyze_price, top_similar, SimilarityView};
use cardex_catalog::{JsonSnapshotSource, RecordSource};
use cardex_core::SimilarityGraph;

/// Build a similarity graph from a catalog snapshot and analyze one card
#[derive(Parser, Debug)]
#[command(name = "cardex")]
#[command(about = "Trading-card similarity graph and price analysis", long_about = None)]
struct Args {
    /// Path to a saved catalog feed snapshot (JSON page envelope)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Card id to analyze (e.g. "ex8-8"); if omitted, --name is used
    #[arg(long)]
    card: Option<String>,

    /// Card name to look up when no id is given
    #[arg(long)]
    name: Option<String>,

    /// How many similar cards to list
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting cardex v{}", env!("CARGO_PKG_VERSION"));

    let source = JsonSnapshotSource::new(&args.snapshot);
    let records = source.fetch()?;
    info!("Loaded {} records from {:?}", records.len(), args.snapshot);

    let graph = SimilarityGraph::build(records);
    info!("Built similarity graph over {} cards", graph.len());

    let card_id = match (&args.card, &args.name) {
        (Some(id), _) => id.clone(),
        (None, Some(name)) => {
            let matches = graph.search_by_name(name);
            info!("Cards named {:?}: {:?}", name, matches);
            match matches.first() {
                Some(id) => id.clone(),
                None => anyhow::bail!("no card named {:?} in the snapshot", name),
            }
        }
        (None, None) => anyhow::bail!("pass --card <id> or --name <name>"),
    };

    let card = graph.find_card(&card_id)?;
    info!(
        "{} ({}): types={:?} subtypes={:?} hp={} price={}",
        card.name, card.id, card.types, card.subtypes, card.hp, card.price
    );
    info!("Image: {}", graph.image_ref(&card_id)?);

    let ranked = top_similar(&graph, &card_id, args.top)?;
    println!("Most similar to {}:", card.name);
    for neighbor in &ranked {
        let nbr = graph.find_card(&neighbor.id)?;
        println!("  {:>3}  {} ({})", neighbor.weight, nbr.name, nbr.id);
    }

    let report = analyze_price(&graph, &card_id)?;
    println!("\nPrice analysis:");
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!("Verdict: {}", report.verdict.message());

    let view = SimilarityView::with_default_limit(&graph, &card_id)?;
    println!("\nRender view:");
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
