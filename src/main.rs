use anyhow::{bail, Context, Result};
use clap::Parser;
use geomark::{GroupingConfig, JsonFileStore, MarkerCollection, MarkerGrouper, MarkerSource};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Group geotagged articles and images into map markers
#[derive(Parser, Debug)]
#[command(name = "geomark", version, about)]
struct Args {
    /// Which markers to group: articles, images or all
    collection: MarkerCollection,

    /// JSON marker store ({"articles": [...], "images": [...]})
    #[arg(short, long)]
    input: PathBuf,

    /// Clustering radius in coordinate degrees
    #[arg(long, env = "GEOMARK_EPS")]
    eps: Option<f64>,

    /// Minimum neighborhood size to form a cluster
    #[arg(long, env = "GEOMARK_MIN_POINTS")]
    min_points: Option<usize>,

    /// JSON file with grouping parameters; flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let start = Instant::now();
    let config = resolve_config(&args)?;

    let store = JsonFileStore::new(&args.input);
    let items = store
        .fetch(args.collection)
        .with_context(|| format!("error getting {} from store", args.collection))?;

    if items.is_empty() {
        bail!("no {} found", noun(args.collection));
    }

    let grouper = MarkerGrouper::new(&config).context("invalid grouping parameters")?;
    let response = grouper
        .respond(&items)
        .with_context(|| format!("error grouping {}", args.collection))?;

    info!(
        collection = %args.collection,
        items = items.len(),
        groups = response.len(),
        grouped = response.total_items(),
        elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        "grouped markers"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", json);

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "geomark=warn",
        1 => "geomark=info",
        _ => "geomark=debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then explicit flags / environment
fn resolve_config(args: &Args) -> Result<GroupingConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GroupingConfig::default(),
    };

    if let Some(eps) = args.eps {
        config.eps = eps;
    }
    if let Some(min_points) = args.min_points {
        config.min_points = min_points;
    }

    Ok(config)
}

fn load_config(path: &Path) -> Result<GroupingConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse config at {}", path.display()))
}

fn noun(collection: MarkerCollection) -> &'static str {
    match collection {
        MarkerCollection::All => "markers",
        other => other.as_str(),
    }
}
