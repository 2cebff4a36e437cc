use anyhow::{bail, Context, Result};
use clap::Parser;
use comuna_map::{
    build_map, demo_incidents, load_feed, select_cluster, CategoryFilter, Incident, MapConfig,
    MapView, Marker,
};
use std::path::PathBuf;
use std::time::Instant;

/// Place and cluster incident reports for the commune map
#[derive(Parser, Debug)]
#[command(name = "comuna-map", version, about)]
struct Cli {
    /// Category filter: all, water, power or gas
    #[arg(short, long, default_value = "all")]
    filter: CategoryFilter,

    /// Merge distance in percent units (overrides the config file)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// JSON incident feed; the built-in demo dataset is used when omitted
    #[arg(short, long)]
    incidents: Option<PathBuf>,

    /// JSON map configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the details of one cluster, as if its marker was tapped
    #[arg(short, long)]
    select: Option<String>,

    /// Print the map view as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    let mut config = match &cli.config {
        Some(path) => MapConfig::from_file(path)?,
        None => MapConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config = config.with_threshold(threshold);
    }

    let incidents = match &cli.incidents {
        Some(path) => load_feed(path)?,
        None => demo_incidents(),
    };

    let view = build_map(&incidents, cli.filter, &config).context("Failed to build map")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("=== Incident map [{}] ===\n", view.filter);
    println!("{}\n", config);
    println!(
        "✓ {} of {} incidents visible, {} markers [{:.3}ms]\n",
        view.visible,
        incidents.len(),
        view.clusters.len(),
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    for c in &view.clusters {
        let marker = match c.marker() {
            Marker::Single { group, priority } => {
                format!("{} ({:?})", group.as_str(), priority)
            }
            Marker::Multi { count } => format!("[{}] up to {:?}", count, c.highest_priority()),
        };
        println!(
            "  {:<8} top {:>6.2}%  left {:>6.2}%  {}",
            c.id(),
            c.top(),
            c.left(),
            marker
        );
    }

    if let Some(id) = &cli.select {
        println!();
        for line in selection_lines(&view, &incidents, id)? {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Detail lines for the cluster a user picked
fn selection_lines(view: &MapView, incidents: &[Incident], id: &str) -> Result<Vec<String>> {
    let Some(c) = select_cluster(&view.clusters, id) else {
        bail!("No cluster with id {}", id);
    };

    let mut lines = vec![format!("Cluster {}:", c.id())];
    for p in c.points() {
        let title = incidents
            .iter()
            .find(|i| i.id == p.id)
            .map(|i| i.title.as_str())
            .unwrap_or("");
        lines.push(format!(
            "  {} [{}] {:?} - {}",
            p.id, p.category, p.priority, title
        ));
    }
    Ok(lines)
}
