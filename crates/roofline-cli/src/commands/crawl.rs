use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use roofline_core::{crawl_locations, CrawlConfig};

use crate::file_config::FileConfig;

#[derive(Args)]
pub struct CrawlArgs {
    /// Seed latitude(s); repeat the flag for multiple seeds
    #[arg(long = "lat", required = true)]
    pub lats: Vec<f64>,

    /// Seed longitude(s); must pair up with --lat
    #[arg(long = "lon", required = true)]
    pub lons: Vec<f64>,

    /// TOML config file; its [crawl] table supplies defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Cap on visited coordinates
    #[arg(long)]
    pub max_requests: Option<usize>,

    /// Cap on BFS rounds
    #[arg(long)]
    pub depth: Option<usize>,

    /// Lattice step in coordinate degrees
    #[arg(long)]
    pub step: Option<f64>,

    /// Coordinate decimals kept (deduplication precision)
    #[arg(long)]
    pub precision: Option<u32>,

    /// Print coordinates as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &CrawlArgs) -> Result<()> {
    if args.lats.len() != args.lons.len() {
        bail!(
            "got {} --lat value(s) but {} --lon value(s)",
            args.lats.len(),
            args.lons.len()
        );
    }

    let mut config = match &args.config {
        Some(path) => FileConfig::load(path)?.crawl,
        None => CrawlConfig::default(),
    };
    if let Some(v) = args.max_requests {
        config.max_requests = v;
    }
    if let Some(v) = args.depth {
        config.max_crawl_depth = v;
    }
    if let Some(v) = args.step {
        config.step = v;
    }
    if let Some(v) = args.precision {
        config.precision = v;
    }

    let seeds: Vec<(f64, f64)> = args
        .lats
        .iter()
        .copied()
        .zip(args.lons.iter().copied())
        .collect();
    let locations = crawl_locations(&seeds, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
    } else {
        for coord in &locations {
            println!("{} {}", coord.lat, coord.lon);
        }
        eprintln!("{} location(s)", locations.len());
    }

    Ok(())
}
