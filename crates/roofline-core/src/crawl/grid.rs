use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_CRAWL_PRECISION, DEFAULT_CRAWL_STEP, DEFAULT_MAX_CRAWL_DEPTH, DEFAULT_MAX_REQUESTS,
};

/// A (latitude, longitude) pair, rounded to the crawl precision on
/// construction. Two coordinates are the same location iff their rounded
/// representations are equal; there is no tolerance-based comparison.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64, precision: u32) -> Self {
        Self {
            lat: round_to(lat, precision),
            lon: round_to(lon, precision),
        }
    }

    /// Hash/equality key over the rounded values' bit patterns.
    fn key(&self) -> (u64, u64) {
        (self.lat.to_bits(), self.lon.to_bits())
    }
}

fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let rounded = (value * scale).round() / scale;
    // Collapse -0.0 to 0.0: the visited key is the value's bit pattern,
    // which must not distinguish coordinates that compare equal.
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Budgets for a crawl.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Cap on visited coordinates (one scrape request each).
    #[serde(default = "default_max_requests")]
    pub max_requests: usize,
    /// Cap on BFS rounds.
    #[serde(default = "default_max_crawl_depth")]
    pub max_crawl_depth: usize,
    /// Lattice step in coordinate degrees, applied to both axes.
    #[serde(default = "default_step")]
    pub step: f64,
    /// Decimal digits kept when rounding; the sole deduplication key.
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_max_requests() -> usize {
    DEFAULT_MAX_REQUESTS
}
fn default_max_crawl_depth() -> usize {
    DEFAULT_MAX_CRAWL_DEPTH
}
fn default_step() -> f64 {
    DEFAULT_CRAWL_STEP
}
fn default_precision() -> u32 {
    DEFAULT_CRAWL_PRECISION
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_MAX_REQUESTS,
            max_crawl_depth: DEFAULT_MAX_CRAWL_DEPTH,
            step: DEFAULT_CRAWL_STEP,
            precision: DEFAULT_CRAWL_PRECISION,
        }
    }
}

/// Insertion-ordered coordinate set: a hash lookup for membership plus an
/// append-only sequence for the output ordering.
#[derive(Default)]
struct VisitedSet {
    seen: HashSet<(u64, u64)>,
    order: Vec<Coordinate>,
}

impl VisitedSet {
    fn insert(&mut self, coord: Coordinate) -> bool {
        if self.seen.insert(coord.key()) {
            self.order.push(coord);
            true
        } else {
            false
        }
    }

    fn contains(&self, coord: &Coordinate) -> bool {
        self.seen.contains(&coord.key())
    }

    fn into_ordered(self) -> Vec<Coordinate> {
        self.order
    }
}

/// Discover sampling locations around the seeds by bounded multi-source
/// BFS over a 4-connected lattice with a fixed step.
///
/// The lattice is flat Cartesian: no correction for longitude compression
/// toward the poles. Downstream consumers depend on this step semantics,
/// so it stays a deliberate approximation.
///
/// Returns visited coordinates in insertion order (breadth-first, seeds
/// first), truncated to `max_requests`. Zero budgets yield an empty list;
/// there are no failure modes.
pub fn crawl_locations(seeds: &[(f64, f64)], config: &CrawlConfig) -> Vec<Coordinate> {
    let mut visited = VisitedSet::default();
    let mut frontier: Vec<Coordinate> = seeds
        .iter()
        .map(|&(lat, lon)| Coordinate::new(lat, lon, config.precision))
        .collect();

    let mut depth = 0;
    let mut requests_made = 0;

    while !frontier.is_empty()
        && requests_made < config.max_requests
        && depth < config.max_crawl_depth
    {
        let mut next_frontier = Vec::with_capacity(frontier.len() * 4);

        for coord in frontier {
            // Duplicates are pruned here, not at generation time.
            if visited.contains(&coord) {
                continue;
            }
            visited.insert(coord);
            requests_made += 1;

            for (dlat, dlon) in [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)] {
                next_frontier.push(Coordinate::new(
                    coord.lat + dlat * config.step,
                    coord.lon + dlon * config.step,
                    config.precision,
                ));
            }
        }

        frontier = next_frontier;
        depth += 1;
        debug!(depth, requests_made, frontier = frontier.len(), "crawl round done");
    }

    let mut ordered = visited.into_ordered();
    ordered.truncate(config.max_requests);
    ordered
}
