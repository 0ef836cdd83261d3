use std::collections::HashSet;
use std::path::PathBuf;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::grid::Coordinate;

/// Map rendering requested from the tile provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    Street,
    Satellite,
}

impl MapType {
    pub const ALL: [MapType; 2] = [MapType::Street, MapType::Satellite];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapType::Street => "street",
            MapType::Satellite => "satellite",
        }
    }
}

/// Filename convention for saved tiles: `{map_type}_{lat}_{lon}.png`.
/// Must stay invertible by [`existing_locations`]: the Debug formatter is
/// used because it always emits a fractional part (`10.0`, not `10`),
/// which the parser requires.
pub fn tile_filename(map_type: MapType, lat: f64, lon: f64) -> String {
    format!("{}_{:?}_{:?}.png", map_type.as_str(), lat, lon)
}

/// Recover coordinates from previously saved tile filenames.
///
/// Both embedded numbers must carry a decimal point; anything else is a
/// malformed name and is skipped. Duplicates (street + satellite of the
/// same spot) collapse; order is first occurrence.
pub fn existing_locations<S: AsRef<str>>(filenames: &[S]) -> Vec<(f64, f64)> {
    let pattern = Regex::new(r"(?:street|satellite)_(-?\d+\.\d+)_(-?\d+\.\d+)\.")
        .expect("tile filename pattern is valid");

    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let mut locations = Vec::new();

    for filename in filenames {
        let Some(captures) = pattern.captures(filename.as_ref()) else {
            debug!(filename = filename.as_ref(), "skipping unparseable tile name");
            continue;
        };
        // Both groups are \d-only matches; parse cannot fail.
        let lat: f64 = captures[1].parse().expect("matched latitude parses");
        let lon: f64 = captures[2].parse().expect("matched longitude parses");

        if seen.insert((lat.to_bits(), lon.to_bits())) {
            locations.push((lat, lon));
        }
    }

    locations
}

/// Boundary seam to the tile provider. A transient failure is a per-item
/// `None`, never a batch abort; retry policy belongs to the caller.
pub trait TileFetcher {
    fn fetch(&self, map_type: MapType, lat: f64, lon: f64) -> Option<PathBuf>;
}

/// Fetch both map types for every coordinate, in crawl order, collecting
/// the paths that succeeded.
pub fn fetch_all_locations<F: TileFetcher>(
    fetcher: &F,
    locations: &[Coordinate],
) -> Vec<PathBuf> {
    let mut saved = Vec::new();
    for coord in locations {
        for map_type in MapType::ALL {
            if let Some(path) = fetcher.fetch(map_type, coord.lat, coord.lon) {
                saved.push(path);
            }
        }
    }
    saved
}
