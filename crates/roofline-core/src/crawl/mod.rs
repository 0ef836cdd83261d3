pub mod grid;
pub mod tiles;

pub use grid::{crawl_locations, Coordinate, CrawlConfig};
pub use tiles::{existing_locations, tile_filename, MapType, TileFetcher};
