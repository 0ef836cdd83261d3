pub mod consts;
pub mod crawl;
pub mod detect;
pub mod error;
pub mod filters;
pub mod geometry;
pub mod io;
pub mod raster;

pub use crawl::grid::{crawl_locations, Coordinate, CrawlConfig};
pub use detect::pipeline::{DetectorConfig, RoofDetector};
pub use error::{Result, RooflineError};
pub use geometry::BoundingBox;
pub use raster::RasterImage;
