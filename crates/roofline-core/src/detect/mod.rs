pub mod binarize;
pub mod color;
pub mod components;
pub mod edges;
pub mod filters;
pub mod pipeline;

pub use color::{RoofColorPicker, SecondPeak};
pub use components::{label_regions, Region};
pub use filters::{apply_filters, AttributionBand, BorderClearance, MinArea, RegionFilter};
pub use pipeline::{DetectorConfig, RoofDetector};
