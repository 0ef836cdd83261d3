use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_ATTRIBUTION_BAND, DEFAULT_BINARIZE_EPSILON, DEFAULT_BORDER_BUFFER,
    DEFAULT_CANNY_HIGH, DEFAULT_CANNY_LOW, DEFAULT_MIN_AREA, SATELLITE_BLUR_SIGMA,
    STREET_BLUR_SIGMA,
};
use crate::error::Result;
use crate::filters::gaussian_blur;
use crate::geometry::BoundingBox;
use crate::raster::RasterImage;

use super::binarize::binarize;
use super::color::{RoofColorPicker, SecondPeak};
use super::components::label_regions;
use super::edges::canny;
use super::filters::{apply_filters, AttributionBand, BorderClearance, MinArea, RegionFilter};

/// Tuning for the detection pipeline.
///
/// The street and satellite presets differ only in smoothing strength and
/// in which region filters are active; there is one code path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Gaussian sigma applied to the binarized image before edge tracing.
    /// Scale-dependent: light for street captures, heavy for satellite.
    #[serde(default = "default_blur_sigma")]
    pub blur_sigma: f32,
    /// Absolute tolerance around the picked roof color.
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
    /// Canny hysteresis low threshold.
    #[serde(default = "default_canny_low")]
    pub canny_low: f32,
    /// Canny hysteresis high threshold.
    #[serde(default = "default_canny_high")]
    pub canny_high: f32,
    /// Minimum bounding-box area for a region to survive filtering.
    #[serde(default = "default_min_area")]
    pub min_area: usize,
    /// Clearance to the image frame; `None` disables the border filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_buffer: Option<usize>,
    /// Height of the provider watermark strip; `None` disables the filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution_band: Option<usize>,
}

fn default_blur_sigma() -> f32 {
    STREET_BLUR_SIGMA
}
fn default_epsilon() -> f32 {
    DEFAULT_BINARIZE_EPSILON
}
fn default_canny_low() -> f32 {
    DEFAULT_CANNY_LOW
}
fn default_canny_high() -> f32 {
    DEFAULT_CANNY_HIGH
}
fn default_min_area() -> usize {
    DEFAULT_MIN_AREA
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::street()
    }
}

impl DetectorConfig {
    /// Street-level captures: roofs are close and high-resolution, light
    /// smoothing, no frame-relative filters.
    pub fn street() -> Self {
        Self {
            blur_sigma: STREET_BLUR_SIGMA,
            epsilon: DEFAULT_BINARIZE_EPSILON,
            canny_low: DEFAULT_CANNY_LOW,
            canny_high: DEFAULT_CANNY_HIGH,
            min_area: DEFAULT_MIN_AREA,
            border_buffer: None,
            attribution_band: None,
        }
    }

    /// Satellite captures: small noisy roofs, heavy smoothing, and extra
    /// filters for frame-truncated boxes and the watermark strip.
    pub fn satellite() -> Self {
        Self {
            blur_sigma: SATELLITE_BLUR_SIGMA,
            border_buffer: Some(DEFAULT_BORDER_BUFFER),
            attribution_band: Some(DEFAULT_ATTRIBUTION_BAND),
            ..Self::street()
        }
    }

    /// The active region filters, in application order.
    pub fn region_filters(&self) -> Vec<Box<dyn RegionFilter>> {
        let mut filters: Vec<Box<dyn RegionFilter>> = vec![Box::new(MinArea {
            min_area: self.min_area,
        })];
        if let Some(buffer) = self.border_buffer {
            filters.push(Box::new(BorderClearance { buffer }));
        }
        if let Some(height) = self.attribution_band {
            filters.push(Box::new(AttributionBand { height }));
        }
        filters
    }
}

/// Converts a raw image into a filtered set of roof bounding boxes.
///
/// Deterministic for a fixed configuration; the input image is borrowed
/// and never mutated.
pub struct RoofDetector {
    config: DetectorConfig,
    color_picker: Box<dyn RoofColorPicker>,
}

impl RoofDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            color_picker: Box::new(SecondPeak),
        }
    }

    /// Swap in an alternative roof-color heuristic.
    pub fn with_color_picker(mut self, picker: Box<dyn RoofColorPicker>) -> Self {
        self.color_picker = picker;
        self
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run the full pipeline: luminance -> roof-color binarization ->
    /// Gaussian smoothing -> Canny -> component labeling -> region filters.
    ///
    /// Zero boxes is a valid, silent outcome; only an image with no
    /// pickable roof color fails.
    pub fn detect(&self, image: &RasterImage) -> Result<Vec<BoundingBox>> {
        let (height, width) = (image.height(), image.width());
        let gray = image.to_gray();

        let roof_color = self.color_picker.pick(&gray)?;
        debug!(roof_color, "picked roof color");

        let binary = binarize(&gray, roof_color, self.config.epsilon);
        let smoothed = gaussian_blur(&binary, self.config.blur_sigma);
        let edges = canny(&smoothed, self.config.canny_low, self.config.canny_high);

        let regions = label_regions(&edges);
        debug!(regions = regions.len(), "labeled edge components");

        let kept = apply_filters(regions, &self.config.region_filters(), height, width);
        debug!(boxes = kept.len(), "detection finished");

        Ok(kept.into_iter().map(|region| region.bbox).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_preset_has_no_frame_filters() {
        let config = DetectorConfig::street();
        assert_eq!(config.region_filters().len(), 1);
    }

    #[test]
    fn satellite_preset_enables_all_filters() {
        let config = DetectorConfig::satellite();
        assert_eq!(config.region_filters().len(), 3);
        assert!(config.blur_sigma > DetectorConfig::street().blur_sigma);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = DetectorConfig::satellite();
        let text = toml::to_string(&config).unwrap();
        let back: DetectorConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.border_buffer, config.border_buffer);
        assert_eq!(back.min_area, config.min_area);
    }
}
