use tracing::debug;

use super::components::Region;

/// A single predicate over detected regions.
///
/// Filters each encode one independently falsifiable assumption about
/// capture artifacts and are applied in sequence, so tests can target each
/// in isolation and new ones can be appended without touching the rest.
pub trait RegionFilter {
    fn name(&self) -> &'static str;

    /// True to keep the region. `height`/`width` are the source image
    /// extents, needed by the frame-relative filters.
    fn retain(&self, region: &Region, height: usize, width: usize) -> bool;
}

/// Run regions through the filter list in order, logging per-stage drops.
pub fn apply_filters(
    mut regions: Vec<Region>,
    filters: &[Box<dyn RegionFilter>],
    height: usize,
    width: usize,
) -> Vec<Region> {
    for filter in filters {
        let before = regions.len();
        regions.retain(|region| filter.retain(region, height, width));
        debug!(
            filter = filter.name(),
            kept = regions.len(),
            dropped = before - regions.len(),
            "region filter applied"
        );
    }
    regions
}

/// Drops regions whose bounding-box area falls below a threshold: noise,
/// sheds, roof fragments, road markings.
#[derive(Clone, Copy, Debug)]
pub struct MinArea {
    pub min_area: usize,
}

impl RegionFilter for MinArea {
    fn name(&self) -> &'static str {
        "min-area"
    }

    fn retain(&self, region: &Region, _height: usize, _width: usize) -> bool {
        region.bbox.area() >= self.min_area
    }
}

/// Drops regions whose bounding box comes within `buffer` pixels of any
/// image edge; those are roofs truncated by the frame, not complete ones.
#[derive(Clone, Copy, Debug)]
pub struct BorderClearance {
    pub buffer: usize,
}

impl RegionFilter for BorderClearance {
    fn name(&self) -> &'static str {
        "border-clearance"
    }

    fn retain(&self, region: &Region, height: usize, width: usize) -> bool {
        let bbox = &region.bbox;
        bbox.min_row > self.buffer
            && bbox.min_col > self.buffer
            && bbox.max_row < height.saturating_sub(self.buffer)
            && bbox.max_col < width.saturating_sub(self.buffer)
    }
}

/// Drops regions overlapping the bottom strip reserved for the map
/// provider's attribution watermark, which shows up as a spurious
/// high-contrast region.
#[derive(Clone, Copy, Debug)]
pub struct AttributionBand {
    pub height: usize,
}

impl RegionFilter for AttributionBand {
    fn name(&self) -> &'static str {
        "attribution-band"
    }

    fn retain(&self, region: &Region, height: usize, _width: usize) -> bool {
        region.bbox.max_row < height.saturating_sub(self.height)
    }
}
