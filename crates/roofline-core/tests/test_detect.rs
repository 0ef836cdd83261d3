use ndarray::{Array2, Array3};

use roofline_core::{BoundingBox, DetectorConfig, RasterImage, RoofDetector, RooflineError};

/// Gray image with a rectangular block of `block_value` on a uniform
/// `background` field. `rows`/`cols` are inclusive block extents.
fn block_image(
    size: usize,
    rows: (usize, usize),
    cols: (usize, usize),
    background: f32,
    block_value: f32,
) -> RasterImage {
    let mut data = Array2::from_elem((size, size), background);
    for row in rows.0..=rows.1 {
        for col in cols.0..=cols.1 {
            data[[row, col]] = block_value;
        }
    }
    RasterImage::Gray(data)
}

/// Max per-edge deviation allowed between the detected box and the block:
/// smoothing widens the traced silhouette by a few pixels.
const TOLERANCE: usize = 3;

fn assert_tightly_encloses(bbox: &BoundingBox, rows: (usize, usize), cols: (usize, usize)) {
    assert!(bbox.min_row.abs_diff(rows.0) <= TOLERANCE, "min_row {} vs {}", bbox.min_row, rows.0);
    assert!(bbox.max_row.abs_diff(rows.1) <= TOLERANCE, "max_row {} vs {}", bbox.max_row, rows.1);
    assert!(bbox.min_col.abs_diff(cols.0) <= TOLERANCE, "min_col {} vs {}", bbox.min_col, cols.0);
    assert!(bbox.max_col.abs_diff(cols.1) <= TOLERANCE, "max_col {} vs {}", bbox.max_col, cols.1);
}

#[test]
fn single_block_yields_one_tight_box() {
    let image = block_image(64, (20, 39), (20, 39), 0.2, 0.8);
    let detector = RoofDetector::new(DetectorConfig::street());

    let boxes = detector.detect(&image).unwrap();
    assert_eq!(boxes.len(), 1, "expected one box, got {boxes:?}");
    assert_tightly_encloses(&boxes[0], (20, 39), (20, 39));
}

#[test]
fn detection_does_not_mutate_the_input() {
    let image = block_image(64, (20, 39), (20, 39), 0.2, 0.8);
    let before = image.to_gray();

    RoofDetector::new(DetectorConfig::street())
        .detect(&image)
        .unwrap();
    assert_eq!(image.to_gray(), before);
}

#[test]
fn rgb_input_goes_through_luminance() {
    let size = 64;
    let mut data = Array3::from_elem((size, size, 3), 0.2f32);
    for row in 20..40 {
        for col in 20..40 {
            for ch in 0..3 {
                data[[row, col, ch]] = 0.8;
            }
        }
    }
    let image = RasterImage::Rgb(data);

    let boxes = RoofDetector::new(DetectorConfig::street())
        .detect(&image)
        .unwrap();
    assert_eq!(boxes.len(), 1);
    assert_tightly_encloses(&boxes[0], (20, 39), (20, 39));
}

#[test]
fn small_blocks_are_filtered_out_silently() {
    // A 4x4 block traces to a bbox far below the default 200 px^2 floor.
    let image = block_image(64, (30, 33), (30, 33), 0.2, 0.8);
    let boxes = RoofDetector::new(DetectorConfig::street())
        .detect(&image)
        .unwrap();
    assert!(boxes.is_empty());
}

#[test]
fn empty_image_fails_detection() {
    let image = RasterImage::Gray(Array2::zeros((0, 0)));
    let result = RoofDetector::new(DetectorConfig::street()).detect(&image);
    assert!(matches!(result, Err(RooflineError::EmptyImage)));
}

#[test]
fn border_filter_drops_frame_truncated_blocks() {
    // Block flush against the left edge; the street preset keeps it, a
    // border clearance of 5 px drops it.
    let image = block_image(64, (20, 39), (0, 19), 0.2, 0.8);

    let street = RoofDetector::new(DetectorConfig::street());
    assert_eq!(street.detect(&image).unwrap().len(), 1);

    let bordered = RoofDetector::new(DetectorConfig {
        border_buffer: Some(5),
        ..DetectorConfig::street()
    });
    assert!(bordered.detect(&image).unwrap().is_empty());
}

#[test]
fn attribution_band_drops_bottom_strip_blocks() {
    let image = block_image(64, (40, 59), (20, 39), 0.2, 0.8);

    let config = DetectorConfig {
        attribution_band: Some(10),
        ..DetectorConfig::street()
    };
    assert!(RoofDetector::new(config).detect(&image).unwrap().is_empty());

    let config = DetectorConfig {
        attribution_band: Some(2),
        ..DetectorConfig::street()
    };
    assert_eq!(RoofDetector::new(config).detect(&image).unwrap().len(), 1);
}

#[test]
fn two_separated_blocks_yield_two_boxes() {
    let mut data = Array2::from_elem((128, 128), 0.2f32);
    for (rows, cols) in [((20, 39), (20, 39)), ((80, 99), (80, 99))] {
        for row in rows.0..=rows.1 {
            for col in cols.0..=cols.1 {
                data[[row, col]] = 0.8;
            }
        }
    }
    let image = RasterImage::Gray(data);

    let boxes = RoofDetector::new(DetectorConfig::street())
        .detect(&image)
        .unwrap();
    assert_eq!(boxes.len(), 2);
}
