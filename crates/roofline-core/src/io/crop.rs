use std::fs;
use std::path::{Path, PathBuf};

use ndarray::s;

use crate::error::Result;
use crate::geometry::BoundingBox;
use crate::raster::RasterImage;

use super::image_io::save_image;

/// Crop one bounding box out of the image, with `buffer` pixels of context
/// on every side, clamped to the frame.
pub fn crop_box(image: &RasterImage, bbox: &BoundingBox, buffer: usize) -> RasterImage {
    let h = image.height();
    let w = image.width();

    let row_start = bbox.min_row.saturating_sub(buffer);
    let col_start = bbox.min_col.saturating_sub(buffer);
    let row_end = (bbox.max_row + buffer + 1).min(h);
    let col_end = (bbox.max_col + buffer + 1).min(w);

    match image {
        RasterImage::Gray(data) => {
            RasterImage::Gray(data.slice(s![row_start..row_end, col_start..col_end]).to_owned())
        }
        RasterImage::Rgb(data) => RasterImage::Rgb(
            data.slice(s![row_start..row_end, col_start..col_end, ..])
                .to_owned(),
        ),
    }
}

/// Crop every detected box out of the image.
pub fn crop_boxes(image: &RasterImage, boxes: &[BoundingBox], buffer: usize) -> Vec<RasterImage> {
    boxes
        .iter()
        .map(|bbox| crop_box(image, bbox, buffer))
        .collect()
}

/// Write crops as `{dir}/{base}_{index}.png`, creating the directory.
/// Returns the written paths in box order.
pub fn save_crops(crops: &[RasterImage], dir: &Path, base: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(crops.len());
    for (index, crop) in crops.iter().enumerate() {
        let path = dir.join(format!("{base}_{index}.png"));
        save_image(crop, &path)?;
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn gradient_image(h: usize, w: usize) -> RasterImage {
        RasterImage::Gray(Array2::from_shape_fn((h, w), |(row, col)| {
            (row * w + col) as f32 / (h * w) as f32
        }))
    }

    #[test]
    fn crop_includes_the_buffer() {
        let image = gradient_image(50, 50);
        let bbox = BoundingBox::new(20, 20, 29, 29);
        let crop = crop_box(&image, &bbox, 5);
        // 10px box plus 5 on each side.
        assert_eq!(crop.height(), 20);
        assert_eq!(crop.width(), 20);
    }

    #[test]
    fn buffer_clamps_at_the_frame() {
        let image = gradient_image(30, 30);
        let bbox = BoundingBox::new(0, 0, 4, 4);
        let crop = crop_box(&image, &bbox, 10);
        // Top-left cannot extend past 0; bottom-right gains the full buffer.
        assert_eq!(crop.height(), 15);
        assert_eq!(crop.width(), 15);
    }

    #[test]
    fn crop_preserves_pixel_values() {
        let image = gradient_image(10, 10);
        let bbox = BoundingBox::new(3, 4, 5, 6);
        let crop = crop_box(&image, &bbox, 0);

        let (RasterImage::Gray(source), RasterImage::Gray(cropped)) = (&image, &crop) else {
            panic!("expected gray rasters");
        };
        assert_eq!(cropped[[0, 0]], source[[3, 4]]);
        assert_eq!(cropped[[2, 2]], source[[5, 6]]);
    }
}
