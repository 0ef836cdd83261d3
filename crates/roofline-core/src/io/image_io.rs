use std::path::Path;

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use ndarray::{Array2, Array3};

use crate::error::Result;
use crate::raster::RasterImage;

/// Load a PNG/JPEG into a raster, normalized to f32 in [0, 1].
/// Grayscale sources stay single-channel; everything else becomes RGB.
pub fn load_image(path: &Path) -> Result<RasterImage> {
    let decoded = image::open(path)?;

    match decoded {
        DynamicImage::ImageLuma8(gray) => {
            let (w, h) = gray.dimensions();
            let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
                gray.get_pixel(col as u32, row as u32).0[0] as f32 / 255.0
            });
            Ok(RasterImage::Gray(data))
        }
        other => {
            let rgb = other.to_rgb8();
            let (w, h) = rgb.dimensions();
            let data = Array3::from_shape_fn((h as usize, w as usize, 3), |(row, col, ch)| {
                rgb.get_pixel(col as u32, row as u32).0[ch] as f32 / 255.0
            });
            Ok(RasterImage::Rgb(data))
        }
    }
}

/// Save a raster as 8-bit PNG (grayscale or RGB to match the variant).
pub fn save_image(raster: &RasterImage, path: &Path) -> Result<()> {
    let h = raster.height();
    let w = raster.width();

    match raster {
        RasterImage::Gray(data) => {
            let mut img = GrayImage::new(w as u32, h as u32);
            for row in 0..h {
                for col in 0..w {
                    let val = (data[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
                    img.put_pixel(col as u32, row as u32, Luma([val]));
                }
            }
            img.save(path)?;
        }
        RasterImage::Rgb(data) => {
            let mut img = RgbImage::new(w as u32, h as u32);
            for row in 0..h {
                for col in 0..w {
                    let px = [
                        (data[[row, col, 0]].clamp(0.0, 1.0) * 255.0) as u8,
                        (data[[row, col, 1]].clamp(0.0, 1.0) * 255.0) as u8,
                        (data[[row, col, 2]].clamp(0.0, 1.0) * 255.0) as u8,
                    ];
                    img.put_pixel(col as u32, row as u32, Rgb(px));
                }
            }
            img.save(path)?;
        }
    }

    Ok(())
}
