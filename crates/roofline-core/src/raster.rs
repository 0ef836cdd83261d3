use ndarray::{Array2, Array3};

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// An in-memory image, either single-channel or RGB.
/// Pixel values are f32 in [0.0, 1.0], row-major, indexed (row, col).
#[derive(Clone, Debug)]
pub enum RasterImage {
    /// Shape = (height, width)
    Gray(Array2<f32>),
    /// Shape = (height, width, 3)
    Rgb(Array3<f32>),
}

impl RasterImage {
    pub fn height(&self) -> usize {
        match self {
            RasterImage::Gray(data) => data.nrows(),
            RasterImage::Rgb(data) => data.dim().0,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            RasterImage::Gray(data) => data.ncols(),
            RasterImage::Rgb(data) => data.dim().1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    /// Luminance conversion (ITU-R BT.601). Gray inputs are returned as-is.
    pub fn to_gray(&self) -> Array2<f32> {
        match self {
            RasterImage::Gray(data) => data.clone(),
            RasterImage::Rgb(data) => {
                let (h, w, _) = data.dim();
                Array2::from_shape_fn((h, w), |(row, col)| {
                    LUMINANCE_R * data[[row, col, 0]]
                        + LUMINANCE_G * data[[row, col, 1]]
                        + LUMINANCE_B * data[[row, col, 2]]
                })
            }
        }
    }
}
