use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Axis along which the 1D kernel slides.
#[derive(Clone, Copy)]
enum Pass {
    Rows,
    Cols,
}

/// Apply Gaussian blur via separable 1D convolution with clamped borders.
///
/// A sigma of zero (or below) returns the input unchanged; smoothing is
/// sometimes disabled entirely for synthetic fixtures.
pub fn gaussian_blur(data: &Array2<f32>, sigma: f32) -> Array2<f32> {
    if sigma <= 0.0 {
        return data.clone();
    }
    let kernel = gaussian_kernel(sigma);
    let row_pass = convolve(data, &kernel, Pass::Rows);
    convolve(&row_pass, &kernel, Pass::Cols)
}

/// Normalized 1D Gaussian kernel with radius ceil(3*sigma).
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    let s2 = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..2 * radius + 1)
        .map(|i| {
            let x = i as f32 - radius as f32;
            (-x * x / s2).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

fn convolve(data: &Array2<f32>, kernel: &[f32], pass: Pass) -> Array2<f32> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return data.clone();
    }
    let radius = kernel.len() / 2;

    let convolve_row = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let offset = ki as isize - radius as isize;
                    let (src_row, src_col) = match pass {
                        Pass::Rows => {
                            (row, (col as isize + offset).clamp(0, w as isize - 1) as usize)
                        }
                        Pass::Cols => {
                            ((row as isize + offset).clamp(0, h as isize - 1) as usize, col)
                        }
                    };
                    sum += data[[src_row, src_col]] * kv;
                }
                sum
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(convolve_row).collect()
    } else {
        (0..h).map(convolve_row).collect()
    };

    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}
