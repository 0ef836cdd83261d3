use std::collections::VecDeque;

use ndarray::Array2;

const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// tan(22.5°); sector boundary for 4-direction NMS neighbor selection.
const TAN_22_5_DEG: f32 = 0.414_213_56;

struct Gradients {
    gx: Array2<f32>,
    gy: Array2<f32>,
    mag: Array2<f32>,
}

/// Canny edge detector: Sobel gradients, 4-direction non-maximum
/// suppression, double-threshold hysteresis.
///
/// Weak responses (magnitude in [low, high)) survive only when 8-connected
/// to a strong response (magnitude >= high) through other weak pixels.
pub fn canny(data: &Array2<f32>, low: f32, high: f32) -> Array2<bool> {
    let (h, w) = data.dim();
    if h < 3 || w < 3 {
        return Array2::from_elem((h, w), false);
    }

    let grad = sobel_gradients(data);
    let thin = non_maximum_suppression(&grad);
    hysteresis(&grad.mag, &thin, low, high)
}

fn sobel_gradients(data: &Array2<f32>) -> Gradients {
    let (h, w) = data.dim();
    let mut gx = Array2::<f32>::zeros((h, w));
    let mut gy = Array2::<f32>::zeros((h, w));
    let mut mag = Array2::<f32>::zeros((h, w));

    for row in 0..h {
        let rows = [row.saturating_sub(1), row, (row + 1).min(h - 1)];
        for col in 0..w {
            let cols = [col.saturating_sub(1), col, (col + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (kr, &sr) in rows.iter().enumerate() {
                for (kc, &sc) in cols.iter().enumerate() {
                    let v = data[[sr, sc]];
                    sum_x += v * SOBEL_X[kr][kc];
                    sum_y += v * SOBEL_Y[kr][kc];
                }
            }

            gx[[row, col]] = sum_x;
            gy[[row, col]] = sum_y;
            mag[[row, col]] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Gradients { gx, gy, mag }
}

/// Keep only pixels whose magnitude is a local maximum along the quantized
/// gradient direction. Ties are kept: a step edge falling exactly between
/// two pixels produces a two-pixel magnitude plateau, and a strict
/// comparison would suppress both. The outermost 1-pixel frame is skipped
/// so neighbor lookups need no bounds checks.
fn non_maximum_suppression(grad: &Gradients) -> Array2<bool> {
    let (h, w) = grad.mag.dim();
    let mut keep = Array2::from_elem((h, w), false);

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            let mag = grad.mag[[row, col]];
            if mag == 0.0 {
                continue;
            }

            let gx = grad.gx[[row, col]];
            let gy = grad.gy[[row, col]];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (n1, n2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (grad.mag[[row, col - 1]], grad.mag[[row, col + 1]])
                } else if same_sign {
                    (grad.mag[[row - 1, col + 1]], grad.mag[[row + 1, col - 1]])
                } else {
                    (grad.mag[[row - 1, col - 1]], grad.mag[[row + 1, col + 1]])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (grad.mag[[row - 1, col]], grad.mag[[row + 1, col]])
            } else if same_sign {
                (grad.mag[[row - 1, col + 1]], grad.mag[[row + 1, col - 1]])
            } else {
                (grad.mag[[row - 1, col - 1]], grad.mag[[row + 1, col + 1]])
            };

            keep[[row, col]] = mag >= n1 && mag >= n2;
        }
    }

    keep
}

fn hysteresis(mag: &Array2<f32>, thin: &Array2<bool>, low: f32, high: f32) -> Array2<bool> {
    let (h, w) = mag.dim();
    let mut edges = Array2::from_elem((h, w), false);
    let mut queue = VecDeque::new();

    // Seed with strong responses.
    for row in 0..h {
        for col in 0..w {
            if thin[[row, col]] && mag[[row, col]] >= high {
                edges[[row, col]] = true;
                queue.push_back((row, col));
            }
        }
    }

    // Grow through weak responses, 8-connected.
    while let Some((row, col)) = queue.pop_front() {
        for dr in -1..=1_i32 {
            for dc in -1..=1_i32 {
                let nr = row as i32 + dr;
                let nc = col as i32 + dc;
                if nr < 0 || nr >= h as i32 || nc < 0 || nc >= w as i32 {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if !edges[[nr, nc]] && thin[[nr, nc]] && mag[[nr, nc]] >= low {
                    edges[[nr, nc]] = true;
                    queue.push_back((nr, nc));
                }
            }
        }
    }

    edges
}
