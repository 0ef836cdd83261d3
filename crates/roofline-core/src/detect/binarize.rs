use ndarray::Array2;

/// Output value for pixels matching the roof color.
pub const FOREGROUND: f32 = 0.0;

/// Output value for everything else.
pub const BACKGROUND: f32 = 1.0;

/// Map pixels within `epsilon` of the roof color to [`FOREGROUND`] and the
/// rest to [`BACKGROUND`].
///
/// The inverted polarity (foreground dark, background bright) is what the
/// downstream edge detector traces; do not flip it.
pub fn binarize(gray: &Array2<f32>, roof_color: f32, epsilon: f32) -> Array2<f32> {
    gray.mapv(|v| {
        if (v - roof_color).abs() <= epsilon {
            FOREGROUND
        } else {
            BACKGROUND
        }
    })
}
