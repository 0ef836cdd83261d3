use std::collections::HashMap;

use ndarray::Array2;

use crate::error::{Result, RooflineError};

/// Strategy for picking the dominant foreground ("roof") intensity.
///
/// The default histogram heuristic is a global, brittle assumption; keeping
/// it behind a trait lets alternative heuristics slot in without touching
/// the rest of the pipeline.
pub trait RoofColorPicker {
    fn pick(&self, gray: &Array2<f32>) -> Result<f32>;
}

/// Picks the second most frequent exact intensity value.
///
/// The most frequent value is almost always the capture background (sky,
/// pavement, empty lot); the runner-up is the dominant rooftop material.
/// Values are counted by exact bit pattern, ties broken by first occurrence
/// in scan order, which keeps the choice deterministic on quantized imagery.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondPeak;

impl RoofColorPicker for SecondPeak {
    fn pick(&self, gray: &Array2<f32>) -> Result<f32> {
        // (count, first_seen) keyed by the value's bit pattern.
        let mut counts: HashMap<u32, (usize, usize)> = HashMap::new();
        for (order, &v) in gray.iter().enumerate() {
            let entry = counts.entry(v.to_bits()).or_insert((0, order));
            entry.0 += 1;
        }

        let mut ranked: Vec<(u32, (usize, usize))> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

        match ranked.get(1) {
            Some(&(bits, _)) => Ok(f32::from_bits(bits)),
            // Empty image, or a single flat color with no runner-up.
            None => Err(RooflineError::EmptyImage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_second_most_common_color() {
        let mut gray = Array2::<f32>::zeros((5, 5));
        for row in 1..4 {
            for col in 1..4 {
                gray[[row, col]] = 0.98;
            }
        }
        let color = SecondPeak.pick(&gray).unwrap();
        assert_eq!(color, 0.98);
    }

    #[test]
    fn empty_image_is_an_error() {
        let gray = Array2::<f32>::zeros((0, 0));
        assert!(matches!(
            SecondPeak.pick(&gray),
            Err(RooflineError::EmptyImage)
        ));
    }

    #[test]
    fn flat_image_has_no_second_peak() {
        let gray = Array2::from_elem((4, 4), 0.5f32);
        assert!(SecondPeak.pick(&gray).is_err());
    }

    #[test]
    fn ties_resolve_to_first_seen_value() {
        // 0.2 and 0.8 both appear twice; 0.2 is scanned first and wins the
        // top slot, so the second peak is 0.8.
        let gray = Array2::from_shape_vec((1, 5), vec![0.2, 0.8, 0.2, 0.8, 0.5]).unwrap();
        assert_eq!(SecondPeak.pick(&gray).unwrap(), 0.8);
    }
}
