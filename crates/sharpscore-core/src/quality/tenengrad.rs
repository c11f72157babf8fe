use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::{MIN_IMAGE_DIMENSION, PARALLEL_PIXEL_THRESHOLD};
use crate::error::InvalidImageError;
use crate::frame::Frame;

use super::border::BorderMode;
use super::sobel::{row_energy, sobel_gradients};
use super::SharpnessScorer;

/// Tenengrad focus measure: the sum over every pixel of the squared Sobel
/// gradient magnitude. Higher = sharper.
///
/// Sobel kernels (correlation):
///   Gx = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]
///   Gy = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]]
///
/// Score = sum of (Gx^2 + Gy^2). No square root is taken at any stage.
///
/// The score is not normalized by pixel count, so it only ranks images of
/// the same resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tenengrad {
    pub border: BorderMode,
}

impl Tenengrad {
    pub fn new(border: BorderMode) -> Self {
        Self { border }
    }
}

impl SharpnessScorer for Tenengrad {
    fn score(&self, frame: &Frame) -> Result<f64, InvalidImageError> {
        tenengrad_score_array(&frame.data, self.border)
    }
}

/// Reject inputs the 3x3 kernel cannot handle.
pub fn validate_dimensions(data: &Array2<f32>) -> Result<(), InvalidImageError> {
    let (height, width) = data.dim();
    if height == 0 || width == 0 {
        return Err(InvalidImageError::Empty { width, height });
    }
    if height < MIN_IMAGE_DIMENSION || width < MIN_IMAGE_DIMENSION {
        return Err(InvalidImageError::TooSmall { width, height });
    }
    Ok(())
}

/// Tenengrad score of a frame with the given border policy.
pub fn tenengrad_score(frame: &Frame, border: BorderMode) -> Result<f64, InvalidImageError> {
    tenengrad_score_array(&frame.data, border)
}

/// Tenengrad score of raw array data.
///
/// Row energies are always reduced in row order, so the large-image
/// parallel path returns exactly the same value as the sequential one.
pub fn tenengrad_score_array(
    data: &Array2<f32>,
    border: BorderMode,
) -> Result<f64, InvalidImageError> {
    validate_dimensions(data)?;
    let (h, w) = data.dim();

    let row_sums: Vec<f64> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h)
            .into_par_iter()
            .map(|row| row_energy(data, row, border))
            .collect()
    } else {
        (0..h).map(|row| row_energy(data, row, border)).collect()
    };

    Ok(row_sums.iter().fold(0.0f64, |acc, s| acc + s))
}

/// Per-pixel squared gradient magnitude; its total is the Tenengrad score.
pub fn energy_map(frame: &Frame, border: BorderMode) -> Result<Array2<f64>, InvalidImageError> {
    validate_dimensions(&frame.data)?;
    Ok(sobel_gradients(&frame.data, border).magnitude_squared())
}
