//! 3x3 Sobel gradients with explicit border extension.
//!
//! Both kernels are applied as correlations, so `gx` is positive where
//! intensity increases to the right and `gy` where it increases downward.
//! Every pixel, border included, gets a defined value through [`BorderMode`].
use ndarray::Array2;

use crate::consts::{SOBEL_X, SOBEL_Y};

use super::border::BorderMode;

/// Horizontal and vertical Sobel responses of one image.
#[derive(Clone, Debug)]
pub struct GradientField {
    pub gx: Array2<f64>,
    pub gy: Array2<f64>,
}

impl GradientField {
    /// Per-pixel `gx^2 + gy^2`.
    pub fn magnitude_squared(&self) -> Array2<f64> {
        ndarray::Zip::from(&self.gx)
            .and(&self.gy)
            .map_collect(|&gx, &gy| gx * gx + gy * gy)
    }
}

/// Row or column indices of a 3-wide neighbourhood around `center`.
#[inline]
fn neighbourhood(center: usize, len: usize, border: BorderMode) -> [usize; 3] {
    let c = center as isize;
    [
        border.resolve(c - 1, len),
        center,
        border.resolve(c + 1, len),
    ]
}

/// Sobel response at a single pixel.
#[inline]
pub(crate) fn sobel_at(
    data: &Array2<f32>,
    rows: &[usize; 3],
    cols: &[usize; 3],
) -> (f64, f64) {
    let mut gx = 0.0f64;
    let mut gy = 0.0f64;
    for (ky, &r) in rows.iter().enumerate() {
        for (kx, &c) in cols.iter().enumerate() {
            let v = data[[r, c]] as f64;
            gx += SOBEL_X[ky][kx] * v;
            gy += SOBEL_Y[ky][kx] * v;
        }
    }
    (gx, gy)
}

/// Sum of `gx^2 + gy^2` along one image row.
///
/// Expects `data` to be at least 1x1.
pub(crate) fn row_energy(data: &Array2<f32>, row: usize, border: BorderMode) -> f64 {
    let (h, w) = data.dim();
    let rows = neighbourhood(row, h, border);
    let mut sum = 0.0f64;
    for col in 0..w {
        let cols = neighbourhood(col, w, border);
        let (gx, gy) = sobel_at(data, &rows, &cols);
        sum += gx * gx + gy * gy;
    }
    sum
}

/// Compute the full Sobel gradient field.
///
/// Returns empty arrays for an empty input.
pub fn sobel_gradients(data: &Array2<f32>, border: BorderMode) -> GradientField {
    let (h, w) = data.dim();
    let mut gx = Array2::<f64>::zeros((h, w));
    let mut gy = Array2::<f64>::zeros((h, w));

    if h == 0 || w == 0 {
        return GradientField { gx, gy };
    }

    for row in 0..h {
        let rows = neighbourhood(row, h, border);
        for col in 0..w {
            let cols = neighbourhood(col, w, border);
            let (x, y) = sobel_at(data, &rows, &cols);
            gx[[row, col]] = x;
            gy[[row, col]] = y;
        }
    }

    GradientField { gx, gy }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_ramp_has_only_gx() {
        // Intensity = 10 * col: interior gx = (1 + 2 + 1) * 20 = 80.
        let data = Array2::from_shape_fn((5, 6), |(_, c)| 10.0 * c as f32);
        let field = sobel_gradients(&data, BorderMode::Reflect101);
        assert_eq!(field.gx[[2, 2]], 80.0);
        assert_eq!(field.gy[[2, 2]], 0.0);
        // Reflect101 mirrors col 1 into col -1, so the edge response cancels.
        assert_eq!(field.gx[[2, 0]], 0.0);
    }

    #[test]
    fn test_vertical_ramp_has_only_gy() {
        let data = Array2::from_shape_fn((6, 5), |(r, _)| 3.0 * r as f32);
        let field = sobel_gradients(&data, BorderMode::Replicate);
        assert_eq!(field.gy[[3, 2]], 24.0);
        assert_eq!(field.gx[[3, 2]], 0.0);
        // Replicate keeps half the step at the top edge.
        assert_eq!(field.gy[[0, 2]], 12.0);
    }

    #[test]
    fn test_row_energy_matches_field() {
        let data = Array2::from_shape_fn((4, 7), |(r, c)| ((r * 7 + c) % 5) as f32 * 11.0);
        for border in [BorderMode::Reflect101, BorderMode::Reflect, BorderMode::Replicate] {
            let mag2 = sobel_gradients(&data, border).magnitude_squared();
            for row in 0..4 {
                let expected: f64 = mag2.row(row).iter().sum();
                assert_eq!(row_energy(&data, row, border), expected);
            }
        }
    }
}
