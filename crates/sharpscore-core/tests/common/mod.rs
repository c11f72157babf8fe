#![allow(dead_code)]

use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;

use sharpscore_core::frame::Frame;

/// Constant-intensity 8-bit frame.
pub fn flat_frame(height: usize, width: usize, value: f32) -> Frame {
    Frame::new(Array2::from_elem((height, width), value), 8)
}

/// Checkerboard of `cell`-pixel squares alternating between `low` and `high`.
///
/// Use `cell >= 2`: a 1-pixel checkerboard sits at the Nyquist frequency,
/// where the Sobel kernel's central difference responds with zero.
pub fn checkerboard(height: usize, width: usize, cell: usize, low: f32, high: f32) -> Frame {
    let data = Array2::from_shape_fn((height, width), |(r, c)| {
        if (r / cell + c / cell) % 2 == 0 {
            high
        } else {
            low
        }
    });
    Frame::new(data, 8)
}

/// Deterministic pseudo-random 8-bit frame (LCG), values in `0..=max`.
pub fn noise_frame(height: usize, width: usize, seed: u32, max: u32) -> Frame {
    let mut state = seed;
    let data = Array2::from_shape_fn((height, width), |_| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        ((state >> 16) % (max + 1)) as f32
    });
    Frame::new(data, 8)
}

/// Write an 8-bit grayscale PNG whose samples are `f(row, col)`.
pub fn write_gray_png(path: &Path, width: u32, height: u32, f: impl Fn(u32, u32) -> u8) {
    let img = GrayImage::from_fn(width, height, |x, y| Luma([f(y, x)]));
    img.save(path).expect("write test png");
}
