use image::{GrayImage, ImageBuffer, Luma};
use ndarray::Array2;

/// A single grayscale image.
/// Pixel values are raw intensity samples in `[0, 2^bit_depth - 1]`,
/// not normalized, so scores stay comparable with 8-bit reference output.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Bit depth of the source samples (8 or 16)
    pub bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<f32>, bit_depth: u8) -> Self {
        Self { data, bit_depth }
    }

    /// Build a frame from an 8-bit grayscale buffer.
    pub fn from_gray8(img: &GrayImage) -> Self {
        let (w, h) = img.dimensions();
        let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
            img.get_pixel(col as u32, row as u32).0[0] as f32
        });
        Self::new(data, 8)
    }

    /// Build a frame from a 16-bit grayscale buffer.
    pub fn from_gray16(img: &ImageBuffer<Luma<u16>, Vec<u16>>) -> Self {
        let (w, h) = img.dimensions();
        let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
            img.get_pixel(col as u32, row as u32).0[0] as f32
        });
        Self::new(data, 16)
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}
