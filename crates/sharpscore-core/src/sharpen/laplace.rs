use image::{ImageBuffer, Pixel};

use crate::consts::LAPLACE_KERNEL;

use super::{correlate_interior, with_samples};

/// Sharpen with the 3x3 kernel `[-1 -1 -1; -1 9 -1; -1 -1 -1]`.
///
/// The kernel sums to 1, so flat regions pass through. Results are clamped
/// to `0..=255`; the one-pixel border is copied from the input.
pub fn laplace<P>(img: &ImageBuffer<P, Vec<u8>>) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let (w, h) = img.dimensions();
    let samples = correlate_interior(
        img.as_raw(),
        w as usize,
        h as usize,
        P::CHANNEL_COUNT as usize,
        &LAPLACE_KERNEL,
        |sum| sum.clamp(0, 255) as u8,
    );
    with_samples(img, samples)
}
