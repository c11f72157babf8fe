use image::{ImageBuffer, Pixel};

use crate::consts::BOX_KERNEL;

use super::{correlate_interior, with_samples};

/// Sharpen by adding back the difference from a 3x3 box blur.
///
/// `amount` — strength; each sample becomes `orig + trunc(amount * (orig - blur))`,
/// clamped to `0..=255`.
///
/// The blur is the integer mean (truncated) of the 3x3 neighbourhood. Border
/// pixels have no full neighbourhood, so their blur is the pixel itself and
/// they come out unchanged. Every channel, alpha included, is filtered.
pub fn unsharp_mask<P>(img: &ImageBuffer<P, Vec<u8>>, amount: f32) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let (w, h) = img.dimensions();
    let channels = P::CHANNEL_COUNT as usize;
    let raw = img.as_raw();
    let blurred = correlate_interior(raw, w as usize, h as usize, channels, &BOX_KERNEL, |sum| {
        (sum / 9) as u8
    });

    let samples = raw
        .iter()
        .zip(&blurred)
        .map(|(&orig, &blur)| {
            let diff = orig as i32 - blur as i32;
            (orig as i32 + (amount * diff as f32) as i32).clamp(0, 255) as u8
        })
        .collect();
    with_samples(img, samples)
}
