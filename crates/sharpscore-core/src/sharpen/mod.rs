//! Spatial sharpening of 8-bit images.
//!
//! Both filters work on every channel of an interleaved `u8` buffer
//! independently and leave the one-pixel border untouched.
pub mod laplace;
pub mod unsharp;

use image::{DynamicImage, ImageBuffer, Pixel};
use serde::{Deserialize, Serialize};

pub use laplace::laplace;
pub use unsharp::unsharp_mask;

/// Which sharpening filter to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharpenMethod {
    /// `orig + amount * (orig - box_blur_3x3)`
    #[default]
    Unsharp,
    /// 3x3 kernel `[-1 -1 -1; -1 9 -1; -1 -1 -1]`
    Laplace,
}

impl std::fmt::Display for SharpenMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsharp => write!(f, "Unsharp mask"),
            Self::Laplace => write!(f, "Laplace"),
        }
    }
}

/// Sharpen a decoded image, keeping its channel layout.
///
/// 8-bit gray, gray+alpha, RGB and RGBA are filtered as they are. Deeper or
/// floating-point sources are first reduced to 8-bit RGBA (or gray+alpha when
/// they carry no color). `amount` is only used by [`SharpenMethod::Unsharp`].
pub fn sharpen_image(img: &DynamicImage, method: SharpenMethod, amount: f32) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(buf) => DynamicImage::ImageLuma8(apply(buf, method, amount)),
        DynamicImage::ImageLumaA8(buf) => DynamicImage::ImageLumaA8(apply(buf, method, amount)),
        DynamicImage::ImageRgb8(buf) => DynamicImage::ImageRgb8(apply(buf, method, amount)),
        DynamicImage::ImageRgba8(buf) => DynamicImage::ImageRgba8(apply(buf, method, amount)),
        _ if img.color().has_color() => {
            DynamicImage::ImageRgba8(apply(&img.to_rgba8(), method, amount))
        }
        _ => DynamicImage::ImageLumaA8(apply(&img.to_luma_alpha8(), method, amount)),
    }
}

/// Run `method` over any 8-bit pixel layout.
pub fn apply<P>(
    img: &ImageBuffer<P, Vec<u8>>,
    method: SharpenMethod,
    amount: f32,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    match method {
        SharpenMethod::Unsharp => unsharp_mask(img, amount),
        SharpenMethod::Laplace => laplace(img),
    }
}

/// Rebuild a buffer of the same layout from filtered samples.
pub(crate) fn with_samples<P>(
    img: &ImageBuffer<P, Vec<u8>>,
    samples: Vec<u8>,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let (w, h) = img.dimensions();
    ImageBuffer::from_raw(w, h, samples).expect("buffer size matches dimensions")
}

/// Correlate `kernel` with every interior sample of an interleaved buffer.
///
/// `finish` turns the integer kernel sum into the output sample. Samples in
/// the first and last row and column are copied from `raw`. Buffers narrower
/// or shorter than 3 pixels are returned unchanged.
pub(crate) fn correlate_interior(
    raw: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &[[i32; 3]; 3],
    finish: impl Fn(i32) -> u8,
) -> Vec<u8> {
    let mut out = raw.to_vec();
    if width < 3 || height < 3 {
        return out;
    }

    let stride = width * channels;
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            for c in 0..channels {
                let mut sum = 0i32;
                for (ky, kernel_row) in kernel.iter().enumerate() {
                    let row = (y + ky - 1) * stride;
                    for (kx, &k) in kernel_row.iter().enumerate() {
                        sum += k * raw[row + (x + kx - 1) * channels + c] as i32;
                    }
                }
                out[y * stride + x * channels + c] = finish(sum);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BOX_KERNEL;

    #[test]
    fn test_correlate_interior_copies_border() {
        // 3x3 single channel: only the centre is interior.
        let raw = [10, 20, 30, 40, 50, 60, 70, 80, 90];
        let out = correlate_interior(&raw, 3, 3, 1, &BOX_KERNEL, |s| (s / 9) as u8);
        assert_eq!(out, vec![10, 20, 30, 40, 50, 60, 70, 80, 90]);

        let raw = [0, 0, 0, 0, 9, 0, 0, 0, 0];
        let out = correlate_interior(&raw, 3, 3, 1, &BOX_KERNEL, |s| s as u8);
        assert_eq!(out[4], 9);
        assert_eq!(&out[..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_correlate_interior_keeps_channels_apart() {
        // 3x3 two-channel buffer, channel 0 = 1, channel 1 = 2 everywhere.
        let raw: Vec<u8> = (0..9).flat_map(|_| [1, 2]).collect();
        let out = correlate_interior(&raw, 3, 3, 2, &BOX_KERNEL, |s| s as u8);
        assert_eq!(out[8], 9);
        assert_eq!(out[9], 18);
    }

    #[test]
    fn test_small_buffers_pass_through() {
        let raw = [1, 2, 3, 4, 5, 6];
        assert_eq!(correlate_interior(&raw, 3, 2, 1, &BOX_KERNEL, |_| 0), raw.to_vec());
        assert_eq!(correlate_interior(&raw, 2, 3, 1, &BOX_KERNEL, |_| 0), raw.to_vec());
    }

    #[test]
    fn test_method_serde_names() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            method: SharpenMethod,
        }
        let w: Wrapper = toml::from_str("method = \"laplace\"").unwrap();
        assert_eq!(w.method, SharpenMethod::Laplace);
        let text = toml::to_string(&Wrapper { method: SharpenMethod::Unsharp }).unwrap();
        assert!(text.contains("\"unsharp\""));
    }
}
