use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError};
use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
use crate::error::{InvalidImageError, Result, SharpscoreError};
use crate::frame::Frame;

/// Load an image file as a grayscale Frame of raw samples.
///
/// Any open or decode failure is reported as [`InvalidImageError::Decode`].
pub fn load_grayscale(path: &Path) -> Result<Frame> {
    let img = image::open(path).map_err(|source| InvalidImageError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(to_grayscale_frame(&img))
}

/// Convert a decoded image to a single-channel Frame.
///
/// Gray sources are taken as-is (alpha dropped). Color sources go through
/// BT.601 luminance. Sources with more than 8 bits per channel keep 16-bit
/// samples.
pub fn to_grayscale_frame(img: &DynamicImage) -> Frame {
    match img {
        DynamicImage::ImageLuma8(gray) => Frame::from_gray8(gray),
        DynamicImage::ImageLumaA8(_) => Frame::from_gray8(&img.to_luma8()),
        DynamicImage::ImageLuma16(gray) => Frame::from_gray16(gray),
        DynamicImage::ImageLumaA16(_) => Frame::from_gray16(&img.to_luma16()),
        _ if is_wide(img) => {
            let rgb = img.to_rgb16();
            luminance(rgb.width(), rgb.height(), rgb.as_raw(), 16)
        }
        _ => {
            let rgb = img.to_rgb8();
            luminance(rgb.width(), rgb.height(), rgb.as_raw(), 8)
        }
    }
}

/// Save as baseline JPEG at `quality` (1-100).
///
/// JPEG has no alpha and only 8-bit samples: alpha is dropped and deeper
/// sources are reduced to 8-bit gray or RGB.
pub fn save_jpeg(img: &DynamicImage, path: &Path, quality: u8) -> Result<()> {
    let encode_err = |source| SharpscoreError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let encodable = match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => Cow::Borrowed(img),
        _ if img.color().has_color() => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
        _ => Cow::Owned(DynamicImage::ImageLuma8(img.to_luma8())),
    };

    let file = File::create(path).map_err(|e| encode_err(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    encodable.write_with_encoder(encoder).map_err(encode_err)?;
    writer.flush().map_err(|e| encode_err(ImageError::IoError(e)))
}

fn is_wide(img: &DynamicImage) -> bool {
    let color = img.color();
    color.bytes_per_pixel() / color.channel_count() > 1
}

/// BT.601 luminance over interleaved RGB samples, rounded to whole samples.
fn luminance<T: Copy + Into<f32>>(width: u32, height: u32, raw: &[T], bit_depth: u8) -> Frame {
    let w = width as usize;
    let data = Array2::from_shape_fn((height as usize, w), |(row, col)| {
        let i = 3 * (row * w + col);
        let [r, g, b]: [f32; 3] = [raw[i], raw[i + 1], raw[i + 2]].map(Into::into);
        (LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b).round()
    });
    Frame::new(data, bit_depth)
}
