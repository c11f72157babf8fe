mod common;

use image::{GrayAlphaImage, ImageBuffer, Luma, LumaA, Rgb, RgbImage, Rgba, RgbaImage};

use sharpscore_core::error::{InvalidImageError, SharpscoreError};
use sharpscore_core::io::image_io::{load_grayscale, to_grayscale_frame};
use sharpscore_core::quality::score;

use common::write_gray_png;

#[test]
fn test_load_gray_png_keeps_raw_samples() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    write_gray_png(&path, 5, 4, |row, col| (row * 10 + col) as u8);

    let frame = load_grayscale(&path).unwrap();
    assert_eq!(frame.width(), 5);
    assert_eq!(frame.height(), 4);
    assert_eq!(frame.bit_depth, 8);
    assert_eq!(frame.data[[0, 0]], 0.0);
    assert_eq!(frame.data[[2, 3]], 23.0);
    assert_eq!(frame.data[[3, 4]], 34.0);
}

#[test]
fn test_rgb_uses_bt601_luminance() {
    let mut img = RgbImage::new(3, 3);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(1, 0, Rgb([0, 255, 0]));
    img.put_pixel(2, 0, Rgb([0, 0, 255]));
    img.put_pixel(0, 1, Rgb([255, 255, 255]));

    let frame = to_grayscale_frame(&image::DynamicImage::ImageRgb8(img));
    assert_eq!(frame.bit_depth, 8);
    assert_eq!(frame.data[[0, 0]], 76.0); // 0.299 * 255
    assert_eq!(frame.data[[0, 1]], 150.0); // 0.587 * 255
    assert_eq!(frame.data[[0, 2]], 29.0); // 0.114 * 255
    assert_eq!(frame.data[[1, 0]], 255.0);
    assert_eq!(frame.data[[2, 2]], 0.0);
}

#[test]
fn test_sixteen_bit_gray_keeps_depth() {
    let img: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_fn(4, 4, |x, y| Luma([(x * 1000 + y) as u16]));
    let frame = to_grayscale_frame(&image::DynamicImage::ImageLuma16(img));
    assert_eq!(frame.bit_depth, 16);
    assert_eq!(frame.data[[2, 3]], 3002.0);
}

#[test]
fn test_sixteen_bit_rgb_png_keeps_depth_through_luminance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgb16.png");
    let img: ImageBuffer<Rgb<u16>, Vec<u16>> = ImageBuffer::from_fn(4, 3, |x, y| match (x, y) {
        (0, 0) => Rgb([65535, 0, 0]),
        (1, 0) => Rgb([65535, 65535, 65535]),
        _ => Rgb([1000, 1000, 1000]),
    });
    img.save(&path).unwrap();

    let frame = load_grayscale(&path).unwrap();
    assert_eq!(frame.bit_depth, 16);
    assert_eq!((frame.width(), frame.height()), (4, 3));
    assert_eq!(frame.data[[0, 0]], 19595.0); // 0.299 * 65535
    assert_eq!(frame.data[[0, 1]], 65535.0);
    assert_eq!(frame.data[[2, 3]], 1000.0);
}

#[test]
fn test_gray_alpha_png_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray_alpha.png");
    let img = GrayAlphaImage::from_fn(3, 3, |x, y| LumaA([(x * 40 + y) as u8, 7]));
    img.save(&path).unwrap();

    let frame = load_grayscale(&path).unwrap();
    assert_eq!(frame.bit_depth, 8);
    assert_eq!(frame.data[[0, 0]], 0.0);
    assert_eq!(frame.data[[1, 2]], 81.0);
    assert_eq!(frame.data[[2, 2]], 82.0);
}

#[test]
fn test_rgba_png_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgba.png");
    let mut img = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
    img.put_pixel(1, 1, Rgba([0, 255, 0, 0]));
    img.put_pixel(2, 1, Rgba([0, 0, 0, 128]));
    img.save(&path).unwrap();

    let frame = load_grayscale(&path).unwrap();
    assert_eq!(frame.bit_depth, 8);
    assert_eq!(frame.data[[0, 0]], 255.0);
    assert_eq!(frame.data[[1, 1]], 150.0); // 0.587 * 255, alpha ignored
    assert_eq!(frame.data[[1, 2]], 0.0);
}

#[test]
fn test_garbage_bytes_are_invalid_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"definitely not a jpeg").unwrap();

    match load_grayscale(&path) {
        Err(SharpscoreError::InvalidImage(InvalidImageError::Decode { path: p, .. })) => {
            assert_eq!(p, path);
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_invalid_image() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_grayscale(&dir.path().join("nope.png"));
    assert!(matches!(
        result,
        Err(SharpscoreError::InvalidImage(InvalidImageError::Decode { .. }))
    ));
}

#[test]
fn test_loaded_file_scores_like_in_memory_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corner.png");
    write_gray_png(&path, 3, 3, |row, col| if row == 0 && col == 0 { 255 } else { 0 });

    let frame = load_grayscale(&path).unwrap();
    assert_eq!(score(&frame).unwrap(), 650_250.0);
}
