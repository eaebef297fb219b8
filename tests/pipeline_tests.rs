mod common;

use common::{gradient_raster, solid_raster};
use img_press::{compress_and_save, resize_image, ImageOpsError, Raster, Resolution};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_resize_then_compress_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("thumb.jpg");

    let src = gradient_raster(400, 300);
    let resized = resize_image(&src, 200, 150).unwrap();
    compress_and_save(&resized, &out_path, 85).unwrap();

    let decoded = Raster::open(&out_path).unwrap();
    assert_eq!(decoded.dimensions(), (200, 150));
}

#[test]
fn test_resize_dimensions_exact_for_odd_targets() {
    let src = gradient_raster(123, 77);
    for (w, h) in [(1, 1), (7, 250), (250, 7), (123, 77)] {
        let out = resize_image(&src, w, h).unwrap();
        assert_eq!(out.dimensions(), (w, h));
    }
}

#[test]
fn test_resolution_survives_resize_chain() {
    let src = gradient_raster(128, 128).with_resolution(Resolution::new(72.0, 144.0));
    let once = resize_image(&src, 64, 64).unwrap();
    let twice = resize_image(&once, 200, 10).unwrap();
    assert_eq!(twice.resolution(), Resolution::new(72.0, 144.0));
}

#[test]
fn test_same_size_resize_keeps_dimensions_and_dpi() {
    // Not an identity operation: pixels may shift by interpolation rounding,
    // but dimensions and resolution must hold.
    let src = gradient_raster(90, 60).with_resolution(Resolution::new(300.0, 300.0));
    let out = resize_image(&src, 90, 60).unwrap();
    assert_eq!(out.dimensions(), (90, 60));
    assert_eq!(out.resolution(), Resolution::new(300.0, 300.0));
}

#[test]
fn test_red_square_scenario() {
    // 100x100 opaque red -> 50x50, predominantly red.
    let src = solid_raster(100, 100, [255, 0, 0, 255]);
    let out = resize_image(&src, 50, 50).unwrap();
    assert_eq!(out.dimensions(), (50, 50));

    let rgba = out.as_image().to_rgba8();
    let red = rgba
        .pixels()
        .filter(|p| p.0[0] >= 245 && p.0[1] <= 10 && p.0[2] <= 10)
        .count();
    assert!(
        red * 100 >= 50 * 50 * 95,
        "only {} of {} pixels stayed red",
        red,
        50 * 50
    );
}

#[test]
fn test_quality_monotonic_file_size() {
    let temp_dir = TempDir::new().unwrap();
    let low_path = temp_dir.path().join("q10.jpg");
    let high_path = temp_dir.path().join("q100.jpg");

    let src = gradient_raster(256, 256);
    compress_and_save(&src, &low_path, 10).unwrap();
    compress_and_save(&src, &high_path, 100).unwrap();

    let low_size = fs::metadata(&low_path).unwrap().len();
    let high_size = fs::metadata(&high_path).unwrap().len();
    assert!(
        high_size >= low_size,
        "quality 100 ({} bytes) smaller than quality 10 ({} bytes)",
        high_size,
        low_size
    );
}

#[test]
fn test_quality_extremes_scenario() {
    // 200x200 at quality 0 and 100: both decode to 200x200, q0 <= q100 bytes.
    let temp_dir = TempDir::new().unwrap();
    let q0_path = temp_dir.path().join("q0.jpg");
    let q100_path = temp_dir.path().join("q100.jpg");

    let src = gradient_raster(200, 200);
    compress_and_save(&src, &q0_path, 0).unwrap();
    compress_and_save(&src, &q100_path, 100).unwrap();

    assert_eq!(Raster::open(&q0_path).unwrap().dimensions(), (200, 200));
    assert_eq!(Raster::open(&q100_path).unwrap().dimensions(), (200, 200));

    let q0_size = fs::metadata(&q0_path).unwrap().len();
    let q100_size = fs::metadata(&q100_path).unwrap().len();
    assert!(q0_size <= q100_size);
}

#[test]
fn test_missing_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("missing").join("deep").join("out.jpg");

    let src = solid_raster(20, 20, [80, 80, 80, 255]);
    let result = compress_and_save(&src, &out_path, 80);
    assert!(matches!(result, Err(ImageOpsError::Io(_))));
}

#[test]
fn test_zero_dimension_resize_rejected() {
    let src = solid_raster(20, 20, [0, 0, 0, 255]);
    assert!(matches!(
        resize_image(&src, 0, 0),
        Err(ImageOpsError::InvalidDimensions(0, 0))
    ));
}

#[test]
fn test_saved_file_is_jpeg() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("check.jpg");

    compress_and_save(&gradient_raster(64, 64), &out_path, 75).unwrap();

    let bytes = fs::read(&out_path).unwrap();
    assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
}

#[test]
fn test_upscale_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("up.jpg");

    let src = gradient_raster(30, 30);
    let up = resize_image(&src, 120, 120).unwrap();
    compress_and_save(&up, &out_path, 90).unwrap();

    assert_eq!(Raster::open(&out_path).unwrap().dimensions(), (120, 120));
}
