//! Regression tests for the screenshot image handle
//!
//! Crop, clear and join are checked pixel by pixel against a coordinate
//! image so misplaced rows or columns show up; encode/decode paths go
//! through real files in the regout directory.

use shotdiff_core::{Rect, Rgba, Size};
use shotdiff_image::{ClearOptions, CropOptions, Image, ImageError};
use shotdiff_test::{RegParams, coordinate_image, solid};

// ============================================================================
// crop
// ============================================================================

#[tokio::test]
async fn test_crop_inside() {
    let mut rp = RegParams::new("image_crop_inside");
    let mut image = Image::from_pix(coordinate_image(100, 100));
    image
        .crop(Rect::new(0, 0, 10, 10), CropOptions::default())
        .await
        .unwrap();
    assert_eq!(image.size(), Size::new(10, 10));

    let expected = coordinate_image(100, 100).clip_rectangle(Rect::new(0, 0, 10, 10));
    rp.compare_pix(image.pix(), &expected);
    assert!(rp.cleanup());
}

#[tokio::test]
async fn test_crop_out_of_bounds_is_clamped() {
    let mut rp = RegParams::new("image_crop_clamped");
    let mut image = Image::from_pix(coordinate_image(100, 100));
    image
        .crop(Rect::new(90, 90, 50, 50), CropOptions::default())
        .await
        .unwrap();
    assert_eq!(image.size(), Size::new(10, 10));

    // top-left of the crop is source pixel (90, 90)
    rp.compare_rgba(Rgba::rgb(90, 90, 0), image.get_rgba(0, 0).unwrap());
    rp.compare_rgba(Rgba::rgb(99, 99, 0), image.get_rgba(9, 9).unwrap());
    assert!(rp.cleanup());
}

#[tokio::test]
async fn test_crop_scaled_for_device_ratio() {
    let mut rp = RegParams::new("image_crop_scaled");
    let mut image = Image::from_pix(coordinate_image(100, 100));
    image
        .crop(Rect::new(5, 10, 20, 15), CropOptions::scaled(2.0))
        .await
        .unwrap();
    rp.compare_values(40.0, f64::from(image.size().width), 0.0);
    rp.compare_values(30.0, f64::from(image.size().height), 0.0);
    rp.compare_rgba(Rgba::rgb(10, 20, 10 ^ 20), image.get_rgba(0, 0).unwrap());
    assert!(rp.cleanup());
}

#[tokio::test]
async fn test_crop_chains() {
    let mut image = Image::from_pix(coordinate_image(64, 64));
    let size = image
        .crop(Rect::new(8, 8, 32, 32), CropOptions::default())
        .await
        .unwrap()
        .crop(Rect::new(8, 8, 8, 8), CropOptions::default())
        .await
        .unwrap()
        .size();
    assert_eq!(size, Size::new(8, 8));
    assert_eq!(image.get_rgba(0, 0).unwrap(), Rgba::rgb(16, 16, 0));
}

#[tokio::test]
async fn test_crop_fully_outside_yields_empty() {
    let mut image = Image::from_pix(solid(20, 20, Rgba::WHITE));
    image
        .crop(Rect::new(50, 50, 10, 10), CropOptions::default())
        .await
        .unwrap();
    assert_eq!(image.size().area(), 0);
}

// ============================================================================
// clear
// ============================================================================

#[test]
fn test_clear_paints_black_inside_bounds_only() {
    let mut rp = RegParams::new("image_clear");
    let mut image = Image::from_pix(solid(20, 20, Rgba::WHITE));
    image
        .clear(Rect::new(-5, 15, 10, 100), ClearOptions::default())
        .unwrap();

    rp.compare_rgba(Rgba::BLACK, image.get_rgba(0, 19).unwrap());
    rp.compare_rgba(Rgba::BLACK, image.get_rgba(9, 15).unwrap());
    rp.compare_rgba(Rgba::WHITE, image.get_rgba(10, 15).unwrap());
    rp.compare_rgba(Rgba::WHITE, image.get_rgba(0, 14).unwrap());
    assert_eq!(image.size(), Size::new(20, 20));
    assert!(rp.cleanup());
}

// ============================================================================
// join
// ============================================================================

#[test]
fn test_join_stacks_vertically() {
    let mut rp = RegParams::new("image_join");
    let base = coordinate_image(50, 30);
    let below = solid(50, 20, Rgba::rgb(200, 100, 50));

    let mut image = Image::from_pix(base.clone());
    let other = Image::from_pix(below.clone());
    image.join(&other).unwrap();
    assert_eq!(image.size(), Size::new(50, 50));

    let top = image.pix().clip_rectangle(Rect::new(0, 0, 50, 30));
    let bottom = image.pix().clip_rectangle(Rect::new(0, 30, 50, 20));
    rp.compare_pix(&top, &base);
    rp.compare_pix(&bottom, &below);

    // other is left untouched
    assert_eq!(other.size(), Size::new(50, 20));
    assert!(rp.cleanup());
}

#[test]
fn test_join_wider_image_is_clipped() {
    let mut image = Image::from_pix(solid(10, 5, Rgba::WHITE));
    image
        .join(&Image::from_pix(solid(30, 5, Rgba::BLACK)))
        .unwrap();
    assert_eq!(image.size(), Size::new(10, 10));
    assert_eq!(image.get_rgba(9, 9).unwrap(), Rgba::BLACK);
}

#[test]
fn test_join_narrower_image_leaves_transparent_gap() {
    let mut image = Image::from_pix(solid(10, 5, Rgba::WHITE));
    image
        .join(&Image::from_pix(solid(4, 5, Rgba::BLACK)))
        .unwrap();
    assert_eq!(image.size(), Size::new(10, 10));
    assert_eq!(image.get_rgba(3, 7).unwrap(), Rgba::BLACK);
    assert_eq!(image.get_rgba(4, 7).unwrap(), Rgba::TRANSPARENT);
}

// ============================================================================
// encode / decode
// ============================================================================

#[tokio::test]
async fn test_save_and_reload() {
    let mut rp = RegParams::new("image_save");
    let image = Image::from_pix(coordinate_image(33, 17));
    let path = rp.next_path("png");
    image.save(&path).await.unwrap();

    let reloaded = Image::from_file(&path).await.unwrap();
    rp.compare_pix(reloaded.pix(), image.pix());
    assert!(rp.cleanup());
}

#[test]
fn test_from_base64() {
    let mut rp = RegParams::new("image_base64");
    let image = Image::from_pix(coordinate_image(8, 8));
    let encoded = shotdiff_io::encode_base64(&image.to_png_bytes().unwrap());

    let decoded = Image::from_base64(&encoded).unwrap();
    rp.compare_pix(decoded.pix(), image.pix());
    assert!(rp.cleanup());
}

#[test]
fn test_malformed_input_is_decode_error() {
    assert!(matches!(
        Image::from_bytes(b"\x89PNG\r\n\x1a\nnot really"),
        Err(ImageError::Decode(_))
    ));
    assert!(matches!(
        Image::from_base64("%%% not base64 %%%"),
        Err(ImageError::Decode(_))
    ));
}

#[tokio::test]
async fn test_save_to_missing_directory_is_io_error() {
    let image = Image::from_pix(solid(4, 4, Rgba::WHITE));
    let err = image
        .save("/nonexistent-shotdiff-dir/out.png")
        .await
        .unwrap_err();
    assert!(matches!(err, ImageError::Io(_)));
}

#[tokio::test]
async fn test_save_empty_image_is_encode_error() {
    let mut rp = RegParams::new("image_save_empty");
    let mut image = Image::from_pix(solid(4, 4, Rgba::WHITE));
    image
        .crop(Rect::new(0, 0, 0, 4), CropOptions::default())
        .await
        .unwrap();
    let path = rp.next_path("png");
    let err = image.save(&path).await.unwrap_err();
    assert!(matches!(err, ImageError::Encode(_)));
    assert!(rp.cleanup());
}
