use std::io::Cursor;

use base64::{engine::general_purpose, Engine as _};
use image::{ImageFormat, Rgba, RgbaImage};
use sigforge_avatar::{
    resize_image, resize_image_file, AvatarError, AvatarWarning, DEFAULT_MAX_SIZE,
};

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn decode_data_url(data_url: &str) -> image::DynamicImage {
    let encoded = data_url
        .strip_prefix("data:image/jpeg;base64,")
        .expect("jpeg data url");
    let bytes = general_purpose::STANDARD.decode(encoded).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
    image::load_from_memory(&bytes).unwrap()
}

#[test]
fn test_large_landscape_is_scaled_down() {
    let resized = resize_image(&png(600, 300), DEFAULT_MAX_SIZE).unwrap();

    assert_eq!((resized.width, resized.height), (150, 75));
    assert_eq!(resized.warning, None);

    let decoded = decode_data_url(&resized.data_url);
    assert_eq!((decoded.width(), decoded.height()), (150, 75));
}

#[test]
fn test_small_image_keeps_size_but_becomes_jpeg() {
    let resized = resize_image(&png(40, 60), DEFAULT_MAX_SIZE).unwrap();

    assert_eq!((resized.width, resized.height), (40, 60));
    let decoded = decode_data_url(&resized.data_url);
    assert_eq!((decoded.width(), decoded.height()), (40, 60));
}

#[test]
fn test_custom_max_size() {
    let resized = resize_image(&png(90, 300), 100).unwrap();
    assert_eq!((resized.width, resized.height), (30, 100));
}

#[test]
fn test_transparent_png_encodes() {
    let img = RgbaImage::from_pixel(200, 200, Rgba([0, 0, 0, 0]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();

    let resized = resize_image(&bytes, DEFAULT_MAX_SIZE).unwrap();
    assert!(resized.data_url.starts_with("data:image/jpeg;base64,"));
}

#[test]
fn test_oversized_input_warns_but_succeeds() {
    let mut bytes = png(10, 10);
    // PNG decoders ignore trailing bytes after IEND
    bytes.resize(5 * 1024 * 1024 + 1, 0);

    let resized = resize_image(&bytes, DEFAULT_MAX_SIZE).unwrap();
    assert_eq!(
        resized.warning,
        Some(AvatarWarning::FileTooLarge { bytes: bytes.len() })
    );
}

#[test]
fn test_resize_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.png");
    std::fs::write(&path, png(300, 300)).unwrap();

    let resized = resize_image_file(&path, DEFAULT_MAX_SIZE).unwrap();
    assert_eq!((resized.width, resized.height), (150, 150));

    let missing = resize_image_file(dir.path().join("nope.png"), DEFAULT_MAX_SIZE);
    assert!(matches!(missing, Err(AvatarError::Io(_))));
}

#[test]
fn test_zero_max_size_is_rejected() {
    let err = resize_image(&png(200, 100), 0).unwrap_err();
    assert!(matches!(err, AvatarError::InvalidMaxSize));
    assert_eq!(err.to_string(), "Avatar size must be at least 1 pixel.");
}
