//! Shrinks avatar photos to a small JPEG data URI that can be stored on a
//! signature and inlined into its HTML.

use std::fmt;
use std::io::Cursor;
use std::path::Path;

use base64::{engine::general_purpose, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use thiserror::Error;

/// Longest side of a resized avatar, in pixels.
pub const DEFAULT_MAX_SIZE: u32 = 150;

/// Inputs larger than this still resize but produce a warning.
pub const FILE_SIZE_WARN_BYTES: usize = 5 * 1024 * 1024;

pub const JPEG_QUALITY: u8 = 80;

const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("The selected file is not an image.")]
    NotAnImage,

    #[error("Failed to load the image. The file may be corrupt.")]
    Decode(#[source] image::ImageError),

    #[error("Failed to resize the image.")]
    Encode(#[source] image::ImageError),

    #[error("Avatar size must be at least 1 pixel.")]
    InvalidMaxSize,

    #[error("Failed to read the image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Non-fatal conditions noticed while resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarWarning {
    FileTooLarge { bytes: usize },
}

impl fmt::Display for AvatarWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvatarWarning::FileTooLarge { bytes } => write!(
                f,
                "Image file is {:.1} MB. Large files may take a moment to process.",
                *bytes as f64 / 1024.0 / 1024.0
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizedImage {
    /// `data:image/jpeg;base64,...`
    pub data_url: String,
    pub width: u32,
    pub height: u32,
    pub warning: Option<AvatarWarning>,
}

/// Dimensions that fit within a `max_size` square, keeping the aspect
/// ratio. Images already small enough keep their size.
pub fn fit_dimensions(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    if width <= max_size && height <= max_size {
        return (width, height);
    }

    let scale = |short: u32, long: u32| {
        ((f64::from(short) / f64::from(long)) * f64::from(max_size)).round() as u32
    };

    if width >= height {
        (max_size, scale(height, width).max(1))
    } else {
        (scale(width, height).max(1), max_size)
    }
}

/// Resize encoded image bytes (PNG, JPEG, GIF, WebP, ...) so the longest
/// side is at most `max_size`, and re-encode as JPEG. `max_size` must be
/// non-zero.
pub fn resize_image(bytes: &[u8], max_size: u32) -> Result<ResizedImage, AvatarError> {
    if max_size == 0 {
        return Err(AvatarError::InvalidMaxSize);
    }
    let format = image::guess_format(bytes).map_err(|_| AvatarError::NotAnImage)?;

    let warning = (bytes.len() > FILE_SIZE_WARN_BYTES)
        .then_some(AvatarWarning::FileTooLarge { bytes: bytes.len() });
    if let Some(warning) = &warning {
        tracing::warn!("{warning}");
    }

    let source = image::load_from_memory_with_format(bytes, format).map_err(AvatarError::Decode)?;
    let (width, height) = fit_dimensions(source.width(), source.height(), max_size);

    let resized = if (width, height) == (source.width(), source.height()) {
        source
    } else {
        source.resize_exact(width, height, FilterType::Triangle)
    };

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut jpeg), JPEG_QUALITY);
    DynamicImage::ImageRgb8(resized.to_rgb8())
        .write_with_encoder(encoder)
        .map_err(AvatarError::Encode)?;

    tracing::debug!(?format, width, height, bytes = jpeg.len(), "resized avatar");

    Ok(ResizedImage {
        data_url: format!("{DATA_URL_PREFIX}{}", general_purpose::STANDARD.encode(&jpeg)),
        width,
        height,
        warning,
    })
}

/// [`resize_image`] on the contents of a file.
pub fn resize_image_file(path: impl AsRef<Path>, max_size: u32) -> Result<ResizedImage, AvatarError> {
    let bytes = std::fs::read(path)?;
    resize_image(&bytes, max_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_are_not_upscaled() {
        assert_eq!(fit_dimensions(100, 80, 150), (100, 80));
        assert_eq!(fit_dimensions(150, 150, 150), (150, 150));
    }

    #[test]
    fn landscape_fits_width() {
        assert_eq!(fit_dimensions(300, 200, 150), (150, 100));
        assert_eq!(fit_dimensions(1000, 333, 150), (150, 50));
    }

    #[test]
    fn portrait_fits_height() {
        assert_eq!(fit_dimensions(200, 400, 150), (75, 150));
    }

    #[test]
    fn square_uses_width_branch() {
        assert_eq!(fit_dimensions(600, 600, 150), (150, 150));
    }

    #[test]
    fn extreme_ratios_keep_one_pixel() {
        assert_eq!(fit_dimensions(10_000, 1, 150), (150, 1));
    }

    #[test]
    fn warning_message_in_megabytes() {
        let warning = AvatarWarning::FileTooLarge {
            bytes: 6 * 1024 * 1024 + 512 * 1024,
        };
        assert_eq!(
            warning.to_string(),
            "Image file is 6.5 MB. Large files may take a moment to process."
        );
    }

    #[test]
    fn text_is_not_an_image() {
        let err = resize_image(b"hello, world", DEFAULT_MAX_SIZE).unwrap_err();
        assert!(matches!(err, AvatarError::NotAnImage));
        assert_eq!(err.to_string(), "The selected file is not an image.");
    }

    #[test]
    fn truncated_png_fails_to_decode() {
        let header = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
        let err = resize_image(header, DEFAULT_MAX_SIZE).unwrap_err();
        assert!(matches!(err, AvatarError::Decode(_)));
    }
}
