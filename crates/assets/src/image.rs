//! Raster image normalization for uploads.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};

/// Maximum width of a stored image; wider uploads are downscaled.
pub const MAX_WIDTH: u32 = 1920;

/// JPEG quality used when re-encoding.
pub const JPEG_QUALITY: u8 = 80;

/// Outcome of [`normalize`]: re-encoded JPEG bytes, or the untouched input
/// with the reason normalization was abandoned.
#[derive(Debug)]
pub enum NormalizeOutcome {
    Normalized(Vec<u8>),
    Original { reason: String },
}

/// Flatten alpha/palette data to RGB, downscale to at most [`MAX_WIDTH`]
/// pixels wide (preserving aspect ratio), and re-encode as JPEG.
///
/// Never fails: any decode or encode error yields `Original` so the caller
/// can store the upload as-is. A compression problem must not fail an upload.
pub fn normalize(bytes: &[u8]) -> NormalizeOutcome {
    match try_normalize(bytes) {
        Ok(jpeg) => NormalizeOutcome::Normalized(jpeg),
        Err(reason) => NormalizeOutcome::Original { reason },
    }
}

fn try_normalize(bytes: &[u8]) -> Result<Vec<u8>, String> {
    let decoded = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .decode()
        .map_err(|e| e.to_string())?;

    // JPEG carries no alpha; converting to RGB8 also flattens palette images.
    let mut img = DynamicImage::ImageRgb8(decoded.to_rgb8());

    if img.width() > MAX_WIDTH {
        let ratio = f64::from(MAX_WIDTH) / f64::from(img.width());
        let height = ((f64::from(img.height()) * ratio).round() as u32).max(1);
        img = img.resize_exact(MAX_WIDTH, height, FilterType::Lanczos3);
    }

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    img.write_with_encoder(encoder).map_err(|e| e.to_string())?;
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 128]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn wide_image_is_downscaled_to_max_width() {
        let outcome = normalize(&png_bytes(3000, 1000));
        let NormalizeOutcome::Normalized(jpeg) = outcome else {
            panic!("expected normalized output");
        };
        let img = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(img.width(), MAX_WIDTH);
        // Aspect ratio preserved: 3000x1000 -> 1920x640.
        assert_eq!(img.height(), 640);
    }

    #[test]
    fn narrow_image_keeps_its_dimensions() {
        let outcome = normalize(&png_bytes(640, 480));
        let NormalizeOutcome::Normalized(jpeg) = outcome else {
            panic!("expected normalized output");
        };
        let img = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((img.width(), img.height()), (640, 480));
    }

    #[test]
    fn output_is_jpeg() {
        let NormalizeOutcome::Normalized(jpeg) = normalize(&png_bytes(10, 10)) else {
            panic!("expected normalized output");
        };
        assert_eq!(
            image::guess_format(&jpeg).unwrap(),
            ImageFormat::Jpeg,
            "normalized bytes must be JPEG"
        );
    }

    #[test]
    fn undecodable_bytes_fall_back_to_original() {
        let garbage = b"definitely not an image".to_vec();
        match normalize(&garbage) {
            NormalizeOutcome::Original { reason } => assert!(!reason.is_empty()),
            NormalizeOutcome::Normalized(_) => panic!("garbage must not normalize"),
        }
    }
}
