// SPDX-License-Identifier: MPL-2.0
//! Photo decoding for the card and its backdrop.

use crate::application::port::LibraryResult;
use crate::domain::display::BlurSigma;
use crate::domain::{RawImage, ResolvedImage, TargetSize};
use crate::error::LibraryError;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, ImageDecoder, ImageError, ImageReader};
use std::path::Path;

/// The backdrop is blurred at this fraction of the card size.
const BACKDROP_SCALE_DIVISOR: u32 = 4;

/// Decodes `path` and prepares both bitmaps for `size`.
///
/// The card is scaled to fill `size` (cropping the overflow); the backdrop
/// is a downscaled copy blurred with `blur`.
///
/// # Errors
///
/// Returns [`LibraryError::NotFound`] if the file is gone, or
/// [`LibraryError::Decode`] if it is not a readable image.
pub fn resolve(path: &Path, size: TargetSize, blur: BlurSigma) -> LibraryResult<ResolvedImage> {
    let image = decode_oriented(path)?;
    let width = size.width.max(1);
    let height = size.height.max(1);

    let card = image.resize_to_fill(width, height, FilterType::Triangle);

    let small_width = (width / BACKDROP_SCALE_DIVISOR).max(1);
    let small_height = (height / BACKDROP_SCALE_DIVISOR).max(1);
    let mut backdrop = image.resize_to_fill(small_width, small_height, FilterType::Triangle);
    let sigma = blur.value() / BACKDROP_SCALE_DIVISOR as f32;
    if sigma > 0.0 {
        backdrop = backdrop.blur(sigma);
    }

    Ok(ResolvedImage {
        card: into_raw(card),
        backdrop: into_raw(backdrop),
    })
}

fn decode_oriented(path: &Path) -> LibraryResult<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|err| LibraryError::from_io(&err))?
        .with_guessed_format()
        .map_err(|err| LibraryError::from_io(&err))?;
    let mut decoder = reader.into_decoder().map_err(from_image_error)?;
    let orientation = decoder.orientation().map_err(from_image_error)?;
    let mut image = DynamicImage::from_decoder(decoder).map_err(from_image_error)?;
    image.apply_orientation(orientation);
    Ok(image)
}

fn into_raw(image: DynamicImage) -> RawImage {
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    RawImage::from_rgba(width, height, rgba.into_raw())
}

fn from_image_error(err: ImageError) -> LibraryError {
    match err {
        ImageError::IoError(io) => LibraryError::from_io(&io),
        other => LibraryError::Decode(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    fn write_png(path: &Path, width: u32, height: u32) {
        let image = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        image.save(path).expect("failed to write png");
    }

    #[test]
    fn resolve_fills_target_size() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("wide.png");
        write_png(&path, 120, 40);

        let resolved = resolve(&path, TargetSize::new(32, 45), BlurSigma::default())
            .expect("resolve failed");

        assert_eq!(resolved.card.width(), 32);
        assert_eq!(resolved.card.height(), 45);
        assert_eq!(resolved.card.rgba_bytes().len(), 32 * 45 * 4);
        assert_eq!(resolved.backdrop.width(), 8);
        assert_eq!(resolved.backdrop.height(), 11);
    }

    #[test]
    fn resolve_without_blur_keeps_colors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("solid.png");
        write_png(&path, 16, 16);

        let resolved =
            resolve(&path, TargetSize::new(16, 16), BlurSigma::new(0.0)).expect("resolve failed");
        assert_eq!(&resolved.backdrop.rgba_bytes()[..4], &[200, 40, 40, 255]);
    }

    #[test]
    fn resolve_missing_file_is_not_found() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = resolve(
            &temp_dir.path().join("gone.png"),
            TargetSize::new(10, 10),
            BlurSigma::default(),
        );
        assert_eq!(result.err(), Some(LibraryError::NotFound));
    }

    #[test]
    fn resolve_garbage_is_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").expect("failed to write file");

        let result = resolve(&path, TargetSize::new(10, 10), BlurSigma::default());
        assert!(matches!(result, Err(LibraryError::Decode(_))));
    }
}
