//! Photo Embedder — turns a stored portrait into an inline data URI.
//!
//! The photo is optional everywhere downstream: a missing file or
//! undecodable bytes must never fail a render, so every failure path here
//! logs and returns `None`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use tracing::warn;

use crate::render::labels::PhotoBox;
use crate::storage::PhotoStore;

const JPEG_QUALITY: u8 = 90;

/// A portrait resized to the form box and ready for inline embedding.
#[derive(Debug, Clone)]
pub struct EmbeddedPhoto {
    pub data_uri: String,
}

/// Loads, resizes, and inlines the stored photo. The image is stretched to
/// the exact box the form layout reserves (no aspect preservation — the
/// uploads are already 3x4 portraits).
pub fn embed_photo(
    photos: &PhotoStore,
    photo_path: Option<&str>,
    target: PhotoBox,
) -> Option<EmbeddedPhoto> {
    let path = photo_path?;

    let bytes = match photos.read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Photo {path} unreadable, rendering without it: {e}");
            return None;
        }
    };

    let decoded = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            warn!("Photo {path} undecodable, rendering without it: {e}");
            return None;
        }
    };

    let resized = decoded.resize_exact(target.width, target.height, FilterType::Lanczos3);

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    if let Err(e) = resized.to_rgb8().write_with_encoder(encoder) {
        warn!("Photo {path} re-encode failed, rendering without it: {e}");
        return None;
    }

    Some(EmbeddedPhoto {
        data_uri: format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const BOX: PhotoBox = PhotoBox {
        width: 100,
        height: 133,
    };

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(30, 40, image::Rgb([120, 80, 40]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn jpeg_bytes() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(30, 40, image::Rgb([10, 200, 90]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
            .unwrap();
        bytes
    }

    #[test]
    fn test_embed_png_produces_jpeg_data_uri_at_box_size() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());
        let stored = store.store(&png_bytes(), "png").unwrap();

        let embedded = embed_photo(&store, Some(&stored), BOX).unwrap();
        let b64 = embedded
            .data_uri
            .strip_prefix("data:image/jpeg;base64,")
            .expect("data URI must carry the JPEG prefix");

        let jpeg = STANDARD.decode(b64).unwrap();
        let img = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 133);
    }

    #[test]
    fn test_embed_accepts_jpeg_input() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());
        let stored = store.store(&jpeg_bytes(), "jpg").unwrap();

        assert!(embed_photo(&store, Some(&stored), BOX).is_some());
    }

    #[test]
    fn test_no_photo_path_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());
        assert!(embed_photo(&store, None, BOX).is_none());
    }

    #[test]
    fn test_missing_file_is_silently_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());
        // File was deleted externally after the path was persisted
        assert!(embed_photo(&store, Some("gone.jpg"), BOX).is_none());
    }

    #[test]
    fn test_undecodable_bytes_are_silently_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());
        let stored = store.store(b"this is not an image", "jpg").unwrap();

        assert!(embed_photo(&store, Some(&stored), BOX).is_none());
    }

    #[test]
    fn test_smaller_variant_box() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path());
        let stored = store.store(&png_bytes(), "png").unwrap();

        let small = PhotoBox {
            width: 85,
            height: 113,
        };
        let embedded = embed_photo(&store, Some(&stored), small).unwrap();
        let b64 = embedded
            .data_uri
            .strip_prefix("data:image/jpeg;base64,")
            .unwrap();
        let img = image::load_from_memory(&STANDARD.decode(b64).unwrap()).unwrap();
        assert_eq!((img.width(), img.height()), (85, 113));
    }
}
