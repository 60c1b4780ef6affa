use iced::widget::image::Handle;
use image::{imageops::FilterType, DynamicImage, RgbaImage};
use std::path::Path;

use crate::error::{Error, Result};

/// Decode an image file and shrink it so neither edge exceeds `max_edge`.
/// Images already small enough are kept at their size.
pub fn decode(path: &Path, max_edge: u32) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| Error::Thumbnail {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(shrink(img, max_edge).to_rgba8())
}

fn shrink(img: DynamicImage, max_edge: u32) -> DynamicImage {
    if img.width() <= max_edge && img.height() <= max_edge {
        return img;
    }
    img.resize(max_edge, max_edge, FilterType::Triangle)
}

/// Decode straight into an iced handle ready for the preview grid
pub fn render(path: &Path, max_edge: u32) -> Result<Handle> {
    let thumbnail = decode(path, max_edge)?;
    let (width, height) = thumbnail.dimensions();

    Ok(Handle::from_rgba(width, height, thumbnail.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_png(tag: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "file-upload-thumb-{}-{}.png",
            tag,
            std::process::id()
        ));
        RgbaImage::new(width, height).save(&path).unwrap();
        path
    }

    #[test]
    fn test_large_image_is_shrunk() {
        let path = temp_png("large", 400, 200);
        let thumb = decode(&path, 100);
        std::fs::remove_file(&path).ok();

        let thumb = thumb.unwrap();
        assert_eq!(thumb.width(), 100);
        assert_eq!(thumb.height(), 50);
    }

    #[test]
    fn test_small_image_is_kept() {
        let path = temp_png("small", 20, 10);
        let thumb = decode(&path, 100);
        std::fs::remove_file(&path).ok();

        assert_eq!(thumb.unwrap().dimensions(), (20, 10));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = decode(Path::new("/nonexistent/photo.png"), 100);
        assert!(matches!(result, Err(Error::Thumbnail { .. })));
    }
}
