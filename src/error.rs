/// Error types for the file-upload widget
///
/// None of these ever reach the widget's caller. Preview generation falls back
/// to a path-backed image and config loading falls back to defaults; the errors
/// exist so those fallbacks can be logged with a reason.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The image crate could not decode a file selected as an image
    #[error("failed to decode thumbnail for {path}: {source}")]
    Thumbnail {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An image-kind file has no path on disk to decode from
    #[error("no path available to preview {0}")]
    NoPath(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
