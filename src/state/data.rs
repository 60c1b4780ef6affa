/// Shared data structures for the selection
///
/// These structs represent the data model that flows between
/// the host application and the upload widget.

use std::path::{Path, PathBuf};

/// MIME type used when the extension is unknown or missing
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Represents a single file chosen by the user
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileHandle {
    /// Filename only (e.g., "report.pdf")
    pub name: String,
    /// MIME-like type string (e.g., "application/pdf")
    pub mime: String,
    /// Location on disk, if the file came from the chooser or a drop
    pub path: Option<PathBuf>,
}

impl FileHandle {
    /// Create a handle that is not backed by a file on disk
    pub fn new(name: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            path: None,
        }
    }

    /// Build a handle from a path picked in the chooser or dropped on the window.
    /// The type is guessed from the extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let mime = mime_from_path(&path).to_string();

        Self {
            name,
            mime,
            path: Some(path),
        }
    }

    /// Two handles refer to the same file when name and type match.
    /// Content and location are not compared.
    pub fn same_file(&self, other: &FileHandle) -> bool {
        self.name == other.name && self.mime == other.mime
    }
}

/// Guess a MIME type from a file extension
pub fn mime_from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("svg") => "image/svg+xml",
        Some("avif") => "image/avif",
        Some("pdf") => "application/pdf",
        Some("mp4") | Some("m4v") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("mkv") => "video/x-matroska",
        Some("webm") => "video/webm",
        Some("avi") => "video/x-msvideo",
        Some("txt") | Some("log") => "text/plain",
        Some("md") => "text/markdown",
        Some("csv") => "text/csv",
        Some("html") | Some("htm") => "text/html",
        Some("json") => "application/json",
        Some("zip") => "application/zip",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => FALLBACK_MIME,
    }
}
