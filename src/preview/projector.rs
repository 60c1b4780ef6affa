/// Preview projection
///
/// Maps the selection to one `PreviewDescriptor` per file. The list is rebuilt
/// from scratch whenever the selection changes; dropping the old list releases
/// every image source it held.

use iced::widget::image::Handle;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tracing::{debug, warn};

use super::source::{RenderableSource, SourceRegistry};
use super::thumbnail;
use crate::error::Error;
use crate::state::config::DEFAULT_THUMBNAIL_SIZE;
use crate::state::data::FileHandle;

/// How a file is previewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Pdf,
    Video,
    OtherDocument,
}

impl PreviewKind {
    /// Substring match with fixed precedence: image, then pdf, then video.
    ///
    /// This is not a MIME parse. `application/pdf-image` counts as an image
    /// because the image check runs first; existing hosts rely on that order.
    pub fn classify(mime: &str) -> Self {
        if mime.contains("image") {
            PreviewKind::Image
        } else if mime.contains("pdf") {
            PreviewKind::Pdf
        } else if mime.contains("video") {
            PreviewKind::Video
        } else {
            PreviewKind::OtherDocument
        }
    }
}

/// Preview metadata for one selected file
#[derive(Debug)]
pub struct PreviewDescriptor {
    pub kind: PreviewKind,
    pub name: String,
    /// Present only for `PreviewKind::Image`
    pub source: Option<RenderableSource>,
}

/// Allocates renderable sources for image files
#[derive(Debug, Clone)]
pub struct SourceLoader {
    registry: SourceRegistry,
    thumbnail_size: u32,
}

impl SourceLoader {
    pub fn new(registry: SourceRegistry, thumbnail_size: u32) -> Self {
        Self {
            registry,
            thumbnail_size,
        }
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Decode a thumbnail, falling back to letting the renderer load the file
    /// itself. Files without a path get a blank placeholder.
    fn load(&self, file: &FileHandle) -> RenderableSource {
        let decoded = match &file.path {
            Some(path) => thumbnail::render(path, self.thumbnail_size),
            None => Err(Error::NoPath(file.name.clone())),
        };

        let handle = decoded.unwrap_or_else(|err| {
            warn!("⚠️  Thumbnail fallback for {}: {}", file.name, err);
            match &file.path {
                Some(path) => Handle::from_path(path),
                None => Handle::from_rgba(1, 1, vec![0u8; 4]),
            }
        });

        RenderableSource::new(handle, &self.registry)
    }
}

impl Default for SourceLoader {
    fn default() -> Self {
        Self::new(SourceRegistry::new(), DEFAULT_THUMBNAIL_SIZE)
    }
}

/// Build the descriptor list for a selection. Index `i` describes file `i`.
pub fn project(files: Option<&[FileHandle]>, loader: &SourceLoader) -> Vec<PreviewDescriptor> {
    files
        .unwrap_or_default()
        .iter()
        .map(|file| {
            let kind = PreviewKind::classify(&file.mime);
            let source = (kind == PreviewKind::Image).then(|| loader.load(file));

            PreviewDescriptor {
                kind,
                name: file.name.clone(),
                source,
            }
        })
        .collect()
}

/// Derived preview cache, refreshed whenever the observed selection changes
#[derive(Debug)]
pub struct Previews {
    loader: SourceLoader,
    /// Hash of the last observed selection. A 64-bit hash can collide, so
    /// `observe` also requires the lengths to agree before skipping a rebuild.
    fingerprint: Option<u64>,
    descriptors: Vec<PreviewDescriptor>,
}

impl Previews {
    pub fn new(loader: SourceLoader) -> Self {
        Self {
            loader,
            // No descriptors already describe an absent selection
            fingerprint: Some(fingerprint(None)),
            descriptors: Vec::new(),
        }
    }

    /// Recompute if the selection differs from the last one observed.
    /// Returns true when the list was rebuilt.
    pub fn observe(&mut self, files: Option<&[FileHandle]>) -> bool {
        let fingerprint = fingerprint(files);
        if self.is_current_with(fingerprint, files) {
            return false;
        }

        // Release the old sources before decoding new ones
        self.descriptors.clear();
        self.descriptors = project(files, &self.loader);
        self.fingerprint = Some(fingerprint);

        debug!(
            "Recomputed {} previews, {} image sources live",
            self.descriptors.len(),
            self.loader.registry().live()
        );
        true
    }

    /// True when the descriptors already describe `files`
    pub fn is_current(&self, files: Option<&[FileHandle]>) -> bool {
        self.is_current_with(fingerprint(files), files)
    }

    fn is_current_with(&self, fingerprint: u64, files: Option<&[FileHandle]>) -> bool {
        self.fingerprint == Some(fingerprint)
            && self.descriptors.len() == files.unwrap_or_default().len()
    }

    pub fn descriptors(&self) -> &[PreviewDescriptor] {
        &self.descriptors
    }

    pub fn registry(&self) -> &SourceRegistry {
        self.loader.registry()
    }
}

fn fingerprint(files: Option<&[FileHandle]>) -> u64 {
    let mut hasher = DefaultHasher::new();
    files.unwrap_or_default().hash(&mut hasher);
    hasher.finish()
}
