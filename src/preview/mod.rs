/// Preview generation module
///
/// This module handles:
/// - Classifying selected files into preview kinds
/// - Rebuilding the preview list whenever the selection changes
/// - Decoding image thumbnails
/// - Tracking and releasing renderable image sources

pub mod projector;
pub mod source;
pub mod thumbnail;

pub use projector::{project, PreviewDescriptor, PreviewKind, Previews, SourceLoader};
pub use source::{RenderableSource, SourceRegistry};
