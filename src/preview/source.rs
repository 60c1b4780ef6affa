/// Renderable image sources and their release tracking
///
/// A `RenderableSource` is the desktop counterpart of an object URL: a handle
/// the renderer can draw, tied to one preview tile. Dropping the descriptor
/// drops the source, and the shared registry counts how many are alive.

use iced::widget::image::Handle;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::trace;

/// Counts live renderable sources across preview recomputations
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    live: Arc<AtomicUsize>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sources allocated and not yet released
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    fn acquire(&self) -> SourceGuard {
        self.live.fetch_add(1, Ordering::Relaxed);
        SourceGuard {
            live: Arc::clone(&self.live),
        }
    }
}

/// Decrements the registry when the owning source goes away
#[derive(Debug)]
struct SourceGuard {
    live: Arc<AtomicUsize>,
}

impl Drop for SourceGuard {
    fn drop(&mut self) {
        let remaining = self.live.fetch_sub(1, Ordering::Relaxed) - 1;
        trace!("Released preview source, {} still live", remaining);
    }
}

/// Image handle owned by a single preview descriptor
#[derive(Debug)]
pub struct RenderableSource {
    handle: Handle,
    _guard: SourceGuard,
}

impl RenderableSource {
    pub(crate) fn new(handle: Handle, registry: &SourceRegistry) -> Self {
        Self {
            handle,
            _guard: registry.acquire(),
        }
    }

    /// Handle to pass to `iced::widget::image`
    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}
