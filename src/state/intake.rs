/// Intake adapter
///
/// Turns chooser results and dropped paths into one ordered batch of
/// [`FileHandle`]s, then appends the (optionally filtered) batch to the
/// current selection.

use std::path::PathBuf;

use super::data::FileHandle;
use super::filter::filter_batch;

/// Files picked in the multi-select chooser. A cancelled dialog yields `None`.
pub fn from_chooser(picked: Option<Vec<PathBuf>>) -> Vec<FileHandle> {
    picked
        .unwrap_or_default()
        .into_iter()
        .map(FileHandle::from_path)
        .collect()
}

/// Files dropped on the window, in the order the platform reported them
pub fn from_drop(dropped: Vec<PathBuf>) -> Vec<FileHandle> {
    dropped.into_iter().map(FileHandle::from_path).collect()
}

/// Append a batch after the existing selection. Existing files are never reordered.
pub fn merge(
    existing: Option<&[FileHandle]>,
    batch: Vec<FileHandle>,
    remove_redundants: bool,
) -> Vec<FileHandle> {
    let added = filter_batch(existing, batch, remove_redundants);

    let mut merged = existing.map(<[FileHandle]>::to_vec).unwrap_or_default();
    merged.extend(added);
    merged
}

/// Collects paths from consecutive `FileDropped` events.
///
/// winit reports a multi-file drop as one event per path, all delivered before
/// the next frame. The widget drains the buffer on that frame so the whole drop
/// is filtered as a single batch.
///
/// Known platform limitation: a drop whose events straddle a frame boundary is
/// split into two batches, and same-named files across the split are then
/// filtered against each other.
#[derive(Debug, Default)]
pub struct DropBuffer {
    pending: Vec<PathBuf>,
}

impl DropBuffer {
    pub fn push(&mut self, path: PathBuf) {
        self.pending.push(path);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take everything dropped since the last flush
    pub fn flush(&mut self) -> Vec<FileHandle> {
        from_drop(std::mem::take(&mut self.pending))
    }
}
