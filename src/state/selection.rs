/// Per-item mutators and the host-side selection store
///
/// The mutators read a snapshot of the selection and return the complete list
/// the host should store. They never touch the host's list directly.

use super::data::FileHandle;

/// Swap the file at `index` for `replacement`.
/// A missing replacement (chooser cancelled) or an out-of-range index leaves
/// the list as it was.
pub fn replace_at(
    existing: Option<&[FileHandle]>,
    index: usize,
    replacement: Option<FileHandle>,
) -> Vec<FileHandle> {
    let mut files = existing.map(<[FileHandle]>::to_vec).unwrap_or_default();

    if let (Some(slot), Some(file)) = (files.get_mut(index), replacement) {
        *slot = file;
    }

    files
}

/// Remove the file at `index`; later files shift down by one.
pub fn delete_at(existing: Option<&[FileHandle]>, index: usize) -> Vec<FileHandle> {
    let mut files = existing.map(<[FileHandle]>::to_vec).unwrap_or_default();

    if index < files.len() {
        files.remove(index);
    }

    files
}

/// Canonical selection owned by a host application.
///
/// Every write bumps the revision so the host can tell the widget's preview
/// grid when something changed.
#[derive(Debug, Default)]
pub struct SelectionStore {
    files: Option<Vec<FileHandle>>,
    revision: u64,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection, `None` until the first write
    pub fn files(&self) -> Option<&[FileHandle]> {
        self.files.as_deref()
    }

    /// The setter handed to the widget
    pub fn set(&mut self, files: Vec<FileHandle>) {
        self.files = Some(files);
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.files = None;
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.files.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<FileHandle> {
        names.iter().map(|name| FileHandle::new(*name, "text/plain")).collect()
    }

    #[test]
    fn test_delete_shifts_later_entries() {
        let before = files(&["a", "b", "c", "d"]);

        for i in 0..before.len() {
            let after = delete_at(Some(before.as_slice()), i);
            assert_eq!(after.len(), before.len() - 1);
            assert_eq!(&after[..i], &before[..i]);
            assert_eq!(&after[i..], &before[i + 1..]);
        }
    }

    #[test]
    fn test_delete_absent_or_out_of_range() {
        assert!(delete_at(None, 0).is_empty());

        let before = files(&["a", "b"]);
        assert_eq!(delete_at(Some(before.as_slice()), 5), before);
    }

    #[test]
    fn test_replace_preserves_length() {
        let before = files(&["a", "b", "c"]);
        let swapped = FileHandle::new("z.pdf", "application/pdf");

        let after = replace_at(Some(before.as_slice()), 1, Some(swapped.clone()));
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], swapped);
        assert_eq!(after[2], before[2]);
    }

    #[test]
    fn test_replace_without_file_is_identity() {
        let before = files(&["a", "b", "c"]);
        assert_eq!(replace_at(Some(before.as_slice()), 2, None), before);
        assert_eq!(replace_at(Some(before.as_slice()), 9, Some(FileHandle::new("x", "y"))), before);
        assert!(replace_at(None, 0, Some(FileHandle::new("x", "y"))).is_empty());
    }

    #[test]
    fn test_store_revision_tracks_writes() {
        let mut store = SelectionStore::new();
        assert!(store.files().is_none());
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);

        store.set(files(&["a", "b"]));
        assert_eq!(store.len(), 2);
        assert_eq!(store.revision(), 1);

        store.clear();
        assert!(store.files().is_none());
        assert_eq!(store.revision(), 2);
    }
}
