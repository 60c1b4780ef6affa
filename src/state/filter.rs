/// Duplicate filtering for incoming batches

use super::data::FileHandle;

/// Drop every candidate whose name and type already appear in `existing`.
/// Survivors keep their batch order; duplicates inside the batch are kept.
pub fn remove_redundant(existing: Option<&[FileHandle]>, batch: Vec<FileHandle>) -> Vec<FileHandle> {
    let existing = existing.unwrap_or_default();

    batch
        .into_iter()
        .filter(|candidate| !existing.iter().any(|file| file.same_file(candidate)))
        .collect()
}

/// Apply [`remove_redundant`] only when the widget is configured to
pub fn filter_batch(
    existing: Option<&[FileHandle]>,
    batch: Vec<FileHandle>,
    remove_redundants: bool,
) -> Vec<FileHandle> {
    if remove_redundants {
        remove_redundant(existing, batch)
    } else {
        batch
    }
}
