/// User interface module
///
/// - The upload widget itself: trigger, drop zone, preview grid (upload.rs)
/// - Canvas-drawn document icons for non-image files (icons.rs)

pub mod icons;
pub mod upload;
