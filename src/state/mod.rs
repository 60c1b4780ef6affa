/// State management module
///
/// This module handles everything about the file selection itself:
/// - Shared data structures (data.rs)
/// - Duplicate filtering of incoming batches (filter.rs)
/// - Normalizing chooser and drop events into batches (intake.rs)
/// - Replace/delete mutators and the host-side store (selection.rs)
/// - Widget settings (config.rs)

pub mod config;
pub mod data;
pub mod filter;
pub mod intake;
pub mod selection;
