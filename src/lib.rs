/// A controlled file-upload widget for iced
///
/// The host application owns the list of selected files. The widget offers a
/// chooser button or a drop zone, filters out files that are already selected,
/// shows a preview grid, and lets the user replace or delete single files.
/// Every change comes back to the host as `Action::SetFiles`.

pub mod error;
pub mod preview;
pub mod state;
pub mod ui;

pub use error::{Error, Result};
pub use preview::{PreviewDescriptor, PreviewKind, RenderableSource, SourceRegistry};
pub use state::config::UploadConfig;
pub use state::data::FileHandle;
pub use state::selection::SelectionStore;
pub use ui::icons::DocumentIcon;
pub use ui::upload::{Action, FileUpload, Message, Presentation};
