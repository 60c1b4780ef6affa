/// The file-upload widget
///
/// A controlled component: the host owns the selection and passes it into
/// `update`, `view` and `observe`. Whenever intake or a tile action changes the
/// selection, `update` returns `Action::SetFiles` with the full new list and
/// the host stores it. The preview grid follows every list the widget sees, so
/// only changes made by the host itself need an explicit `observe`.
use iced::alignment;
use iced::font::{self, Font};
use iced::widget::{
    button, canvas, column, container, horizontal_rule, image, mouse_area, row, stack, text,
    tooltip, Column,
};
use iced::{
    event, window, Alignment, Border, Color, ContentFit, Element, Event, Length, Pixels,
    Subscription, Task, Theme,
};
use iced_aw::Wrap;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::preview::{PreviewDescriptor, Previews, SourceLoader, SourceRegistry};
use crate::state::config::UploadConfig;
use crate::state::data::FileHandle;
use crate::state::intake::{self, DropBuffer};
use crate::state::selection;
use crate::ui::icons::DocumentIcon;

const TILE_WIDTH: f32 = 150.0;
const PREVIEW_HEIGHT: f32 = 100.0;
const CAPTION_CHARS: usize = 18;

/// Widget messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the drop zone or the upload button
    OpenChooser,
    /// Multi-select chooser closed; `None` if cancelled
    FilesChosen(Option<Vec<PathBuf>>),
    /// Files are being dragged over the window
    FileHovered,
    /// The drag left the window without dropping
    HoverLeft,
    /// One path of a drop (winit sends one event per file)
    FileDropped(PathBuf),
    /// First frame after a drop; the buffered paths form one batch
    DropSettled,
    /// Replace button on a tile
    OpenReplacement(usize),
    /// Single-select chooser closed for the tile at index
    ReplacementChosen(usize, Option<PathBuf>),
    /// Delete button on a tile
    Delete(usize),
}

/// What the host should do after an update
pub enum Action {
    None,
    /// Run a task and route its messages back into the widget
    Run(Task<Message>),
    /// Store this list as the new selection
    SetFiles(Vec<FileHandle>),
}

/// How the widget asks for files. Chosen once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    ButtonTrigger,
    DropZone,
}

pub struct FileUpload {
    config: UploadConfig,
    presentation: Presentation,
    previews: Previews,
    drops: DropBuffer,
    hovering: bool,
}

impl FileUpload {
    pub fn new(config: UploadConfig) -> Self {
        Self::with_registry(config, SourceRegistry::new())
    }

    /// Share a source registry with the host, e.g. to report live previews
    pub fn with_registry(config: UploadConfig, registry: SourceRegistry) -> Self {
        let presentation = if config.disabled_drag_and_drop {
            Presentation::ButtonTrigger
        } else {
            Presentation::DropZone
        };

        Self {
            config,
            presentation,
            previews: Previews::new(SourceLoader::new(registry, config.thumbnail_size)),
            drops: DropBuffer::default(),
            hovering: false,
        }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Current preview list, index-aligned with the last observed selection
    pub fn previews(&self) -> &[PreviewDescriptor] {
        self.previews.descriptors()
    }

    /// Let the preview grid catch up with the host's selection.
    /// Needed only after the host edits the selection on its own, e.g. a
    /// "Clear" button; unchanged selections cost one hash.
    pub fn observe(&mut self, files: Option<&[FileHandle]>) -> bool {
        self.previews.observe(files)
    }

    /// Handle a widget message against the selection as it is right now
    pub fn update(&mut self, message: Message, files: Option<&[FileHandle]>) -> Action {
        self.previews.observe(files);

        match message {
            Message::OpenChooser => Action::Run(Task::perform(pick_files(), Message::FilesChosen)),

            Message::FilesChosen(None) => {
                debug!("Chooser dismissed without a selection");
                Action::None
            }

            Message::FilesChosen(picked) => self.intake(files, intake::from_chooser(picked)),

            Message::FileHovered => {
                self.hovering = true;
                Action::None
            }

            Message::HoverLeft => {
                self.hovering = false;
                Action::None
            }

            Message::FileDropped(path) => {
                // Consumed here so the host never opens the dropped file itself
                self.hovering = false;
                self.drops.push(path);
                Action::None
            }

            Message::DropSettled => {
                if self.drops.is_empty() {
                    return Action::None;
                }
                let batch = self.drops.flush();
                self.intake(files, batch)
            }

            Message::OpenReplacement(index) => Action::Run(Task::perform(pick_file(), move |picked| {
                Message::ReplacementChosen(index, picked)
            })),

            Message::ReplacementChosen(index, picked) => {
                let replacement = picked.map(FileHandle::from_path);
                if let Some(file) = &replacement {
                    info!("🔁 Replacing file {} with {}", index, file.name);
                }
                self.set_files(selection::replace_at(files, index, replacement))
            }

            Message::Delete(index) => {
                debug!("Removing file {}", index);
                self.set_files(selection::delete_at(files, index))
            }
        }
    }

    fn intake(&mut self, files: Option<&[FileHandle]>, batch: Vec<FileHandle>) -> Action {
        let offered = batch.len();
        let before = files.map_or(0, <[FileHandle]>::len);
        let merged = intake::merge(files, batch, self.config.remove_redundants);
        let added = merged.len() - before;

        info!(
            "📁 Added {} files, skipped {} duplicates",
            added,
            offered - added
        );
        self.set_files(merged)
    }

    /// Hand a new list to the host, with the grid already rebuilt for it
    fn set_files(&mut self, files: Vec<FileHandle>) -> Action {
        self.previews.observe(Some(files.as_slice()));
        Action::SetFiles(files)
    }

    /// Window drag-and-drop events, only while the drop zone is shown
    pub fn subscription(&self) -> Subscription<Message> {
        if self.presentation != Presentation::DropZone {
            return Subscription::none();
        }

        let drops = event::listen_with(|event, _status, _id| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::HoverLeft),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        });

        if self.drops.is_empty() {
            drops
        } else {
            Subscription::batch([drops, window::frames().map(|_| Message::DropSettled)])
        }
    }

    /// Build the trigger, the divider and the preview grid
    pub fn view(&self, files: Option<&[FileHandle]>) -> Element<'_, Message> {
        debug_assert!(
            self.previews.is_current(files),
            "selection changed outside the widget without calling observe"
        );

        let trigger = match self.presentation {
            Presentation::ButtonTrigger => upload_button(),
            Presentation::DropZone => drop_zone(self.hovering),
        };

        let mut content: Column<Message> = column![trigger].spacing(16).padding(16);

        if !files.unwrap_or_default().is_empty() {
            content = content.push(horizontal_rule(1));
        }

        content.push(self.preview_grid()).into()
    }

    fn preview_grid(&self) -> Element<'_, Message> {
        let tiles: Vec<Element<'_, Message>> = self
            .previews
            .descriptors()
            .iter()
            .enumerate()
            .map(|(index, preview)| preview_tile(index, preview))
            .collect();

        if tiles.is_empty() {
            return Column::new().into();
        }

        Wrap::with_elements(tiles)
            .spacing(Pixels(8.0))
            .line_spacing(Pixels(8.0))
            .into()
    }
}

fn upload_button<'a>() -> Element<'a, Message> {
    button(
        row![text("📎").size(14), text("Upload Files")]
            .spacing(6)
            .align_y(Alignment::Center),
    )
    .on_press(Message::OpenChooser)
    .padding([8, 16])
    .into()
}

fn drop_zone<'a>(hovering: bool) -> Element<'a, Message> {
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };

    let caption = column![
        text("📂").size(32),
        row![text("Choose a file").font(bold), text("or drag it here")].spacing(5),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    let zone = container(caption)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(PREVIEW_HEIGHT))
        .style(move |theme: &Theme| drop_zone_style(theme, hovering));

    mouse_area(zone).on_press(Message::OpenChooser).into()
}

fn drop_zone_style(theme: &Theme, hovering: bool) -> container::Style {
    let palette = theme.extended_palette();
    let border_color = if hovering {
        palette.primary.strong.color
    } else {
        Color::from_rgb8(0xc3, 0xc3, 0xc3)
    };

    container::Style {
        background: hovering.then(|| palette.background.weak.color.into()),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}

fn preview_tile(index: usize, preview: &PreviewDescriptor) -> Element<'_, Message> {
    let visual: Element<'_, Message> = match &preview.source {
        Some(source) => image(source.handle().clone())
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        None => canvas(DocumentIcon::for_kind(preview.kind))
            .width(Length::Fill)
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .into(),
    };

    let caption_bar = container(
        row![
            text(caption(&preview.name)).size(12).width(Length::Fill),
            button(text("⟳").size(14))
                .on_press(Message::OpenReplacement(index))
                .style(button::text)
                .padding(2),
        ]
        .spacing(4)
        .align_y(Alignment::Center),
    )
    .padding([2, 6])
    .style(|_theme: &Theme| container::Style {
        background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.5).into()),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    });

    let captioned = tooltip(
        caption_bar,
        text(&preview.name).size(12),
        tooltip::Position::Top,
    )
    .style(container::rounded_box);

    let delete = container(
        button(text("✕").size(12))
            .on_press(Message::Delete(index))
            .style(button::danger)
            .padding([2, 6]),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right);

    container(stack![column![visual, captioned], delete])
        .width(Length::Fixed(TILE_WIDTH))
        .into()
}

/// Shorten long names for the tile caption; the tooltip shows the full name
fn caption(name: &str) -> String {
    if name.chars().count() <= CAPTION_CHARS {
        return name.to_string();
    }
    let head: String = name.chars().take(CAPTION_CHARS - 1).collect();
    format!("{head}…")
}

async fn pick_files() -> Option<Vec<PathBuf>> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose files")
        .pick_files()
        .await
        .map(|handles| handles.iter().map(|handle| handle.path().to_path_buf()).collect())
}

async fn pick_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose a replacement")
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::PreviewKind;

    fn png(name: &str) -> FileHandle {
        FileHandle::new(name, "image/png")
    }

    fn set_files(action: Action) -> Vec<FileHandle> {
        match action {
            Action::SetFiles(files) => files,
            Action::None => panic!("expected SetFiles, got None"),
            Action::Run(_) => panic!("expected SetFiles, got Run"),
        }
    }

    #[test]
    fn test_presentation_follows_config() {
        let zone = FileUpload::new(UploadConfig::default());
        assert_eq!(zone.presentation(), Presentation::DropZone);

        let button = FileUpload::new(UploadConfig {
            disabled_drag_and_drop: true,
            ..UploadConfig::default()
        });
        assert_eq!(button.presentation(), Presentation::ButtonTrigger);
    }

    #[test]
    fn test_open_chooser_runs_task() {
        let mut upload = FileUpload::new(UploadConfig::default());
        assert!(matches!(upload.update(Message::OpenChooser, None), Action::Run(_)));
        assert!(matches!(upload.update(Message::OpenReplacement(0), None), Action::Run(_)));
    }

    #[test]
    fn test_cancelled_chooser_is_noop() {
        let mut upload = FileUpload::new(UploadConfig::default());
        let files = vec![png("a.png")];
        assert!(matches!(
            upload.update(Message::FilesChosen(None), Some(files.as_slice())),
            Action::None
        ));
    }

    #[test]
    fn test_chosen_files_are_filtered_and_appended() {
        let mut upload = FileUpload::new(UploadConfig::default());
        let files = vec![png("a.png")];
        let picked = vec![PathBuf::from("/pics/a.png"), PathBuf::from("/pics/b.png")];

        let merged = set_files(upload.update(Message::FilesChosen(Some(picked)), Some(files.as_slice())));
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], files[0]);
        assert_eq!(merged[1].name, "b.png");
    }

    #[test]
    fn test_keep_duplicates_when_configured() {
        let mut upload = FileUpload::new(UploadConfig {
            remove_redundants: false,
            ..UploadConfig::default()
        });
        let files = vec![png("a.png")];
        let picked = vec![PathBuf::from("/pics/a.png")];

        let merged = set_files(upload.update(Message::FilesChosen(Some(picked)), Some(files.as_slice())));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_drop_is_one_batch() {
        let mut upload = FileUpload::new(UploadConfig::default());

        upload.update(Message::FileHovered, None);
        assert!(upload.hovering);

        upload.update(Message::FileDropped(PathBuf::from("/a/x.pdf")), None);
        upload.update(Message::FileDropped(PathBuf::from("/b/x.pdf")), None);
        assert!(!upload.hovering);

        // Same name and type twice in one drop: both kept
        let merged = set_files(upload.update(Message::DropSettled, None));
        assert_eq!(merged.len(), 2);

        assert!(matches!(upload.update(Message::DropSettled, None), Action::None));
    }

    #[test]
    fn test_tile_actions() {
        let mut upload = FileUpload::new(UploadConfig::default());
        let files = vec![png("a.png"), png("b.png"), png("c.png")];

        let after_delete = set_files(upload.update(Message::Delete(1), Some(files.as_slice())));
        assert_eq!(after_delete, vec![png("a.png"), png("c.png")]);

        let unchanged = set_files(upload.update(Message::ReplacementChosen(0, None), Some(files.as_slice())));
        assert_eq!(unchanged, files);

        let replaced = set_files(upload.update(
            Message::ReplacementChosen(2, Some(PathBuf::from("/docs/notes.txt"))),
            Some(files.as_slice()),
        ));
        assert_eq!(replaced.len(), 3);
        assert_eq!(replaced[2].name, "notes.txt");
        assert_eq!(replaced[2].mime, "text/plain");

        assert!(set_files(upload.update(Message::Delete(0), None)).is_empty());
    }

    #[test]
    fn test_observe_keeps_previews_aligned() {
        let registry = SourceRegistry::new();
        let mut upload = FileUpload::with_registry(UploadConfig::default(), registry.clone());
        let files = vec![png("a.png"), FileHandle::new("b.pdf", "application/pdf")];

        assert!(upload.observe(Some(files.as_slice())));
        assert_eq!(upload.previews().len(), 2);
        assert_eq!(registry.live(), 1);

        let remaining = set_files(upload.update(Message::Delete(0), Some(files.as_slice())));
        upload.observe(Some(remaining.as_slice()));
        assert_eq!(upload.previews().len(), 1);
        assert_eq!(registry.live(), 0);
    }

    #[test]
    fn test_grid_follows_updates_without_observe() {
        let registry = SourceRegistry::new();
        let mut upload = FileUpload::with_registry(UploadConfig::default(), registry.clone());
        let files = vec![png("a.png"), FileHandle::new("b.pdf", "application/pdf")];

        let after = set_files(upload.update(Message::Delete(0), Some(files.as_slice())));
        let _ = upload.view(Some(after.as_slice()));
        assert_eq!(upload.previews().len(), after.len());
        assert_eq!(upload.previews()[0].kind, PreviewKind::Pdf);
        assert_eq!(registry.live(), 0);

        let picked = vec![PathBuf::from("/pics/c.png")];
        let grown = set_files(upload.update(Message::FilesChosen(Some(picked)), Some(after.as_slice())));
        assert_eq!(upload.previews().len(), grown.len());
        assert_eq!(registry.live(), 1);
    }

    #[test]
    fn test_update_catches_up_with_host_changes() {
        let mut upload = FileUpload::new(UploadConfig::default());
        let files = vec![png("a.png"), png("b.png")];

        // Host stored a list the widget never saw, then a hover arrives
        upload.update(Message::FileHovered, Some(files.as_slice()));
        assert_eq!(upload.previews().len(), 2);
    }

    #[test]
    fn test_caption_truncates_long_names() {
        assert_eq!(caption("short.png"), "short.png");
        let long = caption("a-very-long-file-name-indeed.pdf");
        assert_eq!(long.chars().count(), CAPTION_CHARS);
        assert!(long.ends_with('…'));
    }
}
