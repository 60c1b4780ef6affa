use clap::Parser;
use file_upload::{Action, FileUpload, SelectionStore, UploadConfig};
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Demo host for the file-upload widget
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show an "Upload Files" button instead of the drop zone
    #[arg(long)]
    no_drag_and_drop: bool,

    /// Accept files already in the selection again
    #[arg(long)]
    keep_duplicates: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Host application state. It owns the selection; the widget only reads it.
struct Uploader {
    files: SelectionStore,
    upload: FileUpload,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Anything coming from the upload widget
    Upload(file_upload::Message),
    /// User clicked "Clear"
    Clear,
}

impl Uploader {
    fn new(config: UploadConfig) -> (Self, Task<Message>) {
        let upload = FileUpload::new(config);
        info!(
            "🎨 File upload ready ({:?}, duplicates {})",
            upload.presentation(),
            if config.remove_redundants { "filtered" } else { "allowed" }
        );

        (
            Uploader {
                files: SelectionStore::new(),
                upload,
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Upload(message) => match self.upload.update(message, self.files.files()) {
                Action::None => Task::none(),
                Action::Run(task) => task.map(Message::Upload),
                Action::SetFiles(files) => {
                    self.files.set(files);
                    self.log_selection();
                    Task::none()
                }
            },
            Message::Clear => {
                self.files.clear();
                // Host-side edit; the widget has not seen this list yet
                self.upload.observe(self.files.files());
                self.log_selection();
                Task::none()
            }
        }
    }

    fn log_selection(&self) {
        debug!(
            "Selection revision {}: {} files, {} previews",
            self.files.revision(),
            self.files.len(),
            self.upload.previews().len()
        );
    }

    fn view(&self) -> Element<Message> {
        let status = match self.files.len() {
            0 => "No files selected".to_string(),
            1 => "1 file selected".to_string(),
            n => format!("{} files selected", n),
        };

        let footer = row![
            text(status).size(14).width(Length::Fill),
            button("Clear")
                .on_press_maybe((!self.files.is_empty()).then_some(Message::Clear))
                .padding([6, 12]),
        ]
        .align_y(Alignment::Center);

        let content: Column<Message> = column![
            text("File Upload").size(32),
            self.upload.view(self.files.files()).map(Message::Upload),
            footer,
        ]
        .spacing(20)
        .padding(40)
        .max_width(900);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.upload.subscription().map(Message::Upload)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn tracing_init(args: &Args) {
    let level = match args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Settings file first, then command line overrides
fn load_config(args: &Args) -> UploadConfig {
    let path = args.config.clone().or_else(UploadConfig::default_path);

    let mut config = match path {
        Some(path) => UploadConfig::load(&path).unwrap_or_else(|err| {
            warn!("⚠️  Ignoring settings at {}: {}", path.display(), err);
            UploadConfig::default()
        }),
        None => UploadConfig::default(),
    };

    if args.no_drag_and_drop {
        config.disabled_drag_and_drop = true;
    }
    if args.keep_duplicates {
        config.remove_redundants = false;
    }

    config
}

fn main() -> iced::Result {
    let args = Args::parse();
    tracing_init(&args);

    let config = load_config(&args);

    iced::application("File Upload", Uploader::update, Uploader::view)
        .subscription(Uploader::subscription)
        .theme(Uploader::theme)
        .centered()
        .run_with(move || Uploader::new(config))
}
