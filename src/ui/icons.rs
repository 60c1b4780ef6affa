/// Document icons for files that have no image preview
/// Drawn on a canvas so they scale with the tile
use iced::alignment;
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Pixels, Point, Rectangle, Size};

use crate::preview::PreviewKind;

/// Flat sheet-of-paper icon with a folded corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentIcon {
    /// Color of the band across the sheet, `None` draws text lines instead
    pub band: Option<Color>,
    /// Label printed on the band
    pub label: &'static str,
}

impl DocumentIcon {
    pub fn pdf() -> Self {
        Self {
            band: Some(Color::from_rgb(0.945, 0.337, 0.259)),
            label: "PDF",
        }
    }

    pub fn video() -> Self {
        Self {
            band: Some(Color::from_rgb(0.541, 0.341, 0.851)),
            label: "VIDEO",
        }
    }

    pub fn text() -> Self {
        Self {
            band: None,
            label: "",
        }
    }

    /// Icon for a non-image preview kind
    pub fn for_kind(kind: PreviewKind) -> Self {
        match kind {
            PreviewKind::Pdf => Self::pdf(),
            PreviewKind::Video => Self::video(),
            PreviewKind::Image | PreviewKind::OtherDocument => Self::text(),
        }
    }
}

const SHEET: Color = Color { r: 0.886, g: 0.898, b: 0.906, a: 1.0 };
const FOLD: Color = Color { r: 0.690, g: 0.718, b: 0.741, a: 1.0 };
const LINES: Color = Color { r: 0.616, g: 0.675, b: 0.729, a: 1.0 };

impl<Message> canvas::Program<Message> for DocumentIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Sheet keeps a 3:4 aspect ratio centered in the bounds
        let height = (bounds.height * 0.9).min(bounds.width * 0.9 * 4.0 / 3.0);
        let width = height * 0.75;
        let left = (bounds.width - width) / 2.0;
        let top = (bounds.height - height) / 2.0;
        let fold = width * 0.3;

        let sheet = Path::new(|b| {
            b.move_to(Point::new(left, top));
            b.line_to(Point::new(left + width - fold, top));
            b.line_to(Point::new(left + width, top + fold));
            b.line_to(Point::new(left + width, top + height));
            b.line_to(Point::new(left, top + height));
            b.close();
        });
        frame.fill(&sheet, SHEET);

        let corner = Path::new(|b| {
            b.move_to(Point::new(left + width - fold, top));
            b.line_to(Point::new(left + width - fold, top + fold));
            b.line_to(Point::new(left + width, top + fold));
            b.close();
        });
        frame.fill(&corner, FOLD);

        match self.band {
            Some(color) => {
                // Band sticks out past the left edge of the sheet
                let band_height = height * 0.25;
                let band_top = top + height * 0.55;
                let band_left = left - width * 0.12;
                let band_width = width * 0.9;
                frame.fill_rectangle(
                    Point::new(band_left, band_top),
                    Size::new(band_width, band_height),
                    color,
                );
                frame.fill_text(canvas::Text {
                    content: self.label.to_string(),
                    position: Point::new(band_left + band_width / 2.0, band_top + band_height / 2.0),
                    color: Color::WHITE,
                    size: Pixels(band_height * 0.6),
                    horizontal_alignment: alignment::Horizontal::Center,
                    vertical_alignment: alignment::Vertical::Center,
                    ..canvas::Text::default()
                });
            }
            None => {
                let line_width = (height * 0.035).max(1.0);
                let mut builder = canvas::path::Builder::new();
                for row in 0..6 {
                    let y = top + height * (0.4 + row as f32 * 0.09);
                    let right = if row == 0 { left + width * 0.55 } else { left + width * 0.8 };
                    builder.move_to(Point::new(left + width * 0.2, y));
                    builder.line_to(Point::new(right, y));
                }
                frame.stroke(
                    &builder.build(),
                    Stroke::default().with_color(LINES).with_width(line_width),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
