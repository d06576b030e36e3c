/// Drawing helpers shared by the chart canvases
use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Pixels, Point, Size};

use super::theme;

/// Margins of the plotting area inside a chart canvas
pub const MARGIN_LEFT: f32 = 44.0;
pub const MARGIN_TOP: f32 = 32.0;
pub const MARGIN_RIGHT: f32 = 12.0;
pub const MARGIN_BOTTOM: f32 = 28.0;

/// Rectangle the data is drawn in
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    pub fn new(bounds: Size, bottom_margin: f32) -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (bounds.height - MARGIN_TOP - bottom_margin).max(1.0),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Canvas point of normalized coordinates (0,0 bottom-left, 1,1 top-right)
    pub fn point(&self, nx: f64, ny: f64) -> Point {
        Point::new(
            self.left + nx as f32 * self.width,
            self.bottom() - ny as f32 * self.height,
        )
    }

    pub fn draw_axes(&self, frame: &mut Frame) {
        let axes = Path::new(|b| {
            b.move_to(Point::new(self.left, self.top));
            b.line_to(Point::new(self.left, self.bottom()));
            b.line_to(Point::new(self.left + self.width, self.bottom()));
        });
        frame.stroke(&axes, Stroke::default().with_color(theme::AXIS).with_width(1.0));
    }
}

pub fn text(content: impl Into<String>, position: Point, size: f32, color: Color) -> canvas::Text {
    canvas::Text {
        content: content.into(),
        position,
        color,
        size: Pixels(size),
        horizontal_alignment: Horizontal::Center,
        vertical_alignment: Vertical::Center,
        ..canvas::Text::default()
    }
}

pub fn draw_title(frame: &mut Frame, width: f32, title: &str) {
    frame.fill_text(text(title, Point::new(width / 2.0, 14.0), 14.0, theme::HEADING));
}

/// Small legend in the top-right corner of the plot area
pub fn draw_legend(frame: &mut Frame, area: &PlotArea, entries: &[(&str, Color)]) {
    let right = area.left + area.width - 8.0;
    for (idx, (label, color)) in entries.iter().enumerate() {
        let y = area.top + 10.0 + idx as f32 * 16.0;
        frame.fill(&Path::circle(Point::new(right - 60.0, y), 4.0), *color);
        frame.fill_text(canvas::Text {
            horizontal_alignment: Horizontal::Left,
            ..text(*label, Point::new(right - 50.0, y), 11.0, theme::TEXT)
        });
    }
}

/// Y-axis tick labels from 0 to `max` in `steps` intervals
pub fn draw_y_ticks(frame: &mut Frame, area: &PlotArea, max: f64, steps: usize) {
    for step in 0..=steps {
        let fraction = step as f64 / steps as f64;
        let position = area.point(0.0, fraction);
        frame.fill_text(canvas::Text {
            horizontal_alignment: Horizontal::Right,
            ..text(
                format!("{:.0}", max * fraction),
                Point::new(position.x - 4.0, position.y),
                9.0,
                theme::AXIS,
            )
        });
    }
}
