/// Annotated correlation heatmap
use iced::widget::canvas::{self, Path};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme};

use super::plot;
use super::theme;
use crate::charts::CorrelationMatrix;
use crate::Message;

/// Space reserved for row labels on the left and column labels below
const LABEL_LEFT: f32 = 96.0;
const LABEL_BOTTOM: f32 = 70.0;

#[derive(Debug, Clone)]
pub struct CorrelationHeatmap {
    pub matrix: CorrelationMatrix,
}

/// Yellow → green → blue ramp, `t` in [0, 1]
fn ramp(t: f32) -> Color {
    let stops = [
        (1.0, 1.0, 0.851),
        (0.255, 0.714, 0.769),
        (0.031, 0.114, 0.345),
    ];
    let t = t.clamp(0.0, 1.0) * 2.0;
    let (lo, hi, f) = if t <= 1.0 {
        (stops[0], stops[1], t)
    } else {
        (stops[1], stops[2], t - 1.0)
    };
    Color::from_rgb(
        lo.0 + (hi.0 - lo.0) * f,
        lo.1 + (hi.1 - lo.1) * f,
        lo.2 + (hi.2 - lo.2) * f,
    )
}

impl canvas::Program<Message> for CorrelationHeatmap {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        plot::draw_title(&mut frame, bounds.width, "Correlation Between Features");

        let n = self.matrix.labels.len();
        let grid_width = (bounds.width - LABEL_LEFT - 8.0).max(1.0);
        let grid_height = (bounds.height - plot::MARGIN_TOP - LABEL_BOTTOM).max(1.0);
        let cell = Size::new(grid_width / n as f32, grid_height / n as f32);

        // Color scale spans the defined values, like a seaborn heatmap
        let defined: Vec<f64> = self.matrix.values.iter().flatten().flatten().copied().collect();
        let min = defined.iter().copied().fold(f64::INFINITY, f64::min);
        let max = defined.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let span = if max > min { max - min } else { 1.0 };

        for row in 0..n {
            for col in 0..n {
                let top_left = Point::new(
                    LABEL_LEFT + col as f32 * cell.width,
                    plot::MARGIN_TOP + row as f32 * cell.height,
                );
                let center = Point::new(top_left.x + cell.width / 2.0, top_left.y + cell.height / 2.0);

                match self.matrix.get(row, col) {
                    Some(value) => {
                        let t = ((value - min) / span) as f32;
                        frame.fill(&Path::rectangle(top_left, cell), ramp(t));
                        let ink = if t > 0.55 { Color::WHITE } else { theme::TEXT };
                        frame.fill_text(plot::text(format!("{:.2}", value), center, 10.0, ink));
                    }
                    None => {
                        frame.fill(&Path::rectangle(top_left, cell), theme::INACTIVE);
                        frame.fill_text(plot::text("–", center, 10.0, theme::AXIS));
                    }
                }
            }
        }

        for (idx, label) in self.matrix.labels.iter().enumerate() {
            let y = plot::MARGIN_TOP + (idx as f32 + 0.5) * cell.height;
            frame.fill_text(canvas::Text {
                horizontal_alignment: iced::alignment::Horizontal::Right,
                ..plot::text(*label, Point::new(LABEL_LEFT - 4.0, y), 9.0, theme::TEXT)
            });

            let x = LABEL_LEFT + (idx as f32 + 0.5) * cell.width;
            let bottom = plot::MARGIN_TOP + grid_height + 4.0;
            frame.with_save(|frame| {
                frame.translate(iced::Vector::new(x, bottom));
                frame.rotate(-std::f32::consts::FRAC_PI_2);
                frame.fill_text(canvas::Text {
                    horizontal_alignment: iced::alignment::Horizontal::Right,
                    ..plot::text(*label, Point::ORIGIN, 9.0, theme::TEXT)
                });
            });
        }

        frame.fill_text(canvas::Text {
            horizontal_alignment: iced::alignment::Horizontal::Right,
            ..plot::text(
                format!("n = {}", self.matrix.sample_count),
                Point::new(bounds.width - 8.0, bounds.height - 10.0),
                9.0,
                theme::AXIS,
            )
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ramp(0.0), Color::from_rgb(1.0, 1.0, 0.851));
        let dark = ramp(1.0);
        assert!((dark.r - 0.031).abs() < 1e-4 && (dark.b - 0.345).abs() < 1e-4);
        assert_eq!(ramp(-3.0), ramp(0.0));
        assert_eq!(ramp(7.0), ramp(1.0));
    }
}
