/// Two-segment Low/High risk gauge
use iced::widget::canvas::{self, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme};

use super::plot;
use super::theme;
use crate::charts::RiskGauge;
use crate::Message;

#[derive(Debug, Clone)]
pub struct RiskGaugeChart {
    pub gauge: RiskGauge,
}

impl canvas::Program<Message> for RiskGaugeChart {
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
        plot::draw_title(
            &mut frame,
            bounds.width,
            &format!("Risk Level: {}", self.gauge.level),
        );

        let track_left = 24.0;
        let track_width = (bounds.width - 48.0).max(2.0);
        let track_top = bounds.height / 2.0 - 14.0;
        let segment = Size::new(track_width / 2.0, 28.0);
        let lit = theme::rgb8(self.gauge.color_rgb());

        for (idx, label) in ["Low", "High"].iter().enumerate() {
            let top_left = Point::new(track_left + idx as f32 * segment.width, track_top);
            let color = if idx == self.gauge.segment() { lit } else { theme::INACTIVE };
            frame.fill(&Path::rectangle(top_left, segment), color);

            let ink = if idx == self.gauge.segment() { Color::WHITE } else { theme::AXIS };
            frame.fill_text(plot::text(
                *label,
                Point::new(top_left.x + segment.width / 2.0, track_top + segment.height / 2.0),
                12.0,
                ink,
            ));
        }

        let outline = Path::rectangle(
            Point::new(track_left, track_top),
            Size::new(track_width, segment.height),
        );
        frame.stroke(&outline, Stroke::default().with_color(theme::AXIS).with_width(1.0));

        vec![frame.into_geometry()]
    }
}
