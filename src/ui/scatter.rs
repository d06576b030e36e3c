/// Mine and forest locations on a lon/lat scatter
use iced::widget::canvas::{self, Path, Stroke};
use iced::{mouse, Rectangle, Renderer, Theme};

use super::plot::{self, PlotArea, MARGIN_BOTTOM};
use super::theme;
use crate::charts::{geo_bounds, GeoLink};
use crate::Message;

const MARKER_RADIUS: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct GeoScatter {
    pub links: Vec<GeoLink>,
}

impl canvas::Program<Message> for GeoScatter {
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
        plot::draw_title(&mut frame, bounds.width, "Mine and Forest Locations");

        let area = PlotArea::new(bounds.size(), MARGIN_BOTTOM);
        area.draw_axes(&mut frame);

        let Some(extent) = geo_bounds(&self.links) else {
            return vec![frame.into_geometry()];
        };

        // Connectors first so markers sit on top
        let connectors = Path::new(|b| {
            for link in &self.links {
                let (mx, my) = extent.normalize(link.mine);
                let (fx, fy) = extent.normalize(link.forest);
                b.move_to(area.point(mx, my));
                b.line_to(area.point(fx, fy));
            }
        });
        frame.stroke(&connectors, Stroke::default().with_color(theme::CONNECTOR).with_width(1.0));

        for link in &self.links {
            let (mx, my) = extent.normalize(link.mine);
            frame.fill(&Path::circle(area.point(mx, my), MARKER_RADIUS), theme::MINE);
            let (fx, fy) = extent.normalize(link.forest);
            frame.fill(&Path::circle(area.point(fx, fy), MARKER_RADIUS), theme::FOREST);
        }

        // Axis extents
        let corner = |value: f64| format!("{:.1}", value);
        frame.fill_text(plot::text(
            corner(extent.min_x),
            iced::Point::new(area.left, area.bottom() + 10.0),
            9.0,
            theme::AXIS,
        ));
        frame.fill_text(plot::text(
            corner(extent.max_x),
            iced::Point::new(area.left + area.width, area.bottom() + 10.0),
            9.0,
            theme::AXIS,
        ));
        frame.fill_text(plot::text(
            corner(extent.min_y),
            iced::Point::new(area.left - 20.0, area.bottom()),
            9.0,
            theme::AXIS,
        ));
        frame.fill_text(plot::text(
            corner(extent.max_y),
            iced::Point::new(area.left - 20.0, area.top),
            9.0,
            theme::AXIS,
        ));

        plot::draw_legend(&mut frame, &area, &[("Mine", theme::MINE), ("Forest", theme::FOREST)]);

        vec![frame.into_geometry()]
    }
}
