/// NO₂ bar charts: the dataset-wide grouped chart and the per-zone pair
use iced::alignment::Horizontal;
use iced::widget::canvas::{self, Path};
use iced::{mouse, Point, Rectangle, Renderer, Size, Theme, Vector};

use super::plot::{self, PlotArea, MARGIN_BOTTOM};
use super::theme;
use crate::charts::{no2_axis_max, No2Bar};
use crate::Message;

/// Room for rotated zone names under the dataset-wide chart
const ROTATED_LABEL_MARGIN: f32 = 110.0;
const LABEL_SIZE: f32 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarLayout {
    /// One mine/forest pair per zone, zone names rotated underneath
    Grouped,
    /// A single zone: two bars labelled "Mine" and "Forest"
    Pair,
}

#[derive(Debug, Clone)]
pub struct No2Chart {
    pub title: String,
    pub bars: Vec<No2Bar>,
    pub layout: BarLayout,
}

impl No2Chart {
    pub fn grouped(bars: Vec<No2Bar>) -> Self {
        Self {
            title: "NO₂ Concentration".to_string(),
            bars,
            layout: BarLayout::Grouped,
        }
    }

    pub fn pair(bar: No2Bar) -> Self {
        Self {
            title: format!("NO₂ Levels: {}", bar.label),
            bars: vec![bar],
            layout: BarLayout::Pair,
        }
    }
}

impl canvas::Program<Message> for No2Chart {
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
        plot::draw_title(&mut frame, bounds.width, &self.title);

        let bottom_margin = match self.layout {
            BarLayout::Grouped => ROTATED_LABEL_MARGIN,
            BarLayout::Pair => MARGIN_BOTTOM,
        };
        let area = PlotArea::new(bounds.size(), bottom_margin);
        area.draw_axes(&mut frame);

        let max = no2_axis_max(&self.bars);
        if self.bars.is_empty() || max <= 0.0 {
            return vec![frame.into_geometry()];
        }
        plot::draw_y_ticks(&mut frame, &area, max, 4);

        let slot = area.width / self.bars.len() as f32;
        let bar_width = (slot * 0.8 / 2.0).max(1.0);
        let height_of = |value: f64| (value.max(0.0) / max) as f32 * area.height;

        for (idx, bar) in self.bars.iter().enumerate() {
            let slot_left = area.left + idx as f32 * slot + slot * 0.1;

            let mine_h = height_of(bar.mine);
            frame.fill(
                &Path::rectangle(
                    Point::new(slot_left, area.bottom() - mine_h),
                    Size::new(bar_width, mine_h),
                ),
                theme::CRIMSON,
            );
            let forest_h = height_of(bar.forest);
            frame.fill(
                &Path::rectangle(
                    Point::new(slot_left + bar_width, area.bottom() - forest_h),
                    Size::new(bar_width, forest_h),
                ),
                theme::SEA_GREEN,
            );

            match self.layout {
                BarLayout::Grouped => {
                    // Rotated, small labels keep long zone lists readable
                    let x = slot_left + bar_width;
                    let y = area.bottom() + 4.0;
                    frame.with_save(|frame| {
                        frame.translate(Vector::new(x, y));
                        frame.rotate(-std::f32::consts::FRAC_PI_2);
                        frame.fill_text(canvas::Text {
                            horizontal_alignment: Horizontal::Right,
                            ..plot::text(bar.label.as_str(), Point::ORIGIN, LABEL_SIZE, theme::TEXT)
                        });
                    });
                }
                BarLayout::Pair => {
                    let y = area.bottom() + 12.0;
                    frame.fill_text(plot::text(
                        "Mine",
                        Point::new(slot_left + bar_width / 2.0, y),
                        10.0,
                        theme::TEXT,
                    ));
                    frame.fill_text(plot::text(
                        "Forest",
                        Point::new(slot_left + bar_width * 1.5, y),
                        10.0,
                        theme::TEXT,
                    ));
                }
            }
        }

        if self.layout == BarLayout::Grouped {
            plot::draw_legend(
                &mut frame,
                &area,
                &[("Mine", theme::CRIMSON), ("Forest", theme::SEA_GREEN)],
            );
        }

        vec![frame.into_geometry()]
    }
}
