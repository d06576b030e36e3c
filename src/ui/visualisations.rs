use iced::widget::{canvas, column};
use iced::{Element, Length};
use iced_aw::Wrap;

use super::bars::No2Chart;
use super::heatmap::CorrelationHeatmap;
use super::scatter::GeoScatter;
use super::{back_button, error, info, title};
use crate::charts;
use crate::state::dataset::{Dataset, DatasetError};
use crate::Message;

const CHART_WIDTH: f32 = 420.0;
const CHART_HEIGHT: f32 = 370.0;
/// Horizontal room per zone in the NO₂ chart before it starts to grow
const BAR_SLOT: f32 = 16.0;

pub fn view(dataset: &Result<Dataset, DatasetError>) -> Element<'_, Message> {
    let header = column![title("Visualisations"), back_button("Back to Home")].spacing(16);

    let dataset = match dataset {
        Ok(dataset) => dataset,
        Err(e) => return column![header, error(format!("Data unavailable: {}", e))].spacing(16).into(),
    };
    if dataset.is_empty() {
        return column![header, info("The zone dataset is empty.")].spacing(16).into();
    }

    let zones = dataset.zones();
    let no2_width = CHART_WIDTH.max(BAR_SLOT * zones.len() as f32 + 60.0);

    let scatter = canvas(GeoScatter { links: charts::geo_links(zones) })
        .width(Length::Fixed(CHART_WIDTH))
        .height(Length::Fixed(CHART_HEIGHT));
    let heatmap = canvas(CorrelationHeatmap { matrix: charts::correlation_matrix(zones) })
        .width(Length::Fixed(CHART_WIDTH))
        .height(Length::Fixed(CHART_HEIGHT));
    let no2 = canvas(No2Chart::grouped(charts::no2_bars(zones)))
        .width(Length::Fixed(no2_width))
        .height(Length::Fixed(CHART_HEIGHT + 60.0));

    let panels: Vec<Element<Message>> = vec![scatter.into(), heatmap.into(), no2.into()];

    column![header, Wrap::with_elements(panels).spacing(20.0).line_spacing(20.0)]
        .spacing(16)
        .into()
}
