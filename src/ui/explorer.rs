/// Mine Data Explorer: search a zone and review its risk profile
use iced::widget::{button, canvas, column, pick_list, row, text, Column};
use iced::{Alignment, Element, Length};

use super::bars::No2Chart;
use super::gauge::RiskGaugeChart;
use super::{back_button, error, info, subtitle, title};
use crate::charts;
use crate::state::catalog::ImageCatalog;
use crate::state::data::ZoneRecord;
use crate::state::dataset::{Dataset, DatasetError};
use crate::state::navigation::{NavEvent, NavigationState};
use crate::Message;

const DETAIL_CHART_WIDTH: f32 = 320.0;
const DETAIL_CHART_HEIGHT: f32 = 240.0;

pub fn view<'a>(
    dataset: &'a Result<Dataset, DatasetError>,
    nav: &NavigationState,
    catalog: &ImageCatalog,
) -> Element<'a, Message> {
    let header = column![title("Mine Data Explorer"), back_button("Back to Home")].spacing(16);

    let dataset = match dataset {
        Ok(dataset) => dataset,
        Err(e) => return column![header, error(format!("Data unavailable: {}", e))].spacing(16).into(),
    };
    let Some(zone) = dataset.resolve_selection(nav.selected_zone_id.as_deref()) else {
        return column![header, info("The zone dataset is empty.")].spacing(16).into();
    };

    let search = pick_list(dataset.zone_ids(), Some(zone.zone_id.clone()), |zone_id| {
        Message::Navigate(NavEvent::SelectZone(zone_id))
    })
    .placeholder("Search Mining Zone")
    .width(Length::Fixed(360.0));

    let search_row = row![text("Search Mining Zone"), search]
        .spacing(12)
        .align_y(Alignment::Center);

    column![
        header,
        search_row,
        subtitle(zone.display_name()),
        profile(zone),
        map_link(zone),
        zone_charts(zone, nav.zone_charts_visible()),
        satellite_link(zone, catalog),
    ]
    .spacing(16)
    .into()
}

fn profile<'a>(zone: &ZoneRecord) -> Element<'a, Message> {
    zone.profile_lines()
        .into_iter()
        .fold(Column::new().spacing(4), |col, (label, value)| {
            col.push(text(format!("• {}: {}", label, value)).size(16))
        })
        .into()
}

fn map_link<'a>(zone: &ZoneRecord) -> Element<'a, Message> {
    let link = zone.maps_link();
    row![
        text(link.clone()).size(14),
        button("Copy Map Link")
            .on_press(Message::CopyMapLink(link))
            .padding([4, 12]),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn zone_charts<'a>(zone: &ZoneRecord, visible: bool) -> Element<'a, Message> {
    let label = if visible { "Hide Zone Charts" } else { "Show Zone Charts" };
    let toggle = button(label)
        .on_press(Message::Navigate(NavEvent::ToggleZoneCharts))
        .padding([4, 12]);

    if !visible {
        return toggle.into();
    }

    let no2 = canvas(No2Chart::pair(charts::zone_no2_pair(zone)))
        .width(Length::Fixed(DETAIL_CHART_WIDTH))
        .height(Length::Fixed(DETAIL_CHART_HEIGHT));
    let gauge = canvas(RiskGaugeChart { gauge: charts::risk_gauge(zone) })
        .width(Length::Fixed(DETAIL_CHART_WIDTH))
        .height(Length::Fixed(DETAIL_CHART_HEIGHT / 2.0));

    column![toggle, row![no2, gauge].spacing(20).align_y(Alignment::Center)]
        .spacing(12)
        .into()
}

/// Button to the zone's imagery, or a notice when the store has none
fn satellite_link<'a>(zone: &ZoneRecord, catalog: &ImageCatalog) -> Element<'a, Message> {
    match catalog.folder_for_zone(&zone.zone_id) {
        Some(folder) => button("View Satellite Images")
            .on_press(Message::Navigate(NavEvent::ViewZoneImages {
                zone_id: zone.zone_id.clone(),
                folder,
            }))
            .padding(10)
            .into(),
        None => info("No satellite images found for this mine."),
    }
}
