use iced::widget::{button, column, image, row, text};
use iced::{Alignment, Element, Length};
use std::path::Path;

use super::{placeholder, subtitle, theme};
use crate::state::navigation::NavEvent;
use crate::Message;

/// Height the home cover image is shown at
const COVER_HEIGHT: f32 = 180.0;

pub fn view(cover: &Path) -> Element<'_, Message> {
    let cover: Element<Message> = if cover.is_file() {
        image(image::Handle::from_path(cover))
            .height(Length::Fixed(COVER_HEIGHT))
            .into()
    } else {
        placeholder(COVER_HEIGHT * 1.6, COVER_HEIGHT)
    };

    let left = column![
        subtitle("Satellite Changes"),
        cover,
        button("Open Mining Regions")
            .on_press(Message::Navigate(NavEvent::OpenSatelliteRegions))
            .padding(10),
    ]
    .spacing(14)
    .width(Length::FillPortion(1));

    let right = column![
        subtitle("Visualisations"),
        text("Explore forest loss, NO₂ levels, and feature relationships."),
        button("Open Charts")
            .on_press(Message::Navigate(NavEvent::OpenCharts))
            .padding(10),
        subtitle("Mine Data Explorer"),
        text("Search any mining zone and review its risk profile."),
        button("Open Mine Explorer")
            .on_press(Message::Navigate(NavEvent::OpenExplorer))
            .padding(10),
    ]
    .spacing(14)
    .width(Length::FillPortion(1));

    column![
        text("Research Analysis of Indian Mining Zones")
            .size(40)
            .color(theme::HEADING),
        row![left, right].spacing(40),
    ]
    .spacing(30)
    .align_x(Alignment::Center)
    .into()
}
