/// User interface module
///
/// Screens are plain functions from state to `Element`; the chart
/// canvases are `canvas::Program` implementations fed by `crate::charts`.

pub mod bars;
pub mod explorer;
pub mod gauge;
pub mod heatmap;
pub mod home;
pub mod plot;
pub mod satellite;
pub mod scatter;
pub mod theme;
pub mod visualisations;

use iced::widget::{button, column, container, scrollable, text, Space};
use iced::{Alignment, Element, Length};

use crate::state::navigation::NavEvent;
use crate::Message;

/// Footer shown on every screen
const ORGANISATION: &str = "EnvironmentSummer Organisation";

pub fn title<'a>(content: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    text(content).size(32).color(theme::HEADING).into()
}

pub fn subtitle<'a>(content: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    text(content).size(22).color(theme::HEADING).into()
}

pub fn back_button(label: &str) -> Element<'_, Message> {
    button(text(label))
        .on_press(Message::Navigate(NavEvent::Back))
        .padding([6, 18])
        .into()
}

/// Informational line used for absent assets and empty listings
pub fn info<'a>(content: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    container(text(content).size(15))
        .padding(10)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// Error line for data that could not be loaded
pub fn error<'a>(content: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    container(text(content).size(15).color(theme::DANGER))
        .padding(10)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

/// Grey box standing in for an image that does not exist
pub fn placeholder<'a>(width: f32, height: f32) -> Element<'a, Message> {
    container(text("No image").size(13).color(theme::AXIS))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(|_theme| container::Style {
            background: Some(theme::INACTIVE.into()),
            ..container::Style::default()
        })
        .into()
}

/// Wrap a screen with the status line and the footer
pub fn page<'a>(content: Element<'a, Message>, status: &'a str) -> Element<'a, Message> {
    let footer = container(text(ORGANISATION).size(14).color(theme::TEXT))
        .width(Length::Fill)
        .padding(8)
        .center_x(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(theme::FOOTER.into()),
            ..container::Style::default()
        });

    let mut body = column![scrollable(container(content).padding(24).width(Length::Fill)).height(Length::Fill)]
        .align_x(Alignment::Center);
    if !status.is_empty() {
        body = body.push(text(status).size(14));
    }

    column![body.height(Length::Fill), Space::with_height(4), footer]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
