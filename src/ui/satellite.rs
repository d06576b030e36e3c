/// Satellite image screens: folder grid, folder contents, enlarged image
use iced::widget::{button, column, image, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::{back_button, info, placeholder, title};
use crate::preview::PreviewSlot;
use crate::state::catalog::ImageCatalog;
use crate::state::navigation::NavEvent;
use crate::Message;

const COVER_WIDTH: f32 = 300.0;
const COVER_HEIGHT: f32 = 200.0;
const THUMB_WIDTH: f32 = 220.0;

pub fn grid(catalog: &ImageCatalog) -> Element<'_, Message> {
    let folders = catalog.list_zone_folders();

    let cards: Vec<Element<Message>> = folders
        .into_iter()
        .map(|folder| {
            let thumb: Element<Message> = match catalog.cover_image(&folder) {
                Some(path) => image(image::Handle::from_path(path))
                    .width(Length::Fixed(COVER_WIDTH))
                    .into(),
                None => placeholder(COVER_WIDTH, COVER_HEIGHT),
            };
            column![
                thumb,
                text(catalog.display_name(&folder)).size(14),
                button("Open")
                    .on_press(Message::Navigate(NavEvent::OpenFolder(folder)))
                    .padding([4, 16]),
            ]
            .spacing(6)
            .width(Length::Fixed(COVER_WIDTH))
            .align_x(Alignment::Center)
            .into()
        })
        .collect();

    let listing: Element<Message> = if cards.is_empty() {
        info(format!("No zone folders found under {}", catalog.root().display()))
    } else {
        Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0).into()
    };

    column![title("Satellite Changes"), back_button("Back to Home"), listing]
        .spacing(16)
        .into()
}

pub fn folder<'a>(
    catalog: &'a ImageCatalog,
    folder: Option<&'a str>,
    return_to_search: bool,
) -> Element<'a, Message> {
    let back = if return_to_search {
        back_button("Back to Mine Explorer")
    } else {
        back_button("Back to Mining Regions")
    };

    let Some(folder) = folder else {
        return column![back, info("No folder selected.")].spacing(16).into();
    };

    let images = catalog.list_images(folder);
    let listing: Element<Message> = if images.is_empty() {
        info("No satellite images found in this folder.")
    } else {
        let tiles: Vec<Element<Message>> = images
            .into_iter()
            .map(|path| {
                let caption = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                column![
                    image(image::Handle::from_path(&path)).width(Length::Fixed(THUMB_WIDTH)),
                    text(caption).size(11),
                    button("View")
                        .on_press(Message::Navigate(NavEvent::ViewImage(path)))
                        .padding([4, 16]),
                ]
                .spacing(6)
                .width(Length::Fixed(THUMB_WIDTH))
                .align_x(Alignment::Center)
                .into()
            })
            .collect();
        Wrap::with_elements(tiles).spacing(12.0).line_spacing(12.0).into()
    };

    column![back, title(catalog.display_name(folder)), listing]
        .spacing(16)
        .into()
}

pub fn image_detail(preview: &PreviewSlot) -> Element<'_, Message> {
    let body: Element<Message> = match preview {
        PreviewSlot::Empty => info("No image selected."),
        PreviewSlot::Loading(path) => text(format!("Loading {} ...", path.display())).into(),
        PreviewSlot::Ready { handle, .. } => image(handle.clone()).into(),
        PreviewSlot::Failed { reason, .. } => info(format!("Image unavailable: {}", reason)),
    };

    Column::new()
        .push(back_button("Back to Folder"))
        .push(body)
        .spacing(16)
        .into()
}
