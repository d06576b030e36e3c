/// Colors of the dashboard's light green look
use iced::theme::Palette;
use iced::{Color, Theme};

pub const BACKGROUND: Color = Color { r: 0.914, g: 0.961, b: 0.882, a: 1.0 };
pub const TEXT: Color = Color { r: 0.11, g: 0.11, b: 0.11, a: 1.0 };
pub const PRIMARY: Color = Color { r: 0.18, g: 0.49, b: 0.196, a: 1.0 };
pub const HEADING: Color = Color { r: 0.125, g: 0.333, b: 0.133, a: 1.0 };
pub const FOOTER: Color = Color { r: 0.839, g: 0.918, b: 0.855, a: 1.0 };
pub const DANGER: Color = Color { r: 0.776, g: 0.157, b: 0.157, a: 1.0 };

// Chart colors
pub const MINE: Color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
pub const FOREST: Color = Color { r: 0.0, g: 0.502, b: 0.0, a: 1.0 };
pub const CONNECTOR: Color = Color { r: 0.5, g: 0.5, b: 0.5, a: 0.4 };
pub const CRIMSON: Color = Color { r: 0.863, g: 0.078, b: 0.235, a: 1.0 };
pub const SEA_GREEN: Color = Color { r: 0.18, g: 0.545, b: 0.341, a: 0.7 };
pub const AXIS: Color = Color { r: 0.25, g: 0.25, b: 0.25, a: 1.0 };
pub const INACTIVE: Color = Color { r: 0.82, g: 0.82, b: 0.82, a: 1.0 };

pub fn rgb8((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb8(r, g, b)
}

pub fn dashboard() -> Theme {
    Theme::custom(
        "Mining Zones".to_string(),
        Palette {
            background: BACKGROUND,
            text: TEXT,
            primary: PRIMARY,
            success: PRIMARY,
            danger: DANGER,
        },
    )
}
