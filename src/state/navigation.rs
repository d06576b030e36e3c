/// Navigation state machine
///
/// `NavigationState` is the single source of truth for which screen is
/// rendered. It changes only through `NavigationState::apply`, which maps
/// a `(state, event)` pair to the next state or rejects the event.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The screens of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    ZoneGrid,
    ZoneDetail,
    ImageDetail,
    Charts,
    ZoneExplorer,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Home => "home",
            Screen::ZoneGrid => "zone grid",
            Screen::ZoneDetail => "zone detail",
            Screen::ImageDetail => "image detail",
            Screen::Charts => "charts",
            Screen::ZoneExplorer => "zone explorer",
        };
        f.write_str(name)
    }
}

/// Discrete user actions
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    OpenSatelliteRegions,
    OpenCharts,
    OpenExplorer,
    Back,
    /// Open a zone folder from the grid
    OpenFolder(String),
    /// Enlarge one image of the open folder
    ViewImage(PathBuf),
    /// Pick a zone in the explorer
    SelectZone(String),
    /// Jump from the explorer to the zone's imagery. Only emitted when the
    /// folder exists in the image store.
    ViewZoneImages { zone_id: String, folder: String },
    /// Show or hide the per-zone charts in the explorer
    ToggleZoneCharts,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum NavError {
    #[error("{event:?} is not available on the {screen} screen")]
    IllegalTransition { screen: Screen, event: NavEvent },

    #[error("no zone selected")]
    MissingZoneSelection,
}

/// Per-session navigation state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    pub active_screen: Screen,
    pub selected_zone_id: Option<String>,
    pub selected_folder: Option<String>,
    pub selected_image_path: Option<PathBuf>,
    /// Set when the zone detail was reached from the explorer
    pub return_to_search_flag: bool,
    /// Zone whose detail charts are expanded; scoped to one zone so a new
    /// selection starts collapsed
    pub zone_charts_for: Option<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the per-zone charts are shown for the current selection
    pub fn zone_charts_visible(&self) -> bool {
        self.zone_charts_for.is_some() && self.zone_charts_for == self.selected_zone_id
    }

    /// Compute the state that follows `event`
    pub fn apply(&self, event: &NavEvent) -> Result<Self, NavError> {
        let mut next = self.clone();
        let illegal = || NavError::IllegalTransition {
            screen: self.active_screen,
            event: event.clone(),
        };

        match (self.active_screen, event) {
            (Screen::Home, NavEvent::OpenSatelliteRegions) => {
                next.active_screen = Screen::ZoneGrid;
            }
            (Screen::Home, NavEvent::OpenCharts) => {
                next.active_screen = Screen::Charts;
            }
            (Screen::Home, NavEvent::OpenExplorer) => {
                next.active_screen = Screen::ZoneExplorer;
            }

            (Screen::ZoneGrid, NavEvent::Back)
            | (Screen::Charts, NavEvent::Back)
            | (Screen::ZoneExplorer, NavEvent::Back) => {
                next.active_screen = Screen::Home;
            }
            (Screen::ZoneGrid, NavEvent::OpenFolder(folder)) => {
                next.selected_folder = Some(folder.clone());
                next.active_screen = Screen::ZoneDetail;
            }

            (Screen::ZoneDetail, NavEvent::Back) => {
                next.selected_folder = None;
                if self.return_to_search_flag {
                    next.return_to_search_flag = false;
                    next.active_screen = Screen::ZoneExplorer;
                } else {
                    next.active_screen = Screen::ZoneGrid;
                }
            }
            (Screen::ZoneDetail, NavEvent::ViewImage(path)) => {
                next.selected_image_path = Some(path.clone());
                next.active_screen = Screen::ImageDetail;
            }

            (Screen::ImageDetail, NavEvent::Back) => {
                next.selected_image_path = None;
                next.active_screen = Screen::ZoneDetail;
            }

            (Screen::ZoneExplorer, NavEvent::SelectZone(zone_id)) => {
                next.selected_zone_id = Some(zone_id.clone());
            }
            (Screen::ZoneExplorer, NavEvent::ViewZoneImages { zone_id, folder }) => {
                next.selected_zone_id = Some(zone_id.clone());
                next.selected_folder = Some(folder.clone());
                next.return_to_search_flag = true;
                next.active_screen = Screen::ZoneDetail;
            }
            (Screen::ZoneExplorer, NavEvent::ToggleZoneCharts) => {
                let zone = self.selected_zone_id.clone().ok_or(NavError::MissingZoneSelection)?;
                next.zone_charts_for = if self.zone_charts_visible() { None } else { Some(zone) };
            }

            _ => return Err(illegal()),
        }

        Ok(next)
    }
}
