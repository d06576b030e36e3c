use clap::Parser;
use iced::{Element, Task, Theme};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod charts;
mod config;
mod preview;
mod state;
mod ui;

use config::{Args, Settings};
use preview::{PreviewResult, PreviewSlot};
use state::catalog::ImageCatalog;
use state::dataset::{CsvZoneSource, Dataset, DatasetError, ZoneSource};
use state::navigation::{NavEvent, NavigationState, Screen};

/// Main application state
struct Dashboard {
    settings: Settings,
    /// Which screen, zone, folder and image are open
    nav: NavigationState,
    /// Where zone records come from; re-read on every load
    source: Box<dyn ZoneSource>,
    /// Last loaded dataset snapshot
    dataset: Result<Dataset, DatasetError>,
    catalog: ImageCatalog,
    /// Enlarged image for the image detail screen
    preview: PreviewSlot,
    /// Transient status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A navigation action from any screen
    Navigate(NavEvent),
    /// Background image decoding finished
    PreviewLoaded(PreviewResult),
    /// User asked for the map deep link on the clipboard
    CopyMapLink(String),
}

impl Dashboard {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let source = CsvZoneSource::new(settings.dataset_path.clone());
        (Self::with_source(settings, Box::new(source)), Task::none())
    }

    fn with_source(settings: Settings, source: Box<dyn ZoneSource>) -> Self {
        let catalog = ImageCatalog::new(settings.image_root.clone(), settings.folder_prefix.clone());
        info!(
            "🛰️  Dashboard ready (images: {}, dataset: {})",
            settings.image_root.display(),
            settings.dataset_path.display()
        );

        Dashboard {
            settings,
            nav: NavigationState::new(),
            source,
            dataset: Ok(Dataset::default()),
            catalog,
            preview: PreviewSlot::Empty,
            status: String::new(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(event) => self.navigate(event),
            Message::PreviewLoaded(result) => {
                if let Err(reason) = &result.outcome {
                    warn!("⚠️  Preview of {} failed: {}", result.path.display(), reason);
                }
                if !self.preview.accept(result) {
                    debug!("Still showing {:?}", self.preview.path());
                }
                Task::none()
            }
            Message::CopyMapLink(link) => {
                debug!("Copying map link {}", link);
                self.status = "📋 Map link copied to clipboard".to_string();
                iced::clipboard::write(link)
            }
        }
    }

    fn navigate(&mut self, event: NavEvent) -> Task<Message> {
        let next = match self.nav.apply(&event) {
            Ok(next) => next,
            Err(e) => {
                warn!("⚠️  Ignoring navigation: {}", e);
                return Task::none();
            }
        };

        if next.active_screen != self.nav.active_screen {
            info!("➡️  {} -> {}", self.nav.active_screen, next.active_screen);
        }
        self.nav = next;
        self.status.clear();

        match event {
            NavEvent::OpenCharts | NavEvent::OpenExplorer | NavEvent::SelectZone(_) => {
                self.reload_dataset();
            }
            NavEvent::Back if self.nav.active_screen == Screen::ZoneExplorer => {
                self.reload_dataset();
            }
            NavEvent::Back if self.nav.active_screen == Screen::ZoneDetail => {
                self.preview = PreviewSlot::Empty;
            }
            NavEvent::ViewImage(path) => {
                self.preview = PreviewSlot::Loading(path.clone());
                return Task::perform(preview::load_preview(path), Message::PreviewLoaded);
            }
            _ => {}
        }

        Task::none()
    }

    /// Re-read the dataset and, on the explorer, repair a missing or stale
    /// zone selection by falling back to the first zone
    fn reload_dataset(&mut self) {
        self.dataset = Dataset::reload(self.source.as_ref());
        let dataset = match &self.dataset {
            Ok(dataset) => {
                debug!("Dataset holds {} zones", dataset.len());
                dataset
            }
            Err(e) => {
                warn!("⚠️  Dataset unavailable: {}", e);
                return;
            }
        };

        if self.nav.active_screen != Screen::ZoneExplorer {
            return;
        }
        let resolved = dataset
            .resolve_selection(self.nav.selected_zone_id.as_deref())
            .map(|zone| zone.zone_id.clone());
        if let Some(zone_id) = resolved.filter(|id| Some(id) != self.nav.selected_zone_id.as_ref()) {
            if let Ok(next) = self.nav.apply(&NavEvent::SelectZone(zone_id)) {
                self.nav = next;
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let content = match self.nav.active_screen {
            Screen::Home => ui::home::view(&self.settings.home_cover),
            Screen::ZoneGrid => ui::satellite::grid(&self.catalog),
            Screen::ZoneDetail => ui::satellite::folder(
                &self.catalog,
                self.nav.selected_folder.as_deref(),
                self.nav.return_to_search_flag,
            ),
            Screen::ImageDetail => ui::satellite::image_detail(&self.preview),
            Screen::Charts => ui::visualisations::view(&self.dataset),
            Screen::ZoneExplorer => ui::explorer::view(&self.dataset, &self.nav, &self.catalog),
        };

        ui::page(content, &self.status)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::theme::dashboard()
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = match Settings::resolve(Args::parse()) {
        Ok(settings) => settings,
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(2);
        }
    };
    match settings.to_json() {
        Ok(json) => debug!("Resolved settings:\n{}", json),
        Err(e) => warn!("⚠️  Could not render settings: {}", e),
    }

    iced::application("Risks With Mining", Dashboard::update, Dashboard::view)
        .theme(Dashboard::theme)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || Dashboard::new(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::data::{sample_zone, RiskLevel};
    use state::dataset::StaticZoneSource;
    use std::path::PathBuf;

    fn dashboard(zones: Vec<state::data::ZoneRecord>) -> (tempfile::TempDir, Dashboard) {
        let dir = tempfile::tempdir().unwrap();
        let alpha = dir.path().join("data_Alpha");
        std::fs::create_dir_all(&alpha).unwrap();
        std::fs::write(alpha.join("Alpha_Satellite_2024_After.png"), b"png").unwrap();

        let settings = Settings {
            image_root: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let app = Dashboard::with_source(settings, Box::new(StaticZoneSource::new(zones)));
        (dir, app)
    }

    fn nav(app: &mut Dashboard, event: NavEvent) {
        let _ = app.update(Message::Navigate(event));
    }

    #[test]
    fn test_explorer_selects_first_zone() {
        let (_dir, mut app) = dashboard(vec![
            sample_zone("Bravo", RiskLevel::Low),
            sample_zone("Alpha", RiskLevel::High),
        ]);

        nav(&mut app, NavEvent::OpenExplorer);
        assert_eq!(app.nav.active_screen, Screen::ZoneExplorer);
        assert_eq!(app.nav.selected_zone_id.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_explorer_to_images_and_back() {
        let (_dir, mut app) = dashboard(vec![
            sample_zone("Alpha", RiskLevel::High),
            sample_zone("Bravo", RiskLevel::Low),
        ]);

        nav(&mut app, NavEvent::OpenExplorer);
        nav(&mut app, NavEvent::SelectZone("Alpha".into()));
        let folder = app.catalog.folder_for_zone("Alpha").unwrap();
        nav(&mut app, NavEvent::ViewZoneImages { zone_id: "Alpha".into(), folder });

        assert_eq!(app.nav.active_screen, Screen::ZoneDetail);
        assert!(app.nav.return_to_search_flag);

        nav(&mut app, NavEvent::Back);
        assert_eq!(app.nav.active_screen, Screen::ZoneExplorer);
        assert_eq!(app.nav.selected_zone_id.as_deref(), Some("Alpha"));
        assert!(app.catalog.folder_for_zone("Bravo").is_none());
    }

    #[test]
    fn test_stale_selection_falls_back() {
        let (_dir, mut app) = dashboard(vec![sample_zone("Bravo", RiskLevel::Low)]);
        nav(&mut app, NavEvent::OpenExplorer);
        app.nav.selected_zone_id = Some("Removed".into());

        nav(&mut app, NavEvent::SelectZone("Removed".into()));
        assert_eq!(app.nav.selected_zone_id.as_deref(), Some("Bravo"));
    }

    #[test]
    fn test_illegal_event_keeps_state() {
        let (_dir, mut app) = dashboard(vec![]);
        let before = app.nav.clone();
        nav(&mut app, NavEvent::Back);
        nav(&mut app, NavEvent::ViewImage(PathBuf::from("x.png")));
        assert_eq!(app.nav, before);
    }

    #[test]
    fn test_view_image_starts_preview_and_back_clears_it() {
        let (dir, mut app) = dashboard(vec![]);
        let image = dir.path().join("data_Alpha/Alpha_Satellite_2024_After.png");

        nav(&mut app, NavEvent::OpenSatelliteRegions);
        nav(&mut app, NavEvent::OpenFolder("data_Alpha".into()));
        nav(&mut app, NavEvent::ViewImage(image.clone()));
        assert_eq!(app.nav.active_screen, Screen::ImageDetail);
        assert_eq!(app.preview.path(), Some(image.as_path()));

        nav(&mut app, NavEvent::Back);
        assert_eq!(app.nav.active_screen, Screen::ZoneDetail);
        assert!(app.preview.path().is_none());
    }

    #[test]
    fn test_late_preview_for_previous_image_is_dropped() {
        let (dir, mut app) = dashboard(vec![]);
        let first = dir.path().join("data_Alpha/first.png");
        let second = dir.path().join("data_Alpha/second.png");

        nav(&mut app, NavEvent::OpenSatelliteRegions);
        nav(&mut app, NavEvent::OpenFolder("data_Alpha".into()));
        nav(&mut app, NavEvent::ViewImage(first.clone()));
        nav(&mut app, NavEvent::Back);
        nav(&mut app, NavEvent::ViewImage(second.clone()));

        let _ = app.update(Message::PreviewLoaded(PreviewResult {
            path: first,
            outcome: Err("decoded too late".to_string()),
        }));
        assert!(matches!(app.preview, PreviewSlot::Loading(_)));
        assert_eq!(app.preview.path(), Some(second.as_path()));
    }

    #[test]
    fn test_missing_dataset_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            dataset_path: dir.path().join("zone_features.csv"),
            image_root: dir.path().to_path_buf(),
            ..Settings::default()
        };
        let (mut app, _) = Dashboard::new(settings);

        nav(&mut app, NavEvent::OpenCharts);
        assert_eq!(app.nav.active_screen, Screen::Charts);
        assert!(matches!(app.dataset, Err(DatasetError::Io { .. })));

        nav(&mut app, NavEvent::Back);
        assert_eq!(app.nav.active_screen, Screen::Home);
    }
}
