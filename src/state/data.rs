/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the dataset layer and the UI layer.

use std::fmt;

/// Marker shown wherever an optional measurement has no value
pub const UNKNOWN_MARKER: &str = "unknown";

/// Binary environmental risk classification of a zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    /// Interpret the numeric `Risks` column (1 = High, anything else = Low)
    pub fn from_flag(flag: f64) -> Self {
        if flag == 1.0 {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }

    pub fn flag(self) -> u8 {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::High => 1,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// One mining zone from the static dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRecord {
    /// Unique, non-empty identifier (e.g., "Jharia_Coalfield")
    pub zone_id: String,
    /// Mine latitude
    pub lat: f64,
    /// Mine longitude
    pub long: f64,
    /// Nearest forest latitude
    pub forest_lat: f64,
    /// Nearest forest longitude
    pub forest_long: f64,
    /// Forest loss percentage; None when the survey has no value
    pub forest_loss_pct: Option<f64>,
    /// Distance from the mine to the nearest forest in kilometers
    pub distance_to_forest: f64,
    pub urban_growth: f64,
    pub landuse_change: f64,
    pub forest_name: String,
    /// NO₂ reading near the mine
    pub no2_mine: f64,
    /// NO₂ reading near the forest
    pub no2_forest: f64,
    pub risk: RiskLevel,
}

impl ZoneRecord {
    /// Zone id with underscores shown as spaces
    pub fn display_name(&self) -> String {
        self.zone_id.replace('_', " ")
    }

    /// Google Maps deep link centred on the mine
    pub fn maps_link(&self) -> String {
        format!("https://www.google.com/maps/@{},{},17z", self.lat, self.long)
    }

    /// Forest loss formatted for display, never defaulting to zero
    pub fn forest_loss_label(&self) -> String {
        match self.forest_loss_pct {
            Some(pct) => pct.to_string(),
            None => UNKNOWN_MARKER.to_string(),
        }
    }

    /// Label/value lines of the explorer profile, in display order
    pub fn profile_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Latitude / Longitude", format!("{} / {}", self.lat, self.long)),
            ("Forest Loss %", self.forest_loss_label()),
            ("Distance to Forest", format!("{} km", self.distance_to_forest)),
            ("Urban Growth Index", self.urban_growth.to_string()),
            ("Land-Use Change", self.landuse_change.to_string()),
            ("Nearest Forest", self.forest_name.clone()),
            ("NO₂ Near Mine", self.no2_mine.to_string()),
            ("NO₂ Near Forest", self.no2_forest.to_string()),
            ("Risk Level", self.risk.to_string()),
        ]
    }
}

#[cfg(test)]
pub(crate) fn sample_zone(zone_id: &str, risk: RiskLevel) -> ZoneRecord {
    ZoneRecord {
        zone_id: zone_id.to_string(),
        lat: 23.75,
        long: 86.42,
        forest_lat: 23.9,
        forest_long: 86.1,
        forest_loss_pct: Some(12.5),
        distance_to_forest: 8.2,
        urban_growth: 0.31,
        landuse_change: 0.18,
        forest_name: "Dalma".to_string(),
        no2_mine: 41.0,
        no2_forest: 17.5,
        risk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line<'a>(lines: &'a [(&'static str, String)], label: &str) -> &'a str {
        lines
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_risk_from_flag() {
        assert_eq!(RiskLevel::from_flag(1.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_flag(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::High.flag(), 1);
    }

    #[test]
    fn test_risk_level_rendering() {
        let alpha = sample_zone("Alpha", RiskLevel::High);
        let bravo = sample_zone("Bravo", RiskLevel::Low);

        let render = |zone: &ZoneRecord| {
            let lines = zone.profile_lines();
            format!("Risk Level: {}", line(&lines, "Risk Level"))
        };

        assert_eq!(render(&alpha), "Risk Level: High");
        assert_eq!(render(&bravo), "Risk Level: Low");
    }

    #[test]
    fn test_missing_forest_loss_is_unknown() {
        let mut zone = sample_zone("Alpha", RiskLevel::Low);
        zone.forest_loss_pct = None;

        let lines = zone.profile_lines();
        assert_eq!(line(&lines, "Forest Loss %"), UNKNOWN_MARKER);
        assert_ne!(line(&lines, "Forest Loss %"), "0");
    }

    #[test]
    fn test_maps_link() {
        let zone = sample_zone("Alpha", RiskLevel::Low);
        assert_eq!(zone.maps_link(), "https://www.google.com/maps/@23.75,86.42,17z");
    }

    #[test]
    fn test_display_name() {
        let zone = sample_zone("Jharia_Coal_Field", RiskLevel::Low);
        assert_eq!(zone.display_name(), "Jharia Coal Field");
    }
}
