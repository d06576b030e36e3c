use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::data::{RiskLevel, ZoneRecord};

/// Columns the dataset header must contain
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "Zone",
    "Lat",
    "Long",
    "ForestLat",
    "ForestLon",
    "ForestLossPct",
    "DistanceToForest",
    "UrbanGrowth",
    "LanduseChange",
    "ForestName",
    "NO2_Mine",
    "NO2_Forest",
    "Risks",
];

/// Errors that make the zone dataset unavailable
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be opened.
    #[error("dataset {path} could not be opened: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid CSV.
    #[error("dataset is not valid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The header lacks one of the required columns.
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    /// A kept row has an empty required cell.
    #[error("row {row}: column `{column}` is empty")]
    MissingValue { row: usize, column: &'static str },

    /// A cell that should be numeric is not.
    #[error("row {row}: column `{column}` is not a number: {value:?}")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// Lookup of a zone id that is not in the dataset.
    #[error("zone `{0}` not found")]
    NotFound(String),
}

/// Anything that can produce the zone records on demand
pub trait ZoneSource {
    /// Read all records. Called again on every reload; nothing is cached.
    fn load_zones(&self) -> Result<Vec<ZoneRecord>, DatasetError>;
}

/// The static CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvZoneSource {
    path: PathBuf,
}

impl CsvZoneSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ZoneSource for CsvZoneSource {
    fn load_zones(&self) -> Result<Vec<ZoneRecord>, DatasetError> {
        let file = std::fs::File::open(&self.path).map_err(|source| DatasetError::Io {
            path: self.path.clone(),
            source,
        })?;
        let zones = parse_zones(file)?;
        info!("📊 Loaded {} zones from {}", zones.len(), self.path.display());
        Ok(zones)
    }
}

/// Fixed in-memory records, used when no file should be touched
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticZoneSource {
    zones: Vec<ZoneRecord>,
}

#[cfg(test)]
impl StaticZoneSource {
    pub fn new(zones: Vec<ZoneRecord>) -> Self {
        Self { zones }
    }
}

#[cfg(test)]
impl ZoneSource for StaticZoneSource {
    fn load_zones(&self) -> Result<Vec<ZoneRecord>, DatasetError> {
        Ok(self.zones.clone())
    }
}

/// One CSV row before validation. Every cell is optional here so that
/// rows without a zone id can be dropped before anything else is checked.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Zone")]
    zone: Option<String>,
    #[serde(rename = "Lat")]
    lat: Option<String>,
    #[serde(rename = "Long")]
    long: Option<String>,
    #[serde(rename = "ForestLat")]
    forest_lat: Option<String>,
    #[serde(rename = "ForestLon")]
    forest_long: Option<String>,
    #[serde(rename = "ForestLossPct")]
    forest_loss_pct: Option<String>,
    #[serde(rename = "DistanceToForest")]
    distance_to_forest: Option<String>,
    #[serde(rename = "UrbanGrowth")]
    urban_growth: Option<String>,
    #[serde(rename = "LanduseChange")]
    landuse_change: Option<String>,
    #[serde(rename = "ForestName")]
    forest_name: Option<String>,
    #[serde(rename = "NO2_Mine")]
    no2_mine: Option<String>,
    #[serde(rename = "NO2_Forest")]
    no2_forest: Option<String>,
    #[serde(rename = "Risks")]
    risks: Option<String>,
}

/// Parse zone records from CSV text
///
/// Rows with an empty `Zone` cell are skipped silently. Row numbers in
/// errors are 1-based data rows (the header is not counted).
pub fn parse_zones<R: std::io::Read>(reader: R) -> Result<Vec<ZoneRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DatasetError::MissingColumn(column));
        }
    }

    let mut zones = Vec::new();
    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        let row_number = idx + 1;
        let raw = row?;
        let has_zone = raw.zone.as_deref().is_some_and(|z| !z.trim().is_empty());
        if has_zone {
            zones.push(validate_row(row_number, raw)?);
        } else {
            debug!("Skipping row {} without a zone id", row_number);
        }
    }

    Ok(zones)
}

fn parse_number(row: usize, column: &'static str, cell: &str) -> Result<f64, DatasetError> {
    cell.trim()
        .parse::<f64>()
        .map_err(|_| DatasetError::InvalidNumber { row, column, value: cell.to_string() })
}

fn validate_row(row: usize, raw: RawRow) -> Result<ZoneRecord, DatasetError> {
    let number = |column: &'static str, cell: Option<String>| -> Result<f64, DatasetError> {
        let cell = cell.filter(|c| !c.trim().is_empty());
        let cell = cell.ok_or(DatasetError::MissingValue { row, column })?;
        let value = parse_number(row, column, &cell)?;
        if !value.is_finite() {
            return Err(DatasetError::InvalidNumber { row, column, value: cell });
        }
        Ok(value)
    };

    // NaN here means "not measured"; infinities are still rejected
    let forest_loss_pct = match raw.forest_loss_pct.filter(|c| !c.trim().is_empty()) {
        Some(cell) => match parse_number(row, "ForestLossPct", &cell)? {
            v if v.is_nan() => None,
            v if v.is_infinite() => {
                return Err(DatasetError::InvalidNumber { row, column: "ForestLossPct", value: cell })
            }
            v => Some(v),
        },
        None => None,
    };

    Ok(ZoneRecord {
        zone_id: raw.zone.unwrap_or_default().trim().to_string(),
        lat: number("Lat", raw.lat)?,
        long: number("Long", raw.long)?,
        forest_lat: number("ForestLat", raw.forest_lat)?,
        forest_long: number("ForestLon", raw.forest_long)?,
        forest_loss_pct,
        distance_to_forest: number("DistanceToForest", raw.distance_to_forest)?,
        urban_growth: number("UrbanGrowth", raw.urban_growth)?,
        landuse_change: number("LanduseChange", raw.landuse_change)?,
        forest_name: raw.forest_name.unwrap_or_default(),
        no2_mine: number("NO2_Mine", raw.no2_mine)?,
        no2_forest: number("NO2_Forest", raw.no2_forest)?,
        risk: RiskLevel::from_flag(number("Risks", raw.risks)?),
    })
}

/// A loaded, sorted snapshot of the zone dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    zones: Vec<ZoneRecord>,
}

impl Dataset {
    /// Build a snapshot from raw records: duplicates after the first are
    /// dropped, then zones are ordered by id (case-sensitive).
    pub fn from_records(records: Vec<ZoneRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut zones: Vec<ZoneRecord> = Vec::with_capacity(records.len());
        for record in records {
            if record.zone_id.is_empty() {
                continue;
            }
            if seen.insert(record.zone_id.clone()) {
                zones.push(record);
            } else {
                warn!("⚠️  Duplicate zone `{}` ignored", record.zone_id);
            }
        }
        zones.sort_by(|a, b| a.zone_id.cmp(&b.zone_id));
        Dataset { zones }
    }

    /// Re-read the source and build a fresh snapshot
    pub fn reload(source: &dyn ZoneSource) -> Result<Self, DatasetError> {
        Ok(Self::from_records(source.load_zones()?))
    }

    /// All zones in ascending `zone_id` order
    pub fn zones(&self) -> &[ZoneRecord] {
        &self.zones
    }

    pub fn zone_ids(&self) -> Vec<String> {
        self.zones.iter().map(|z| z.zone_id.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn find_zone(&self, zone_id: &str) -> Result<&ZoneRecord, DatasetError> {
        self.zones
            .binary_search_by(|z| z.zone_id.as_str().cmp(zone_id))
            .map(|idx| &self.zones[idx])
            .map_err(|_| DatasetError::NotFound(zone_id.to_string()))
    }

    /// Zone the explorer should show for a selection
    ///
    /// A missing or stale selection falls back to the first zone.
    pub fn resolve_selection(&self, selected: Option<&str>) -> Option<&ZoneRecord> {
        if let Some(zone_id) = selected {
            match self.find_zone(zone_id) {
                Ok(zone) => return Some(zone),
                Err(_) => debug!("Selected zone `{}` no longer present, using first zone", zone_id),
            }
        }
        self.zones.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::sample_zone;
    use std::io::Write;

    const HEADER: &str = "Zone,Lat,Long,ForestLat,ForestLon,ForestLossPct,DistanceToForest,UrbanGrowth,LanduseChange,ForestName,NO2_Mine,NO2_Forest,Risks";

    fn csv_with(rows: &[&str]) -> String {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text
    }

    #[test]
    fn test_parse_drops_rows_without_zone() {
        let text = csv_with(&[
            "Bravo,22.1,85.3,22.4,85.0,,5.5,0.2,0.1,Saranda,30.5,12.0,0",
            ",22.1,85.3,22.4,85.0,3.0,5.5,0.2,0.1,Saranda,30.5,12.0,0",
            "Alpha,23.7,86.4,23.9,86.1,12.5,8.2,0.3,0.2,Dalma,41.0,17.5,1",
        ]);
        let zones = parse_zones(text.as_bytes()).unwrap();

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].zone_id, "Bravo");
        assert_eq!(zones[0].forest_loss_pct, None);
        assert_eq!(zones[1].forest_loss_pct, Some(12.5));
        assert_eq!(zones[1].risk, RiskLevel::High);
    }

    #[test]
    fn test_parse_accepts_float_risk_flag() {
        let text = csv_with(&["Alpha,23.7,86.4,23.9,86.1,12.5,8.2,0.3,0.2,Dalma,41.0,17.5,1.0"]);
        let zones = parse_zones(text.as_bytes()).unwrap();
        assert_eq!(zones[0].risk, RiskLevel::High);
    }

    #[test]
    fn test_parse_missing_column() {
        let text = "Zone,Lat,Long\nAlpha,1,2";
        let err = parse_zones(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("ForestLat")));
    }

    #[test]
    fn test_parse_missing_required_value() {
        let text = csv_with(&["Alpha,23.7,,23.9,86.1,12.5,8.2,0.3,0.2,Dalma,41.0,17.5,1"]);
        let err = parse_zones(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingValue { row: 1, column: "Long" }));
    }

    #[test]
    fn test_parse_invalid_number() {
        let text = csv_with(&["Alpha,north,86.4,23.9,86.1,12.5,8.2,0.3,0.2,Dalma,41.0,17.5,1"]);
        let err = parse_zones(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidNumber { row: 1, column: "Lat", .. }));
    }

    #[test]
    fn test_parse_rejects_non_finite_numbers() {
        let text = csv_with(&["Alpha,NaN,86.4,23.9,86.1,12.5,8.2,0.3,0.2,Dalma,41.0,17.5,1"]);
        let err = parse_zones(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidNumber { row: 1, column: "Lat", .. }));

        let text = csv_with(&["Alpha,23.7,86.4,23.9,86.1,12.5,8.2,0.3,0.2,Dalma,inf,17.5,1"]);
        let err = parse_zones(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidNumber { row: 1, column: "NO2_Mine", .. }));

        let text = csv_with(&["Alpha,23.7,86.4,23.9,86.1,-inf,8.2,0.3,0.2,Dalma,41.0,17.5,1"]);
        let err = parse_zones(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidNumber { row: 1, column: "ForestLossPct", .. }));

        let text = csv_with(&["Alpha,23.7,86.4,23.9,86.1,NaN,8.2,0.3,0.2,Dalma,41.0,17.5,1"]);
        assert_eq!(parse_zones(text.as_bytes()).unwrap()[0].forest_loss_pct, None);
    }

    #[test]
    fn test_csv_source_missing_file() {
        let source = CsvZoneSource::new("/nonexistent/zone_features.csv");
        let err = Dataset::reload(&source).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_csv_source_rereads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", csv_with(&["Alpha,23.7,86.4,23.9,86.1,12.5,8.2,0.3,0.2,Dalma,41.0,17.5,1"])).unwrap();
        let source = CsvZoneSource::new(file.path());
        assert_eq!(Dataset::reload(&source).unwrap().len(), 1);

        writeln!(file).unwrap();
        write!(file, "Bravo,22.1,85.3,22.4,85.0,,5.5,0.2,0.1,Saranda,30.5,12.0,0").unwrap();
        file.flush().unwrap();
        assert_eq!(Dataset::reload(&source).unwrap().len(), 2);
    }

    #[test]
    fn test_zones_sorted_case_sensitive() {
        let dataset = Dataset::from_records(vec![
            sample_zone("bravo", RiskLevel::Low),
            sample_zone("Charlie", RiskLevel::Low),
            sample_zone("Alpha", RiskLevel::High),
        ]);
        assert_eq!(dataset.zone_ids(), vec!["Alpha", "Charlie", "bravo"]);

        let resorted = Dataset::from_records(dataset.zones().to_vec());
        assert_eq!(resorted, dataset);
    }

    #[test]
    fn test_duplicates_keep_first() {
        let mut second = sample_zone("Alpha", RiskLevel::Low);
        second.no2_mine = 99.0;
        let dataset = Dataset::from_records(vec![sample_zone("Alpha", RiskLevel::High), second]);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.zones()[0].risk, RiskLevel::High);
    }

    #[test]
    fn test_find_zone_roundtrip() {
        let source = StaticZoneSource::new(vec![
            sample_zone("Delta", RiskLevel::Low),
            sample_zone("Alpha", RiskLevel::High),
            sample_zone("Bravo", RiskLevel::Low),
        ]);
        let dataset = Dataset::reload(&source).unwrap();

        for zone in dataset.zones() {
            assert_eq!(dataset.find_zone(&zone.zone_id).unwrap(), zone);
        }
        assert!(matches!(dataset.find_zone("Zulu"), Err(DatasetError::NotFound(_))));
    }

    #[test]
    fn test_resolve_selection_falls_back_to_first() {
        let dataset = Dataset::from_records(vec![
            sample_zone("Bravo", RiskLevel::Low),
            sample_zone("Alpha", RiskLevel::High),
        ]);

        assert_eq!(dataset.resolve_selection(Some("Bravo")).unwrap().zone_id, "Bravo");
        assert_eq!(dataset.resolve_selection(Some("Gone")).unwrap().zone_id, "Alpha");
        assert_eq!(dataset.resolve_selection(None).unwrap().zone_id, "Alpha");
        assert!(Dataset::default().resolve_selection(Some("Alpha")).is_none());
    }
}
