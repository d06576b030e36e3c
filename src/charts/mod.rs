/// Chart data for the visualisation screens
///
/// Every chart is computed here as plain data from the loaded zones, so
/// it can be tested without a renderer. The canvas programs in `ui`
/// only draw what these functions return.

pub mod correlation;

pub use correlation::{correlation_matrix, CorrelationMatrix};

use crate::state::data::{RiskLevel, ZoneRecord};

/// A mine and its nearest forest, drawn as two points and a connector
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLink {
    /// (longitude, latitude) of the mine
    pub mine: (f64, f64),
    /// (longitude, latitude) of the forest
    pub forest: (f64, f64),
}

pub fn geo_links(zones: &[ZoneRecord]) -> Vec<GeoLink> {
    zones
        .iter()
        .map(|z| GeoLink {
            mine: (z.long, z.lat),
            forest: (z.forest_long, z.forest_lat),
        })
        .collect()
}

/// Bounding box over all points, padded so markers stay inside the plot
pub fn geo_bounds(links: &[GeoLink]) -> Option<Bounds> {
    let mut points = links.iter().flat_map(|l| [l.mine, l.forest]);
    let first = points.next()?;
    let mut bounds = Bounds {
        min_x: first.0,
        max_x: first.0,
        min_y: first.1,
        max_y: first.1,
    };
    for (x, y) in points {
        bounds.min_x = bounds.min_x.min(x);
        bounds.max_x = bounds.max_x.max(x);
        bounds.min_y = bounds.min_y.min(y);
        bounds.max_y = bounds.max_y.max(y);
    }
    Some(bounds.padded(0.05))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Grow by `fraction` of the span on each side; a zero span gets one unit
    fn padded(self, fraction: f64) -> Self {
        let pad = |min: f64, max: f64| {
            let span = max - min;
            if span > 0.0 { span * fraction } else { 0.5 }
        };
        let px = pad(self.min_x, self.max_x);
        let py = pad(self.min_y, self.max_y);
        Bounds {
            min_x: self.min_x - px,
            max_x: self.max_x + px,
            min_y: self.min_y - py,
            max_y: self.max_y + py,
        }
    }

    /// Map a data point into [0, 1] on both axes (y grows upward)
    pub fn normalize(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            (x - self.min_x) / (self.max_x - self.min_x),
            (y - self.min_y) / (self.max_y - self.min_y),
        )
    }
}

/// Mine and forest NO₂ readings for one zone
#[derive(Debug, Clone, PartialEq)]
pub struct No2Bar {
    pub label: String,
    pub mine: f64,
    pub forest: f64,
}

pub fn no2_bars(zones: &[ZoneRecord]) -> Vec<No2Bar> {
    zones.iter().map(zone_no2_pair).collect()
}

/// The two-bar NO₂ comparison of a single zone
pub fn zone_no2_pair(zone: &ZoneRecord) -> No2Bar {
    No2Bar {
        label: zone.display_name(),
        mine: zone.no2_mine,
        forest: zone.no2_forest,
    }
}

/// Largest reading across all bars, used as the shared y-axis maximum
pub fn no2_axis_max(bars: &[No2Bar]) -> f64 {
    bars.iter()
        .flat_map(|b| [b.mine, b.forest])
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Gauge colors as RGB bytes
pub const GAUGE_LOW_RGB: (u8, u8, u8) = (0x2e, 0x7d, 0x32);
pub const GAUGE_HIGH_RGB: (u8, u8, u8) = (0xff, 0x8c, 0x00);

/// Binary risk gauge of a single zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskGauge {
    pub level: RiskLevel,
}

impl RiskGauge {
    /// Green for Low, orange for High
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self.level {
            RiskLevel::Low => GAUGE_LOW_RGB,
            RiskLevel::High => GAUGE_HIGH_RGB,
        }
    }

    /// Index of the lit gauge segment (0 = Low, 1 = High)
    pub fn segment(&self) -> usize {
        self.level.flag() as usize
    }
}

pub fn risk_gauge(zone: &ZoneRecord) -> RiskGauge {
    RiskGauge { level: zone.risk }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::sample_zone;

    #[test]
    fn test_geo_links_use_lon_lat_order() {
        let zone = sample_zone("Alpha", RiskLevel::Low);
        let links = geo_links(std::slice::from_ref(&zone));
        assert_eq!(links[0].mine, (86.42, 23.75));
        assert_eq!(links[0].forest, (86.1, 23.9));
    }

    #[test]
    fn test_geo_bounds_contain_all_points() {
        let mut far = sample_zone("Bravo", RiskLevel::Low);
        far.long = 70.0;
        far.lat = 10.0;
        let links = geo_links(&[sample_zone("Alpha", RiskLevel::Low), far]);
        let bounds = geo_bounds(&links).unwrap();

        for link in &links {
            for point in [link.mine, link.forest] {
                let (x, y) = bounds.normalize(point);
                assert!((0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y));
            }
        }
        assert!(geo_bounds(&[]).is_none());
    }

    #[test]
    fn test_no2_bars_one_pair_per_zone() {
        let mut bravo = sample_zone("Bravo_East", RiskLevel::Low);
        bravo.no2_mine = 55.0;
        let bars = no2_bars(&[sample_zone("Alpha", RiskLevel::High), bravo]);

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].label, "Bravo East");
        assert_eq!(no2_axis_max(&bars), 55.0);
    }

    #[test]
    fn test_risk_gauge_colors() {
        let high = risk_gauge(&sample_zone("Alpha", RiskLevel::High));
        let low = risk_gauge(&sample_zone("Bravo", RiskLevel::Low));

        assert_eq!(high.color_rgb(), GAUGE_HIGH_RGB);
        assert_eq!(high.segment(), 1);
        assert_eq!(low.color_rgb(), GAUGE_LOW_RGB);
        assert_eq!(low.segment(), 0);
    }
}
