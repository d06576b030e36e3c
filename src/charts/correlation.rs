use crate::state::data::ZoneRecord;

/// Features compared in the correlation heatmap, in display order
pub const FEATURES: [&str; 6] = [
    "ForestLossPct",
    "DistanceToForest",
    "UrbanGrowth",
    "LanduseChange",
    "NO2_Mine",
    "NO2_Forest",
];

/// Pairwise Pearson correlation across the six numeric features
///
/// `None` marks an undefined cell (a constant column, or fewer than
/// two complete rows).
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub labels: [&'static str; 6],
    pub values: [[Option<f64>; 6]; 6],
    /// Rows that had every feature present
    pub sample_count: usize,
}

impl CorrelationMatrix {
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.values[row][col]
    }
}

fn feature_vector(zone: &ZoneRecord) -> Option<[f64; 6]> {
    let values = [
        zone.forest_loss_pct?,
        zone.distance_to_forest,
        zone.urban_growth,
        zone.landuse_change,
        zone.no2_mine,
        zone.no2_forest,
    ];
    values.iter().all(|v| v.is_finite()).then_some(values)
}

/// Compute the correlation matrix, excluding rows with any missing feature
pub fn correlation_matrix(zones: &[ZoneRecord]) -> CorrelationMatrix {
    let rows: Vec<[f64; 6]> = zones.iter().filter_map(feature_vector).collect();
    let n = rows.len();
    let mut values = [[None; 6]; 6];

    if n >= 2 {
        let mut means = [0.0; 6];
        for row in &rows {
            for (mean, v) in means.iter_mut().zip(row) {
                *mean += v;
            }
        }
        for mean in &mut means {
            *mean /= n as f64;
        }

        // Exact comparison: a constant column whose mean is not representable
        // still leaves a tiny positive variance behind
        let mut constant = [false; 6];
        for (i, flag) in constant.iter_mut().enumerate() {
            *flag = rows.iter().all(|row| row[i] == rows[0][i]);
        }

        // Centered sums of products; the scale factor cancels in Pearson's r
        let mut sums = [[0.0; 6]; 6];
        for row in &rows {
            for i in 0..6 {
                for j in i..6 {
                    sums[i][j] += (row[i] - means[i]) * (row[j] - means[j]);
                }
            }
        }

        for i in 0..6 {
            for j in i..6 {
                let (var_i, var_j) = (sums[i][i], sums[j][j]);
                if constant[i] || constant[j] || var_i <= 0.0 || var_j <= 0.0 {
                    continue;
                }
                let r = if i == j {
                    1.0
                } else {
                    (sums[i][j] / (var_i.sqrt() * var_j.sqrt())).clamp(-1.0, 1.0)
                };
                values[i][j] = Some(r);
                values[j][i] = Some(r);
            }
        }
    }

    CorrelationMatrix {
        labels: FEATURES,
        values,
        sample_count: n,
    }
}
