//! One-call analysis of a collection of circular values.
//!
//! [`analyze`] computes the statistics summary and the histogram of a collection and lays out what a
//! renderer needs: per-value drawing angles and per-bin sectors, all already passed through the
//! configured [`AngleTransformation`]. Axial bins are emitted twice, once as-is and once rotated by
//! `π`, since an axis points both ways.

use crate::circular::{Circular, CircularKind};
use crate::config::AnalysisConfig;
use crate::error::CircularResult;
use crate::histogram::Histogram;
use crate::statistics::{CircularStatistics, CircularSummary};
use crate::transformation::AngleTransformation;
use core::f64::consts::TAU;
use log::info;
use serde::Serialize;

/// A single value prepared for drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPoint {
    pub radians: f64,
    pub degrees: f64,
    /// Drawing angle after the transformation.
    pub angle: f64,
}

/// A histogram sector prepared for drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBin {
    pub start_deg: f64,
    pub end_deg: f64,
    pub count: usize,
    pub frequency: f64,
    /// Drawing angles of the sector edges after the transformation.
    pub start_angle: f64,
    pub end_angle: f64,
    /// Whether this is the opposite copy of an axial sector.
    pub mirrored: bool,
}

/// Everything a renderer needs for one collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub summary: CircularSummary,
    pub transformation: AngleTransformation,
    pub bin_width_deg: f64,
    pub max_frequency: f64,
    pub points: Vec<RenderPoint>,
    pub bins: Vec<RenderBin>,
}

impl AnalysisReport {
    /// Pretty-printed JSON form of the report.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Analyze `values` with the histogram and rendering settings of `config`.
///
/// # Errors
/// * [`CircularError::InvalidCircularOperation`](crate::CircularError::InvalidCircularOperation)
///   if `values` is empty
/// * [`CircularError::InvalidCircularValue`](crate::CircularError::InvalidCircularValue) if the
///   configured bin width does not fit the period of `K`
pub fn analyze<K: CircularKind>(
    values: &[Circular<K>],
    config: &AnalysisConfig,
) -> CircularResult<AnalysisReport> {
    let transformation = config.render.transformation;
    let summary = CircularStatistics::compute(values)?.summary();
    let histogram = Histogram::new(values, config.bin_width_radians())?;

    let points = values
        .iter()
        .map(|value| RenderPoint {
            radians: value.radians(),
            degrees: value.degrees(),
            angle: transformation.transform_circular(*value),
        })
        .collect();

    // number of times the period fits into the full circle: 1 for angles, 2 for axes
    let copies = (TAU / K::PERIOD).round() as usize;
    let mut bins = Vec::with_capacity(histogram.bins().len() * copies);
    for copy in 0..copies {
        let offset = copy as f64 * K::PERIOD;
        for bin in histogram.bins() {
            let start = bin.radians_start() + offset;
            let end = histogram.bin_end(bin) + offset;
            bins.push(RenderBin {
                start_deg: start.to_degrees(),
                end_deg: end.to_degrees(),
                count: bin.len(),
                frequency: histogram.frequency(bin.radians_start()),
                start_angle: transformation.transform(start),
                end_angle: transformation.transform(end),
                mirrored: copy > 0,
            });
        }
    }

    info!(
        "Analyzed {} {} values: R={:.3}, {} sectors",
        values.len(),
        K::NAME,
        summary.mean_resultant_length,
        bins.len()
    );

    Ok(AnalysisReport {
        summary,
        transformation,
        bin_width_deg: config.histogram.bin_width_deg,
        max_frequency: histogram.max_frequency(),
        points,
        bins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circular::{Angle, Axis};
    use crate::error::CircularError;
    use approx::assert_abs_diff_eq;

    fn clock_config() -> AnalysisConfig {
        AnalysisConfig::from_toml_str("[render]\ntransformation = \"clock\"\n").unwrap()
    }

    #[test]
    fn test_analyze_clock_times() {
        let values: Vec<Angle> = ["06.00", "06.00", "18.00"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let report = analyze(&values, &clock_config()).unwrap();

        assert_eq!(report.summary.count, 3);
        assert_eq!(report.bins.len(), 24);
        assert!(report.bins.iter().all(|b| !b.mirrored));
        assert_eq!(report.bins.iter().map(|b| b.count).sum::<usize>(), 3);
        assert_abs_diff_eq!(report.max_frequency, 2.0 / 3.0, epsilon = 1e-12);

        // 06.00 is east on a clock face: 0 rad in the drawing convention
        assert_abs_diff_eq!(report.points[0].angle, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(report.points[0].degrees, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_analyze_axes_mirrors_sectors() {
        let values: Vec<Axis> = [10.0, 20.0, 100.0]
            .iter()
            .map(|d| Axis::from_degrees(*d).unwrap())
            .collect();
        let report = analyze(&values, &AnalysisConfig::default()).unwrap();

        assert_eq!(report.bins.len(), 24);
        assert_eq!(report.bins.iter().filter(|b| b.mirrored).count(), 12);
        let mirrored_first = report.bins.iter().find(|b| b.mirrored).unwrap();
        assert_abs_diff_eq!(mirrored_first.start_deg, 180.0, epsilon = 1e-9);
        assert_eq!(mirrored_first.count, report.bins[0].count);
    }

    #[test]
    fn test_analyze_empty_fails() {
        let values: Vec<Angle> = Vec::new();
        let result = analyze(&values, &AnalysisConfig::default());
        assert!(matches!(
            result,
            Err(CircularError::InvalidCircularOperation(_))
        ));
    }

    #[test]
    fn test_report_to_json() {
        let values = vec![Angle::from_degrees(45.0).unwrap()];
        let report = analyze(&values, &AnalysisConfig::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["transformation"], "math");
        assert_eq!(json["summary"]["kind"], "angle");
        assert_eq!(json["bins"].as_array().unwrap().len(), 24);
    }
}
