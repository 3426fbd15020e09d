//! Circular statistics: mean direction, mean resultant length, variance and deviation.
//!
//! Every value is treated as a unit vector. With `C = Σ cos θᵢ` and `S = Σ sin θᵢ` over `n` values:
//!
//! | Statistic | Formula | Undefined when |
//! |---|---|---|
//! | mean resultant length `R̄` | `sqrt(C² + S²) / n` | `n = 0` |
//! | mean direction `μ` | `atan2(S, C)` | `n = 0` or `R̄ ≈ 0` |
//! | circular variance | `1 − R̄` | `n = 0` |
//! | circular standard deviation | `sqrt(−2 ln R̄)` | `n = 0` or `R̄ ≈ 0` |
//!
//! Axial values are doubled onto the full circle before summing; the mean direction is halved and
//! folded back into `[0, π)` afterwards.

use crate::circular::{normalize_radians, Circular, CircularKind, EPSILON};
use crate::error::{CircularError, CircularResult};
use core::f64::consts::TAU;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Resultant vector of a non-empty collection of circular values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularStatistics<K: CircularKind> {
    count: usize,
    sum_cos: f64,
    sum_sin: f64,
    kind: PhantomData<K>,
}

/// Serializable snapshot of the statistics of one collection.
///
/// Statistics that are undefined for the collection are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularSummary {
    pub kind: String,
    pub count: usize,
    pub mean_direction_rad: Option<f64>,
    pub mean_direction_deg: Option<f64>,
    pub mean_resultant_length: f64,
    pub circular_variance: f64,
    pub circular_std_dev: Option<f64>,
}

impl<K: CircularKind> CircularStatistics<K> {
    /// Sum the unit vectors of `values`.
    ///
    /// # Errors
    /// [`CircularError::InvalidCircularOperation`] if `values` is empty.
    pub fn compute(values: &[Circular<K>]) -> CircularResult<Self> {
        if values.is_empty() {
            return Err(CircularError::InvalidCircularOperation(format!(
                "Cannot compute statistics of an empty {} collection",
                K::NAME
            )));
        }

        let (sum_cos, sum_sin) = values.iter().fold((0.0, 0.0), |(c, s), value| {
            let (sin, cos) = (value.radians() * K::STATISTICS_FACTOR).sin_cos();
            (c + cos, s + sin)
        });

        debug!(
            "Resultant of {} {} values: C={:.6}, S={:.6}",
            values.len(),
            K::NAME,
            sum_cos,
            sum_sin
        );

        Ok(Self {
            count: values.len(),
            sum_cos,
            sum_sin,
            kind: PhantomData,
        })
    }

    /// Number of values the statistics were computed over.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The `(C, S)` sums of cosines and sines.
    pub fn resultant(&self) -> (f64, f64) {
        (self.sum_cos, self.sum_sin)
    }

    /// Mean resultant length `R̄` in `[0, 1]`.
    pub fn mean_resultant_length(&self) -> f64 {
        (self.sum_cos.hypot(self.sum_sin) / self.count as f64).clamp(0.0, 1.0)
    }

    /// Mean direction, folded into the range of `K`.
    ///
    /// # Errors
    /// [`CircularError::InvalidCircularOperation`] if the resultant length is numerically zero and the
    /// direction is therefore indeterminate.
    pub fn mean_direction(&self) -> CircularResult<Circular<K>> {
        self.ensure_resultant("mean direction")?;
        let full_circle = normalize_radians(self.sum_sin.atan2(self.sum_cos), TAU);
        Circular::from_radians(full_circle / K::STATISTICS_FACTOR)
    }

    /// Circular variance `1 − R̄` in `[0, 1]`.
    pub fn circular_variance(&self) -> f64 {
        1.0 - self.mean_resultant_length()
    }

    /// Circular standard deviation `sqrt(−2 ln R̄)` in radians.
    ///
    /// # Errors
    /// [`CircularError::InvalidCircularOperation`] if the resultant length is numerically zero.
    pub fn circular_standard_deviation(&self) -> CircularResult<f64> {
        let r = self.ensure_resultant("circular standard deviation")?;
        Ok((-2.0 * r.ln()).max(0.0).sqrt())
    }

    /// Snapshot of all statistics, with undefined ones left as `None`.
    pub fn summary(&self) -> CircularSummary {
        let mean = self.mean_direction().ok();
        if mean.is_none() {
            warn!(
                "Mean direction of {} {} values is indeterminate (R={:.3e})",
                self.count,
                K::NAME,
                self.mean_resultant_length()
            );
        }

        CircularSummary {
            kind: K::NAME.to_string(),
            count: self.count,
            mean_direction_rad: mean.map(|m| m.radians()),
            mean_direction_deg: mean.map(|m| m.degrees()),
            mean_resultant_length: self.mean_resultant_length(),
            circular_variance: self.circular_variance(),
            circular_std_dev: self.circular_standard_deviation().ok(),
        }
    }

    fn ensure_resultant(&self, what: &str) -> CircularResult<f64> {
        let r = self.mean_resultant_length();
        if r < EPSILON {
            return Err(CircularError::InvalidCircularOperation(format!(
                "The {} of {} {} values is undefined: mean resultant length is {:e}",
                what,
                self.count,
                K::NAME,
                r
            )));
        }
        Ok(r)
    }
}

/// Mean direction of `values`.
pub fn mean_direction<K: CircularKind>(values: &[Circular<K>]) -> CircularResult<Circular<K>> {
    CircularStatistics::compute(values)?.mean_direction()
}

/// Mean resultant length of `values`.
pub fn mean_resultant_length<K: CircularKind>(values: &[Circular<K>]) -> CircularResult<f64> {
    Ok(CircularStatistics::compute(values)?.mean_resultant_length())
}

/// Circular variance of `values`.
pub fn circular_variance<K: CircularKind>(values: &[Circular<K>]) -> CircularResult<f64> {
    Ok(CircularStatistics::compute(values)?.circular_variance())
}

/// Circular standard deviation of `values`.
pub fn circular_standard_deviation<K: CircularKind>(values: &[Circular<K>]) -> CircularResult<f64> {
    CircularStatistics::compute(values)?.circular_standard_deviation()
}
