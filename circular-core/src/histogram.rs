//! Fixed-width angular binning of circular values.
//!
//! Bins start at `0, w, 2w, …` and cover the period of the value kind. Bin starts are generated while
//! `start < PERIOD` and `|start − PERIOD| > EPSILON`, so a width that divides the period never yields an
//! empty trailing bin, while a width that does not divide it yields one final, partially covered bin.

use crate::circular::{Circular, CircularKind, EPSILON};
use crate::error::{CircularError, CircularResult};
use core::f64::consts::PI;
use log::debug;
use serde::Serialize;

/// Default bin width: 15° (one hour on a 24-hour clock).
pub const DEFAULT_BIN_WIDTH: f64 = PI / 12.0;

/// Values falling into `[radians_start, radians_start + width)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bin<K: CircularKind> {
    radians_start: f64,
    data: Vec<Circular<K>>,
}

impl<K: CircularKind> Bin<K> {
    pub fn radians_start(&self) -> f64 {
        self.radians_start
    }

    pub fn data(&self) -> &[Circular<K>] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A histogram of circular values of kind `K`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram<K: CircularKind> {
    bin_width: f64,
    total_count: usize,
    bins: Vec<Bin<K>>,
}

/// Index of the bin holding `radians`.
///
/// Values within `EPSILON` below a boundary belong to the upper bin; values within `EPSILON` below
/// the period wrap to the first bin.
fn bin_index(radians: f64, bin_width: f64, bin_count: usize, period: f64) -> usize {
    let index = ((radians + EPSILON) / bin_width).floor() as usize;
    if index < bin_count {
        index
    } else if period - radians <= EPSILON {
        0
    } else {
        bin_count - 1
    }
}

impl<K: CircularKind> Histogram<K> {
    /// Bin `values` into sectors of `bin_width` radians.
    ///
    /// # Arguments
    /// * `values` - Values to bin; any order, duplicates allowed
    /// * `bin_width` - Sector width in radians, `0 < bin_width ≤ PERIOD`
    ///
    /// # Returns
    /// * `Ok(Histogram)` holding every value in exactly one bin
    /// * `Err(CircularError::InvalidCircularValue)` if `bin_width` is not finite or out of range
    pub fn new(values: &[Circular<K>], bin_width: f64) -> CircularResult<Self> {
        if !bin_width.is_finite() || bin_width <= 0.0 || bin_width > K::PERIOD {
            return Err(CircularError::InvalidCircularValue(format!(
                "Bin width must be in range (0..{}] for {} values and not: {}",
                K::PERIOD,
                K::NAME,
                bin_width
            )));
        }

        let starts: Vec<f64> = (0u32..)
            .map(|i| i as f64 * bin_width)
            .take_while(|start| *start < K::PERIOD && (start - K::PERIOD).abs() > EPSILON)
            .collect();

        let mut data: Vec<Vec<Circular<K>>> = vec![Vec::new(); starts.len()];
        for value in values {
            let index = bin_index(value.radians(), bin_width, starts.len(), K::PERIOD);
            data[index].push(*value);
        }

        let bins: Vec<Bin<K>> = starts
            .into_iter()
            .zip(data)
            .map(|(radians_start, data)| Bin {
                radians_start,
                data,
            })
            .collect();

        debug!(
            "Binned {} {} values into {} bins of {:.4} rad",
            values.len(),
            K::NAME,
            bins.len(),
            bin_width
        );

        Ok(Self {
            bin_width,
            total_count: values.len(),
            bins,
        })
    }

    /// Histogram with the default 15° bin width.
    pub fn with_default_width(values: &[Circular<K>]) -> CircularResult<Self> {
        Self::new(values, DEFAULT_BIN_WIDTH)
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn bins(&self) -> &[Bin<K>] {
        &self.bins
    }

    /// Number of values binned.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Bin starting at `radians_start` (matched within `EPSILON`).
    pub fn bin(&self, radians_start: f64) -> Option<&Bin<K>> {
        self.bins
            .iter()
            .find(|bin| (bin.radians_start - radians_start).abs() < EPSILON)
    }

    /// Number of values in the bin starting at `radians_start`; 0 if there is no such bin.
    pub fn bin_size(&self, radians_start: f64) -> usize {
        self.bin(radians_start).map_or(0, Bin::len)
    }

    /// End of `bin`, capped at the period for a partially covered final bin.
    pub fn bin_end(&self, bin: &Bin<K>) -> f64 {
        (bin.radians_start + self.bin_width).min(K::PERIOD)
    }

    /// Share of all values in the bin starting at `radians_start`.
    pub fn frequency(&self, radians_start: f64) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        self.bin_size(radians_start) as f64 / self.total_count as f64
    }

    /// Largest bin frequency, 0 for an empty histogram.
    pub fn max_frequency(&self) -> f64 {
        self.bins
            .iter()
            .map(|bin| self.frequency(bin.radians_start))
            .fold(0.0, f64::max)
    }
}
