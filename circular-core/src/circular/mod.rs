//! Circular (periodic) values.
//!
//! This module defines [`Circular<K>`], a normalized radian value that wraps around the period of its
//! **kind** `K`, and the closed set of kinds it can take:
//!
//! * [`Directional`] — range `[0, 2π)`. A ray: direction matters (clock times, bearings).
//! * [`Axial`] — range `[0, π)`. A line: `θ` and `θ + π` describe the same axis.
//!
//! The aliases [`Angle`] and [`Axis`] name the two concrete value types.
//!
//! # Design overview
//!
//! * **Kinds as markers:** each kind is a zero-sized type implementing the sealed [`CircularKind`] trait,
//!   which supplies the period, the factor used to map the kind onto the full circle for statistics, and
//!   a display name. All arithmetic is written once, generically, on `Circular<K>`.
//! * **Always valid:** there is no NaN-bearing "invalid" instance. Constructors reject NaN and `±∞`
//!   with [`CircularError::InvalidCircularValue`]; use `Option<Circular<K>>` where a value may be absent.
//! * **Tolerant equality:** two values compare equal when their radians differ by less than [`EPSILON`],
//!   so normalization rounding never breaks equality.
//!
//! # Examples
//!
//! ```rust
//! use circular_core::{Angle, Axis, ValueType};
//!
//! let a = Angle::new(370.0, ValueType::Degrees).unwrap();
//! assert!((a.degrees() - 10.0).abs() < 1e-9);
//!
//! let b = Axis::new(190.0, ValueType::Degrees).unwrap();
//! assert!((b.degrees() - 10.0).abs() < 1e-9);
//! ```

pub mod clock;


use crate::error::{CircularError, CircularResult};
use core::f64::consts::{PI, TAU};
use qtty::{Degree, Degrees, Radian, Radians};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Tolerance for equality of circular values and for matching bin boundaries.
pub const EPSILON: f64 = 1e-10;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Directional {}
    impl Sealed for super::Axial {}
}

/// The closed set of circular kinds.
///
/// Implemented only by [`Directional`] and [`Axial`].
pub trait CircularKind:
    sealed::Sealed + Copy + fmt::Debug + PartialEq + Send + Sync + 'static
{
    /// Length of the period in radians; valid values lie in `[0, PERIOD)`.
    const PERIOD: f64;
    /// Multiplier mapping a value of this kind onto the full circle for statistics.
    const STATISTICS_FACTOR: f64;
    /// Human readable name of the kind.
    const NAME: &'static str;
}

/// Marker for values where direction matters, range `[0, 2π)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Directional;

/// Marker for direction-agnostic values, range `[0, π)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axial;

impl CircularKind for Directional {
    const PERIOD: f64 = TAU;
    const STATISTICS_FACTOR: f64 = 1.0;
    const NAME: &'static str = "angle";
}

impl CircularKind for Axial {
    const PERIOD: f64 = PI;
    // axial data is doubled onto the full circle
    const STATISTICS_FACTOR: f64 = 2.0;
    const NAME: &'static str = "axis";
}

/// Unit of a raw numeric value handed to [`Circular::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Radians,
    Degrees,
}

impl ValueType {
    /// Convert a raw value in this unit to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            ValueType::Radians => value,
            ValueType::Degrees => Degrees::new(value).to::<Radian>().value(),
        }
    }
}

/// A normalized circular value of kind `K`.
#[derive(Clone, Copy)]
pub struct Circular<K: CircularKind> {
    radians: f64,
    kind: PhantomData<K>,
}

/// A directional circular value in `[0, 2π)`.
pub type Angle = Circular<Directional>;

/// An axial circular value in `[0, π)`.
pub type Axis = Circular<Axial>;

/// Fold `radians` into `[0, period)` using the Euclidean remainder.
///
/// NaN and `±∞` produce NaN.
#[inline]
pub fn normalize_radians(radians: f64, period: f64) -> f64 {
    let r = radians.rem_euclid(period);
    // rem_euclid rounds tiny negative inputs up to `period` itself
    if r >= period {
        r - period
    } else {
        r
    }
}

/// Shortest distance between two raw radian values on a circle of the given period.
///
/// The result lies in `[0, period / 2]` when both inputs are in `[0, period)`.
#[inline]
pub fn subtract_radians(radians_a: f64, radians_b: f64, period: f64) -> f64 {
    let d = (radians_a - radians_b).abs();
    d.min(period - d)
}

impl<K: CircularKind> Circular<K> {
    /// The value at zero radians.
    pub const ZERO: Self = Self {
        radians: 0.0,
        kind: PhantomData,
    };

    /// Length of the period of this kind in radians.
    pub const PERIOD: f64 = K::PERIOD;

    /// Create a value from a number in the given unit, folding it into `[0, PERIOD)`.
    ///
    /// Values arbitrarily far outside the range are folded by whole periods.
    ///
    /// # Errors
    /// [`CircularError::InvalidCircularValue`] if the value is NaN or infinite.
    pub fn new(value: f64, unit: ValueType) -> CircularResult<Self> {
        let radians = normalize_radians(unit.to_radians(value), K::PERIOD);
        if !radians.is_finite() {
            return Err(CircularError::InvalidCircularValue(format!(
                "An {} value must be a finite number and not: {}",
                K::NAME,
                value
            )));
        }
        Ok(Self {
            radians,
            kind: PhantomData,
        })
    }

    /// Shorthand for `Circular::new(radians, ValueType::Radians)`.
    pub fn from_radians(radians: f64) -> CircularResult<Self> {
        Self::new(radians, ValueType::Radians)
    }

    /// Shorthand for `Circular::new(degrees, ValueType::Degrees)`.
    pub fn from_degrees(degrees: f64) -> CircularResult<Self> {
        Self::new(degrees, ValueType::Degrees)
    }

    /// Create a value from radians that must already lie in `[0, PERIOD)`.
    ///
    /// # Errors
    /// [`CircularError::InvalidCircularValue`] if the value is not finite or outside the range.
    pub fn try_from_radians(radians: f64) -> CircularResult<Self> {
        if !radians.is_finite() || !(0.0..K::PERIOD).contains(&radians) {
            return Err(CircularError::InvalidCircularValue(format!(
                "An {} value must be in range [0..{}) and not: {}",
                K::NAME,
                K::PERIOD,
                radians
            )));
        }
        Ok(Self {
            radians,
            kind: PhantomData,
        })
    }

    /// Value in radians, in `[0, PERIOD)`.
    #[inline]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    /// Value in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        Radians::new(self.radians).to::<Degree>().value()
    }

    /// Shortest angular distance to `other`, in `[0, PERIOD / 2]`.
    ///
    /// Symmetric: `a.subtract(b) == b.subtract(a)`.
    pub fn subtract(self, other: Self) -> Self {
        Self {
            radians: subtract_radians(self.radians, other.radians, K::PERIOD),
            kind: PhantomData,
        }
    }

    /// Scale the value by `n` and wrap the product back into `[0, PERIOD)`.
    ///
    /// # Errors
    /// [`CircularError::InvalidCircularValue`] if the product is not finite.
    pub fn multiply(self, n: f64) -> CircularResult<Self> {
        Self::from_radians(self.radians * n)
    }

    /// Sine and cosine of the value.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.radians.sin_cos()
    }
}

impl<K: CircularKind> PartialEq for Circular<K> {
    fn eq(&self, other: &Self) -> bool {
        (self.radians - other.radians).abs() < EPSILON
    }
}

impl<K: CircularKind> PartialOrd for Circular<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.radians.partial_cmp(&other.radians)
        }
    }
}

impl<K: CircularKind> std::ops::Sub for Circular<K> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl<K: CircularKind> fmt::Debug for Circular<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circular")
            .field("kind", &K::NAME)
            .field("radians", &self.radians)
            .finish()
    }
}

impl<K: CircularKind> fmt::Display for Circular<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}°", self.degrees())
    }
}

impl<K: CircularKind> Serialize for Circular<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.radians)
    }
}

impl<'de, K: CircularKind> Deserialize<'de> for Circular<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let radians = f64::deserialize(deserializer)?;
        Self::try_from_radians(radians).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_period_constants() {
        assert_abs_diff_eq!(Angle::PERIOD, TAU, epsilon = 1e-12);
        assert_abs_diff_eq!(Axis::PERIOD, PI, epsilon = 1e-12);
        assert_eq!(Directional::STATISTICS_FACTOR, 1.0);
        assert_eq!(Axial::STATISTICS_FACTOR, 2.0);
    }

    #[test]
    fn test_value_type_conversion() {
        assert_abs_diff_eq!(ValueType::Degrees.to_radians(180.0), PI, epsilon = 1e-12);
        assert_eq!(ValueType::Radians.to_radians(1.5), 1.5);
    }

    #[test]
    fn test_normalize_radians_tiny_negative() {
        let r = normalize_radians(-1e-18, TAU);
        assert!((0.0..TAU).contains(&r));
    }

    #[test]
    fn test_subtract_radians_wraps() {
        assert_abs_diff_eq!(subtract_radians(0.1, TAU - 0.1, TAU), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(subtract_radians(0.1, PI - 0.1, PI), 0.2, epsilon = 1e-12);
    }
}
