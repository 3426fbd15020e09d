//! Coordinate conventions for drawing circular values.
//!
//! Values are stored in the mathematical convention (0 rad points east, counterclockwise). Renderers
//! that draw a clock face want 0 at north running clockwise. [`AngleTransformation`] maps between the
//! two as the last step before producing screen coordinates; it never touches stored values or
//! statistics.

use crate::circular::{normalize_radians, Circular, CircularKind};
use core::f64::consts::{FRAC_PI_2, TAU};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Convention used to turn an internal angle into a drawing angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleTransformation {
    /// 0 rad = east, counterclockwise.
    #[default]
    Math,
    /// 0 rad = north (12 o'clock), clockwise.
    Clock,
}

impl AngleTransformation {
    /// Map an internal angle in radians to a drawing angle in radians.
    pub fn transform(self, angle: f64) -> f64 {
        match self {
            AngleTransformation::Math => angle,
            AngleTransformation::Clock => normalize_radians(FRAC_PI_2 - angle, TAU),
        }
    }

    /// Drawing angle of a circular value.
    pub fn transform_circular<K: CircularKind>(self, value: Circular<K>) -> f64 {
        self.transform(value.radians())
    }

    /// Unit vector `(cos t, sin t)` of the transformed angle `t`.
    pub fn unit_vector(self, angle: f64) -> (f64, f64) {
        let (sin, cos) = self.transform(angle).sin_cos();
        (cos, sin)
    }
}

impl fmt::Display for AngleTransformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleTransformation::Math => write!(f, "math"),
            AngleTransformation::Clock => write!(f, "clock"),
        }
    }
}

impl FromStr for AngleTransformation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "math" => Ok(AngleTransformation::Math),
            "clock" => Ok(AngleTransformation::Clock),
            other => Err(format!(
                "Unknown transformation: {}. Use 'math' or 'clock'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circular::Angle;
    use approx::assert_abs_diff_eq;

    fn deg(d: f64) -> Angle {
        Angle::from_degrees(d).unwrap()
    }

    #[test]
    fn test_math_is_identity() {
        for d in [0.0, 90.0, 180.0, 270.0] {
            let a = deg(d);
            let t = Angle::from_radians(AngleTransformation::Math.transform_circular(a)).unwrap();
            assert_eq!(t, a);
        }
    }

    #[test]
    fn test_clock_rotates_and_mirrors() {
        let pairs = [(0.0, 90.0), (90.0, 0.0), (180.0, 270.0), (270.0, 180.0)];
        for (expected, input) in pairs {
            let t = AngleTransformation::Clock.transform(deg(input).radians());
            assert_eq!(Angle::from_radians(t).unwrap(), deg(expected));
        }
    }

    #[test]
    fn test_clock_stays_in_range() {
        for i in 0..360 {
            let t = AngleTransformation::Clock.transform(deg(i as f64).radians());
            assert!((0.0..TAU).contains(&t));
        }
    }

    #[test]
    fn test_unit_vector_clock_midnight_points_north() {
        let (x, y) = AngleTransformation::Clock.unit_vector(0.0);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("CLOCK".parse::<AngleTransformation>(), Ok(AngleTransformation::Clock));
        assert_eq!(AngleTransformation::Math.to_string(), "math");
        assert!("polar".parse::<AngleTransformation>().is_err());
    }
}
