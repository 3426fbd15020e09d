//! Clock-time representation of directional values.
//!
//! A 24-hour day is mapped onto the full circle: `m` minutes after midnight is the angle
//! `2π · m / 1440`. Times are written as `HH.MM` strings (e.g. `"02.40"`).

use super::{Angle, Circular, Directional};
use crate::error::{CircularError, CircularResult};
use chrono::{NaiveTime, Timelike};
use core::f64::consts::TAU;
use std::marker::PhantomData;
use std::str::FromStr;

/// Minutes in a day.
pub const MINUTES_IN_DAY: i64 = 24 * 60;

const SECONDS_IN_DAY: u32 = 24 * 60 * 60;

fn format_error(input: &str) -> CircularError {
    CircularError::InvalidVectorFormat(format!(
        "Required format is HH.MM eg. 02.40. The input given was: {}",
        input
    ))
}

impl Circular<Directional> {
    /// Parse a `HH.MM` string as a position on a 24-hour clock.
    ///
    /// # Arguments
    /// * `hour_minute` - String in format `HH.MM`
    ///
    /// # Returns
    /// * `Ok(Angle)` equal to `2π · (60·HH + MM) / 1440`
    /// * `Err(CircularError::InvalidVectorFormat)` if the string is not two integers joined by `.`
    /// * `Err(CircularError::InvalidCircularValue)` if the time falls outside `[0, 2π)`,
    ///   e.g. `"24.00"` or `"-01.00"`
    pub fn from_clock_str(hour_minute: &str) -> CircularResult<Self> {
        let mut parts = hour_minute.split('.');
        let (hours, minutes) = match (parts.next(), parts.next(), parts.next()) {
            (Some(h), Some(m), None) => (h, m),
            _ => return Err(format_error(hour_minute)),
        };

        let hours: i64 = hours.parse().map_err(|_| format_error(hour_minute))?;
        let minutes: i64 = minutes.parse().map_err(|_| format_error(hour_minute))?;
        let total = hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .ok_or_else(|| {
                CircularError::InvalidCircularValue(format!(
                    "Clock time out of range: {}",
                    hour_minute
                ))
            })?;

        Self::try_from_radians(TAU * total as f64 / MINUTES_IN_DAY as f64)
    }

    /// Angle of the given minute of the day; minutes are taken modulo 1440.
    pub fn from_minutes(minutes: i64) -> Self {
        let minutes = minutes.rem_euclid(MINUTES_IN_DAY);
        Self {
            radians: TAU * minutes as f64 / MINUTES_IN_DAY as f64,
            kind: PhantomData,
        }
    }

    /// Minute of the day this angle points at, rounded to the nearest minute.
    pub fn minutes(self) -> u32 {
        let minutes = (self.radians * MINUTES_IN_DAY as f64 / TAU).round() as i64;
        minutes.rem_euclid(MINUTES_IN_DAY) as u32
    }

    /// Format as a `HH.MM` clock string.
    pub fn to_clock_string(self) -> String {
        let minutes = self.minutes();
        format!("{:02}.{:02}", minutes / 60, minutes % 60)
    }

    /// Angle of a wall-clock time. Sub-second precision is dropped.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        let seconds = time.num_seconds_from_midnight() % SECONDS_IN_DAY;
        Self {
            radians: TAU * seconds as f64 / SECONDS_IN_DAY as f64,
            kind: PhantomData,
        }
    }

    /// Wall-clock time this angle points at, rounded to the nearest second.
    pub fn to_naive_time(self) -> CircularResult<NaiveTime> {
        let seconds = (self.radians * SECONDS_IN_DAY as f64 / TAU).round() as u32 % SECONDS_IN_DAY;
        NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).ok_or_else(|| {
            CircularError::InvalidCircularValue(format!(
                "Cannot convert {} to a time of day",
                self
            ))
        })
    }
}

impl FromStr for Angle {
    type Err = CircularError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_clock_str(s)
    }
}
