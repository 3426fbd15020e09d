use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

use crate::circular::{Angle, Axis};
use crate::error::{CircularError, CircularResult};

/// Tokens of all non-comment lines.
fn data_tokens(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
}

/// Parse `HH.MM` tokens into clock angles.
///
/// # Arguments
/// * `content` - Text with `#` comment lines and whitespace-separated `HH.MM` tokens
///
/// # Returns
/// * `Ok(Vec<Angle>)` in input order
/// * `Err(CircularError)` for the first malformed or out-of-range token
pub fn load_hour_minute_data(content: &str) -> CircularResult<Vec<Angle>> {
    data_tokens(content).map(Angle::from_clock_str).collect()
}

/// Parse decimal degree tokens into axes.
///
/// # Arguments
/// * `content` - Text with `#` comment lines and whitespace-separated degree values
///
/// # Returns
/// * `Ok(Vec<Axis>)` in input order, each folded into `[0°, 180°)`
/// * `Err(CircularError::InvalidVectorFormat)` for a non-numeric token
/// * `Err(CircularError::InvalidCircularValue)` for a non-finite value
pub fn load_axis_data(content: &str) -> CircularResult<Vec<Axis>> {
    data_tokens(content)
        .map(|token| {
            let degrees: f64 = token.parse().map_err(|_| {
                CircularError::InvalidVectorFormat(format!(
                    "Required format is a decimal number of degrees. The input given was: {}",
                    token
                ))
            })?;
            Axis::from_degrees(degrees)
        })
        .collect()
}

/// Write clock angles as `HH.MM` tokens, one per line.
///
/// The output parses back with [`load_hour_minute_data`] to the same minutes of the day.
pub fn format_hour_minute_data(values: &[Angle]) -> String {
    values
        .iter()
        .map(|value| value.to_clock_string() + "\n")
        .collect()
}

/// File-level interface for loading circular data
pub struct DataLoader;

impl DataLoader {
    /// Load clock times from a file of `HH.MM` tokens
    pub fn load_angles_from_file(path: &Path) -> Result<Vec<Angle>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read clock data from {}", path.display()))?;
        let values = load_hour_minute_data(&content)
            .with_context(|| format!("Failed to parse clock data in {}", path.display()))?;

        info!("Loaded {} clock times from {}", values.len(), path.display());
        Ok(values)
    }

    /// Load axes from a file of decimal degree tokens
    pub fn load_axes_from_file(path: &Path) -> Result<Vec<Axis>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read axis data from {}", path.display()))?;
        let values = load_axis_data(&content)
            .with_context(|| format!("Failed to parse axis data in {}", path.display()))?;

        info!("Loaded {} axes from {}", values.len(), path.display());
        Ok(values)
    }

    /// Write clock times to a file as `HH.MM` tokens
    pub fn save_angles_to_file(path: &Path, values: &[Angle]) -> Result<()> {
        fs::write(path, format_hour_minute_data(values))
            .with_context(|| format!("Failed to write clock data to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_hour_minute_data_skips_comments() {
        let content = "# measured arrival times\n02.40 03.15\n\n# trailing comment\n23.59\n";
        let values = load_hour_minute_data(content).unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].to_clock_string(), "02.40");
        assert_eq!(values[2].to_clock_string(), "23.59");
    }
}
