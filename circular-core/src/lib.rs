//! Circular Core - statistics and binning for periodic quantities
//!
//! Clock times, compass bearings and orientation axes wrap around a fixed period. This crate models
//! them as normalized [`Circular`] values and computes wraparound-aware statistics and histograms.
//!
//! # Modules
//!
//! - [`circular`]: the [`Angle`] / [`Axis`] value types and `HH.MM` clock strings
//! - [`transformation`]: math and clock drawing conventions
//! - [`statistics`]: mean direction, mean resultant length, circular variance and deviation
//! - [`histogram`]: fixed-width angular bins
//! - [`io`]: the plain text data format
//! - [`config`]: TOML analysis settings
//! - [`analysis`]: statistics + histogram laid out for a renderer
//!
//! # Example
//!
//! ```rust
//! use circular_core::{io::load_hour_minute_data, CircularStatistics, Histogram};
//!
//! let times = load_hour_minute_data("# arrivals\n23.30 00.30 00.00\n").unwrap();
//! let stats = CircularStatistics::compute(&times).unwrap();
//! assert_eq!(stats.mean_direction().unwrap().to_clock_string(), "00.00");
//!
//! let histogram = Histogram::with_default_width(&times).unwrap();
//! assert_eq!(histogram.bin_size(0.0), 2);
//! ```

pub mod analysis;
pub mod circular;
pub mod config;
pub mod error;
pub mod histogram;
pub mod io;
pub mod statistics;
pub mod transformation;

pub use analysis::{analyze, AnalysisReport, RenderBin, RenderPoint};
pub use circular::{Angle, Axial, Axis, Circular, CircularKind, Directional, ValueType, EPSILON};
pub use config::AnalysisConfig;
pub use error::{CircularError, CircularResult, ConfigError};
pub use histogram::{Bin, Histogram, DEFAULT_BIN_WIDTH};
pub use statistics::{CircularStatistics, CircularSummary};
pub use transformation::AngleTransformation;
