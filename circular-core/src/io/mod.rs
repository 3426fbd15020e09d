//! Loading circular data from plain text.
//!
//! The text format is line oriented: lines beginning with `#` are comments, every other line holds
//! whitespace-separated tokens. Clock data uses `HH.MM` tokens (→ [`Angle`](crate::Angle)), axial
//! data uses decimal degrees (→ [`Axis`](crate::Axis)).
//!
//! # Example
//!
//! ```no_run
//! use circular_core::io::DataLoader;
//! use std::path::Path;
//!
//! let times = DataLoader::load_angles_from_file(Path::new("data/D01"))
//!     .expect("Failed to load");
//! println!("Loaded {} clock times", times.len());
//! ```

pub mod loaders;


pub use loaders::{format_hour_minute_data, load_axis_data, load_hour_minute_data, DataLoader};
