//! # U-Bundle CLI
//!
//! Input handling and reporting for the `bundle-runner` binary.

pub mod input;
pub mod report;

pub use input::{effective_scale, parse_radii, read_radii, InputError};
pub use report::{BundleReport, CircleRow};
