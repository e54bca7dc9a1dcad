//! Common utilities module
//!
//! This module contains shared utilities used across the preset pipeline.

pub mod error;
pub mod range;

pub use error::{PresetError, Result};
pub use range::IntensityRange;
