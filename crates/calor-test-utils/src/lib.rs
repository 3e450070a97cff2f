//! Test utilities for Calor development.

#![forbid(unsafe_code)]

mod fixtures;

pub use fixtures::{assert_close, assert_slices_close, hot_center_grid, ramp_grid, uniform_grid};
