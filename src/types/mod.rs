//! Data types for the chart grid.

mod cell;
mod config;
mod geometry;

pub use cell::*;
pub use config::*;
pub use geometry::*;
