//! Grid layout computation and pixel mapping.

pub mod grid_layout;
pub mod pixels;

pub use grid_layout::{generate, AxisSpec, CellLabel, GridLayout};
pub use pixels::{cells_in_rect, hit_test, rects_intersect, to_pixels};
