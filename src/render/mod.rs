//! Render output for the charting surface.
//!
//! This module provides:
//! - The serializable chart option (titles, grids, axes, series)
//! - The color palette for selection and status marks
//! - Demo sample data
//! - The context-menu item list

pub mod colors;
pub mod option;
pub mod sample;

pub use colors::{palette, CssColor};
pub use option::{build_option, ChartOption};
pub use sample::random_series;

use serde::Serialize;

use crate::types::Status;

/// One action of the cell context menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    /// Shortcut shown in the right slot; also the value passed back to
    /// `apply_menu_status`
    pub key: &'static str,
    pub color: CssColor,
    pub status: Status,
}

/// Context-menu actions, one per status.
pub fn menu_items() -> Vec<MenuItem> {
    Status::ALL
        .into_iter()
        .map(|status| MenuItem {
            label: status.label(),
            key: status.shortcut(),
            color: status.background(),
            status,
        })
        .collect()
}
