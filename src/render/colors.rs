//! Colors used by the chart grid.
//!
//! Plain CSS color strings, handed straight to the charting library.

/// A CSS color string (e.g., "#1890ff", "#ffffff00")
pub type CssColor = &'static str;

/// Grid color palette
pub mod palette {
    /// Container background behind all cells
    pub const CANVAS_BACKGROUND: &str = "#eee";

    /// Border of an unselected cell (fully transparent)
    pub const DEFAULT_BORDER: &str = "#ffffff00";

    /// Border of a selected cell
    pub const SELECTED_BORDER: &str = "#1890ff";

    /// Background of a cell without a status
    pub const DEFAULT_BACKGROUND: &str = "#fff";

    pub const SUCCESS_BACKGROUND: &str = "#9bff9a";
    pub const ERROR_BACKGROUND: &str = "#ffa4a6";
    pub const WARNING_BACKGROUND: &str = "#ffdf9e";
}

/// Border width (px) of every cell frame
pub const CELL_BORDER_WIDTH: u32 = 4;
