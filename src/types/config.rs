use serde::{Deserialize, Serialize};

/// How densely axis labels are drawn across the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelDensity {
    /// Every cell shows both axis labels
    All,
    /// Only the bottom edge shows x labels and only the first column shows y labels
    Simple,
    /// No axis labels anywhere
    #[default]
    None,
}

/// Layout parameters edited by the config form.
///
/// Margins and spacing are percentages of the container. Every change to
/// any field regenerates the whole grid and resets cell state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Number of cells in the grid
    #[serde(alias = "dataLength")]
    pub cell_count: u32,
    /// Number of columns; rows are derived
    pub columns: u32,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
    /// Vertical gap between rows
    pub row_space: f64,
    /// Horizontal gap between columns
    pub column_space: f64,
    pub axis_show: bool,
    pub axis_tick_show: bool,
    /// Master switch for axis labels; `false` hides them in every `axis_label_type` mode
    pub axis_label_show: bool,
    pub axis_label_type: LabelDensity,
    pub split_line_show: bool,
    pub split_area_show: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_count: 20,
            columns: 6,
            top: 4.0,
            bottom: 1.0,
            left: 1.0,
            right: 1.0,
            row_space: 5.0,
            column_space: 2.0,
            axis_show: true,
            axis_tick_show: true,
            axis_label_show: true,
            axis_label_type: LabelDensity::None,
            split_line_show: false,
            split_area_show: false,
        }
    }
}

impl LayoutConfig {
    /// Row count, `ceil(cell_count / columns)`. Zero when `columns` is zero.
    pub fn rows(&self) -> u32 {
        if self.columns == 0 {
            return 0;
        }
        self.cell_count.div_ceil(self.columns)
    }

    /// Margin and spacing fields paired with their serialized names.
    pub(crate) fn spacing_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
            ("rowSpace", self.row_space),
            ("columnSpace", self.column_space),
        ]
    }
}
