//! Percentage geometry for an N-cell chart grid.
//!
//! Cells are laid out row-major. Every cell is an independent mini-chart
//! with its own title label and axis pair, so this module also derives
//! which axis labels are visible under each [`LabelDensity`].

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::types::{CellGeometry, LabelDensity, LayoutConfig};

/// Horizontal label inset (percent) for cells that draw a y-axis label.
pub const LABEL_LEFT_OFFSET: f64 = 1.5;

/// Vertical label offset (percent) placing the title just above its cell.
pub const LABEL_TOP_OFFSET: f64 = -3.0;

/// Fixed value range shared by every axis.
pub const AXIS_MIN: f64 = 0.0;
pub const AXIS_MAX: f64 = 20.0;

/// Label color for x-axis labels that only reserve space.
pub const HIDDEN_LABEL_COLOR: &str = "#ffffff00";

/// Title label drawn above a cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellLabel {
    /// `"{row}-{col}"`
    pub text: String,
    pub row: u32,
    pub col: u32,
    /// Percent from the container's left edge
    pub left: f64,
    /// Percent from the container's top edge
    pub top: f64,
}

/// Configuration of one axis of one cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpec {
    pub grid_index: usize,
    pub min: f64,
    pub max: f64,
    pub show: bool,
    pub tick_show: bool,
    pub label_show: bool,
    /// Override color for the labels; `None` keeps the theme color
    pub label_color: Option<&'static str>,
    pub split_line_show: bool,
    pub split_area_show: bool,
}

/// Output of [`generate`]; every vector has exactly `cell_count` entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLayout {
    pub rows: u32,
    pub columns: u32,
    pub labels: Vec<CellLabel>,
    pub geometry: Vec<CellGeometry>,
    pub x_axes: Vec<AxisSpec>,
    pub y_axes: Vec<AxisSpec>,
}

impl GridLayout {
    pub fn cell_count(&self) -> usize {
        self.geometry.len()
    }
}

/// Size of one track along an axis: the space left by both margins and
/// the `count - 1` gaps, split evenly.
fn track_size(margin_start: f64, margin_end: f64, spacing: f64, count: u32) -> f64 {
    let gaps = f64::from(count.saturating_sub(1));
    (100.0 - margin_start - margin_end - gaps * spacing) / f64::from(count)
}

fn validate(config: &LayoutConfig) -> Result<(f64, f64), ConfigError> {
    if config.cell_count == 0 {
        return Err(ConfigError::ZeroCellCount);
    }
    if config.columns == 0 {
        return Err(ConfigError::ZeroColumns);
    }
    if let Some((field, _)) = config
        .spacing_fields()
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    {
        return Err(ConfigError::NonFinite { field });
    }

    let width = track_size(
        config.left,
        config.right,
        config.column_space,
        config.columns,
    );
    if width <= 0.0 {
        return Err(ConfigError::NonPositiveWidth { width });
    }
    let height = track_size(config.top, config.bottom, config.row_space, config.rows());
    if height <= 0.0 {
        return Err(ConfigError::NonPositiveHeight { height });
    }
    Ok((width, height))
}

/// Whether `index` sits on the bottom edge of the grid: one of the last
/// `columns` cells, or part of a short final row.
pub fn is_bottom_edge(index: usize, cell_count: usize, columns: usize) -> bool {
    let last_columns = index >= cell_count.saturating_sub(columns) && index < cell_count;
    let remainder = cell_count % columns.max(1);
    let final_row = remainder != 0 && index >= cell_count - remainder && index < cell_count;
    last_columns || final_row
}

fn is_first_column(index: usize, columns: usize) -> bool {
    index % columns.max(1) == 0
}

fn x_label_visible(config: &LayoutConfig, index: usize) -> bool {
    if !config.axis_label_show {
        return false;
    }
    match config.axis_label_type {
        LabelDensity::All => true,
        LabelDensity::Simple => is_bottom_edge(
            index,
            config.cell_count as usize,
            config.columns as usize,
        ),
        LabelDensity::None => false,
    }
}

fn y_label_visible(config: &LayoutConfig, index: usize) -> bool {
    if !config.axis_label_show {
        return false;
    }
    match config.axis_label_type {
        LabelDensity::All => true,
        LabelDensity::Simple => is_first_column(index, config.columns as usize),
        LabelDensity::None => false,
    }
}

fn label_left_offset(config: &LayoutConfig, col: u32) -> f64 {
    match config.axis_label_type {
        LabelDensity::All => LABEL_LEFT_OFFSET,
        LabelDensity::Simple if col == 0 => LABEL_LEFT_OFFSET,
        LabelDensity::Simple | LabelDensity::None => 0.0,
    }
}

fn axis_spec(config: &LayoutConfig, index: usize, label_show: bool) -> AxisSpec {
    AxisSpec {
        grid_index: index,
        min: AXIS_MIN,
        max: AXIS_MAX,
        show: config.axis_show,
        tick_show: config.axis_tick_show,
        label_show,
        label_color: None,
        split_line_show: config.split_line_show,
        split_area_show: config.split_area_show,
    }
}

/// Generate labels, geometry and axes for every cell of `config`.
///
/// # Errors
/// Returns a [`ConfigError`] when the counts are zero, a margin is not
/// finite, or margins and spacing leave no room for a cell. Values are
/// never clamped.
pub fn generate(config: &LayoutConfig) -> Result<GridLayout, ConfigError> {
    let (width, height) = validate(config).inspect_err(|err| {
        warn!(%err, "rejected layout config");
    })?;

    let rows = config.rows();
    let columns = config.columns;
    let cell_count = config.cell_count as usize;
    let raw_count = rows as usize * columns as usize;

    let mut geometry = Vec::with_capacity(raw_count);
    let mut labels = Vec::with_capacity(raw_count);
    for row in 0..rows {
        let top = (height + config.row_space) * f64::from(row) + config.top;
        for col in 0..columns {
            let left = (width + config.column_space) * f64::from(col) + config.left;
            geometry.push(CellGeometry {
                left,
                top,
                width,
                height,
            });
            labels.push(CellLabel {
                text: format!("{row}-{col}"),
                row,
                col,
                left: left + label_left_offset(config, col),
                top: top + LABEL_TOP_OFFSET,
            });
        }
    }
    // The last row may be short; drop the cells past the requested count.
    geometry.truncate(cell_count);
    labels.truncate(cell_count);

    let x_axes = (0..cell_count)
        .map(|i| {
            let mut spec = axis_spec(config, i, x_label_visible(config, i));
            if i < cell_count.saturating_sub(columns as usize) {
                spec.label_color = Some(HIDDEN_LABEL_COLOR);
            }
            spec
        })
        .collect();
    let y_axes = (0..cell_count)
        .map(|i| axis_spec(config, i, y_label_visible(config, i)))
        .collect();

    debug!(cell_count, columns, rows, "generated grid layout");

    Ok(GridLayout {
        rows,
        columns,
        labels,
        geometry,
        x_axes,
        y_axes,
    })
}
