//! The chart option handed to the rendering surface.
//!
//! Field names serialize in the camelCase form the charting library reads.
//! Positions are percentage strings so the surface scales them itself.

use serde::Serialize;

use super::colors::{palette, CssColor, CELL_BORDER_WIDTH};
use crate::layout::{AxisSpec, CellLabel, GridLayout};
use crate::types::CellState;

const TOOLTIP_FORMATTER: &str = "Group {a}: ({c})";

fn percent(value: f64) -> String {
    format!("{value}%")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleOption {
    pub text: String,
    pub left: String,
    pub top: String,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOption {
    pub left: String,
    pub top: String,
    pub width: String,
    pub height: String,
    pub contain_label: bool,
    pub show: bool,
    pub background_color: CssColor,
    pub border_color: CssColor,
    pub border_width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisLabelOption {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<CssColor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOption {
    pub grid_index: usize,
    pub min: f64,
    pub max: f64,
    pub show: bool,
    pub axis_tick: Toggle,
    pub axis_label: AxisLabelOption,
    pub split_line: Toggle,
    pub split_area: Toggle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOption {
    pub name: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x_axis_index: usize,
    pub y_axis_index: usize,
    pub data: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipOption {
    pub formatter: &'static str,
}

/// Complete render option for the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub background_color: CssColor,
    pub title: Vec<TitleOption>,
    pub grid: Vec<GridOption>,
    pub tooltip: TooltipOption,
    pub x_axis: Vec<AxisOption>,
    pub y_axis: Vec<AxisOption>,
    pub series: Vec<SeriesOption>,
}

impl From<&CellLabel> for TitleOption {
    fn from(label: &CellLabel) -> Self {
        Self {
            text: label.text.clone(),
            left: percent(label.left),
            top: percent(label.top),
            padding: 0,
        }
    }
}

impl From<&AxisSpec> for AxisOption {
    fn from(spec: &AxisSpec) -> Self {
        Self {
            grid_index: spec.grid_index,
            min: spec.min,
            max: spec.max,
            show: spec.show,
            axis_tick: Toggle {
                show: spec.tick_show,
            },
            axis_label: AxisLabelOption {
                show: spec.label_show,
                color: spec.label_color,
            },
            split_line: Toggle {
                show: spec.split_line_show,
            },
            split_area: Toggle {
                show: spec.split_area_show,
            },
        }
    }
}

/// Build the option for `layout`, painting each cell from `states` and
/// plotting `data[i]` in cell `i`.
///
/// Missing states render as default; missing data renders an empty series.
pub fn build_option(layout: &GridLayout, states: &[CellState], data: &[Vec<u32>]) -> ChartOption {
    let grid = layout
        .geometry
        .iter()
        .enumerate()
        .map(|(i, g)| {
            let state = states.get(i).copied().unwrap_or_default();
            GridOption {
                left: percent(g.left),
                top: percent(g.top),
                width: percent(g.width),
                height: percent(g.height),
                contain_label: true,
                show: true,
                background_color: state.background_color(),
                border_color: state.border_color(),
                border_width: CELL_BORDER_WIDTH,
            }
        })
        .collect();

    let series = (0..layout.cell_count())
        .map(|i| SeriesOption {
            name: format!("I{i}"),
            id: format!("I{i}"),
            kind: "scatter",
            x_axis_index: i,
            y_axis_index: i,
            data: data.get(i).cloned().unwrap_or_default(),
        })
        .collect();

    ChartOption {
        background_color: palette::CANVAS_BACKGROUND,
        title: layout.labels.iter().map(TitleOption::from).collect(),
        grid,
        tooltip: TooltipOption {
            formatter: TOOLTIP_FORMATTER,
        },
        x_axis: layout.x_axes.iter().map(AxisOption::from).collect(),
        y_axis: layout.y_axes.iter().map(AxisOption::from).collect(),
        series,
    }
}
