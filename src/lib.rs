//! chartgrid - annotate a grid of mini-charts in the browser
//!
//! Lays out N chart cells in rows and columns and tracks which cells the
//! user has selected and marked:
//! - Percentage layout with margins, spacing and a short final row
//! - Pixel hit-testing against the live surface size
//! - Click, ctrl/cmd-click, shift-click and rubber-band drag selection
//! - Success / error / warning marks via `1` `2` `3` or a context menu
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'chartgrid';
//! await init();
//! const view = new GridView(container, { cellCount: 20, columns: 6 });
//! view.set_render_callback((option) => chart.setOption(option));
//! view.set_context_menu_callback((x, y) => menu.show(x, y));
//! view.render();
//! ```

pub mod error;
pub mod layout;
pub mod render;
pub mod selection;
pub mod types;
pub mod viewer;

use wasm_bindgen::prelude::*;

// Re-export the main view struct
pub use viewer::{GridState, GridView};

pub use error::{ChartGridError, ConfigError, Result};
pub use types::*;

/// Generate the chart option for `config` with default (unselected) cells.
///
/// # Errors
/// Returns a config error for an invalid layout, or a random-source error
/// for the sample data.
pub fn initial_option(config: &LayoutConfig) -> Result<render::ChartOption> {
    let layout = layout::generate(config)?;
    let states = vec![CellState::default(); layout.cell_count()];
    let data = render::random_series(layout.cell_count())?;
    Ok(render::build_option(&layout, &states, &data))
}

/// Generate the chart option for a JSON config and return it as JSON
///
/// # Errors
/// Returns an error if the config is malformed or describes an invalid
/// layout.
#[wasm_bindgen]
pub fn generate_option(config_json: &str) -> std::result::Result<String, JsValue> {
    let config: LayoutConfig = serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;
    let option = initial_option(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&option)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Generate the chart option for a config object and return it as a
/// `JsValue`
///
/// This avoids a JSON round trip when the result is passed straight to the
/// charting library.
///
/// # Errors
/// Returns an error if the config is malformed or describes an invalid
/// layout.
#[wasm_bindgen]
pub fn generate_option_to_js(config: JsValue) -> std::result::Result<JsValue, JsValue> {
    let config: LayoutConfig = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;
    let option = initial_option(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&option)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
