//! Structured error types for chartgrid.
//!
//! `ConfigError` is the only domain error; everything else the engine does
//! is a defined no-op on bad input.

/// Invalid layout parameters, reported back to the config UI.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The grid must contain at least one cell.
    #[error("cell count must be greater than zero")]
    ZeroCellCount,

    /// The grid must have at least one column.
    #[error("column count must be greater than zero")]
    ZeroColumns,

    /// A margin or spacing value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Margins and column spacing leave no horizontal room for a cell.
    #[error("margins and column spacing leave a cell width of {width}%")]
    NonPositiveWidth { width: f64 },

    /// Margins and row spacing leave no vertical room for a cell.
    #[error("margins and row spacing leave a cell height of {height}%")]
    NonPositiveHeight { height: f64 },
}

/// All errors that can occur in chartgrid.
#[derive(Debug, thiserror::Error)]
pub enum ChartGridError {
    /// Layout configuration was rejected.
    #[error("Invalid layout: {0}")]
    Config(#[from] ConfigError),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform random source is unavailable.
    #[error("Random source: {0}")]
    Random(String),

    /// Host rendering or DOM wiring failure.
    #[error("Render error: {0}")]
    Render(String),

    /// Catch-all for string errors crossing the JS boundary.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChartGridError>;

impl From<String> for ChartGridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for ChartGridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

impl From<getrandom::Error> for ChartGridError {
    fn from(e: getrandom::Error) -> Self {
        Self::Random(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<ChartGridError> for wasm_bindgen::JsValue {
    fn from(e: ChartGridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
