use serde::{Deserialize, Serialize};

use crate::render::colors::palette;

/// Semantic annotation applied to a cell's background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
    Warning,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Success, Status::Error, Status::Warning];

    /// Keyboard shortcut bound to this status.
    pub fn shortcut(self) -> &'static str {
        match self {
            Self::Success => "1",
            Self::Error => "2",
            Self::Warning => "3",
        }
    }

    /// Status bound to a shortcut key, if any.
    pub fn from_shortcut(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.shortcut() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => palette::SUCCESS_BACKGROUND,
            Self::Error => palette::ERROR_BACKGROUND,
            Self::Warning => palette::WARNING_BACKGROUND,
        }
    }
}

/// Visual state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CellState {
    pub selected: bool,
    pub status: Option<Status>,
}

impl CellState {
    pub fn border_color(&self) -> &'static str {
        if self.selected {
            palette::SELECTED_BORDER
        } else {
            palette::DEFAULT_BORDER
        }
    }

    pub fn background_color(&self) -> &'static str {
        self.status
            .map_or(palette::DEFAULT_BACKGROUND, Status::background)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
