//! Keyboard shortcuts understood by the grid.

use crate::types::Status;

/// A key press the selection controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// `Escape`: drop all selection and status marks
    ClearAll,
    /// Ctrl/cmd + `a`
    SelectAll,
    /// `1`, `2` or `3`: mark the selection
    Status(Status),
}

impl KeyCommand {
    /// Map a DOM `KeyboardEvent.key` value. `command` is true when ctrl or
    /// meta is held.
    pub fn parse(key: &str, command: bool) -> Option<Self> {
        match key {
            "Escape" => Some(Self::ClearAll),
            "a" | "A" if command => Some(Self::SelectAll),
            _ => Status::from_shortcut(key).map(Self::Status),
        }
    }
}
