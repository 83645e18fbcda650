//! Multi-select state machine over the grid's cells.
//!
//! [`SelectionController`] exclusively owns the per-cell [`CellState`]s, the
//! shift-click anchor and the right-click target. It works on cell indices
//! only; callers hit-test pointer coordinates first (see
//! [`crate::layout::pixels`]) and pass the result in.

pub mod drag;
pub mod keys;

pub use drag::{DragDebouncer, DragGesture, DRAG_DEBOUNCE_MS, DRAG_THRESHOLD_PX};
pub use keys::KeyCommand;

use tracing::trace;

use crate::layout::pixels::cells_in_rect;
use crate::types::{CellState, PixelRect, Status};

/// Modifier keys held during a pointer event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    /// Ctrl on most platforms, command on macOS
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Per-cell state plus the anchor and context-menu target.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    cells: Vec<CellState>,
    anchor: Option<usize>,
    current_target: Option<usize>,
}

impl SelectionController {
    /// Controller for `cell_count` cells, all unselected and unmarked.
    pub fn new(cell_count: usize) -> Self {
        Self {
            cells: vec![CellState::default(); cell_count],
            anchor: None,
            current_target: None,
        }
    }

    /// Discard all state and resize to `cell_count` cells.
    pub fn reset(&mut self, cell_count: usize) {
        *self = Self::new(cell_count);
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Cell recorded by the last right-click that hit a cell
    pub fn current_target(&self) -> Option<usize> {
        self.current_target
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(|c| c.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|c| c.selected).count()
    }

    /// Indices of all selected cells, ascending
    pub fn selected_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.selected)
            .map(|(i, _)| i)
            .collect()
    }

    fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.selected = selected;
        }
    }

    /// Dispatch a primary-button click on `hit` according to `modifiers`.
    ///
    /// A miss (`None`) or an index past the grid is a no-op.
    pub fn pointer_select(&mut self, hit: Option<usize>, modifiers: Modifiers) {
        let Some(index) = hit.filter(|&i| i < self.cells.len()) else {
            return;
        };
        match (modifiers.shift, modifiers.command()) {
            (false, false) => self.click(index),
            (false, true) => self.toggle(index),
            (true, false) => self.extend(index),
            // Shift together with ctrl/cmd only moves the anchor.
            (true, true) => self.anchor = Some(index),
        }
    }

    /// Plain click: select only `index` and anchor there.
    pub fn click(&mut self, index: usize) {
        if index >= self.cells.len() {
            return;
        }
        for cell in &mut self.cells {
            cell.selected = false;
        }
        self.set_selected(index, true);
        self.anchor = Some(index);
    }

    /// Ctrl/cmd click: flip `index` without touching the rest.
    pub fn toggle(&mut self, index: usize) {
        let Some(cell) = self.cells.get_mut(index) else {
            return;
        };
        cell.selected = !cell.selected;
        self.anchor = Some(index);
    }

    /// Shift click: select the inclusive range from the anchor to `index`.
    pub fn extend(&mut self, index: usize) {
        if index >= self.cells.len() {
            return;
        }
        match self.anchor {
            None => self.set_selected(index, true),
            Some(anchor) => {
                let (start, end) = (anchor.min(index), anchor.max(index));
                for cell in self.cells.iter_mut().take(end + 1).skip(start) {
                    cell.selected = true;
                }
            }
        }
        self.anchor = Some(index);
    }

    /// Right-click on `hit`.
    ///
    /// With at most one cell selected this behaves like a plain click; with
    /// more, the selection is kept. A hit becomes the current target, a miss
    /// clears it. Returns whether the context menu should open.
    pub fn context_click(&mut self, hit: Option<usize>) -> bool {
        let hit = hit.filter(|&i| i < self.cells.len());
        if self.selected_count() <= 1 {
            if let Some(index) = hit {
                self.click(index);
            }
        }
        self.current_target = hit;
        hit.is_some()
    }

    /// Select every cell touched by `drag`; cells outside stay as they are.
    pub fn select_in_rect(&mut self, drag: &PixelRect, rects: &[PixelRect]) {
        let hits = cells_in_rect(drag, rects);
        trace!(?drag, count = hits.len(), "drag select");
        for index in hits {
            self.set_selected(index, true);
        }
    }

    /// Back to the all-default state.
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = CellState::default();
        }
        self.anchor = None;
        self.current_target = None;
    }

    pub fn select_all(&mut self) {
        for cell in &mut self.cells {
            cell.selected = true;
        }
    }

    /// Mark every selected cell with `status`.
    pub fn apply_status(&mut self, status: Status) {
        for cell in self.cells.iter_mut().filter(|c| c.selected) {
            cell.status = Some(status);
        }
    }

    /// Context-menu choice: the whole selection when more than one cell is
    /// selected, otherwise the right-clicked target.
    pub fn apply_menu_status(&mut self, status: Status) {
        if self.selected_count() > 1 {
            self.apply_status(status);
            return;
        }
        if let Some(cell) = self.current_target.and_then(|i| self.cells.get_mut(i)) {
            cell.status = Some(status);
        }
    }

    /// Apply a keyboard command. Returns `true` when the platform's default
    /// handling of the key must be suppressed.
    pub fn apply_key(&mut self, command: KeyCommand) -> bool {
        match command {
            KeyCommand::ClearAll => {
                self.clear_all();
                false
            }
            KeyCommand::SelectAll => {
                self.select_all();
                true
            }
            KeyCommand::Status(status) => {
                self.apply_status(status);
                false
            }
        }
    }
}
