//! Grid state shared by every event handler.
//!
//! `GridState` owns everything derived from the config and recomputes it in
//! a fixed order:
//! - config -> layout -> sample data -> cell state reset
//! - layout + surface size -> pixel rects
//! - layout + cell state -> chart option (on demand)

use tracing::debug;

use crate::error::Result;
use crate::layout::{generate, hit_test, to_pixels, GridLayout};
use crate::render::{build_option, random_series, ChartOption};
use crate::selection::{
    DragDebouncer, DragGesture, KeyCommand, Modifiers, SelectionController,
};
use crate::types::{CellState, LayoutConfig, PixelRect, Status};

pub struct GridState {
    config: LayoutConfig,
    layout: GridLayout,
    data: Vec<Vec<u32>>,
    width: f64,
    height: f64,
    rects: Vec<PixelRect>,
    selection: SelectionController,
    drag: DragGesture,
    debouncer: DragDebouncer,
    /// Set when a drag just ended, so the click the browser fires after
    /// mouseup does not collapse the rubber-band selection.
    suppress_click: bool,
    pub(crate) needs_render: bool,
}

impl GridState {
    /// Build the grid for `config` on a `width` × `height` pixel surface.
    ///
    /// # Errors
    /// Returns the config error, or a random-source error for the sample
    /// data.
    pub fn new(config: LayoutConfig, width: f64, height: f64) -> Result<Self> {
        let layout = generate(&config)?;
        let data = random_series(layout.cell_count())?;
        let rects = to_pixels(&layout.geometry, width, height);
        let selection = SelectionController::new(layout.cell_count());
        Ok(Self {
            config,
            layout,
            data,
            width,
            height,
            rects,
            selection,
            drag: DragGesture::default(),
            debouncer: DragDebouncer::default(),
            suppress_click: false,
            needs_render: true,
        })
    }

    /// Replace the config and regenerate everything derived from it.
    ///
    /// On error nothing changes; the previous grid stays active.
    ///
    /// # Errors
    /// Same as [`GridState::new`].
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<()> {
        let layout = generate(&config)?;
        let data = random_series(layout.cell_count())?;
        self.selection.reset(layout.cell_count());
        self.rects = to_pixels(&layout.geometry, self.width, self.height);
        self.drag = DragGesture::default();
        self.debouncer.flush();
        self.suppress_click = false;
        self.config = config;
        self.layout = layout;
        self.data = data;
        self.needs_render = true;
        debug!(cells = self.layout.cell_count(), "grid regenerated");
        Ok(())
    }

    /// Surface resized; only the pixel rects change.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.rects = to_pixels(&self.layout.geometry, width, height);
        self.needs_render = true;
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn rects(&self) -> &[PixelRect] {
        &self.rects
    }

    pub fn cell_states(&self) -> &[CellState] {
        self.selection.cells()
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn selected(&self) -> Vec<usize> {
        self.selection.selected_indices()
    }

    pub fn hit(&self, x: f64, y: f64) -> Option<usize> {
        hit_test(x, y, &self.rects)
    }

    /// Current render option.
    pub fn option(&self) -> ChartOption {
        build_option(&self.layout, self.selection.cells(), &self.data)
    }

    /// Primary click at `(x, y)`.
    pub fn click(&mut self, x: f64, y: f64, modifiers: Modifiers) {
        if std::mem::take(&mut self.suppress_click) {
            return;
        }
        let hit = self.hit(x, y);
        if hit.is_some() {
            self.selection.pointer_select(hit, modifiers);
            self.needs_render = true;
        }
    }

    /// Right-click at `(x, y)`. Returns whether the context menu opens.
    pub fn context_menu(&mut self, x: f64, y: f64) -> bool {
        let hit = self.hit(x, y);
        let open = self.selection.context_click(hit);
        self.needs_render |= open;
        open
    }

    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) {
        self.suppress_click = false;
        self.drag.begin(x, y, button);
    }

    /// Pointer moved. While a drag is active the new rectangle replaces the
    /// pending one; the returned deadline is when it becomes due.
    pub fn pointer_move(&mut self, x: f64, y: f64, now_ms: f64) -> Option<f64> {
        let rect = self.drag.update(x, y)?;
        Some(self.debouncer.push(rect, now_ms))
    }

    /// Apply the pending drag rectangle if its quiet period elapsed.
    /// Returns whether anything was applied.
    pub fn apply_pending_drag(&mut self, now_ms: f64) -> bool {
        match self.debouncer.take_due(now_ms) {
            Some(rect) => {
                self.apply_drag(&rect);
                true
            }
            None => false,
        }
    }

    /// Deadline of the pending drag rectangle, if any.
    pub fn drag_deadline(&self) -> Option<f64> {
        self.debouncer.deadline_ms()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Pointer released: apply the final rectangle and end the gesture.
    pub fn pointer_up(&mut self) {
        self.finish_drag();
    }

    /// Pointer left the surface: same as release.
    pub fn pointer_leave(&mut self) {
        self.finish_drag();
    }

    fn finish_drag(&mut self) {
        if let Some(rect) = self.debouncer.flush() {
            self.apply_drag(&rect);
        }
        self.suppress_click = self.drag.end();
    }

    fn apply_drag(&mut self, rect: &PixelRect) {
        self.selection.select_in_rect(rect, &self.rects);
        self.needs_render = true;
    }

    /// Keyboard shortcut. Returns `true` when the host must suppress the
    /// platform's default action.
    pub fn key_down(&mut self, key: &str, command: bool) -> bool {
        let Some(cmd) = KeyCommand::parse(key, command) else {
            return false;
        };
        let before = self.selection.cells().to_vec();
        let prevent = self.selection.apply_key(cmd);
        self.needs_render |= self.selection.cells() != before.as_slice();
        prevent
    }

    /// Context-menu item chosen.
    pub fn apply_menu_status(&mut self, status: Status) {
        self.selection.apply_menu_status(status);
        self.needs_render = true;
    }

    /// Take and clear the render flag.
    pub fn take_needs_render(&mut self) -> bool {
        std::mem::take(&mut self.needs_render)
    }
}
