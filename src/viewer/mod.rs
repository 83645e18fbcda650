//! Main GridView struct - the browser entry point for the chart grid.
//!
//! This module provides the WASM-exported `GridView` struct that handles:
//! - Regenerating the grid when the config form changes
//! - Tracking the host element's size via `ResizeObserver`
//! - Translating mouse and keyboard events into selection changes
//! - Handing the updated chart option to the JS render callback
//!
//! Event handlers are registered once when the view is created and share a
//! single `Rc<RefCell<SharedState>>`; they are removed again on drop.

mod drag;
mod events;
mod state;

pub use state::GridState;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent, ResizeObserver, ResizeObserverEntry};

#[cfg(target_arch = "wasm32")]
use crate::{error::ChartGridError, render::menu_items};
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
use crate::types::LayoutConfig;
#[cfg(not(target_arch = "wasm32"))]
use crate::{
    error::Result,
    render::ChartOption,
    selection::Modifiers,
    types::Status,
};

/// Shared state that can be accessed by event handlers (wasm32 only)
#[cfg(target_arch = "wasm32")]
pub(crate) struct SharedState {
    pub(crate) grid: GridState,
    pub(crate) render_callback: Option<Function>,
    pub(crate) context_menu_callback: Option<Function>,
    pub(crate) drag_timer: Option<i32>,
    pub(crate) drag_closure: Option<Closure<dyn FnMut()>>,
}

// Timing helper for the drag debounce.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    if let Some(window) = web_sys::window() {
        if let Some(perf) = window.performance() {
            return perf.now();
        }
    }
    js_sys::Date::now()
}

/// Mouse event names and the listener registered for each.
#[cfg(target_arch = "wasm32")]
type MouseListener = (&'static str, Closure<dyn FnMut(MouseEvent)>);

/// The main view struct exported to JavaScript
#[wasm_bindgen]
pub struct GridView {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<SharedState>>,
    #[cfg(target_arch = "wasm32")]
    element: HtmlElement,
    #[cfg(target_arch = "wasm32")]
    closures: Vec<MouseListener>,
    #[cfg(target_arch = "wasm32")]
    key_closure: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    #[cfg(target_arch = "wasm32")]
    resize_observer: Option<ResizeObserver>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)] // Kept alive for the observer
    resize_closure: Option<Closure<dyn FnMut(js_sys::Array)>>,

    // Non-wasm32 fields
    #[cfg(not(target_arch = "wasm32"))]
    grid: GridState,
}

/// Parse an optional JS config object, falling back to the defaults.
#[cfg(target_arch = "wasm32")]
fn config_from_js(config: JsValue) -> Result<LayoutConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(LayoutConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))
}

/// Convert a value for the JS side.
#[cfg(target_arch = "wasm32")]
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| ChartGridError::Render(e.to_string()).into())
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl GridView {
    /// Create a view over `element` (the chart container).
    ///
    /// Mouse listeners go on the element, the shortcut listener on the
    /// document, and a `ResizeObserver` keeps hit-testing in sync with the
    /// element's size.
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, config: JsValue) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let config = config_from_js(config)?;
        let width = f64::from(element.client_width().max(1));
        let height = f64::from(element.client_height().max(1));
        let grid = GridState::new(config, width, height)?;

        let state = Rc::new(RefCell::new(SharedState {
            grid,
            render_callback: None,
            context_menu_callback: None,
            drag_timer: None,
            drag_closure: None,
        }));

        let mut closures: Vec<MouseListener> = Vec::new();

        // Mouse down (drag start)
        {
            let state = state.clone();
            let element_ref = element.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = Self::local_point(&element_ref, &event);
                Self::internal_mouse_down(&state, x, y, event.button());
            }) as Box<dyn FnMut(MouseEvent)>);
            closures.push(("mousedown", closure));
        }

        // Mouse move (drag rectangle)
        {
            let state = state.clone();
            let element_ref = element.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = Self::local_point(&element_ref, &event);
                Self::internal_mouse_move(&state, x, y, event.buttons());
            }) as Box<dyn FnMut(MouseEvent)>);
            closures.push(("mousemove", closure));
        }

        // Mouse up
        {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                Self::internal_mouse_up(&state);
            }) as Box<dyn FnMut(MouseEvent)>);
            closures.push(("mouseup", closure));
        }

        // Mouse leave (ends the drag like mouse up)
        {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                Self::internal_mouse_leave(&state);
            }) as Box<dyn FnMut(MouseEvent)>);
            closures.push(("mouseleave", closure));
        }

        // Click (single, ctrl/cmd and shift selection)
        {
            let state = state.clone();
            let element_ref = element.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = Self::local_point(&element_ref, &event);
                Self::internal_click(&state, x, y, Self::modifiers(&event));
            }) as Box<dyn FnMut(MouseEvent)>);
            closures.push(("click", closure));
        }

        // Context menu (right-click target + menu trigger)
        {
            let state = state.clone();
            let element_ref = element.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                let (x, y) = Self::local_point(&element_ref, &event);
                Self::internal_context_menu(&state, x, y, event.client_x(), event.client_y());
            }) as Box<dyn FnMut(MouseEvent)>);
            closures.push(("contextmenu", closure));
        }

        for (name, closure) in &closures {
            element
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
                .ok();
        }

        // Keyboard handler on document for the shortcuts
        let key_closure = {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                let key = event.key();
                let command = event.ctrl_key() || event.meta_key();
                if Self::internal_key_down(&state, &key, command) {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);

            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            closure.as_ref().unchecked_ref(),
                        )
                        .ok();
                }
            }
            Some(closure)
        };

        // Container resize
        let (resize_observer, resize_closure) = {
            let state = state.clone();
            let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                let Some(entry) = entries
                    .get(0)
                    .dyn_into::<ResizeObserverEntry>()
                    .ok()
                else {
                    return;
                };
                let rect = entry.content_rect();
                Self::internal_resize(&state, rect.width(), rect.height());
            }) as Box<dyn FnMut(js_sys::Array)>);
            match ResizeObserver::new(closure.as_ref().unchecked_ref()) {
                Ok(observer) => {
                    observer.observe(&element);
                    (Some(observer), Some(closure))
                }
                Err(_) => (None, None),
            }
        };

        Ok(GridView {
            state,
            element,
            closures,
            key_closure,
            resize_observer,
            resize_closure,
        })
    }

    /// Replace the layout config. Selection and status marks are reset.
    ///
    /// # Errors
    /// Returns the config error message; the previous grid stays active.
    #[wasm_bindgen]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config = config_from_js(config)?;
        let callback = {
            let mut s = self.state.borrow_mut();
            s.grid.set_config(config)?;
            s.render_callback.clone()
        };
        self.invoke_render(callback);
        Ok(())
    }

    /// Current layout config
    #[wasm_bindgen]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.borrow().grid.config())
    }

    /// Current chart option
    #[wasm_bindgen]
    pub fn option(&self) -> Result<JsValue, JsValue> {
        let option = self.state.borrow().grid.option();
        to_js(&option)
    }

    /// Indices of the selected cells
    #[wasm_bindgen]
    pub fn selected(&self) -> Vec<u32> {
        self.state
            .borrow()
            .grid
            .selected()
            .into_iter()
            .filter_map(|i| u32::try_from(i).ok())
            .collect()
    }

    /// Resize the surface (CSS pixels). Called automatically by the
    /// `ResizeObserver`; exposed for hosts that size the chart themselves.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f64, height: f64) {
        Self::internal_resize(&self.state, width, height);
    }

    /// Handle keyboard event (public API). Returns whether the default
    /// action should be prevented.
    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str, ctrl: bool) -> bool {
        Self::internal_key_down(&self.state, key, ctrl)
    }

    /// Apply a context-menu choice by its shortcut key ("1", "2" or "3").
    ///
    /// # Errors
    /// Returns an error for an unknown key.
    #[wasm_bindgen]
    pub fn apply_menu_status(&mut self, key: &str) -> Result<(), JsValue> {
        let status = crate::types::Status::from_shortcut(key)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown menu item: {key}")))?;
        let callback = {
            let mut s = self.state.borrow_mut();
            s.grid.apply_menu_status(status);
            s.render_callback.clone()
        };
        self.invoke_render(callback);
        Ok(())
    }

    /// Context-menu items as `[{ label, key, color, status }]`
    #[wasm_bindgen]
    pub fn menu_items(&self) -> Result<JsValue, JsValue> {
        to_js(&menu_items())
    }

    /// Register a JS callback receiving the chart option after each change.
    #[wasm_bindgen]
    pub fn set_render_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().render_callback = callback;
    }

    /// Register a JS callback `(clientX, clientY)` that opens the context
    /// menu.
    #[wasm_bindgen]
    pub fn set_context_menu_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().context_menu_callback = callback;
    }

    /// Push the current option to the render callback.
    #[wasm_bindgen]
    pub fn render(&mut self) {
        let callback = self.state.borrow().render_callback.clone();
        self.invoke_render(callback);
    }

    fn invoke_render(&self, callback: Option<Function>) {
        self.state.borrow_mut().grid.take_needs_render();
        Self::invoke_render_callback(&self.state, callback);
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for GridView {
    fn drop(&mut self) {
        for (name, closure) in &self.closures {
            let _ = self
                .element
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.key_closure.take() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document
                    .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
        }
        if let Some(observer) = self.resize_observer.take() {
            observer.disconnect();
        }
        Self::cancel_drag_timer(&self.state);
    }
}

// ============================================================================
// Non-WASM32 Implementation (for testing/CLI)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl GridView {
    /// Create a view on a `width` × `height` surface (non-wasm version for
    /// testing)
    ///
    /// # Errors
    /// Returns the config error for an invalid layout.
    pub fn new_test(config: LayoutConfig, width: f64, height: f64) -> Result<Self> {
        Ok(GridView {
            grid: GridState::new(config, width, height)?,
        })
    }

    pub fn state(&self) -> &GridState {
        &self.grid
    }

    /// # Errors
    /// Returns the config error; the previous grid stays active.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<()> {
        self.grid.set_config(config)
    }

    pub fn option(&self) -> ChartOption {
        self.grid.option()
    }

    pub fn selected(&self) -> Vec<usize> {
        self.grid.selected()
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.grid.resize(width, height);
    }

    pub fn on_click(&mut self, x: f64, y: f64, modifiers: Modifiers) {
        self.grid.click(x, y, modifiers);
    }

    pub fn on_context_menu(&mut self, x: f64, y: f64) -> bool {
        self.grid.context_menu(x, y)
    }

    pub fn on_mouse_down(&mut self, x: f64, y: f64, button: i16) {
        self.grid.pointer_down(x, y, button);
    }

    /// Returns the debounce deadline while dragging.
    pub fn on_mouse_move(&mut self, x: f64, y: f64, now_ms: f64) -> Option<f64> {
        self.grid.pointer_move(x, y, now_ms)
    }

    /// Fire the drag timer at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        self.grid.apply_pending_drag(now_ms)
    }

    pub fn on_mouse_up(&mut self) {
        self.grid.pointer_up();
    }

    pub fn on_mouse_leave(&mut self) {
        self.grid.pointer_leave();
    }

    pub fn key_down(&mut self, key: &str, ctrl: bool) -> bool {
        self.grid.key_down(key, ctrl)
    }

    pub fn apply_menu_status(&mut self, status: Status) {
        self.grid.apply_menu_status(status);
    }
}
