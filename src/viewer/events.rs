//! Mouse, click, and keyboard event handlers for `GridView`.
//!
//! All methods here are `pub(crate)` helpers called from the DOM listeners
//! and the wasm-exported public API that lives in `mod.rs`.

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlElement, MouseEvent};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use super::{now_ms, GridView, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::selection::Modifiers;

/// `MouseEvent.buttons` bit for the primary button.
#[cfg(target_arch = "wasm32")]
const PRIMARY_BUTTON_MASK: u16 = 1;

#[cfg(target_arch = "wasm32")]
impl GridView {
    /// Event position relative to the element's top-left corner.
    pub(crate) fn local_point(element: &HtmlElement, event: &MouseEvent) -> (f64, f64) {
        let rect = element.get_bounding_client_rect();
        (
            f64::from(event.client_x()) - rect.left(),
            f64::from(event.client_y()) - rect.top(),
        )
    }

    pub(crate) fn modifiers(event: &MouseEvent) -> Modifiers {
        Modifiers {
            shift: event.shift_key(),
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
        }
    }

    pub(crate) fn internal_mouse_down(
        state: &Rc<RefCell<SharedState>>,
        x: f64,
        y: f64,
        button: i16,
    ) {
        state.borrow_mut().grid.pointer_down(x, y, button);
    }

    pub(crate) fn internal_mouse_move(
        state: &Rc<RefCell<SharedState>>,
        x: f64,
        y: f64,
        buttons: u16,
    ) {
        let dragging = state.borrow().grid.is_dragging();
        if !dragging {
            return;
        }
        // Released outside the element: treat as the end of the gesture.
        if buttons & PRIMARY_BUTTON_MASK == 0 {
            Self::internal_mouse_up(state);
            return;
        }
        let deadline = state.borrow_mut().grid.pointer_move(x, y, now_ms());
        if deadline.is_some() {
            Self::schedule_drag_timer(state);
        }
    }

    pub(crate) fn internal_mouse_up(state: &Rc<RefCell<SharedState>>) {
        Self::cancel_drag_timer(state);
        let callback = {
            let mut s = state.borrow_mut();
            s.grid.pointer_up();
            s.grid
                .take_needs_render()
                .then(|| s.render_callback.clone())
                .flatten()
        };
        Self::invoke_render_callback(state, callback);
    }

    pub(crate) fn internal_mouse_leave(state: &Rc<RefCell<SharedState>>) {
        Self::cancel_drag_timer(state);
        let callback = {
            let mut s = state.borrow_mut();
            s.grid.pointer_leave();
            s.grid
                .take_needs_render()
                .then(|| s.render_callback.clone())
                .flatten()
        };
        Self::invoke_render_callback(state, callback);
    }

    pub(crate) fn internal_click(
        state: &Rc<RefCell<SharedState>>,
        x: f64,
        y: f64,
        modifiers: Modifiers,
    ) {
        let callback = {
            let mut s = state.borrow_mut();
            s.grid.click(x, y, modifiers);
            s.grid
                .take_needs_render()
                .then(|| s.render_callback.clone())
                .flatten()
        };
        Self::invoke_render_callback(state, callback);
    }

    /// Right-click: resolve the target, redraw, then ask the host to open
    /// the menu at the client position.
    pub(crate) fn internal_context_menu(
        state: &Rc<RefCell<SharedState>>,
        x: f64,
        y: f64,
        client_x: i32,
        client_y: i32,
    ) {
        let (open, render_callback, menu_callback) = {
            let mut s = state.borrow_mut();
            let open = s.grid.context_menu(x, y);
            let render_callback = s
                .grid
                .take_needs_render()
                .then(|| s.render_callback.clone())
                .flatten();
            (open, render_callback, s.context_menu_callback.clone())
        };
        Self::invoke_render_callback(state, render_callback);
        if !open {
            return;
        }
        if let Some(menu) = menu_callback {
            let _ = menu.call2(
                &JsValue::NULL,
                &JsValue::from(client_x),
                &JsValue::from(client_y),
            );
        }
    }

    pub(crate) fn internal_key_down(
        state: &Rc<RefCell<SharedState>>,
        key: &str,
        command: bool,
    ) -> bool {
        let (prevent, callback) = {
            let mut s = state.borrow_mut();
            let prevent = s.grid.key_down(key, command);
            let callback = s
                .grid
                .take_needs_render()
                .then(|| s.render_callback.clone())
                .flatten();
            (prevent, callback)
        };
        Self::invoke_render_callback(state, callback);
        prevent
    }

    pub(crate) fn internal_resize(state: &Rc<RefCell<SharedState>>, width: f64, height: f64) {
        let callback = {
            let mut s = state.borrow_mut();
            let (old_width, old_height) = s.grid.size();
            if (old_width - width).abs() < f64::EPSILON && (old_height - height).abs() < f64::EPSILON
            {
                return;
            }
            s.grid.resize(width, height);
            s.grid.take_needs_render();
            s.render_callback.clone()
        };
        Self::invoke_render_callback(state, callback);
    }

    /// Call `callback` with the current chart option. The state borrow is
    /// released before JS runs, so the callback may call back into the view.
    pub(crate) fn invoke_render_callback(
        state: &Rc<RefCell<SharedState>>,
        callback: Option<Function>,
    ) {
        let Some(callback) = callback else {
            return;
        };
        let option = state.borrow().grid.option();
        if let Ok(value) = serde_wasm_bindgen::to_value(&option) {
            let _ = callback.call1(&JsValue::NULL, &value);
        }
    }
}
