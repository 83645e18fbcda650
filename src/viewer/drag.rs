//! Drag-select debounce timer for `GridView`.
//!
//! Every mouse move during a drag restarts a single `setTimeout`; when it
//! fires, the most recent rectangle is applied and the grid re-rendered.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use super::{now_ms, GridView, SharedState};
#[cfg(target_arch = "wasm32")]
use crate::selection::DRAG_DEBOUNCE_MS;

#[cfg(target_arch = "wasm32")]
impl GridView {
    pub(crate) fn schedule_drag_timer(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();
        // Cancel any existing timer
        if let Some(timer_id) = s.drag_timer.take() {
            window.clear_timeout_with_handle(timer_id);
        }
        if s.drag_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    GridView::handle_drag_timer(&state);
                }
            }) as Box<dyn FnMut()>);
            s.drag_closure = Some(closure);
        }
        let Some(callback) = s.drag_closure.as_ref() else {
            return;
        };
        #[allow(clippy::cast_possible_truncation)]
        let wait = DRAG_DEBOUNCE_MS as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            wait,
        ) {
            Ok(id) => s.drag_timer = Some(id),
            Err(_) => s.drag_timer = None,
        }
    }

    pub(crate) fn cancel_drag_timer(state: &Rc<RefCell<SharedState>>) {
        let Some(timer_id) = state.borrow_mut().drag_timer.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(timer_id);
        }
    }

    pub(crate) fn handle_drag_timer(state: &Rc<RefCell<SharedState>>) {
        let callback = {
            let mut s = state.borrow_mut();
            s.drag_timer = None;
            if !s.grid.apply_pending_drag(now_ms()) {
                // Timer fired before the deadline (clock skew); try again.
                let pending = s.grid.drag_deadline().is_some();
                drop(s);
                if pending {
                    Self::schedule_drag_timer(state);
                }
                return;
            }
            s.grid.take_needs_render();
            s.render_callback.clone()
        };
        Self::invoke_render_callback(state, callback);
    }
}
