//! End-to-end tests through `GridView`
//!
//! Pointer coordinates go through the same hit-testing, debounce and
//! option-building path the browser uses.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use chartgrid::render::palette;
use chartgrid::selection::{Modifiers, DRAG_DEBOUNCE_MS, DRAG_THRESHOLD_PX};
use chartgrid::{ChartGridError, ConfigError, GridView, LayoutConfig, Status};

const WIDTH: f64 = 1200.0;
const HEIGHT: f64 = 600.0;

fn view() -> GridView {
    GridView::new_test(LayoutConfig::default(), WIDTH, HEIGHT).unwrap()
}

fn center(view: &GridView, index: usize) -> (f64, f64) {
    let r = view.state().rects()[index];
    (r.left + r.width / 2.0, r.top + r.height / 2.0)
}

fn click(view: &mut GridView, index: usize, modifiers: Modifiers) {
    let (x, y) = center(view, index);
    view.on_mouse_down(x, y, 0);
    view.on_mouse_up();
    view.on_click(x, y, modifiers);
}

#[test]
fn test_initial_option_shape() {
    let v = view();
    let option = v.option();
    assert_eq!(option.grid.len(), 20);
    assert_eq!(option.title.len(), 20);
    assert_eq!(option.x_axis.len(), 20);
    assert_eq!(option.y_axis.len(), 20);
    assert_eq!(option.series.len(), 20);
    assert_eq!(option.background_color, palette::CANVAS_BACKGROUND);
    assert!(option
        .grid
        .iter()
        .all(|g| g.border_color == palette::DEFAULT_BORDER));
}

#[test]
fn test_click_ctrl_click_sequence() {
    let mut v = view();
    click(&mut v, 2, Modifiers::NONE);
    click(&mut v, 5, Modifiers::ctrl());
    click(&mut v, 2, Modifiers::ctrl());
    assert_eq!(v.selected(), vec![5]);

    let option = v.option();
    assert_eq!(option.grid[5].border_color, palette::SELECTED_BORDER);
    assert_eq!(option.grid[2].border_color, palette::DEFAULT_BORDER);
}

#[test]
fn test_click_in_margin_is_noop() {
    let mut v = view();
    click(&mut v, 3, Modifiers::NONE);
    v.on_click(2.0, 2.0, Modifiers::NONE);
    assert_eq!(v.selected(), vec![3]);
}

#[test]
fn test_drag_select_is_debounced() {
    let mut v = view();
    click(&mut v, 15, Modifiers::NONE);

    let (x0, y0) = center(&v, 0);
    let (x1, y1) = center(&v, 1);
    let (x7, y7) = center(&v, 7);

    v.on_mouse_down(x0, y0, 0);
    let first = v.on_mouse_move(x1, y1, 0.0).unwrap();
    assert_eq!(first, DRAG_DEBOUNCE_MS);

    // a newer rectangle restarts the quiet period
    let second = v.on_mouse_move(x7, y7, 20.0).unwrap();
    assert_eq!(second, 20.0 + DRAG_DEBOUNCE_MS);
    assert!(!v.tick(first));
    assert_eq!(v.selected(), vec![15]);

    // only the last rectangle is applied
    assert!(v.tick(second));
    assert_eq!(v.selected(), vec![0, 1, 6, 7, 15]);

    v.on_mouse_up();
    v.on_click(x7, y7, Modifiers::NONE);
    assert_eq!(v.selected(), vec![0, 1, 6, 7, 15]);
}

/// Press, wobble by one pixel, release and click, as a real hand does.
fn jitter_click(view: &mut GridView, index: usize, modifiers: Modifiers) {
    let (x, y) = center(view, index);
    view.on_mouse_down(x, y, 0);
    assert_eq!(view.on_mouse_move(x + 1.0, y - 1.0, 0.0), None);
    view.on_mouse_up();
    view.on_click(x + 1.0, y - 1.0, modifiers);
}

#[test]
fn test_jitter_click_replaces_selection() {
    let mut v = view();
    click(&mut v, 3, Modifiers::NONE);
    jitter_click(&mut v, 8, Modifiers::NONE);
    assert_eq!(v.selected(), vec![8]);
}

#[test]
fn test_jitter_ctrl_click_toggles_off() {
    let mut v = view();
    click(&mut v, 2, Modifiers::NONE);
    click(&mut v, 5, Modifiers::ctrl());
    jitter_click(&mut v, 2, Modifiers::ctrl());
    assert_eq!(v.selected(), vec![5]);
}

#[test]
fn test_drag_starts_past_threshold() {
    let mut v = view();
    let (x, y) = center(&v, 0);
    v.on_mouse_down(x, y, 0);
    assert_eq!(v.on_mouse_move(x + DRAG_THRESHOLD_PX, y, 0.0), None);
    assert!(v.on_mouse_move(x + DRAG_THRESHOLD_PX + 1.0, y + 10.0, 0.0).is_some());
    v.on_mouse_up();
    assert_eq!(v.selected(), vec![0]);
}

#[test]
fn test_mouse_up_flushes_pending_rectangle() {
    let mut v = view();
    let (x0, y0) = center(&v, 0);
    let (x7, y7) = center(&v, 7);
    v.on_mouse_down(x0, y0, 0);
    v.on_mouse_move(x7, y7, 0.0);
    v.on_mouse_up();
    assert_eq!(v.selected(), vec![0, 1, 6, 7]);
}

#[test]
fn test_mouse_leave_ends_drag() {
    let mut v = view();
    let (x0, y0) = center(&v, 0);
    let (x1, y1) = center(&v, 1);
    v.on_mouse_down(x0, y0, 0);
    v.on_mouse_move(x1, y1, 0.0);
    v.on_mouse_leave();
    assert_eq!(v.selected(), vec![0, 1]);

    // no gesture in progress any more
    assert_eq!(v.on_mouse_move(x0, y0 + 200.0, 100.0), None);
}

#[test]
fn test_secondary_button_never_drags() {
    let mut v = view();
    let (x0, y0) = center(&v, 0);
    let (x7, y7) = center(&v, 7);
    v.on_mouse_down(x0, y0, 2);
    assert_eq!(v.on_mouse_move(x7, y7, 0.0), None);
    v.on_mouse_up();
    assert!(v.selected().is_empty());
}

#[test]
fn test_status_keys_and_escape() {
    let mut v = view();
    click(&mut v, 1, Modifiers::NONE);
    click(&mut v, 2, Modifiers::shift());
    assert_eq!(v.selected(), vec![1, 2]);

    assert!(!v.key_down("1", false));
    let option = v.option();
    assert_eq!(option.grid[1].background_color, palette::SUCCESS_BACKGROUND);
    assert_eq!(option.grid[2].background_color, palette::SUCCESS_BACKGROUND);
    assert_eq!(option.grid[3].background_color, palette::DEFAULT_BACKGROUND);

    v.key_down("Escape", false);
    let option = v.option();
    assert!(option.grid.iter().all(|g| {
        g.background_color == palette::DEFAULT_BACKGROUND && g.border_color == palette::DEFAULT_BORDER
    }));
}

#[test]
fn test_ctrl_a_selects_everything() {
    let mut v = view();
    assert!(v.key_down("a", true));
    assert_eq!(v.selected().len(), 20);
}

#[test]
fn test_context_menu_marks_target() {
    let mut v = view();
    let (x, y) = center(&v, 9);
    assert!(v.on_context_menu(x, y));
    assert_eq!(v.selected(), vec![9]);

    v.apply_menu_status(Status::Warning);
    assert_eq!(v.option().grid[9].background_color, palette::WARNING_BACKGROUND);
}

#[test]
fn test_context_menu_outside_cells() {
    let mut v = view();
    assert!(!v.on_context_menu(WIDTH - 1.0, 1.0));
    assert!(v.selected().is_empty());
}

#[test]
fn test_resize_keeps_hits_aligned() {
    let mut v = view();
    v.resize(WIDTH / 2.0, HEIGHT / 2.0);
    let (x, y) = center(&v, 13);
    assert!(x < WIDTH / 2.0 && y < HEIGHT / 2.0);
    v.on_click(x, y, Modifiers::NONE);
    assert_eq!(v.selected(), vec![13]);
}

#[test]
fn test_config_change_regenerates() {
    let mut v = view();
    click(&mut v, 0, Modifiers::NONE);
    v.set_config(LayoutConfig {
        cell_count: 8,
        columns: 4,
        ..LayoutConfig::default()
    })
    .unwrap();
    assert!(v.selected().is_empty());
    assert_eq!(v.option().grid.len(), 8);
    assert_eq!(v.state().layout().rows, 2);
}

#[test]
fn test_invalid_config_is_reported() {
    let mut v = view();
    let err = v
        .set_config(LayoutConfig {
            cell_count: 0,
            ..LayoutConfig::default()
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ChartGridError::Config(ConfigError::ZeroCellCount)
    ));
    assert_eq!(v.option().grid.len(), 20);

    let err = GridView::new_test(
        LayoutConfig {
            columns: 0,
            ..LayoutConfig::default()
        },
        WIDTH,
        HEIGHT,
    )
    .err()
    .unwrap();
    assert!(err.to_string().contains("column count"));
}

#[test]
fn test_option_json_field_names() {
    let v = view();
    let json = serde_json::to_value(v.option()).unwrap();
    assert_eq!(json["backgroundColor"], "#eee");
    assert_eq!(json["series"][0]["type"], "scatter");
    assert_eq!(json["series"][0]["xAxisIndex"], 0);
    assert_eq!(json["grid"][0]["borderWidth"], 4);
    assert_eq!(json["title"][19]["text"], "3-1");
    assert!(json["xAxis"][0]["axisLabel"]["color"].is_string());
    assert!(json["xAxis"][19]["axisLabel"].get("color").is_none());
}
