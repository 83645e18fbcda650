//! Selection controller tests
//!
//! Click, modifier-click, shift-range, drag-rectangle, keyboard and
//! context-menu rules over cell indices.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use chartgrid::layout::{generate, to_pixels};
use chartgrid::render::palette;
use chartgrid::selection::{KeyCommand, Modifiers, SelectionController};
use chartgrid::{CellState, LayoutConfig, PixelRect, Status};
use test_case::test_case;

fn controller() -> SelectionController {
    SelectionController::new(20)
}

fn default_rects() -> Vec<PixelRect> {
    let layout = generate(&LayoutConfig::default()).unwrap();
    to_pixels(&layout.geometry, 1200.0, 600.0)
}

fn center(rect: &PixelRect) -> (f64, f64) {
    (rect.left + rect.width / 2.0, rect.top + rect.height / 2.0)
}

// ============================================================================
// Pointer rules
// ============================================================================

#[test]
fn test_click_then_ctrl_toggles() {
    let mut c = controller();
    c.pointer_select(Some(2), Modifiers::NONE);
    c.pointer_select(Some(5), Modifiers::ctrl());
    c.pointer_select(Some(2), Modifiers::ctrl());
    assert_eq!(c.selected_indices(), vec![5]);
    assert_eq!(c.anchor(), Some(2));
}

#[test]
fn test_meta_counts_as_command() {
    let mut c = controller();
    c.pointer_select(Some(1), Modifiers::NONE);
    c.pointer_select(
        Some(4),
        Modifiers {
            meta: true,
            ..Modifiers::NONE
        },
    );
    assert_eq!(c.selected_indices(), vec![1, 4]);
}

#[test]
fn test_plain_click_miss_is_noop() {
    let mut c = controller();
    c.pointer_select(Some(3), Modifiers::NONE);
    c.pointer_select(None, Modifiers::NONE);
    assert_eq!(c.selected_indices(), vec![3]);
    assert_eq!(c.anchor(), Some(3));
}

#[test]
fn test_shift_without_anchor_selects_one() {
    let mut c = controller();
    c.pointer_select(Some(9), Modifiers::shift());
    assert_eq!(c.selected_indices(), vec![9]);
    assert_eq!(c.anchor(), Some(9));
}

#[test]
fn test_shift_range_keeps_outside_cells() {
    let mut c = controller();
    c.pointer_select(Some(15), Modifiers::NONE);
    c.pointer_select(Some(3), Modifiers::ctrl());
    c.pointer_select(Some(6), Modifiers::shift());
    assert_eq!(c.selected_indices(), vec![3, 4, 5, 6, 15]);
    assert_eq!(c.anchor(), Some(6));
}

#[test_case(3, 7 ; "forward")]
#[test_case(7, 3 ; "backward")]
fn test_shift_range_is_symmetric(anchor: usize, target: usize) {
    let mut c = controller();
    c.pointer_select(Some(anchor), Modifiers::NONE);
    c.pointer_select(Some(target), Modifiers::shift());
    assert_eq!(c.selected_indices(), vec![3, 4, 5, 6, 7]);
}

#[test]
fn test_ctrl_shift_moves_anchor_only() {
    let mut c = controller();
    c.pointer_select(Some(1), Modifiers::NONE);
    c.pointer_select(
        Some(4),
        Modifiers {
            shift: true,
            ctrl: true,
            meta: false,
        },
    );
    assert_eq!(c.selected_indices(), vec![1]);
    assert_eq!(c.anchor(), Some(4));
}

#[test]
fn test_out_of_range_index_ignored() {
    let mut c = controller();
    c.pointer_select(Some(20), Modifiers::NONE);
    assert!(c.selected_indices().is_empty());
    assert_eq!(c.anchor(), None);
}

// ============================================================================
// Drag rectangle
// ============================================================================

#[test]
fn test_drag_over_two_by_two_block() {
    let rects = default_rects();
    let mut c = controller();
    c.pointer_select(Some(10), Modifiers::NONE);

    let drag = PixelRect::from_corners(center(&rects[0]), center(&rects[7]));
    c.select_in_rect(&drag, &rects);
    assert_eq!(c.selected_indices(), vec![0, 1, 6, 7, 10]);
}

#[test]
fn test_degenerate_drag_selects_nothing() {
    let rects = default_rects();
    let mut c = controller();
    let (x, y) = center(&rects[0]);
    c.select_in_rect(&PixelRect::from_corners((x, y), (x, y + 300.0)), &rects);
    c.select_in_rect(&PixelRect::from_corners((x, y), (x + 300.0, y)), &rects);
    assert_eq!(c.selected_count(), 0);
}

#[test]
fn test_drag_in_gutter_selects_nothing() {
    let rects = default_rects();
    let mut c = controller();
    // between the first and second column
    let gap_left = rects[0].right() + 2.0;
    let gap_right = rects[1].left - 2.0;
    let drag = PixelRect::from_corners((gap_left, 10.0), (gap_right, 500.0));
    c.select_in_rect(&drag, &rects);
    assert_eq!(c.selected_count(), 0);
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_status_then_escape() {
    let mut c = controller();
    c.pointer_select(Some(1), Modifiers::NONE);
    c.pointer_select(Some(2), Modifiers::ctrl());

    assert!(!c.apply_key(KeyCommand::parse("1", false).unwrap()));
    for i in [1, 2] {
        assert_eq!(c.cells()[i].background_color(), palette::SUCCESS_BACKGROUND);
        assert_eq!(c.cells()[i].border_color(), palette::SELECTED_BORDER);
    }

    c.apply_key(KeyCommand::ClearAll);
    assert!(c.cells().iter().all(CellState::is_default));
    assert_eq!(c.anchor(), None);
    assert_eq!(c.cells()[1].border_color(), palette::DEFAULT_BORDER);
    assert_eq!(c.cells()[1].background_color(), palette::DEFAULT_BACKGROUND);
}

#[test]
fn test_status_without_selection_is_noop() {
    let mut c = controller();
    c.apply_key(KeyCommand::Status(Status::Error));
    assert!(c.cells().iter().all(CellState::is_default));
}

#[test]
fn test_select_all_suppresses_default() {
    let mut c = controller();
    c.pointer_select(Some(4), Modifiers::NONE);
    assert!(c.apply_key(KeyCommand::SelectAll));
    assert_eq!(c.selected_count(), 20);
}

#[test_case("Escape", false, Some(KeyCommand::ClearAll) ; "escape")]
#[test_case("a", true, Some(KeyCommand::SelectAll) ; "select all")]
#[test_case("a", false, None ; "bare a")]
#[test_case("1", false, Some(KeyCommand::Status(Status::Success)) ; "success")]
#[test_case("2", false, Some(KeyCommand::Status(Status::Error)) ; "error")]
#[test_case("3", false, Some(KeyCommand::Status(Status::Warning)) ; "warning")]
#[test_case("4", false, None ; "unbound digit")]
fn test_key_mapping(key: &str, command: bool, expected: Option<KeyCommand>) {
    assert_eq!(KeyCommand::parse(key, command), expected);
}

// ============================================================================
// Context menu
// ============================================================================

#[test]
fn test_right_click_with_single_selection_reselects() {
    let mut c = controller();
    c.pointer_select(Some(2), Modifiers::NONE);
    assert!(c.context_click(Some(8)));
    assert_eq!(c.selected_indices(), vec![8]);
    assert_eq!(c.current_target(), Some(8));

    c.apply_menu_status(Status::Warning);
    assert_eq!(c.cells()[8].status, Some(Status::Warning));
}

#[test]
fn test_right_click_keeps_multi_selection() {
    let mut c = controller();
    c.pointer_select(Some(2), Modifiers::NONE);
    c.pointer_select(Some(3), Modifiers::ctrl());
    assert!(c.context_click(Some(12)));
    assert_eq!(c.selected_indices(), vec![2, 3]);
    assert_eq!(c.current_target(), Some(12));

    // menu applies to the whole selection, not the target
    c.apply_menu_status(Status::Error);
    assert_eq!(c.cells()[2].status, Some(Status::Error));
    assert_eq!(c.cells()[3].status, Some(Status::Error));
    assert_eq!(c.cells()[12].status, None);
}

#[test]
fn test_right_click_miss_closes_menu() {
    let mut c = controller();
    c.context_click(Some(5));
    assert!(!c.context_click(None));
    assert_eq!(c.current_target(), None);

    c.apply_menu_status(Status::Success);
    assert!(c.cells().iter().all(|cell| cell.status.is_none()));
}
