//! Percentage geometry to surface pixels, plus the pixel-space hit tests.

use tracing::trace;

use crate::types::{CellGeometry, PixelRect};

/// Scale percentage geometry to pixel rectangles for a surface of
/// `width_px` × `height_px`.
pub fn to_pixels(geometry: &[CellGeometry], width_px: f64, height_px: f64) -> Vec<PixelRect> {
    geometry
        .iter()
        .map(|g| PixelRect {
            left: g.left / 100.0 * width_px,
            top: g.top / 100.0 * height_px,
            width: g.width / 100.0 * width_px,
            height: g.height / 100.0 * height_px,
        })
        .collect()
}

/// Index of the first rectangle containing `(x, y)`, edges inclusive.
///
/// Overlapping rectangles resolve to the lowest index.
pub fn hit_test(x: f64, y: f64, rects: &[PixelRect]) -> Option<usize> {
    let hit = rects.iter().position(|r| r.contains(x, y));
    trace!(x, y, ?hit, "hit test");
    hit
}

/// Whether a drag rectangle touches a cell rectangle.
///
/// Closed-interval overlap on both axes. A drag with zero width or height
/// never intersects anything.
pub fn rects_intersect(drag: &PixelRect, cell: &PixelRect) -> bool {
    if drag.is_degenerate() {
        return false;
    }
    drag.left <= cell.right()
        && drag.right() >= cell.left
        && drag.top <= cell.bottom()
        && drag.bottom() >= cell.top
}

/// Indices of every cell rectangle touched by `drag`, in ascending order.
pub fn cells_in_rect(drag: &PixelRect, rects: &[PixelRect]) -> Vec<usize> {
    rects
        .iter()
        .enumerate()
        .filter(|(_, cell)| rects_intersect(drag, cell))
        .map(|(i, _)| i)
        .collect()
}
