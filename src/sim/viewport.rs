//! Viewport mapping between screen pixels and grid cells.
//!
//! The rendering layer owns a pan offset in pixel space; this module keeps
//! the arithmetic that turns a mouse position into a [`Cell`] and back. The
//! division must floor rather than truncate, otherwise every pixel left of
//! or above the origin lands one cell off.

use std::collections::HashSet;

use super::Cell;

/// Pixel-space window onto the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Horizontal pan offset in pixels.
    pub offset_x: f64,
    /// Vertical pan offset in pixels.
    pub offset_y: f64,
    /// Edge length of one cell in pixels. Always non-zero.
    pub cell_size: u32,
}

impl Viewport {
    /// Viewport with no pan applied.
    pub fn new(cell_size: u32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            cell_size,
        }
    }

    /// Map a pixel position to the cell under it.
    pub fn pixel_to_cell(&self, px: f64, py: f64) -> Cell {
        let size = f64::from(self.cell_size);
        Cell::new(
            ((px - self.offset_x) / size).floor() as i64,
            ((py - self.offset_y) / size).floor() as i64,
        )
    }

    /// Pixel position of the top-left corner of `cell`.
    pub fn cell_origin(&self, cell: Cell) -> (f64, f64) {
        let size = f64::from(self.cell_size);
        (
            cell.x as f64 * size + self.offset_x,
            cell.y as f64 * size + self.offset_y,
        )
    }

    /// Shift the view by a drag delta, in pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// True iff `cell` overlaps a view of the given pixel dimensions,
    /// with one cell of margin so partially visible cells still draw.
    pub fn is_visible(&self, cell: Cell, view_width: f64, view_height: f64) -> bool {
        let size = f64::from(self.cell_size);
        let x = cell.x as f64 * size;
        let y = cell.y as f64 * size;

        x > -size - self.offset_x
            && x < view_width + size - self.offset_x
            && y > -size - self.offset_y
            && y < view_height + size - self.offset_y
    }
}

/// Per-press toggle bookkeeping for a held input button.
///
/// While a button stays down the input layer fires every frame; without a
/// latch the cell under the cursor would flip on and off continuously. The
/// latch records which cells were already toggled during the current press
/// and is reset when the button is released. Interaction-layer state only;
/// the engine never sees it.
#[derive(Debug, Clone, Default)]
pub struct ToggleLatch {
    fired: HashSet<Cell>,
}

impl ToggleLatch {
    /// Fresh latch with no press in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a toggle attempt on `cell` during the current press.
    ///
    /// Returns true the first time a cell is seen since the last
    /// [`release`](ToggleLatch::release); the caller should forward only
    /// those to [`GridStore::toggle`](super::GridStore::toggle).
    pub fn fire(&mut self, cell: Cell) -> bool {
        self.fired.insert(cell)
    }

    /// The button went up; the next press starts clean.
    pub fn release(&mut self) {
        self.fired.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_cell_at_origin() {
        let view = Viewport::new(16);
        assert_eq!(view.pixel_to_cell(0.0, 0.0), Cell::new(0, 0));
        assert_eq!(view.pixel_to_cell(15.9, 15.9), Cell::new(0, 0));
        assert_eq!(view.pixel_to_cell(16.0, 16.0), Cell::new(1, 1));
    }

    #[test]
    fn test_negative_pixels_floor_to_negative_cells() {
        let view = Viewport::new(16);
        // Truncation would give cell 0 here; floor gives -1.
        assert_eq!(view.pixel_to_cell(-1.0, -1.0), Cell::new(-1, -1));
        assert_eq!(view.pixel_to_cell(-16.0, -16.0), Cell::new(-1, -1));
        assert_eq!(view.pixel_to_cell(-17.0, -17.0), Cell::new(-2, -2));
    }

    #[test]
    fn test_pan_shifts_the_mapping() {
        let mut view = Viewport::new(16);
        view.pan(10.0, -5.0);
        view.pan(6.0, -11.0);
        assert_eq!(view.offset_x, 16.0);
        assert_eq!(view.offset_y, -16.0);
        // The pixel at the window origin now sits over cell (-1, 1).
        assert_eq!(view.pixel_to_cell(0.0, 0.0), Cell::new(-1, 1));
    }

    #[test]
    fn test_cell_origin_round_trips() {
        let mut view = Viewport::new(16);
        view.pan(-37.0, 12.0);
        for cell in [Cell::new(0, 0), Cell::new(-4, 9), Cell::new(100, -63)] {
            let (px, py) = view.cell_origin(cell);
            assert_eq!(view.pixel_to_cell(px, py), cell);
        }
    }

    #[test]
    fn test_visibility_includes_one_cell_margin() {
        let view = Viewport::new(16);
        assert!(view.is_visible(Cell::new(0, 0), 640.0, 480.0));
        // One cell past the right edge still draws (it may be clipped).
        assert!(view.is_visible(Cell::new(40, 0), 640.0, 480.0));
        assert!(!view.is_visible(Cell::new(41, 0), 640.0, 480.0));
        assert!(!view.is_visible(Cell::new(-2, 0), 640.0, 480.0));
    }

    #[test]
    fn test_visibility_follows_the_pan() {
        let mut view = Viewport::new(16);
        assert!(!view.is_visible(Cell::new(-10, 0), 640.0, 480.0));
        view.pan(200.0, 0.0);
        assert!(view.is_visible(Cell::new(-10, 0), 640.0, 480.0));
    }

    #[test]
    fn test_latch_fires_once_per_press() {
        let mut latch = ToggleLatch::new();
        let cell = Cell::new(3, 3);

        assert!(latch.fire(cell));
        assert!(!latch.fire(cell));
        assert!(latch.fire(Cell::new(3, 4)));

        latch.release();
        assert!(latch.fire(cell));
    }
}
