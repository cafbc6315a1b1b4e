//! Generation engine - computes the next board from the current one.
//!
//! The scan is confined to the bounding box of the live region expanded by
//! one ring: any cell further out has zero live neighbors and stays dead
//! under the standard rule, so per-tick cost is proportional to the active
//! area rather than to the (infinite) grid.

use std::collections::HashSet;

use log::debug;

use super::Cell;

/// Axis-aligned rectangle of cells, both corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Smallest (x, y) contained in the box.
    pub min: Cell,
    /// Largest (x, y) contained in the box.
    pub max: Cell,
}

impl BoundingBox {
    /// The single-cell box at the origin.
    ///
    /// Stand-in for the bounding box of an empty board, so that the
    /// degenerate tick still scans a 3x3 region centered on (0, 0).
    pub const fn degenerate() -> Self {
        Self {
            min: Cell::new(0, 0),
            max: Cell::new(0, 0),
        }
    }

    /// Minimal box containing every cell in `cells`, or
    /// [`degenerate`](BoundingBox::degenerate) when the set is empty.
    pub fn of(cells: &HashSet<Cell>) -> Self {
        let mut iter = cells.iter();
        let Some(&first) = iter.next() else {
            return Self::degenerate();
        };

        let mut bbox = Self {
            min: first,
            max: first,
        };
        for &cell in iter {
            bbox.min.x = bbox.min.x.min(cell.x);
            bbox.min.y = bbox.min.y.min(cell.y);
            bbox.max.x = bbox.max.x.max(cell.x);
            bbox.max.y = bbox.max.y.max(cell.y);
        }
        bbox
    }

    /// Grow the box by `margin` cells on every side.
    pub fn expand(self, margin: i64) -> Self {
        Self {
            min: Cell::new(self.min.x - margin, self.min.y - margin),
            max: Cell::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// True iff `cell` lies inside the box (boundaries included).
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.y >= self.min.y && cell.y <= self.max.y
    }

    /// Box width in cells.
    #[inline]
    pub fn width(&self) -> u64 {
        self.max.x.abs_diff(self.min.x) + 1
    }

    /// Box height in cells.
    #[inline]
    pub fn height(&self) -> u64 {
        self.max.y.abs_diff(self.min.y) + 1
    }

    /// Row-major iterator over every cell in the box.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (min, max) = (self.min, self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Cell::new(x, y)))
    }
}

/// Count how many of the 8 neighbors of `cell` are members of `cells`.
///
/// Enumeration order does not matter; only the count feeds the rule.
#[inline]
pub fn live_neighbors(cells: &HashSet<Cell>, cell: Cell) -> u8 {
    cell.neighbors()
        .into_iter()
        .filter(|n| cells.contains(n))
        .count() as u8
}

/// Compute the next generation of `cells` under the standard Life rule.
///
/// A cell is alive in the result iff it has exactly 3 live neighbors, or
/// exactly 2 live neighbors and is alive now. The input set is read-only;
/// the result is a fresh set, so neighbor counts always reflect the prior
/// generation even while the scan is in progress.
///
/// This is a total function: any finite set of coordinates is a valid
/// input, including the empty set.
pub fn advance(cells: &HashSet<Cell>) -> HashSet<Cell> {
    // Re-derived every tick; the box tracks wherever the pattern wanders.
    let scan = BoundingBox::of(cells).expand(1);
    debug!(
        "advancing {} live cells, scan region {}x{} at ({}, {})",
        cells.len(),
        scan.width(),
        scan.height(),
        scan.min.x,
        scan.min.y
    );

    let mut next = HashSet::with_capacity(cells.len());
    for cell in scan.cells() {
        let count = live_neighbors(cells, cell);
        if count == 3 || (count == 2 && cells.contains(&cell)) {
            next.insert(cell);
        }
    }
    next
}
