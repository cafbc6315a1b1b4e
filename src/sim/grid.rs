//! Sparse live-cell storage for the unbounded grid.
//!
//! The board has no edges: a cell is alive iff its coordinate is a member of
//! the store's set. Everything else is dead by omission, so memory use scales
//! with the population, not with the addressable grid.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::advance;

/// A cell coordinate on the infinite integer grid.
///
/// Coordinates are signed and unbounded; the simulation never wraps or
/// clamps them. Neighbor arithmetic is `x ± 1` / `y ± 1`, so the only
/// unrepresentable inputs are cells at the very edge of the `i64` range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    /// Column index. May be negative.
    pub x: i64,
    /// Row index. May be negative.
    pub y: i64,
}

impl Cell {
    /// Create a cell at (x, y).
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 immediately adjacent coordinates.
    #[inline]
    pub fn neighbors(self) -> [Cell; 8] {
        let Cell { x, y } = self;
        [
            Cell::new(x - 1, y - 1),
            Cell::new(x, y - 1),
            Cell::new(x + 1, y - 1),
            Cell::new(x - 1, y),
            Cell::new(x + 1, y),
            Cell::new(x - 1, y + 1),
            Cell::new(x, y + 1),
            Cell::new(x + 1, y + 1),
        ]
    }
}

impl From<(i64, i64)> for Cell {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Cell::new(x, y)
    }
}

/// Authoritative owner of the live-cell set.
///
/// All mutation goes through [`toggle`](GridStore::toggle),
/// [`insert`](GridStore::insert), [`remove`](GridStore::remove),
/// [`clear`](GridStore::clear) and [`replace`](GridStore::replace);
/// readers get a shared borrow from [`snapshot`](GridStore::snapshot) and
/// can never alias a mutable view of the set.
#[derive(Debug, Clone, Default)]
pub struct GridStore {
    cells: HashSet<Cell>,
    generation: u64,
}

impl GridStore {
    /// Create an empty board at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board pre-populated with `cells`, at generation zero.
    pub fn from_cells(cells: HashSet<Cell>) -> Self {
        Self {
            cells,
            generation: 0,
        }
    }

    /// True iff `cell` is currently alive.
    #[inline]
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Flip one cell: dead becomes alive, alive becomes dead.
    ///
    /// Two toggles of the same cell restore the prior board.
    pub fn toggle(&mut self, cell: Cell) {
        if !self.cells.insert(cell) {
            self.cells.remove(&cell);
        }
    }

    /// Mark `cell` alive. No effect if it already is.
    pub fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell);
    }

    /// Mark `cell` dead. No effect if it already is.
    pub fn remove(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Kill every cell on the board.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Read-only view of the live-cell set.
    #[inline]
    pub fn snapshot(&self) -> &HashSet<Cell> {
        &self.cells
    }

    /// Swap in a wholly new live-cell set.
    ///
    /// Used by [`step`](GridStore::step) to commit a computed generation;
    /// also handy for installing a seed pattern in one move.
    pub fn replace(&mut self, new_set: HashSet<Cell>) {
        self.cells = new_set;
    }

    /// Number of live cells.
    #[inline]
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Number of generations advanced since the store was created.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance the board one generation and commit the result.
    pub fn step(&mut self) {
        let next = advance(&self.cells);
        self.replace(next);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn test_new_board_is_empty() {
        let store = GridStore::new();
        assert_eq!(store.population(), 0);
        assert_eq!(store.generation(), 0);
        assert!(!store.is_alive(Cell::new(0, 0)));
    }

    #[test]
    fn test_toggle_births_and_kills() {
        let mut store = GridStore::new();
        let cell = Cell::new(-3, 7);

        store.toggle(cell);
        assert!(store.is_alive(cell));

        store.toggle(cell);
        assert!(!store.is_alive(cell));
        assert_eq!(store.population(), 0);
    }

    #[test]
    fn test_clear_absorbs_any_board() {
        let mut store = GridStore::new();
        store.toggle(Cell::new(0, 0));
        store.toggle(Cell::new(5, -2));
        store.toggle(Cell::new(-100, 100));

        store.clear();
        assert!(store.snapshot().is_empty());

        // Clearing an already-empty board is fine too.
        store.clear();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_replace_swaps_wholesale() {
        let mut store = GridStore::new();
        store.toggle(Cell::new(1, 1));

        let new_set: HashSet<Cell> = [Cell::new(2, 2), Cell::new(3, 3)].into_iter().collect();
        store.replace(new_set.clone());

        assert_eq!(store.snapshot(), &new_set);
        assert!(!store.is_alive(Cell::new(1, 1)));
    }

    #[test]
    fn test_step_counts_generations() {
        let mut store = GridStore::new();
        store.step();
        store.step();
        assert_eq!(store.generation(), 2);
        assert_eq!(store.population(), 0);
    }

    fn arb_cell() -> impl Strategy<Value = Cell> {
        (-50i64..50, -50i64..50).prop_map(|(x, y)| Cell::new(x, y))
    }

    proptest! {
        #[test]
        fn test_double_toggle_restores_board(
            cells in proptest::collection::hash_set(arb_cell(), 0..40),
            target in arb_cell(),
        ) {
            let mut store = GridStore::from_cells(cells.clone());
            store.toggle(target);
            store.toggle(target);
            prop_assert_eq!(store.snapshot(), &cells);
        }

        #[test]
        fn test_single_toggle_flips_membership(
            cells in proptest::collection::hash_set(arb_cell(), 0..40),
            target in arb_cell(),
        ) {
            let before = cells.contains(&target);
            let mut store = GridStore::from_cells(cells);
            store.toggle(target);
            prop_assert_eq!(store.is_alive(target), !before);
        }
    }
}
