//! Board statistics for progress reporting.

use super::{BoundingBox, GridStore};

/// Point-in-time summary of a board, computed from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Generations advanced so far.
    pub generation: u64,
    /// Number of live cells.
    pub population: usize,
    /// Width of the live region in cells. Zero for an empty board.
    pub extent_width: u64,
    /// Height of the live region in cells. Zero for an empty board.
    pub extent_height: u64,
}

impl GenerationStats {
    /// Summarize the current state of `store`.
    pub fn from_store(store: &GridStore) -> Self {
        let cells = store.snapshot();
        let (extent_width, extent_height) = if cells.is_empty() {
            (0, 0)
        } else {
            let bbox = BoundingBox::of(cells);
            (bbox.width(), bbox.height())
        };

        Self {
            generation: store.generation(),
            population: store.population(),
            extent_width,
            extent_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Cell;

    #[test]
    fn test_empty_board_has_zero_extent() {
        let stats = GenerationStats::from_store(&GridStore::new());
        assert_eq!(stats.population, 0);
        assert_eq!(stats.extent_width, 0);
        assert_eq!(stats.extent_height, 0);
    }

    #[test]
    fn test_extent_spans_the_live_region() {
        let mut store = GridStore::new();
        store.insert(Cell::new(-2, 0));
        store.insert(Cell::new(3, 4));

        let stats = GenerationStats::from_store(&store);
        assert_eq!(stats.population, 2);
        assert_eq!(stats.extent_width, 6);
        assert_eq!(stats.extent_height, 5);
    }

    #[test]
    fn test_generation_tracks_steps() {
        let mut store = GridStore::new();
        store.insert(Cell::new(0, 0));
        store.insert(Cell::new(1, 0));
        store.insert(Cell::new(0, 1));
        store.insert(Cell::new(1, 1));
        store.step();
        store.step();

        let stats = GenerationStats::from_store(&store);
        assert_eq!(stats.generation, 2);
        assert_eq!(stats.population, 4);
    }
}
