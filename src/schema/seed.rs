//! Seed patterns for populating a fresh board.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::sim::Cell;

/// Complete seed specification for board initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to place on the empty board.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Glider { origin: (0, 0) },
        }
    }
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// 2x2 block still life.
    Block {
        /// Top-left cell of the block.
        origin: (i64, i64),
    },
    /// Horizontal period-2 blinker.
    Blinker {
        /// Top-left cell of the pattern's 3x3 frame.
        origin: (i64, i64),
    },
    /// Standard 5-cell glider, traveling down-right.
    Glider {
        /// Top-left cell of the pattern's 3x3 frame.
        origin: (i64, i64),
    },
    /// Random soup over a rectangle.
    Soup {
        /// Rectangle width in cells.
        width: u32,
        /// Rectangle height in cells.
        height: u32,
        /// Probability of each cell starting alive (clamped to [0, 1]).
        density: f64,
        /// Random seed. The same seed always yields the same soup.
        seed: u64,
    },
    /// Explicit cell list.
    Cells {
        /// Coordinates of every live cell.
        cells: Vec<(i64, i64)>,
    },
}

impl Seed {
    /// Generate the live-cell set described by this seed.
    pub fn generate(&self) -> HashSet<Cell> {
        match &self.pattern {
            Pattern::Block { origin } => offset(&[(0, 0), (1, 0), (0, 1), (1, 1)], *origin),
            Pattern::Blinker { origin } => offset(&[(0, 1), (1, 1), (2, 1)], *origin),
            Pattern::Glider { origin } => {
                offset(&[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)], *origin)
            }
            Pattern::Soup {
                width,
                height,
                density,
                seed,
            } => {
                let density = density.clamp(0.0, 1.0);
                let mut rng = StdRng::seed_from_u64(*seed);
                let mut cells = HashSet::new();
                for y in 0..i64::from(*height) {
                    for x in 0..i64::from(*width) {
                        if rng.gen_bool(density) {
                            cells.insert(Cell::new(x, y));
                        }
                    }
                }
                cells
            }
            Pattern::Cells { cells } => cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
        }
    }
}

fn offset(cells: &[(i64, i64)], origin: (i64, i64)) -> HashSet<Cell> {
    cells
        .iter()
        .map(|&(x, y)| Cell::new(x + origin.0, y + origin.1))
        .collect()
}
