//! Simulation module - live-cell storage and the generation engine.

mod engine;
mod grid;
mod stats;
mod viewport;

pub use engine::*;
pub use grid::*;
pub use stats::*;
pub use viewport::*;
