//! Sparse Life - Conway's Game of Life on an unbounded integer grid.
//!
//! This crate implements the simulation core of an interactive Life
//! program: a sparse set of live cells, the standard birth/survival
//! rule evaluated over the bounding box of the live region, and the
//! coordinate mapping between screen pixels and grid cells. Rendering
//! and input polling live outside the crate and talk to it through
//! [`GridStore`], [`advance`] and [`Viewport`].
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration and seed-pattern types
//! - `sim`: The live-cell store, the generation engine and the viewport
//!   mapping
//!
//! # Example
//!
//! ```rust
//! use sparse_life::{Cell, GridStore};
//!
//! let mut store = GridStore::new();
//!
//! // A horizontal blinker.
//! store.toggle(Cell::new(0, 1));
//! store.toggle(Cell::new(1, 1));
//! store.toggle(Cell::new(2, 1));
//!
//! // One generation later it stands upright.
//! store.step();
//! assert!(store.is_alive(Cell::new(1, 0)));
//! assert!(store.is_alive(Cell::new(1, 1)));
//! assert!(store.is_alive(Cell::new(1, 2)));
//! assert_eq!(store.population(), 3);
//! ```

pub mod schema;
pub mod sim;

// Re-export commonly used types
pub use schema::{ConfigError, Pattern, Seed, SimulatorConfig};
pub use sim::{BoundingBox, Cell, GenerationStats, GridStore, ToggleLatch, Viewport, advance};
