//! Schema module - configuration and seed types.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
