//! Configuration types for the simulator shell.

use serde::{Deserialize, Serialize};

/// Top-level simulator configuration.
///
/// These knobs belong to the window/rendering shell, not to the engine:
/// the grid itself is unbounded and needs no sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Edge length of one cell in pixels.
    pub cell_size: u32,
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            cell_size: 16,
            width: 640,
            height: 480,
        }
    }
}

impl SimulatorConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroViewport);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cell size must be non-zero")]
    ZeroCellSize,
    #[error("Viewport dimensions (width, height) must be non-zero")]
    ZeroViewport,
}
