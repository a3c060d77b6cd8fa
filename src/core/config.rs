//! Engine configuration with documented constants
//!
//! The engine holds no global state; validators, calculators and caches are
//! built from an `EngineConfig` value owned by the caller.

use crate::core::error::{OverlapError, Result};
use crate::spatial::coordinates::COURT_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Reference screen size the transformer scales against (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ScreenSize {
    fn default() -> Self {
        // 60 px per meter over the 9 m x 11 m extended court
        Self {
            width: 540.0,
            height: 660.0,
        }
    }
}

/// Configuration for the overlap engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Slack applied to every coordinate comparison (meters)
    ///
    /// Absorbs floating-point noise and drag jitter. Two players closer than
    /// this along an axis are treated as level with each other.
    pub tolerance: f64,

    /// Screen size the coordinate transformer maps the extended court onto
    pub reference_screen: ScreenSize,

    // === BATCH PROCESSING ===
    /// Minimum lineup count before batch validation runs in parallel
    ///
    /// A single lineup validates in well under a microsecond, so thread
    /// overhead only pays off for large batches.
    pub parallel_threshold: usize,

    /// Maximum entries held by each result cache before eviction
    pub cache_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: COURT_TOLERANCE,
            reference_screen: ScreenSize::default(),
            parallel_threshold: 64,
            cache_capacity: 256,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; absent keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(OverlapError::InvalidConfig(format!(
                "tolerance ({}) must be a non-negative finite number",
                self.tolerance
            )));
        }

        // Anything this large would let players swap sides undetected
        if self.tolerance >= 0.5 {
            return Err(OverlapError::InvalidConfig(format!(
                "tolerance ({}) should be < 0.5 m",
                self.tolerance
            )));
        }

        let screen = self.reference_screen;
        if !(screen.width > 0.0 && screen.height > 0.0) {
            return Err(OverlapError::InvalidConfig(format!(
                "reference_screen ({} x {}) must be positive",
                screen.width, screen.height
            )));
        }

        if self.cache_capacity == 0 {
            return Err(OverlapError::InvalidConfig(
                "cache_capacity must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
