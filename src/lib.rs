//! Volley Overlap - volleyball overlap-rule validation engine
//!
//! Pure, synchronous checks of a six-player lineup at the moment of serve,
//! plus per-slot drag bounds for interactive editors.

pub mod constraints;
pub mod core;
pub mod rotation;
pub mod spatial;
pub mod validation;

pub use crate::constraints::{ConstraintCalculator, OptimizedConstraintCalculator};
pub use crate::core::{EngineConfig, OverlapError, PlayerState, Point, Role, RotationSlot};
pub use crate::rotation::Lineup;
pub use crate::spatial::{CoordinateBounds, Tolerance};
pub use crate::validation::{OverlapResult, OverlapValidator, Violation, ViolationCode};
