//! Drag constraint bounds and result caching

pub mod cache;
pub mod calculator;
pub mod optimized;

pub use cache::{BoundsCache, CacheStats, LineupFingerprint, ValidationCache};
pub use calculator::{bounds_from_entries, BoundsTable, ConstraintCalculator, SlotEntry};
pub use optimized::OptimizedConstraintCalculator;
