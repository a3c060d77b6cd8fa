//! Tolerance-aware comparisons for court coordinates
//!
//! Rule checks never compare raw coordinates with `<` or `>`. Everything goes
//! through a `Tolerance` so the official slack is applied uniformly and
//! changing it is a one-constant change.

use crate::core::error::{OverlapError, Result};
use crate::core::types::Point;
use crate::spatial::coordinates::COURT_TOLERANCE;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which side of a value the slack is applied on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToleranceDirection {
    /// `value - eps`
    Min,
    /// `value + eps`
    Max,
}

/// Epsilon used for coordinate comparisons (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tolerance(pub f64);

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance(COURT_TOLERANCE)
    }
}

impl Tolerance {
    pub fn new(eps: f64) -> Self {
        Tolerance(eps)
    }

    #[inline]
    pub fn eps(self) -> f64 {
        self.0
    }

    /// `|a - b| <= eps`
    #[inline]
    pub fn is_equal(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }

    /// Strictly less, beyond tolerance: `a < b - eps`
    #[inline]
    pub fn is_less(self, a: f64, b: f64) -> bool {
        a < b - self.0
    }

    /// Strictly greater, beyond tolerance: `a > b + eps`
    #[inline]
    pub fn is_greater(self, a: f64, b: f64) -> bool {
        a > b + self.0
    }

    #[inline]
    pub fn is_less_or_equal(self, a: f64, b: f64) -> bool {
        !self.is_greater(a, b)
    }

    #[inline]
    pub fn is_greater_or_equal(self, a: f64, b: f64) -> bool {
        !self.is_less(a, b)
    }

    /// Three-way comparison using the same thresholds as `is_less` / `is_greater`
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        if self.is_less(a, b) {
            Ordering::Less
        } else if self.is_greater(a, b) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub fn apply(self, value: f64, direction: ToleranceDirection) -> f64 {
        match direction {
            ToleranceDirection::Min => value - self.0,
            ToleranceDirection::Max => value + self.0,
        }
    }

    /// Inclusive range test, widened by eps on both ends
    pub fn is_within_range(self, value: f64, min: f64, max: f64) -> bool {
        self.is_greater_or_equal(value, min) && self.is_less_or_equal(value, max)
    }

    /// Clamp to `[min, max]`, leaving values within eps of a bound untouched
    pub fn clamp(self, value: f64, min: f64, max: f64) -> f64 {
        if self.is_within_range(value, min, max) {
            value
        } else if value < min {
            min
        } else {
            max
        }
    }

    pub fn points_equal(self, a: Point, b: Point) -> bool {
        self.is_equal(a.x, b.x) && self.is_equal(a.y, b.y)
    }
}

/// Half-up rounding to `digits` decimal places
pub fn round_to_precision(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor + 0.5).floor() / factor
}

/// Candidate nearest to `target` by absolute distance; first wins on ties
pub fn find_closest(target: f64, candidates: &[f64]) -> Result<f64> {
    let mut iter = candidates.iter().copied();
    let first = iter.next().ok_or(OverlapError::EmptyCandidates)?;

    Ok(iter.fold(first, |best, candidate| {
        if (candidate - target).abs() < (best - target).abs() {
            candidate
        } else {
            best
        }
    }))
}
