//! Court coordinate system
//!
//! Metric space for one half of the court, seen from above:
//! - X: 0 = left sideline, 9 = right sideline (facing the net)
//! - Y: 0 = net, 9 = endline, 9..11 = service zone behind the endline
//!
//! Only the server may legitimately stand beyond the endline.

use crate::core::types::Point;
use crate::spatial::tolerance::Tolerance;
use serde::{Deserialize, Serialize};

/// Court width along the net (meters)
pub const COURT_WIDTH: f64 = 9.0;

/// Distance from the net to the endline (meters)
pub const COURT_DEPTH: f64 = 9.0;

/// Distance from the net to the back of the service zone (meters)
pub const SERVICE_ZONE_DEPTH: f64 = 11.0;

/// Official comparison slack (meters)
pub const COURT_TOLERANCE: f64 = 0.03;

/// Axis-aligned rectangle in court meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Playing area: x in [0, 9], y in [0, 9]
pub const COURT_BOUNDS: CoordinateBounds = CoordinateBounds {
    min_x: 0.0,
    max_x: COURT_WIDTH,
    min_y: 0.0,
    max_y: COURT_DEPTH,
};

/// Playing area plus service zone: x in [0, 9], y in [0, 11]
pub const EXTENDED_BOUNDS: CoordinateBounds = CoordinateBounds {
    min_x: 0.0,
    max_x: COURT_WIDTH,
    min_y: 0.0,
    max_y: SERVICE_ZONE_DEPTH,
};

impl CoordinateBounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when no point satisfies both axis ranges
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Tightest rectangle satisfying both
    pub fn intersect(&self, other: &CoordinateBounds) -> CoordinateBounds {
        CoordinateBounds {
            min_x: self.min_x.max(other.min_x),
            max_x: self.max_x.min(other.max_x),
            min_y: self.min_y.max(other.min_y),
            max_y: self.max_y.min(other.max_y),
        }
    }

    /// Tolerant inclusive containment
    pub fn contains(&self, point: Point, tol: Tolerance) -> bool {
        tol.is_within_range(point.x, self.min_x, self.max_x)
            && tol.is_within_range(point.y, self.min_y, self.max_y)
    }

    /// Exact inclusive containment, no slack
    pub fn contains_strict(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Exact clamp onto the rectangle, no slack. Non-finite input lands on
    /// the lower edge.
    pub fn clamp_strict(&self, point: Point) -> Point {
        Point::new(
            point.x.max(self.min_x).min(self.max_x),
            point.y.max(self.min_y).min(self.max_y),
        )
    }

    pub fn clamp(&self, point: Point, tol: Tolerance) -> Point {
        Point::new(
            tol.clamp(point.x, self.min_x, self.max_x),
            tol.clamp(point.y, self.min_y, self.max_y),
        )
    }
}

/// Absolute bounds a player may occupy before any neighbor constraints
pub fn absolute_bounds(is_server: bool) -> CoordinateBounds {
    if is_server {
        EXTENDED_BOUNDS
    } else {
        COURT_BOUNDS
    }
}

pub fn is_within_court(point: Point, tol: Tolerance) -> bool {
    COURT_BOUNDS.contains(point, tol)
}

pub fn is_within_extended(point: Point, tol: Tolerance) -> bool {
    EXTENDED_BOUNDS.contains(point, tol)
}

/// Behind the endline but not past the back of the service zone
pub fn is_in_service_zone(point: Point, tol: Tolerance) -> bool {
    tol.is_greater(point.y, COURT_DEPTH) && tol.is_less_or_equal(point.y, SERVICE_ZONE_DEPTH)
}
