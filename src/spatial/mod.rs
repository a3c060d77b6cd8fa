//! Court geometry: coordinate space, tolerance, and screen conversion

pub mod coordinates;
pub mod tolerance;
pub mod transform;

pub use coordinates::{
    absolute_bounds, is_in_service_zone, is_within_court, is_within_extended, CoordinateBounds,
    COURT_BOUNDS, COURT_TOLERANCE, EXTENDED_BOUNDS,
};
pub use tolerance::{find_closest, round_to_precision, Tolerance, ToleranceDirection};
pub use transform::{CoordinateTransformer, ScreenBounds, ScreenPlayer, ScreenPoint, StateConverter};
