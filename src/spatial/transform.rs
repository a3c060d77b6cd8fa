//! Conversion between court meters and host screen pixels
//!
//! Pure linear scaling: the extended court (9 m x 11 m) maps onto the
//! reference screen with the net at the top edge.

use crate::core::config::{EngineConfig, ScreenSize};
use crate::core::types::{PlayerState, Point, Role, RotationSlot};
use crate::spatial::coordinates::{CoordinateBounds, COURT_WIDTH, SERVICE_ZONE_DEPTH};
use crate::spatial::tolerance::Tolerance;
use crate::validation::Violation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Position in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub px: f64,
    pub py: f64,
}

impl ScreenPoint {
    pub fn new(px: f64, py: f64) -> Self {
        Self { px, py }
    }
}

/// Rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenBounds {
    pub min_px: f64,
    pub max_px: f64,
    pub min_py: f64,
    pub max_py: f64,
}

/// Scale factors are fixed at construction and never change afterwards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransformer {
    px_per_meter_x: f64,
    px_per_meter_y: f64,
}

impl CoordinateTransformer {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            px_per_meter_x: screen.width / COURT_WIDTH,
            px_per_meter_y: screen.height / SERVICE_ZONE_DEPTH,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.reference_screen)
    }

    pub fn scale(&self) -> (f64, f64) {
        (self.px_per_meter_x, self.px_per_meter_y)
    }

    #[inline]
    pub fn to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(point.x * self.px_per_meter_x, point.y * self.px_per_meter_y)
    }

    #[inline]
    pub fn to_metric(&self, point: ScreenPoint) -> Point {
        Point::new(point.px / self.px_per_meter_x, point.py / self.px_per_meter_y)
    }

    pub fn bounds_to_screen(&self, bounds: &CoordinateBounds) -> ScreenBounds {
        ScreenBounds {
            min_px: bounds.min_x * self.px_per_meter_x,
            max_px: bounds.max_x * self.px_per_meter_x,
            min_py: bounds.min_y * self.px_per_meter_y,
            max_py: bounds.max_y * self.px_per_meter_y,
        }
    }

    pub fn bounds_to_metric(&self, bounds: &ScreenBounds) -> CoordinateBounds {
        CoordinateBounds::new(
            bounds.min_px / self.px_per_meter_x,
            bounds.max_px / self.px_per_meter_x,
            bounds.min_py / self.px_per_meter_y,
            bounds.max_py / self.px_per_meter_y,
        )
    }

    pub fn to_screen_batch(&self, points: &[Point]) -> Vec<ScreenPoint> {
        points.iter().map(|&p| self.to_screen(p)).collect()
    }

    pub fn to_metric_batch(&self, points: &[ScreenPoint]) -> Vec<Point> {
        points.iter().map(|&p| self.to_metric(p)).collect()
    }

    /// Containment flag for each point, in input order
    pub fn validate_points(
        &self,
        points: &[Point],
        bounds: &CoordinateBounds,
        tol: Tolerance,
    ) -> Vec<bool> {
        points.iter().map(|&p| bounds.contains(p, tol)).collect()
    }

    pub fn clamp_points(
        &self,
        points: &[Point],
        bounds: &CoordinateBounds,
        tol: Tolerance,
    ) -> Vec<Point> {
        points.iter().map(|&p| bounds.clamp(p, tol)).collect()
    }
}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        Self::new(ScreenSize::default())
    }
}

/// Player record as the presentation layer holds it, in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenPlayer {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
    pub slot: u8,
    pub px: f64,
    pub py: f64,
    #[serde(default)]
    pub is_server: bool,
}

/// Moves whole player records across the pixel/meter boundary
#[derive(Debug, Clone, Copy, Default)]
pub struct StateConverter {
    transformer: CoordinateTransformer,
}

impl StateConverter {
    pub fn new(transformer: CoordinateTransformer) -> Self {
        Self { transformer }
    }

    pub fn transformer(&self) -> &CoordinateTransformer {
        &self.transformer
    }

    pub fn to_player_state(&self, player: &ScreenPlayer) -> PlayerState {
        let pos = self
            .transformer
            .to_metric(ScreenPoint::new(player.px, player.py));
        PlayerState {
            id: player.id.clone(),
            display_name: player.display_name.clone(),
            role: player.role,
            slot: player.slot,
            x: pos.x,
            y: pos.y,
            is_server: player.is_server,
        }
    }

    pub fn to_screen_player(&self, player: &PlayerState) -> ScreenPlayer {
        let pos = self.transformer.to_screen(player.position());
        ScreenPlayer {
            id: player.id.clone(),
            display_name: player.display_name.clone(),
            role: player.role,
            slot: player.slot,
            px: pos.px,
            py: pos.py,
            is_server: player.is_server,
        }
    }

    pub fn to_lineup(&self, players: &[ScreenPlayer]) -> Vec<PlayerState> {
        players.iter().map(|p| self.to_player_state(p)).collect()
    }

    /// Diagnostic coordinates of a violation, in pixels
    pub fn violation_to_screen(
        &self,
        violation: &Violation,
    ) -> BTreeMap<RotationSlot, ScreenPoint> {
        violation
            .coordinates
            .iter()
            .flatten()
            .map(|(&slot, &point)| (slot, self.transformer.to_screen(point)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_is_sixty_px_per_meter() {
        let t = CoordinateTransformer::default();
        assert_eq!(t.scale(), (60.0, 60.0));
        assert_eq!(t.to_screen(Point::new(4.5, 9.0)), ScreenPoint::new(270.0, 540.0));
    }

    #[test]
    fn test_metric_screen_inverse() {
        let t = CoordinateTransformer::new(ScreenSize {
            width: 450.0,
            height: 770.0,
        });
        let p = Point::new(3.25, 10.5);
        let back = t.to_metric(t.to_screen(p));
        assert!(Tolerance::new(1e-9).points_equal(p, back));
    }

    #[test]
    fn test_batch_matches_scalar() {
        let t = CoordinateTransformer::default();
        let points = vec![Point::new(1.0, 2.0), Point::new(8.0, 10.0)];
        let batch = t.to_screen_batch(&points);
        for (p, s) in points.iter().zip(&batch) {
            assert_eq!(t.to_screen(*p), *s);
        }
        assert_eq!(t.to_metric_batch(&batch), points);
    }

    #[test]
    fn test_validate_and_clamp_points() {
        let t = CoordinateTransformer::default();
        let tol = Tolerance::default();
        let bounds = CoordinateBounds::new(0.0, 9.0, 0.0, 9.0);
        let points = vec![Point::new(4.0, 4.0), Point::new(9.5, -1.0)];
        assert_eq!(t.validate_points(&points, &bounds, tol), vec![true, false]);
        let clamped = t.clamp_points(&points, &bounds, tol);
        assert_eq!(clamped[1], Point::new(9.0, 0.0));
    }

    #[test]
    fn test_state_converter_round_trip() {
        let conv = StateConverter::default();
        let screen = ScreenPlayer {
            id: "p4".into(),
            display_name: "Lee".into(),
            role: Role::OutsideHitter1,
            slot: 4,
            px: 60.0,
            py: 240.0,
            is_server: false,
        };
        let state = conv.to_player_state(&screen);
        assert_eq!(state.position(), Point::new(1.0, 4.0));
        assert_eq!(conv.to_screen_player(&state), screen);
    }

    #[test]
    fn test_violation_coordinates_to_screen() {
        use crate::validation::ViolationCode;

        let mut coords = BTreeMap::new();
        coords.insert(RotationSlot::LeftFront, Point::new(1.0, 8.0));
        coords.insert(RotationSlot::LeftBack, Point::new(2.0, 8.0));
        let v = Violation::new(
            ViolationCode::FrontBack,
            vec![RotationSlot::LeftFront, RotationSlot::LeftBack],
            "overlap",
        )
        .with_coordinates(coords);

        let transformer = CoordinateTransformer::from_config(&EngineConfig::default());
        let conv = StateConverter::new(transformer);
        let screen = conv.violation_to_screen(&v);
        assert_eq!(screen[&RotationSlot::LeftBack], ScreenPoint::new(120.0, 480.0));
        assert_eq!(screen.len(), 2);
    }
}
