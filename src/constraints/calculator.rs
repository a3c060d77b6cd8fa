//! Per-slot drag bounds from the current positions of a player's neighbors

use crate::core::config::EngineConfig;
use crate::core::types::{PlayerState, Point, RotationSlot};
use crate::spatial::coordinates::{
    absolute_bounds, is_in_service_zone, CoordinateBounds, COURT_BOUNDS,
};
use crate::spatial::tolerance::{Tolerance, ToleranceDirection};
use crate::validation::OrderingValidator;
use serde::{Deserialize, Serialize};

/// Extra inset on neighbor edges when clamping, so a clamped position clears
/// the neighbor by more than the tolerance (meters)
const CLAMP_MARGIN: f64 = 1e-6;

/// What the bound calculation needs to know about one player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotEntry {
    pub position: Point,
    pub is_server: bool,
}

impl SlotEntry {
    pub fn from_player(player: &PlayerState) -> Self {
        Self {
            position: player.position(),
            is_server: player.is_server,
        }
    }

    fn in_service_zone(&self, tol: Tolerance) -> bool {
        self.is_server && is_in_service_zone(self.position, tol)
    }

    fn moved_to(self, position: Point) -> Self {
        Self { position, ..self }
    }
}

/// Bounds for all six slots, indexed by slot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsTable(pub [CoordinateBounds; 6]);

impl BoundsTable {
    pub fn get(&self, slot: RotationSlot) -> CoordinateBounds {
        self.0[slot.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (RotationSlot, CoordinateBounds)> + '_ {
        RotationSlot::ALL.into_iter().zip(self.0.iter().copied())
    }
}

fn column_exempt(target: SlotEntry, counterpart: SlotEntry, tol: Tolerance) -> bool {
    target.in_service_zone(tol) || counterpart.in_service_zone(tol)
}

/// Rectangle with neighbor edges pushed `step` past each neighbor
fn neighbor_bounds(
    slot: RotationSlot,
    target: SlotEntry,
    left: Option<SlotEntry>,
    right: Option<SlotEntry>,
    counterpart: Option<SlotEntry>,
    step: Tolerance,
    exempt: bool,
) -> CoordinateBounds {
    let mut bounds = absolute_bounds(target.is_server);

    if let Some(left) = left.filter(|e| e.position.is_finite()) {
        bounds.min_x = bounds
            .min_x
            .max(step.apply(left.position.x, ToleranceDirection::Max));
    }

    if let Some(right) = right.filter(|e| e.position.is_finite()) {
        bounds.max_x = bounds
            .max_x
            .min(step.apply(right.position.x, ToleranceDirection::Min));
    }

    if let Some(other) = counterpart.filter(|e| e.position.is_finite()) {
        if !exempt {
            if slot.is_front_row() {
                bounds.max_y = bounds
                    .max_y
                    .min(step.apply(other.position.y, ToleranceDirection::Min));
            } else {
                bounds.min_y = bounds
                    .min_y
                    .max(step.apply(other.position.y, ToleranceDirection::Max));
            }
        }
    }

    bounds
}

/// Shared bound arithmetic.
///
/// Each neighbor contributes its coordinate pushed one tolerance step in the
/// tightening direction; the result is intersected with the absolute bounds
/// for the target. Missing neighbors leave their direction unconstrained.
///
/// Court edges are inclusive. Neighbor edges are where the overlap rule
/// starts to fail, so a point exactly on one is already an overlap.
pub fn bounds_from_entries(
    slot: RotationSlot,
    target: SlotEntry,
    left: Option<SlotEntry>,
    right: Option<SlotEntry>,
    counterpart: Option<SlotEntry>,
    tol: Tolerance,
) -> CoordinateBounds {
    let exempt = counterpart.map_or(false, |other| column_exempt(target, other, tol));
    neighbor_bounds(slot, target, left, right, counterpart, tol, exempt)
}

/// A slot's own entry and the entries of the players it is compared with
#[derive(Debug, Clone, Copy)]
struct Surroundings {
    target: SlotEntry,
    left: Option<SlotEntry>,
    right: Option<SlotEntry>,
    counterpart: Option<SlotEntry>,
}

impl Surroundings {
    fn exempt_at(&self, position: Point, tol: Tolerance) -> bool {
        match self.counterpart {
            Some(other) => column_exempt(self.target.moved_to(position), other, tol),
            None => false,
        }
    }

    fn bounds(&self, slot: RotationSlot, step: Tolerance, exempt: bool) -> CoordinateBounds {
        neighbor_bounds(
            slot,
            self.target,
            self.left,
            self.right,
            self.counterpart,
            step,
            exempt,
        )
    }
}

/// Straightforward calculator: looks each neighbor up in the snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintCalculator {
    tolerance: Tolerance,
}

impl ConstraintCalculator {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(Tolerance::new(config.tolerance))
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    fn find(players: &[PlayerState], slot: RotationSlot) -> Option<SlotEntry> {
        players
            .iter()
            .find(|p| p.slot == slot.number())
            .map(SlotEntry::from_player)
    }

    fn surroundings(players: &[PlayerState], slot: RotationSlot) -> Option<Surroundings> {
        Some(Surroundings {
            target: Self::find(players, slot)?,
            left: slot.adjacent_left().and_then(|s| Self::find(players, s)),
            right: slot.adjacent_right().and_then(|s| Self::find(players, s)),
            counterpart: Self::find(players, slot.row_counterpart()),
        })
    }

    /// Legal rectangle for `slot` given everyone else where they are now.
    ///
    /// The server exemption follows where the server stands now. A server in
    /// the service zone gets no column bound, so dragging it forward past its
    /// front-row counterpart is not caught here; re-validate after moving the
    /// server, or use `is_position_allowed` for the exact answer.
    pub fn bounds_for(&self, players: &[PlayerState], slot: RotationSlot) -> CoordinateBounds {
        let Some(around) = Self::surroundings(players, slot) else {
            tracing::warn!(slot = slot.number(), "slot missing from snapshot, using court bounds");
            return COURT_BOUNDS;
        };

        let exempt = around.exempt_at(around.target.position, self.tolerance);
        let bounds = around.bounds(slot, self.tolerance, exempt);

        tracing::trace!(slot = slot.number(), ?bounds, "bounds computed");
        bounds
    }

    pub fn bounds_for_all(&self, players: &[PlayerState]) -> BoundsTable {
        BoundsTable(RotationSlot::ALL.map(|slot| self.bounds_for(players, slot)))
    }

    /// Whether moving `slot` to `point` keeps every pair it belongs to legal.
    ///
    /// Uses the same predicates as the validator, so neighbor edges are
    /// exclusive and the exemption is judged at `point`. Court edges stay
    /// inclusive.
    pub fn is_position_allowed(
        &self,
        players: &[PlayerState],
        slot: RotationSlot,
        point: Point,
    ) -> bool {
        if !point.is_finite() {
            return false;
        }
        let Some(around) = Self::surroundings(players, slot) else {
            return COURT_BOUNDS.contains_strict(point);
        };
        if !absolute_bounds(around.target.is_server).contains_strict(point) {
            return false;
        }

        let tol = self.tolerance;
        let finite = |e: &SlotEntry| e.position.is_finite();

        if let Some(left) = around.left.filter(finite) {
            if OrderingValidator::row_pair_violated(left.position, point, tol) {
                return false;
            }
        }
        if let Some(right) = around.right.filter(finite) {
            if OrderingValidator::row_pair_violated(point, right.position, tol) {
                return false;
            }
        }
        match around.counterpart.filter(finite) {
            Some(_) if around.exempt_at(point, tol) => true,
            Some(other) if slot.is_front_row() => {
                !OrderingValidator::column_pair_violated(point, other.position, tol)
            }
            Some(other) => !OrderingValidator::column_pair_violated(other.position, point, tol),
            None => true,
        }
    }

    /// Nearest position to `point` that `is_position_allowed` accepts.
    ///
    /// Clamps exactly, with neighbor edges inset by a hair so the result
    /// clears each neighbor by more than the tolerance. Falls back to the
    /// court bounds when the slot is missing. When the neighbors already
    /// overlap each other there is no legal position and the result sits on
    /// the tighter edge.
    pub fn clamp_position(
        &self,
        players: &[PlayerState],
        slot: RotationSlot,
        point: Point,
    ) -> Point {
        let Some(around) = Self::surroundings(players, slot) else {
            return COURT_BOUNDS.clamp_strict(point);
        };

        let tol = self.tolerance;
        let step = Tolerance::new(tol.eps() + CLAMP_MARGIN);
        let exempt_now = around.exempt_at(around.target.position, tol);
        let clamped = around.bounds(slot, step, exempt_now).clamp_strict(point);

        // A server pulled out of the service zone loses its exemption
        if exempt_now && !around.exempt_at(clamped, tol) {
            return around.bounds(slot, step, false).clamp_strict(point);
        }
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::coordinates::EXTENDED_BOUNDS;
    use crate::validation::OverlapValidator;

    fn legal() -> Vec<PlayerState> {
        vec![
            PlayerState::new("p1", 1, 7.0, 8.0).serving(),
            PlayerState::new("p2", 2, 8.0, 4.0),
            PlayerState::new("p3", 3, 4.5, 4.0),
            PlayerState::new("p4", 4, 1.0, 4.0),
            PlayerState::new("p5", 5, 2.0, 8.0),
            PlayerState::new("p6", 6, 4.5, 8.0),
        ]
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_middle_front_bounds() {
        let calc = ConstraintCalculator::default();
        let b = calc.bounds_for(&legal(), RotationSlot::MiddleFront);
        assert!(close(b.min_x, 1.03));
        assert!(close(b.max_x, 7.97));
        assert!(close(b.min_y, 0.0));
        assert!(close(b.max_y, 7.97));
    }

    #[test]
    fn test_edge_slots_use_court_lines() {
        let calc = ConstraintCalculator::default();
        let lf = calc.bounds_for(&legal(), RotationSlot::LeftFront);
        assert_eq!(lf.min_x, 0.0);
        assert!(close(lf.max_x, 4.47));

        let lb = calc.bounds_for(&legal(), RotationSlot::LeftBack);
        assert!(close(lb.min_y, 4.03));
        assert_eq!(lb.max_y, 9.0);
    }

    #[test]
    fn test_server_gets_service_zone_depth() {
        let calc = ConstraintCalculator::default();
        let b = calc.bounds_for(&legal(), RotationSlot::RightBack);
        assert_eq!(b.max_y, EXTENDED_BOUNDS.max_y);
        assert!(close(b.min_x, 4.53));
        assert_eq!(b.max_x, 9.0);
        assert!(close(b.min_y, 4.03));
    }

    #[test]
    fn test_server_in_service_zone_frees_counterpart() {
        let calc = ConstraintCalculator::default();
        let mut players = legal();
        players[0].y = 10.0;
        let rf = calc.bounds_for(&players, RotationSlot::RightFront);
        assert_eq!(rf.max_y, 9.0);
        let rb = calc.bounds_for(&players, RotationSlot::RightBack);
        assert_eq!(rb.min_y, 0.0);
    }

    #[test]
    fn test_missing_slot_falls_back() {
        let calc = ConstraintCalculator::default();
        let players: Vec<_> = legal().into_iter().filter(|p| p.slot != 3).collect();
        assert_eq!(calc.bounds_for(&players, RotationSlot::MiddleFront), COURT_BOUNDS);
        // Slot 2 loses its left constraint only
        let rf = calc.bounds_for(&players, RotationSlot::RightFront);
        assert_eq!(rf.min_x, 0.0);
    }

    #[test]
    fn test_position_allowed_and_clamp() {
        let calc = ConstraintCalculator::default();
        let players = legal();
        let slot = RotationSlot::MiddleFront;
        assert!(calc.is_position_allowed(&players, slot, Point::new(5.0, 3.0)));
        assert!(!calc.is_position_allowed(&players, slot, Point::new(8.5, 3.0)));
        assert!(!calc.is_position_allowed(&players, slot, Point::new(f64::NAN, 3.0)));
        let clamped = calc.clamp_position(&players, slot, Point::new(8.5, 3.0));
        assert!(clamped.x < 7.97 && clamped.x > 7.9699);
        assert_eq!(clamped.y, 3.0);
    }

    fn moved(players: &[PlayerState], slot: RotationSlot, point: Point) -> Vec<PlayerState> {
        let mut players = players.to_vec();
        for p in players.iter_mut().filter(|p| p.slot == slot.number()) {
            p.x = point.x;
            p.y = point.y;
        }
        players
    }

    #[test]
    fn test_neighbor_edges_are_exclusive() {
        let calc = ConstraintCalculator::default();
        let validator = OverlapValidator::default();
        let players = legal();
        let slot = RotationSlot::MiddleFront;
        let b = calc.bounds_for(&players, slot);

        // On the edge shared with slot 2 the pair is already level
        let edge = Point::new(b.max_x, 3.0);
        assert!(!validator.validate(&moved(&players, slot, edge)).is_legal);
        assert!(!calc.is_position_allowed(&players, slot, edge));
        assert!(!calc.is_position_allowed(&players, slot, Point::new(4.5, b.max_y)));

        // Court edges stay inclusive
        assert!(calc.is_position_allowed(&players, slot, Point::new(4.5, 0.0)));
        let corner = Point::new(0.0, 4.0);
        assert!(calc.is_position_allowed(&players, RotationSlot::LeftFront, corner));
    }

    #[test]
    fn test_allowed_corners_validate_legal() {
        let calc = ConstraintCalculator::default();
        let validator = OverlapValidator::default();
        let players = legal();
        for slot in RotationSlot::ALL {
            let b = calc.bounds_for(&players, slot);
            let corners = [
                Point::new(b.min_x, b.min_y),
                Point::new(b.min_x, b.max_y),
                Point::new(b.max_x, b.min_y),
                Point::new(b.max_x, b.max_y),
            ];
            for point in corners {
                if calc.is_position_allowed(&players, slot, point) {
                    let result = validator.validate(&moved(&players, slot, point));
                    assert!(result.is_legal, "slot {slot} at {point:?}: {:?}", result.violations);
                }
            }
        }
    }

    #[test]
    fn test_clamped_positions_validate_legal() {
        let calc = ConstraintCalculator::default();
        let validator = OverlapValidator::default();
        let players = legal();
        let far = [
            Point::new(-3.0, -3.0),
            Point::new(12.0, -3.0),
            Point::new(-3.0, 13.0),
            Point::new(12.0, 13.0),
            Point::new(7.99, 3.0),
            Point::new(4.5, 8.0),
        ];
        for slot in RotationSlot::ALL {
            for point in far {
                let clamped = calc.clamp_position(&players, slot, point);
                assert!(calc.is_position_allowed(&players, slot, clamped));
                let result = validator.validate(&moved(&players, slot, clamped));
                assert!(result.is_legal, "slot {slot} at {clamped:?}: {:?}", result.violations);
            }
        }
    }

    #[test]
    fn test_clamp_pulls_server_back_behind_counterpart() {
        let calc = ConstraintCalculator::default();
        let validator = OverlapValidator::default();
        let mut players = legal();
        players[0].y = 10.0;

        // Exempt while serving from the zone, but the drag leaves the zone
        let slot = RotationSlot::RightBack;
        let clamped = calc.clamp_position(&players, slot, Point::new(7.0, 2.0));
        assert!(clamped.y > 4.03);
        assert!(validator.validate(&moved(&players, slot, clamped)).is_legal);
        assert!(!calc.is_position_allowed(&players, slot, Point::new(7.0, 2.0)));
    }
}
