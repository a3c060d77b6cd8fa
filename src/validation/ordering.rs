//! Positional validation: left-right order within rows, front-back order within columns

use super::{Violation, ViolationCode};
use crate::core::types::{PlayerState, Point, RotationSlot};
use crate::rotation::neighbors::{row_slots, slot_at, Column, Row};
use crate::rotation::Lineup;
use crate::spatial::coordinates::is_in_service_zone;
use crate::spatial::tolerance::Tolerance;
use std::collections::BTreeMap;

const COLUMNS: [Column; 3] = [Column::Left, Column::Middle, Column::Right];

pub struct OrderingValidator;

impl OrderingValidator {
    /// Adjacent (left, right) pairs: front row left to right, then back row
    pub fn row_pairs() -> impl Iterator<Item = (RotationSlot, RotationSlot)> {
        [Row::Front, Row::Back].into_iter().flat_map(|row| {
            let slots = row_slots(row);
            [(slots[0], slots[1]), (slots[1], slots[2])]
        })
    }

    /// (front, back) pairs in column order left, middle, right
    pub fn column_pairs() -> impl Iterator<Item = (RotationSlot, RotationSlot)> {
        COLUMNS.into_iter().map(|column| {
            let front = slot_at(Row::Front, column);
            (front, front.row_counterpart())
        })
    }

    /// The left player must be clearly left of the right player
    #[inline]
    pub fn row_pair_violated(left: Point, right: Point, tol: Tolerance) -> bool {
        !tol.is_less(left.x, right.x)
    }

    /// Server standing in the service zone frees its column pair
    pub fn is_front_back_exempt(front: &PlayerState, back: &PlayerState, tol: Tolerance) -> bool {
        [front, back]
            .iter()
            .any(|p| p.is_server && is_in_service_zone(p.position(), tol))
    }

    /// Column order alone, before any server exemption
    #[inline]
    pub fn column_pair_violated(front: Point, back: Point, tol: Tolerance) -> bool {
        !tol.is_less(front.y, back.y)
    }

    /// The front player must be clearly closer to the net than the back player
    pub fn front_back_violated(front: &PlayerState, back: &PlayerState, tol: Tolerance) -> bool {
        !Self::is_front_back_exempt(front, back, tol)
            && Self::column_pair_violated(front.position(), back.position(), tol)
    }

    pub fn validate_row_order(lineup: &Lineup, tol: Tolerance) -> Vec<Violation> {
        let mut errors = Vec::new();

        for (left, right) in Self::row_pairs() {
            let lp = lineup.player(left);
            let rp = lineup.player(right);
            if Self::row_pair_violated(lp.position(), rp.position(), tol) {
                errors.push(
                    Violation::new(
                        ViolationCode::RowOrder,
                        vec![left, right],
                        format!(
                            "{} must be left of {} (x {:.2} vs {:.2})",
                            lp.describe(),
                            rp.describe(),
                            lp.x,
                            rp.x
                        ),
                    )
                    .with_coordinates(Self::coordinates(lineup, &[left, right])),
                );
            }
        }

        errors
    }

    pub fn validate_front_back(lineup: &Lineup, tol: Tolerance) -> Vec<Violation> {
        let mut errors = Vec::new();

        for (front, back) in Self::column_pairs() {
            let fp = lineup.player(front);
            let bp = lineup.player(back);
            if Self::front_back_violated(fp, bp, tol) {
                errors.push(
                    Violation::new(
                        ViolationCode::FrontBack,
                        vec![front, back],
                        format!(
                            "{} must be closer to the net than {} (y {:.2} vs {:.2})",
                            fp.describe(),
                            bp.describe(),
                            fp.y,
                            bp.y
                        ),
                    )
                    .with_coordinates(Self::coordinates(lineup, &[front, back])),
                );
            }
        }

        errors
    }

    /// Early-exit check with no message building
    pub fn any_violation(lineup: &Lineup, tol: Tolerance) -> bool {
        Self::row_pairs().any(|(l, r)| {
            Self::row_pair_violated(lineup.position(l), lineup.position(r), tol)
        }) || Self::column_pairs()
            .any(|(f, b)| Self::front_back_violated(lineup.player(f), lineup.player(b), tol))
    }

    fn coordinates(lineup: &Lineup, slots: &[RotationSlot]) -> BTreeMap<RotationSlot, Point> {
        slots.iter().map(|&s| (s, lineup.position(s))).collect()
    }
}
