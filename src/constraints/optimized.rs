//! Batch bound calculation for per-frame drag updates
//!
//! Reads the snapshot once into a slot-indexed table, then computes every
//! slot from that table. Produces the same numbers as `ConstraintCalculator`.

use super::calculator::{bounds_from_entries, BoundsTable, SlotEntry};
use crate::core::config::EngineConfig;
use crate::core::types::{PlayerState, RotationSlot};
use crate::rotation::Lineup;
use crate::spatial::coordinates::{CoordinateBounds, COURT_BOUNDS};
use crate::spatial::tolerance::Tolerance;

/// Snapshot positions keyed by slot; the first player claiming a slot wins
#[derive(Debug, Clone, Copy, Default)]
struct SlotTable([Option<SlotEntry>; 6]);

impl SlotTable {
    fn from_players(players: &[PlayerState]) -> Self {
        let mut table = [None; 6];
        for player in players {
            if let Some(slot) = player.rotation_slot() {
                table[slot.index()].get_or_insert_with(|| SlotEntry::from_player(player));
            }
        }
        SlotTable(table)
    }

    #[inline]
    fn get(&self, slot: RotationSlot) -> Option<SlotEntry> {
        self.0[slot.index()]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OptimizedConstraintCalculator {
    tolerance: Tolerance,
}

impl OptimizedConstraintCalculator {
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(Tolerance::new(config.tolerance))
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    fn bounds_in(&self, table: &SlotTable, slot: RotationSlot) -> CoordinateBounds {
        match table.get(slot) {
            Some(target) => bounds_from_entries(
                slot,
                target,
                slot.adjacent_left().and_then(|s| table.get(s)),
                slot.adjacent_right().and_then(|s| table.get(s)),
                table.get(slot.row_counterpart()),
                self.tolerance,
            ),
            None => COURT_BOUNDS,
        }
    }

    pub fn bounds_for(&self, players: &[PlayerState], slot: RotationSlot) -> CoordinateBounds {
        self.bounds_in(&SlotTable::from_players(players), slot)
    }

    /// Bounds for every slot, all relative to the same pre-drag snapshot
    pub fn bounds_for_all(&self, players: &[PlayerState]) -> BoundsTable {
        let table = SlotTable::from_players(players);
        let missing = table.0.iter().filter(|e| e.is_none()).count();
        if missing > 0 {
            tracing::warn!(missing, "snapshot incomplete, missing slots use court bounds");
        }
        BoundsTable(RotationSlot::ALL.map(|slot| self.bounds_in(&table, slot)))
    }

    pub fn bounds_for_lineup(&self, lineup: &Lineup) -> BoundsTable {
        self.bounds_for_all(lineup.players())
    }
}
