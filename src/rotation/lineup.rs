//! Strictly-constructed six-player lineup

use crate::core::error::{OverlapError, Result};
use crate::core::types::{PlayerState, Point, RotationSlot};
use crate::validation::structural::StructuralValidator;

/// Six players keyed by slot.
///
/// Construction enforces the permutation invariant (slots 1-6, each once),
/// exactly one server, and finite coordinates. Once built, slot lookups
/// cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Lineup {
    players: [PlayerState; 6],
}

impl Lineup {
    pub fn new(players: Vec<PlayerState>) -> Result<Self> {
        let problems = StructuralValidator::validate(&players);
        if !problems.is_empty() {
            let messages: Vec<String> = problems.into_iter().map(|v| v.message).collect();
            return Err(OverlapError::InvalidLineup(messages.join("; ")));
        }

        Self::from_checked(players).ok_or_else(|| {
            OverlapError::InvalidLineup("slots do not form a permutation of 1-6".into())
        })
    }

    /// Build from players that already passed structural validation
    pub(crate) fn from_checked(mut players: Vec<PlayerState>) -> Option<Self> {
        players.sort_by_key(|p| p.slot);
        let players: [PlayerState; 6] = players.try_into().ok()?;
        Some(Self { players })
    }

    pub fn player(&self, slot: RotationSlot) -> &PlayerState {
        &self.players[slot.index()]
    }

    pub fn position(&self, slot: RotationSlot) -> Point {
        self.players[slot.index()].position()
    }

    pub fn server(&self) -> &PlayerState {
        // Construction guarantees exactly one server
        self.players
            .iter()
            .find(|p| p.is_server)
            .unwrap_or(&self.players[0])
    }

    pub fn server_slot(&self) -> RotationSlot {
        self.server()
            .rotation_slot()
            .unwrap_or(RotationSlot::RightBack)
    }

    /// Players in slot order 1..6
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = (RotationSlot, &PlayerState)> {
        RotationSlot::ALL.into_iter().zip(self.players.iter())
    }

    /// Copy of this lineup with one player moved
    pub fn with_position(&self, slot: RotationSlot, point: Point) -> Lineup {
        let mut players = self.players.clone();
        players[slot.index()].x = point.x;
        players[slot.index()].y = point.y;
        Lineup { players }
    }

    pub fn into_players(self) -> Vec<PlayerState> {
        self.players.into()
    }
}

impl TryFrom<Vec<PlayerState>> for Lineup {
    type Error = OverlapError;

    fn try_from(players: Vec<PlayerState>) -> Result<Self> {
        Lineup::new(players)
    }
}
