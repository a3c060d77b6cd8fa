//! Structural validation: player count, slot permutation, server count, finite coordinates

use super::{Violation, ViolationCode};
use crate::core::types::{PlayerState, RotationSlot};

/// Number of players on court
pub const LINEUP_SIZE: usize = 6;

pub struct StructuralValidator;

impl StructuralValidator {
    /// Report every shape problem in the snapshot; empty means well-formed
    pub fn validate(players: &[PlayerState]) -> Vec<Violation> {
        let mut errors = Vec::new();
        errors.extend(Self::validate_count(players));
        errors.extend(Self::validate_slots(players));
        errors.extend(Self::validate_server(players));
        errors.extend(Self::validate_coordinates(players));
        errors
    }

    /// Allocation-free equivalent of `validate(..).is_empty()`
    pub fn is_well_formed(players: &[PlayerState]) -> bool {
        if players.len() != LINEUP_SIZE {
            return false;
        }
        let mut seen = [false; LINEUP_SIZE];
        let mut servers = 0;
        for player in players {
            let Some(slot) = player.rotation_slot() else {
                return false;
            };
            if seen[slot.index()] || !player.position().is_finite() {
                return false;
            }
            seen[slot.index()] = true;
            if player.is_server {
                servers += 1;
            }
        }
        servers == 1
    }

    pub fn validate_count(players: &[PlayerState]) -> Vec<Violation> {
        let mut errors = Vec::new();
        if players.len() != LINEUP_SIZE {
            errors.push(Violation::new(
                ViolationCode::InvalidPlayerCount,
                vec![],
                format!(
                    "Lineup has {} players; exactly {} are required",
                    players.len(),
                    LINEUP_SIZE
                ),
            ));
        }
        errors
    }

    /// Out-of-range slot numbers and slots claimed by more than one player
    pub fn validate_slots(players: &[PlayerState]) -> Vec<Violation> {
        let mut errors = Vec::new();
        let mut holders: [Vec<&str>; LINEUP_SIZE] = Default::default();

        for player in players {
            match player.rotation_slot() {
                Some(slot) => holders[slot.index()].push(&player.id),
                None => errors.push(Violation::new(
                    ViolationCode::InvalidSlot,
                    vec![],
                    format!(
                        "Player '{}' has slot {}; slots must be 1-6",
                        player.id, player.slot
                    ),
                )),
            }
        }

        for slot in RotationSlot::ALL {
            let ids = &holders[slot.index()];
            if ids.len() > 1 {
                errors.push(Violation::new(
                    ViolationCode::DuplicateSlot,
                    vec![slot],
                    format!(
                        "Slot {} is assigned to {} players: {}",
                        slot,
                        ids.len(),
                        ids.join(", ")
                    ),
                ));
            }
        }

        errors
    }

    pub fn validate_server(players: &[PlayerState]) -> Vec<Violation> {
        let mut errors = Vec::new();
        let servers: Vec<&PlayerState> = players.iter().filter(|p| p.is_server).collect();

        match servers.len() {
            0 => errors.push(Violation::new(
                ViolationCode::NoServer,
                vec![],
                "No player is marked as the server",
            )),
            1 => {}
            n => {
                let mut slots: Vec<RotationSlot> =
                    servers.iter().filter_map(|p| p.rotation_slot()).collect();
                slots.sort();
                let names: Vec<String> = servers.iter().map(|p| p.describe()).collect();
                errors.push(Violation::new(
                    ViolationCode::MultipleServers,
                    slots,
                    format!("{} players are marked as server: {}", n, names.join(", ")),
                ));
            }
        }

        errors
    }

    /// NaN or infinite coordinates would make every comparison meaningless
    pub fn validate_coordinates(players: &[PlayerState]) -> Vec<Violation> {
        players
            .iter()
            .filter(|p| !p.position().is_finite())
            .map(|p| {
                Violation::new(
                    ViolationCode::InvalidCoordinates,
                    p.rotation_slot().into_iter().collect(),
                    format!("{} has non-finite position ({}, {})", p.describe(), p.x, p.y),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lineup() -> Vec<PlayerState> {
        (1..=6u8)
            .map(|n| {
                let p = PlayerState::new(format!("p{}", n), n, n as f64, 4.0);
                if n == 1 {
                    p.serving()
                } else {
                    p
                }
            })
            .collect()
    }

    #[test]
    fn test_well_formed_passes() {
        assert!(StructuralValidator::validate(&lineup()).is_empty());
        assert!(StructuralValidator::is_well_formed(&lineup()));
    }

    #[test]
    fn test_wrong_count() {
        let mut players = lineup();
        players.truncate(5);
        let errors = StructuralValidator::validate(&players);
        assert!(errors
            .iter()
            .any(|e| e.code == ViolationCode::InvalidPlayerCount));
        assert!(!StructuralValidator::is_well_formed(&players));
    }

    #[test]
    fn test_duplicate_names_both_holders() {
        let mut players = lineup();
        players[1].slot = 1;
        let errors = StructuralValidator::validate_slots(&players);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, ViolationCode::DuplicateSlot);
        assert_eq!(errors[0].slots, vec![RotationSlot::RightBack]);
        assert!(errors[0].message.contains("p1"));
        assert!(errors[0].message.contains("p2"));
    }

    #[test]
    fn test_out_of_range_slot() {
        let mut players = lineup();
        players[5].slot = 7;
        let errors = StructuralValidator::validate_slots(&players);
        assert_eq!(errors[0].code, ViolationCode::InvalidSlot);
    }

    #[test]
    fn test_server_count() {
        let mut players = lineup();
        players[0].is_server = false;
        assert_eq!(
            StructuralValidator::validate_server(&players)[0].code,
            ViolationCode::NoServer
        );

        let mut players = lineup();
        players[3].is_server = true;
        let errors = StructuralValidator::validate_server(&players);
        assert_eq!(errors[0].code, ViolationCode::MultipleServers);
        assert_eq!(
            errors[0].slots,
            vec![RotationSlot::RightBack, RotationSlot::LeftFront]
        );
    }

    #[test]
    fn test_nan_coordinates() {
        let mut players = lineup();
        players[2].y = f64::NAN;
        players[4].x = f64::INFINITY;
        let errors = StructuralValidator::validate_coordinates(&players);
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.code == ViolationCode::InvalidCoordinates));
    }
}
