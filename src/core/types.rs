//! Core type definitions used throughout the codebase

use crate::core::error::OverlapError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six court zones a player occupies during a rotation.
///
/// Row membership is fixed by the slot number: 2, 3, 4 are the front row and
/// 1, 6, 5 the back row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum RotationSlot {
    RightBack = 1,
    RightFront = 2,
    MiddleFront = 3,
    LeftFront = 4,
    LeftBack = 5,
    MiddleBack = 6,
}

impl RotationSlot {
    /// All slots in numeric order
    pub const ALL: [RotationSlot; 6] = [
        RotationSlot::RightBack,
        RotationSlot::RightFront,
        RotationSlot::MiddleFront,
        RotationSlot::LeftFront,
        RotationSlot::LeftBack,
        RotationSlot::MiddleBack,
    ];

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(RotationSlot::RightBack),
            2 => Some(RotationSlot::RightFront),
            3 => Some(RotationSlot::MiddleFront),
            4 => Some(RotationSlot::LeftFront),
            5 => Some(RotationSlot::LeftBack),
            6 => Some(RotationSlot::MiddleBack),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based index for slot-keyed arrays
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn label(self) -> &'static str {
        match self {
            RotationSlot::RightBack => "Right Back",
            RotationSlot::RightFront => "Right Front",
            RotationSlot::MiddleFront => "Middle Front",
            RotationSlot::LeftFront => "Left Front",
            RotationSlot::LeftBack => "Left Back",
            RotationSlot::MiddleBack => "Middle Back",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            RotationSlot::RightBack => "RB",
            RotationSlot::RightFront => "RF",
            RotationSlot::MiddleFront => "MF",
            RotationSlot::LeftFront => "LF",
            RotationSlot::LeftBack => "LB",
            RotationSlot::MiddleBack => "MB",
        }
    }
}

impl TryFrom<u8> for RotationSlot {
    type Error = OverlapError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        RotationSlot::from_number(n).ok_or(OverlapError::InvalidSlot(n))
    }
}

impl From<RotationSlot> for u8 {
    fn from(slot: RotationSlot) -> u8 {
        slot.number()
    }
}

impl fmt::Display for RotationSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}

/// Player role. Descriptive only; legality never depends on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Setter,
    Opposite,
    OutsideHitter1,
    OutsideHitter2,
    MiddleBlocker1,
    MiddleBlocker2,
    Libero,
    DefensiveSpecialist,
    #[default]
    Unknown,
}

impl Role {
    pub fn code(self) -> &'static str {
        match self {
            Role::Setter => "S",
            Role::Opposite => "OPP",
            Role::OutsideHitter1 | Role::OutsideHitter2 => "OH",
            Role::MiddleBlocker1 | Role::MiddleBlocker2 => "MB",
            Role::Libero => "L",
            Role::DefensiveSpecialist => "DS",
            Role::Unknown => "?",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Setter => "Setter",
            Role::Opposite => "Opposite",
            Role::OutsideHitter1 | Role::OutsideHitter2 => "Outside Hitter",
            Role::MiddleBlocker1 | Role::MiddleBlocker2 => "Middle Blocker",
            Role::Libero => "Libero",
            Role::DefensiveSpecialist => "Defensive Specialist",
            Role::Unknown => "Unknown",
        }
    }
}

/// Position in court meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Snapshot of one player as supplied by the host.
///
/// `slot` is kept as the raw number so that out-of-range input can be
/// reported instead of rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub role: Role,
    pub slot: u8,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub is_server: bool,
}

impl PlayerState {
    pub fn new(id: impl Into<String>, slot: u8, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            display_name: String::new(),
            role: Role::Unknown,
            slot,
            x,
            y,
            is_server: false,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn serving(mut self) -> Self {
        self.is_server = true;
        self
    }

    pub fn rotation_slot(&self) -> Option<RotationSlot> {
        RotationSlot::from_number(self.slot)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Name used in violation messages: display name if set, else the role
    pub fn describe(&self) -> String {
        let slot_label = self
            .rotation_slot()
            .map(|s| s.abbreviation())
            .unwrap_or("??");
        if self.display_name.is_empty() {
            format!("{} {}", self.role.code(), slot_label)
        } else {
            format!("{} ({} {})", self.display_name, self.role.code(), slot_label)
        }
    }
}
