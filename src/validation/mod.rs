//! Overlap-rule validation

mod ordering;
mod overlap;
pub(crate) mod structural;

pub use ordering::OrderingValidator;
pub use overlap::{OverlapResult, OverlapValidator};
pub use structural::StructuralValidator;

use crate::core::types::{Point, RotationSlot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Specific reason a lineup is illegal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    RowOrder,
    FrontBack,
    MultipleServers,
    NoServer,
    InvalidPlayerCount,
    DuplicateSlot,
    InvalidSlot,
    InvalidCoordinates,
}

/// The four top-level violation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationFamily {
    RowOrder,
    FrontBack,
    MultipleServers,
    InvalidLineup,
}

impl ViolationCode {
    pub fn family(self) -> ViolationFamily {
        match self {
            ViolationCode::RowOrder => ViolationFamily::RowOrder,
            ViolationCode::FrontBack => ViolationFamily::FrontBack,
            ViolationCode::MultipleServers => ViolationFamily::MultipleServers,
            ViolationCode::NoServer
            | ViolationCode::InvalidPlayerCount
            | ViolationCode::DuplicateSlot
            | ViolationCode::InvalidSlot
            | ViolationCode::InvalidCoordinates => ViolationFamily::InvalidLineup,
        }
    }

    /// Shape problems that stop positional checks from running
    pub fn is_structural(self) -> bool {
        !matches!(self, ViolationCode::RowOrder | ViolationCode::FrontBack)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViolationCode::RowOrder => "ROW_ORDER",
            ViolationCode::FrontBack => "FRONT_BACK",
            ViolationCode::MultipleServers => "MULTIPLE_SERVERS",
            ViolationCode::NoServer => "NO_SERVER",
            ViolationCode::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            ViolationCode::DuplicateSlot => "DUPLICATE_SLOT",
            ViolationCode::InvalidSlot => "INVALID_SLOT",
            ViolationCode::InvalidCoordinates => "INVALID_COORDINATES",
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected rule break
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub code: ViolationCode,
    /// Slots implicated, in the order they were compared
    pub slots: Vec<RotationSlot>,
    pub message: String,
    /// Positions of the implicated players, for diagnostic display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<BTreeMap<RotationSlot, Point>>,
}

impl Violation {
    pub fn new(code: ViolationCode, slots: Vec<RotationSlot>, message: impl Into<String>) -> Self {
        Self {
            code,
            slots,
            message: message.into(),
            coordinates: None,
        }
    }

    pub fn with_coordinates(mut self, coordinates: BTreeMap<RotationSlot, Point>) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn involves(&self, slot: RotationSlot) -> bool {
        self.slots.contains(&slot)
    }

    pub fn family(&self) -> ViolationFamily {
        self.code.family()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_families() {
        assert_eq!(ViolationCode::DuplicateSlot.family(), ViolationFamily::InvalidLineup);
        assert_eq!(ViolationCode::NoServer.family(), ViolationFamily::InvalidLineup);
        assert_eq!(
            ViolationCode::MultipleServers.family(),
            ViolationFamily::MultipleServers
        );
        assert!(ViolationCode::MultipleServers.is_structural());
        assert!(!ViolationCode::FrontBack.is_structural());
    }

    #[test]
    fn test_code_serializes_screaming() {
        let json = serde_json::to_string(&ViolationCode::InvalidPlayerCount).unwrap();
        assert_eq!(json, "\"INVALID_PLAYER_COUNT\"");
        assert_eq!(ViolationCode::RowOrder.to_string(), "ROW_ORDER");
    }

    #[test]
    fn test_violation_json_omits_missing_coordinates() {
        let v = Violation::new(ViolationCode::NoServer, vec![], "No server");
        let json = serde_json::to_value(&v).unwrap();
        assert!(json.get("coordinates").is_none());
        assert_eq!(json["code"], "NO_SERVER");
    }
}
