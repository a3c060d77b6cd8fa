//! Fixed rotation topology
//!
//! Each row is a 3-cycle walked left to right: front 4 -> 3 -> 2 -> 4,
//! back 5 -> 6 -> 1 -> 5. Columns pair the rows: 4/5 left, 3/6 middle,
//! 2/1 right.

use crate::core::types::RotationSlot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Row {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Middle,
    Right,
}

/// Every topological relation of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub left: RotationSlot,
    pub right: RotationSlot,
    pub counterpart: RotationSlot,
}

pub const FRONT_ROW: [RotationSlot; 3] = [
    RotationSlot::LeftFront,
    RotationSlot::MiddleFront,
    RotationSlot::RightFront,
];

pub const BACK_ROW: [RotationSlot; 3] = [
    RotationSlot::LeftBack,
    RotationSlot::MiddleBack,
    RotationSlot::RightBack,
];

impl RotationSlot {
    pub fn row(self) -> Row {
        match self {
            RotationSlot::RightFront | RotationSlot::MiddleFront | RotationSlot::LeftFront => {
                Row::Front
            }
            RotationSlot::RightBack | RotationSlot::MiddleBack | RotationSlot::LeftBack => {
                Row::Back
            }
        }
    }

    pub fn column(self) -> Column {
        match self {
            RotationSlot::LeftFront | RotationSlot::LeftBack => Column::Left,
            RotationSlot::MiddleFront | RotationSlot::MiddleBack => Column::Middle,
            RotationSlot::RightFront | RotationSlot::RightBack => Column::Right,
        }
    }

    pub fn is_front_row(self) -> bool {
        self.row() == Row::Front
    }

    pub fn is_back_row(self) -> bool {
        self.row() == Row::Back
    }

    /// Next slot to the right within the row, wrapping around
    pub fn right_neighbor(self) -> RotationSlot {
        match self {
            RotationSlot::LeftFront => RotationSlot::MiddleFront,
            RotationSlot::MiddleFront => RotationSlot::RightFront,
            RotationSlot::RightFront => RotationSlot::LeftFront,
            RotationSlot::LeftBack => RotationSlot::MiddleBack,
            RotationSlot::MiddleBack => RotationSlot::RightBack,
            RotationSlot::RightBack => RotationSlot::LeftBack,
        }
    }

    /// Next slot to the left within the row, wrapping around
    pub fn left_neighbor(self) -> RotationSlot {
        match self {
            RotationSlot::LeftFront => RotationSlot::RightFront,
            RotationSlot::MiddleFront => RotationSlot::LeftFront,
            RotationSlot::RightFront => RotationSlot::MiddleFront,
            RotationSlot::LeftBack => RotationSlot::RightBack,
            RotationSlot::MiddleBack => RotationSlot::LeftBack,
            RotationSlot::RightBack => RotationSlot::MiddleBack,
        }
    }

    /// Slot in the same column of the other row
    pub fn row_counterpart(self) -> RotationSlot {
        match self {
            RotationSlot::LeftFront => RotationSlot::LeftBack,
            RotationSlot::LeftBack => RotationSlot::LeftFront,
            RotationSlot::MiddleFront => RotationSlot::MiddleBack,
            RotationSlot::MiddleBack => RotationSlot::MiddleFront,
            RotationSlot::RightFront => RotationSlot::RightBack,
            RotationSlot::RightBack => RotationSlot::RightFront,
        }
    }

    pub fn neighbors(self) -> Neighbors {
        Neighbors {
            left: self.left_neighbor(),
            right: self.right_neighbor(),
            counterpart: self.row_counterpart(),
        }
    }

    /// Left neighbor that is actually to the left (no wrap from the left column)
    pub fn adjacent_left(self) -> Option<RotationSlot> {
        (self.column() != Column::Left).then(|| self.left_neighbor())
    }

    /// Right neighbor that is actually to the right (no wrap from the right column)
    pub fn adjacent_right(self) -> Option<RotationSlot> {
        (self.column() != Column::Right).then(|| self.right_neighbor())
    }
}

/// Slots of a row in left-to-right order
pub fn row_slots(row: Row) -> [RotationSlot; 3] {
    match row {
        Row::Front => FRONT_ROW,
        Row::Back => BACK_ROW,
    }
}

pub fn slot_at(row: Row, column: Column) -> RotationSlot {
    let slots = row_slots(row);
    match column {
        Column::Left => slots[0],
        Column::Middle => slots[1],
        Column::Right => slots[2],
    }
}

// Raw-number entry points for host input; anything outside 1-6 yields None.

pub fn left_neighbor_of(n: u8) -> Option<RotationSlot> {
    RotationSlot::from_number(n).map(RotationSlot::left_neighbor)
}

pub fn right_neighbor_of(n: u8) -> Option<RotationSlot> {
    RotationSlot::from_number(n).map(RotationSlot::right_neighbor)
}

pub fn row_counterpart_of(n: u8) -> Option<RotationSlot> {
    RotationSlot::from_number(n).map(RotationSlot::row_counterpart)
}

pub fn neighbors_of(n: u8) -> Option<Neighbors> {
    RotationSlot::from_number(n).map(RotationSlot::neighbors)
}

pub fn row_of(n: u8) -> Option<Row> {
    RotationSlot::from_number(n).map(RotationSlot::row)
}

pub fn column_of(n: u8) -> Option<Column> {
    RotationSlot::from_number(n).map(RotationSlot::column)
}

pub fn is_front_row(n: u8) -> bool {
    row_of(n) == Some(Row::Front)
}

pub fn is_back_row(n: u8) -> bool {
    row_of(n) == Some(Row::Back)
}
