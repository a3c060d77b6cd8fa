//! Rotation topology and lineups

pub mod lineup;
pub mod neighbors;

pub use lineup::Lineup;
pub use neighbors::{
    column_of, is_back_row, is_front_row, left_neighbor_of, neighbors_of, right_neighbor_of,
    row_counterpart_of, row_of, row_slots, slot_at, Column, Neighbors, Row, BACK_ROW, FRONT_ROW,
};
