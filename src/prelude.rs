//! Commonly used types and utilities for ease of import.

pub use crate::{
    check_fleet, validate, Board, BoardError, Cell, Coord, FireOutcome, FleetError, Perspective,
    ShipSpan, BOARD_SIZE, STANDARD_FLEET,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board};
