//! Common types for the board engine: shot outcomes and errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FireOutcome {
    /// No live deck at the target.
    Miss,
    /// Struck a deck of a ship that still has live decks.
    Hit,
    /// Struck the last live deck of a ship.
    Sunk,
}

/// Fleet rule violated by a ship layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// The layout does not have the required number of ships.
    WrongShipCount { expected: usize, found: usize },
    /// An endpoint of ship `ship` lies outside the board.
    OutOfBounds { ship: usize, row: usize, col: usize },
    /// Ship `ship` shares a cell with the earlier ship `other`.
    Overlapping { ship: usize, other: usize },
    /// Ship `ship` touches the earlier ship `other`, diagonals included.
    Adjacent { ship: usize, other: usize },
    /// The number of ships of `length` decks differs from the rules.
    WrongComposition {
        length: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::WrongShipCount { expected, found } => {
                write!(f, "fleet needs {} ships, found {}", expected, found)
            }
            FleetError::OutOfBounds { ship, row, col } => {
                write!(f, "ship {} reaches ({}, {}) outside the board", ship, row, col)
            }
            FleetError::Overlapping { ship, other } => {
                write!(f, "ship {} overlaps ship {}", ship, other)
            }
            FleetError::Adjacent { ship, other } => {
                write!(f, "ship {} touches ship {}", ship, other)
            }
            FleetError::WrongComposition {
                length,
                expected,
                found,
            } => write!(
                f,
                "fleet needs {} ships of length {}, found {}",
                expected, length, found
            ),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside `[0, BOARD_SIZE)` on either axis.
    OutOfBounds { row: usize, col: usize },
    /// The ship layout breaks a fleet rule.
    InvalidFleet(FleetError),
    /// Ship index is out of range.
    InvalidIndex,
    /// Underlying bitboard error other than a bounds violation.
    BitBoard(BitBoardError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
            other => BoardError::BitBoard(other),
        }
    }
}

impl From<FleetError> for BoardError {
    fn from(err: FleetError) -> Self {
        BoardError::InvalidFleet(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
            BoardError::InvalidFleet(e) => write!(f, "invalid fleet: {}", e),
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
