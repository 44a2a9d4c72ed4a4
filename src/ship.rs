//! Ship geometry and per-ship damage tracking.

use core::fmt;

use crate::common::BoardError;
use crate::config::{BB, BOARD_SIZE};

/// Zero-based `(row, col)` cell coordinate.
pub type Coord = (usize, usize);

/// A ship as given by its two endpoint cells.
///
/// The endpoints span an axis-aligned rectangle. For a straight ship this is
/// a 1×N or N×1 line; `start == end` is a one-deck ship. Endpoint order does
/// not matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpan {
    pub start: Coord,
    pub end: Coord,
}

impl ShipSpan {
    pub const fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }

    fn rows(&self) -> core::ops::RangeInclusive<usize> {
        self.start.0.min(self.end.0)..=self.start.0.max(self.end.0)
    }

    fn cols(&self) -> core::ops::RangeInclusive<usize> {
        self.start.1.min(self.end.1)..=self.start.1.max(self.end.1)
    }

    /// Every cell of the inclusive rectangle between the endpoints, row-major.
    ///
    /// No straightness check happens here: a span whose rows and columns both
    /// differ expands to a filled block. Nor is there a bounds check, so an
    /// off-board span yields off-board cells; use `mask` for a checked set.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols();
        self.rows()
            .flat_map(move |r| cols.clone().map(move |c| (r, c)))
    }

    /// Number of cells covered, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        let rows = self.start.0.abs_diff(self.end.0).saturating_add(1);
        let cols = self.start.1.abs_diff(self.end.1).saturating_add(1);
        rows.saturating_mul(cols)
    }

    /// Whether the span is a single row or a single column.
    pub fn is_line(&self) -> bool {
        self.start.0 == self.end.0 || self.start.1 == self.end.1
    }

    /// First endpoint lying outside the board, if any.
    pub fn off_board(&self) -> Option<Coord> {
        [self.start, self.end]
            .into_iter()
            .find(|&(r, c)| r >= BOARD_SIZE as usize || c >= BOARD_SIZE as usize)
    }

    /// The covered cells as a board set. Fails if an endpoint is off the board.
    pub fn mask(&self) -> Result<BB, BoardError> {
        if let Some((row, col)) = self.off_board() {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(self.footprint())
    }

    /// The covered cells clipped to the board.
    pub(crate) fn footprint(&self) -> BB {
        BB::rect(self.rows(), self.cols())
    }
}

impl From<(Coord, Coord)> for ShipSpan {
    fn from((start, end): (Coord, Coord)) -> Self {
        Self::new(start, end)
    }
}

impl From<&(Coord, Coord)> for ShipSpan {
    fn from(&(start, end): &(Coord, Coord)) -> Self {
        Self::new(start, end)
    }
}

impl From<&ShipSpan> for ShipSpan {
    fn from(span: &ShipSpan) -> Self {
        *span
    }
}

impl fmt::Display for ShipSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.start.0, self.start.1, self.end.0, self.end.1
        )
    }
}

/// A ship placed on the board.
///
/// `cells` is the footprint fixed at placement; `remaining` holds the decks
/// not yet hit and only ever loses cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    span: ShipSpan,
    cells: BB,
    remaining: BB,
}

impl Ship {
    /// Place a ship over `span`.
    pub fn new(span: ShipSpan) -> Result<Self, BoardError> {
        let cells = span.mask()?;
        Ok(Ship {
            span,
            cells,
            remaining: cells,
        })
    }

    pub fn span(&self) -> ShipSpan {
        self.span
    }

    /// Footprint of the ship.
    pub fn cells(&self) -> BB {
        self.cells
    }

    /// Decks not yet hit.
    pub fn remaining(&self) -> BB {
        self.remaining
    }

    pub fn len(&self) -> usize {
        self.cells.count_ones()
    }

    /// Number of decks hit so far.
    pub fn hits(&self) -> usize {
        self.len() - self.remaining.count_ones()
    }

    /// Whether `(row, col)` belongs to the ship's footprint.
    pub fn occupies(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col).unwrap_or(false)
    }

    /// Whether `(row, col)` is a live deck of this ship.
    pub fn is_live(&self, row: usize, col: usize) -> bool {
        self.remaining.get(row, col).unwrap_or(false)
    }

    /// Whether `(row, col)` is a deck of this ship that has been hit.
    pub fn is_hit(&self, row: usize, col: usize) -> bool {
        self.occupies(row, col) && !self.is_live(row, col)
    }

    /// Strike `(row, col)`. Returns `true` if it was a live deck, which is
    /// now marked hit.
    pub fn strike(&mut self, row: usize, col: usize) -> bool {
        match self.remaining.get(row, col) {
            Ok(true) => self.remaining.clear(row, col).is_ok(),
            _ => false,
        }
    }

    /// Check if every deck has been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ span: {}, len: {}, hits: {}, sunk: {} }}",
            self.span,
            self.len(),
            self.hits(),
            self.is_sunk()
        )
    }
}
