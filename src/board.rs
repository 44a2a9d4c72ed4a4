//! The board engine: fleet placement, visible markup and shot resolution.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, FireOutcome};
use crate::fleet::check_fleet;
use crate::grid::{Cell, Grid, GridView, Perspective};
use crate::ship::{Ship, ShipSpan};

/// One player's board: the fleet and what each cell shows.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
}

impl Board {
    /// Place a fleet that must satisfy the standard fleet rules.
    ///
    /// Fails with `OutOfBounds` if a ship leaves the board and with
    /// `InvalidFleet` naming the broken rule otherwise.
    pub fn new<I>(spans: I) -> Result<Self, BoardError>
    where
        I: IntoIterator,
        I::Item: Into<ShipSpan>,
    {
        let spans: Vec<ShipSpan> = spans.into_iter().map(Into::into).collect();
        let board = Self::place(&spans)?;
        check_fleet(&spans)?;
        Ok(board)
    }

    /// Place any set of ships on the board.
    ///
    /// Fleet rules are still checked, but a violation is only logged. Ships
    /// may overlap; a shot then resolves against the first ship in input
    /// order that still has a live deck there.
    pub fn new_unvalidated<I>(spans: I) -> Result<Self, BoardError>
    where
        I: IntoIterator,
        I::Item: Into<ShipSpan>,
    {
        let spans: Vec<ShipSpan> = spans.into_iter().map(Into::into).collect();
        let board = Self::place(&spans)?;
        if let Err(e) = check_fleet(&spans) {
            log::warn!("placed fleet breaks the rules: {}", e);
        }
        Ok(board)
    }

    fn place(spans: &[ShipSpan]) -> Result<Self, BoardError> {
        let mut grid = Grid::new();
        let mut ships = Vec::with_capacity(spans.len());
        for &span in spans {
            let ship = Ship::new(span)?;
            for (r, c) in ship.cells().iter_set_bits() {
                grid.set(r, c, Cell::ShipOutline);
            }
            ships.push(ship);
        }
        log::debug!("placed {} ships", ships.len());
        Ok(Board { grid, ships })
    }

    /// Fire at `(row, col)`.
    ///
    /// A shot at a cell with no live deck is a `Miss` and leaves the markup
    /// untouched, including a second shot at an already hit deck. Sinking a
    /// ship repaints its whole footprint as sunk.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<FireOutcome, BoardError> {
        self.grid.get(row, col)?;

        let Some(idx) = self.ships.iter().position(|s| s.is_live(row, col)) else {
            log::debug!("shot at ({}, {}): miss", row, col);
            return Ok(FireOutcome::Miss);
        };

        let ship = &mut self.ships[idx];
        ship.strike(row, col);
        self.grid.set(row, col, Cell::Hit);

        if ship.is_sunk() {
            for (r, c) in ship.cells().iter_set_bits() {
                self.grid.set(r, c, Cell::Sunk);
            }
            log::info!("shot at ({}, {}) sank ship {} {}", row, col, idx, ship.span());
            return Ok(FireOutcome::Sunk);
        }

        log::debug!("shot at ({}, {}): hit ship {}", row, col, idx);
        Ok(FireOutcome::Hit)
    }

    /// Marker shown at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.grid.get(row, col)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, index: usize) -> Result<&Ship, BoardError> {
        self.ships.get(index).ok_or(BoardError::InvalidIndex)
    }

    /// Index of the first ship whose footprint covers `(row, col)`.
    pub fn ship_at(&self, row: usize, col: usize) -> Result<Option<usize>, BoardError> {
        self.grid.get(row, col)?;
        Ok(self.ships.iter().position(|s| s.occupies(row, col)))
    }

    /// Number of ships with at least one live deck.
    pub fn ships_afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Text rendering of the board for `perspective`.
    pub fn view(&self, perspective: Perspective) -> GridView<'_> {
        self.grid.view(perspective)
    }
}

/// Owner's view of the board.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(Perspective::Owner), f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("ships", &self.ships)
            .field("grid", &self.grid)
            .finish()
    }
}
