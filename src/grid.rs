//! Visible markup of the board, one marker per cell.

use core::fmt;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

const SIZE: usize = BOARD_SIZE as usize;

/// What a cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Deck of a ship, not hit yet. Only the owner sees it.
    ShipOutline,
    /// Hit deck of a ship that is still afloat.
    Hit,
    /// Deck of a ship that has been sunk.
    Sunk,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '~',
            Cell::ShipOutline => '□',
            Cell::Hit => '*',
            Cell::Sunk => 'x',
        }
    }
}

/// Who the board is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// Everything, ship outlines included.
    Owner,
    /// Hits and sunk ships only; unhit decks look like water.
    Opponent,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; SIZE]; SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; SIZE]> {
        self.cells.iter()
    }

    /// Number of cells currently showing `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    pub fn view(&self, perspective: Perspective) -> GridView<'_> {
        GridView {
            grid: self,
            perspective,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid:")?;
        fmt::Display::fmt(&self.view(Perspective::Owner), f)
    }
}

/// Text rendering of a grid: one row per line, glyphs separated by spaces.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
    perspective: Perspective,
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.rows().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                let shown = match (self.perspective, cell) {
                    (Perspective::Opponent, Cell::ShipOutline) => Cell::Empty,
                    (_, cell) => cell,
                };
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", shown.glyph())?;
            }
            if r + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
