//! # Board Model
//!
//! The fixed 80×24 grid of cells plus the player's position.
//!
//! Coordinates follow the terminal convention: `y` is the row in `[0, 24)`,
//! `x` is the column in `[0, 80)`, and every function takes `(y, x)` in that
//! order.
//!
//! ```text
//!  x → 0 1 2 ...                     79
//! y 0  . . . . . . . . . . . . . . . .
//! ↓ 1  . . @ . . . . . . . . . . . . .
//!   .  . . . . . . . . . . . . . . . .
//!  23  . . . . . . . . . . . . . . . .
//! ```
//!
//! During play, cells only change through [`Board::reveal`], which performs the single
//! legal transition `HiddenTreasure → VisibleTreasure`.

use log::debug;
use ndarray::Array2;
use rand::Rng;

use crate::core::error::{GameError, Result};

pub const BOARD_WIDTH: usize = 80;
pub const BOARD_HEIGHT: usize = 24;

/// Content of a single grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    HiddenTreasure,
    VisibleTreasure,
}

/// The 80×24 grid. Dimensions never change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// An all-empty board.
    pub fn empty() -> Self {
        Self {
            cells: Array2::default((BOARD_HEIGHT, BOARD_WIDTH)),
        }
    }

    /// Fill every cell independently: `HiddenTreasure` with probability 0.5,
    /// `Empty` otherwise.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut board = Self::empty();
        board.regenerate(rng);
        board
    }

    /// Overwrite the whole board with a fresh random fill.
    pub fn regenerate<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = if rng.random_bool(0.5) {
                Cell::HiddenTreasure
            } else {
                Cell::Empty
            };
        }
        debug!(
            "Generated board: {} hidden treasures",
            self.count(Cell::HiddenTreasure)
        );
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    pub fn in_bounds(&self, y: usize, x: usize) -> bool {
        y < self.height() && x < self.width()
    }

    /// Bounds-checked read.
    pub fn cell_at(&self, y: usize, x: usize) -> Result<Cell> {
        self.cells
            .get((y, x))
            .copied()
            .ok_or(GameError::OutOfBounds { y, x })
    }

    /// Place a cell directly. Used to build fixed layouts.
    pub fn set(&mut self, y: usize, x: usize, cell: Cell) -> Result<()> {
        let slot = self
            .cells
            .get_mut((y, x))
            .ok_or(GameError::OutOfBounds { y, x })?;
        *slot = cell;
        Ok(())
    }

    /// Turn a hidden treasure into a visible one.
    ///
    /// Returns `Ok(true)` if the cell changed. `Empty` and `VisibleTreasure`
    /// cells are left untouched.
    pub fn reveal(&mut self, y: usize, x: usize) -> Result<bool> {
        let slot = self
            .cells
            .get_mut((y, x))
            .ok_or(GameError::OutOfBounds { y, x })?;
        if *slot == Cell::HiddenTreasure {
            *slot = Cell::VisibleTreasure;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Number of cells currently holding `kind`.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// Player coordinates, always on a real cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub y: usize,
    pub x: usize,
}

impl Position {
    pub const fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }

    /// Apply a delta, clamping each axis to `[0, dimension - 1]`.
    pub fn step(self, dy: isize, dx: isize) -> Self {
        Self {
            y: clamp_axis(self.y, dy, BOARD_HEIGHT),
            x: clamp_axis(self.x, dx, BOARD_WIDTH),
        }
    }
}

fn clamp_axis(value: usize, delta: isize, len: usize) -> usize {
    value.saturating_add_signed(delta).min(len - 1)
}
