//! # Render Contract
//!
//! What each board position looks like, independent of how it is drawn.
//! A display surface asks [`GridView::for_area`] whether the grid fits, then
//! asks [`glyph_at`] for every cell.

use crate::core::board::{BOARD_HEIGHT, BOARD_WIDTH, Cell};
use crate::core::state::GameState;

pub const TOO_SMALL_MESSAGE: &str = "The screen is too small";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Player,
    VisibleTreasure,
    HiddenTreasure,
    Blank,
}

impl Glyph {
    pub const fn symbol(self) -> char {
        match self {
            Glyph::Player => '@',
            Glyph::VisibleTreasure => '%',
            Glyph::HiddenTreasure => '$',
            Glyph::Blank => ' ',
        }
    }
}

/// Glyph for `(y, x)`. The player marker always wins; hidden treasure only
/// shows with cheats on.
pub fn glyph_at(state: &GameState, y: usize, x: usize) -> Glyph {
    if state.player.y == y && state.player.x == x {
        return Glyph::Player;
    }
    match state.board.cell_at(y, x) {
        Ok(Cell::VisibleTreasure) => Glyph::VisibleTreasure,
        Ok(Cell::HiddenTreasure) if state.cheats_enabled => Glyph::HiddenTreasure,
        _ => Glyph::Blank,
    }
}

/// Row `y` of the grid as text.
pub fn row_text(state: &GameState, y: usize) -> String {
    (0..BOARD_WIDTH).map(|x| glyph_at(state, y, x).symbol()).collect()
}

/// Whether a surface can show the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridView {
    Grid,
    TooSmall,
}

impl GridView {
    pub fn for_area(cols: u16, rows: u16) -> Self {
        if usize::from(cols) < BOARD_WIDTH || usize::from(rows) < BOARD_HEIGHT {
            GridView::TooSmall
        } else {
            GridView::Grid
        }
    }
}
