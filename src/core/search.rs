//! # Search Resolver
//!
//! Probabilistic reveal of hidden treasure around a position.
//!
//! Each hidden treasure in the 3×3 neighborhood gets its own roll of a
//! three-sided die and is revealed on a zero, so a single search can miss
//! treasure that is right there. Rolls go through the [`Dice`] trait so tests
//! can force outcomes.

use log::{debug, info};
use rand::Rng;

use crate::core::board::{Board, Cell};
use crate::core::error::Result;

/// Sides on the reveal die. A roll of zero reveals the cell.
pub const REVEAL_SIDES: u32 = 3;

/// Source of uniform integer rolls.
pub trait Dice {
    /// Returns a value uniformly drawn from `[0, sides)`.
    fn roll(&mut self, sides: u32) -> u32;
}

/// Adapts any `rand` generator into [`Dice`].
#[derive(Debug, Clone)]
pub struct RngDice<R: Rng>(pub R);

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self, sides: u32) -> u32 {
        self.0.random_range(0..sides)
    }
}

/// Try to reveal the single cell at `(y, x)`.
///
/// Only `HiddenTreasure` cells consume a roll. Returns whether the cell was
/// revealed.
pub fn search_tile(board: &mut Board, y: usize, x: usize, dice: &mut dyn Dice) -> Result<bool> {
    if board.cell_at(y, x)? != Cell::HiddenTreasure {
        return Ok(false);
    }
    if dice.roll(REVEAL_SIDES) == 0 {
        board.reveal(y, x)
    } else {
        Ok(false)
    }
}

/// Search the 3×3 neighborhood centred on `(center_y, center_x)`, skipping
/// anything off the board. Returns how many treasures were revealed.
pub fn search(board: &mut Board, center_y: usize, center_x: usize, dice: &mut dyn Dice) -> usize {
    let mut revealed = 0;
    for (y, x) in neighborhood(center_y, center_x) {
        if !board.in_bounds(y, x) {
            continue;
        }
        // In-bounds coordinates cannot fail the lookup
        if let Ok(true) = search_tile(board, y, x, dice) {
            info!("Revealed treasure at (y={y}, x={x})");
            revealed += 1;
        }
    }
    debug!("Search at (y={center_y}, x={center_x}) revealed {revealed}");
    revealed
}

/// The 3×3 block around a center. Coordinates below zero are dropped here;
/// the high edge is left to the caller.
fn neighborhood(center_y: usize, center_x: usize) -> impl Iterator<Item = (usize, usize)> {
    (-1isize..=1).flat_map(move |dy| {
        (-1isize..=1).filter_map(move |dx| {
            Some((
                center_y.checked_add_signed(dy)?,
                center_x.checked_add_signed(dx)?,
            ))
        })
    })
}
