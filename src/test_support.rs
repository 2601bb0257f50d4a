//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;

use crate::core::board::{Board, Cell, Position};
use crate::core::search::Dice;
use crate::core::state::GameState;

/// Dice that replay a fixed script, then repeat the last value forever.
pub struct FixedDice {
    rolls: VecDeque<u32>,
    last: u32,
    taken: usize,
}

impl FixedDice {
    pub fn new(rolls: Vec<u32>) -> Self {
        let last = rolls.last().copied().unwrap_or(0);
        Self {
            rolls: rolls.into(),
            last,
            taken: 0,
        }
    }

    pub fn always(value: u32) -> Self {
        Self::new(vec![value])
    }

    pub fn rolls_taken(&self) -> usize {
        self.taken
    }
}

impl Dice for FixedDice {
    fn roll(&mut self, sides: u32) -> u32 {
        self.taken += 1;
        let value = self.rolls.pop_front().unwrap_or(self.last);
        assert!(value < sides, "scripted roll {value} out of range for d{sides}");
        value
    }
}

/// Dice that never reveal anything.
pub struct AlwaysMiss;

impl Dice for AlwaysMiss {
    fn roll(&mut self, sides: u32) -> u32 {
        sides - 1
    }
}

/// A state on an empty board with the player at the origin.
pub fn empty_state() -> GameState {
    GameState::new(Board::empty())
}

/// A state with a single hidden treasure at `(y, x)`.
pub fn state_with_treasure(y: usize, x: usize) -> GameState {
    let mut board = Board::empty();
    board.set(y, x, Cell::HiddenTreasure).unwrap();
    GameState::new(board)
}

/// Move the player without going through the reducer.
pub fn place_player(state: &mut GameState, y: usize, x: usize) {
    state.player = Position::new(y, x);
}
