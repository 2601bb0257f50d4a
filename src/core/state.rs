//! # Game State
//!
//! Everything the game knows, in one place. No terminal types live here;
//! presentation concerns belong to the `tui` module.
//!
//! ```text
//! GameState
//! ├── board: Board            // 80×24 cells
//! ├── player: Position        // always on the board
//! ├── cheats_enabled: bool    // show hidden treasure when drawing
//! └── running: bool           // false once the player quits
//! ```
//!
//! State changes only happen through `update(state, action, dice)` in
//! action.rs.

use crate::core::board::{Board, Cell, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub player: Position,
    pub cheats_enabled: bool,
    pub running: bool,
}

impl GameState {
    /// A running game on `board` with the player at the top-left corner and
    /// cheats off.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            player: Position::default(),
            cheats_enabled: false,
            running: true,
        }
    }

    /// Shift the player by `(dy, dx)`, staying on the board.
    pub fn move_player(&mut self, dy: isize, dx: isize) {
        self.player = self.player.step(dy, dx);
    }

    /// Treasures the player has uncovered so far.
    pub fn treasures_found(&self) -> usize {
        self.board.count(Cell::VisibleTreasure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{BOARD_HEIGHT, BOARD_WIDTH};
    use crate::test_support::empty_state;

    #[test]
    fn test_state_new_defaults() {
        let state = empty_state();
        assert_eq!(state.player, Position::new(0, 0));
        assert!(!state.cheats_enabled);
        assert!(state.running);
        assert_eq!(state.treasures_found(), 0);
    }

    #[test]
    fn test_move_player_clamps_to_board() {
        let mut state = empty_state();
        for _ in 0..200 {
            state.move_player(1, 1);
        }
        assert_eq!(state.player, Position::new(BOARD_HEIGHT - 1, BOARD_WIDTH - 1));
        for _ in 0..200 {
            state.move_player(-1, -1);
        }
        assert_eq!(state.player, Position::new(0, 0));
    }
}
