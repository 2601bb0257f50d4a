//! # Actions
//!
//! Everything that can happen in the game becomes an `Action`.
//! Player presses `l`? That's `Action::Move { dy: 0, dx: 1 }`.
//! Player presses `s`? That's `Action::Search`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the caller what to do next.
//! No I/O here. Drawing happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Randomness comes in through the `Dice` argument, so a test can replay an
//! exact game.

use log::debug;

use crate::core::search::{self, Dice};
use crate::core::state::GameState;

/// Discrete input symbols delivered by a display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    MoveWest,
    MoveSouth,
    MoveNorth,
    MoveEast,
    ToggleCheats,
    Search,
    Quit,
    /// Any key without a binding, or a terminal resize.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move { dy: isize, dx: isize },
    ToggleCheats,
    Search,
    Quit,
    Noop,
}

impl From<Input> for Action {
    fn from(input: Input) -> Self {
        match input {
            Input::MoveWest => Action::Move { dy: 0, dx: -1 },
            Input::MoveSouth => Action::Move { dy: 1, dx: 0 },
            Input::MoveNorth => Action::Move { dy: -1, dx: 0 },
            Input::MoveEast => Action::Move { dy: 0, dx: 1 },
            Input::ToggleCheats => Action::ToggleCheats,
            Input::Search => Action::Search,
            Input::Quit => Action::Quit,
            Input::Other => Action::Noop,
        }
    }
}

/// What the caller should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Redraw,
    Quit,
}

pub fn update(state: &mut GameState, action: Action, dice: &mut dyn Dice) -> Effect {
    debug!("Dispatching {:?}", action);
    match action {
        Action::Move { dy, dx } => {
            state.move_player(dy, dx);
            Effect::Redraw
        }
        Action::ToggleCheats => {
            state.cheats_enabled = !state.cheats_enabled;
            debug!("Cheats {}", if state.cheats_enabled { "on" } else { "off" });
            Effect::Redraw
        }
        Action::Search => {
            let center = state.player;
            search::search(&mut state.board, center.y, center.x, dice);
            Effect::Redraw
        }
        Action::Quit => {
            state.running = false;
            Effect::Quit
        }
        Action::Noop => Effect::Redraw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{Cell, Position};
    use crate::test_support::{FixedDice, empty_state, place_player, state_with_treasure};

    #[test]
    fn test_input_dispatch_table() {
        assert_eq!(Action::from(Input::MoveWest), Action::Move { dy: 0, dx: -1 });
        assert_eq!(Action::from(Input::MoveSouth), Action::Move { dy: 1, dx: 0 });
        assert_eq!(Action::from(Input::MoveNorth), Action::Move { dy: -1, dx: 0 });
        assert_eq!(Action::from(Input::MoveEast), Action::Move { dy: 0, dx: 1 });
        assert_eq!(Action::from(Input::ToggleCheats), Action::ToggleCheats);
        assert_eq!(Action::from(Input::Search), Action::Search);
        assert_eq!(Action::from(Input::Quit), Action::Quit);
        assert_eq!(Action::from(Input::Other), Action::Noop);
    }

    #[test]
    fn test_move_updates_position() {
        let mut state = empty_state();
        let mut dice = FixedDice::always(0);
        place_player(&mut state, 5, 5);

        assert_eq!(update(&mut state, Input::MoveEast.into(), &mut dice), Effect::Redraw);
        assert_eq!(state.player, Position::new(5, 6));
        update(&mut state, Input::MoveSouth.into(), &mut dice);
        assert_eq!(state.player, Position::new(6, 6));
        update(&mut state, Input::MoveWest.into(), &mut dice);
        update(&mut state, Input::MoveNorth.into(), &mut dice);
        assert_eq!(state.player, Position::new(5, 5));
    }

    #[test]
    fn test_toggle_cheats_flips_flag() {
        let mut state = empty_state();
        let mut dice = FixedDice::always(0);
        update(&mut state, Action::ToggleCheats, &mut dice);
        assert!(state.cheats_enabled);
        update(&mut state, Action::ToggleCheats, &mut dice);
        assert!(!state.cheats_enabled);
    }

    #[test]
    fn test_search_uses_player_position() {
        let mut state = state_with_treasure(10, 10);
        let mut dice = FixedDice::always(0);

        update(&mut state, Action::Search, &mut dice);
        assert_eq!(state.board.cell_at(10, 10), Ok(Cell::HiddenTreasure));

        place_player(&mut state, 9, 11);
        update(&mut state, Action::Search, &mut dice);
        assert_eq!(state.board.cell_at(10, 10), Ok(Cell::VisibleTreasure));
        assert_eq!(state.treasures_found(), 1);
    }

    #[test]
    fn test_quit_stops_running() {
        let mut state = empty_state();
        let mut dice = FixedDice::always(0);
        assert_eq!(update(&mut state, Action::Quit, &mut dice), Effect::Quit);
        assert!(!state.running);
    }

    #[test]
    fn test_noop_changes_nothing() {
        let mut state = state_with_treasure(0, 0);
        let before = state.clone();
        let mut dice = FixedDice::always(0);
        assert_eq!(update(&mut state, Action::Noop, &mut dice), Effect::Redraw);
        assert_eq!(state, before);
        assert_eq!(dice.rolls_taken(), 0);
    }
}
