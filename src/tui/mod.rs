//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the board,
//! and translates keyboard events into `core::action::Input` values.
//!
//! This is the only module that knows about ratatui and crossterm. It plugs
//! into the game through the `core::controller::Surface` trait.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on `crossterm::event::read` and
//! draws exactly once per input. Resize events come through as
//! `Input::Other`, which redraws and re-runs the size check.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::{self, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::DefaultTerminal;

use crate::core::action::Input;
use crate::core::board::Board;
use crate::core::config::ResolvedConfig;
use crate::core::controller::{Surface, run_loop};
use crate::core::search::RngDice;
use crate::core::state::GameState;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// The real terminal as a controller surface.
pub struct TerminalSurface {
    terminal: DefaultTerminal,
}

impl TerminalSurface {
    pub fn new(terminal: DefaultTerminal) -> Self {
        Self { terminal }
    }
}

impl Surface for TerminalSurface {
    fn next_input(&mut self) -> Option<Input> {
        event::read_input()
    }

    fn draw(&mut self, state: &GameState) -> io::Result<()> {
        self.terminal.draw(|f| ui::draw_ui(f, state))?;
        Ok(())
    }
}

/// Build a game from `config`. The seed is always known afterwards, so a
/// board can be replayed from the log.
pub fn new_game(config: &ResolvedConfig) -> (GameState, RngDice<StdRng>, u64) {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut state = GameState::new(Board::generate(&mut rng));
    state.cheats_enabled = config.cheats;
    (state, RngDice(rng), seed)
}

pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let (mut state, mut dice, seed) = new_game(config);
    info!(
        "New board (seed {}): {} hidden treasures",
        seed,
        state.board.count(crate::core::board::Cell::HiddenTreasure)
    );

    let terminal = ratatui::try_init()?;
    let mut surface = TerminalSurface::new(terminal);

    let result = match TerminalModeGuard::new() {
        Ok(_guard) => run_loop(&mut state, &mut dice, &mut surface),
        Err(e) => Err(e),
    };

    ratatui::restore();
    info!("Game over: {} treasures found", state.treasures_found());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(seed: Option<u64>, cheats: bool) -> ResolvedConfig {
        ResolvedConfig {
            seed,
            cheats,
            log_file: PathBuf::from("unused.log"),
            log_level: log::LevelFilter::Off,
        }
    }

    #[test]
    fn test_new_game_is_reproducible_from_seed() {
        let (a, _, seed_a) = new_game(&config(Some(5), false));
        let (b, _, seed_b) = new_game(&config(Some(5), false));
        assert_eq!(seed_a, 5);
        assert_eq!(seed_b, 5);
        assert_eq!(a.board, b.board);
    }

    #[test]
    fn test_new_game_applies_cheats_flag() {
        let (state, _, _) = new_game(&config(Some(1), true));
        assert!(state.cheats_enabled);
        assert!(state.running);
    }
}
