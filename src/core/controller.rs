//! # Game Controller
//!
//! The blocking loop: read one input, apply it, redraw, repeat.
//!
//! ```text
//! draw ─► next_input ─┬─ None ───────────► stop
//!  ▲                  └─ Some(input) ─► update ─┬─ Redraw ─┐
//!  └────────────────────────────────────────────│──────────┘
//!                                               └─ Quit ───► stop
//! ```
//!
//! The loop only knows the [`Surface`] trait, so the terminal adapter and
//! scripted test surfaces are interchangeable.

use std::io;

use log::{debug, info};

use crate::core::action::{Action, Effect, Input, update};
use crate::core::search::Dice;
use crate::core::state::GameState;

/// A display/input surface the controller can drive.
pub trait Surface {
    /// Block until the next input symbol. `None` means the input stream is
    /// closed.
    fn next_input(&mut self) -> Option<Input>;

    /// Draw a full frame of `state`.
    fn draw(&mut self, state: &GameState) -> io::Result<()>;
}

/// Run until the player quits or the surface runs out of input.
pub fn run_loop(state: &mut GameState, dice: &mut dyn Dice, surface: &mut impl Surface) -> io::Result<()> {
    surface.draw(state)?;

    while state.running {
        let Some(input) = surface.next_input() else {
            info!("Input stream closed, stopping");
            break;
        };
        debug!("Input: {:?}", input);

        match update(state, Action::from(input), dice) {
            Effect::Redraw => surface.draw(state)?,
            Effect::Quit => {
                info!("Player quit");
                break;
            }
        }
    }
    Ok(())
}
