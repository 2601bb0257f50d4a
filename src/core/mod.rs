//! # Core Game Logic
//!
//! This module contains the treasure hunt itself.
//! It knows nothing about any specific terminal library.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Board + Position     │
//!                    │  • Search (dice rolls)  │
//!                    │  • GameState            │
//!                    │  • Action → update()    │
//!                    │  • Glyph render rules   │
//!                    └───────────┬─────────────┘
//!                                │ Surface trait
//!                    ┌───────────▼─────────────┐
//!                    │      TUI Adapter        │
//!                    │ (ratatui + crossterm)   │
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`board`]: The 80×24 `Board` of `Cell`s and the player `Position`
//! - [`search`]: Neighborhood search and the `Dice` random-source trait
//! - [`state`]: The `GameState` struct, all game data in one place
//! - [`action`]: `Input`, `Action` and the `update()` reducer
//! - [`controller`]: The input → update → redraw loop over a `Surface`
//! - [`render`]: Which glyph each cell shows
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod search;
pub mod state;
