//! # TUI Components
//!
//! Both components are stateless and props-based: they receive everything
//! they draw as struct fields and hold no state between frames.
//!
//! - `BoardView`: the 80×24 grid
//! - `StatusBar`: progress and key hints, drawn only when there is room
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── board_view.rs   (Grid of glyphs)
//! └── status_bar.rs   (Line under the grid)
//! ```

pub mod board_view;
pub mod status_bar;
pub use board_view::BoardView;
pub use status_bar::StatusBar;
