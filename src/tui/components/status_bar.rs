//! # StatusBar Component
//!
//! One line under the grid showing progress and key hints.
//!
//! Only drawn when the terminal has a spare row below the 24-row board, so
//! an exactly 80×24 terminal shows nothing but the grid.
//!
//! ## Conditional Formatting
//!
//! 1. **Cheats on**: `"Treasures found: 3 | cheats ON | h/j/k/l move  s search  c cheats  q quit"`
//! 2. **Default**: `"Treasures found: 3 | h/j/k/l move  s search  c cheats  q quit"`

use crate::core::state::GameState;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const KEY_HINT: &str = "h/j/k/l move  s search  c cheats  q quit";

/// Props are copied out of `GameState` so the bar can be built and tested
/// without a full game.
pub struct StatusBar {
    pub treasures_found: usize,
    pub cheats_enabled: bool,
}

impl StatusBar {
    pub fn new(treasures_found: usize, cheats_enabled: bool) -> Self {
        Self {
            treasures_found,
            cheats_enabled,
        }
    }

    pub fn from_state(state: &GameState) -> Self {
        Self::new(state.treasures_found(), state.cheats_enabled)
    }

    fn text(&self) -> String {
        if self.cheats_enabled {
            format!(
                "Treasures found: {} | cheats ON | {}",
                self.treasures_found, KEY_HINT
            )
        } else {
            format!("Treasures found: {} | {}", self.treasures_found, KEY_HINT)
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::DarkGray);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered_text(bar: &mut StatusBar) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_status_bar_default() {
        let text = rendered_text(&mut StatusBar::new(0, false));
        assert!(text.starts_with("Treasures found: 0 | h/j/k/l move"));
        assert!(!text.contains("cheats ON"));
    }

    #[test]
    fn test_status_bar_with_cheats() {
        let text = rendered_text(&mut StatusBar::new(12, true));
        assert!(text.contains("Treasures found: 12"));
        assert!(text.contains("cheats ON"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_status_bar_from_state() {
        let mut state = crate::test_support::state_with_treasure(1, 1);
        state.board.reveal(1, 1).unwrap();
        state.cheats_enabled = true;
        let bar = StatusBar::from_state(&state);
        assert_eq!(bar.treasures_found, 1);
        assert!(bar.cheats_enabled);
    }
}
