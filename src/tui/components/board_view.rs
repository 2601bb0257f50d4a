//! # BoardView Component
//!
//! Draws the 80×24 grid, one terminal cell per board cell, using the glyph
//! rules from `core::render`.
//!
//! The view is stateless: it borrows the `GameState` for one frame and
//! builds a `Paragraph` of 24 lines. Styling is purely cosmetic; the symbols
//! alone carry the meaning, so the grid reads the same on a monochrome
//! terminal.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::board::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::core::render::{Glyph, glyph_at};
use crate::core::state::GameState;
use crate::tui::component::Component;

pub struct BoardView<'a> {
    pub state: &'a GameState,
}

impl<'a> BoardView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    fn line(&self, y: usize) -> Line<'static> {
        let spans: Vec<Span<'static>> = (0..BOARD_WIDTH)
            .map(|x| {
                let glyph = glyph_at(self.state, y, x);
                Span::styled(glyph.symbol().to_string(), glyph_style(glyph))
            })
            .collect();
        Line::from(spans)
    }
}

impl Component for BoardView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = (0..BOARD_HEIGHT).map(|y| self.line(y)).collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn glyph_style(glyph: Glyph) -> Style {
    match glyph {
        Glyph::Player => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Glyph::VisibleTreasure => Style::default().fg(Color::Green),
        Glyph::HiddenTreasure => Style::default().fg(Color::DarkGray),
        Glyph::Blank => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Cell;
    use crate::test_support::{empty_state, place_player, state_with_treasure};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &GameState) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| BoardView::new(state).render(f, f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_player_drawn_at_position() {
        let mut state = empty_state();
        place_player(&mut state, 23, 79);
        let buffer = render(&state);
        assert_eq!(buffer[(79, 23)].symbol(), "@");
        assert_eq!(buffer[(0, 0)].symbol(), " ");
    }

    #[test]
    fn test_hidden_treasure_drawn_only_with_cheats() {
        let mut state = state_with_treasure(2, 10);
        assert_eq!(render(&state)[(10, 2)].symbol(), " ");
        state.cheats_enabled = true;
        assert_eq!(render(&state)[(10, 2)].symbol(), "$");
    }

    #[test]
    fn test_visible_treasure_drawn() {
        let mut state = empty_state();
        state.board.set(4, 6, Cell::VisibleTreasure).unwrap();
        let buffer = render(&state);
        assert_eq!(buffer[(6, 4)].symbol(), "%");
        assert_eq!(buffer[(6, 4)].fg, Color::Green);
    }

    #[test]
    fn test_player_hides_treasure_under_it() {
        let mut state = state_with_treasure(0, 0);
        state.cheats_enabled = true;
        assert_eq!(render(&state)[(0, 0)].symbol(), "@");
    }
}
