use log::debug;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Paragraph;

use crate::core::board::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::core::render::{GridView, TOO_SMALL_MESSAGE};
use crate::core::state::GameState;
use crate::tui::component::Component;
use crate::tui::components::{BoardView, StatusBar};

pub fn draw_ui(frame: &mut Frame, state: &GameState) {
    let area = frame.area();

    match GridView::for_area(area.width, area.height) {
        GridView::TooSmall => {
            debug!("Terminal {}x{} too small for board", area.width, area.height);
            frame.render_widget(Paragraph::new(TOO_SMALL_MESSAGE), area);
        }
        GridView::Grid => {
            let (board_area, status_area) = split_areas(area);
            BoardView::new(state).render(frame, board_area);
            if let Some(status_area) = status_area {
                StatusBar::from_state(state).render(frame, status_area);
            }
        }
    }
}

/// Board in the top-left corner; a status line under it when a spare row exists.
fn split_areas(area: Rect) -> (Rect, Option<Rect>) {
    use Constraint::{Length, Min};
    let [columns, _] = Layout::horizontal([Length(BOARD_WIDTH as u16), Min(0)]).areas(area);
    let [board_area, rest] = Layout::vertical([Length(BOARD_HEIGHT as u16), Min(0)]).areas(area);
    let board_area = board_area.intersection(columns);

    if rest.height == 0 {
        (board_area, None)
    } else {
        (board_area, Some(Rect { height: 1, ..rest }))
    }
}
