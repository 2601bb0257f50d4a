use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Input;

/// Block until the terminal produces something the game cares about.
///
/// Returns `None` when the event stream fails, which the controller treats
/// as end of input.
pub fn read_input() -> Option<Input> {
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Terminal event read failed: {}", e);
                return None;
            }
        };
        if let Some(input) = map_event(event) {
            return Some(input);
        }
    }
}

/// Translate one crossterm event. `None` means "ignore and keep reading".
pub fn map_event(event: Event) -> Option<Input> {
    match event {
        Event::Key(key_event) => {
            log::trace!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        // Redraw so the size check runs against the new dimensions
        Event::Resize(_, _) => Some(Input::Other),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<Input> {
    // Enhanced keyboards also report releases and repeats
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let input = match (key_event.modifiers, key_event.code) {
        // Ctrl+C quits (raw mode swallows SIGINT)
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Input::Quit,
        (_, KeyCode::Char('h')) | (_, KeyCode::Left) => Input::MoveWest,
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => Input::MoveSouth,
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => Input::MoveNorth,
        (_, KeyCode::Char('l')) | (_, KeyCode::Right) => Input::MoveEast,
        (_, KeyCode::Char('c')) => Input::ToggleCheats,
        (_, KeyCode::Char('s')) => Input::Search,
        (_, KeyCode::Char('q')) => Input::Quit,
        _ => Input::Other,
    };
    Some(input)
}
