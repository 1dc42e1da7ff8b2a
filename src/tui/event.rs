use crossterm::event::{self, Event, KeyCode, KeyModifiers};

/// TUI-specific input events
pub enum TuiEvent {
    // Global chords (work on every screen)
    ForceQuit,  // Ctrl+C
    ToggleChat, // Ctrl+A opens/closes the assistant
    GoHome,     // Ctrl+H resets navigation to the landing screen

    // Keys interpreted per screen/component
    Escape,
    Submit,
    FocusNext, // Tab
    FocusPrev, // Shift+Tab
    InputChar(char),
    Backspace,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event with the given timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                    (KeyModifiers::CONTROL, KeyCode::Char('a')) => Some(TuiEvent::ToggleChat),
                    (KeyModifiers::CONTROL, KeyCode::Char('h')) => Some(TuiEvent::GoHome),
                    (_, KeyCode::BackTab) => Some(TuiEvent::FocusPrev),
                    (_, KeyCode::Tab) => Some(TuiEvent::FocusNext),
                    (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                    (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                    (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                    (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                    (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                    (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                    (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                    (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                    _ => None,
                }
            }
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
