//! # Sign In Component
//!
//! Username-or-email plus password. The credential check runs in a spawned
//! task with simulated latency, so the form renders a pending indicator and
//! ignores re-submits until the result lands.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;

use crate::core::state::AuthState;
use crate::tui::components::text_field::TextField;
use crate::tui::event::TuiEvent;

const FOCUS_IDENTIFIER: usize = 0;
const FOCUS_PASSWORD: usize = 1;
const FOCUS_FORGOT: usize = 2;
const FOCUS_SIGN_UP: usize = 3;
const FOCUS_COUNT: usize = 4;

pub enum SignInEvent {
    Submit { identifier: String, password: String },
    ForgotPassword,
    SignUp,
    Cancel,
}

pub struct SignInState {
    pub identifier: TextField,
    pub password: TextField,
    pub focus: usize,
}

impl Default for SignInState {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInState {
    pub fn new() -> Self {
        Self {
            identifier: TextField::new("Username/Email").with_placeholder("name@example.com"),
            password: TextField::masked("Password"),
            focus: FOCUS_IDENTIFIER,
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<SignInEvent> {
        match event {
            TuiEvent::Escape => return Some(SignInEvent::Cancel),
            TuiEvent::Submit => {
                return match self.focus {
                    FOCUS_FORGOT => Some(SignInEvent::ForgotPassword),
                    FOCUS_SIGN_UP => Some(SignInEvent::SignUp),
                    _ => Some(SignInEvent::Submit {
                        identifier: self.identifier.value.clone(),
                        password: self.password.value.clone(),
                    }),
                };
            }
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % FOCUS_COUNT;
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.focus = (self.focus + FOCUS_COUNT - 1) % FOCUS_COUNT;
            }
            TuiEvent::InputChar(_) | TuiEvent::Backspace => match self.focus {
                FOCUS_IDENTIFIER => {
                    self.identifier.handle_event(event);
                }
                FOCUS_PASSWORD => {
                    self.password.handle_event(event);
                }
                _ => {}
            },
            _ => {}
        }
        None
    }
}

/// Transient render wrapper; pending/error come from the app's auth state.
pub struct SignIn<'a> {
    state: &'a SignInState,
    auth: &'a AuthState,
}

impl<'a> SignIn<'a> {
    pub fn new(state: &'a SignInState, auth: &'a AuthState) -> Self {
        Self { state, auth }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let s = self.state;
        let link = |label: &'static str, focused: bool| {
            let style = if focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(label, style))
        };

        let mut lines = vec![
            Line::from(Span::styled(
                "Welcome back",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
            s.identifier.line(s.focus == FOCUS_IDENTIFIER, None),
            s.password.line(s.focus == FOCUS_PASSWORD, None),
            Line::raw(""),
        ];

        if self.auth.sign_in_pending {
            lines.push(Line::from(Span::styled(
                "Signing in...",
                Style::default().fg(Color::Yellow),
            )));
        } else if let Some(error) = &self.auth.sign_in_error {
            lines.push(Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::raw(""));
        }

        lines.push(Line::raw(""));
        lines.push(link("Forgot password?", s.focus == FOCUS_FORGOT));
        lines.push(link("Create an account", s.focus == FOCUS_SIGN_UP));

        let block = Block::bordered()
            .title(" Sign In ")
            .padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_carries_entered_credentials() {
        let mut state = SignInState::new();
        for c in "kasun".chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
        state.handle_event(&TuiEvent::FocusNext);
        for c in "secret".chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
        match state.handle_event(&TuiEvent::Submit) {
            Some(SignInEvent::Submit {
                identifier,
                password,
            }) => {
                assert_eq!(identifier, "kasun");
                assert_eq!(password, "secret");
            }
            _ => panic!("expected Submit"),
        }
    }

    #[test]
    fn test_enter_on_links_routes_away() {
        let mut state = SignInState::new();
        state.focus = FOCUS_FORGOT;
        assert!(matches!(
            state.handle_event(&TuiEvent::Submit),
            Some(SignInEvent::ForgotPassword)
        ));
        state.focus = FOCUS_SIGN_UP;
        assert!(matches!(
            state.handle_event(&TuiEvent::Submit),
            Some(SignInEvent::SignUp)
        ));
    }
}
